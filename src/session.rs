//! Session
//!
//! The one object that knows whether the user is logged in. Created by the
//! app shell and handed to children through `AppContext`; nothing else
//! touches `sessionStorage`.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::{self, CancelToken};
use crate::config::GuideConfig;
use crate::guard::AuthStatus;

/// `sessionStorage` key holding the auth flag
pub const AUTH_FLAG_KEY: &str = "isAuthenticated";

/// Auth status plus a counter bumped by every explicit login or logout.
/// A probe only lands if no such change happened while it was in flight.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct SessionState {
    status: AuthStatus,
    epoch: u32,
}

impl SessionState {
    fn new(status: AuthStatus) -> Self {
        Self { status, epoch: 0 }
    }

    fn set(&mut self, status: AuthStatus) {
        self.status = status;
        self.epoch = self.epoch.wrapping_add(1);
    }

    /// Apply a probe answer started at `epoch`. Returns whether it landed.
    fn settle_probe(&mut self, epoch: u32, confirmed: bool) -> bool {
        if epoch != self.epoch {
            return false;
        }
        self.status = if confirmed { AuthStatus::Authenticated } else { AuthStatus::Anonymous };
        true
    }
}

#[derive(Clone, Copy)]
pub struct Session {
    state: RwSignal<SessionState>,
}

impl Session {
    /// Start from the stored flag. A missing flag stays `Unknown` until the probe answers.
    pub fn restore() -> Self {
        let stored = read_flag();
        log::debug!("[AUTH] Restored session flag: {}", stored);
        Self {
            state: RwSignal::new(SessionState::new(initial_status(stored))),
        }
    }

    pub fn status(&self) -> AuthStatus {
        self.state.with(|s| s.status)
    }

    pub fn is_authenticated(&self) -> bool {
        self.status() == AuthStatus::Authenticated
    }

    pub fn mark_authenticated(&self) {
        write_flag(true);
        self.state.update(|s| s.set(AuthStatus::Authenticated));
    }

    pub fn clear(&self) {
        write_flag(false);
        self.state.update(|s| s.set(AuthStatus::Anonymous));
    }

    /// Ask the backend whether the session cookie is still valid.
    /// The answer is dropped if the user logged in or out meanwhile.
    pub fn probe(self, config: GuideConfig) {
        let epoch = self.state.with_untracked(|s| s.epoch);
        spawn_local(async move {
            let cancel = CancelToken::new();
            let result = api::check_auth(&config, &cancel).await;
            if let Err(e) = &result {
                log::info!("[AUTH] No active session: {}", e);
            }

            let confirmed = result.is_ok();
            let landed = self
                .state
                .try_update(|s| s.settle_probe(epoch, confirmed))
                .unwrap_or(false);
            if landed {
                write_flag(confirmed);
                log::info!("[AUTH] Session probe settled, authenticated: {}", confirmed);
            } else {
                log::debug!("[AUTH] Session changed during probe, result ignored");
            }
        });
    }
}

fn initial_status(stored_flag: bool) -> AuthStatus {
    if stored_flag {
        AuthStatus::Authenticated
    } else {
        AuthStatus::Unknown
    }
}

fn parse_flag(raw: Option<String>) -> bool {
    raw.as_deref() == Some("true")
}

fn storage() -> Option<web_sys::Storage> {
    web_sys::window()?.session_storage().ok().flatten()
}

fn read_flag() -> bool {
    parse_flag(storage().and_then(|s| s.get_item(AUTH_FLAG_KEY).ok().flatten()))
}

fn write_flag(value: bool) {
    let Some(storage) = storage() else {
        log::warn!("[AUTH] sessionStorage unavailable, flag not persisted");
        return;
    };
    let result = if value {
        storage.set_item(AUTH_FLAG_KEY, "true")
    } else {
        storage.remove_item(AUTH_FLAG_KEY)
    };
    if let Err(e) = result {
        log::warn!("[AUTH] Failed to persist session flag: {:?}", e);
    }
}
