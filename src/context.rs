//! Application Context
//!
//! Services provided via Leptos Context API.

use leptos::prelude::*;

use crate::components::Toasts;
use crate::config::GuideConfig;
use crate::session::Session;

/// App-wide handles provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Build-time configuration
    config: StoredValue<GuideConfig>,
    /// Login state owned by the shell
    pub session: Session,
    /// Notification queue
    pub toasts: Toasts,
}

impl AppContext {
    pub fn new(config: GuideConfig, session: Session, toasts: Toasts) -> Self {
        Self {
            config: StoredValue::new(config),
            session,
            toasts,
        }
    }

    pub fn config(&self) -> GuideConfig {
        self.config.get_value()
    }
}

/// Get the app context
pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}
