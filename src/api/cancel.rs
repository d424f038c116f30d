//! Request Cancellation
//!
//! A token shared between a view and the requests it starts. Cancelling
//! drops the in-flight future, which aborts the underlying `fetch`.

use std::future::Future;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

use futures::future::{AbortHandle, Abortable};
use leptos::prelude::on_cleanup;

use crate::error::{ApiError, ApiResult};

#[derive(Debug, Default)]
struct TokenState {
    cancelled: AtomicBool,
    handles: Mutex<Vec<AbortHandle>>,
}

#[derive(Clone, Debug, Default)]
pub struct CancelToken {
    state: Arc<TokenState>,
}

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    /// Token cancelled when the current reactive owner is cleaned up
    /// (view unmounted or effect re-run).
    pub fn for_view() -> Self {
        let token = Self::new();
        let on_teardown = token.clone();
        on_cleanup(move || on_teardown.cancel());
        token
    }

    pub fn cancel(&self) {
        self.state.cancelled.store(true, Ordering::SeqCst);
        if let Ok(mut handles) = self.state.handles.lock() {
            for handle in handles.drain(..) {
                handle.abort();
            }
        }
    }

    pub fn is_cancelled(&self) -> bool {
        self.state.cancelled.load(Ordering::SeqCst)
    }

    /// Drive `fut` until it completes or the token is cancelled
    pub async fn run<F: Future>(&self, fut: F) -> ApiResult<F::Output> {
        if self.is_cancelled() {
            return Err(ApiError::Cancelled);
        }
        let (handle, registration) = AbortHandle::new_pair();
        if let Ok(mut handles) = self.state.handles.lock() {
            handles.push(handle.clone());
        }
        // cancel() may have drained the list before our push
        if self.is_cancelled() {
            handle.abort();
        }
        Abortable::new(fut, registration)
            .await
            .map_err(|_| ApiError::Cancelled)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use futures::future::{self, FutureExt};

    #[test]
    fn test_completes_when_not_cancelled() {
        let token = CancelToken::new();
        assert_eq!(block_on(token.run(async { 7 })), Ok(7));
        assert!(!token.is_cancelled());
    }

    #[test]
    fn test_cancelled_token_short_circuits() {
        let token = CancelToken::new();
        token.cancel();
        assert_eq!(block_on(token.run(future::pending::<()>())), Err(ApiError::Cancelled));
    }

    #[test]
    fn test_cancel_aborts_pending_request() {
        let token = CancelToken::new();
        let mut pending = Box::pin(token.run(future::pending::<u32>()));

        assert!((&mut pending).now_or_never().is_none());
        token.clone().cancel();
        assert_eq!(block_on(pending), Err(ApiError::Cancelled));
    }

    #[test]
    fn test_clones_share_state() {
        let token = CancelToken::new();
        let view_side = token.clone();
        view_side.cancel();
        assert!(token.is_cancelled());
    }
}
