//! Backend API Bindings
//!
//! Wrappers over the guide's REST endpoints, organized by domain.
//! Every call takes a `CancelToken` owned by the calling view.

mod auth;
mod cancel;
mod destinations;
mod http;

pub use auth::*;
pub use cancel::CancelToken;
pub use destinations::*;
