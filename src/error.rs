//! Error Types
//!
//! Failures crossing the client/server boundary. `Display` text is what
//! the views show.

use thiserror::Error;

pub type ApiResult<T> = Result<T, ApiError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// Fetch rejected before a response arrived
    #[error("Server error: {0}")]
    Network(String),

    /// Non-2xx response; `message` is the server `error` field or a fallback
    #[error("{message}")]
    Status { status: u16, message: String },

    /// Body was not the JSON we expected
    #[error("Invalid response from server")]
    Decode(String),

    /// The owning view went away before the request finished
    #[error("Request cancelled")]
    Cancelled,
}

impl ApiError {
    pub fn is_cancelled(&self) -> bool {
        matches!(self, ApiError::Cancelled)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_is_user_facing() {
        assert_eq!(ApiError::Network("Failed to fetch".into()).to_string(), "Server error: Failed to fetch");
        assert_eq!(
            ApiError::Status { status: 401, message: "Invalid credentials".into() }.to_string(),
            "Invalid credentials"
        );
        assert_eq!(ApiError::Decode("eof".into()).to_string(), "Invalid response from server");
        assert!(ApiError::Cancelled.is_cancelled());
    }
}
