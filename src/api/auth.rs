//! Auth Endpoints
//!
//! Login, registration, session probe and logout. All but registration
//! send the session cookie.

use super::cancel::CancelToken;
use super::http::{self, Method};
use crate::config::GuideConfig;
use crate::error::{ApiError, ApiResult};
use crate::models::{LoginRequest, RegisterRequest};

fn encode<T: serde::Serialize>(body: &T) -> ApiResult<String> {
    serde_json::to_string(body).map_err(|e| ApiError::Decode(e.to_string()))
}

/// `POST /login/`, returns the server message on success
pub async fn login(config: &GuideConfig, cancel: &CancelToken, request: &LoginRequest<'_>) -> ApiResult<String> {
    let url = config.endpoint("login");
    let body = encode(request)?;
    let response = cancel.run(http::send(Method::Post, &url, Some(body), true)).await??;
    http::parse_message(&response, "Logged in successfully!", "Login failed")
}

/// `POST /register/`, returns the server message on success
pub async fn register(config: &GuideConfig, cancel: &CancelToken, request: &RegisterRequest<'_>) -> ApiResult<String> {
    let url = config.endpoint("register");
    let body = encode(request)?;
    let response = cancel.run(http::send(Method::Post, &url, Some(body), false)).await??;
    http::parse_message(&response, "Registered successfully!", "Registration failed")
}

/// `GET /check_auth/`; any 2xx means the cookie is still good
pub async fn check_auth(config: &GuideConfig, cancel: &CancelToken) -> ApiResult<()> {
    let url = config.endpoint("check_auth");
    let response = cancel.run(http::send(Method::Get, &url, None, true)).await??;
    if response.is_success() {
        Ok(())
    } else {
        Err(ApiError::Status { status: response.status, message: "Not authenticated".to_string() })
    }
}

/// `POST /logout/`. The response body is ignored.
pub async fn logout(config: &GuideConfig, cancel: &CancelToken) -> ApiResult<()> {
    let url = config.endpoint("logout");
    let response = cancel.run(http::send(Method::Post, &url, None, true)).await??;
    if !response.is_success() {
        log::warn!("[AUTH] Logout returned status {}", response.status);
    }
    Ok(())
}
