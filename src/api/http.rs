//! Fetch Transport
//!
//! Thin wrapper over `window.fetch` with an `AbortController` tied to the
//! lifetime of the returned future.

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{AbortController, Request, RequestCredentials, RequestInit, RequestMode, Response};

use crate::error::{ApiError, ApiResult};
use crate::models::MessageBody;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Method {
    Get,
    Post,
}

impl Method {
    fn as_str(self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub(crate) struct HttpResponse {
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Aborts the fetch if the future is dropped before the body is read
struct AbortOnDrop(Option<AbortController>);

impl AbortOnDrop {
    fn disarm(mut self) {
        self.0 = None;
    }
}

impl Drop for AbortOnDrop {
    fn drop(&mut self) {
        if let Some(controller) = self.0.take() {
            log::debug!("[API] Aborting in-flight request");
            controller.abort();
        }
    }
}

fn js_error(value: JsValue) -> ApiError {
    let message = value
        .dyn_ref::<js_sys::Error>()
        .map(|e| String::from(e.message()))
        .or_else(|| value.as_string())
        .unwrap_or_else(|| format!("{:?}", value));
    ApiError::Network(message)
}

/// Issue one request. `credentials` includes the session cookie.
pub(crate) async fn send(
    method: Method,
    url: &str,
    json_body: Option<String>,
    credentials: bool,
) -> ApiResult<HttpResponse> {
    let window = web_sys::window().ok_or_else(|| ApiError::Network("window unavailable".into()))?;
    let controller = AbortController::new().map_err(js_error)?;

    let init = RequestInit::new();
    init.set_method(method.as_str());
    init.set_mode(RequestMode::Cors);
    init.set_signal(Some(&controller.signal()));
    if credentials {
        init.set_credentials(RequestCredentials::Include);
    }
    if let Some(body) = &json_body {
        init.set_body(&JsValue::from_str(body));
    }

    let request = Request::new_with_str_and_init(url, &init).map_err(js_error)?;
    if json_body.is_some() {
        request
            .headers()
            .set("Content-Type", "application/json")
            .map_err(js_error)?;
    }

    log::debug!("[API] {} {}", method.as_str(), url);
    let guard = AbortOnDrop(Some(controller));

    let response: Response = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(js_error)?
        .dyn_into()
        .map_err(js_error)?;
    let text = JsFuture::from(response.text().map_err(js_error)?)
        .await
        .map_err(js_error)?;
    guard.disarm();

    let status = response.status();
    log::debug!("[API] {} {} -> {}", method.as_str(), url, status);
    Ok(HttpResponse { status, body: text.as_string().unwrap_or_default() })
}

/// Read a `{message}` / `{error}` envelope. Empty bodies count as `{}`.
pub(crate) fn parse_message(response: &HttpResponse, ok_fallback: &str, err_fallback: &str) -> ApiResult<String> {
    let body: MessageBody = if response.body.trim().is_empty() {
        MessageBody::default()
    } else {
        serde_json::from_str(&response.body).map_err(|e| ApiError::Decode(e.to_string()))?
    };

    if response.is_success() {
        Ok(body.message.unwrap_or_else(|| ok_fallback.to_string()))
    } else {
        Err(ApiError::Status {
            status: response.status,
            message: body.error.unwrap_or_else(|| err_fallback.to_string()),
        })
    }
}
