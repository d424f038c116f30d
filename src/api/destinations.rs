//! Destination Endpoints

use super::cancel::CancelToken;
use super::http::{self, HttpResponse, Method};
use crate::config::GuideConfig;
use crate::error::{ApiError, ApiResult};
use crate::models::Destination;

/// `GET /destinations/`
pub async fn list_destinations(config: &GuideConfig, cancel: &CancelToken) -> ApiResult<Vec<Destination>> {
    let url = config.endpoint("destinations");
    let response = cancel.run(http::send(Method::Get, &url, None, false)).await??;
    decode_destinations(&response)
}

fn decode_destinations(response: &HttpResponse) -> ApiResult<Vec<Destination>> {
    if !response.is_success() {
        return Err(ApiError::Status {
            status: response.status,
            message: "Failed to load data.".to_string(),
        });
    }
    serde_json::from_str(&response.body).map_err(|e| ApiError::Decode(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_list() {
        let res = HttpResponse {
            status: 200,
            body: r#"[{"id": "Salem", "name": "Salem", "region": "West"}]"#.into(),
        };
        let list = decode_destinations(&res).unwrap();
        assert_eq!(list.len(), 1);
        assert_eq!(list[0].region, "West");
    }

    #[test]
    fn test_error_status_is_reported() {
        let res = HttpResponse { status: 503, body: String::new() };
        assert_eq!(
            decode_destinations(&res),
            Err(ApiError::Status { status: 503, message: "Failed to load data.".into() })
        );
    }

    #[test]
    fn test_object_instead_of_list_is_decode_error() {
        let res = HttpResponse { status: 200, body: r#"{"error": "oops"}"#.into() };
        assert!(matches!(decode_destinations(&res), Err(ApiError::Decode(_))));
    }
}
