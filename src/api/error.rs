//! HTTP error responses.
//!
//! Every failure that reaches a client is a `500` with a `{ code, message }` body.
//! Dataset problems never get here; the loader absorbs them. What does get here
//! is a crate [`Error`] returned by a handler, or a panic caught by the router.

use crate::errors::Error;
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use std::any::Any;
use tracing::error;

/// Code reported for panics and other failures without a more specific one
pub const INTERNAL_ERROR: &str = "INTERNAL_ERROR";

/// JSON body of an error response
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    /// Machine-readable error code
    pub code: String,
    /// Human-readable description
    pub message: String,
}

/// An error on its way out of a handler
#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
    body: ErrorBody,
}

impl ApiError {
    /// A `500` with the given code and message.
    pub fn internal(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            body: ErrorBody {
                code: code.into(),
                message: message.into(),
            },
        }
    }
}

impl From<Error> for ApiError {
    fn from(err: Error) -> Self {
        Self::internal(err.code(), err.to_string())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        error!(
            "Request failed with {}: [{}] {}",
            self.status, self.body.code, self.body.message
        );
        (self.status, Json(self.body)).into_response()
    }
}

/// Turns a handler panic into the regular error response.
#[allow(clippy::needless_pass_by_value)]
pub fn panic_response(panic: Box<dyn Any + Send + 'static>) -> Response {
    let message = panic
        .downcast_ref::<String>()
        .cloned()
        .or_else(|| panic.downcast_ref::<&str>().map(|s| (*s).to_string()))
        .unwrap_or_else(|| "Internal server error".to_string());
    ApiError::internal(INTERNAL_ERROR, message).into_response()
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;
    use http_body_util::BodyExt;

    async fn body_of(response: Response) -> ErrorBody {
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_crate_error_maps_to_500_with_code() {
        let err = Error::DatasetParse {
            dataset: "product charges".to_string(),
            message: "trailing comma".to_string(),
        };
        let response = ApiError::from(err).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let body = body_of(response).await;
        assert_eq!(body.code, "DATASET_PARSE_ERROR");
        assert_eq!(
            body.message,
            "Failed to parse dataset 'product charges': trailing comma"
        );
    }

    #[tokio::test]
    async fn test_panic_payloads_become_messages() {
        let response = panic_response(Box::new("index out of bounds"));
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body = body_of(response).await;
        assert_eq!(body.code, INTERNAL_ERROR);
        assert_eq!(body.message, "index out of bounds");

        let body = body_of(panic_response(Box::new(String::from("formatted panic")))).await;
        assert_eq!(body.message, "formatted panic");

        let body = body_of(panic_response(Box::new(42_u8))).await;
        assert_eq!(body.message, "Internal server error");
    }

    #[tokio::test]
    async fn test_failed_aggregation_task_maps_to_500() {
        let join_err = tokio::task::spawn_blocking(|| -> u32 { panic!("bad input") })
            .await
            .unwrap_err();
        let response = ApiError::from(Error::from(join_err)).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let body = body_of(response).await;
        assert_eq!(body.code, "AGGREGATION_ERROR");
        assert!(body.message.starts_with("Aggregation failed: "));
    }
}
