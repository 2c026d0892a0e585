//! HTTP error mapping for the dashboard API

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use pulse_core::DashboardError;
use serde_json::json;

/// Result type alias for handlers
pub type ApiResult<T> = std::result::Result<T, ApiError>;

/// Dashboard error carried across the HTTP boundary
#[derive(Debug, thiserror::Error)]
#[error(transparent)]
pub struct ApiError(#[from] pub DashboardError);

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = StatusCode::from_u16(self.0.status_code())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        let message = if status.is_server_error() && status != StatusCode::SERVICE_UNAVAILABLE {
            tracing::error!("Internal error: {:?}", self.0);
            "Internal server error".to_string()
        } else {
            self.0.to_string()
        };

        let body = Json(json!({
            "error": message,
            "code": self.0.error_code()
        }));

        (status, body).into_response()
    }
}
