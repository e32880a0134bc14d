//! API error handling

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;
use tracing::{error, warn};

use core_kernel::PortError;
use domain_estimate::EstimateError;
use domain_notification::NotificationError;

/// API error types
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Validation error: {0}")]
    Validation(String),

    /// The wizard data cannot be priced yet
    #[error(transparent)]
    Estimate(#[from] EstimateError),

    #[error("{0} service not configured")]
    NotConfigured(&'static str),

    #[error("Upstream error: {0}")]
    Upstream(String),

    #[error("Service unavailable: {0}")]
    Unavailable(String),

    #[error("Internal server error: {0}")]
    Internal(String),
}

/// Error response body
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Vec<String>>,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let mut details = None;
        let (status, error_type, message) = match &self {
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, "not_found", msg.clone()),
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, "bad_request", msg.clone()),
            ApiError::Validation(msg) => {
                details = Some(msg.split("; ").map(str::to_string).collect());
                (StatusCode::BAD_REQUEST, "validation_error", msg.clone())
            }
            ApiError::Estimate(err) => {
                details = Some(vec![err.to_string()]);
                (StatusCode::UNPROCESSABLE_ENTITY, "incomplete_request", err.user_message().to_string())
            }
            ApiError::NotConfigured(_) => (StatusCode::SERVICE_UNAVAILABLE, "not_configured", self.to_string()),
            ApiError::Upstream(msg) => (StatusCode::BAD_GATEWAY, "upstream_error", msg.clone()),
            ApiError::Unavailable(msg) => (StatusCode::SERVICE_UNAVAILABLE, "service_unavailable", msg.clone()),
            ApiError::Internal(msg) => (StatusCode::INTERNAL_SERVER_ERROR, "internal_error", msg.clone()),
        };

        if status.is_server_error() {
            error!(status = status.as_u16(), error = %self, "Request failed");
        } else {
            warn!(status = status.as_u16(), error = %self, "Request rejected");
        }

        let body = ErrorResponse {
            error: error_type.to_string(),
            message,
            details,
        };

        (status, Json(body)).into_response()
    }
}

impl From<PortError> for ApiError {
    fn from(err: PortError) -> Self {
        if err.is_transient() {
            return ApiError::Unavailable(err.to_string());
        }
        match err {
            PortError::Validation { message, .. } => ApiError::Validation(message),
            e @ PortError::NotFound { .. } => ApiError::NotFound(e.to_string()),
            e @ (PortError::Unauthorized { .. } | PortError::Transformation { .. }) => {
                ApiError::Upstream(e.to_string())
            }
            other => ApiError::Internal(other.to_string()),
        }
    }
}

impl From<NotificationError> for ApiError {
    fn from(err: NotificationError) -> Self {
        match err {
            NotificationError::InvalidRecipient(to) => ApiError::Validation(format!("Invalid recipient: {}", to)),
            NotificationError::NotConfigured(channel) => ApiError::NotConfigured(channel),
            NotificationError::Delivery(port) => port.into(),
        }
    }
}
