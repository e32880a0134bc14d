//! Shared HTTP plumbing for provider adapters

use std::time::Duration;

use core_kernel::PortError;

/// Default request timeout for provider calls
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Builds the shared client used by every adapter
pub fn build_client(timeout: Duration) -> Result<reqwest::Client, PortError> {
    reqwest::Client::builder()
        .timeout(timeout)
        .user_agent(concat!("hauln-heavy-estimator/", env!("CARGO_PKG_VERSION")))
        .build()
        .map_err(|e| PortError::internal(format!("Failed to build HTTP client: {}", e)))
}

/// Maps a transport-level failure to a port error
pub fn transport_error(service: &str, timeout: Duration, err: reqwest::Error) -> PortError {
    if err.is_timeout() {
        PortError::timeout(service, timeout)
    } else if err.is_connect() {
        PortError::Connection {
            message: format!("{} unreachable", service),
            source: Some(Box::new(err)),
        }
    } else if err.is_decode() {
        PortError::Transformation {
            message: format!("{} returned an unreadable body: {}", service, err),
        }
    } else {
        PortError::Internal {
            message: format!("{} request failed", service),
            source: Some(Box::new(err)),
        }
    }
}

/// Passes successful responses through and maps error statuses
pub async fn check_status(service: &str, response: reqwest::Response) -> Result<reqwest::Response, PortError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let body = response.text().await.unwrap_or_default();
    Err(PortError::from_status(service, status.as_u16(), body))
}
