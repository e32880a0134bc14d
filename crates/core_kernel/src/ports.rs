//! Ports and Adapters Infrastructure
//!
//! Foundational types for the hexagonal layout used across the workspace.
//! Each domain declares the capabilities it needs from the outside world
//! (address lookup, message delivery, reference data) as port traits built on
//! the marker here, and `infra_providers` supplies adapters for them.
//!
//! ```text
//!   domain_estimate / domain_notification      (port traits)
//!                    ▲
//!        ┌───────────┴────────────┐
//!   HTTP adapter            simulated adapter
//!  (Geoapify, Resend,      (tracing only, used when
//!   Twilio)                 no credentials are set)
//! ```

use std::fmt;
use std::time::Duration;
use thiserror::Error;

/// Error type for port operations
///
/// Provides a unified error type that all port implementations must use,
/// so callers handle provider failures the same way whichever adapter is wired.
#[derive(Debug, Error)]
pub enum PortError {
    /// The requested entity was not found
    #[error("Not found: {entity_type} with id {id}")]
    NotFound {
        entity_type: String,
        id: String,
    },

    /// A validation error occurred
    #[error("Validation error: {message}")]
    Validation {
        message: String,
        field: Option<String>,
    },

    /// Connection to the underlying system failed
    #[error("Connection error: {message}")]
    Connection {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// The operation timed out
    #[error("Timeout after {duration_ms}ms: {operation}")]
    Timeout {
        operation: String,
        duration_ms: u64,
    },

    /// Authentication or authorization failed
    #[error("Unauthorized: {message}")]
    Unauthorized {
        message: String,
    },

    /// Rate limit exceeded for external API
    #[error("Rate limited: retry after {retry_after_secs}s")]
    RateLimited {
        retry_after_secs: u64,
    },

    /// The external system is unavailable
    #[error("Service unavailable: {service}")]
    ServiceUnavailable {
        service: String,
    },

    /// A data transformation error occurred
    #[error("Transformation error: {message}")]
    Transformation {
        message: String,
    },

    /// An internal error occurred
    #[error("Internal error: {message}")]
    Internal {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

impl PortError {
    /// Creates a NotFound error
    pub fn not_found(entity_type: impl Into<String>, id: impl fmt::Display) -> Self {
        PortError::NotFound {
            entity_type: entity_type.into(),
            id: id.to_string(),
        }
    }

    /// Creates a Validation error
    pub fn validation(message: impl Into<String>) -> Self {
        PortError::Validation {
            message: message.into(),
            field: None,
        }
    }

    /// Creates a Validation error with field information
    pub fn validation_field(message: impl Into<String>, field: impl Into<String>) -> Self {
        PortError::Validation {
            message: message.into(),
            field: Some(field.into()),
        }
    }

    /// Creates a Connection error
    pub fn connection(message: impl Into<String>) -> Self {
        PortError::Connection {
            message: message.into(),
            source: None,
        }
    }

    /// Creates a Timeout error
    pub fn timeout(operation: impl Into<String>, after: Duration) -> Self {
        PortError::Timeout {
            operation: operation.into(),
            duration_ms: after.as_millis() as u64,
        }
    }

    /// Creates an Internal error
    pub fn internal(message: impl Into<String>) -> Self {
        PortError::Internal {
            message: message.into(),
            source: None,
        }
    }

    /// Maps an upstream HTTP status to the matching port error
    ///
    /// 404 -> NotFound, 401/403 -> Unauthorized, 429 -> RateLimited,
    /// 5xx -> ServiceUnavailable, anything else -> Internal.
    pub fn from_status(service: &str, status: u16, body: impl Into<String>) -> Self {
        let body = body.into();
        match status {
            404 => PortError::not_found(service, body),
            401 | 403 => PortError::Unauthorized {
                message: format!("{} rejected credentials: {}", service, body),
            },
            429 => PortError::RateLimited {
                retry_after_secs: 60,
            },
            500..=599 => PortError::ServiceUnavailable {
                service: service.to_string(),
            },
            _ => PortError::internal(format!("{} returned {}: {}", service, status, body)),
        }
    }

    /// Returns true if this error indicates a transient failure that may succeed on retry
    pub fn is_transient(&self) -> bool {
        matches!(
            self,
            PortError::Connection { .. }
                | PortError::Timeout { .. }
                | PortError::RateLimited { .. }
                | PortError::ServiceUnavailable { .. }
        )
    }

    /// Returns true if this error indicates the entity was not found
    pub fn is_not_found(&self) -> bool {
        matches!(self, PortError::NotFound { .. })
    }
}

/// Marker trait for all domain ports
///
/// All port traits should extend this marker to ensure they are
/// thread-safe and can be shared behind an `Arc` in async handlers.
pub trait DomainPort: Send + Sync + 'static {}
