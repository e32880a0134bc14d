//! Equipment catalog errors

use thiserror::Error;

/// Errors raised while loading or querying the equipment catalog
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    /// A catalog row could not be parsed
    #[error("Invalid catalog row {line}: {reason}")]
    Parse { line: usize, reason: String },

    /// The catalog file could not be read
    #[error("Failed to read catalog: {0}")]
    Io(String),

    /// No model with the given id
    #[error("Unknown equipment model: {0}")]
    UnknownModel(String),

    /// No manufacturer with the given id
    #[error("Unknown manufacturer: {0}")]
    UnknownManufacturer(String),

    /// A year range is not `YYYY-YYYY`
    #[error("Invalid year range: {0}")]
    InvalidYearRange(String),
}
