//! Test Utilities Crate
//!
//! Provides shared test infrastructure, fixtures, and helpers for the
//! estimator test suite.
//!
//! # Modules
//!
//! - `fixtures`: The reference pricing scenarios and common wizard data
//! - `builders`: Builder patterns for requests and contact details
//! - `doubles`: In-memory senders and lookups for service and API tests
//! - `assertions`: Custom assertion helpers for estimate results
//! - `generators`: Property-based test data generators

pub mod assertions;
pub mod builders;
pub mod doubles;
pub mod fixtures;
pub mod generators;

pub use assertions::*;
pub use builders::*;
pub use doubles::*;
pub use fixtures::*;
pub use generators::*;
