//! Core Kernel - Foundational types shared by the estimator crates
//!
//! This crate provides the building blocks used across all domain modules:
//! - Money types with precise decimal arithmetic and whole-dollar rounding
//! - Strongly-typed identifiers
//! - Port infrastructure for external collaborators

pub mod money;
pub mod identifiers;
pub mod ports;

pub use money::{Money, MoneyError, Rate};
pub use identifiers::{EstimateId, DeliveryId};
pub use ports::{PortError, DomainPort};
