//! Request handlers

pub mod address;
pub mod equipment;
pub mod estimate;
pub mod health;
pub mod notify;
