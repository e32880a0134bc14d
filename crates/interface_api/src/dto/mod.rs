//! Request/response bodies
//!
//! Money leaves the API as whole-dollar integers.

pub mod address;
pub mod equipment;
pub mod estimate;
pub mod notify;
