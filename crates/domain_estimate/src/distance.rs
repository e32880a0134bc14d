//! Distance estimation port
//!
//! Pricing is per mile. Until real routing is wired in, every trip is
//! assumed to be [`ASSUMED_MILES`] long.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use core_kernel::DomainPort;

use crate::location::Locations;

/// Trip length assumed when no routing is available
pub const ASSUMED_MILES: Decimal = dec!(500);

/// Estimates the driving distance between pickup and dropoff
pub trait DistanceEstimator: DomainPort {
    /// Distance in miles; must not be negative
    fn estimate_miles(&self, locations: &Locations) -> Decimal;
}

/// Returns the same distance for every trip
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedDistance {
    miles: Decimal,
}

impl FixedDistance {
    pub fn new(miles: Decimal) -> Self {
        Self {
            miles: miles.max(Decimal::ZERO),
        }
    }

    pub fn miles(&self) -> Decimal {
        self.miles
    }
}

impl Default for FixedDistance {
    fn default() -> Self {
        Self::new(ASSUMED_MILES)
    }
}

impl DomainPort for FixedDistance {}

impl DistanceEstimator for FixedDistance {
    fn estimate_miles(&self, _locations: &Locations) -> Decimal {
        self.miles
    }
}
