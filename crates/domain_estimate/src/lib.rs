//! Estimate Domain - Shipment data model, pricing and the estimate wizard
//!
//! This crate contains:
//! - The item specification (equipment or freight) and its characteristics
//! - Locations, schedule and handling extras collected by the wizard
//! - The estimate calculator and its distance port
//! - The immutable wizard context and its transition function
//! - The address-lookup port used to enrich locations

pub mod calculator;
pub mod characteristics;
pub mod contact;
pub mod distance;
pub mod error;
pub mod handling;
pub mod item;
mod lenient;
pub mod location;
pub mod request;
pub mod result;
pub mod schedule;
pub mod wizard;

pub use calculator::{calculate_estimate, is_oversize, EstimateCalculator};
pub use characteristics::Characteristics;
pub use contact::ContactInfo;
pub use distance::{DistanceEstimator, FixedDistance, ASSUMED_MILES};
pub use error::{EstimateError, WizardError};
pub use handling::{AdditionalInfo, HandlingMethod};
pub use item::{
    Category, Dimensions, EquipmentDetails, FreightDetails, ItemSpecification, Measurement,
    TransportMethod,
};
pub use location::{
    AddressLookup, AddressQuery, AddressSuggestion, AddressType, LocationInfo, Locations,
};
pub use request::EstimateRequest;
pub use result::{Adjustment, AdjustmentKind, EstimateRecord, EstimateResult, DISCLAIMER};
pub use schedule::{DateRange, DateType, DateWindow, Schedule, TimeRange};
pub use wizard::{WizardContext, WizardEvent, WizardStep};
