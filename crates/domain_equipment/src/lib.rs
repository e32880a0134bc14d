//! Equipment Domain - Reference data for equipment shipments
//!
//! Manufacturers and models with typical weights and dimensions, used to
//! pre-fill the item-details step before an estimate is priced.

pub mod catalog;
pub mod error;
pub mod ports;
pub mod prefill;

pub use catalog::{slug, EquipmentCatalog, EquipmentModel, Manufacturer, YearRange};
pub use error::CatalogError;
pub use ports::EquipmentLookup;
pub use prefill::feet_and_inches;
