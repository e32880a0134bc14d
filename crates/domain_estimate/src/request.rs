//! Everything the wizard collects before pricing

use serde::{Deserialize, Serialize};

use crate::characteristics::Characteristics;
use crate::handling::AdditionalInfo;
use crate::item::ItemSpecification;
use crate::lenient;
use crate::location::Locations;
use crate::schedule::Schedule;

/// Wizard data submitted for pricing
///
/// `item` is optional because a request can arrive before the customer
/// described anything; pricing such a request fails with
/// [`EstimateError::MissingItemData`](crate::EstimateError::MissingItemData).
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EstimateRequest {
    pub item: Option<ItemSpecification>,
    #[serde(deserialize_with = "lenient::null_as_default")]
    pub characteristics: Characteristics,
    #[serde(deserialize_with = "lenient::null_as_default")]
    pub locations: Locations,
    #[serde(deserialize_with = "lenient::null_as_default")]
    pub schedule: Schedule,
    #[serde(deserialize_with = "lenient::null_as_default")]
    pub additional_info: AdditionalInfo,
}

impl EstimateRequest {
    pub fn new(item: ItemSpecification) -> Self {
        Self {
            item: Some(item),
            ..Default::default()
        }
    }

    pub fn with_characteristics(mut self, characteristics: Characteristics) -> Self {
        self.characteristics = characteristics;
        self
    }

    pub fn with_locations(mut self, locations: Locations) -> Self {
        self.locations = locations;
        self
    }

    pub fn with_schedule(mut self, schedule: Schedule) -> Self {
        self.schedule = schedule;
        self
    }

    pub fn with_additional_info(mut self, additional_info: AdditionalInfo) -> Self {
        self.additional_info = additional_info;
        self
    }
}
