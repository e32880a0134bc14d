//! Test Data Builders
//!
//! Provides builder patterns for constructing wizard data with sensible defaults.
//! These builders allow tests to specify only the relevant fields while using
//! defaults for everything else.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use domain_estimate::{
    AdditionalInfo, AddressType, Characteristics, ContactInfo, Dimensions, EquipmentDetails,
    EstimateRequest, FreightDetails, HandlingMethod, ItemSpecification, LocationInfo, Locations,
    Schedule, TransportMethod,
};

use crate::fixtures::{ContactFixtures, ItemFixtures, LocationFixtures, ScheduleFixtures};

/// Builder for estimate requests
///
/// Defaults to a price-neutral shipment: a 4,000 lb compact loader, hauled
/// between two businesses on a 7-day window with no extras. The only
/// non-zero component is the base cost.
pub struct EstimateRequestBuilder {
    item: Option<ItemSpecification>,
    characteristics: Characteristics,
    locations: Locations,
    schedule: Schedule,
    additional_info: AdditionalInfo,
}

impl Default for EstimateRequestBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl EstimateRequestBuilder {
    /// Creates a new builder with default values
    pub fn new() -> Self {
        Self {
            item: Some(ItemFixtures::skid_steer(dec!(4000))),
            characteristics: ItemFixtures::hauled(),
            locations: LocationFixtures::business_to_business(),
            schedule: ScheduleFixtures::window(7),
            additional_info: AdditionalInfo::default(),
        }
    }

    /// Replaces the item
    pub fn with_item(mut self, item: ItemSpecification) -> Self {
        self.item = Some(item);
        self
    }

    /// Removes the item entirely
    pub fn without_item(mut self) -> Self {
        self.item = None;
        self
    }

    /// Freight with the default dimensions and weight
    pub fn freight(self, shipping_item: impl Into<String>) -> Self {
        self.with_item(ItemSpecification::Freight(FreightDetails {
            shipping_item: shipping_item.into(),
            quantity: 1,
            dimensions: Some(ItemFixtures::compact_dimensions()),
            weight_lbs: dec!(4000),
            has_hazmat_placards: false,
            transportation_method: None,
        }))
    }

    /// Sets the weight on whichever item is present
    pub fn with_weight(mut self, weight_lbs: Decimal) -> Self {
        match self.item.as_mut() {
            Some(ItemSpecification::Equipment(e)) => e.weight_lbs = weight_lbs,
            Some(ItemSpecification::Freight(f)) => f.weight_lbs = weight_lbs,
            None => {}
        }
        self
    }

    /// Sets (or clears) dimensions on whichever item is present
    pub fn with_dimensions(mut self, dimensions: Option<Dimensions>) -> Self {
        match self.item.as_mut() {
            Some(ItemSpecification::Equipment(e)) => e.dimensions = dimensions,
            Some(ItemSpecification::Freight(f)) => f.dimensions = dimensions,
            None => {}
        }
        self
    }

    /// Clears make and model so the equipment carries no identifying data
    pub fn anonymous_equipment(self) -> Self {
        self.with_item(ItemSpecification::Equipment(EquipmentDetails {
            quantity: 1,
            dimensions: Some(ItemFixtures::compact_dimensions()),
            ..Default::default()
        }))
    }

    pub fn with_characteristics(mut self, characteristics: Characteristics) -> Self {
        self.characteristics = characteristics;
        self
    }

    pub fn with_transport(mut self, method: TransportMethod) -> Self {
        self.characteristics.transport_method = Some(method);
        self
    }

    pub fn with_hazmat(mut self) -> Self {
        self.characteristics.has_hazmat = Some(true);
        self
    }

    pub fn with_duals(mut self) -> Self {
        self.characteristics.has_duals = Some(true);
        self
    }

    pub fn with_pickup(mut self, address: &str, address_type: AddressType) -> Self {
        self.locations.pickup = LocationInfo::new(address, address_type);
        self
    }

    pub fn with_dropoff(mut self, address: &str, address_type: AddressType) -> Self {
        self.locations.dropoff = LocationInfo::new(address, address_type);
        self
    }

    /// Pickup on the standard day, delivery `days` later
    pub fn with_window_days(mut self, days: i64) -> Self {
        self.schedule = ScheduleFixtures::window(days);
        self
    }

    /// No specific dates at all
    pub fn without_schedule(mut self) -> Self {
        self.schedule = Schedule::default();
        self
    }

    pub fn with_loading(mut self, method: HandlingMethod) -> Self {
        self.additional_info.loading_methods.insert(method);
        self
    }

    pub fn with_unloading(mut self, method: HandlingMethod) -> Self {
        self.additional_info.unloading_methods.insert(method);
        self
    }

    pub fn with_ramps(mut self) -> Self {
        self.additional_info.ramps_needed = Some(true);
        self
    }

    pub fn with_handling_instructions(mut self, text: impl Into<String>) -> Self {
        self.additional_info.handling_instructions = Some(text.into());
        self
    }

    /// Builds the request
    pub fn build(self) -> EstimateRequest {
        EstimateRequest {
            item: self.item,
            characteristics: self.characteristics,
            locations: self.locations,
            schedule: self.schedule,
            additional_info: self.additional_info,
        }
    }
}

/// Builder for contact details
pub struct ContactInfoBuilder {
    contact: ContactInfo,
}

impl Default for ContactInfoBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl ContactInfoBuilder {
    pub fn new() -> Self {
        Self {
            contact: ContactFixtures::customer(),
        }
    }

    pub fn with_name(mut self, first: &str, last: &str) -> Self {
        self.contact.first_name = first.to_string();
        self.contact.last_name = last.to_string();
        self
    }

    pub fn with_email(mut self, email: &str) -> Self {
        self.contact.email = email.to_string();
        self
    }

    pub fn with_phone(mut self, phone: &str) -> Self {
        self.contact.phone = phone.to_string();
        self
    }

    pub fn without_company(mut self) -> Self {
        self.contact.company = None;
        self
    }

    pub fn build(self) -> ContactInfo {
        self.contact
    }
}
