//! Pre-built Test Fixtures
//!
//! Provides ready-to-use wizard data for the reference pricing scenarios.
//! These fixtures are designed to be consistent and predictable for unit tests.

use chrono::{DateTime, Duration, TimeZone, Utc};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use domain_estimate::{
    AdditionalInfo, AddressType, Characteristics, ContactInfo, DateWindow, Dimensions,
    EquipmentDetails, EstimateRequest, FreightDetails, ItemSpecification, LocationInfo, Locations,
    Measurement, Schedule, TransportMethod,
};

/// Fixture for schedule test data
pub struct ScheduleFixtures;

impl ScheduleFixtures {
    /// Standard pickup date (Jun 2, 2025)
    pub fn pickup_day() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 6, 2, 0, 0, 0).unwrap()
    }

    /// Pickup on the standard day, delivery `days` later
    pub fn window(days: i64) -> Schedule {
        Schedule::new(
            DateWindow::on(Self::pickup_day()),
            DateWindow::on(Self::pickup_day() + Duration::days(days)),
        )
    }
}

/// Fixture for location test data
pub struct LocationFixtures;

impl LocationFixtures {
    pub fn business_to_business() -> Locations {
        Locations::new(
            LocationInfo::new("Fargo, ND, United States", AddressType::Business),
            LocationInfo::new("Bismarck, ND, United States", AddressType::Business),
        )
    }

    pub fn business_to_residence() -> Locations {
        Locations::new(
            LocationInfo::new("Fargo, ND, United States", AddressType::Business),
            LocationInfo::new("Moorhead, MN, United States", AddressType::Residential),
        )
    }
}

/// Fixture for item test data
pub struct ItemFixtures;

impl ItemFixtures {
    /// 10'2" × 6'0" × 7'0", under every oversize threshold
    pub fn compact_dimensions() -> Dimensions {
        Dimensions::new(Measurement::new(10, 2), Measurement::new(6, 0), Measurement::new(7, 0))
    }

    /// A compact track loader of the given weight
    pub fn skid_steer(weight_lbs: Decimal) -> ItemSpecification {
        ItemSpecification::Equipment(EquipmentDetails {
            year: "2019".into(),
            make: "Bobcat".into(),
            model: "T770".into(),
            equipment_type: "Compact Track Loader".into(),
            quantity: 1,
            dimensions: Some(Self::compact_dimensions()),
            weight_lbs,
        })
    }

    /// 50 ft hazmat freight, towed
    pub fn steel_beams() -> ItemSpecification {
        ItemSpecification::Freight(FreightDetails {
            shipping_item: "Steel beams".into(),
            quantity: 1,
            dimensions: Some(Dimensions::new(
                Measurement::new(50, 0),
                Measurement::new(8, 0),
                Measurement::new(6, 0),
            )),
            weight_lbs: dec!(5000),
            has_hazmat_placards: true,
            transportation_method: Some(TransportMethod::Towed),
        })
    }

    /// Equipment with identifying data but no dimensions
    pub fn undimensioned_equipment() -> ItemSpecification {
        ItemSpecification::Equipment(EquipmentDetails {
            make: "Bobcat".into(),
            model: "T770".into(),
            quantity: 1,
            dimensions: None,
            weight_lbs: dec!(4619),
            ..Default::default()
        })
    }

    /// No hazmat, duals or attachments; hauled on a trailer
    pub fn hauled() -> Characteristics {
        Characteristics {
            has_hazmat: Some(false),
            has_duals: Some(false),
            has_attachments: Some(false),
            transport_method: Some(TransportMethod::Hauled),
            ..Default::default()
        }
    }
}

/// Fixture for contact test data
pub struct ContactFixtures;

impl ContactFixtures {
    pub fn customer() -> ContactInfo {
        ContactInfo {
            first_name: "Dana".into(),
            last_name: "Lee".into(),
            company: Some("Park Farms".into()),
            email: "dana@parkfarms.example".into(),
            phone: "+1 701 555 0199".into(),
        }
    }

    /// Blank names and a malformed email
    pub fn incomplete() -> ContactInfo {
        ContactInfo {
            first_name: " ".into(),
            last_name: String::new(),
            company: None,
            email: "not-an-email".into(),
            phone: "7015550199".into(),
        }
    }
}

/// Whole-dollar breakdown expected from a scenario
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExpectedBreakdown {
    pub base_cost: i64,
    pub fuel_surcharge: i64,
    pub oversize_fee: i64,
    pub hazmat_fee: i64,
    pub additional_fees: i64,
    pub total_estimate: i64,
}

/// The reference pricing scenarios
pub struct ScenarioFixtures;

impl ScenarioFixtures {
    /// Light equipment, business to business, one-day window
    pub fn scenario_a() -> EstimateRequest {
        EstimateRequest::new(ItemFixtures::skid_steer(dec!(4619)))
            .with_characteristics(ItemFixtures::hauled())
            .with_locations(LocationFixtures::business_to_business())
            .with_schedule(ScheduleFixtures::window(1))
    }

    pub fn scenario_a_expected() -> ExpectedBreakdown {
        ExpectedBreakdown {
            base_cost: 1250,
            fuel_surcharge: 188,
            oversize_fee: 0,
            hazmat_fee: 0,
            additional_fees: 400,
            total_estimate: 1838,
        }
    }

    /// Scenario A above the heavy-load threshold
    pub fn scenario_b() -> EstimateRequest {
        EstimateRequest::new(ItemFixtures::skid_steer(dec!(10800)))
            .with_characteristics(ItemFixtures::hauled())
            .with_locations(LocationFixtures::business_to_business())
            .with_schedule(ScheduleFixtures::window(1))
    }

    pub fn scenario_b_expected() -> ExpectedBreakdown {
        ExpectedBreakdown {
            base_cost: 1500,
            fuel_surcharge: 225,
            oversize_fee: 0,
            hazmat_fee: 0,
            additional_fees: 400,
            total_estimate: 2125,
        }
    }

    /// Oversize hazmat freight, towed to a residence, 20-day window
    pub fn scenario_c() -> EstimateRequest {
        EstimateRequest::new(ItemFixtures::steel_beams())
            .with_locations(LocationFixtures::business_to_residence())
            .with_schedule(ScheduleFixtures::window(20))
    }

    /// Total is rounded from the unrounded sum
    pub fn scenario_c_expected() -> ExpectedBreakdown {
        ExpectedBreakdown {
            base_cost: 1250,
            fuel_surcharge: 188,
            oversize_fee: 625,
            hazmat_fee: 313,
            additional_fees: 250,
            total_estimate: 2625,
        }
    }

    /// Equipment without dimensions
    pub fn scenario_d() -> EstimateRequest {
        EstimateRequest::new(ItemFixtures::undimensioned_equipment())
            .with_characteristics(ItemFixtures::hauled())
            .with_locations(LocationFixtures::business_to_business())
            .with_schedule(ScheduleFixtures::window(1))
    }

    /// Scenario A on a neutral 5-day window with the given extras
    pub fn scenario_e(additional_info: AdditionalInfo) -> EstimateRequest {
        EstimateRequest::new(ItemFixtures::skid_steer(dec!(4619)))
            .with_characteristics(ItemFixtures::hauled())
            .with_locations(LocationFixtures::business_to_business())
            .with_schedule(ScheduleFixtures::window(5))
            .with_additional_info(additional_info)
    }

    /// Forklift loading sent as a bare string
    pub fn forklift_single() -> AdditionalInfo {
        serde_json::from_str(r#"{"loadingMethods":"FORKLIFT"}"#).unwrap()
    }

    /// Forklift loading sent as a one-element list
    pub fn forklift_list() -> AdditionalInfo {
        serde_json::from_str(r#"{"loadingMethods":["FORKLIFT"]}"#).unwrap()
    }
}
