//! Property-Based Test Generators
//!
//! Provides proptest strategies for generating wizard data that the
//! calculator always accepts (identifying data and dimensions present).

use chrono::Duration;
use proptest::prelude::*;
use rust_decimal::Decimal;

use domain_estimate::{
    AdditionalInfo, AddressType, Characteristics, DateWindow, Dimensions, EquipmentDetails,
    EstimateRequest, FreightDetails, HandlingMethod, ItemSpecification, LocationInfo, Locations,
    Measurement, Schedule, TransportMethod,
};

use crate::fixtures::ScheduleFixtures;

/// Strategy for measurements up to 70 ft
pub fn measurement_strategy() -> impl Strategy<Value = Measurement> {
    (0u32..70, 0u32..12).prop_map(|(feet, inches)| Measurement::new(feet, inches))
}

pub fn dimensions_strategy() -> impl Strategy<Value = Dimensions> {
    (measurement_strategy(), measurement_strategy(), measurement_strategy())
        .prop_map(|(l, w, h)| Dimensions::new(l, w, h))
}

/// Strategy for weights in whole pounds, 0 to 80,000
pub fn weight_strategy() -> impl Strategy<Value = Decimal> {
    (0i64..=80_000).prop_map(Decimal::from)
}

pub fn transport_method_strategy() -> impl Strategy<Value = Option<TransportMethod>> {
    prop_oneof![
        Just(None),
        Just(Some(TransportMethod::Hauled)),
        Just(Some(TransportMethod::Towed)),
        Just(Some(TransportMethod::Driven)),
    ]
}

pub fn address_type_strategy() -> impl Strategy<Value = AddressType> {
    prop_oneof![
        Just(AddressType::Unspecified),
        Just(AddressType::Business),
        Just(AddressType::Residential),
        Just(AddressType::Port),
    ]
}

pub fn handling_method_strategy() -> impl Strategy<Value = HandlingMethod> {
    prop_oneof![
        Just(HandlingMethod::DriveOn),
        Just(HandlingMethod::Forklift),
        Just(HandlingMethod::Dock),
        Just(HandlingMethod::Crane),
        "[A-Z]{3,8}".prop_map(|name| HandlingMethod::from(format!("CUSTOM {}", name))),
    ]
}

pub fn equipment_strategy() -> impl Strategy<Value = ItemSpecification> {
    (dimensions_strategy(), weight_strategy(), 1u32..4).prop_map(|(dimensions, weight_lbs, quantity)| {
        ItemSpecification::Equipment(EquipmentDetails {
            year: "2020".into(),
            make: "Caterpillar".into(),
            model: "D6".into(),
            equipment_type: "Dozer".into(),
            quantity,
            dimensions: Some(dimensions),
            weight_lbs,
        })
    })
}

pub fn freight_strategy() -> impl Strategy<Value = ItemSpecification> {
    (
        dimensions_strategy(),
        weight_strategy(),
        any::<bool>(),
        transport_method_strategy(),
    )
        .prop_map(|(dimensions, weight_lbs, hazmat, method)| {
            ItemSpecification::Freight(FreightDetails {
                shipping_item: "Pallets".into(),
                quantity: 1,
                dimensions: Some(dimensions),
                weight_lbs,
                has_hazmat_placards: hazmat,
                transportation_method: method,
            })
        })
}

pub fn item_strategy() -> impl Strategy<Value = ItemSpecification> {
    prop_oneof![equipment_strategy(), freight_strategy()]
}

pub fn characteristics_strategy() -> impl Strategy<Value = Characteristics> {
    (
        proptest::option::of(any::<bool>()),
        proptest::option::of(any::<bool>()),
        proptest::option::of(any::<bool>()),
        transport_method_strategy(),
    )
        .prop_map(|(has_hazmat, has_duals, has_attachments, transport_method)| Characteristics {
            has_hazmat,
            has_duals,
            has_attachments,
            transport_method,
            ..Default::default()
        })
}

pub fn locations_strategy() -> impl Strategy<Value = Locations> {
    (address_type_strategy(), address_type_strategy()).prop_map(|(pickup, dropoff)| {
        Locations::new(
            LocationInfo::new("Fargo, ND", pickup),
            LocationInfo::new("Minot, ND", dropoff),
        )
    })
}

/// Delivery between 10 days before and 40 days after pickup, or no dates
pub fn schedule_strategy() -> impl Strategy<Value = Schedule> {
    prop_oneof![
        1 => Just(Schedule::default()),
        4 => (-10i64..40).prop_map(|days| {
            let pickup = ScheduleFixtures::pickup_day();
            Schedule::new(DateWindow::on(pickup), DateWindow::on(pickup + Duration::days(days)))
        }),
    ]
}

pub fn additional_info_strategy() -> impl Strategy<Value = AdditionalInfo> {
    (
        proptest::collection::btree_set(handling_method_strategy(), 0..3),
        proptest::collection::btree_set(handling_method_strategy(), 0..3),
        proptest::option::of(any::<bool>()),
    )
        .prop_map(|(loading_methods, unloading_methods, ramps_needed)| AdditionalInfo {
            loading_methods,
            unloading_methods,
            ramps_needed,
            ..Default::default()
        })
}

/// Strategy for complete, priceable requests
pub fn estimate_request_strategy() -> impl Strategy<Value = EstimateRequest> {
    (
        item_strategy(),
        characteristics_strategy(),
        locations_strategy(),
        schedule_strategy(),
        additional_info_strategy(),
    )
        .prop_map(|(item, characteristics, locations, schedule, additional_info)| {
            EstimateRequest::new(item)
                .with_characteristics(characteristics)
                .with_locations(locations)
                .with_schedule(schedule)
                .with_additional_info(additional_info)
        })
}
