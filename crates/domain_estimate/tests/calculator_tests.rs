//! Estimate Calculator Tests
//!
//! Reference scenarios and pricing properties for the estimate calculator.
//!
//! # Test Organization
//!
//! - `scenarios` - Worked examples with known breakdowns
//! - `flat_fees` - Each flat fee and discount in isolation
//! - `scheduling` - Rush and long-lead windows
//! - `monotonicity` - Heavy-load and oversize thresholds
//! - `lenient_input` - Null and blank wizard fields
//! - `properties` - Determinism, non-negativity and rounding (proptest)

use chrono::Duration;
use proptest::prelude::*;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use std::sync::Arc;

use core_kernel::Money;
use domain_estimate::{
    AddressType, AdjustmentKind, DateWindow, Dimensions, EstimateCalculator, EstimateError,
    EstimateRequest, EstimateResult, FixedDistance, HandlingMethod, Measurement, Schedule,
    TransportMethod,
};
use test_utils::{
    assert_adjustment, assert_breakdown, assert_err_variant, assert_no_adjustment,
    assert_non_negative, assert_ok, assert_rounded, characteristics_strategy,
    estimate_request_strategy, item_strategy, EstimateRequestBuilder, ItemFixtures,
    ScenarioFixtures, ScheduleFixtures,
};

fn price(request: &EstimateRequest) -> EstimateResult {
    assert_ok!(EstimateCalculator::default().calculate_request(request))
}

fn whole(amount: Money) -> i64 {
    amount.to_whole_dollars().unwrap()
}

// ============================================================================
// SCENARIOS
// ============================================================================

mod scenarios {
    use super::*;

    /// Light equipment between two businesses on a one-day window
    #[test]
    fn test_scenario_a_light_equipment_rush() {
        let result = price(&ScenarioFixtures::scenario_a());

        assert_breakdown(&result, &ScenarioFixtures::scenario_a_expected());
        assert_eq!(result.adjustments().len(), 1);
        assert_adjustment(&result, AdjustmentKind::RushDelivery, 400);
    }

    /// Same shipment above the heavy-load threshold
    #[test]
    fn test_scenario_b_heavy_equipment() {
        let result = price(&ScenarioFixtures::scenario_b());
        assert_breakdown(&result, &ScenarioFixtures::scenario_b_expected());
    }

    /// Oversize hazmat freight, towed to a residence on a 20-day window
    ///
    /// The total is rounded from the unrounded sum (2625), not from the
    /// sum of the rounded parts (2626).
    #[test]
    fn test_scenario_c_oversize_hazmat_freight() {
        let result = price(&ScenarioFixtures::scenario_c());

        assert_breakdown(&result, &ScenarioFixtures::scenario_c_expected());
        assert_adjustment(&result, AdjustmentKind::Towed, 300);
        assert_adjustment(&result, AdjustmentKind::ResidentialDelivery, 150);
        assert_adjustment(&result, AdjustmentKind::LongLeadDiscount, -200);
    }

    /// No dimensions at all: no partial result
    #[test]
    fn test_scenario_d_missing_dimensions() {
        let result = EstimateCalculator::default().calculate_request(&ScenarioFixtures::scenario_d());
        assert_eq!(result, Err(EstimateError::MissingDimensions));
    }

    /// A single forklift selection and a one-element list price the same
    #[test]
    fn test_scenario_e_forklift_single_or_list() {
        let base = price(&ScenarioFixtures::scenario_e(Default::default()));
        let from_single = price(&ScenarioFixtures::scenario_e(ScenarioFixtures::forklift_single()));
        let from_list = price(&ScenarioFixtures::scenario_e(ScenarioFixtures::forklift_list()));

        assert_eq!(from_single, from_list);
        assert_eq!(
            whole(from_single.additional_fees()) - whole(base.additional_fees()),
            200
        );
        assert_adjustment(&from_single, AdjustmentKind::Forklift, 200);
    }

    #[test]
    fn test_missing_item_is_rejected() {
        let request = EstimateRequestBuilder::new().without_item().build();
        let result = EstimateCalculator::default().calculate_request(&request);
        assert_err_variant!(result, EstimateError::MissingItemData);
    }
}

// ============================================================================
// FLAT FEES
// ============================================================================

mod flat_fees {
    use super::*;

    /// Additional fees for the builder's neutral shipment plus changes
    fn additional_fees(builder: EstimateRequestBuilder) -> i64 {
        whole(price(&builder.build()).additional_fees())
    }

    #[test]
    fn test_neutral_shipment_has_no_additional_fees() {
        let result = price(&EstimateRequestBuilder::new().build());
        assert_eq!(whole(result.additional_fees()), 0);
        assert!(result.adjustments().is_empty());
    }

    #[test]
    fn test_duals_and_attachments() {
        let mut characteristics = ItemFixtures::hauled();
        characteristics.has_duals = Some(true);
        characteristics.has_attachments = Some(true);
        assert_eq!(
            additional_fees(EstimateRequestBuilder::new().with_characteristics(characteristics)),
            350
        );
    }

    #[test]
    fn test_transport_methods() {
        assert_eq!(
            additional_fees(EstimateRequestBuilder::new().with_transport(TransportMethod::Towed)),
            300
        );
        assert_eq!(
            additional_fees(EstimateRequestBuilder::new().with_transport(TransportMethod::Driven)),
            500
        );
        assert_eq!(
            additional_fees(EstimateRequestBuilder::new().with_transport(TransportMethod::Hauled)),
            0
        );
    }

    #[test]
    fn test_port_and_residential_charged_once_each() {
        let mixed = EstimateRequestBuilder::new()
            .with_pickup("Port of Houston", AddressType::Port)
            .with_dropoff("Katy, TX", AddressType::Residential);
        assert_eq!(additional_fees(mixed), 450);

        let both_ports = EstimateRequestBuilder::new()
            .with_pickup("Port of Houston", AddressType::Port)
            .with_dropoff("Port of Galveston", AddressType::Port);
        assert_eq!(additional_fees(both_ports), 300);
    }

    #[test]
    fn test_handling_extras() {
        let builder = EstimateRequestBuilder::new()
            .with_ramps()
            .with_loading(HandlingMethod::Forklift)
            .with_unloading(HandlingMethod::Forklift)
            .with_unloading(HandlingMethod::from("OTHER"));

        // Forklift at both ends is charged once
        let result = price(&builder.build());
        assert_eq!(whole(result.additional_fees()), 450);
        assert_adjustment(&result, AdjustmentKind::Ramps, 150);
        assert_adjustment(&result, AdjustmentKind::Forklift, 200);
        assert_adjustment(&result, AdjustmentKind::SpecialHandling, 100);
    }

    #[test]
    fn test_hazmat_flag_adds_quarter_of_base() {
        let result = price(&EstimateRequestBuilder::new().with_hazmat().build());
        assert_eq!(whole(result.hazmat_fee()), 313);
    }

    #[test]
    fn test_unset_flags_price_as_no() {
        let request = EstimateRequestBuilder::new()
            .with_characteristics(Default::default())
            .with_pickup("", AddressType::Unspecified)
            .with_dropoff("", AddressType::Unspecified)
            .build();
        assert_eq!(whole(price(&request).additional_fees()), 0);
    }
}

// ============================================================================
// SCHEDULING
// ============================================================================

mod scheduling {
    use super::*;

    fn scheduling_fee(builder: EstimateRequestBuilder) -> i64 {
        whole(price(&builder.build()).additional_fees())
    }

    fn with_schedule(schedule: Schedule) -> i64 {
        let request = EstimateRequestBuilder::new().build();
        whole(price(&EstimateRequest { schedule, ..request }).additional_fees())
    }

    #[test]
    fn test_window_boundaries() {
        assert_eq!(scheduling_fee(EstimateRequestBuilder::new().with_window_days(2)), 400);
        assert_eq!(scheduling_fee(EstimateRequestBuilder::new().with_window_days(3)), 0);
        assert_eq!(scheduling_fee(EstimateRequestBuilder::new().with_window_days(14)), 0);
        assert_eq!(scheduling_fee(EstimateRequestBuilder::new().with_window_days(15)), -200);
    }

    #[test]
    fn test_missing_dates_default_to_one_day() {
        let result = price(&EstimateRequestBuilder::new().without_schedule().build());
        assert_adjustment(&result, AdjustmentKind::RushDelivery, 400);

        let pickup_only = Schedule::new(
            DateWindow::on(ScheduleFixtures::pickup_day()),
            DateWindow::default(),
        );
        assert_eq!(with_schedule(pickup_only), 400);
    }

    #[test]
    fn test_delivery_before_pickup_is_rush() {
        assert_eq!(scheduling_fee(EstimateRequestBuilder::new().with_window_days(-5)), 400);
    }

    #[test]
    fn test_partial_day_rounds_up() {
        // 14 days and one hour counts as 15 days
        let pickup = ScheduleFixtures::pickup_day();
        let schedule = Schedule::new(
            DateWindow::on(pickup),
            DateWindow::on(pickup + Duration::days(14) + Duration::hours(1)),
        );
        assert_eq!(with_schedule(schedule), -200);
    }

    #[test]
    fn test_neutral_window_has_no_scheduling_adjustment() {
        let result = price(&EstimateRequestBuilder::new().with_window_days(7).build());
        assert_no_adjustment(&result, AdjustmentKind::RushDelivery);
        assert_no_adjustment(&result, AdjustmentKind::LongLeadDiscount);
    }
}

// ============================================================================
// MONOTONICITY
// ============================================================================

mod monotonicity {
    use super::*;

    #[test]
    fn test_crossing_weight_threshold_increases_total() {
        let at = price(&EstimateRequestBuilder::new().with_weight(dec!(10000)).build());
        let over = price(&EstimateRequestBuilder::new().with_weight(dec!(10000.5)).build());
        assert!(over.total_estimate() > at.total_estimate());
    }

    #[test]
    fn test_oversize_adds_half_the_base_cost() {
        let mut wide_dims = ItemFixtures::compact_dimensions();
        wide_dims.width = Measurement::new(9, 0);

        let legal = price(&EstimateRequestBuilder::new().build());
        let wide = price(&EstimateRequestBuilder::new().with_dimensions(Some(wide_dims)).build());

        assert_eq!(whole(legal.oversize_fee()), 0);
        assert_eq!(wide.total_estimate() - legal.total_estimate(), Money::from_whole(625));
    }

    #[test]
    fn test_oversize_fee_tracks_heavy_base() {
        let request = EstimateRequestBuilder::new()
            .with_weight(dec!(108000))
            .with_dimensions(Some(Dimensions::new(
                Measurement::new(40, 0),
                Measurement::new(11, 2),
                Measurement::new(11, 0),
            )))
            .build();
        assert_eq!(whole(price(&request).oversize_fee()), 750);
    }

    #[test]
    fn test_zero_distance_total_floors_at_zero() {
        let calc = EstimateCalculator::new(Arc::new(FixedDistance::new(Decimal::ZERO)));
        let request = EstimateRequestBuilder::new().with_window_days(30).build();
        let result = assert_ok!(calc.calculate_request(&request));

        assert_eq!(whole(result.additional_fees()), -200);
        assert_eq!(result.total_estimate(), Money::zero());
    }

    /// Fractional miles are carried through to the single final rounding
    #[test]
    fn test_fractional_distance_rounds_once() {
        // base 1250.49996 stays below the half-dollar
        let calc = EstimateCalculator::new(Arc::new(FixedDistance::new(dec!(500.199984))));
        let request = EstimateRequestBuilder::new().build();
        let result = assert_ok!(calc.calculate_request(&request));

        assert_eq!(whole(result.base_cost()), 1250);
        assert_eq!(whole(result.fuel_surcharge()), 188);
        assert_eq!(whole(result.total_estimate()), 1438);
    }
}

// ============================================================================
// LENIENT INPUT
// ============================================================================

mod lenient_input {
    use super::*;

    fn parse(json: &str) -> EstimateRequest {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_null_fields_price_like_absent_fields() {
        let with_nulls = parse(
            r#"{
                "item": {
                    "kind": "equipment",
                    "make": "Bobcat",
                    "model": null,
                    "year": null,
                    "quantity": null,
                    "dimensions": {
                        "length": { "feet": 10, "inches": null },
                        "width": { "feet": null, "inches": 6 },
                        "height": null
                    },
                    "weightLbs": null
                },
                "characteristics": { "transportMethod": null, "hasDuals": null },
                "schedule": null,
                "additionalInfo": null,
                "locations": {
                    "pickup": { "address": null, "addressType": null, "isVerified": null },
                    "dropoff": { "address": "Minot, ND", "addressType": "business" }
                }
            }"#,
        );
        let absent = parse(
            r#"{
                "item": {
                    "kind": "equipment",
                    "make": "Bobcat",
                    "dimensions": { "length": { "feet": 10 }, "width": { "inches": 6 } }
                },
                "locations": { "dropoff": { "address": "Minot, ND", "addressType": "business" } }
            }"#,
        );

        assert_eq!(with_nulls, absent);
        assert_eq!(with_nulls.item.as_ref().map(|i| i.quantity()), Some(1));
        assert_eq!(with_nulls.locations.pickup.address_type, AddressType::Unspecified);
        assert_eq!(whole(price(&with_nulls).base_cost()), 1250);
    }

    #[test]
    fn test_blank_freight_fields_fall_back() {
        let request = parse(
            r#"{
                "item": {
                    "kind": "freight",
                    "shippingItem": "Pallets",
                    "dimensions": { "length": { "feet": 8 } },
                    "weightLbs": "",
                    "hasHazmatPlacards": null,
                    "transportationMethod": ""
                }
            }"#,
        );
        let item = request.item.as_ref().unwrap();

        assert_eq!(item.weight_lbs(), Decimal::ZERO);
        assert!(!item.has_hazmat_placards());
        assert_eq!(item.transport_method(), None);

        let result = price(&request);
        assert_eq!(whole(result.hazmat_fee()), 0);
        assert_no_adjustment(&result, AdjustmentKind::Towed);
    }

    #[test]
    fn test_numeric_weight_strings_are_read() {
        let request = parse(
            r#"{"item": {"kind": "freight", "shippingItem": "Pallets", "weightLbs": " 12500 "}}"#,
        );
        assert_eq!(request.item.unwrap().weight_lbs(), dec!(12500));
    }

    #[test]
    fn test_calendar_dates_and_timestamps_agree() {
        let dates = parse(
            r#"{"schedule": {
                "pickup": { "dateType": "on", "specificDate": "2025-03-01" },
                "delivery": { "dateType": "on", "specificDate": "2025-03-21" }
            }}"#,
        );
        let timestamps = parse(
            r#"{"schedule": {
                "pickup": { "dateType": "on", "specificDate": "2025-03-01T00:00:00.000Z" },
                "delivery": { "dateType": "on", "specificDate": "2025-03-21T00:00:00Z" }
            }}"#,
        );

        assert_eq!(dates.schedule, timestamps.schedule);
        assert_eq!(dates.schedule.days_between(), Some(20));

        let request = EstimateRequestBuilder::new().build();
        let result = price(&EstimateRequest { schedule: dates.schedule, ..request });
        assert_adjustment(&result, AdjustmentKind::LongLeadDiscount, -200);
    }

    #[test]
    fn test_singular_handling_keys_are_accepted() {
        let request = parse(
            r#"{"additionalInfo": {"loadingMethod": "FORKLIFT", "unloadingMethod": ["CRANE"]}}"#,
        );
        assert!(request.additional_info.requests_forklift());
        assert!(request
            .additional_info
            .unloading_methods
            .contains(&HandlingMethod::Crane));
    }
}

// ============================================================================
// PROPERTIES
// ============================================================================

mod properties {
    use super::*;

    fn neutral_with(item: domain_estimate::ItemSpecification) -> EstimateRequest {
        EstimateRequestBuilder::new().with_item(item).build()
    }

    proptest! {
        #[test]
        fn prop_calculation_is_deterministic(request in estimate_request_strategy()) {
            let calc = EstimateCalculator::default();
            prop_assert_eq!(calc.calculate_request(&request), calc.calculate_request(&request));
        }

        #[test]
        fn prop_reported_amounts_are_non_negative_and_rounded(request in estimate_request_strategy()) {
            let result = price(&request);
            assert_non_negative(&result);
            assert_rounded(&result);
        }

        #[test]
        fn prop_rounding_is_idempotent(
            item in item_strategy(),
            characteristics in characteristics_strategy(),
        ) {
            let request = EstimateRequest {
                characteristics,
                ..neutral_with(item)
            };
            let result = price(&request);
            prop_assert_eq!(result.round(), result);
        }

        #[test]
        fn prop_legal_dimensions_never_pay_oversize(item in item_strategy()) {
            let request = EstimateRequestBuilder::new()
                .with_item(item)
                .with_dimensions(Some(ItemFixtures::compact_dimensions()))
                .build();
            prop_assert_eq!(whole(price(&request).oversize_fee()), 0);
        }
    }
}
