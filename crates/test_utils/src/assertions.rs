//! Custom Test Assertions
//!
//! Provides specialized assertion helpers for estimate results that give
//! more meaningful error messages than standard assertions.

use core_kernel::Money;
use domain_estimate::{AdjustmentKind, EstimateResult};

use crate::fixtures::ExpectedBreakdown;

fn whole(money: Money) -> i64 {
    money
        .to_whole_dollars()
        .unwrap_or_else(|e| panic!("Amount {} is not representable: {}", money, e))
}

/// Asserts every component of a result against an expected breakdown
///
/// # Panics
///
/// Panics naming each mismatching component
pub fn assert_breakdown(result: &EstimateResult, expected: &ExpectedBreakdown) {
    let actual = ExpectedBreakdown {
        base_cost: whole(result.base_cost()),
        fuel_surcharge: whole(result.fuel_surcharge()),
        oversize_fee: whole(result.oversize_fee()),
        hazmat_fee: whole(result.hazmat_fee()),
        additional_fees: whole(result.additional_fees()),
        total_estimate: whole(result.total_estimate()),
    };
    assert_eq!(actual, *expected, "Estimate breakdown mismatch");
}

/// Asserts that every priced component is a whole dollar amount
pub fn assert_rounded(result: &EstimateResult) {
    assert!(result.is_rounded(), "Expected whole-dollar result, got {:?}", result);
}

/// Asserts the non-negativity invariant
///
/// `additional_fees` may be negative; nothing else may be.
pub fn assert_non_negative(result: &EstimateResult) {
    for (name, amount) in [
        ("baseCost", result.base_cost()),
        ("fuelSurcharge", result.fuel_surcharge()),
        ("oversizeFee", result.oversize_fee()),
        ("hazmatFee", result.hazmat_fee()),
        ("totalEstimate", result.total_estimate()),
    ] {
        assert!(!amount.is_negative(), "{} is negative: {}", name, amount);
    }
}

/// Asserts that an adjustment of the given kind fired with the given amount
pub fn assert_adjustment(result: &EstimateResult, kind: AdjustmentKind, amount: i64) {
    let found = result
        .adjustments()
        .iter()
        .find(|a| a.kind == kind)
        .unwrap_or_else(|| panic!("No {} adjustment in {:?}", kind, result.adjustments()));
    assert_eq!(whole(found.amount), amount, "{} amount", kind);
}

/// Asserts that no adjustment of the given kind fired
pub fn assert_no_adjustment(result: &EstimateResult, kind: AdjustmentKind) {
    assert!(
        result.adjustments().iter().all(|a| a.kind != kind),
        "Unexpected {} adjustment",
        kind
    );
}

/// Asserts that a result is Ok and returns the value
#[macro_export]
macro_rules! assert_ok {
    ($result:expr) => {
        match $result {
            Ok(value) => value,
            Err(e) => panic!("Expected Ok, got Err: {:?}", e),
        }
    };
}

/// Asserts that an error matches a specific variant
#[macro_export]
macro_rules! assert_err_variant {
    ($result:expr, $pattern:pat) => {
        match $result {
            Ok(value) => panic!("Expected Err matching {}, got Ok({:?})", stringify!($pattern), value),
            Err(ref e) => {
                assert!(
                    matches!(e, $pattern),
                    "Error {:?} does not match pattern {}",
                    e,
                    stringify!($pattern)
                );
            }
        }
    };
}
