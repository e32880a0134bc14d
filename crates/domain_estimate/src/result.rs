//! Estimate breakdown and record

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::fmt;

use core_kernel::{EstimateId, Money};

/// Legal notice attached to every estimate
pub const DISCLAIMER: &str = "This is an estimate only. Final pricing may vary based on actual \
pickup/delivery locations, market conditions, and other factors. All estimates are valid for 7 days.";

/// A flat fee or discount folded into `additional_fees`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AdjustmentKind {
    Duals,
    Attachments,
    Towed,
    Driven,
    PortAccess,
    ResidentialDelivery,
    RushDelivery,
    LongLeadDiscount,
    Ramps,
    Forklift,
    SpecialHandling,
}

impl AdjustmentKind {
    pub fn label(&self) -> &'static str {
        match self {
            AdjustmentKind::Duals => "Dual wheels",
            AdjustmentKind::Attachments => "Attachments",
            AdjustmentKind::Towed => "Towed transport",
            AdjustmentKind::Driven => "Driven transport",
            AdjustmentKind::PortAccess => "Port access",
            AdjustmentKind::ResidentialDelivery => "Residential location",
            AdjustmentKind::RushDelivery => "Rush delivery",
            AdjustmentKind::LongLeadDiscount => "Long-lead discount",
            AdjustmentKind::Ramps => "Ramps",
            AdjustmentKind::Forklift => "Forklift",
            AdjustmentKind::SpecialHandling => "Special handling",
        }
    }
}

impl fmt::Display for AdjustmentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One line of the additional-fees breakdown
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Adjustment {
    pub kind: AdjustmentKind,
    pub amount: Money,
}

impl Adjustment {
    pub fn new(kind: AdjustmentKind, amount: Money) -> Self {
        Self { kind, amount }
    }
}

/// Cost breakdown produced by the calculator
///
/// Fields are private: a result is built once by the calculator and never
/// modified afterwards. `round` returns a new value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EstimateResult {
    base_cost: Money,
    fuel_surcharge: Money,
    oversize_fee: Money,
    hazmat_fee: Money,
    additional_fees: Money,
    total_estimate: Money,
    adjustments: Vec<Adjustment>,
    disclaimer: &'static str,
}

impl EstimateResult {
    pub(crate) fn from_parts(
        base_cost: Money,
        fuel_surcharge: Money,
        oversize_fee: Money,
        hazmat_fee: Money,
        adjustments: Vec<Adjustment>,
    ) -> Self {
        let additional_fees: Money = adjustments.iter().map(|a| a.amount).sum();
        let total_estimate =
            (base_cost + fuel_surcharge + oversize_fee + hazmat_fee + additional_fees)
                .max(Money::zero());

        Self {
            base_cost,
            fuel_surcharge,
            oversize_fee,
            hazmat_fee,
            additional_fees,
            total_estimate,
            adjustments,
            disclaimer: DISCLAIMER,
        }
    }

    pub fn base_cost(&self) -> Money {
        self.base_cost
    }

    pub fn fuel_surcharge(&self) -> Money {
        self.fuel_surcharge
    }

    pub fn oversize_fee(&self) -> Money {
        self.oversize_fee
    }

    pub fn hazmat_fee(&self) -> Money {
        self.hazmat_fee
    }

    /// Net of all flat fees and discounts; may be negative
    pub fn additional_fees(&self) -> Money {
        self.additional_fees
    }

    pub fn total_estimate(&self) -> Money {
        self.total_estimate
    }

    pub fn adjustments(&self) -> &[Adjustment] {
        &self.adjustments
    }

    pub fn disclaimer(&self) -> &'static str {
        self.disclaimer
    }

    /// Rounds every reported amount to whole dollars, each from its own value
    pub fn round(&self) -> Self {
        Self {
            base_cost: self.base_cost.round_whole(),
            fuel_surcharge: self.fuel_surcharge.round_whole(),
            oversize_fee: self.oversize_fee.round_whole(),
            hazmat_fee: self.hazmat_fee.round_whole(),
            additional_fees: self.additional_fees.round_whole(),
            total_estimate: self.total_estimate.round_whole(),
            adjustments: self
                .adjustments
                .iter()
                .map(|a| Adjustment::new(a.kind, a.amount.round_whole()))
                .collect(),
            disclaimer: self.disclaimer,
        }
    }

    pub fn is_rounded(&self) -> bool {
        [
            self.base_cost,
            self.fuel_surcharge,
            self.oversize_fee,
            self.hazmat_fee,
            self.additional_fees,
            self.total_estimate,
        ]
        .iter()
        .all(Money::is_whole)
    }
}

/// A calculated estimate with its identity
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EstimateRecord {
    pub estimate_id: EstimateId,
    pub created_at: DateTime<Utc>,
    pub result: EstimateResult,
}

impl EstimateRecord {
    /// Wraps a result with a fresh id, stamped now
    pub fn new(result: EstimateResult) -> Self {
        Self::with_id(EstimateId::new(), Utc::now(), result)
    }

    pub fn with_id(estimate_id: EstimateId, created_at: DateTime<Utc>, result: EstimateResult) -> Self {
        Self {
            estimate_id,
            created_at,
            result,
        }
    }
}
