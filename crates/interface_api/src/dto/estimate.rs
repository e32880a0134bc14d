//! Estimate DTOs

use chrono::{DateTime, Utc};
use serde::Serialize;

use core_kernel::Money;
use domain_estimate::{Adjustment, AdjustmentKind, EstimateRecord, EstimateResult};

use crate::error::ApiError;

fn dollars(money: Money) -> Result<i64, ApiError> {
    money
        .to_whole_dollars()
        .map_err(|e| ApiError::Internal(format!("Amount {} out of range: {}", money, e)))
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AdjustmentLine {
    pub code: AdjustmentKind,
    pub label: &'static str,
    pub amount: i64,
}

impl TryFrom<&Adjustment> for AdjustmentLine {
    type Error = ApiError;

    fn try_from(adjustment: &Adjustment) -> Result<Self, Self::Error> {
        Ok(Self {
            code: adjustment.kind,
            label: adjustment.kind.label(),
            amount: dollars(adjustment.amount)?,
        })
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EstimateBreakdown {
    pub base_cost: i64,
    pub fuel_surcharge: i64,
    pub oversize_fee: i64,
    pub hazmat_fee: i64,
    pub additional_fees: i64,
    pub total_estimate: i64,
    pub disclaimer: &'static str,
    pub adjustments: Vec<AdjustmentLine>,
}

impl TryFrom<&EstimateResult> for EstimateBreakdown {
    type Error = ApiError;

    fn try_from(result: &EstimateResult) -> Result<Self, Self::Error> {
        Ok(Self {
            base_cost: dollars(result.base_cost())?,
            fuel_surcharge: dollars(result.fuel_surcharge())?,
            oversize_fee: dollars(result.oversize_fee())?,
            hazmat_fee: dollars(result.hazmat_fee())?,
            additional_fees: dollars(result.additional_fees())?,
            total_estimate: dollars(result.total_estimate())?,
            disclaimer: result.disclaimer(),
            adjustments: result
                .adjustments()
                .iter()
                .map(AdjustmentLine::try_from)
                .collect::<Result<_, _>>()?,
        })
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EstimateResponse {
    /// `EST-<uuid>`
    pub estimate_id: String,
    pub created_at: DateTime<Utc>,
    pub estimate: EstimateBreakdown,
}

impl TryFrom<&EstimateRecord> for EstimateResponse {
    type Error = ApiError;

    fn try_from(record: &EstimateRecord) -> Result<Self, Self::Error> {
        Ok(Self {
            estimate_id: record.estimate_id.to_string(),
            created_at: record.created_at,
            estimate: EstimateBreakdown::try_from(&record.result)?,
        })
    }
}
