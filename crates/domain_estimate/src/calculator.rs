//! Estimate calculator
//!
//! A pure transform from the collected wizard data to a cost breakdown. The
//! only collaborator is the [`DistanceEstimator`]; with the default
//! [`FixedDistance`] every trip is 500 miles and the base cost is $1,250.
//!
//! Percentage fees are derived from the base cost after the heavy-load
//! surcharge. All amounts are summed at full precision and each reported
//! field is rounded once, from its own value.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use std::sync::Arc;
use tracing::debug;

use core_kernel::{Money, Rate};

use crate::characteristics::Characteristics;
use crate::distance::{DistanceEstimator, FixedDistance};
use crate::error::EstimateError;
use crate::handling::AdditionalInfo;
use crate::item::{Dimensions, ItemSpecification, TransportMethod};
use crate::location::{AddressType, Locations};
use crate::request::EstimateRequest;
use crate::result::{Adjustment, AdjustmentKind, EstimateResult};
use crate::schedule::Schedule;

/// Price per mile before any surcharge
pub const RATE_PER_MILE: Decimal = dec!(2.50);

/// Loads heavier than this get the heavy-load surcharge
pub const HEAVY_LOAD_THRESHOLD_LBS: Decimal = dec!(10000);
pub const HEAVY_LOAD_FACTOR: Decimal = dec!(1.2);

/// Legal-size limits for standard US road transport, in feet
pub const MAX_LEGAL_LENGTH_FT: Decimal = dec!(48);
pub const MAX_LEGAL_WIDTH_FT: Decimal = dec!(8.5);
pub const MAX_LEGAL_HEIGHT_FT: Decimal = dec!(13.5);

pub const OVERSIZE_RATE: Rate = Rate::new(dec!(0.50));
pub const FUEL_SURCHARGE_RATE: Rate = Rate::new(dec!(0.15));
pub const HAZMAT_RATE: Rate = Rate::new(dec!(0.25));

pub const DUALS_FEE: i64 = 200;
pub const ATTACHMENTS_FEE: i64 = 150;
pub const TOWED_FEE: i64 = 300;
pub const DRIVEN_FEE: i64 = 500;
pub const PORT_FEE: i64 = 300;
pub const RESIDENTIAL_FEE: i64 = 150;
pub const RUSH_FEE: i64 = 400;
pub const LONG_LEAD_DISCOUNT: i64 = -200;
pub const RAMPS_FEE: i64 = 150;
pub const FORKLIFT_FEE: i64 = 200;
pub const SPECIAL_HANDLING_FEE: i64 = 100;

/// Windows shorter than this many days are rush deliveries
pub const RUSH_WINDOW_DAYS: i64 = 3;
/// Windows longer than this many days earn the long-lead discount
pub const LONG_LEAD_WINDOW_DAYS: i64 = 14;
/// Window assumed when either specific date is missing
pub const DEFAULT_WINDOW_DAYS: i64 = 1;

/// Prices shipments
#[derive(Clone)]
pub struct EstimateCalculator {
    distance: Arc<dyn DistanceEstimator>,
}

impl EstimateCalculator {
    pub fn new(distance: Arc<dyn DistanceEstimator>) -> Self {
        Self { distance }
    }

    /// Prices a full wizard request
    ///
    /// # Errors
    ///
    /// `MissingItemData` when the request carries no item, plus the errors
    /// of [`calculate`](Self::calculate).
    pub fn calculate_request(&self, request: &EstimateRequest) -> Result<EstimateResult, EstimateError> {
        let item = request.item.as_ref().ok_or(EstimateError::MissingItemData)?;
        self.calculate(
            item,
            &request.characteristics,
            &request.locations,
            &request.schedule,
            &request.additional_info,
        )
    }

    /// Computes the rounded cost breakdown for one shipment
    ///
    /// # Errors
    ///
    /// * `MissingItemData` if the item carries no identifying field
    /// * `MissingDimensions` if the item has no dimensions at all
    pub fn calculate(
        &self,
        item: &ItemSpecification,
        characteristics: &Characteristics,
        locations: &Locations,
        schedule: &Schedule,
        extras: &AdditionalInfo,
    ) -> Result<EstimateResult, EstimateError> {
        if !item.has_identifying_data() {
            return Err(EstimateError::MissingItemData);
        }
        let dimensions = item.dimensions().ok_or(EstimateError::MissingDimensions)?;

        let miles = self.distance.estimate_miles(locations);
        let mut base_cost = Money::new(RATE_PER_MILE * miles);
        if item.weight_lbs() > HEAVY_LOAD_THRESHOLD_LBS {
            base_cost = base_cost.multiply(HEAVY_LOAD_FACTOR);
        }

        let oversize_fee = if is_oversize(dimensions) {
            OVERSIZE_RATE.apply(&base_cost)
        } else {
            Money::zero()
        };

        let fuel_surcharge = FUEL_SURCHARGE_RATE.apply(&base_cost);

        let hazmat_fee = if characteristics.hazmat() || item.has_hazmat_placards() {
            HAZMAT_RATE.apply(&base_cost)
        } else {
            Money::zero()
        };

        let adjustments = flat_adjustments(item, characteristics, locations, schedule, extras);

        let result = EstimateResult::from_parts(
            base_cost,
            fuel_surcharge,
            oversize_fee,
            hazmat_fee,
            adjustments,
        )
        .round();

        debug!(
            category = %item.category(),
            total = %result.total_estimate(),
            additional = %result.additional_fees(),
            "Estimate calculated"
        );

        Ok(result)
    }
}

impl Default for EstimateCalculator {
    fn default() -> Self {
        Self::new(Arc::new(FixedDistance::default()))
    }
}

impl std::fmt::Debug for EstimateCalculator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EstimateCalculator").finish_non_exhaustive()
    }
}

/// Prices one shipment with the default 500-mile distance
pub fn calculate_estimate(
    item: &ItemSpecification,
    characteristics: &Characteristics,
    locations: &Locations,
    schedule: &Schedule,
    extras: &AdditionalInfo,
) -> Result<EstimateResult, EstimateError> {
    EstimateCalculator::default().calculate(item, characteristics, locations, schedule, extras)
}

/// True if any dimension exceeds its legal-size limit
pub fn is_oversize(dimensions: &Dimensions) -> bool {
    dimensions.length.total_feet() > MAX_LEGAL_LENGTH_FT
        || dimensions.width.total_feet() > MAX_LEGAL_WIDTH_FT
        || dimensions.height.total_feet() > MAX_LEGAL_HEIGHT_FT
}

/// Transport method from the characteristics step, else the freight item's
fn effective_transport_method(
    item: &ItemSpecification,
    characteristics: &Characteristics,
) -> TransportMethod {
    characteristics
        .transport_method
        .or_else(|| item.transport_method())
        .unwrap_or(TransportMethod::Hauled)
}

fn flat_adjustments(
    item: &ItemSpecification,
    characteristics: &Characteristics,
    locations: &Locations,
    schedule: &Schedule,
    extras: &AdditionalInfo,
) -> Vec<Adjustment> {
    let mut adjustments = Vec::new();
    let mut add = |kind, dollars: i64| adjustments.push(Adjustment::new(kind, Money::from_whole(dollars)));

    if characteristics.duals() {
        add(AdjustmentKind::Duals, DUALS_FEE);
    }
    if characteristics.attachments() {
        add(AdjustmentKind::Attachments, ATTACHMENTS_FEE);
    }

    match effective_transport_method(item, characteristics) {
        TransportMethod::Towed => add(AdjustmentKind::Towed, TOWED_FEE),
        TransportMethod::Driven => add(AdjustmentKind::Driven, DRIVEN_FEE),
        TransportMethod::Hauled => {}
    }

    if locations.either_is(AddressType::Port) {
        add(AdjustmentKind::PortAccess, PORT_FEE);
    }
    if locations.either_is(AddressType::Residential) {
        add(AdjustmentKind::ResidentialDelivery, RESIDENTIAL_FEE);
    }

    let days = schedule.days_between().unwrap_or(DEFAULT_WINDOW_DAYS);
    if days < RUSH_WINDOW_DAYS {
        add(AdjustmentKind::RushDelivery, RUSH_FEE);
    } else if days > LONG_LEAD_WINDOW_DAYS {
        add(AdjustmentKind::LongLeadDiscount, LONG_LEAD_DISCOUNT);
    }

    if extras.ramps() {
        add(AdjustmentKind::Ramps, RAMPS_FEE);
    }
    if extras.requests_forklift() {
        add(AdjustmentKind::Forklift, FORKLIFT_FEE);
    }
    if extras.requests_special_handling() {
        add(AdjustmentKind::SpecialHandling, SPECIAL_HANDLING_FEE);
    }

    adjustments
}
