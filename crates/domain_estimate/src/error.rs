//! Estimate domain errors
//!
//! The calculator has exactly two fatal errors; every other gap in the
//! submitted wizard data resolves to a pricing-neutral default instead.

use thiserror::Error;

use crate::item::Category;
use crate::wizard::WizardStep;

/// Errors raised by the estimate calculator
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EstimateError {
    /// Neither an equipment nor a freight item carries identifying data
    #[error("No equipment or freight data provided")]
    MissingItemData,

    /// The item has no dimensions at all
    #[error("No dimensions data provided")]
    MissingDimensions,
}

impl EstimateError {
    /// Message shown to the customer when an estimate cannot be produced
    pub fn user_message(&self) -> &'static str {
        match self {
            EstimateError::MissingItemData => {
                "Please go back and describe the equipment or freight you are shipping."
            }
            EstimateError::MissingDimensions => {
                "Please go back and enter the dimensions of your item."
            }
        }
    }
}

/// Errors raised by wizard transitions
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WizardError {
    /// The event does not belong to the current step
    #[error("Unexpected step: expected {expected}, currently at {actual}")]
    UnexpectedStep {
        expected: WizardStep,
        actual: WizardStep,
    },

    /// The submitted item does not match the selected category
    #[error("Category mismatch: selected {selected}, submitted {submitted}")]
    CategoryMismatch {
        selected: Category,
        submitted: Category,
    },

    /// Contact details failed validation
    #[error("Invalid contact information: {0}")]
    InvalidContact(String),

    /// The estimate could not be calculated
    #[error(transparent)]
    Estimate(#[from] EstimateError),
}
