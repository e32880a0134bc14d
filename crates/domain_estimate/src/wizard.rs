//! Estimate wizard
//!
//! The wizard is a linear sequence of steps. Its state is an immutable
//! [`WizardContext`]; [`WizardContext::apply`] takes an event and returns the
//! next context, leaving the original untouched. A failed transition returns
//! an error and the caller simply keeps the context it had.

use serde::Serialize;
use std::fmt;

use crate::calculator::EstimateCalculator;
use crate::characteristics::Characteristics;
use crate::contact::ContactInfo;
use crate::error::WizardError;
use crate::handling::AdditionalInfo;
use crate::item::{Category, ItemSpecification};
use crate::location::Locations;
use crate::request::EstimateRequest;
use crate::result::EstimateRecord;
use crate::schedule::Schedule;

/// Wizard steps, in order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum WizardStep {
    #[default]
    CategorySelect,
    ItemDetails,
    Locations,
    Schedule,
    AdditionalInfo,
    ContactInfo,
    Results,
}

impl WizardStep {
    const ALL: [WizardStep; 7] = [
        WizardStep::CategorySelect,
        WizardStep::ItemDetails,
        WizardStep::Locations,
        WizardStep::Schedule,
        WizardStep::AdditionalInfo,
        WizardStep::ContactInfo,
        WizardStep::Results,
    ];

    /// Zero-based position in the wizard
    pub fn index(&self) -> usize {
        *self as usize
    }

    pub fn next(&self) -> Option<WizardStep> {
        Self::ALL.get(self.index() + 1).copied()
    }

    pub fn previous(&self) -> Option<WizardStep> {
        self.index().checked_sub(1).map(|i| Self::ALL[i])
    }

    pub fn title(&self) -> &'static str {
        match self {
            WizardStep::CategorySelect => "Category",
            WizardStep::ItemDetails => "Item details",
            WizardStep::Locations => "Locations",
            WizardStep::Schedule => "Schedule",
            WizardStep::AdditionalInfo => "Additional info",
            WizardStep::ContactInfo => "Contact info",
            WizardStep::Results => "Results",
        }
    }
}

impl fmt::Display for WizardStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

/// Inputs that drive the wizard
#[derive(Debug, Clone, PartialEq)]
pub enum WizardEvent {
    SelectCategory(Category),
    SubmitItemDetails {
        item: ItemSpecification,
        characteristics: Characteristics,
    },
    /// Re-categorise from the item step ("my item is really freight")
    SwitchCategory(Category),
    SubmitLocations(Locations),
    SubmitSchedule(Schedule),
    SubmitAdditionalInfo(AdditionalInfo),
    SubmitContact(ContactInfo),
    Back,
    Reset,
}

/// Snapshot of everything collected so far
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WizardContext {
    step: WizardStep,
    category: Option<Category>,
    item: Option<ItemSpecification>,
    characteristics: Characteristics,
    locations: Locations,
    schedule: Schedule,
    additional_info: AdditionalInfo,
    contact: Option<ContactInfo>,
    record: Option<EstimateRecord>,
}

impl WizardContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn step(&self) -> WizardStep {
        self.step
    }

    pub fn category(&self) -> Option<Category> {
        self.category
    }

    pub fn item(&self) -> Option<&ItemSpecification> {
        self.item.as_ref()
    }

    pub fn characteristics(&self) -> &Characteristics {
        &self.characteristics
    }

    pub fn locations(&self) -> &Locations {
        &self.locations
    }

    pub fn schedule(&self) -> &Schedule {
        &self.schedule
    }

    pub fn additional_info(&self) -> &AdditionalInfo {
        &self.additional_info
    }

    pub fn contact(&self) -> Option<&ContactInfo> {
        self.contact.as_ref()
    }

    /// The calculated estimate, once on the results step
    pub fn record(&self) -> Option<&EstimateRecord> {
        self.record.as_ref()
    }

    /// The collected data in the shape the calculator prices
    pub fn to_request(&self) -> EstimateRequest {
        EstimateRequest {
            item: self.item.clone(),
            characteristics: self.characteristics.clone(),
            locations: self.locations.clone(),
            schedule: self.schedule.clone(),
            additional_info: self.additional_info.clone(),
        }
    }

    /// Applies an event, producing the next context
    ///
    /// # Errors
    ///
    /// * `UnexpectedStep` if the event belongs to a different step
    /// * `CategoryMismatch` if submitted item details do not match the selected category
    /// * `InvalidContact` if contact details fail validation
    /// * `Estimate` if the collected data cannot be priced
    pub fn apply(&self, event: WizardEvent, calculator: &EstimateCalculator) -> Result<WizardContext, WizardError> {
        match event {
            WizardEvent::SelectCategory(category) => {
                self.expect_step(WizardStep::CategorySelect)?;
                Ok(WizardContext {
                    step: WizardStep::ItemDetails,
                    category: Some(category),
                    ..WizardContext::default()
                })
            }

            WizardEvent::SwitchCategory(category) => {
                self.expect_step(WizardStep::ItemDetails)?;
                Ok(WizardContext {
                    step: WizardStep::ItemDetails,
                    category: Some(category),
                    ..WizardContext::default()
                })
            }

            WizardEvent::SubmitItemDetails { item, characteristics } => {
                self.expect_step(WizardStep::ItemDetails)?;
                if let Some(selected) = self.category {
                    if selected != item.category() {
                        return Err(WizardError::CategoryMismatch {
                            selected,
                            submitted: item.category(),
                        });
                    }
                }
                Ok(WizardContext {
                    step: WizardStep::Locations,
                    category: Some(item.category()),
                    item: Some(item),
                    characteristics,
                    ..WizardContext::default()
                })
            }

            WizardEvent::SubmitLocations(locations) => {
                self.expect_step(WizardStep::Locations)?;
                Ok(WizardContext {
                    step: WizardStep::Schedule,
                    locations,
                    ..self.clone()
                })
            }

            WizardEvent::SubmitSchedule(schedule) => {
                self.expect_step(WizardStep::Schedule)?;
                Ok(WizardContext {
                    step: WizardStep::AdditionalInfo,
                    schedule,
                    ..self.clone()
                })
            }

            WizardEvent::SubmitAdditionalInfo(additional_info) => {
                self.expect_step(WizardStep::AdditionalInfo)?;
                Ok(WizardContext {
                    step: WizardStep::ContactInfo,
                    additional_info,
                    ..self.clone()
                })
            }

            WizardEvent::SubmitContact(contact) => {
                self.expect_step(WizardStep::ContactInfo)?;
                contact.check().map_err(WizardError::InvalidContact)?;

                let result = calculator.calculate_request(&self.to_request())?;
                Ok(WizardContext {
                    step: WizardStep::Results,
                    contact: Some(contact),
                    record: Some(EstimateRecord::new(result)),
                    ..self.clone()
                })
            }

            WizardEvent::Back => {
                let step = self.step.previous().unwrap_or(WizardStep::CategorySelect);
                Ok(WizardContext {
                    step,
                    record: None,
                    ..self.clone()
                })
            }

            WizardEvent::Reset => Ok(WizardContext::default()),
        }
    }

    fn expect_step(&self, expected: WizardStep) -> Result<(), WizardError> {
        if self.step != expected {
            return Err(WizardError::UnexpectedStep {
                expected,
                actual: self.step,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_step_order() {
        assert_eq!(WizardStep::CategorySelect.next(), Some(WizardStep::ItemDetails));
        assert_eq!(WizardStep::Results.next(), None);
        assert_eq!(WizardStep::CategorySelect.previous(), None);
        assert_eq!(WizardStep::Results.previous(), Some(WizardStep::ContactInfo));
        assert_eq!(WizardStep::AdditionalInfo.index(), 4);
    }

    #[test]
    fn test_select_category_advances() {
        let calc = EstimateCalculator::default();
        let ctx = WizardContext::new()
            .apply(WizardEvent::SelectCategory(Category::Freight), &calc)
            .unwrap();
        assert_eq!(ctx.step(), WizardStep::ItemDetails);
        assert_eq!(ctx.category(), Some(Category::Freight));
    }

    #[test]
    fn test_event_for_wrong_step_is_rejected() {
        let calc = EstimateCalculator::default();
        let err = WizardContext::new()
            .apply(WizardEvent::SubmitLocations(Locations::default()), &calc)
            .unwrap_err();
        assert_eq!(
            err,
            WizardError::UnexpectedStep {
                expected: WizardStep::Locations,
                actual: WizardStep::CategorySelect,
            }
        );
    }

    #[test]
    fn test_back_from_first_step_stays() {
        let calc = EstimateCalculator::default();
        let ctx = WizardContext::new().apply(WizardEvent::Back, &calc).unwrap();
        assert_eq!(ctx.step(), WizardStep::CategorySelect);
    }
}
