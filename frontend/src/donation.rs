use std::rc::Rc;

use log::warn;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use yew::Reducible;

use crate::config::{DEFAULT_AMOUNT, PRESET_AMOUNTS, UNIT_COST};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DonationError {
    #[error("invalid donation amount: {0:?}")]
    InvalidAmount(String),
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Frequency {
    OneTime,
    #[default]
    Monthly,
}

impl Frequency {
    pub const ALL: [Frequency; 2] = [Frequency::OneTime, Frequency::Monthly];

    pub fn as_str(&self) -> &'static str {
        match self {
            Frequency::OneTime => "one-time",
            Frequency::Monthly => "monthly",
        }
    }

    /// Text on the frequency toggle.
    pub fn label(&self) -> &'static str {
        match self {
            Frequency::OneTime => "One Time",
            Frequency::Monthly => "Monthly",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DonationSelection {
    /// Whole dollars, always positive.
    pub amount: u64,
    pub frequency: Frequency,
}

impl Default for DonationSelection {
    fn default() -> Self {
        Self {
            amount: DEFAULT_AMOUNT,
            frequency: Frequency::Monthly,
        }
    }
}

pub fn is_preset(amount: u64) -> bool {
    PRESET_AMOUNTS.contains(&amount)
}

/// Children supported by `amount`, rounded down.
pub fn beneficiaries(amount: u64) -> u64 {
    amount / UNIT_COST
}

pub fn parse_amount(input: &str) -> Result<u64, DonationError> {
    let trimmed = input.trim();
    let digits = trimmed.strip_prefix('$').unwrap_or(trimmed).trim();
    let value: i64 = digits
        .parse()
        .map_err(|_| DonationError::InvalidAmount(input.to_string()))?;
    positive(value)
}

fn positive(value: i64) -> Result<u64, DonationError> {
    u64::try_from(value)
        .ok()
        .filter(|amount| *amount > 0)
        .ok_or_else(|| DonationError::InvalidAmount(value.to_string()))
}

pub fn impact_headline(selection: &DonationSelection) -> String {
    format!(
        "Your ${} {} donation provides:",
        selection.amount,
        selection.frequency.as_str()
    )
}

pub fn impact_detail(selection: &DonationSelection) -> String {
    let count = beneficiaries(selection.amount);
    let noun = if count == 1 { "child" } else { "children" };
    format!("Complete school supplies and hot meals for {count} {noun} for an entire semester.")
}

pub fn derive_impact_statement(selection: &DonationSelection) -> String {
    format!("{} {}", impact_headline(selection), impact_detail(selection))
}

pub fn derive_button_label(selection: &DonationSelection) -> String {
    match selection.frequency {
        Frequency::Monthly => format!("Donate ${} Monthly", selection.amount),
        Frequency::OneTime => format!("Donate ${} Today", selection.amount),
    }
}

/// Amount and frequency picked in the donation panel. Lives only as long
/// as the panel does.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DonationConfigurator {
    selection: DonationSelection,
}

impl DonationConfigurator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn selection(&self) -> DonationSelection {
        self.selection
    }

    /// Rejects non-positive amounts and leaves the current one in place.
    pub fn select_amount(&mut self, value: i64) -> Result<(), DonationError> {
        self.selection.amount = positive(value)?;
        Ok(())
    }

    pub fn select_custom_amount(&mut self, input: &str) -> Result<(), DonationError> {
        self.selection.amount = parse_amount(input)?;
        Ok(())
    }

    pub fn select_frequency(&mut self, frequency: Frequency) {
        self.selection.frequency = frequency;
    }

    pub fn impact_statement(&self) -> String {
        derive_impact_statement(&self.selection)
    }

    pub fn button_label(&self) -> String {
        derive_button_label(&self.selection)
    }
}

pub enum DonationAction {
    SelectAmount(i64),
    SelectCustom(String),
    SelectFrequency(Frequency),
}

impl Reducible for DonationConfigurator {
    type Action = DonationAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        let result = match action {
            DonationAction::SelectAmount(value) => next.select_amount(value),
            DonationAction::SelectCustom(input) => next.select_custom_amount(&input),
            DonationAction::SelectFrequency(frequency) => {
                next.select_frequency(frequency);
                Ok(())
            }
        };

        match result {
            Ok(()) if next != *self => Rc::new(next),
            Ok(()) => self,
            Err(e) => {
                warn!("ignoring donation update: {}", e);
                self
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn selection(amount: u64, frequency: Frequency) -> DonationSelection {
        DonationSelection { amount, frequency }
    }

    #[test]
    fn defaults_to_hundred_monthly() {
        let configurator = DonationConfigurator::new();
        assert_eq!(configurator.selection(), selection(100, Frequency::Monthly));
        assert_eq!(configurator.button_label(), "Donate $100 Monthly");
    }

    #[test]
    fn beneficiaries_use_floor_division() {
        assert_eq!(beneficiaries(100), 20);
        assert_eq!(beneficiaries(3), 0);
        assert_eq!(beneficiaries(24), 4);
        assert_eq!(beneficiaries(250), 50);
    }

    #[test]
    fn impact_statement_for_default_selection() {
        assert_eq!(
            derive_impact_statement(&selection(100, Frequency::Monthly)),
            "Your $100 monthly donation provides: Complete school supplies and hot meals \
             for 20 children for an entire semester."
        );
    }

    #[test]
    fn small_amounts_still_read_correctly() {
        let statement = derive_impact_statement(&selection(3, Frequency::OneTime));
        assert!(statement.starts_with("Your $3 one-time donation provides:"));
        assert!(statement.contains("for 0 children"));

        let single = impact_detail(&selection(7, Frequency::OneTime));
        assert!(single.contains("for 1 child for"));
    }

    #[test]
    fn button_label_follows_frequency() {
        let monthly = derive_button_label(&selection(250, Frequency::Monthly));
        assert!(monthly.contains("Monthly"));

        let once = derive_button_label(&selection(25, Frequency::OneTime));
        assert!(once.contains("Today"));
        assert!(!once.contains("Monthly"));
        assert_eq!(once, "Donate $25 Today");
    }

    #[test]
    fn invalid_amount_keeps_previous_selection() {
        let mut configurator = DonationConfigurator::new();
        configurator.select_amount(50).unwrap();

        for bad in [0, -25] {
            assert!(matches!(
                configurator.select_amount(bad),
                Err(DonationError::InvalidAmount(_))
            ));
        }
        assert_eq!(configurator.selection().amount, 50);
    }

    #[test]
    fn custom_amount_parsing() {
        assert_eq!(parse_amount(" 75 "), Ok(75));
        assert_eq!(parse_amount("$1000"), Ok(1000));
        for bad in ["", "abc", "12.5", "-5", "0", "$"] {
            assert_eq!(
                parse_amount(bad),
                Err(DonationError::InvalidAmount(bad.to_string())),
                "{bad:?} should be rejected"
            );
        }
    }

    #[test]
    fn presets_are_recognised() {
        assert!(PRESET_AMOUNTS.iter().all(|amount| is_preset(*amount)));
        assert!(!is_preset(75));
    }

    #[test]
    fn frequency_serializes_kebab_case() {
        let json = serde_json::to_string(&selection(50, Frequency::OneTime)).unwrap();
        assert_eq!(json, r#"{"amount":50,"frequency":"one-time"}"#);

        let back: DonationSelection =
            serde_json::from_str(r#"{"amount":25,"frequency":"monthly"}"#).unwrap();
        assert_eq!(back, selection(25, Frequency::Monthly));
    }

    #[test]
    fn reducer_ignores_rejected_actions() {
        let configurator = Rc::new(DonationConfigurator::new());
        let same = configurator
            .clone()
            .reduce(DonationAction::SelectCustom("lots".to_string()));
        assert!(Rc::ptr_eq(&configurator, &same));

        let updated = configurator
            .clone()
            .reduce(DonationAction::SelectFrequency(Frequency::OneTime));
        assert_eq!(updated.button_label(), "Donate $100 Today");

        let custom = updated.reduce(DonationAction::SelectCustom("40".to_string()));
        assert_eq!(custom.selection().amount, 40);
    }
}
