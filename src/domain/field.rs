use std::str::FromStr;

use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter, EnumString, IntoStaticStr};

/// Logical id of the read-only control showing the computed months.
pub const TIME_TO_SAVE_ID: &str = "timeToSave";

/// The user-settable inputs of a savings goal, one per slider. Displays as its
/// logical control id, which the web page and the CLI share.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    Display,
    EnumIter,
    EnumString,
    IntoStaticStr,
)]
pub enum GoalField {
    #[strum(serialize = "initialAmount")]
    InitialAmount,

    #[strum(serialize = "goalAmount")]
    GoalAmount,

    #[strum(serialize = "contributionAmount")]
    ContributionAmount,

    #[strum(serialize = "interestRate")]
    InterestRate,
}

impl GoalField {
    pub fn id(self) -> &'static str {
        self.into()
    }

    /// Id of the paired text display, e.g. `goalAmountValue`.
    pub fn value_id(self) -> String {
        format!("{}Value", self.id())
    }

    pub fn from_id(id: &str) -> Option<Self> {
        Self::from_str(id).ok()
    }

    /// Rates are percentages, everything else is money.
    pub const fn is_money(self) -> bool {
        !matches!(self, Self::InterestRate)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn ids_round_trip_and_display_as_id() {
        for field in GoalField::iter() {
            assert_eq!(GoalField::from_id(field.id()), Some(field));
            assert_eq!(field.to_string(), field.id());
        }
        assert_eq!(GoalField::ContributionAmount.id(), "contributionAmount");
        assert_eq!(GoalField::InterestRate.value_id(), "interestRateValue");
    }

    #[test]
    fn unknown_and_derived_ids_are_not_fields() {
        assert_eq!(GoalField::from_id(TIME_TO_SAVE_ID), None);
        assert_eq!(GoalField::from_id("InitialAmount"), None);
    }
}
