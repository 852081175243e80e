use serde::{Deserialize, Serialize};

use crate::domain::{GoalField, parse::ensure_finite};
use crate::error::InputResult;

/// Annual contribution is deposited in twelve equal parts.
pub const MONTHS_PER_YEAR: f64 = 12.0;

/// The user-settable parameters of a savings goal. Every field is finite.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GoalParams {
    initial_amount: f64,
    goal_amount: f64,
    contribution_amount: f64,
    interest_rate: f64,
}

impl GoalParams {
    pub fn new(
        initial_amount: f64,
        goal_amount: f64,
        contribution_amount: f64,
        interest_rate: f64,
    ) -> InputResult<Self> {
        Ok(Self {
            initial_amount: ensure_finite(GoalField::InitialAmount, initial_amount)?,
            goal_amount: ensure_finite(GoalField::GoalAmount, goal_amount)?,
            contribution_amount: ensure_finite(GoalField::ContributionAmount, contribution_amount)?,
            interest_rate: ensure_finite(GoalField::InterestRate, interest_rate)?,
        })
    }

    /// For compile-time blueprints only: literals are finite by construction.
    pub(crate) const fn from_literals(
        initial_amount: f64,
        goal_amount: f64,
        contribution_amount: f64,
        interest_rate: f64,
    ) -> Self {
        Self {
            initial_amount,
            goal_amount,
            contribution_amount,
            interest_rate,
        }
    }

    #[inline]
    pub fn initial_amount(&self) -> f64 {
        self.initial_amount
    }

    #[inline]
    pub fn goal_amount(&self) -> f64 {
        self.goal_amount
    }

    /// Nominal annual contribution.
    #[inline]
    pub fn contribution_amount(&self) -> f64 {
        self.contribution_amount
    }

    /// Nominal annual rate in percent (e.g. `4.5` for 4.5%).
    #[inline]
    pub fn interest_rate(&self) -> f64 {
        self.interest_rate
    }

    /// Fractional rate applied once per month.
    #[inline]
    pub fn monthly_rate(&self) -> f64 {
        self.interest_rate / 100.0 / MONTHS_PER_YEAR
    }

    #[inline]
    pub fn monthly_deposit(&self) -> f64 {
        self.contribution_amount / MONTHS_PER_YEAR
    }

    pub fn get(&self, field: GoalField) -> f64 {
        match field {
            GoalField::InitialAmount => self.initial_amount,
            GoalField::GoalAmount => self.goal_amount,
            GoalField::ContributionAmount => self.contribution_amount,
            GoalField::InterestRate => self.interest_rate,
        }
    }

    /// Overwrites one field, rejecting non-finite values.
    pub(crate) fn set_checked(&mut self, field: GoalField, value: f64) -> InputResult<()> {
        let value = ensure_finite(field, value)?;
        match field {
            GoalField::InitialAmount => self.initial_amount = value,
            GoalField::GoalAmount => self.goal_amount = value,
            GoalField::ContributionAmount => self.contribution_amount = value,
            GoalField::InterestRate => self.interest_rate = value,
        }
        Ok(())
    }
}

/// Results written by a projection run. Kept apart from `GoalParams` so a derived
/// value can never be fed back as an input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct GoalOutputs {
    /// Months needed to reach the goal. `None` when the goal is unreachable.
    pub time_to_save: Option<usize>,
}
