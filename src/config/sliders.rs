//! Slider ranges for every input control.

use serde::{Deserialize, Serialize};

use crate::domain::{GoalField, GoalParams};

#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct SliderConfig {
    pub min: f64,
    pub max: f64,
    pub step: f64,
    /// Starting value of the control.
    pub default: f64,
    /// Logarithmic sliders give fine control at the low end of money ranges.
    pub logarithmic: bool,
}

impl SliderConfig {
    pub fn clamp(&self, value: f64) -> f64 {
        value.clamp(self.min, self.max)
    }
}

/// The Master Slider Configuration
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct SliderSet {
    pub initial_amount: SliderConfig,
    pub goal_amount: SliderConfig,
    pub contribution_amount: SliderConfig,
    pub interest_rate: SliderConfig,
    /// Not a goal parameter: the horizon for the required-deposit solver.
    pub target_months: SliderConfig,
}

impl SliderSet {
    pub fn for_field(&self, field: GoalField) -> &SliderConfig {
        match field {
            GoalField::InitialAmount => &self.initial_amount,
            GoalField::GoalAmount => &self.goal_amount,
            GoalField::ContributionAmount => &self.contribution_amount,
            GoalField::InterestRate => &self.interest_rate,
        }
    }
}

pub const SLIDERS: SliderSet = SliderSet {
    initial_amount: SliderConfig {
        min: 0.0,
        max: 1_000_000.0,
        step: 100.0,
        default: 1_000.0,
        logarithmic: true,
    },
    goal_amount: SliderConfig {
        min: 100.0,
        max: 5_000_000.0,
        step: 100.0,
        default: 10_000.0,
        logarithmic: true,
    },
    contribution_amount: SliderConfig {
        min: 0.0,
        max: 500_000.0,
        step: 12.0,
        default: 1_200.0,
        logarithmic: true,
    },
    interest_rate: SliderConfig {
        min: 0.0,
        max: 25.0,
        step: 0.05,
        default: 5.0,
        logarithmic: false,
    },
    target_months: SliderConfig {
        min: 1.0,
        max: 600.0,
        step: 1.0,
        default: 60.0,
        logarithmic: false,
    },
};

/// Goal parameters the app starts from: each slider's starting value.
pub const DEFAULT_PARAMS: GoalParams = GoalParams::from_literals(
    SLIDERS.initial_amount.default,
    SLIDERS.goal_amount.default,
    SLIDERS.contribution_amount.default,
    SLIDERS.interest_rate.default,
);
