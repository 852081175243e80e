#![allow(clippy::collapsible_if)]
#![allow(clippy::collapsible_else_if)]

// Core modules
pub mod app;
pub mod config;
pub mod domain;
pub mod error;
pub mod models;
pub mod ui;
pub mod utils;

// Re-export commonly used types outside of crate (for the savings-table binary)
pub use app::App;
pub use domain::{GoalField, GoalOutputs, GoalParams};
pub use error::{InputError, InputResult, StartupError};
pub use models::{GoalSession, GoalState, Projection, ProjectionEngine, ProjectionOutcome};

// CLI argument parsing
use clap::{Args, Parser};

use crate::config::{DEFAULT_PARAMS, constants::projection};

/// Goal overrides shared by the GUI and the table binary. Values are parsed through
/// the same boundary as the on-screen controls.
#[derive(Args, Debug, Clone)]
pub struct GoalArgs {
    /// Starting balance
    #[arg(long, allow_hyphen_values = true)]
    pub initial_amount: Option<String>,

    /// Target balance
    #[arg(long, allow_hyphen_values = true)]
    pub goal_amount: Option<String>,

    /// Annual contribution (deposited in twelve monthly parts)
    #[arg(long, allow_hyphen_values = true)]
    pub contribution_amount: Option<String>,

    /// Nominal annual interest rate in percent
    #[arg(long, allow_hyphen_values = true)]
    pub interest_rate: Option<String>,

    /// Longest projection (in months) before the goal is declared unreachable
    #[arg(long, default_value_t = projection::DEFAULT_MAX_MONTHS)]
    pub max_months: usize,
}

impl Default for GoalArgs {
    fn default() -> Self {
        Self {
            initial_amount: None,
            goal_amount: None,
            contribution_amount: None,
            interest_rate: None,
            max_months: projection::DEFAULT_MAX_MONTHS,
        }
    }
}

impl GoalArgs {
    fn overrides(&self) -> impl Iterator<Item = (GoalField, &str)> {
        [
            (GoalField::InitialAmount, &self.initial_amount),
            (GoalField::GoalAmount, &self.goal_amount),
            (GoalField::ContributionAmount, &self.contribution_amount),
            (GoalField::InterestRate, &self.interest_rate),
        ]
        .into_iter()
        .filter_map(|(field, raw)| raw.as_deref().map(|raw| (field, raw)))
    }

    /// Default parameters with any command-line overrides applied.
    pub fn goal_state(&self) -> InputResult<GoalState> {
        let mut state = GoalState::new(DEFAULT_PARAMS);
        for (field, raw) in self.overrides() {
            state.set_field(field, raw)?;
        }
        Ok(state)
    }

    pub fn engine(&self) -> ProjectionEngine {
        ProjectionEngine::with_max_months(self.max_months.clamp(1, projection::MAX_MONTHS_LIMIT))
    }

    /// Ready-to-use session, or the first rejected override.
    pub fn session(&self) -> Result<GoalSession, StartupError> {
        Ok(GoalSession::new(self.goal_state()?, self.engine()))
    }
}

#[derive(Parser, Debug, Clone, Default)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(flatten)]
    pub goal: GoalArgs,
}

/// Main application entry point - creates the GUI app
/// This is the public API for the binary to call
pub fn run_app(cc: &eframe::CreationContext<'_>, args: Cli) -> App {
    App::new(cc, args)
}
