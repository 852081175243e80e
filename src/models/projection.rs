//! Month-by-month savings simulation.
//!
//! Each simulated month deposits the monthly contribution first and then applies one
//! month of interest to the post-deposit balance. The run stops on the first month
//! whose closing balance reaches the goal, or when the horizon is exhausted.

use serde::Serialize;

use crate::config::constants::projection::DEFAULT_MAX_MONTHS;
use crate::domain::GoalParams;

/// Why a goal could not be reached.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum UnreachableReason {
    /// No positive deposit, and interest cannot help (non-positive rate or balance).
    NoGrowth,
    /// The balance was still short of the goal after `max_months`.
    HorizonExceeded { max_months: usize },
    /// The balance overflowed or became NaN (absurd rates).
    NonFiniteBalance { month: usize },
}

impl std::fmt::Display for UnreachableReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NoGrowth => write!(f, "balance never grows with these contributions and rate"),
            Self::HorizonExceeded { max_months } => {
                write!(f, "goal not reached within {} months", max_months)
            }
            Self::NonFiniteBalance { month } => {
                write!(f, "balance stopped being a finite number at month {}", month)
            }
        }
    }
}

/// Closing balances, one per elapsed month. `balances[0]` is the end of month 1.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct Projection {
    initial_amount: f64,
    monthly_deposit: f64,
    balances: Vec<f64>,
}

impl Projection {
    fn start(params: &GoalParams) -> Self {
        Self {
            initial_amount: params.initial_amount(),
            monthly_deposit: params.monthly_deposit(),
            balances: Vec::new(),
        }
    }

    #[inline]
    pub fn months(&self) -> usize {
        self.balances.len()
    }

    #[inline]
    pub fn balances(&self) -> &[f64] {
        &self.balances
    }

    pub fn is_empty(&self) -> bool {
        self.balances.is_empty()
    }

    /// Month labels `1..=N`, index-aligned with `balances`.
    pub fn labels(&self) -> Vec<usize> {
        (1..=self.months()).collect()
    }

    pub fn final_balance(&self) -> f64 {
        self.balances.last().copied().unwrap_or(self.initial_amount)
    }

    /// Balance after `month` months of deposits with no interest at all.
    pub fn principal_at(&self, month: usize) -> f64 {
        self.initial_amount + self.monthly_deposit * month as f64
    }

    pub fn summary(&self) -> ProjectionSummary {
        let months = self.months();
        let total_deposited = self.monthly_deposit * months as f64;
        let final_balance = self.final_balance();
        ProjectionSummary {
            months,
            total_deposited,
            interest_earned: final_balance - self.initial_amount - total_deposited,
            final_balance,
        }
    }

    /// Per-month breakdown used by the table output.
    pub fn rows(&self) -> impl Iterator<Item = MonthRow> + '_ {
        let mut previous = self.initial_amount;
        self.balances.iter().enumerate().map(move |(i, &balance)| {
            let row = MonthRow {
                month: i + 1,
                deposit: self.monthly_deposit,
                interest: balance - previous - self.monthly_deposit,
                balance,
            };
            previous = balance;
            row
        })
    }

    /// Every `every`-th month plus the final one, so a thinned schedule still ends on
    /// the closing balance. `every = 0` is treated as 1.
    pub fn sampled_rows(&self, every: usize) -> Vec<MonthRow> {
        let every = every.max(1);
        let last = self.months();
        self.rows()
            .filter(|r| r.month % every == 0 || r.month == last)
            .collect()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ProjectionSummary {
    pub months: usize,
    pub total_deposited: f64,
    pub interest_earned: f64,
    pub final_balance: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MonthRow {
    pub month: usize,
    pub deposit: f64,
    pub interest: f64,
    pub balance: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum ProjectionOutcome {
    Reached(Projection),
    /// `partial` holds whatever was simulated before giving up.
    Unreachable {
        reason: UnreachableReason,
        partial: Projection,
    },
}

impl ProjectionOutcome {
    /// The trajectory to draw, complete or partial.
    pub fn projection(&self) -> &Projection {
        match self {
            Self::Reached(p) => p,
            Self::Unreachable { partial, .. } => partial,
        }
    }

    pub fn months_to_goal(&self) -> Option<usize> {
        match self {
            Self::Reached(p) => Some(p.months()),
            Self::Unreachable { .. } => None,
        }
    }

    pub fn is_reached(&self) -> bool {
        matches!(self, Self::Reached(_))
    }

    pub fn unreachable_reason(&self) -> Option<UnreachableReason> {
        match self {
            Self::Reached(_) => None,
            Self::Unreachable { reason, .. } => Some(*reason),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProjectionEngine {
    max_months: usize,
}

impl Default for ProjectionEngine {
    fn default() -> Self {
        Self {
            max_months: DEFAULT_MAX_MONTHS,
        }
    }
}

impl ProjectionEngine {
    pub fn with_max_months(max_months: usize) -> Self {
        Self { max_months }
    }

    pub fn max_months(&self) -> usize {
        self.max_months
    }

    pub fn project(&self, params: &GoalParams) -> ProjectionOutcome {
        let monthly_rate = params.monthly_rate();
        let monthly_deposit = params.monthly_deposit();
        let goal = params.goal_amount();

        let mut projection = Projection::start(params);
        let mut balance = params.initial_amount();

        if balance >= goal {
            return ProjectionOutcome::Reached(projection);
        }

        // Interest on a non-positive balance never pulls it up.
        if monthly_deposit <= 0.0 && (monthly_rate <= 0.0 || balance <= 0.0) {
            return Self::give_up(UnreachableReason::NoGrowth, projection);
        }

        projection.balances.reserve(self.max_months.min(1024));

        while balance < goal {
            if projection.balances.len() >= self.max_months {
                return Self::give_up(
                    UnreachableReason::HorizonExceeded {
                        max_months: self.max_months,
                    },
                    projection,
                );
            }

            balance += monthly_deposit;
            balance += balance * monthly_rate;

            if !balance.is_finite() {
                let month = projection.balances.len() + 1;
                return Self::give_up(UnreachableReason::NonFiniteBalance { month }, projection);
            }

            projection.balances.push(balance);
        }

        #[cfg(debug_assertions)]
        if crate::config::DF.log_projection {
            log::info!(
                "Goal {:.2} reached in {} months (final balance {:.2})",
                goal,
                projection.months(),
                balance
            );
        }

        ProjectionOutcome::Reached(projection)
    }

    fn give_up(reason: UnreachableReason, partial: Projection) -> ProjectionOutcome {
        #[cfg(debug_assertions)]
        if crate::config::DF.log_projection {
            log::info!("Projection gave up after {} months: {}", partial.months(), reason);
        }
        ProjectionOutcome::Unreachable { reason, partial }
    }
}
