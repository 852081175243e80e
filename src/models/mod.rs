mod chart_series;
mod deposit_solver;
mod goal_state;
mod projection;
mod session;

pub use chart_series::ChartSeries;
pub use deposit_solver::required_monthly_deposit;
pub use goal_state::{ControlSource, GoalState};
pub use projection::{
    MonthRow, Projection, ProjectionEngine, ProjectionOutcome, ProjectionSummary,
    UnreachableReason,
};
pub use session::GoalSession;
