use std::sync::LazyLock;

use crate::domain::GoalField;

// Glyphs covered by egui's bundled emoji fonts
pub const ICON_DOLLAR_BAG: &str = "\u{1f4b0}";
pub const ICON_TARGET: &str = "\u{1f3af}";
pub const ICON_CLOCK: &str = "\u{23f0}";
pub const ICON_CHART: &str = "\u{1f4c8}";
pub const ICON_WARNING: &str = "\u{26a0}";
pub const ICON_KEYBOARD: &str = "\u{2328}";

pub struct UiText {
    pub app_title: String,

    // --- Left panel ---
    pub inputs_heading: String,
    pub label_initial_amount: String,
    pub label_goal_amount: String,
    pub label_contribution_amount: String,
    pub label_interest_rate: String,
    pub label_time_to_save: String,
    pub hint_contribution: String,
    pub hint_time_to_save: String,

    pub planner_heading: String,
    pub label_target_months: String,
    pub label_required_deposit: String,
    pub label_required_none: String,
    pub label_required_already_met: String,

    // --- PLOT LABELS ---
    pub plot_title: String,
    pub plot_x_axis: String,
    pub plot_y_axis: String,
    pub plot_legend_principal: String,
    pub plot_legend_goal: String,

    // --- Toolbar ---
    pub tb_savings: String,
    pub tb_principal: String,
    pub tb_goal_line: String,
    pub tb_shortcuts: String,

    // --- Status panel ---
    pub sp_reached_in: String,
    pub sp_already_met: String,
    pub sp_unreachable: String,
    pub sp_deposited: String,
    pub sp_interest: String,
    pub sp_final: String,

    // --- ERRORS ---
    pub error_startup_title: String,
    pub error_startup_body: String,
}

impl UiText {
    pub fn field_label(&self, field: GoalField) -> &str {
        match field {
            GoalField::InitialAmount => &self.label_initial_amount,
            GoalField::GoalAmount => &self.label_goal_amount,
            GoalField::ContributionAmount => &self.label_contribution_amount,
            GoalField::InterestRate => &self.label_interest_rate,
        }
    }
}

pub static UI_TEXT: LazyLock<UiText> = LazyLock::new(|| UiText {
    app_title: ICON_DOLLAR_BAG.to_string() + " Savings Goal Planner",

    inputs_heading: "Your Goal".to_string(),
    label_initial_amount: "Initial Amount".to_string(),
    label_goal_amount: ICON_TARGET.to_string() + " Goal Amount",
    label_contribution_amount: "Yearly Contribution".to_string(),
    label_interest_rate: "Interest Rate (%/yr)".to_string(),
    label_time_to_save: ICON_CLOCK.to_string() + " Time to Save",
    hint_contribution: "Deposited in 12 equal monthly parts".to_string(),
    hint_time_to_save: "Computed from the inputs above".to_string(),

    planner_heading: "Deadline Planner".to_string(),
    label_target_months: "Reach the goal in (months)".to_string(),
    label_required_deposit: "Required monthly deposit".to_string(),
    label_required_none: "Not achievable at this rate".to_string(),
    label_required_already_met: "No deposits needed".to_string(),

    plot_title: "Savings Over Time".to_string(),
    plot_x_axis: "Months".to_string(),
    plot_y_axis: "Savings Amount ($)".to_string(),
    plot_legend_principal: "Deposits Only".to_string(),
    plot_legend_goal: "Goal".to_string(),

    tb_savings: "Savings".to_string(),
    tb_principal: "Deposits Only".to_string(),
    tb_goal_line: "Goal Line".to_string(),
    tb_shortcuts: ICON_KEYBOARD.to_string() + " 1/2/3 toggle lines",

    sp_reached_in: ICON_CHART.to_string() + " Goal reached in",
    sp_already_met: "Goal already met, nothing to save".to_string(),
    sp_unreachable: ICON_WARNING.to_string() + " Goal unreachable:",
    sp_deposited: "Deposited".to_string(),
    sp_interest: "Interest".to_string(),
    sp_final: "Final Balance".to_string(),

    error_startup_title: ICON_WARNING.to_string() + " Could not start",
    error_startup_body: "Fix the command-line values and restart the planner.".to_string(),
});

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_deposit_label_does_not_credit_interest() {
        // Also shown when the starting balance already covers the goal.
        assert!(!UI_TEXT.label_required_already_met.to_lowercase().contains("interest"));
    }
}
