use approx::assert_relative_eq;
use savings_planner::GoalParams;
use savings_planner::models::required_monthly_deposit;

fn params(initial: f64, goal: f64, rate: f64) -> GoalParams {
    GoalParams::new(initial, goal, 0.0, rate).expect("finite params")
}

#[test]
fn zero_rate_splits_shortfall_evenly() {
    let deposit = required_monthly_deposit(&params(0.0, 1200.0, 0.0), 12).expect("solvable");
    assert_relative_eq!(deposit, 100.0);
}

#[test]
fn zero_months_has_no_answer() {
    assert_eq!(required_monthly_deposit(&params(0.0, 1200.0, 5.0), 0), None);
}

#[test]
fn goal_already_met_needs_nothing() {
    assert_eq!(required_monthly_deposit(&params(2000.0, 1000.0, 0.0), 12), Some(0.0));
}

#[test]
fn interest_alone_can_cover_the_goal() {
    // 12% a year is 1% a month: 1000 grows to 1010 after one month.
    assert_eq!(required_monthly_deposit(&params(1000.0, 1005.0, 12.0), 1), Some(0.0));
}

#[test]
fn single_month_with_interest() {
    // d * 1.01 = 101
    let deposit = required_monthly_deposit(&params(0.0, 101.0, 12.0), 1).expect("solvable");
    assert_relative_eq!(deposit, 100.0, max_relative = 1e-12);
}

#[test]
fn interest_lowers_the_required_deposit() {
    let flat = required_monthly_deposit(&params(0.0, 10_000.0, 0.0), 60).expect("solvable");
    let with_rate = required_monthly_deposit(&params(0.0, 10_000.0, 6.0), 60).expect("solvable");
    assert!(with_rate < flat);
}
