use approx::assert_relative_eq;
use proptest::prelude::*;
use savings_planner::models::{ChartSeries, UnreachableReason, required_monthly_deposit};
use savings_planner::{GoalParams, ProjectionEngine, ProjectionOutcome};

proptest! {
    #[test]
    fn balances_never_decrease_with_non_negative_inputs(
        initial in 0.0f64..100_000.0,
        goal in 0.0f64..1_000_000.0,
        contribution in 0.0f64..100_000.0,
        rate in 0.0f64..20.0
    ) {
        let params = GoalParams::new(initial, goal, contribution, rate).expect("finite");
        let outcome = ProjectionEngine::default().project(&params);
        let balances = outcome.projection().balances();

        prop_assert!(balances.windows(2).all(|w| w[0] <= w[1]));
        if let Some(first) = balances.first() {
            prop_assert!(*first >= initial);
        }
    }

    #[test]
    fn reached_projection_stops_on_first_month_at_goal(
        initial in 0.0f64..10_000.0,
        goal in 0.0f64..200_000.0,
        contribution in 1.0f64..50_000.0,
        rate in 0.0f64..15.0
    ) {
        let params = GoalParams::new(initial, goal, contribution, rate).expect("finite");
        let engine = ProjectionEngine::default();
        let outcome = engine.project(&params);

        match &outcome {
            ProjectionOutcome::Reached(p) => {
                let balances = p.balances();
                if let Some((last, earlier)) = balances.split_last() {
                    prop_assert!(*last >= goal);
                    prop_assert!(earlier.iter().all(|b| *b < goal));
                } else {
                    prop_assert!(initial >= goal);
                }
            }
            ProjectionOutcome::Unreachable { reason, partial } => {
                prop_assert_eq!(
                    *reason,
                    UnreachableReason::HorizonExceeded { max_months: engine.max_months() }
                );
                prop_assert_eq!(partial.months(), engine.max_months());
            }
        }
    }

    #[test]
    fn positive_deposit_terminates_within_linear_bound(
        initial in 0.0f64..10_000.0,
        shortfall in 1.0f64..100_000.0,
        months_hint in 1usize..1_000,
        rate in 0.0f64..10.0
    ) {
        // Deposits alone cover the shortfall in `months_hint` months.
        let contribution = shortfall / months_hint as f64 * 12.0;
        let params =
            GoalParams::new(initial, initial + shortfall, contribution, rate).expect("finite");
        let outcome = ProjectionEngine::default().project(&params);

        prop_assert!(outcome.is_reached());
        let months = outcome.months_to_goal().unwrap_or(usize::MAX);
        prop_assert!(months <= months_hint + 1);
    }

    #[test]
    fn chart_series_is_index_aligned(
        initial in 0.0f64..5_000.0,
        goal in 0.0f64..50_000.0,
        contribution in 0.0f64..20_000.0,
        rate in 0.0f64..12.0
    ) {
        let params = GoalParams::new(initial, goal, contribution, rate).expect("finite");
        let engine = ProjectionEngine::with_max_months(600);
        let outcome = engine.project(&params);
        let series = ChartSeries::from_projection(outcome.projection());

        prop_assert_eq!(series.labels.len(), outcome.projection().months());
        prop_assert_eq!(series.balances.len(), series.labels.len());
        prop_assert_eq!(series.principal.len(), series.labels.len());
        for (i, label) in series.labels.iter().enumerate() {
            prop_assert_eq!(*label, i + 1);
        }
        if let Some(months) = outcome.months_to_goal() {
            prop_assert_eq!(months, series.len());
        }
    }

    #[test]
    fn required_deposit_agrees_with_simulation(
        initial in 0.0f64..5_000.0,
        extra in 1_000.0f64..100_000.0,
        months in 1usize..480,
        rate in 0.0f64..12.0
    ) {
        let goal = initial + extra;
        let base = GoalParams::new(initial, goal, 0.0, rate).expect("finite");
        let deposit = required_monthly_deposit(&base, months).expect("solvable");
        prop_assume!(deposit > 0.0);

        let params = GoalParams::new(initial, goal, deposit * 12.0, rate).expect("finite");
        let outcome = ProjectionEngine::default().project(&params);
        let projection = outcome.projection();

        // Rounding may leave the closing balance a hair short of the goal.
        let reached_in = outcome.months_to_goal().expect("reachable");
        prop_assert!(reached_in == months || reached_in == months + 1);
        assert_relative_eq!(projection.balances()[months - 1], goal, max_relative = 1e-9);
    }
}
