use std::collections::BTreeMap;

use approx::assert_relative_eq;
use clap::Parser;
use savings_planner::config::{DEFAULT_PARAMS, SLIDERS};
use savings_planner::{
    Cli, GoalField, GoalSession, GoalState, InputError, ProjectionEngine, StartupError,
};

fn controls(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

#[test]
fn synchronize_reads_every_control() {
    let mut state = GoalState::new(DEFAULT_PARAMS);
    let source = controls(&[
        ("initialAmount", "0"),
        ("goalAmount", "$1,000"),
        ("contributionAmount", "1200"),
        ("interestRate", "0%"),
    ]);

    state.synchronize(&source).expect("all controls valid");

    let params = state.params();
    assert_relative_eq!(params.initial_amount(), 0.0);
    assert_relative_eq!(params.goal_amount(), 1000.0);
    assert_relative_eq!(params.monthly_deposit(), 100.0);
    assert_relative_eq!(params.monthly_rate(), 0.0);
}

#[test]
fn startup_params_come_from_slider_defaults() {
    for field in [
        GoalField::InitialAmount,
        GoalField::GoalAmount,
        GoalField::ContributionAmount,
        GoalField::InterestRate,
    ] {
        assert_relative_eq!(DEFAULT_PARAMS.get(field), SLIDERS.for_field(field).default);
    }
}

#[test]
fn from_controls_builds_state_or_reports_first_error() {
    let source = controls(&[
        ("initialAmount", "250"),
        ("goalAmount", "5,000"),
        ("contributionAmount", "$600"),
        ("interestRate", "2.5"),
    ]);
    let state = GoalState::from_controls(DEFAULT_PARAMS, &source).expect("valid controls");
    assert_relative_eq!(state.get(GoalField::InitialAmount), 250.0);
    assert_relative_eq!(state.get(GoalField::InterestRate), 2.5);

    let partial: &[(&str, &str)] = &[("initialAmount", "250")];
    assert_eq!(
        GoalState::from_controls(DEFAULT_PARAMS, partial),
        Err(InputError::MissingControl("goalAmount"))
    );
}

#[test]
fn synchronize_is_all_or_nothing() {
    let mut state = GoalState::new(DEFAULT_PARAMS);
    let source: &[(&str, &str)] = &[
        ("initialAmount", "5"),
        ("goalAmount", "abc"),
        ("contributionAmount", "1200"),
        ("interestRate", "3"),
    ];

    let err = state.synchronize(source).expect_err("goal is malformed");

    assert_eq!(
        err,
        InputError::NotANumber {
            field: GoalField::GoalAmount,
            raw: "abc".to_string()
        }
    );
    assert_eq!(state.params(), DEFAULT_PARAMS);
}

#[test]
fn synchronize_reports_missing_control() {
    let mut state = GoalState::new(DEFAULT_PARAMS);
    let source = controls(&[("initialAmount", "5"), ("goalAmount", "10")]);

    assert_eq!(
        state.synchronize(&source),
        Err(InputError::MissingControl("contributionAmount"))
    );
    assert_eq!(state.params(), DEFAULT_PARAMS);
}

#[test]
fn rejected_field_keeps_previous_value() {
    let mut state = GoalState::new(DEFAULT_PARAMS);

    for raw in ["", "abc", "NaN", "inf", "1e999"] {
        assert!(state.set_field(GoalField::InterestRate, raw).is_err(), "{raw:?} accepted");
    }
    assert_eq!(state.params(), DEFAULT_PARAMS);

    assert_eq!(state.set_field(GoalField::InitialAmount, " 1,200 "), Ok(1200.0));
    assert_eq!(state.set_field(GoalField::GoalAmount, "$50"), Ok(50.0));
}

#[test]
fn set_field_by_id_addresses_controls() {
    let mut state = GoalState::new(DEFAULT_PARAMS);

    assert_eq!(
        state.set_field_by_id("interestRate", "4.5%"),
        Ok((GoalField::InterestRate, 4.5))
    );
    assert_eq!(
        state.set_field_by_id("timeToSave", "12"),
        Err(InputError::DerivedOutput("timeToSave"))
    );
    assert_eq!(
        state.set_field_by_id("bogus", "1"),
        Err(InputError::UnknownControl("bogus".to_string()))
    );
}

#[test]
fn set_value_rejects_non_finite() {
    let mut state = GoalState::new(DEFAULT_PARAMS);
    assert!(matches!(
        state.set_value(GoalField::GoalAmount, f64::NAN),
        Err(InputError::NonFinite { field: GoalField::GoalAmount, .. })
    ));
    assert_relative_eq!(state.get(GoalField::GoalAmount), DEFAULT_PARAMS.goal_amount());
}

#[test]
fn session_publishes_time_to_save_on_accepted_edits() {
    let mut session = GoalSession::new(GoalState::new(DEFAULT_PARAMS), ProjectionEngine::default());
    let start = session.revision();

    session.set_field(GoalField::InitialAmount, "0").expect("valid");
    session.set_field(GoalField::GoalAmount, "1000").expect("valid");
    session.set_field(GoalField::ContributionAmount, "1200").expect("valid");
    session.set_value(GoalField::InterestRate, 0.0).expect("valid");

    assert_eq!(session.revision(), start + 4);
    assert_eq!(session.outputs().time_to_save, Some(10));
    assert_eq!(session.series().len(), 10);
    assert_eq!(session.required_deposit(10).map(|d| d.round()), Some(100.0));
}

#[test]
fn session_ignores_rejected_edits() {
    let mut session = GoalSession::new(GoalState::new(DEFAULT_PARAMS), ProjectionEngine::default());
    let revision = session.revision();
    let outcome = session.outcome().clone();

    assert!(session.set_field(GoalField::GoalAmount, "ten").is_err());
    assert!(session.set_field_by_id("timeToSave", "3").is_err());

    assert_eq!(session.revision(), revision);
    assert_eq!(session.outcome(), &outcome);
}

#[test]
fn unreachable_goal_clears_time_to_save() {
    let mut session = GoalSession::new(GoalState::new(DEFAULT_PARAMS), ProjectionEngine::default());
    let source: &[(&str, &str)] = &[
        ("initialAmount", "0"),
        ("goalAmount", "100"),
        ("contributionAmount", "0"),
        ("interestRate", "0"),
    ];

    session.synchronize(source).expect("valid controls");

    assert_eq!(session.outputs().time_to_save, None);
    assert!(!session.outcome().is_reached());
    assert!(session.series().is_empty());
}

#[test]
fn cli_overrides_apply_on_top_of_defaults() {
    let cli = Cli::try_parse_from([
        "savings-planner",
        "--goal-amount",
        "$5,000",
        "--interest-rate",
        "-1",
        "--max-months",
        "24",
    ])
    .expect("valid flags");

    let session = cli.goal.session().expect("valid overrides");

    assert_relative_eq!(session.params().goal_amount(), 5000.0);
    assert_relative_eq!(session.params().interest_rate(), -1.0);
    assert_relative_eq!(session.params().initial_amount(), DEFAULT_PARAMS.initial_amount());
    assert_eq!(session.engine().max_months(), 24);
}

#[test]
fn cli_rejects_malformed_override() {
    let cli = Cli::try_parse_from(["savings-planner", "--initial-amount", "lots"])
        .expect("flags parse");

    match cli.goal.session() {
        Err(StartupError::InvalidInitialState(InputError::NotANumber { field, .. })) => {
            assert_eq!(field, GoalField::InitialAmount)
        }
        other => panic!("expected invalid initial state, got {:?}", other.map(|_| ())),
    }
}

#[test]
fn zero_horizon_is_raised_to_one_month() {
    let cli = Cli::try_parse_from(["savings-planner", "--max-months", "0"]).expect("flags parse");
    assert_eq!(cli.goal.engine().max_months(), 1);
}
