use std::process::{Command, Output};

use serde_json::Value;

fn savings_table(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_savings-table"))
        .args(args)
        .output()
        .expect("savings-table runs")
}

const TEN_MONTHS: [&str; 8] = [
    "--initial-amount",
    "0",
    "--goal-amount",
    "1000",
    "--contribution-amount",
    "1200",
    "--interest-rate",
    "0",
];

fn json_months(output: &Output) -> Vec<u64> {
    let report: Value = serde_json::from_slice(&output.stdout).expect("json report");
    report["rows"]
        .as_array()
        .expect("rows array")
        .iter()
        .filter_map(|row| row["month"].as_u64())
        .collect()
}

#[test]
fn every_third_month_ends_on_the_final_month() {
    let mut args = TEN_MONTHS.to_vec();
    args.extend(["--every", "3", "--json"]);
    let output = savings_table(&args);

    assert!(output.status.success());
    assert_eq!(json_months(&output), vec![3, 6, 9, 10]);
}

#[test]
fn default_prints_every_month() {
    let mut args = TEN_MONTHS.to_vec();
    args.push("--json");
    let output = savings_table(&args);

    assert!(output.status.success());
    assert_eq!(json_months(&output), (1..=10).collect::<Vec<_>>());
}

#[test]
fn met_goal_prints_no_rows_and_succeeds() {
    let output = savings_table(&["--initial-amount", "500", "--goal-amount", "100", "--json"]);

    assert!(output.status.success());
    assert!(json_months(&output).is_empty());
}

#[test]
fn unreachable_goal_exits_with_failure() {
    let output = savings_table(&[
        "--initial-amount",
        "0",
        "--goal-amount",
        "100",
        "--contribution-amount",
        "0",
        "--interest-rate",
        "0",
    ]);

    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("unreachable"));
}

#[test]
fn malformed_input_and_zero_step_are_rejected() {
    assert!(!savings_table(&["--goal-amount", "lots"]).status.success());
    assert!(!savings_table(&["--every", "0"]).status.success());
}
