use anyhow::{Context, Result, bail};
use clap::Parser;
use serde::Serialize;
use tabled::{Table, Tabled, settings::Style};

use savings_planner::GoalArgs;
use savings_planner::models::{MonthRow, ProjectionOutcome, ProjectionSummary};
use savings_planner::ui::utils::format_money;
use savings_planner::utils::format_months;

/// Print the month-by-month savings schedule for a goal.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct TableCli {
    #[command(flatten)]
    goal: GoalArgs,

    /// Print only every k-th month (the last month is always printed)
    #[arg(long, default_value_t = 1)]
    every: usize,

    /// Emit JSON instead of a table
    #[arg(long)]
    json: bool,
}

#[derive(Tabled)]
struct ScheduleRow {
    #[tabled(rename = "Month")]
    month: usize,
    #[tabled(rename = "Deposit")]
    deposit: String,
    #[tabled(rename = "Interest")]
    interest: String,
    #[tabled(rename = "Balance")]
    balance: String,
}

impl From<&MonthRow> for ScheduleRow {
    fn from(row: &MonthRow) -> Self {
        Self {
            month: row.month,
            deposit: format_money(row.deposit),
            interest: format_money(row.interest),
            balance: format_money(row.balance),
        }
    }
}

#[derive(Serialize)]
struct JsonReport<'a> {
    reached: bool,
    unreachable_reason: Option<String>,
    summary: ProjectionSummary,
    rows: &'a [MonthRow],
}

fn print_table(rows: &[MonthRow], summary: &ProjectionSummary) {
    if rows.is_empty() {
        println!("No months needed: the goal is already met.");
    } else {
        let table_rows: Vec<ScheduleRow> = rows.iter().map(ScheduleRow::from).collect();
        let mut table = Table::new(table_rows);
        table.with(Style::rounded());
        println!("{}", table);
    }

    println!();
    println!("Months:          {} ({})", summary.months, format_months(summary.months));
    println!("Total deposited: {}", format_money(summary.total_deposited));
    println!("Interest earned: {}", format_money(summary.interest_earned));
    println!("Final balance:   {}", format_money(summary.final_balance));
}

fn main() -> Result<()> {
    // 1. Setup Logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    // 2. Parse inputs through the same boundary as the GUI controls
    let cli = TableCli::parse();
    if cli.every == 0 {
        bail!("--every must be at least 1");
    }
    let session = cli.goal.session().context("Invalid goal parameters")?;

    // 3. Project
    let outcome = session.outcome();
    let projection = outcome.projection();
    let summary = projection.summary();
    let rows = projection.sampled_rows(cli.every);

    // 4. Report
    if cli.json {
        let report = JsonReport {
            reached: outcome.is_reached(),
            unreachable_reason: outcome.unreachable_reason().map(|r| r.to_string()),
            summary,
            rows: &rows,
        };
        let json = serde_json::to_string_pretty(&report).context("Failed to serialize report")?;
        println!("{}", json);
    } else {
        print_table(&rows, &summary);
    }

    match outcome {
        ProjectionOutcome::Reached(_) => Ok(()),
        ProjectionOutcome::Unreachable { reason, .. } => {
            bail!("Goal is unreachable: {}", reason)
        }
    }
}
