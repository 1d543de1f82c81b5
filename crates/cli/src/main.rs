//! End-of-shift handoff report generator.
//!
//! Pulls shift, incident, alert, and escalation data from the on-call
//! management service and prints a plain-text summary for the outgoing
//! on-call person to hand to the next shift.
//!
//! Run `handoff --help` for usage information.

// CLI binaries legitimately need println! for user output
#![allow(clippy::disallowed_macros)]

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use handoff_oncall::OnCallClient;
use handoff_report::{render_report, EscalationEntry, PeriodSummary, ReportConfig};

#[derive(Parser)]
#[command(name = "handoff")]
#[command(about = "Generate an end-of-shift report for an on-call rotation")]
#[command(version)]
struct Cli {
    /// Schedule to report on
    #[arg(short, long, default_value = "primary")]
    schedule: String,

    /// Alerts before this hour (UTC) count as graveyard alerts
    #[arg(long, default_value_t = 6)]
    graveyard_cutoff: u32,

    /// Number of triggers to list
    #[arg(long, default_value_t = 5)]
    top_triggers: usize,

    /// Write the report to a file instead of stdout
    #[arg(short, long)]
    output: Option<std::path::PathBuf>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("warn")
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false))
        .with(filter)
        .init();

    let report = build_report(&cli).await?;

    match &cli.output {
        Some(path) => std::fs::write(path, &report)
            .with_context(|| format!("writing report to {}", path.display()))?,
        None => println!("{report}"),
    }

    Ok(())
}

/// Fetch everything the report needs and render it.
///
/// One linear pipeline: schedule lookup, then incidents, then alerts, then
/// the escalation policy, then pure in-memory aggregation and formatting.
async fn build_report(cli: &Cli) -> Result<String> {
    let client = OnCallClient::from_env().context("configuring on-call service client")?;

    let windows = client
        .shift_windows(&cli.schedule)
        .await
        .with_context(|| format!("looking up shift windows for schedule '{}'", cli.schedule))?;

    info!(oncall = %windows.oncall, "resolved shift windows");

    // Everything since the previous shift started covers both windows.
    let since = windows.previous.start();

    let mut incidents = PeriodSummary::new(windows.current, windows.previous);
    for record in client
        .incidents_since(since)
        .await
        .context("fetching incidents")?
    {
        incidents.append(record.into_event());
    }

    let mut alerts = PeriodSummary::new(windows.current, windows.previous);
    for record in client
        .alerts_since(since)
        .await
        .context("fetching alerts")?
    {
        alerts.append(record.into_event());
    }

    let policy = client
        .escalation_policy()
        .await
        .context("fetching escalation policy")?;
    let escalations: Vec<EscalationEntry> = policy
        .levels
        .into_iter()
        .map(|level| EscalationEntry {
            level: level.level,
            person: level.person,
            label: level.label,
        })
        .collect();

    let config = ReportConfig {
        graveyard_cutoff_hour: cli.graveyard_cutoff,
        top_triggers: cli.top_triggers,
    };

    Ok(render_report(
        &windows.oncall,
        &escalations,
        &incidents,
        &alerts,
        &config,
    ))
}
