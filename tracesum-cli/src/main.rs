use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use tracesum_core::schema::MacLogFiles;
use tracesum_core::{
    aggregate_app_summaries, aggregate_mac_summaries, aggregate_phy_summaries,
    summarize_scenario, DirLogReader,
};

mod config;
mod output;

use config::Profile;
use output::{summaries_complete, RunOutput};

/// Tracesum: simulation trace summarizer
///
/// Tracesum reads the per-node event logs of one simulation run (application,
/// MAC, and physical layer) and reduces them to per-node and scenario-level
/// statistics. Runs are described by TOML profiles.
///
/// Example usage:
///   tracesum summarize -P profiles/center-dense.toml
///   tracesum summarize -P profiles/center-dense.toml --force --json
///   tracesum nodes -P profiles/center-dense.toml
#[derive(Parser)]
#[command(name = "tracesum")]
#[command(version, about = "Simulation trace summarizer", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short = 'l', long, default_value = "info", global = true)]
    log_level: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Summarize one scenario run into per-node and scenario CSV tables
    Summarize {
        /// Path to TOML profile describing the run
        #[arg(short = 'P', long, required = true)]
        profile: PathBuf,

        /// Recompute even when the summary files already exist
        #[arg(long)]
        force: bool,

        /// Also write the scenario record as JSON next to the CSVs
        #[arg(long)]
        json: bool,
    },

    /// List the node ids found in a run's log tree
    Nodes {
        /// Path to TOML profile describing the run
        #[arg(short = 'P', long, required = true)]
        profile: PathBuf,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| cli.log_level.clone().into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    match cli.command {
        Commands::Summarize { profile, force, json } => summarize(&profile, force, json),
        Commands::Nodes { profile } => list_nodes(&profile),
    }
}

fn summarize(profile_path: &Path, force: bool, json: bool) -> Result<()> {
    let profile = Profile::from_file(profile_path)?;
    let scenario_dir = profile.scenario_dir();
    if !scenario_dir.is_dir() {
        bail!("Scenario log directory not found: {}", scenario_dir.display());
    }

    let summary_dir = profile.summary_dir();
    if !force && summaries_complete(&summary_dir) {
        tracing::info!(
            "Summaries already complete in {}; use --force to recompute",
            summary_dir.display()
        );
        return Ok(());
    }

    let reader = DirLogReader::new(&scenario_dir);
    let receiver = profile.nodes.receiver.clone();
    let senders = resolve_senders(&profile, &reader)?;
    let mut all_nodes = senders.clone();
    if !all_nodes.iter().any(|n| *n == receiver) {
        all_nodes.push(receiver.clone());
    }
    tracing::info!(
        "Summarizing {} node(s) in {}",
        all_nodes.len(),
        scenario_dir.display()
    );

    let app = aggregate_app_summaries(&reader, &senders, &receiver);
    let mac = aggregate_mac_summaries(&reader, &all_nodes, &MacLogFiles::default());
    let phy = aggregate_phy_summaries(&reader, &all_nodes);
    let scenario = summarize_scenario(&app.records, &phy.records);

    let output = RunOutput {
        app: app.records,
        mac: mac.records,
        phy: phy.records,
        scenario,
    };
    output.write_csv(&summary_dir)?;
    if json {
        output.write_json(&summary_dir.join("scenario_summary.json"))?;
    }
    output.print_human();

    Ok(())
}

fn list_nodes(profile_path: &Path) -> Result<()> {
    let profile = Profile::from_file(profile_path)?;
    let reader = DirLogReader::new(profile.scenario_dir());
    let nodes = reader
        .discover_nodes()
        .with_context(|| format!("Failed to scan {}", reader.root().display()))?;

    for node in &nodes {
        println!("{node}");
    }
    tracing::info!("{} node(s) found", nodes.len());
    Ok(())
}

/// Senders come from the profile when pinned, otherwise from scanning the
/// log tree (every node but the receiver).
fn resolve_senders(profile: &Profile, reader: &DirLogReader) -> Result<Vec<String>> {
    if !profile.nodes.senders.is_empty() {
        return Ok(profile.nodes.senders.clone());
    }
    let discovered = reader
        .discover_nodes()
        .with_context(|| format!("Failed to scan {}", reader.root().display()))?;
    Ok(discovered.into_iter().filter(|n| *n != profile.nodes.receiver).collect())
}
