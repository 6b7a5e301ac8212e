//! Summary output: CSV tables, optional JSON record, and the console report

use anyhow::{Context, Result};
use std::fs::File;
use std::io::Write;
use std::path::Path;
use tracesum_core::schema::{APP_SUMMARY, MAC_SUMMARY, PHY_SUMMARY, SCENARIO_SUMMARY};
use tracesum_core::table::{write_metrics_csv, MetricRecord, SummaryTable};
use tracesum_core::{AppSummary, MacSummary, PhySummary, ScenarioSummary};

/// Everything one summarization run produces.
#[derive(Debug)]
pub struct RunOutput {
    pub app: Vec<AppSummary>,
    pub mac: Vec<MacSummary>,
    pub phy: Vec<PhySummary>,
    pub scenario: ScenarioSummary,
}

impl RunOutput {
    /// Write the three node tables and the scenario record into `dir`.
    pub fn write_csv(&self, dir: &Path) -> Result<()> {
        std::fs::create_dir_all(dir)
            .with_context(|| format!("Failed to create summary dir: {}", dir.display()))?;

        write_table(&self.app, &dir.join(APP_SUMMARY))?;
        write_table(&self.mac, &dir.join(MAC_SUMMARY))?;
        write_table(&self.phy, &dir.join(PHY_SUMMARY))?;
        write_metrics_csv(&self.scenario.metrics(), &dir.join(SCENARIO_SUMMARY))
            .context("Failed to write scenario summary")?;

        tracing::info!("Summaries written to {}", dir.display());
        Ok(())
    }

    /// Write the scenario record as pretty JSON.
    pub fn write_json(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(&self.scenario)?;
        let mut file = File::create(path)?;
        file.write_all(json.as_bytes())?;
        println!("Scenario record written to: {}", path.display());
        Ok(())
    }

    /// Print the scenario report to stdout in human-readable format.
    pub fn print_human(&self) {
        println!("\n{}", "=".repeat(60));
        println!("Tracesum Scenario Summary");
        println!("{}", "=".repeat(60));
        println!();
        println!("Nodes:");
        println!("  App records:     {}", self.app.len());
        println!("  MAC records:     {}", self.mac.len());
        println!("  PHY records:     {}", self.phy.len());
        println!();
        print_group("Delivery ratio", &self.scenario.pdr, "");
        print_group("End-to-end delay", &self.scenario.delay, " s");
        print_group("Wake ratio", &self.scenario.wake, "");
        println!("{}", "=".repeat(60));
    }
}

fn write_table<S: MetricRecord>(records: &[S], path: &Path) -> Result<()> {
    SummaryTable::from_records(records)
        .write_csv(path)
        .with_context(|| format!("Failed to write {}", path.display()))?;
    Ok(())
}

fn print_group(label: &str, stats: &tracesum_core::GroupStats, unit: &str) {
    println!("{label} ({} node(s)):", stats.count);
    match (stats.mean, stats.min, stats.max, stats.std) {
        (Some(mean), Some(min), Some(max), Some(std)) => {
            println!("  Mean:            {mean:.4}{unit}");
            println!("  Min:             {min:.4}{unit}");
            println!("  Max:             {max:.4}{unit}");
            println!("  Std:             {std:.4}{unit}");
        }
        _ => println!("  (no data)"),
    }
    println!();
}

/// True when every summary file already exists non-empty, so the run can be
/// skipped without recomputation.
pub fn summaries_complete(dir: &Path) -> bool {
    [APP_SUMMARY, MAC_SUMMARY, PHY_SUMMARY, SCENARIO_SUMMARY].iter().all(|name| {
        let path = dir.join(name);
        std::fs::metadata(&path).map(|m| m.len() > 0).unwrap_or(false)
    })
}
