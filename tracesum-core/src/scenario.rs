//! Scenario-level distribution statistics
//!
//! Reduces the application- and physical-layer node records of one scenario
//! run to three independent statistic groups. Each group is a total function
//! over optional values, so an empty or partially-defined input narrows that
//! group to the empty result without touching the others.

use crate::stats::GroupStats;
use crate::summary::{AppSummary, PhySummary};
use serde::Serialize;

/// Scenario statistics: delivery ratio and delay over transmitting nodes,
/// wake ratio over all nodes reporting sleep-state occupancy.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScenarioSummary {
    pub pdr: GroupStats,
    pub delay: GroupStats,
    pub wake: GroupStats,
}

/// Reduce per-node tables to one scenario record.
pub fn summarize_scenario(app: &[AppSummary], phy: &[PhySummary]) -> ScenarioSummary {
    let pdr = GroupStats::from_values(
        app.iter().filter(|r| r.tx_total > 0).map(|r| r.pdr),
    );
    let delay = GroupStats::from_values(
        app.iter().filter(|r| r.tx_total > 0).map(|r| r.avg_delay),
    );
    // Wake ratio is the complement of time spent with the transceiver off.
    let wake = GroupStats::from_values(
        phy.iter().map(|r| r.sleep_ratio().map(|off| 1.0 - off)),
    );

    ScenarioSummary { pdr, delay, wake }
}

impl ScenarioSummary {
    /// Flat metric pairs for the one-row scenario table.
    pub fn metrics(&self) -> Vec<(String, Option<f64>)> {
        let mut metrics = Vec::with_capacity(15);
        push_group(&mut metrics, "pdr", "pdr_node_count", &self.pdr);
        push_group(&mut metrics, "delay", "delay_node_count", &self.delay);
        push_group(&mut metrics, "wake_ratio", "wake_node_count", &self.wake);
        metrics
    }
}

fn push_group(
    metrics: &mut Vec<(String, Option<f64>)>,
    prefix: &str,
    count_name: &str,
    stats: &GroupStats,
) {
    metrics.push((format!("{prefix}_mean"), stats.mean));
    metrics.push((format!("{prefix}_min"), stats.min));
    metrics.push((format!("{prefix}_max"), stats.max));
    metrics.push((format!("{prefix}_std"), stats.std));
    metrics.push((count_name.to_string(), Some(stats.count as f64)));
}
