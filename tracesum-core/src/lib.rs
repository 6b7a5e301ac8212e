//! Tracesum core library
//!
//! This crate post-processes timestamped event traces produced by a
//! discrete-event network simulation (per-node application, MAC, and
//! physical-layer logs) into per-node and per-scenario statistics: delivery
//! ratio, delay, transmit/receive/drop counts, wait-time distributions, and
//! state-occupancy ratios.

pub mod error;
pub mod fleet;
pub mod reader;
pub mod scenario;
pub mod schema;
pub mod stats;
pub mod summary;
pub mod table;

pub use error::{Error, Result};
pub use fleet::{
    aggregate_app_summaries, aggregate_mac_summaries, aggregate_phy_summaries, FleetOutcome,
    NodeFailure,
};
pub use reader::{DirLogReader, LogReader};
pub use scenario::{summarize_scenario, ScenarioSummary};
pub use stats::{Delivery, GroupStats, StateOccupancy, WaitIntervals};
pub use summary::{AppSummary, MacSummary, PhySummary};
pub use table::{MetricRecord, SummaryTable};
