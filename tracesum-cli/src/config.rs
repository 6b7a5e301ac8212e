//! Scenario profile support
//!
//! A profile is a TOML file describing one simulation run: where its logs
//! live, which nodes sent traffic to which sink, and the parameter set the
//! run was launched with. The parameter set determines the run's directory
//! inside the log root, so summaries always land next to the logs they came
//! from.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Top-level scenario profile
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Profile {
    pub scenario: ScenarioConfig,
    #[serde(default)]
    pub features: FeatureFlags,
    pub nodes: NodesConfig,
}

/// Scenario identity and run parameters
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ScenarioConfig {
    /// Root directory holding per-run log trees
    pub log_root: PathBuf,
    /// Node placement name (e.g. "center", "grid")
    pub placement: String,
    /// Deployment density name (e.g. "dense", "sparse")
    pub density: String,
    /// Traffic application name (e.g. "periodic", "random")
    pub app: String,
    /// Beacon interval, milliseconds
    pub beacon_interval_ms: u64,
    /// Transmit wait duration, milliseconds
    pub tx_wait_ms: u64,
    /// Data wait duration, milliseconds
    pub data_wait_ms: u64,
    /// Simulated days
    pub days: u64,
    /// Run seed
    pub seed: u64,
}

/// MAC feature tags that name the run's module directory
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct FeatureFlags {
    pub data_csma: bool,
    pub data_pre_cs: bool,
    pub data_pre_cs_b: bool,
    pub beacon_csma: bool,
    pub beacon_pre_cs: bool,
    pub beacon_pre_cs_b: bool,
    pub continuous_tx: bool,
    pub beacon_randomize: bool,
    pub compact_data_request: bool,
    pub beacon_ack: bool,
}

/// Node roles for the run
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct NodesConfig {
    /// Sending nodes; empty means discover from the log tree
    #[serde(default)]
    pub senders: Vec<String>,
    /// The fixed sink node
    pub receiver: String,
}

impl Profile {
    /// Load a profile from a TOML file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read profile: {}", path.display()))?;
        let profile: Profile = toml::from_str(&content)
            .with_context(|| format!("Failed to parse profile: {}", path.display()))?;
        Ok(profile)
    }

    /// `<placement>_<density>_<app>`
    pub fn scenario_type(&self) -> String {
        format!(
            "{}_{}_{}",
            self.scenario.placement, self.scenario.density, self.scenario.app
        )
    }

    /// Underscore-joined feature tags naming the MAC variant
    pub fn module_name(&self) -> String {
        let f = &self.features;
        let mut tags: Vec<&str> = Vec::new();
        if f.data_csma && f.data_pre_cs {
            tags.push("csma_precs");
        } else if f.data_csma {
            tags.push("csma");
        } else if f.data_pre_cs {
            tags.push("precs");
        } else if f.data_pre_cs_b {
            tags.push("precsb");
        } else {
            tags.push("nocsma");
        }
        if f.beacon_csma && f.beacon_pre_cs {
            tags.push("bcsma_bprecs");
        } else if f.beacon_csma {
            tags.push("bcsma");
        } else if f.beacon_pre_cs {
            tags.push("bprecs");
        } else if f.beacon_pre_cs_b {
            tags.push("bprecsb");
        } else {
            tags.push("bnocsma");
        }
        if f.continuous_tx {
            tags.push("cont");
        }
        if f.beacon_randomize {
            tags.push("random");
        }
        if f.compact_data_request {
            tags.push("compact");
        }
        if f.beacon_ack {
            tags.push("back");
        }
        tags.join("_")
    }

    /// Run directory relative to the log root
    pub fn parameter_dir(&self) -> PathBuf {
        let s = &self.scenario;
        PathBuf::from(self.scenario_type()).join(self.module_name()).join(format!(
            "BI{}_TWD{}_DWD{}_Days{}",
            s.beacon_interval_ms, s.tx_wait_ms, s.data_wait_ms, s.days
        )).join(format!("SEED{:02}", s.seed))
    }

    /// Absolute run directory holding the `node-*` log trees
    pub fn scenario_dir(&self) -> PathBuf {
        self.scenario.log_root.join(self.parameter_dir())
    }

    /// Where summary files are written for this run
    pub fn summary_dir(&self) -> PathBuf {
        self.scenario_dir().join("summary")
    }
}
