//! Common test utilities for integration tests
//!
//! Builds synthetic scenario log trees on disk so the full pipeline can be
//! driven end-to-end against real files.

#![allow(dead_code)]

use std::io::Write;
use std::path::{Path, PathBuf};
use tracesum_core::schema::{MacLogFiles, APP_RXLOG, APP_TXLOG, PHY_RXLOG, PHY_STATELOG, PHY_TXLOG};

/// Writes per-node log files into a scenario directory.
pub struct LogTree {
    root: PathBuf,
}

impl LogTree {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn node_dir(&self, node: &str) -> PathBuf {
        self.root.join(format!("node-{node}"))
    }

    /// Write one raw log file for a node
    pub fn write_log(&self, node: &str, file: &str, lines: &[String]) {
        let dir = self.node_dir(node);
        std::fs::create_dir_all(&dir).unwrap();
        let mut f = std::fs::File::create(dir.join(file)).unwrap();
        for line in lines {
            writeln!(f, "{line}").unwrap();
        }
    }

    /// Write an application transmit log from `(time, uid)` pairs
    pub fn app_tx(&self, node: &str, rows: &[(f64, u64)]) {
        let lines: Vec<String> = rows.iter().map(|(t, uid)| format!("{t},{uid}")).collect();
        self.write_log(node, APP_TXLOG, &lines);
    }

    /// Write an application receive log from `(time, uid)` pairs
    pub fn app_rx(&self, node: &str, rows: &[(f64, u64)]) {
        let lines: Vec<String> = rows.iter().map(|(t, uid)| format!("{t},{uid}")).collect();
        self.write_log(node, APP_RXLOG, &lines);
    }

    /// Write a PHY state log from `(time, state)` pairs
    pub fn phy_states(&self, node: &str, rows: &[(f64, &str)]) {
        let lines: Vec<String> = rows.iter().map(|(t, s)| format!("{t},{s}")).collect();
        self.write_log(node, PHY_STATELOG, &lines);
    }

    /// Write empty PHY tx/rx logs so PHY summarization succeeds
    pub fn empty_phy_traffic(&self, node: &str) {
        self.write_log(node, PHY_TXLOG, &[]);
        self.write_log(node, PHY_RXLOG, &[]);
    }

    /// Write a full but quiet MAC log set for a node
    pub fn empty_mac_logs(&self, node: &str) {
        let files = MacLogFiles::default();
        for file in [&files.tx, &files.rx, &files.state, &files.beacon_wait, &files.data_wait] {
            self.write_log(node, file, &[]);
        }
    }
}
