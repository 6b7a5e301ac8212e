//! Fleet aggregation: drive a per-node builder across a node set.
//!
//! Node computations are independent, so one bad node must not abort the
//! batch. Every node's build is run to a tagged outcome and the outcomes are
//! partitioned afterwards; failures are logged with the node's identity and
//! its expected log location, then excluded from the result.

use crate::error::{Error, Result};
use crate::reader::LogReader;
use crate::schema::MacLogFiles;
use crate::summary::{
    summarize_app_node, summarize_mac_node, summarize_phy_node, AppSummary, MacSummary,
    PhySummary,
};

/// One excluded node: who failed, where its logs were expected, and why.
#[derive(Debug)]
pub struct NodeFailure {
    pub node_id: String,
    pub location: String,
    pub error: Error,
}

/// Successful per-node records plus the nodes that were excluded.
#[derive(Debug)]
pub struct FleetOutcome<S> {
    pub records: Vec<S>,
    pub failures: Vec<NodeFailure>,
}

impl<S> FleetOutcome<S> {
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Run `build` once per node and partition the outcomes.
pub fn aggregate_nodes<S, R, F>(reader: &R, nodes: &[String], build: F) -> FleetOutcome<S>
where
    R: LogReader,
    F: Fn(&R, &str) -> Result<S>,
{
    let mut records = Vec::with_capacity(nodes.len());
    let mut failures = Vec::new();

    for node in nodes {
        match build(reader, node) {
            Ok(summary) => records.push(summary),
            Err(error) => {
                let location = reader.node_location(node);
                tracing::warn!(
                    "Node {node} aggregation failed ({error}); expected logs in {location}"
                );
                failures.push(NodeFailure { node_id: node.clone(), location, error });
            }
        }
    }

    FleetOutcome { records, failures }
}

/// Application-layer fleet: every sender plus the fixed receiver.
pub fn aggregate_app_summaries<R: LogReader>(
    reader: &R,
    senders: &[String],
    receiver: &str,
) -> FleetOutcome<AppSummary> {
    let mut nodes: Vec<String> = senders.to_vec();
    if !nodes.iter().any(|n| n == receiver) {
        nodes.push(receiver.to_string());
    }
    aggregate_nodes(reader, &nodes, |r, node| summarize_app_node(r, node, receiver))
}

/// MAC-layer fleet over `nodes`.
pub fn aggregate_mac_summaries<R: LogReader>(
    reader: &R,
    nodes: &[String],
    files: &MacLogFiles,
) -> FleetOutcome<MacSummary> {
    aggregate_nodes(reader, nodes, |r, node| summarize_mac_node(r, node, files))
}

/// Physical-layer fleet over `nodes`.
pub fn aggregate_phy_summaries<R: LogReader>(
    reader: &R,
    nodes: &[String],
) -> FleetOutcome<PhySummary> {
    aggregate_nodes(reader, nodes, summarize_phy_node)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reader::DirLogReader;
    use crate::schema::{APP_RXLOG, APP_TXLOG};
    use std::io::Write;
    use std::path::Path;

    fn write_log(dir: &Path, node: &str, file: &str, lines: &[&str]) {
        let node_dir = dir.join(format!("node-{node}"));
        std::fs::create_dir_all(&node_dir).unwrap();
        let mut f = std::fs::File::create(node_dir.join(file)).unwrap();
        for line in lines {
            writeln!(f, "{line}").unwrap();
        }
    }

    fn nodes(ids: &[&str]) -> Vec<String> {
        ids.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_failed_node_is_excluded() {
        let dir = tempfile::tempdir().unwrap();
        write_log(dir.path(), "sink", APP_RXLOG, &["1.5,1"]);
        write_log(dir.path(), "sink", APP_TXLOG, &[]);
        write_log(dir.path(), "1", APP_TXLOG, &["1.0,1"]);
        // node 2 has no logs at all
        write_log(dir.path(), "3", APP_TXLOG, &["2.0,2"]);

        let reader = DirLogReader::new(dir.path());
        let outcome = aggregate_app_summaries(&reader, &nodes(&["1", "2", "3"]), "sink");

        let ids: Vec<&str> = outcome.records.iter().map(|r| r.node_id.as_str()).collect();
        assert_eq!(ids, vec!["1", "3", "sink"]);
        assert_eq!(outcome.failures.len(), 1);
        assert_eq!(outcome.failures[0].node_id, "2");
        assert!(outcome.failures[0].location.contains("node-2"));
    }

    #[test]
    fn test_zero_successes_is_an_empty_table() {
        let dir = tempfile::tempdir().unwrap();

        let reader = DirLogReader::new(dir.path());
        let outcome = aggregate_app_summaries(&reader, &nodes(&["1", "2"]), "sink");

        assert!(outcome.is_empty());
        assert_eq!(outcome.failures.len(), 3);
    }

    #[test]
    fn test_receiver_is_not_duplicated() {
        let dir = tempfile::tempdir().unwrap();
        write_log(dir.path(), "sink", APP_TXLOG, &[]);
        write_log(dir.path(), "sink", APP_RXLOG, &[]);

        let reader = DirLogReader::new(dir.path());
        let outcome = aggregate_app_summaries(&reader, &nodes(&["sink"]), "sink");

        assert_eq!(outcome.records.len(), 1);
    }
}
