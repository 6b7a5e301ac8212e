//! Event log reading
//!
//! Raw logs are headerless CSV files, one directory per node
//! (`node-<id>/<file>`). Lines that fail to decode are skipped rather than
//! failing the read; a missing file surfaces as [`Error::MissingLog`] so the
//! fleet aggregator can exclude the node and keep going.

use crate::error::{Error, Result};
use serde::de::DeserializeOwned;
use std::path::{Path, PathBuf};

/// Supplies ordered event records for one node and one log kind.
pub trait LogReader {
    /// Read every decodable row of `file` for `node`, in emission order.
    fn read<T: DeserializeOwned>(&self, node: &str, file: &str) -> Result<Vec<T>>;

    /// Where this node's logs are expected to live, for diagnostics.
    fn node_location(&self, node: &str) -> String;
}

/// Reads logs from a scenario directory laid out as `<root>/node-<id>/<file>`.
#[derive(Debug, Clone)]
pub struct DirLogReader {
    root: PathBuf,
}

impl DirLogReader {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Directory holding one node's logs
    pub fn node_dir(&self, node: &str) -> PathBuf {
        self.root.join(format!("node-{node}"))
    }

    /// List node ids by scanning for `node-*` directories, sorted by name.
    pub fn discover_nodes(&self) -> Result<Vec<String>> {
        let mut nodes = Vec::new();
        for entry in std::fs::read_dir(&self.root)? {
            let entry = entry?;
            if !entry.file_type()?.is_dir() {
                continue;
            }
            let name = entry.file_name();
            if let Some(id) = name.to_string_lossy().strip_prefix("node-") {
                nodes.push(id.to_string());
            }
        }
        nodes.sort();
        Ok(nodes)
    }
}

impl LogReader for DirLogReader {
    fn read<T: DeserializeOwned>(&self, node: &str, file: &str) -> Result<Vec<T>> {
        let path = self.node_dir(node).join(file);
        if !path.exists() {
            return Err(Error::MissingLog(path));
        }

        let mut reader = csv::ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .from_path(&path)?;

        let mut records = Vec::new();
        let mut skipped = 0usize;
        for row in reader.deserialize() {
            match row {
                Ok(record) => records.push(record),
                Err(err) => {
                    skipped += 1;
                    tracing::debug!("Skipping malformed line in {}: {err}", path.display());
                }
            }
        }
        if skipped > 0 {
            tracing::warn!("Skipped {skipped} malformed line(s) in {}", path.display());
        }

        Ok(records)
    }

    fn node_location(&self, node: &str) -> String {
        self.node_dir(node).display().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::{AppEvent, PhyRxEvent};
    use std::io::Write;

    fn write_log(dir: &Path, node: &str, file: &str, lines: &[&str]) {
        let node_dir = dir.join(format!("node-{node}"));
        std::fs::create_dir_all(&node_dir).unwrap();
        let mut f = std::fs::File::create(node_dir.join(file)).unwrap();
        for line in lines {
            writeln!(f, "{line}").unwrap();
        }
    }

    #[test]
    fn test_read_app_log() {
        let dir = tempfile::tempdir().unwrap();
        write_log(dir.path(), "1", "app-txlog.csv", &["0.5,10", "1.5,11"]);

        let reader = DirLogReader::new(dir.path());
        let events: Vec<AppEvent> = reader.read("1", "app-txlog.csv").unwrap();

        assert_eq!(events.len(), 2);
        assert_eq!(events[0].time, 0.5);
        assert_eq!(events[0].uid, 10);
        assert_eq!(events[1].uid, 11);
    }

    #[test]
    fn test_malformed_lines_are_skipped() {
        let dir = tempfile::tempdir().unwrap();
        write_log(
            dir.path(),
            "1",
            "app-txlog.csv",
            &["0.5,10", "not-a-number,11", "2.5", "3.5,12"],
        );

        let reader = DirLogReader::new(dir.path());
        let events: Vec<AppEvent> = reader.read("1", "app-txlog.csv").unwrap();

        assert_eq!(events.len(), 2);
        assert_eq!(events[0].uid, 10);
        assert_eq!(events[1].uid, 12);
    }

    #[test]
    fn test_missing_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir_all(dir.path().join("node-1")).unwrap();

        let reader = DirLogReader::new(dir.path());
        let result: Result<Vec<AppEvent>> = reader.read("1", "app-txlog.csv");

        assert!(matches!(result, Err(Error::MissingLog(_))));
    }

    #[test]
    fn test_empty_file_yields_empty_sequence() {
        let dir = tempfile::tempdir().unwrap();
        write_log(dir.path(), "1", "app-txlog.csv", &[]);

        let reader = DirLogReader::new(dir.path());
        let events: Vec<AppEvent> = reader.read("1", "app-txlog.csv").unwrap();

        assert!(events.is_empty());
    }

    #[test]
    fn test_optional_trailing_column() {
        let dir = tempfile::tempdir().unwrap();
        write_log(
            dir.path(),
            "3",
            "phy-rxlog.csv",
            &["1.0,RxEnd,0x0001,-71.5", "2.0,RxDrop,0x0002"],
        );

        let reader = DirLogReader::new(dir.path());
        let events: Vec<PhyRxEvent> = reader.read("3", "phy-rxlog.csv").unwrap();

        assert_eq!(events.len(), 2);
        assert_eq!(events[0].val.as_deref(), Some("-71.5"));
        assert_eq!(events[1].val, None);
    }

    #[test]
    fn test_discover_nodes() {
        let dir = tempfile::tempdir().unwrap();
        for node in ["2", "10", "1"] {
            std::fs::create_dir_all(dir.path().join(format!("node-{node}"))).unwrap();
        }
        std::fs::create_dir_all(dir.path().join("summary")).unwrap();

        let reader = DirLogReader::new(dir.path());
        let nodes = reader.discover_nodes().unwrap();

        // Name-sorted, non-node directories ignored
        assert_eq!(nodes, vec!["1", "10", "2"]);
    }
}
