//! Node-indexed metric tables and CSV output
//!
//! Summary records are flat `name -> value` mappings. Rows from different
//! nodes may carry different state-ratio columns, so a table takes the union
//! of columns in first-seen order, leaving absent cells empty.

use crate::error::Result;
use std::collections::HashMap;
use std::path::Path;

/// A flat per-node metric record: a node id plus ordered metric pairs.
pub trait MetricRecord {
    fn node_id(&self) -> &str;

    /// Metric names and values, in presentation order
    fn metrics(&self) -> Vec<(String, Option<f64>)>;
}

/// A node-indexed table of metric records, one row per node.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SummaryTable {
    columns: Vec<String>,
    rows: Vec<(String, HashMap<String, Option<f64>>)>,
}

impl SummaryTable {
    /// Assemble a table from records, unioning columns across rows.
    pub fn from_records<S: MetricRecord>(records: &[S]) -> Self {
        let mut columns: Vec<String> = Vec::new();
        let mut rows = Vec::with_capacity(records.len());

        for record in records {
            let metrics = record.metrics();
            for (name, _) in &metrics {
                if !columns.contains(name) {
                    columns.push(name.clone());
                }
            }
            rows.push((record.node_id().to_string(), metrics.into_iter().collect()));
        }

        Self { columns, rows }
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Node ids in row order
    pub fn node_ids(&self) -> impl Iterator<Item = &str> {
        self.rows.iter().map(|(id, _)| id.as_str())
    }

    /// Look up one cell by node id and column
    pub fn get(&self, node_id: &str, column: &str) -> Option<f64> {
        self.rows
            .iter()
            .find(|(id, _)| id == node_id)
            .and_then(|(_, cells)| cells.get(column).copied().flatten())
    }

    /// Write the table as CSV with a leading `nodeId` column. An empty table
    /// still gets its header row.
    pub fn write_csv(&self, path: &Path) -> Result<()> {
        let mut writer = csv::Writer::from_path(path)?;

        let mut header = vec!["nodeId".to_string()];
        header.extend(self.columns.iter().cloned());
        writer.write_record(&header)?;

        for (node_id, cells) in &self.rows {
            let mut row = vec![node_id.clone()];
            for column in &self.columns {
                row.push(format_cell(cells.get(column).copied().flatten()));
            }
            writer.write_record(&row)?;
        }
        writer.flush()?;
        Ok(())
    }
}

/// Write a single flat metric record (e.g. the scenario summary) as a
/// one-row CSV.
pub fn write_metrics_csv(metrics: &[(String, Option<f64>)], path: &Path) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)?;
    writer.write_record(metrics.iter().map(|(name, _)| name.as_str()))?;
    writer.write_record(metrics.iter().map(|(_, value)| format_cell(*value)))?;
    writer.flush()?;
    Ok(())
}

fn format_cell(value: Option<f64>) -> String {
    match value {
        Some(v) => format!("{v}"),
        None => String::new(),
    }
}
