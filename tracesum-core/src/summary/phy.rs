//! Physical-layer node summary

use crate::error::Result;
use crate::reader::LogReader;
use crate::schema::{
    phy_event, PhyRxEvent, PhyTxEvent, StateEvent, PHY_RXLOG, PHY_STATELOG, PHY_TXLOG,
};
use crate::stats::accumulate_states;
use crate::table::MetricRecord;
use serde::Serialize;
use std::collections::BTreeMap;

/// Radio event counts and state occupancy for one physical-layer node.
///
/// Counts are `None` (not zero) when the corresponding log carried no rows at
/// all, so "radio never logged" stays distinguishable from "radio logged and
/// did nothing".
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PhySummary {
    pub node_id: String,
    /// Completed transmissions (`TxEnd`)
    pub tx: Option<u64>,
    /// Completed receptions (`RxEnd`)
    pub rx: Option<u64>,
    pub tx_drop: Option<u64>,
    pub rx_drop: Option<u64>,
    /// Occupancy ratio per observed radio state
    pub state_ratios: BTreeMap<String, Option<f64>>,
}

impl PhySummary {
    /// Occupancy ratio of the powered-down state, when observed
    pub fn sleep_ratio(&self) -> Option<f64> {
        self.state_ratios.get(crate::schema::SLEEP_STATE).copied().flatten()
    }
}

/// Read the PHY tx/rx/state logs for `node` and fold them into one record.
pub fn summarize_phy_node<R: LogReader>(reader: &R, node: &str) -> Result<PhySummary> {
    let tx: Vec<PhyTxEvent> = reader.read(node, PHY_TXLOG)?;
    let rx: Vec<PhyRxEvent> = reader.read(node, PHY_RXLOG)?;
    let states: Vec<StateEvent> = reader.read(node, PHY_STATELOG)?;

    let count_tx = |event: &str| {
        if tx.is_empty() {
            None
        } else {
            Some(tx.iter().filter(|e| e.event == event).count() as u64)
        }
    };
    let count_rx = |event: &str| {
        if rx.is_empty() {
            None
        } else {
            Some(rx.iter().filter(|e| e.event == event).count() as u64)
        }
    };

    Ok(PhySummary {
        node_id: node.to_string(),
        tx: count_tx(phy_event::TX_END),
        rx: count_rx(phy_event::RX_END),
        tx_drop: count_tx(phy_event::TX_DROP),
        rx_drop: count_rx(phy_event::RX_DROP),
        state_ratios: accumulate_states(&states).ratios(),
    })
}

impl MetricRecord for PhySummary {
    fn node_id(&self) -> &str {
        &self.node_id
    }

    fn metrics(&self) -> Vec<(String, Option<f64>)> {
        let count = |v: Option<u64>| v.map(|v| v as f64);
        let mut metrics = vec![
            ("tx".to_string(), count(self.tx)),
            ("rx".to_string(), count(self.rx)),
            ("tx_drop".to_string(), count(self.tx_drop)),
            ("rx_drop".to_string(), count(self.rx_drop)),
        ];
        for (state, ratio) in &self.state_ratios {
            metrics.push((format!("{state}_ratio"), *ratio));
        }
        metrics
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reader::DirLogReader;
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

    #[test]
    fn test_event_counts() {
        let dir = tempfile::tempdir().unwrap();
        write_log(
            dir.path(),
            "2",
            PHY_TXLOG,
            &["1.0,TxEnd,0x0001", "2.0,TxDrop,0x0001", "3.0,TxEnd,0x0001"],
        );
        write_log(
            dir.path(),
            "2",
            PHY_RXLOG,
            &["1.5,RxEnd,0x0002,-70", "2.5,RxDrop,0x0002"],
        );
        write_log(dir.path(), "2", PHY_STATELOG, &["0.0,TRX_OFF", "7.0,RX_ON", "10.0,TRX_OFF"]);

        let reader = DirLogReader::new(dir.path());
        let summary = summarize_phy_node(&reader, "2").unwrap();

        assert_eq!(summary.tx, Some(2));
        assert_eq!(summary.tx_drop, Some(1));
        assert_eq!(summary.rx, Some(1));
        assert_eq!(summary.rx_drop, Some(1));
        assert_eq!(summary.state_ratios["TRX_OFF"], Some(0.7));
        assert_eq!(summary.sleep_ratio(), Some(0.7));
    }

    #[test]
    fn test_empty_logs_yield_none_counts() {
        let dir = tempfile::tempdir().unwrap();
        for file in [PHY_TXLOG, PHY_RXLOG, PHY_STATELOG] {
            write_log(dir.path(), "4", file, &[]);
        }

        let reader = DirLogReader::new(dir.path());
        let summary = summarize_phy_node(&reader, "4").unwrap();

        assert_eq!(summary.tx, None);
        assert_eq!(summary.rx, None);
        assert_eq!(summary.tx_drop, None);
        assert_eq!(summary.rx_drop, None);
        assert!(summary.state_ratios.is_empty());
        assert_eq!(summary.sleep_ratio(), None);
    }

    #[test]
    fn test_missing_log_propagates() {
        let dir = tempfile::tempdir().unwrap();
        write_log(dir.path(), "4", PHY_TXLOG, &["1.0,TxEnd,0x0001"]);

        let reader = DirLogReader::new(dir.path());
        assert!(summarize_phy_node(&reader, "4").is_err());
    }
}
