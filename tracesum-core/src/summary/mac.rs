//! MAC-layer node summary
//!
//! Combines categorical frame tallies, reconstructed wait times for the two
//! wait kinds (beacon and data), and state occupancy ratios.

use crate::error::Result;
use crate::reader::LogReader;
use crate::schema::{
    mac_event, subtype, MacLogFiles, MacRxEvent, MacTxEvent, StateEvent, WaitEvent,
};
use crate::stats::{accumulate_states, reconstruct_waits};
use crate::table::MetricRecord;
use serde::Serialize;
use std::collections::BTreeMap;

/// Frame, wait, and occupancy metrics for one MAC-layer node.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MacSummary {
    pub node_id: String,
    /// Payload frames confirmed transmitted
    pub tx_ok: u64,
    /// Payload frames dropped before transmission completed
    pub tx_drop: u64,
    pub tx_data: u64,
    pub tx_command: u64,
    pub tx_multipurpose: u64,
    pub tx_ack: u64,
    pub tx_data_drop: u64,
    pub tx_command_drop: u64,
    pub rx_ok: u64,
    pub rx_drop: u64,
    pub rx_data: u64,
    pub rx_command: u64,
    pub rx_multipurpose: u64,
    pub rx_ack: u64,
    /// Data-wait timeouts
    pub rx_timeouts: u64,
    /// Beacon-wait timeouts
    pub tx_timeouts: u64,
    pub avg_data_wait_ms: Option<f64>,
    pub avg_beacon_wait_ms: Option<f64>,
    /// Occupancy ratio per observed MAC state
    pub state_ratios: BTreeMap<String, Option<f64>>,
}

/// Read every MAC log kind for `node` and fold them into one record.
pub fn summarize_mac_node<R: LogReader>(
    reader: &R,
    node: &str,
    files: &MacLogFiles,
) -> Result<MacSummary> {
    let tx: Vec<MacTxEvent> = reader.read(node, &files.tx)?;
    let rx: Vec<MacRxEvent> = reader.read(node, &files.rx)?;
    let beacon_wait: Vec<WaitEvent> = reader.read(node, &files.beacon_wait)?;
    let data_wait: Vec<WaitEvent> = reader.read(node, &files.data_wait)?;
    let states: Vec<StateEvent> = reader.read(node, &files.state)?;

    let is_payload = |s: &str| subtype::PAYLOAD.contains(&s);

    let beacon_waits = reconstruct_waits(&beacon_wait);
    let data_waits = reconstruct_waits(&data_wait);
    let occupancy = accumulate_states(&states);

    Ok(MacSummary {
        node_id: node.to_string(),
        tx_ok: count(&tx, |e| is_payload(&e.subtype) && e.outcome == mac_event::TX_OK),
        tx_drop: count(&tx, |e| is_payload(&e.subtype) && e.outcome == mac_event::TX_DROP),
        tx_data: count(&tx, |e| e.subtype == subtype::DATA && e.outcome == mac_event::TX),
        tx_command: count(&tx, |e| e.subtype == subtype::COMMAND),
        tx_multipurpose: count(&tx, |e| e.subtype == subtype::MULTIPURPOSE),
        tx_ack: count(&tx, |e| e.subtype == subtype::ACK),
        tx_data_drop: count(&tx, |e| e.subtype == subtype::DATA && e.outcome == mac_event::TX_DROP),
        tx_command_drop: count(&tx, |e| {
            e.subtype == subtype::COMMAND && e.outcome == mac_event::TX_DROP
        }),
        rx_ok: count(&rx, |e| e.status == mac_event::RX_OK),
        rx_drop: count(&rx, |e| e.status == mac_event::TIMEOUT),
        rx_data: count(&rx, |e| e.subtype == subtype::DATA && e.status == mac_event::RX_OK),
        rx_command: count(&rx, |e| e.subtype == subtype::COMMAND && e.status == mac_event::RX_OK),
        rx_multipurpose: count(&rx, |e| {
            e.subtype == subtype::MULTIPURPOSE && e.status == mac_event::RX_OK
        }),
        rx_ack: count(&rx, |e| e.subtype == subtype::ACK && e.status == mac_event::RX_OK),
        rx_timeouts: data_waits.timeouts(),
        tx_timeouts: beacon_waits.timeouts(),
        avg_data_wait_ms: data_waits.avg_wait_ms(),
        avg_beacon_wait_ms: beacon_waits.avg_wait_ms(),
        state_ratios: occupancy.ratios(),
    })
}

fn count<T>(events: &[T], pred: impl Fn(&T) -> bool) -> u64 {
    events.iter().filter(|e| pred(e)).count() as u64
}

impl MetricRecord for MacSummary {
    fn node_id(&self) -> &str {
        &self.node_id
    }

    fn metrics(&self) -> Vec<(String, Option<f64>)> {
        let count = |v: u64| Some(v as f64);
        let mut metrics = vec![
            ("tx_ok".to_string(), count(self.tx_ok)),
            ("tx_drop".to_string(), count(self.tx_drop)),
            ("tx_data".to_string(), count(self.tx_data)),
            ("tx_command".to_string(), count(self.tx_command)),
            ("tx_multipurpose".to_string(), count(self.tx_multipurpose)),
            ("tx_ack".to_string(), count(self.tx_ack)),
            ("tx_data_drop".to_string(), count(self.tx_data_drop)),
            ("tx_command_drop".to_string(), count(self.tx_command_drop)),
            ("rx_ok".to_string(), count(self.rx_ok)),
            ("rx_drop".to_string(), count(self.rx_drop)),
            ("rx_data".to_string(), count(self.rx_data)),
            ("rx_command".to_string(), count(self.rx_command)),
            ("rx_multipurpose".to_string(), count(self.rx_multipurpose)),
            ("rx_ack".to_string(), count(self.rx_ack)),
            ("rx_timeouts".to_string(), count(self.rx_timeouts)),
            ("tx_timeouts".to_string(), count(self.tx_timeouts)),
            ("avg_data_wait_ms".to_string(), self.avg_data_wait_ms),
            ("avg_beacon_wait_ms".to_string(), self.avg_beacon_wait_ms),
        ];
        for (state, ratio) in &self.state_ratios {
            metrics.push((format!("{state}_ratio"), *ratio));
        }
        metrics
    }
}
