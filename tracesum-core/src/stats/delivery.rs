//! Delivery correlation between independent transmit and receive logs
//!
//! The two logs are matched on message uid. Duplicate transmissions of the
//! same uid collapse to one logical message for the delivery ratio; raw row
//! counts are kept separately and attributed only to the log's own role, so a
//! multi-node scenario with one fixed sink never double-counts traffic.

use crate::schema::AppEvent;
use std::collections::HashMap;

/// Delivery metrics for one sender/receiver pair.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Delivery {
    /// Delivered unique uids over transmitted unique uids, `None` when
    /// nothing was transmitted
    pub pdr: Option<f64>,
    /// Mean of first-receive minus first-transmit per delivered uid (source
    /// time units), `None` when nothing was delivered
    pub avg_delay: Option<f64>,
    /// Raw transmit row count; zero unless this node is a sender
    pub tx_total: u64,
    /// Raw receive row count; zero unless this node is the receiver
    pub rx_total: u64,
}

/// Correlate a sender's transmit log against the receiver's receive log.
pub fn correlate_delivery(
    tx: &[AppEvent],
    rx: &[AppEvent],
    node: &str,
    receiver: &str,
) -> Delivery {
    // First-occurrence time per uid, keeping tx-log order for determinism.
    let mut tx_first: HashMap<u64, f64> = HashMap::new();
    let mut tx_uids: Vec<u64> = Vec::new();
    for ev in tx {
        tx_first.entry(ev.uid).or_insert_with(|| {
            tx_uids.push(ev.uid);
            ev.time
        });
    }
    let mut rx_first: HashMap<u64, f64> = HashMap::new();
    for ev in rx {
        rx_first.entry(ev.uid).or_insert(ev.time);
    }

    let delivered = tx_uids.iter().filter(|uid| rx_first.contains_key(uid)).count();
    let pdr = if tx_uids.is_empty() {
        None
    } else {
        Some(delivered as f64 / tx_uids.len() as f64)
    };

    let delays: Vec<f64> = tx_uids
        .iter()
        .filter_map(|uid| rx_first.get(uid).map(|rx_time| rx_time - tx_first[uid]))
        .collect();
    let avg_delay = if delays.is_empty() {
        None
    } else {
        Some(delays.iter().sum::<f64>() / delays.len() as f64)
    };

    Delivery {
        pdr,
        avg_delay,
        tx_total: if node != receiver { tx.len() as u64 } else { 0 },
        rx_total: if node == receiver { rx.len() as u64 } else { 0 },
    }
}
