//! Application-layer node summary

use crate::error::Result;
use crate::reader::LogReader;
use crate::schema::{AppEvent, APP_RXLOG, APP_TXLOG};
use crate::stats::correlate_delivery;
use crate::table::MetricRecord;
use serde::Serialize;

/// Delivery metrics for one application-layer node.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AppSummary {
    pub node_id: String,
    pub pdr: Option<f64>,
    pub avg_delay: Option<f64>,
    pub tx_total: u64,
    pub rx_total: u64,
}

/// Correlate a node's transmit log against the fixed receiver's receive log.
///
/// The receive log is always read from `receiver`; when summarizing the
/// receiver itself the correlation degenerates to raw receive counting.
pub fn summarize_app_node<R: LogReader>(
    reader: &R,
    node: &str,
    receiver: &str,
) -> Result<AppSummary> {
    let rx: Vec<AppEvent> = reader.read(receiver, APP_RXLOG)?;
    let tx: Vec<AppEvent> = reader.read(node, APP_TXLOG)?;

    let delivery = correlate_delivery(&tx, &rx, node, receiver);

    Ok(AppSummary {
        node_id: node.to_string(),
        pdr: delivery.pdr,
        avg_delay: delivery.avg_delay,
        tx_total: delivery.tx_total,
        rx_total: delivery.rx_total,
    })
}

impl MetricRecord for AppSummary {
    fn node_id(&self) -> &str {
        &self.node_id
    }

    fn metrics(&self) -> Vec<(String, Option<f64>)> {
        vec![
            ("pdr".to_string(), self.pdr),
            ("avg_delay".to_string(), self.avg_delay),
            ("tx_total".to_string(), Some(self.tx_total as f64)),
            ("rx_total".to_string(), Some(self.rx_total as f64)),
        ]
    }
}
