//! Log file names, column layouts, and the event vocabulary of the trace
//! producer.
//!
//! Every log is headerless CSV with positional columns; the record structs
//! below are deserialized by field order. Field values (frame subtypes,
//! transmit outcomes, radio states) are carried verbatim from the logs.

use serde::Deserialize;

/// Application-layer transmit log (`time, uid`)
pub const APP_TXLOG: &str = "app-txlog.csv";
/// Application-layer receive log (`time, uid`)
pub const APP_RXLOG: &str = "app-rxlog.csv";

/// Physical-layer transmit log (`time, event, addr`)
pub const PHY_TXLOG: &str = "phy-txlog.csv";
/// Physical-layer receive log (`time, event, addr[, val]`)
pub const PHY_RXLOG: &str = "phy-rxlog.csv";
/// Physical-layer state transition log (`time, state`)
pub const PHY_STATELOG: &str = "phy-statelog.csv";

/// MAC-layer log file names for one node
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MacLogFiles {
    /// Transmit log (`time, outcome, subtype, src, dst`)
    pub tx: String,
    /// Receive log (`time, status, subtype, src, dst`)
    pub rx: String,
    /// State transition log (`time, state`)
    pub state: String,
    /// Beacon wait marker log (`time, event`)
    pub beacon_wait: String,
    /// Data wait marker log (`time, event`)
    pub data_wait: String,
}

impl Default for MacLogFiles {
    fn default() -> Self {
        Self {
            tx: "mac-txlog.csv".to_string(),
            rx: "mac-rxlog.csv".to_string(),
            state: "mac-statelog.csv".to_string(),
            beacon_wait: "mac-beacon-wait.csv".to_string(),
            data_wait: "mac-data-wait.csv".to_string(),
        }
    }
}

/// Summary output file names
pub const APP_SUMMARY: &str = "app_summary.csv";
pub const MAC_SUMMARY: &str = "mac_summary.csv";
pub const PHY_SUMMARY: &str = "phy_summary.csv";
pub const SCENARIO_SUMMARY: &str = "scenario_summary.csv";

/// Transmit outcomes and receive statuses emitted by the MAC layer
pub mod mac_event {
    /// Frame handed to the radio
    pub const TX: &str = "Tx";
    /// Transmission confirmed
    pub const TX_OK: &str = "TxOk";
    /// Transmission dropped
    pub const TX_DROP: &str = "TxDrop";
    /// Frame received intact
    pub const RX_OK: &str = "RxOk";
    /// Receive wait expired
    pub const TIMEOUT: &str = "timeout";
}

/// Frame subtypes carried in MAC tx/rx logs
pub mod subtype {
    pub const DATA: &str = "Data";
    pub const COMMAND: &str = "Command";
    pub const MULTIPURPOSE: &str = "Multipurpose";
    pub const ACK: &str = "Ack";

    /// Subtypes that carry payload traffic (everything except acknowledgements)
    pub const PAYLOAD: [&str; 3] = [DATA, COMMAND, MULTIPURPOSE];
}

/// Events emitted by the physical layer
pub mod phy_event {
    pub const TX_END: &str = "TxEnd";
    pub const TX_DROP: &str = "TxDrop";
    pub const RX_END: &str = "RxEnd";
    pub const RX_DROP: &str = "RxDrop";
}

/// Wait marker events (`mac-beacon-wait.csv`, `mac-data-wait.csv`)
pub mod wait_event {
    pub const START: &str = "start";
    pub const END: &str = "end";
    pub const TIMEOUT: &str = "timeout";
}

/// Radio state in which the transceiver is powered down; its occupancy ratio
/// defines the scenario wake ratio.
pub const SLEEP_STATE: &str = "TRX_OFF";

/// One row of an application tx/rx log
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct AppEvent {
    pub time: f64,
    pub uid: u64,
}

/// One row of a MAC transmit log
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct MacTxEvent {
    pub time: f64,
    pub outcome: String,
    pub subtype: String,
    pub src: String,
    pub dst: String,
}

/// One row of a MAC receive log
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct MacRxEvent {
    pub time: f64,
    pub status: String,
    pub subtype: String,
    pub src: String,
    pub dst: String,
}

/// One row of a wait marker log
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct WaitEvent {
    pub time: f64,
    pub event: String,
}

/// One row of a MAC or PHY state transition log
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct StateEvent {
    pub time: f64,
    pub state: String,
}

/// One row of a PHY transmit log
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PhyTxEvent {
    pub time: f64,
    pub event: String,
    pub addr: String,
}

/// One row of a PHY receive log; `val` is absent on some event kinds
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PhyRxEvent {
    pub time: f64,
    pub event: String,
    pub addr: String,
    #[serde(default)]
    pub val: Option<String>,
}
