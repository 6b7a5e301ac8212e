//! Per-node summary builders, one per layer.
//!
//! Each builder reads the log kinds its layer needs through a [`LogReader`]
//! and folds them into one flat metric record. Builders propagate read
//! errors; failure isolation lives at the fleet boundary.
//!
//! [`LogReader`]: crate::reader::LogReader

pub mod app;
pub mod mac;
pub mod phy;

pub use app::{summarize_app_node, AppSummary};
pub use mac::{summarize_mac_node, MacSummary};
pub use phy::{summarize_phy_node, PhySummary};
