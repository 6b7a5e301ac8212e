//! Statistics engine: interval reconstruction, state-time accumulation,
//! delivery correlation, and distribution summaries.

pub mod delivery;
pub mod distribution;
pub mod occupancy;
pub mod wait;

pub use delivery::{correlate_delivery, Delivery};
pub use distribution::GroupStats;
pub use occupancy::{accumulate_states, StateOccupancy};
pub use wait::{reconstruct_waits, WaitIntervals};
