//! Wait-interval reconstruction
//!
//! A wait log is a stream of `start` / `end` / `timeout` markers. Completed
//! waits are the `start`..`end` pairs; a `timeout` abandons the open wait
//! without producing a duration. At most one wait can be open at a time: a
//! second `start` before any close overwrites the pending one, discarding it.

use crate::schema::{wait_event, WaitEvent};

/// Reconstruction state: either no wait is open, or one started at a time.
#[derive(Debug, Clone, Copy, PartialEq)]
enum Slot {
    Idle,
    Pending(f64),
}

/// Completed wait durations (seconds) plus the raw timeout tally.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WaitIntervals {
    durations: Vec<f64>,
    timeouts: u64,
}

impl WaitIntervals {
    /// Completed wait durations, in emission order
    pub fn durations(&self) -> &[f64] {
        &self.durations
    }

    /// Number of `timeout` markers observed
    pub fn timeouts(&self) -> u64 {
        self.timeouts
    }

    /// Mean completed wait in milliseconds, `None` when no wait completed
    pub fn avg_wait_ms(&self) -> Option<f64> {
        if self.durations.is_empty() {
            return None;
        }
        let sum: f64 = self.durations.iter().sum();
        Some(sum / self.durations.len() as f64 * 1000.0)
    }
}

/// Replay a wait marker stream into completed intervals.
///
/// Markers are time-sorted before replay; the source usually emits them in
/// order already, but the reconstruction is only meaningful on an ascending
/// stream. Unknown marker kinds are ignored. A trailing unmatched `start`
/// produces nothing.
pub fn reconstruct_waits(events: &[WaitEvent]) -> WaitIntervals {
    let mut ordered: Vec<&WaitEvent> = events.iter().collect();
    ordered.sort_by(|a, b| a.time.total_cmp(&b.time));

    let mut slot = Slot::Idle;
    let mut out = WaitIntervals::default();
    for ev in ordered {
        match ev.event.as_str() {
            wait_event::START => slot = Slot::Pending(ev.time),
            wait_event::END => {
                if let Slot::Pending(since) = slot {
                    out.durations.push(ev.time - since);
                    slot = Slot::Idle;
                }
            }
            wait_event::TIMEOUT => {
                out.timeouts += 1;
                slot = Slot::Idle;
            }
            _ => {}
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ev(time: f64, event: &str) -> WaitEvent {
        WaitEvent { time, event: event.to_string() }
    }

    #[test]
    fn test_single_completed_wait() {
        let waits = reconstruct_waits(&[ev(0.0, "start"), ev(5.0, "end")]);
        assert_eq!(waits.durations(), &[5.0]);
        assert_eq!(waits.timeouts(), 0);
        assert_eq!(waits.avg_wait_ms(), Some(5000.0));
    }

    #[test]
    fn test_timeout_produces_no_duration() {
        let waits = reconstruct_waits(&[ev(0.0, "start"), ev(3.0, "timeout")]);
        assert!(waits.durations().is_empty());
        assert_eq!(waits.timeouts(), 1);
        assert_eq!(waits.avg_wait_ms(), None);
    }

    #[test]
    fn test_duplicate_start_overwrites_pending() {
        // The wait opened at t=0 is discarded; only the t=4 wait completes.
        let waits = reconstruct_waits(&[ev(0.0, "start"), ev(4.0, "start"), ev(6.0, "end")]);
        assert_eq!(waits.durations(), &[2.0]);
    }

    #[test]
    fn test_end_without_start_is_ignored() {
        let waits = reconstruct_waits(&[ev(1.0, "end"), ev(2.0, "start"), ev(5.0, "end")]);
        assert_eq!(waits.durations(), &[3.0]);
    }

    #[test]
    fn test_end_after_timeout_is_ignored() {
        let waits =
            reconstruct_waits(&[ev(0.0, "start"), ev(1.0, "timeout"), ev(2.0, "end")]);
        assert!(waits.durations().is_empty());
        assert_eq!(waits.timeouts(), 1);
    }

    #[test]
    fn test_trailing_start_is_dropped() {
        let waits = reconstruct_waits(&[ev(0.0, "start"), ev(2.0, "end"), ev(3.0, "start")]);
        assert_eq!(waits.durations(), &[2.0]);
    }

    #[test]
    fn test_unordered_input_is_sorted_first() {
        let waits = reconstruct_waits(&[ev(5.0, "end"), ev(0.0, "start")]);
        assert_eq!(waits.durations(), &[5.0]);
    }

    #[test]
    fn test_at_most_one_duration_per_start() {
        // A second end after a completed wait has no pending start to close.
        let waits =
            reconstruct_waits(&[ev(0.0, "start"), ev(2.0, "end"), ev(4.0, "end")]);
        assert_eq!(waits.durations(), &[2.0]);
    }

    #[test]
    fn test_empty_stream() {
        let waits = reconstruct_waits(&[]);
        assert!(waits.durations().is_empty());
        assert_eq!(waits.timeouts(), 0);
        assert_eq!(waits.avg_wait_ms(), None);
    }

    #[test]
    fn test_avg_over_multiple_waits() {
        let waits = reconstruct_waits(&[
            ev(0.0, "start"),
            ev(1.0, "end"),
            ev(2.0, "start"),
            ev(5.0, "end"),
        ]);
        assert_eq!(waits.durations(), &[1.0, 3.0]);
        assert_eq!(waits.avg_wait_ms(), Some(2000.0));
    }
}
