//! State-time accumulation
//!
//! State logs are level-triggered: a logged state holds until the next logged
//! transition. Each sample is therefore scored with the right-open interval up
//! to its successor, and the final sample contributes nothing. The per-state
//! durations always sum to the observed span.

use crate::schema::StateEvent;
use std::collections::BTreeMap;

/// Cumulative per-state occupied time over an observed window.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StateOccupancy {
    durations: BTreeMap<String, f64>,
    span: f64,
}

impl StateOccupancy {
    /// Accumulated duration per state, keyed by state label
    pub fn durations(&self) -> &BTreeMap<String, f64> {
        &self.durations
    }

    /// Observed window length (`last_time - first_time`)
    pub fn span(&self) -> f64 {
        self.span
    }

    pub fn is_empty(&self) -> bool {
        self.durations.is_empty()
    }

    /// Occupancy ratio for one state, `None` when the span is degenerate or
    /// the state was never observed
    pub fn ratio(&self, state: &str) -> Option<f64> {
        if self.span <= 0.0 {
            return None;
        }
        self.durations.get(state).map(|d| d / self.span)
    }

    /// Occupancy ratio per observed state; every ratio is `None` when the
    /// span is degenerate
    pub fn ratios(&self) -> BTreeMap<String, Option<f64>> {
        self.durations
            .iter()
            .map(|(state, d)| {
                let ratio = if self.span > 0.0 { Some(d / self.span) } else { None };
                (state.clone(), ratio)
            })
            .collect()
    }
}

/// Fold an ordered `(time, state)` sample sequence into per-state occupancy.
///
/// Fewer than two samples give an empty occupancy: with no successor sample
/// there is no interval to attribute.
pub fn accumulate_states(events: &[StateEvent]) -> StateOccupancy {
    if events.len() < 2 {
        return StateOccupancy::default();
    }

    let mut durations: BTreeMap<String, f64> = BTreeMap::new();
    for pair in events.windows(2) {
        let dt = pair[1].time - pair[0].time;
        *durations.entry(pair[0].state.clone()).or_insert(0.0) += dt;
    }
    let span = events[events.len() - 1].time - events[0].time;

    StateOccupancy { durations, span }
}
