//! Distribution statistics over per-node metric values

use serde::Serialize;

/// Mean, extrema, population standard deviation, and count of a filtered set
/// of per-node values. An empty set leaves every field `None` with a zero
/// count.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GroupStats {
    pub mean: Option<f64>,
    pub min: Option<f64>,
    pub max: Option<f64>,
    pub std: Option<f64>,
    pub count: usize,
}

impl GroupStats {
    pub fn empty() -> Self {
        Self { mean: None, min: None, max: None, std: None, count: 0 }
    }

    /// Reduce a value stream, dropping undefined entries first.
    pub fn from_values(values: impl IntoIterator<Item = Option<f64>>) -> Self {
        let values: Vec<f64> = values.into_iter().flatten().collect();
        if values.is_empty() {
            return Self::empty();
        }

        let count = values.len();
        let mean = values.iter().sum::<f64>() / count as f64;
        let min = values.iter().copied().fold(f64::INFINITY, f64::min);
        let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        let variance =
            values.iter().map(|v| (v - mean) * (v - mean)).sum::<f64>() / count as f64;

        Self {
            mean: Some(mean),
            min: Some(min),
            max: Some(max),
            std: Some(variance.sqrt()),
            count,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }
}

impl Default for GroupStats {
    fn default() -> Self {
        Self::empty()
    }
}
