use serde::{Deserialize, Serialize};

/// Aggregate RSSI samples for one BSSID, as kept by the statistics store.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct SignalStatistics {
    pub count: u32,
    pub sum: f64,
    pub sum_of_squares: f64,
}

impl SignalStatistics {
    pub fn new(count: u32, sum: f64, sum_of_squares: f64) -> Self {
        Self {
            count,
            sum,
            sum_of_squares,
        }
    }

    /// Build from a mean and variance over `count` samples.
    pub fn from_moments(count: u32, mean: f64, variance: f64) -> Self {
        let n = count as f64;
        Self {
            count,
            sum: mean * n,
            sum_of_squares: (variance + mean * mean) * n,
        }
    }

    /// Mean sample value, `None` without samples.
    pub fn mean(&self) -> Option<f64> {
        (self.count > 0).then(|| self.sum / self.count as f64)
    }

    /// Population variance, clamped at zero against rounding.
    pub fn variance(&self) -> Option<f64> {
        let mean = self.mean()?;
        let mean_square = self.sum_of_squares / self.count as f64;
        Some((mean_square - mean * mean).max(0.0))
    }

    pub fn std_dev(&self) -> Option<f64> {
        self.variance().map(f64::sqrt)
    }
}
