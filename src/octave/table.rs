use serde::{Deserialize, Serialize};

use crate::band::{frequency_of_band, lower_frequency, upper_frequency};

/// A single band: index, center and edges in Hz.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Band {
    pub n: f64,
    pub center: f64,
    pub lower: f64,
    pub upper: f64,
    pub bandwidth: f64,
}

impl Band {
    pub fn new(n: f64, fraction: f64, reference: f64) -> Self {
        let center = frequency_of_band(n, fraction, reference);
        let lower = lower_frequency(center, fraction);
        let upper = upper_frequency(center, fraction);
        Self {
            n,
            center,
            lower,
            upper,
            bandwidth: upper - lower,
        }
    }

    /// Whether `f` falls inside `[lower, upper)`.
    pub fn contains(&self, f: f64) -> bool {
        f >= self.lower && f < self.upper
    }
}
