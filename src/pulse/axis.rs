// Copyright 2026 NDT Pulse Contributors
// SPDX-License-Identifier: Apache-2.0

//! Sample time axis.
//!
//! Pulses are sampled on a fixed grid whose spacing does not depend on the
//! carrier frequency: [`DEFAULT_SAMPLE_INTERVAL_S`] gives 60 samples per
//! microsecond. A 1 MHz carrier therefore gets 60 samples per period, while
//! carriers above 30 MHz alias.

use serde::{Deserialize, Serialize};

/// Sampling interval of the preview grid, in seconds (~16.67 ns).
pub const DEFAULT_SAMPLE_INTERVAL_S: f64 = 1e-6 / 60.0;

/// Fewest samples an axis may have. One point cannot span `[0, duration]`.
pub const MIN_AXIS_SAMPLES: usize = 2;

/// Sampling grid configuration.
///
/// # Invariants
///
/// - `min_interval_s > 0.0`
/// - `min_samples >= MIN_AXIS_SAMPLES`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SamplingConfig {
    /// Spacing between consecutive samples in seconds
    #[serde(default = "default_interval")]
    pub min_interval_s: f64,

    /// Lower bound on the number of samples in an axis
    #[serde(default = "default_min_samples")]
    pub min_samples: usize,
}

impl Default for SamplingConfig {
    fn default() -> Self {
        Self {
            min_interval_s: default_interval(),
            min_samples: default_min_samples(),
        }
    }
}

fn default_interval() -> f64 {
    DEFAULT_SAMPLE_INTERVAL_S
}

fn default_min_samples() -> usize {
    MIN_AXIS_SAMPLES
}

impl SamplingConfig {
    /// Number of samples for a window of `duration` seconds.
    ///
    /// `round(duration / min_interval_s)`, never below `min_samples` or
    /// [`MIN_AXIS_SAMPLES`]. A ratio that is not finite (zero interval)
    /// yields the floor.
    pub fn sample_count(&self, duration: f64) -> usize {
        let floor = self.min_samples.max(MIN_AXIS_SAMPLES);
        let n = (duration / self.min_interval_s).round();
        if !n.is_finite() {
            return floor;
        }
        // saturating cast: huge durations are rejected before this matters
        (n as usize).max(floor)
    }

    /// Evenly spaced sample times from `0.0` to `duration` inclusive.
    pub fn time_axis(&self, duration: f64) -> Vec<f64> {
        let n = self.sample_count(duration);
        let last = (n - 1) as f64;
        (0..n).map(|i| duration * (i as f64 / last)).collect()
    }

    /// Samples per carrier period at `frequency` Hz.
    pub fn samples_per_period(&self, frequency: f64) -> f64 {
        1.0 / (frequency * self.min_interval_s)
    }

    /// Validate sampling parameters.
    pub fn validate(&self) -> Result<(), String> {
        if !(self.min_interval_s.is_finite() && self.min_interval_s > 0.0) {
            return Err(format!(
                "min_interval_s must be > 0, got {}",
                self.min_interval_s
            ));
        }
        if self.min_samples < MIN_AXIS_SAMPLES {
            return Err(format!(
                "min_samples must be >= {MIN_AXIS_SAMPLES}, got {}",
                self.min_samples
            ));
        }
        Ok(())
    }
}

/// Sample times for a `duration`-second window on the default grid.
///
/// See [`SamplingConfig::time_axis`].
pub fn generate_time_axis(duration: f64) -> Vec<f64> {
    SamplingConfig::default().time_axis(duration)
}
