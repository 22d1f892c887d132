// Copyright 2026 NDT Pulse Contributors
// SPDX-License-Identifier: Apache-2.0

//! Shared test utilities.
//!
//! Builders take values in display units (µs and MHz), the same units the
//! text form uses.

use crate::pulse::PulseSpec;

/// Raised-cosine spec from display units.
pub fn raised_cosine_spec(amplitude: f64, time_us: f64, frequency_mhz: f64) -> PulseSpec {
    PulseSpec::raised_cosine(time_us * 1e-6, amplitude, frequency_mhz * 1e6)
        .expect("valid raised-cosine test spec")
}

/// Gaussian-sine spec from display units.
pub fn gaussian_spec(amplitude: f64, time_us: f64, frequency_mhz: f64, cycles: f64) -> PulseSpec {
    PulseSpec::gaussian_sine(time_us * 1e-6, amplitude, frequency_mhz * 1e6, cycles)
        .expect("valid gaussian-sine test spec")
}

/// Largest absolute value in `samples`.
pub fn peak_abs(samples: &[f64]) -> f64 {
    samples.iter().fold(0.0_f64, |acc, s| acc.max(s.abs()))
}

/// Panic with the offending index if any sample is NaN or infinite.
pub fn assert_all_finite(samples: &[f64]) {
    for (i, s) in samples.iter().enumerate() {
        assert!(s.is_finite(), "sample {} is not finite: {}", i, s);
    }
}
