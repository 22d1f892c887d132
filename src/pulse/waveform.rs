// Copyright 2026 NDT Pulse Contributors
// SPDX-License-Identifier: Apache-2.0

//! Waveform synthesis for excitation pulses.
//!
//! Two closed-form shapes are supported, both a carrier at `f` Hz under an
//! amplitude envelope of peak `a` inside a window of `T` seconds:
//!
//! ```text
//! RaisedCosine:  a · ½(1 − cos(2πt/T)) · sin(2πft)
//! GaussianSine:  a · exp(−(t − T/2)² / 2σ²) · cos(2πf(t − T/2))
//!                σ = (cycles / f) / 6
//! ```
//!
//! The Gaussian envelope's ±3σ support covers exactly `cycles` carrier
//! periods, and that support has to fit inside the window.

use std::f64::consts::TAU;

use serde::Serialize;
use tracing::{debug, warn};

use super::axis::SamplingConfig;
use super::types::{PulseKind, PulseSpec};
use crate::error::{ValidationError, ValidationResult};

/// Half-width of the Gaussian support, in standard deviations.
pub const GAUSSIAN_SUPPORT_SIGMAS: f64 = 3.0;

/// Slack on the support-fits-window check so a burst of exactly
/// `duration · frequency` cycles is accepted despite rounding.
const SUPPORT_TOLERANCE: f64 = 1e-9;

/// A sampled pulse: sample times and the matching amplitudes.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Waveform {
    /// Sample times in seconds.
    pub time: Vec<f64>,
    /// Pulse amplitude at each sample time.
    pub samples: Vec<f64>,
}

impl Waveform {
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Largest absolute sample value (0.0 when empty).
    pub fn peak(&self) -> f64 {
        self.samples.iter().fold(0.0_f64, |acc, s| acc.max(s.abs()))
    }

    /// `(time, amplitude)` pairs in order.
    pub fn points(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.time.iter().copied().zip(self.samples.iter().copied())
    }
}

/// Evaluate `spec` at every time in `time_axis`.
///
/// The axis is expected to run from `0.0` to `spec.duration()`; the
/// output has the same length as the axis.
///
/// # Errors
///
/// Gaussian pulses fail with `Range { field: "cycles", .. }` when:
/// - the envelope support `cycles / frequency` is longer than the window
///   (`"too large"`),
/// - any sample is NaN or infinite (`"numerically unstable"`),
/// - a non-zero amplitude produced only zeros (`"degenerate envelope"`).
///
/// The last check looks at the sampled output, so it depends on the axis.
/// An envelope narrower than the grid spacing is all zeros when the
/// centre `T/2` falls between samples (even sample count), but comes out
/// as a single spike when the centre is itself a sample (odd count).
pub fn generate_waveform(spec: &PulseSpec, time_axis: &[f64]) -> ValidationResult<Vec<f64>> {
    let samples = match spec.kind() {
        PulseKind::RaisedCosine => raised_cosine(spec, time_axis),
        PulseKind::GaussianSine => gaussian_sine(spec, time_axis)?,
    };

    debug!(
        kind = %spec.kind(),
        samples = samples.len(),
        "generated pulse waveform"
    );

    Ok(samples)
}

/// Build the time axis for `spec` and sample the pulse on it.
///
/// # Errors
///
/// [`ValidationError::Sampling`] if `sampling` fails
/// [`SamplingConfig::validate`], otherwise as [`generate_waveform`].
pub fn render(spec: &PulseSpec, sampling: &SamplingConfig) -> ValidationResult<Waveform> {
    sampling
        .validate()
        .map_err(|reason| ValidationError::Sampling { reason })?;

    let per_period = sampling.samples_per_period(spec.frequency());
    if per_period < 2.0 {
        warn!(
            frequency_hz = spec.frequency(),
            samples_per_period = per_period,
            "carrier is undersampled, preview will alias"
        );
    }

    let time = sampling.time_axis(spec.duration());
    let samples = generate_waveform(spec, &time)?;
    Ok(Waveform { time, samples })
}

fn raised_cosine(spec: &PulseSpec, time_axis: &[f64]) -> Vec<f64> {
    let amplitude = spec.amplitude();
    let window = TAU / spec.duration();
    let carrier = TAU * spec.frequency();

    time_axis
        .iter()
        .map(|&t| amplitude * 0.5 * (1.0 - (window * t).cos()) * (carrier * t).sin())
        .collect()
}

fn gaussian_sine(spec: &PulseSpec, time_axis: &[f64]) -> ValidationResult<Vec<f64>> {
    let support = spec.cycles() * spec.period();
    if support > spec.duration() * (1.0 + SUPPORT_TOLERANCE) {
        return Err(ValidationError::range("cycles", "too large"));
    }

    let amplitude = spec.amplitude();
    let center = spec.duration() / 2.0;
    let sigma = support / (2.0 * GAUSSIAN_SUPPORT_SIGMAS);
    let carrier = TAU * spec.frequency();

    let samples: Vec<f64> = time_axis
        .iter()
        .map(|&t| {
            let offset = t - center;
            let x = offset / sigma;
            amplitude * (-0.5 * x * x).exp() * (carrier * offset).cos()
        })
        .collect();

    if samples.iter().any(|s| !s.is_finite()) {
        return Err(ValidationError::range("cycles", "numerically unstable"));
    }
    if amplitude != 0.0 && !samples.is_empty() && samples.iter().all(|&s| s == 0.0) {
        return Err(ValidationError::range("cycles", "degenerate envelope"));
    }

    Ok(samples)
}
