// Copyright 2026 NDT Pulse Contributors
// SPDX-License-Identifier: Apache-2.0

//! Pulse description types: [`PulseKind`] and [`PulseSpec`].
//!
//! A [`PulseSpec`] is the validated, immutable description of an excitation
//! pulse. It is built once from caller input, used to sample one waveform,
//! then dropped.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::error::{ValidationError, ValidationResult};

/// Highest carrier frequency a pulse may use, in Hz.
pub const MAX_FREQUENCY_HZ: f64 = 1e9;

/// Shape of the excitation pulse.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum PulseKind {
    /// Sinusoid under a raised-cosine (Hann) window spanning the whole duration.
    RaisedCosine,
    /// Sinusoid under a Gaussian envelope holding a given number of cycles.
    GaussianSine,
}

impl PulseKind {
    /// Name stored alongside a signal in the simulator.
    pub fn name(&self) -> &'static str {
        match self {
            PulseKind::RaisedCosine => "RaisedCosine",
            PulseKind::GaussianSine => "GaussianSine",
        }
    }

    /// Whether this kind takes a cycle count.
    pub fn uses_cycles(&self) -> bool {
        matches!(self, PulseKind::GaussianSine)
    }
}

impl fmt::Display for PulseKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for PulseKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "raisedcosine" | "raised-cosine" | "raised_cosine" => Ok(PulseKind::RaisedCosine),
            "gaussiansine" | "gaussian-sine" | "gaussian_sine" => Ok(PulseKind::GaussianSine),
            other => Err(format!(
                "unknown pulse kind '{other}', expected raised-cosine or gaussian-sine"
            )),
        }
    }
}

/// A validated pulse request.
///
/// # Invariants
///
/// - `duration > 0` and finite (seconds)
/// - `amplitude` finite
/// - `0 < frequency <= MAX_FREQUENCY_HZ` (Hz)
/// - `cycles > 0` and finite; always `1.0` for [`PulseKind::RaisedCosine`]
///
/// Errors name the form field a value came from, so a bad duration is
/// reported against `time`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PulseSpec {
    kind: PulseKind,
    duration: f64,
    amplitude: f64,
    frequency: f64,
    cycles: f64,
}

impl PulseSpec {
    /// Build a spec, checking every invariant.
    ///
    /// For [`PulseKind::RaisedCosine`] the `cycles` argument is ignored and
    /// stored as `1.0`.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::Range`] for the first violated invariant.
    pub fn new(
        kind: PulseKind,
        duration: f64,
        amplitude: f64,
        frequency: f64,
        cycles: f64,
    ) -> ValidationResult<Self> {
        if !amplitude.is_finite() {
            return Err(ValidationError::range("amplitude", "must be finite"));
        }
        check_positive("time", duration)?;
        check_positive("frequency", frequency)?;
        if frequency > MAX_FREQUENCY_HZ {
            return Err(ValidationError::range("frequency", "out of range"));
        }
        let cycles = if kind.uses_cycles() {
            check_positive("cycles", cycles)?;
            cycles
        } else {
            1.0
        };

        Ok(Self {
            kind,
            duration,
            amplitude,
            frequency,
            cycles,
        })
    }

    /// Raised-cosine pulse.
    pub fn raised_cosine(duration: f64, amplitude: f64, frequency: f64) -> ValidationResult<Self> {
        Self::new(PulseKind::RaisedCosine, duration, amplitude, frequency, 1.0)
    }

    /// Gaussian-windowed sine holding `cycles` carrier periods.
    pub fn gaussian_sine(
        duration: f64,
        amplitude: f64,
        frequency: f64,
        cycles: f64,
    ) -> ValidationResult<Self> {
        Self::new(PulseKind::GaussianSine, duration, amplitude, frequency, cycles)
    }

    pub fn kind(&self) -> PulseKind {
        self.kind
    }

    /// Pulse window length in seconds.
    pub fn duration(&self) -> f64 {
        self.duration
    }

    pub fn amplitude(&self) -> f64 {
        self.amplitude
    }

    /// Carrier frequency in Hz.
    pub fn frequency(&self) -> f64 {
        self.frequency
    }

    pub fn cycles(&self) -> f64 {
        self.cycles
    }

    /// Carrier period in seconds.
    pub fn period(&self) -> f64 {
        1.0 / self.frequency
    }
}

fn check_positive(field: &str, value: f64) -> ValidationResult<()> {
    if !value.is_finite() {
        return Err(ValidationError::range(field, "must be finite"));
    }
    if value <= 0.0 {
        return Err(ValidationError::range(field, "must be greater than 0"));
    }
    Ok(())
}
