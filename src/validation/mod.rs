// Copyright 2026 NDT Pulse Contributors
// SPDX-License-Identifier: Apache-2.0

//! Validation of raw pulse form input.
//!
//! Form fields arrive as text in display units: time in microseconds and
//! frequency in megahertz. [`validate`] parses and converts them to SI,
//! checks every limit, and for Gaussian pulses renders a preview so that
//! a cycle count the window cannot hold is reported up front.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::Config;
use crate::error::{ValidationError, ValidationResult};
use crate::pulse::{render, PulseKind, PulseSpec};

/// Seconds per unit of the time field (µs).
pub const TIME_UNIT_S: f64 = 1e-6;

/// Hertz per unit of the frequency field (MHz).
pub const FREQUENCY_UNIT_HZ: f64 = 1e6;

/// Significant digits kept when converting SI values back to display units.
const DISPLAY_DIGITS: usize = 12;

/// Validate raw form input against the default configuration.
///
/// Fields are checked in order (`amplitude`, `time`, `frequency`,
/// `cycles`) and the first failure is returned. `cycles` is only read for
/// [`PulseKind::GaussianSine`]; raised-cosine specs get `cycles = 1`.
///
/// # Errors
///
/// - [`ValidationError::Parse`] if a field is not a number, or `cycles`
///   is missing for a Gaussian pulse.
/// - [`ValidationError::Range`] if a value breaks a limit. Frequencies
///   above 1 GHz are `"out of range"`; cycle counts the window cannot
///   hold are `"too large"`.
pub fn validate(
    amplitude: &str,
    time: &str,
    frequency: &str,
    kind: PulseKind,
    cycles: Option<&str>,
) -> ValidationResult<PulseSpec> {
    validate_with(amplitude, time, frequency, kind, cycles, &Config::default())
}

/// [`validate`] with configured limits and sampling grid.
///
/// A sampling grid that fails [`SamplingConfig::validate`] is rejected
/// with [`ValidationError::Sampling`] before any field is read.
///
/// [`SamplingConfig::validate`]: crate::pulse::SamplingConfig::validate
pub fn validate_with(
    amplitude: &str,
    time: &str,
    frequency: &str,
    kind: PulseKind,
    cycles: Option<&str>,
    config: &Config,
) -> ValidationResult<PulseSpec> {
    config
        .sampling
        .validate()
        .map_err(|reason| ValidationError::Sampling { reason })?;

    let amplitude = parse_field("amplitude", amplitude)?;
    if !amplitude.is_finite() {
        return Err(ValidationError::range("amplitude", "must be finite"));
    }

    let duration = parse_positive("time", time)? * TIME_UNIT_S;

    let frequency = parse_positive("frequency", frequency)? * FREQUENCY_UNIT_HZ;
    if frequency > config.validation.max_frequency_hz {
        return Err(ValidationError::range("frequency", "out of range"));
    }

    if config.sampling.sample_count(duration) > config.validation.max_samples {
        return Err(ValidationError::range("time", "too long"));
    }

    let cycles = if kind.uses_cycles() {
        let text = cycles.ok_or_else(|| ValidationError::parse("cycles", ""))?;
        parse_positive("cycles", text)?
    } else {
        1.0
    };

    let spec = PulseSpec::new(kind, duration, amplitude, frequency, cycles)?;

    if kind == PulseKind::GaussianSine {
        let preview = render(&spec, &config.sampling)?;
        debug!(samples = preview.len(), peak = preview.peak(), "gaussian preview ok");
    }

    debug!(
        kind = %kind,
        duration_s = duration,
        frequency_hz = frequency,
        cycles = spec.cycles(),
        "pulse form accepted"
    );

    Ok(spec)
}

fn parse_field(field: &str, text: &str) -> ValidationResult<f64> {
    text.trim()
        .parse::<f64>()
        .map_err(|_| ValidationError::parse(field, text))
}

fn parse_positive(field: &str, text: &str) -> ValidationResult<f64> {
    let value = parse_field(field, text)?;
    if !value.is_finite() {
        return Err(ValidationError::range(field, "must be finite"));
    }
    if value <= 0.0 {
        return Err(ValidationError::range(field, "must be greater than 0"));
    }
    Ok(value)
}

/// The pulse form as raw text, in display units.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PulseFields {
    /// Peak amplitude
    pub amplitude: String,
    /// Window length in microseconds
    pub time_us: String,
    /// Carrier frequency in megahertz
    pub frequency_mhz: String,
    /// Cycle count, Gaussian pulses only
    #[serde(default)]
    pub cycles: Option<String>,
}

impl PulseFields {
    /// Pre-fill the form from an existing spec.
    pub fn from_spec(spec: &PulseSpec) -> Self {
        Self {
            amplitude: display_value(spec.amplitude()),
            time_us: display_value(spec.duration() / TIME_UNIT_S),
            frequency_mhz: display_value(spec.frequency() / FREQUENCY_UNIT_HZ),
            cycles: spec
                .kind()
                .uses_cycles()
                .then(|| display_value(spec.cycles())),
        }
    }

    /// Validate the form as a pulse of the given kind.
    pub fn validate(&self, kind: PulseKind, config: &Config) -> ValidationResult<PulseSpec> {
        validate_with(
            &self.amplitude,
            &self.time_us,
            &self.frequency_mhz,
            kind,
            self.cycles.as_deref(),
            config,
        )
    }
}

/// Shortest text for `value` after dropping unit-conversion noise.
fn display_value(value: f64) -> String {
    let rounded = format!("{:.*e}", DISPLAY_DIGITS - 1, value);
    match rounded.parse::<f64>() {
        Ok(v) => v.to_string(),
        Err(_) => value.to_string(),
    }
}
