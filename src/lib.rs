// Copyright 2026 NDT Pulse Contributors
// SPDX-License-Identifier: Apache-2.0

//! NDT excitation pulse generator.
//!
//! This crate is the non-GUI core of an ultrasonic simulator's signal
//! setup: it validates pulse parameters typed into a form and samples the
//! resulting pulse for preview or export.
//!
//! # Pipeline
//!
//! ```text
//! raw text fields ──validate──▶ PulseSpec ──render──▶ Waveform
//!  (µs, MHz)                     (s, Hz)              (time, samples)
//! ```
//!
//! # Modules
//!
//! - [`pulse`]: Pulse types, time axis and waveform synthesis
//! - [`validation`]: Form input validation
//! - [`config`]: Configuration management
//! - [`error`]: Error types

pub mod config;
pub mod error;
pub mod pulse;
pub mod validation;

pub use config::Config;
pub use error::{Error, Result, ValidationError, ValidationResult};
pub use pulse::{generate_time_axis, generate_waveform, render, PulseKind, PulseSpec, Waveform};
pub use validation::{validate, validate_with, PulseFields};

#[cfg(test)]
pub mod test_utils;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
