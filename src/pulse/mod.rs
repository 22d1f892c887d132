// Copyright 2026 NDT Pulse Contributors
// SPDX-License-Identifier: Apache-2.0

//! Excitation pulse generation.
//!
//! - [`PulseKind`] and [`PulseSpec`] — validated pulse description
//! - [`SamplingConfig`] and [`generate_time_axis`] — fixed-rate sample grid
//! - [`generate_waveform`] and [`render`] — closed-form waveform synthesis

pub mod axis;
pub mod types;
pub mod waveform;

pub use axis::{generate_time_axis, SamplingConfig, DEFAULT_SAMPLE_INTERVAL_S};
pub use types::{PulseKind, PulseSpec, MAX_FREQUENCY_HZ};
pub use waveform::{generate_waveform, render, Waveform};
