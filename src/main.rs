// Copyright 2026 NDT Pulse Contributors
// SPDX-License-Identifier: Apache-2.0

//! NDT pulse generator CLI
//!
//! Validates excitation pulse parameters the way the signal setup form does
//! and writes the sampled pulse for plotting.
//!
//! # Usage
//!
//! ```bash
//! # Raised-cosine pulse, 10 V peak, 5 us window, 2 MHz carrier, as CSV
//! ndt-pulse preview --amplitude 10 --time 5 --frequency 2
//!
//! # Gaussian tone burst with 3 cycles, as JSON
//! ndt-pulse preview --kind gaussian-sine -a 10 -t 5 -f 2 --cycles 3 --output json
//!
//! # Check a form without sampling it
//! ndt-pulse validate -a 10 -t 5 -f 2000
//! ```

use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use serde::Serialize;
use tracing::{error, info};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use ndt_pulse::config::{Config, LoggingConfig};
use ndt_pulse::{render, PulseFields, PulseKind, PulseSpec, Result, Waveform, VERSION};

/// Ultrasonic excitation pulse generator
#[derive(Parser)]
#[command(name = "ndt-pulse")]
#[command(author = "NDT Pulse Contributors")]
#[command(version = VERSION)]
#[command(about = "Validate and sample ultrasonic excitation pulses")]
struct Cli {
    /// Path to configuration file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, global = true)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate a pulse form and write the sampled waveform to stdout
    Preview {
        #[command(flatten)]
        fields: FieldArgs,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Csv)]
        output: OutputFormat,
    },

    /// Validate a pulse form and print the resulting spec
    Validate {
        #[command(flatten)]
        fields: FieldArgs,
    },

    /// Show effective configuration
    Config,

    /// Validate configuration file
    CheckConfig,
}

/// Pulse form fields, as text in display units.
#[derive(Args)]
struct FieldArgs {
    /// Pulse shape (raised-cosine, gaussian-sine)
    #[arg(short, long, default_value = "raised-cosine")]
    kind: PulseKind,

    /// Peak amplitude
    #[arg(short, long, allow_hyphen_values = true)]
    amplitude: String,

    /// Window length in microseconds
    #[arg(short, long, allow_hyphen_values = true)]
    time: String,

    /// Carrier frequency in MHz
    #[arg(short, long, allow_hyphen_values = true)]
    frequency: String,

    /// Number of carrier cycles (gaussian-sine only)
    #[arg(short = 'n', long, allow_hyphen_values = true)]
    cycles: Option<String>,
}

impl FieldArgs {
    fn to_fields(&self) -> PulseFields {
        PulseFields {
            amplitude: self.amplitude.clone(),
            time_us: self.time.clone(),
            frequency_mhz: self.frequency.clone(),
            cycles: self.cycles.clone(),
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum OutputFormat {
    /// `time_s,amplitude` rows with a header
    Csv,
    /// Single JSON document with the pulse spec and both sample arrays
    Json,
}

#[derive(Serialize)]
struct PreviewDocument<'a> {
    spec: &'a PulseSpec,
    time: &'a [f64],
    samples: &'a [f64],
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = Config::load(cli.config.as_deref())?;
    if let Some(level) = cli.log_level {
        config.logging.level = level;
    }

    init_logging(&config.logging);

    match cli.command {
        Commands::Preview { fields, output } => {
            config.validate()?;
            let spec = accept(&fields, &config);
            let waveform = render(&spec, &config.sampling)?;

            info!(
                kind = %spec.kind(),
                samples = waveform.len(),
                peak = waveform.peak(),
                "Rendered pulse preview"
            );

            write_waveform(&spec, &waveform, output)?;
        }

        Commands::Validate { fields } => {
            config.validate()?;
            let spec = accept(&fields, &config);
            print!("{}", serde_yaml::to_string(&spec)?);
        }

        Commands::Config => {
            print!("{}", serde_yaml::to_string(&config)?);
        }

        Commands::CheckConfig => match config.validate() {
            Ok(()) => {
                println!("Configuration is valid");
            }
            Err(e) => {
                eprintln!("{}", e);
                std::process::exit(1);
            }
        },
    }

    Ok(())
}

/// Validate the form, exiting with status 2 if it is rejected.
fn accept(args: &FieldArgs, config: &Config) -> PulseSpec {
    match args.to_fields().validate(args.kind, config) {
        Ok(spec) => spec,
        Err(e) => {
            error!(field = e.field(), reason = ?e.reason(), "Pulse parameters rejected");
            eprintln!("{}", e);
            std::process::exit(2);
        }
    }
}

fn write_waveform(spec: &PulseSpec, waveform: &Waveform, format: OutputFormat) -> Result<()> {
    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());

    match format {
        OutputFormat::Csv => {
            writeln!(out, "time_s,amplitude")?;
            for (t, s) in waveform.points() {
                writeln!(out, "{:e},{:e}", t, s)?;
            }
        }
        OutputFormat::Json => {
            let doc = PreviewDocument {
                spec,
                time: &waveform.time,
                samples: &waveform.samples,
            };
            serde_json::to_writer_pretty(&mut out, &doc)?;
            writeln!(out)?;
        }
    }

    out.flush()?;
    Ok(())
}

/// Initialize logging with tracing. Logs go to stderr so stdout stays data.
fn init_logging(logging: &LoggingConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&logging.level));

    let registry = tracing_subscriber::registry().with(filter);
    if logging.format == "json" {
        registry
            .with(fmt::layer().json().with_writer(io::stderr))
            .init();
    } else {
        registry
            .with(fmt::layer().with_target(true).with_writer(io::stderr))
            .init();
    }
}
