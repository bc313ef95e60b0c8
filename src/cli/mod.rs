// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! CLI definitions for the lithos command-line interface.
//!
//! Four subcommands: `profile` to evaluate a column file surface to base,
//! `at` to query a single elevation (both sides of a contact are shown),
//! `check` to validate a column and summarize its layers, and `example` to
//! print the worked example as an input file to start from.

pub mod display;

use clap::{Parser, Subcommand, ValueEnum};
use lithos::InputFormat;

#[derive(Parser)]
#[command(
    name = "lithos",
    about = "Lithostatic, pore, effective and lateral pressure profiles for layered soil",
    version
)]
pub struct Cli {
    /// Log level
    #[arg(short, long, global = true, value_enum, default_value = "warn")]
    pub log_level: LogLevel,

    #[command(subcommand)]
    pub command: Commands,
}

/// Verbosity of the stderr log.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

impl From<LogLevel> for tracing::Level {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Trace => tracing::Level::TRACE,
            LogLevel::Debug => tracing::Level::DEBUG,
            LogLevel::Info => tracing::Level::INFO,
            LogLevel::Warn => tracing::Level::WARN,
            LogLevel::Error => tracing::Level::ERROR,
        }
    }
}

/// How a profile is printed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Boxed table for the terminal
    Table,
    /// `elevation,lithostatic,pore,effective,horizontal` rows
    Csv,
    /// One JSON document with the column and the samples
    Json,
}

/// Format for `example` output.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ExampleFormat {
    Json,
    Csv,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Evaluate pressures at every layer boundary and the water table
    Profile {
        /// Column file (.json or .csv)
        file: String,

        /// Water table elevation (m NGF); overrides the file
        #[arg(short, long, allow_negative_numbers = true)]
        water_table: Option<f64>,

        /// Distance below each internal contact for the lower-side sample (m)
        #[arg(long)]
        offset: Option<f64>,

        /// Unit weight of water (kN/m³)
        #[arg(long)]
        gamma_w: Option<f64>,

        /// Output format
        #[arg(short, long, value_enum, default_value = "table")]
        format: OutputFormat,

        /// Input format, when the extension does not say
        #[arg(long)]
        input_format: Option<InputFormat>,

        /// Show pressures outside the column as 0 instead of blank
        #[arg(long)]
        neutral_zero: bool,
    },

    /// Pressures at a single elevation
    At {
        /// Column file (.json or .csv)
        file: String,

        /// Elevation to query (m NGF)
        #[arg(allow_negative_numbers = true)]
        elevation: f64,

        /// Water table elevation (m NGF); overrides the file
        #[arg(short, long, allow_negative_numbers = true)]
        water_table: Option<f64>,

        /// Input format, when the extension does not say
        #[arg(long)]
        input_format: Option<InputFormat>,
    },

    /// Validate a column file and summarize its layers
    Check {
        /// Column file (.json or .csv)
        file: String,

        /// Input format, when the extension does not say
        #[arg(long)]
        input_format: Option<InputFormat>,
    },

    /// Print the worked example column as an input file
    Example {
        /// Output format
        #[arg(short, long, value_enum, default_value = "json")]
        format: ExampleFormat,
    },
}
