// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! Logging configuration.
//!
//! Output format: `timestamp file:line LEVEL message`, or one JSON object per
//! event. Logs are written to stderr so stdout only carries command output.
//!
//! The filter comes from `--log-level` if given, otherwise from `RUST_LOG`,
//! otherwise [`DEFAULT_LOG_LEVEL`]. The format comes from `--log-format` or
//! `RUST_LOG_FORMAT`.

use crate::constants::DEFAULT_LOG_LEVEL;
use anyhow::{anyhow, Context, Result};
use clap::ValueEnum;
use tracing_subscriber::EnvFilter;

/// Log output format
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    /// Compact human-readable lines with file and line number
    #[default]
    Text,
    /// One JSON object per event
    Json,
}

/// Logging settings resolved from the command line and environment.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LoggingConfig {
    pub format: LogFormat,
    /// Explicit filter directive; overrides `RUST_LOG`
    pub level: Option<String>,
}

impl LoggingConfig {
    /// Build the event filter for this configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if an explicit level is not a valid filter directive.
    pub fn env_filter(&self) -> Result<EnvFilter> {
        match &self.level {
            Some(level) => EnvFilter::try_new(level)
                .with_context(|| format!("Invalid log level '{level}'")),
            None => Ok(EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_LEVEL))),
        }
    }
}

/// Install the global tracing subscriber.
///
/// # Errors
///
/// Returns an error if the filter is invalid or a subscriber is already installed.
pub fn init_logging(config: &LoggingConfig) -> Result<()> {
    let env_filter = config.env_filter()?;

    let result = match config.format {
        LogFormat::Json => tracing_subscriber::fmt()
            .with_env_filter(env_filter)
            .with_writer(std::io::stderr)
            .with_file(true)
            .with_line_number(true)
            .with_target(false)
            .json()
            .try_init(),
        LogFormat::Text => tracing_subscriber::fmt()
            .with_env_filter(env_filter)
            .with_writer(std::io::stderr)
            .with_file(true)
            .with_line_number(true)
            .with_target(false)
            .compact()
            .try_init(),
    };

    result.map_err(|e| anyhow!("Failed to initialize logging: {e}"))
}
