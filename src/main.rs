// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::Shell;
use crd_provider::{
    config::{init_logging, LogFormat, LoggingConfig},
    constants::LOG_FORMAT_ENV,
    crd_docs::render_resource,
    diagnostics::Response,
    input::{load_document, read_text},
    provider::Provider,
};
use std::io::Write;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::{debug, info};

/// Render Kubernetes CRD manifests the way the provider's resources do.
#[derive(Debug, Parser)]
#[command(name = "crd-provider", version, about)]
struct Cli {
    /// Log output format
    #[arg(long, global = true, value_enum, env = LOG_FORMAT_ENV, default_value_t = LogFormat::Text)]
    log_format: LogFormat,

    /// Log filter directive; overrides RUST_LOG
    #[arg(long, global = true)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// List resource and data source type names
    Resources {
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },
    /// Print the schema of a resource or data source type
    Schema {
        type_name: String,
        /// Print a Markdown table instead of JSON
        #[arg(long)]
        markdown: bool,
    },
    /// Create (or update, with --prior) a resource and print its new state
    Apply {
        type_name: String,
        /// Planned values as JSON or YAML; `-` reads stdin
        #[arg(long, short, default_value = "-")]
        input: PathBuf,
        /// Prior state; switches the operation to Update
        #[arg(long)]
        prior: Option<PathBuf>,
    },
    /// Render a `*_manifest` data source and print its YAML
    Render {
        type_name: String,
        #[arg(long, short, default_value = "-")]
        input: PathBuf,
    },
    /// Import an existing manifest and print the resulting state
    Import {
        type_name: String,
        /// YAML manifest; `-` reads stdin
        #[arg(long, short, default_value = "-")]
        input: PathBuf,
    },
    /// Validate a configuration without producing state
    Validate {
        type_name: String,
        #[arg(long, short, default_value = "-")]
        input: PathBuf,
    },
    /// Generate shell completions
    Completions { shell: Shell },
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    init_logging(&LoggingConfig {
        format: cli.log_format,
        level: cli.log_level.clone(),
    })?;
    debug!("Logging initialized with file and line number tracking");

    if let Command::Completions { shell } = cli.command {
        clap_complete::generate(shell, &mut Cli::command(), "crd-provider", &mut std::io::stdout());
        return Ok(ExitCode::SUCCESS);
    }

    let provider = Provider::new().context("Failed to initialize provider")?;

    match cli.command {
        Command::Resources { json } => {
            let metadata = provider.metadata();
            if json {
                println!("{}", serde_json::to_string_pretty(&metadata)?);
            } else {
                for name in metadata.resources.iter().chain(&metadata.data_sources) {
                    println!("{name}");
                }
            }
            Ok(ExitCode::SUCCESS)
        }
        Command::Schema {
            type_name,
            markdown,
        } => {
            let schema = match provider.schema(&type_name) {
                Ok(schema) => schema.clone(),
                Err(_) => provider.data_source_schema(&type_name)?,
            };
            if markdown {
                println!("{}", render_resource(&schema));
            } else {
                println!("{}", serde_json::to_string_pretty(&schema)?);
            }
            Ok(ExitCode::SUCCESS)
        }
        Command::Apply {
            type_name,
            input,
            prior,
        } => {
            let plan = load_document(&input)?;
            let response = match prior {
                Some(prior) => {
                    info!("Updating {type_name}");
                    provider.update(&type_name, load_document(&prior)?, plan)
                }
                None => {
                    info!("Creating {type_name}");
                    provider.create(&type_name, plan)
                }
            };
            finish(&response, |state| serde_json::to_string_pretty(state).map_err(Into::into))
        }
        Command::Render { type_name, input } => {
            let config = load_document(&input)?;
            let response = provider.read_data_source(&type_name, config);
            finish(&response, |state| {
                Ok(state["yaml"].as_str().unwrap_or_default().to_string())
            })
        }
        Command::Import { type_name, input } => {
            let manifest = read_text(&input)?;
            let response = provider.import(&type_name, &manifest);
            finish(&response, |state| serde_json::to_string_pretty(state).map_err(Into::into))
        }
        Command::Validate { type_name, input } => {
            let config = load_document(&input)?;
            let response = provider.validate(&type_name, config);
            finish(&response, |_| Ok(format!("{type_name}: configuration is valid")))
        }
        Command::Completions { .. } => Ok(ExitCode::SUCCESS),
    }
}

/// Print diagnostics to stderr and the formatted state to stdout.
fn finish(
    response: &Response,
    format: impl FnOnce(&serde_json::Value) -> Result<String>,
) -> Result<ExitCode> {
    let mut stderr = std::io::stderr().lock();
    for diagnostic in &response.diagnostics {
        writeln!(stderr, "{diagnostic}\n")?;
    }

    if response.has_errors() {
        return Ok(ExitCode::FAILURE);
    }

    let output = format(response.new_state.as_ref().unwrap_or(&serde_json::Value::Null))?;
    let mut stdout = std::io::stdout().lock();
    write!(stdout, "{output}")?;
    if !output.ends_with('\n') {
        writeln!(stdout)?;
    }
    Ok(ExitCode::SUCCESS)
}
