//! Command-line interface

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::validator::{OutputFormat, ResponseKind};

/// Response validator - judge AI-service responses against expectation sets
#[derive(Parser, Debug)]
#[command(name = "response-validator")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Path to configuration file (YAML)
    #[arg(short, long, env = "RESPONSE_VALIDATOR_CONFIG", global = true)]
    pub config: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error); overrides the config file
    #[arg(long, env = "RESPONSE_VALIDATOR_LOG_LEVEL", global = true)]
    pub log_level: Option<String>,

    /// Log format (text, json); overrides the config file
    #[arg(long, env = "RESPONSE_VALIDATOR_LOG_FORMAT", global = true)]
    pub log_format: Option<String>,

    /// Subcommand
    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Validate one response (or provider error) against an expectation set
    Check(CheckArgs),

    /// List the built-in expectation presets
    Presets,
}

/// Arguments of the `check` subcommand
#[derive(Args, Debug)]
pub struct CheckArgs {
    /// Kind of operation that produced the response
    #[arg(short, long, value_enum)]
    pub kind: ResponseKind,

    /// Response JSON file; omit to validate an absent response
    #[arg(short, long)]
    pub response: Option<PathBuf>,

    /// Provider error JSON file returned instead of a response
    #[arg(long)]
    pub error: Option<PathBuf>,

    /// Expectation set file (YAML or JSON)
    #[arg(
        short,
        long,
        conflicts_with = "preset",
        required_unless_present = "preset"
    )]
    pub expectations: Option<PathBuf>,

    /// Built-in expectation preset (see `presets`)
    #[arg(short, long)]
    pub preset: Option<String>,

    /// Adjust metadata expectations to what this provider reports
    #[arg(long)]
    pub provider: Option<String>,

    /// Label used in logs and the report (defaults to the response file name)
    #[arg(short, long)]
    pub label: Option<String>,

    /// Report format
    #[arg(short, long, value_enum, default_value = "text")]
    pub format: OutputFormat,
}
