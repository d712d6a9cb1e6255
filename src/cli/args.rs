//! Command line arguments.
//!
//! Environment variables are honoured where a flag is not given:
//! `WEBGL_PREFLIGHT_FORMAT`, `WEBGL_PREFLIGHT_BUILD_NAME` and `NO_COLOR`.

use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Pre-publish validation for Unity WebGL build exports.
///
/// Checks the folder layout, the payload files in Build and the entry point,
/// and reports errors (do not publish) and warnings (worth a look).
#[derive(Parser, Debug, Clone, PartialEq)]
#[command(name = "webgl-preflight", version, about, long_about = None)]
pub struct Args {
    /// Enable verbose output. Repeat for more verbosity (-v, -vv, -vvv).
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Disable colored output
    #[arg(
        long,
        global = true,
        env = "NO_COLOR",
        value_parser = clap::builder::FalseyValueParser::new()
    )]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Command to execute
#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Command {
    /// Validate a build folder
    Check(CheckArgs),
    /// List all available checks
    List,
    /// Print version and build information
    Version,
}

/// Arguments for the `check` subcommand
#[derive(clap::Args, Debug, Clone, PartialEq)]
pub struct CheckArgs {
    /// Path to the exported WebGL build folder
    #[arg(value_name = "BUILD_FOLDER")]
    pub path: PathBuf,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text, env = "WEBGL_PREFLIGHT_FORMAT")]
    pub format: OutputFormat,

    /// Base name of the payload files (<name>.data, <name>.wasm, ...)
    #[arg(long, default_value = "web", env = "WEBGL_PREFLIGHT_BUILD_NAME")]
    pub build_name: String,

    /// Skip a check by ID (repeatable)
    #[arg(long, value_name = "ID")]
    pub skip: Vec<String>,

    /// Only print findings and the verdict
    #[arg(short, long)]
    pub quiet: bool,
}

/// Output format selection
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Human-readable terminal output
    #[default]
    Text,
    /// Machine-readable JSON
    Json,
    /// JUnit XML for CI/CD integration
    Junit,
}
