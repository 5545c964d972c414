//! CLI commands.

mod generate;
mod inspect;

use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::config::Config;
use crate::error::GeneratorError;

/// armid-generator - Generate typed resource ID parsers from example IDs.
#[derive(Debug, Parser)]
#[command(name = "armid-generator")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Log filter, e.g. `debug` or `armid_codegen=trace`. Overrides ARMID_LOG_LEVEL.
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Emit logs as JSON lines.
    #[arg(long, global = true)]
    pub log_json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Generate the parser, formatter, and tests for one resource ID type.
    Generate(generate::GenerateArgs),

    /// Generate every type listed in a resourceids.toml manifest.
    GenerateAll(generate::GenerateAllArgs),

    /// Print the classified schema of an example ID as JSON.
    Schema(inspect::SchemaArgs),

    /// Parse a resource ID with the runtime and print it as JSON.
    Inspect(inspect::InspectArgs),
}

impl Cli {
    /// Run the CLI command.
    pub fn run(self, config: &Config) -> Result<()> {
        match self.command {
            Commands::Generate(args) => generate::run(args, config),
            Commands::GenerateAll(args) => generate::run_all(args, config),
            Commands::Schema(args) => inspect::schema(args),
            Commands::Inspect(args) => inspect::inspect(args),
        }
    }
}

/// Parses a `--rename KEY=Field` argument.
fn parse_rename(arg: &str) -> Result<(String, String), GeneratorError> {
    match arg.split_once('=') {
        Some((key, field)) if !key.is_empty() && !field.is_empty() => {
            Ok((key.to_string(), field.to_string()))
        }
        _ => Err(GeneratorError::InvalidRename(arg.to_string())),
    }
}
