use std::path::Path;

use clap::{Args, Parser, Subcommand};
use serde::Deserialize;

use fieldpick_engine::ConvertOptions;

use crate::error::CliError;

#[derive(Parser)]
#[command(name = "fieldpick", about = "Select and rename fields of JSON records")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Keep only the given fields of a record or an array of records
    Select(SelectArgs),
}

#[derive(Args, Clone, Debug)]
pub struct SelectArgs {
    /// Field spec, `Source.Path` or `Source.Path->Dest.Path`. Repeatable.
    #[arg(short, long = "field")]
    pub fields: Vec<String>,

    /// Path to a TOML config file with `fields` and `[options]`
    #[arg(long, env = "FIELDPICK_CONFIG")]
    pub config: Option<String>,

    /// JSON input file (stdin when omitted)
    #[arg(short, long)]
    pub input: Option<String>,

    /// Reject field specs with empty path segments before reading input
    #[arg(long)]
    pub strict: bool,

    /// Pretty-print the output
    #[arg(long)]
    pub pretty: bool,
}

// ---- TOML Config ----

#[derive(Debug, Default, Deserialize)]
pub struct SelectConfig {
    /// Field specs applied before any `--field` flags.
    #[serde(default)]
    pub fields: Vec<String>,
    #[serde(default)]
    pub options: ConvertOptions,
}

impl SelectConfig {
    pub fn load(path: impl AsRef<Path>) -> Result<Self, CliError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| CliError::Config {
            context: "read",
            detail: format!("'{}': {e}", path.display()),
        })?;
        Self::parse(&content).map_err(|e| match e {
            CliError::Config { context, detail } => CliError::Config {
                context,
                detail: format!("'{}': {detail}", path.display()),
            },
            other => other,
        })
    }

    pub fn parse(content: &str) -> Result<Self, CliError> {
        toml::from_str(content).map_err(|e| CliError::Config {
            context: "parse",
            detail: e.to_string(),
        })
    }
}
