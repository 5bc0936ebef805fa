//! Command-line argument parsing for sqlsplit.
//!
//! Uses clap to parse CLI arguments.

use clap::Parser;
use db_sqlsplit::config::Config;
use db_sqlsplit::error::{Result, SplitError};
use db_sqlsplit::output::OutputFormat;
use std::io::Read;
use std::path::PathBuf;

/// Split a multi-statement SQL script and classify each statement.
#[derive(Parser, Debug)]
#[command(name = "sqlsplit")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Path to the SQL script (use "-" or omit for stdin)
    #[arg(value_name = "SCRIPT")]
    pub script: Option<String>,

    /// Output format: text or json (overrides config)
    #[arg(short = 'o', long, value_name = "FORMAT")]
    pub output: Option<String>,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,

    /// Print statement counts instead of the statements
    #[arg(long)]
    pub summary: bool,

    /// Extra leading keyword that marks a result set (repeatable)
    #[arg(short = 'e', long = "extra-prefix", value_name = "KEYWORD")]
    pub extra_prefixes: Vec<String>,

    /// Config file path
    #[arg(long, value_name = "PATH", env = "SQLSPLIT_CONFIG")]
    pub config: Option<PathBuf>,

    /// Write output to file instead of stdout
    #[arg(long, value_name = "PATH")]
    pub output_file: Option<PathBuf>,

    /// Enable debug logging (RUST_LOG takes precedence)
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Parses command-line arguments.
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Returns the config file path to use.
    ///
    /// Uses the --config argument if provided, otherwise the default path.
    pub fn config_path(&self) -> PathBuf {
        self.config.clone().unwrap_or_else(Config::default_path)
    }

    /// Returns true if the script should be read from stdin.
    pub fn reads_stdin(&self) -> bool {
        matches!(self.script.as_deref(), None | Some("-"))
    }

    /// Human-readable name of the input source for log messages.
    pub fn input_label(&self) -> &str {
        if self.reads_stdin() {
            "<stdin>"
        } else {
            self.script.as_deref().unwrap_or("<stdin>")
        }
    }

    /// Reads the whole script from the file or stdin.
    pub fn read_script(&self) -> Result<String> {
        match self.script.as_deref() {
            Some(path) if path != "-" => std::fs::read_to_string(path)
                .map_err(|e| SplitError::io(format!("Failed to read {path}: {e}"))),
            _ => {
                let mut script = String::new();
                std::io::stdin()
                    .read_to_string(&mut script)
                    .map_err(|e| SplitError::io(format!("Failed to read stdin: {e}")))?;
                Ok(script)
            }
        }
    }

    /// Resolves the output format: --output first, then config.
    pub fn resolve_format(&self, config: &Config) -> Result<OutputFormat> {
        match &self.output {
            Some(format) => format.parse().map_err(SplitError::config),
            None => Ok(config.output.format),
        }
    }

    /// Returns true if JSON should be pretty-printed.
    pub fn resolve_pretty(&self, config: &Config) -> bool {
        self.pretty || config.output.pretty
    }
}
