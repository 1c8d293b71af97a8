//! CLI module for the Acme Co support console
//!
//! Provides command-line interface parsing for the acme-support binary.
//! Uses clap for argument parsing and owo-colors for colored terminal output.

pub mod output;

use clap::Parser;
use std::path::PathBuf;

/// Acme Co customer support console
///
/// Chat with a support assistant that can look up customers and orders and
/// cancel orders that have not shipped yet.
#[derive(Parser, Debug)]
#[command(
    name = "acme-support",
    author = "Acme Co <support-eng@acme.example>",
    version,
    about = "Acme Co customer support chat console",
    long_about = "Chat with the Acme Co support assistant. The assistant can look up\n\
                  customer accounts and orders and cancel orders that are still processing.\n\n\
                  Requires an Anthropic API key in ANTHROPIC_API_KEY (or a .env file).",
    after_help = "EXAMPLES:\n    \
                  acme-support                          # Use ./acme-support.toml if present\n    \
                  acme-support --config support.toml    # Use a custom config file\n    \
                  acme-support --data-dir ./fixtures    # Load customers.json/orders.json from a directory\n    \
                  acme-support --verbose                # Debug logs on stderr"
)]
pub struct Cli {
    /// Path to the configuration file (defaults to ./acme-support.toml when present)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Directory containing customers.json and orders.json
    #[arg(short, long)]
    pub data_dir: Option<PathBuf>,

    /// Model identifier to use
    #[arg(short, long)]
    pub model: Option<String>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,
}

impl Cli {
    /// Parse CLI arguments
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
