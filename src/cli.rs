//! CLI argument parsing and command dispatch

use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::commands;

/// Nexus Provision - Bulk-provision proxy repositories from a CSV manifest
#[derive(Parser, Debug)]
#[command(name = "nexus-provision")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    command: Commands,

    /// Colorize output (always, never, auto)
    #[arg(long, global = true, value_name = "WHEN", default_value = "auto")]
    color: String,

    /// Show detailed progress information
    #[arg(short, long, global = true, conflicts_with = "quiet")]
    verbose: bool,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    quiet: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Provision proxy repositories from a CSV manifest
    Provision(commands::provision::ProvisionArgs),

    /// Validate a manifest without contacting the repository manager
    Validate(commands::validate::ValidateArgs),

    /// List supported format aliases and their canonical identifiers
    Formats,

    /// Generate shell completion scripts
    Completions(commands::completions::CompletionsArgs),
}

impl Cli {
    /// Execute the CLI command
    pub fn execute(self) -> Result<()> {
        let filter = if self.verbose {
            "debug"
        } else if self.quiet {
            "error"
        } else {
            "info"
        };
        let _ = env_logger::Builder::from_env(
            env_logger::Env::default().default_filter_or(filter),
        )
        .format_timestamp(None)
        .try_init();

        match self.command {
            Commands::Provision(args) => commands::provision::execute(args, &self.color, self.quiet),
            Commands::Validate(args) => commands::validate::execute(args, &self.color),
            Commands::Formats => commands::formats::execute(&self.color),
            Commands::Completions(args) => commands::completions::execute(args),
        }
    }
}
