//! Command-line interface for hookset
//!
//! Parses arguments with clap, turns the global flags into configuration
//! overrides and dispatches to the command implementations.

use anyhow::Result;
use clap::{ArgAction, CommandFactory, Parser, Subcommand};
use std::path::PathBuf;

use crate::config::ConfigLayer;

mod commands;
pub mod output;

pub use output::Output;

/// hookset - declarative git hooks for your project
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Directory to start config and repository discovery from
    #[arg(long, value_name = "DIR", global = true)]
    pub project_path: Option<PathBuf>,

    /// Skip hooks when running in CI
    #[arg(long, global = true)]
    pub no_ci: bool,

    /// Only run hooks when running in CI
    #[arg(long, global = true)]
    pub ci_only: bool,

    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Enable quiet output (minimal)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Subcommands
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands
#[derive(Subcommand)]
pub enum Commands {
    /// Configuration management
    #[command(subcommand)]
    Config(ConfigCommands),
    /// Git hooks inspection
    #[command(subcommand)]
    Hooks(HooksCommands),
}

/// Configuration subcommands
#[derive(Subcommand)]
pub enum ConfigCommands {
    /// Show the merged configuration
    Show {
        /// Output format: json, yaml, toml
        #[arg(short, long, default_value = "json")]
        format: String,
    },
    /// Check that every configured hook name is valid
    Validate,
}

/// Git hooks subcommands
#[derive(Subcommand)]
pub enum HooksCommands {
    /// List resolved hooks and their commands
    List,
    /// Resolve a single hook, even if it is not declared
    Resolve {
        /// Hook name to resolve
        hook: String,
    },
}

impl Cli {
    /// Caller overrides derived from the global flags
    pub fn overrides(&self) -> ConfigLayer {
        ConfigLayer {
            project_path: self.project_path.clone(),
            no_ci: self.no_ci.then_some(true),
            ci_only: self.ci_only.then_some(true),
            ..Default::default()
        }
    }

    /// Execute the CLI command
    pub fn run(self, output: &Output) -> Result<()> {
        init_logging(self.verbose);

        if is_heroku() {
            output.info("Skipped setting hooks on Heroku.");
            return Ok(());
        }

        let overrides = self.overrides();
        match self.command {
            Some(Commands::Config(cmd)) => commands::config::execute(cmd, overrides, output),
            Some(Commands::Hooks(cmd)) => commands::hooks::execute(cmd, overrides, output),
            None => {
                // Show help when no command is provided
                let mut cmd = Cli::command();
                cmd.print_help()?;
                Ok(())
            }
        }
    }
}

/// Heroku sets `DYNO` and runs apps from `/app`
fn is_heroku() -> bool {
    std::env::var_os("DYNO").is_some() && std::env::var("HOME").is_ok_and(|home| home == "/app")
}

fn init_logging(verbose: u8) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        match verbose {
            0 => tracing_subscriber::EnvFilter::new("warn"),
            1 => tracing_subscriber::EnvFilter::new("info,globset=warn,walkdir=warn"),
            2 => tracing_subscriber::EnvFilter::new("debug,globset=warn,walkdir=warn"),
            _ => tracing_subscriber::EnvFilter::new("trace"),
        }
    });

    // A subscriber may already be installed when embedded; keep that one
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}
