//! Command-line interface for catcare.
//!
//! This module provides the CLI structure for the `catcare` binary.

mod commands;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

pub use commands::{AssetsCommand, ConfigCommand, OutputFormat, SessionCommand};

/// catcare - Plan care for all your cats
///
/// Track feeding, medication, vet visits and litter for each cat in a
/// session, with reference notes on common questions and feral cat care.
#[derive(Debug, Parser)]
#[command(name = "catcare")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to custom configuration file
    #[arg(short, long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Increase verbosity (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// The command to execute
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Start a planning session (commands are read line by line)
    Session(SessionCommand),

    /// Print the frequently asked questions
    Faq,

    /// Print the feral cat care guide
    FeralCare,

    /// Build the page stylesheet (with the background image embedded)
    Assets(AssetsCommand),

    /// View or validate configuration
    #[command(subcommand)]
    Config(ConfigCommand),
}

impl Cli {
    /// Get the verbosity level based on flags.
    #[must_use]
    pub fn verbosity(&self) -> crate::logging::Verbosity {
        if self.quiet {
            crate::logging::Verbosity::Quiet
        } else {
            match self.verbose {
                0 => crate::logging::Verbosity::Normal,
                1 => crate::logging::Verbosity::Verbose,
                _ => crate::logging::Verbosity::Trace,
            }
        }
    }
}
