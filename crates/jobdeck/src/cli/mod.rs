//! Command-line interface for jobdeck.
//!
//! This module provides the CLI structure and subcommand types for the
//! `jobdeck` binary.

mod commands;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

pub use commands::{
    AddCommand, ConfigCommand, JobTypeArg, ListCommand, PositionArg, RemoveCommand, SkillArg,
};

/// jobdeck - Keep a deck of job-posting records
///
/// Saved records live in a local database and survive between runs.
/// Add entries with `add`, render them with `list`, drop one with
/// `remove`.
#[derive(Debug, Parser)]
#[command(name = "jobdeck")]
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
    /// Save a new job-posting record
    Add(AddCommand),

    /// Show the saved records
    List(ListCommand),

    /// Remove a saved record by index
    Remove(RemoveCommand),

    /// View configuration
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
