//! CLI argument parsing types.
//!
//! This module provides the command-line interface structure for the smocker binary.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::client::DEFAULT_SMOCKER_URL;

/// Smocker admin command-line interface.
#[derive(Parser, Debug)]
#[command(name = "smocker", about = "Configure and verify a Smocker mock server", version)]
pub struct Cli {
    /// Base URL of Smocker's admin API.
    #[arg(long, global = true, env = "SMOCKER_URL", default_value = DEFAULT_SMOCKER_URL)]
    pub url: String,

    /// Output results as JSON instead of a table.
    #[arg(long, global = true, default_value = "false")]
    pub json: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Available CLI commands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Clear every session, mock and history entry.
    Reset,

    /// Start a new session; later mocks are added to it.
    Session {
        /// Name of the session.
        name: String,
    },

    /// Register the mock definition stored in a JSON file.
    AddMock {
        /// File holding a single mock definition object.
        file: PathBuf,
    },

    /// Verify the current session and exit non-zero if it fails.
    Verify,
}
