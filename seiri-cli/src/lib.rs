//! seiri CLI library
//!
//! This library provides the command-line interface for the seiri
//! transcript cleaning pipeline.

pub mod commands;
pub mod error;
pub mod input;
pub mod output;
pub mod progress;

pub use error::{CliError, CliResult};

use commands::Commands;

/// Dispatch a parsed command
pub fn run(command: Commands) -> CliResult<()> {
    match command {
        Commands::Clean(args) => args.execute(),
        Commands::List { subcommand } => commands::list(subcommand),
    }
}
