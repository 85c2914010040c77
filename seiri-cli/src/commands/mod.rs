//! CLI command implementations

use crate::CliResult;
use clap::Subcommand;

pub mod clean;

/// Available CLI commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Clean transcript files into paragraph-structured text
    Clean(clean::CleanArgs),

    /// List available components
    List {
        #[command(subcommand)]
        subcommand: ListCommands,
    },
}

/// List subcommands
#[derive(Debug, Subcommand)]
pub enum ListCommands {
    /// List embedded language profiles
    Languages,

    /// List available output formats
    Formats,
}

/// Execute a list command
pub fn list(subcommand: ListCommands) -> CliResult<()> {
    match subcommand {
        ListCommands::Languages => {
            for code in seiri_core::available_languages() {
                println!("{code}");
            }
        }
        ListCommands::Formats => {
            println!("text");
            println!("json");
        }
    }
    Ok(())
}
