//! seiri command-line entry point

use clap::Parser;
use seiri_cli::commands::Commands;

/// Clean transcript text into punctuated paragraphs
#[derive(Debug, Parser)]
#[command(name = "seiri", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = seiri_cli::run(cli.command) {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}
