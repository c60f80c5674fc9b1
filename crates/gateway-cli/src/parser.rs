//! Main CLI parser and top-level argument handling.

use clap::Parser;

use crate::commands::Commands;

/// Gateway between a chat frontend and a local Ollama server.
#[derive(Parser)]
#[command(name = "gemma-gateway")]
#[command(about = "Serve a Gemma chat gateway in front of Ollama")]
#[command(version)]
pub struct Cli {
    /// Enable verbose/debug output
    #[arg(short = 'v', long = "verbose", global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}
