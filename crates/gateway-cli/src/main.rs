//! CLI entry point - the composition root.

use clap::Parser;

use gateway_cli::{Cli, Commands, handlers, logging};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables before clap reads its env-backed flags
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    logging::init(cli.verbose);

    match cli.command {
        Commands::Serve(args) => handlers::serve::execute(args).await,
        Commands::Smoke { base_url } => handlers::smoke::execute(&base_url).await,
    }
}
