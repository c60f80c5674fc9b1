//! Serve command handler.

use anyhow::Result;
use gateway_axum::start_server;

use crate::commands::ServeArgs;

/// Run the gateway until Ctrl-C or SIGTERM.
pub async fn execute(args: ServeArgs) -> Result<()> {
    let config = args.into_config();

    println!();
    println!("  Gemma gateway starting...");
    println!();
    println!("  Ollama:  {}", config.gateway.backend_url);
    println!("  Model:   {}", config.gateway.model);
    match config.static_dir {
        Some(ref dir) => println!("  UI from: {}", dir.display()),
        None => println!("  API only"),
    }
    println!("  Local:   http://localhost:{}", config.port);
    println!();
    println!("  Press Ctrl+C to stop");
    println!();

    start_server(config).await
}
