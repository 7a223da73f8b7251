/// Main entry point for the Scanova MCP server
///
/// This file sets up logging, parses command line arguments, and starts the
/// HTTP server exposing the MCP endpoint.

use std::time::Duration;

use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use scanova_mcp::{ScanovaServer, ServerConfig, DEFAULT_BASE_URL};

/// Command line arguments for the Scanova MCP server
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Interface to listen on
    #[arg(long, env = "HOST", default_value = "0.0.0.0")]
    host: String,

    /// Port to listen on
    #[arg(long, env = "PORT", default_value_t = 8000)]
    port: u16,

    /// Base URL of the Scanova management API
    #[arg(long, env = "SCANOVA_BASE_URL", default_value = DEFAULT_BASE_URL)]
    base_url: String,

    /// Timeout for each request to the Scanova API, in seconds
    #[arg(long, env = "SCANOVA_TIMEOUT_SECS", default_value_t = 30)]
    timeout_secs: u64,

    /// Enable debug logging
    #[arg(short, long)]
    debug: bool,

    /// Enable verbose output (implies debug)
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    // Set up logging based on command line flags; RUST_LOG takes precedence
    let log_level = if args.verbose {
        "debug"
    } else if args.debug {
        "info"
    } else {
        "warn"
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!("scanova_mcp={},tower_http={}", log_level, log_level))
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    info!("Starting Scanova MCP server");

    let config = ServerConfig::new(
        args.host,
        args.port,
        &args.base_url,
        Duration::from_secs(args.timeout_secs),
    )?;

    let server = ScanovaServer::new(config)?;
    server.run().await?;

    info!("Scanova MCP server shutdown complete");
    Ok(())
}
