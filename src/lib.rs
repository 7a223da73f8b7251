/// Public library interface for the Scanova MCP server
///
/// This module exports the main server implementation and public types
/// that can be used by other applications or tests.

use std::sync::Arc;

use axum::Router;
use thiserror::Error;

// Internal modules
mod auth;
mod client;
mod config;
mod domain;
mod tools;
mod transport;

pub mod mcp;

// Re-export public modules and types
pub use auth::{extract_api_key, ApiKey, API_KEY_HEADERS};
pub use client::{query_pairs, ApiError, ApiRequest, ApiResponse, Endpoint, HttpQrCodeApi, QrCodeApi};
pub use config::{ServerConfig, DEFAULT_BASE_URL};
pub use domain::*;
pub use mcp::protocol::{error_codes, JsonRpcResponse, ToolDefinition};
pub use mcp::McpDispatcher;
pub use tools::{QrTool, ToolRegistry, API_KEY_REQUIRED};
pub use transport::{router, shutdown_signal};

/// Errors that can occur during server operation
#[derive(Error, Debug)]
pub enum ServerError {
    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("HTTP client error: {0}")]
    Client(#[from] client::ApiError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Main Scanova MCP server
///
/// Owns the configuration and the dispatcher shared by every HTTP request.
pub struct ScanovaServer {
    config: ServerConfig,
    dispatcher: Arc<McpDispatcher>,
}

impl ScanovaServer {
    /// Create a server that talks to the Scanova API over HTTP
    pub fn new(config: ServerConfig) -> Result<Self, ServerError> {
        tracing::info!("Initializing Scanova MCP server against {}", config.base_url);

        let api = HttpQrCodeApi::new(config.base_url.clone(), config.request_timeout)?;
        Ok(Self::with_api(config, Arc::new(api)))
    }

    /// Create a server backed by any QR code service implementation
    pub fn with_api(config: ServerConfig, api: Arc<dyn QrCodeApi>) -> Self {
        Self {
            config,
            dispatcher: Arc::new(McpDispatcher::new(api)),
        }
    }

    /// Run the HTTP server until Ctrl+C or SIGTERM
    pub async fn run(self) -> Result<(), ServerError> {
        let address = self.config.bind_address();
        let listener = tokio::net::TcpListener::bind(&address).await?;

        tracing::info!("Starting Scanova MCP server on {}", address);
        tracing::info!("MCP endpoint: http://{}/mcp", address);
        tracing::info!("Health check: http://{}/health", address);

        axum::serve(listener, self.router())
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        Ok(())
    }

    /// The application router (useful for testing)
    pub fn router(&self) -> Router {
        router(self.dispatcher.clone())
    }

    /// Get a reference to the dispatcher (useful for testing)
    pub fn dispatcher(&self) -> &McpDispatcher {
        &self.dispatcher
    }
}
