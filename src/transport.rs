/// HTTP transport for the MCP server
///
/// Routes:
/// - `POST /mcp`: JSON-RPC endpoint; always answers HTTP 200 with errors in-band
/// - `GET /health`: liveness probe
/// - `GET /`: service metadata and authentication hints

use std::sync::Arc;

use axum::body::Bytes;
use axum::extract::rejection::BytesRejection;
use axum::extract::State;
use axum::http::HeaderMap;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde_json::{json, Value};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::auth::extract_api_key;
use crate::mcp::protocol::{error_codes, JsonRpcResponse, SERVER_NAME};
use crate::mcp::McpDispatcher;

/// Build the application router around a dispatcher
pub fn router(dispatcher: Arc<McpDispatcher>) -> Router {
    Router::new()
        .route("/", get(root_handler))
        .route("/health", get(health_handler))
        .route("/mcp", post(mcp_handler))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(dispatcher)
}

/// The body is taken as raw bytes so that invalid JSON still gets a JSON-RPC answer
///
/// A body that cannot be read (for instance one over the default size limit)
/// is answered in-band as well, never with a bare HTTP error status.
async fn mcp_handler(
    State(dispatcher): State<Arc<McpDispatcher>>,
    headers: HeaderMap,
    body: Result<Bytes, BytesRejection>,
) -> Json<JsonRpcResponse> {
    let body = match body {
        Ok(body) => body,
        Err(rejection) => {
            tracing::warn!("Could not read request body: {}", rejection);
            return Json(JsonRpcResponse::error(
                Value::Null,
                error_codes::INTERNAL_ERROR,
                format!("Internal error: {}", rejection.body_text()),
            ));
        }
    };

    let credential = extract_api_key(&headers);
    Json(dispatcher.handle_body(&body, credential).await)
}

async fn health_handler() -> Json<Value> {
    Json(json!({ "status": "healthy", "service": SERVER_NAME }))
}

async fn root_handler() -> Json<Value> {
    Json(json!({
        "service": "Scanova MCP Server",
        "version": env!("CARGO_PKG_VERSION"),
        "endpoints": {
            "mcp": "/mcp",
            "health": "/health"
        },
        "authentication": {
            "required": "Scanova API Key",
            "headers": ["Authorization", "X-API-Key", "Scanova-API-Key", "API-Key"],
            "note": "Configure your Scanova API key in your MCP client headers"
        }
    }))
}

/// Resolves on Ctrl+C, or SIGTERM on unix
pub async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{signal, SignalKind};

        match signal(SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to listen for SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => tracing::info!("Received Ctrl+C, initiating graceful shutdown"),
        _ = terminate => tracing::info!("Received SIGTERM, initiating graceful shutdown"),
    }
}
