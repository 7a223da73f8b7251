/// MCP dispatcher that turns JSON-RPC requests into QR code operations
///
/// This module implements the request handling behind `POST /mcp`:
/// 1. Parses the JSON-RPC envelope
/// 2. Routes `initialize`, `tools/list` and `tools/call`
/// 3. For tool calls, checks the caller's credential, marshals the arguments
///    into the tool's parameter struct and invokes the backend operation
///
/// Failures inside an operation (missing arguments, remote errors) are
/// returned as successful tool results carrying `{"error": ...}` text.
/// Only envelope, routing and marshaling problems become JSON-RPC errors.

use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::{Map, Value};
use thiserror::Error;
use tracing::{debug, error, info, warn};

use crate::auth::ApiKey;
use crate::client::QrCodeApi;
use crate::domain::OperationResult;
use crate::mcp::protocol::*;
use crate::tools::{self, QrTool, ToolRegistry};

/// JSON-RPC error message for a tool call without credentials
pub const MISSING_CREDENTIAL_MESSAGE: &str = "API key is required. Please configure your Scanova API key in your MCP client headers (Authorization, X-API-Key, Scanova-API-Key, or API-Key).";

/// Errors raised while resolving or marshaling a tool call
#[derive(Error, Debug)]
pub enum ToolError {
    #[error("Unknown tool: {0}")]
    UnknownTool(String),

    #[error("Unknown tool: no tool name given")]
    MissingName,

    #[error("invalid tool call parameters: {0}")]
    InvalidCall(serde_json::Error),

    #[error("invalid arguments for {tool}: {source}")]
    InvalidArguments {
        tool: &'static str,
        #[source]
        source: serde_json::Error,
    },
}

/// Dispatcher shared by all requests
///
/// Holds only immutable data: the client for the remote service and the
/// tool registry. Requests are independent and may run concurrently.
pub struct McpDispatcher {
    api: Arc<dyn QrCodeApi>,
    registry: ToolRegistry,
}

impl McpDispatcher {
    /// Create a dispatcher backed by the given QR code service client
    pub fn new(api: Arc<dyn QrCodeApi>) -> Self {
        Self {
            api,
            registry: ToolRegistry::new(),
        }
    }

    pub fn registry(&self) -> &ToolRegistry {
        &self.registry
    }

    /// Handle a raw request body
    ///
    /// Unparseable JSON yields an internal error with a `null` id.
    pub async fn handle_body(&self, body: &[u8], credential: Option<String>) -> JsonRpcResponse {
        match serde_json::from_slice::<Value>(body) {
            Ok(value) => self.handle_value(value, credential).await,
            Err(e) => {
                warn!("Failed to parse JSON-RPC request: {}", e);
                internal_error(Value::Null, e)
            }
        }
    }

    /// Handle an already-parsed JSON value
    pub async fn handle_value(&self, value: Value, credential: Option<String>) -> JsonRpcResponse {
        let id = match value.as_object() {
            Some(envelope) => envelope.get("id").cloned().unwrap_or(Value::Null),
            None => {
                warn!("JSON-RPC request is not an object");
                return internal_error(Value::Null, "request must be a JSON object");
            }
        };

        match serde_json::from_value::<JsonRpcRequest>(value) {
            Ok(request) => self.handle_request(request, credential).await,
            Err(e) => {
                warn!("Malformed JSON-RPC envelope: {}", e);
                internal_error(id, e)
            }
        }
    }

    /// Route a JSON-RPC request to its handler
    pub async fn handle_request(
        &self,
        request: JsonRpcRequest,
        credential: Option<String>,
    ) -> JsonRpcResponse {
        debug!(method = ?request.method, id = %request.id, "Processing request");

        match request.method.as_deref() {
            Some("initialize") => self.handle_initialize(request.id),
            Some("tools/list") => self.handle_tools_list(request.id),
            Some("tools/call") => {
                self.handle_tools_call(request.id, request.params, credential)
                    .await
            }
            Some(other) => JsonRpcResponse::error(
                request.id,
                error_codes::METHOD_NOT_FOUND,
                format!("Method not found: {}", other),
            ),
            None => JsonRpcResponse::error(
                request.id,
                error_codes::METHOD_NOT_FOUND,
                "Method not found: no method given".to_string(),
            ),
        }
    }

    /// Handle MCP initialization request
    fn handle_initialize(&self, id: Value) -> JsonRpcResponse {
        info!("MCP client connected");
        success(id, InitializeResult::current())
    }

    /// Handle tools/list request
    fn handle_tools_list(&self, id: Value) -> JsonRpcResponse {
        success(
            id,
            ToolsListResult {
                tools: self.registry.definitions(),
            },
        )
    }

    /// Handle tools/call request
    async fn handle_tools_call(
        &self,
        id: Value,
        params: Option<Value>,
        credential: Option<String>,
    ) -> JsonRpcResponse {
        let Some(api_key) = credential.and_then(ApiKey::new) else {
            warn!("Rejected tools/call without an API key");
            return JsonRpcResponse::error(
                id,
                error_codes::INVALID_PARAMS,
                MISSING_CREDENTIAL_MESSAGE.to_string(),
            );
        };

        let outcome = match parse_call(params) {
            Ok(call) => {
                let arguments = call.arguments.unwrap_or_default();
                match call.name {
                    Some(name) => self.call_tool(&name, arguments, &api_key).await,
                    None => Err(ToolError::MissingName),
                }
            }
            Err(e) => Err(e),
        };

        match outcome {
            Ok(result) => {
                if let OperationResult::Failure(message) = &result {
                    debug!("Tool returned an operation error: {}", message);
                }
                success(id, ToolCallResult::text(result.to_text()))
            }
            Err(e) => {
                error!("Tool execution error: {}", e);
                JsonRpcResponse::error(
                    id,
                    error_codes::INTERNAL_ERROR,
                    format!("Tool execution error: {}", e),
                )
            }
        }
    }

    /// Resolve a tool by name, marshal its arguments and run it
    pub async fn call_tool(
        &self,
        name: &str,
        arguments: Map<String, Value>,
        api_key: &ApiKey,
    ) -> Result<OperationResult, ToolError> {
        let tool = QrTool::from_name(name).ok_or_else(|| ToolError::UnknownTool(name.to_string()))?;
        info!(tool = tool.name(), "Calling tool");

        let api = self.api.as_ref();
        let key = Some(api_key);
        let result = match tool {
            QrTool::Create => tools::create_qr_code(api, key, parse_args(tool, arguments)?).await,
            QrTool::List => tools::list_qr_codes(api, key, parse_args(tool, arguments)?).await,
            QrTool::Update => tools::update_qr_code(api, key, parse_args(tool, arguments)?).await,
            QrTool::Retrieve => tools::retrieve_qr_code(api, key, parse_args(tool, arguments)?).await,
            QrTool::Download => tools::download_qr_code(api, key, parse_args(tool, arguments)?).await,
            QrTool::Activate => tools::activate_qr_code(api, key, parse_args(tool, arguments)?).await,
            QrTool::Deactivate => {
                tools::deactivate_qr_code(api, key, parse_args(tool, arguments)?).await
            }
        };

        Ok(result)
    }
}

/// Parse `tools/call` params; absent or null params mean "no name, no arguments"
fn parse_call(params: Option<Value>) -> Result<ToolCallParams, ToolError> {
    match params {
        None | Some(Value::Null) => Ok(ToolCallParams::default()),
        Some(value) => serde_json::from_value(value).map_err(ToolError::InvalidCall),
    }
}

/// Deserialize tool arguments into the tool's parameter struct
fn parse_args<T: DeserializeOwned>(tool: QrTool, arguments: Map<String, Value>) -> Result<T, ToolError> {
    serde_json::from_value(Value::Object(arguments)).map_err(|source| ToolError::InvalidArguments {
        tool: tool.name(),
        source,
    })
}

fn success<T: Serialize>(id: Value, result: T) -> JsonRpcResponse {
    match serde_json::to_value(result) {
        Ok(value) => JsonRpcResponse::success(id, value),
        Err(e) => internal_error(id, e),
    }
}

fn internal_error(id: Value, details: impl std::fmt::Display) -> JsonRpcResponse {
    JsonRpcResponse::error(
        id,
        error_codes::INTERNAL_ERROR,
        format!("Internal error: {}", details),
    )
}
