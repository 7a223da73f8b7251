/// JSON-RPC envelopes and MCP payloads exchanged on the `/mcp` endpoint
///
/// This module defines the JSON-RPC message format that MCP clients use to
/// talk to the QR code server over HTTP.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Protocol revision announced during `initialize`
pub const MCP_VERSION: &str = "2024-11-05";

/// Name reported in `serverInfo` and by the health endpoint
pub const SERVER_NAME: &str = "scanova-mcp";

/// JSON-RPC 2.0 request message
///
/// Only `method` is needed for routing. `jsonrpc` is accepted as sent and a
/// missing `id` is treated as `null`.
#[derive(Debug, Deserialize)]
pub struct JsonRpcRequest {
    /// JSON-RPC version, normally "2.0" but never checked; any JSON value is taken
    #[serde(default)]
    #[allow(dead_code)]
    pub jsonrpc: Option<Value>,
    /// Request identifier, echoed verbatim in the response
    #[serde(default)]
    pub id: Value,
    /// The method to call (e.g., "tools/call")
    #[serde(default)]
    pub method: Option<String>,
    /// Method parameters, left unparsed until routing
    #[serde(default)]
    pub params: Option<Value>,
}

/// JSON-RPC 2.0 response message
///
/// Exactly one of `result` and `error` is set; the constructors below are
/// the only way to build one.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct JsonRpcResponse {
    /// Always "2.0"
    pub jsonrpc: String,
    /// Copied from the request, `null` when it had none
    pub id: Value,
    /// Set on success
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<JsonRpcError>,
}

/// Protocol-level failure carried in a response
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct JsonRpcError {
    /// One of [`error_codes`]
    pub code: i32,
    pub message: String,
    /// Never populated by this server
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
}

/// `params` of a `tools/call` request
#[derive(Debug, Default, Deserialize)]
pub struct ToolCallParams {
    /// Name of the tool to call (e.g., "retrieve_qr_code")
    #[serde(default)]
    pub name: Option<String>,
    /// Tool arguments; absent means an empty object
    #[serde(default)]
    pub arguments: Option<Map<String, Value>>,
}

/// Result of a successful `tools/call`
#[derive(Debug, Serialize)]
pub struct ToolCallResult {
    pub content: Vec<ToolContent>,
}

/// One content block of a tool result
#[derive(Debug, Serialize)]
pub struct ToolContent {
    /// Type of content (always "text" here)
    #[serde(rename = "type")]
    pub content_type: String,
    /// Compact JSON text of the operation outcome
    pub text: String,
}

/// Entry of the `tools/list` catalog
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ToolDefinition {
    /// Tool name (e.g., "create_qr_code")
    pub name: String,
    pub description: String,
    /// JSON Schema of the accepted arguments
    pub input_schema: Value,
}

/// Result of `tools/list`
#[derive(Debug, Serialize)]
pub struct ToolsListResult<'a> {
    pub tools: &'a [ToolDefinition],
}

/// Capabilities announced in the handshake
#[derive(Debug, Serialize)]
pub struct ServerCapabilities {
    pub tools: ToolsCapability,
}

/// Tools capability information (serialized as `{}`)
#[derive(Debug, Serialize)]
pub struct ToolsCapability {}

/// Result of `initialize`
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InitializeResult {
    pub protocol_version: String,
    pub capabilities: ServerCapabilities,
    pub server_info: ServerInfo,
}

/// Information about this server
#[derive(Debug, Serialize)]
pub struct ServerInfo {
    pub name: String,
    /// Crate version
    pub version: String,
}

/// Error codes used in responses
pub mod error_codes {
    /// Unrecognized `method`
    pub const METHOD_NOT_FOUND: i32 = -32601;
    /// Invalid parameters - also used when a tool call arrives without credentials
    pub const INVALID_PARAMS: i32 = -32602;
    /// Internal error - malformed envelopes and tool execution faults
    pub const INTERNAL_ERROR: i32 = -32603;
}

impl JsonRpcResponse {
    pub fn success(id: Value, result: Value) -> Self {
        Self {
            jsonrpc: "2.0".to_string(),
            id,
            result: Some(result),
            error: None,
        }
    }

    pub fn error(id: Value, code: i32, message: String) -> Self {
        Self {
            jsonrpc: "2.0".to_string(),
            id,
            result: None,
            error: Some(JsonRpcError {
                code,
                message,
                data: None,
            }),
        }
    }

    /// Error code, if this is an error response
    pub fn error_code(&self) -> Option<i32> {
        self.error.as_ref().map(|e| e.code)
    }
}

impl ToolCallResult {
    /// Create a tool result with a single text entry
    pub fn text(text: String) -> Self {
        Self {
            content: vec![ToolContent {
                content_type: "text".to_string(),
                text,
            }],
        }
    }
}

impl InitializeResult {
    /// The fixed handshake payload of this server
    pub fn current() -> Self {
        Self {
            protocol_version: MCP_VERSION.to_string(),
            capabilities: ServerCapabilities {
                tools: ToolsCapability {},
            },
            server_info: ServerInfo {
                name: SERVER_NAME.to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
        }
    }
}
