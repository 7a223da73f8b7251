/// Catalog of the tools this server exposes
///
/// The registry is built once at startup and returned verbatim by
/// `tools/list`. `QrTool` is the typed form of a tool name used for routing
/// `tools/call`.

use serde_json::{json, Value};

use crate::mcp::protocol::ToolDefinition;

/// The QR code operations available as MCP tools
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum QrTool {
    Create,
    List,
    Update,
    Retrieve,
    Download,
    Activate,
    Deactivate,
}

impl QrTool {
    /// All tools, in the order they are advertised
    pub const ALL: [QrTool; 7] = [
        QrTool::Create,
        QrTool::List,
        QrTool::Update,
        QrTool::Retrieve,
        QrTool::Download,
        QrTool::Activate,
        QrTool::Deactivate,
    ];

    /// Look a tool up by its MCP name
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|tool| tool.name() == name)
    }

    pub fn name(&self) -> &'static str {
        match self {
            QrTool::Create => "create_qr_code",
            QrTool::List => "list_qr_codes",
            QrTool::Update => "update_qr_code",
            QrTool::Retrieve => "retrieve_qr_code",
            QrTool::Download => "download_qr_code",
            QrTool::Activate => "activate_qr_code",
            QrTool::Deactivate => "deactivate_qr_code",
        }
    }

    /// Description shown to the model; lists the phrasings that should map to the tool
    pub fn description(&self) -> &'static str {
        match self {
            QrTool::Create => "Create a new QR code. Can be called with: create qr, make qr code, generate qr",
            QrTool::List => "List QR codes. Can be called with: list qr codes, show qr codes",
            QrTool::Update => "Update an existing QR code",
            QrTool::Retrieve => "Get details of a specific QR code",
            QrTool::Download => "Download QR code image",
            QrTool::Activate => "Activate a QR code",
            QrTool::Deactivate => "Deactivate a QR code",
        }
    }

    /// JSON schema for the tool's arguments
    pub fn input_schema(&self) -> Value {
        match self {
            QrTool::Create => json!({
                "type": "object",
                "properties": {
                    "params": {
                        "type": "object",
                        "description": "QR code parameters including qr_type, category, info, and name"
                    }
                },
                "required": ["params"]
            }),
            QrTool::List => json!({
                "type": "object",
                "properties": {
                    "page": {"type": "integer", "default": 1},
                    "limit": {"type": "integer", "default": 10},
                    "search": {"type": "string"}
                }
            }),
            QrTool::Update => json!({
                "type": "object",
                "properties": {
                    "qrid": {"type": "string"},
                    "params": {"type": "object"}
                },
                "required": ["qrid", "params"]
            }),
            QrTool::Retrieve => json!({
                "type": "object",
                "properties": {
                    "qrid": {"type": "string"},
                    "params": {"type": "object", "description": "Optional query parameters"}
                },
                "required": ["qrid"]
            }),
            QrTool::Download => json!({
                "type": "object",
                "properties": {
                    "qrid": {"type": "string"},
                    "params": {"type": "object", "description": "Download options such as size and format"}
                },
                "required": ["qrid"]
            }),
            QrTool::Activate | QrTool::Deactivate => json!({
                "type": "object",
                "properties": {
                    "qrid": {"type": "string"},
                    "params": {"type": "object", "description": "Optional PATCH body overriding is_active"}
                },
                "required": ["qrid"]
            }),
        }
    }

    pub fn definition(&self) -> ToolDefinition {
        ToolDefinition {
            name: self.name().to_string(),
            description: self.description().to_string(),
            input_schema: self.input_schema(),
        }
    }
}

/// Immutable list of tool definitions served by `tools/list`
#[derive(Debug)]
pub struct ToolRegistry {
    tools: Vec<ToolDefinition>,
}

impl ToolRegistry {
    /// Build the registry of all QR code tools
    pub fn new() -> Self {
        Self {
            tools: QrTool::ALL.iter().map(QrTool::definition).collect(),
        }
    }

    pub fn definitions(&self) -> &[ToolDefinition] {
        &self.tools
    }

    pub fn len(&self) -> usize {
        self.tools.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }
}

impl Default for ToolRegistry {
    fn default() -> Self {
        Self::new()
    }
}
