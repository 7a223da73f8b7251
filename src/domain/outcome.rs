/// Result shape shared by every backend operation
///
/// Operations never fail past their own boundary. A missing argument, a
/// transport failure or an undecodable response all end up as
/// `OperationResult::Failure`, which the dispatcher still delivers as a
/// successful MCP tool result.

use serde_json::{json, Value};

/// Outcome of a single backend operation
#[derive(Debug, Clone, PartialEq)]
pub enum OperationResult {
    /// Payload to hand back to the client, usually the remote JSON body
    Success(Value),
    /// Operation-level error message
    Failure(String),
}

impl OperationResult {
    /// Create a failure result
    pub fn failure(message: impl Into<String>) -> Self {
        Self::Failure(message.into())
    }

    pub fn is_failure(&self) -> bool {
        matches!(self, Self::Failure(_))
    }

    /// JSON form: the payload itself, or `{"error": message}`
    pub fn to_value(&self) -> Value {
        match self {
            Self::Success(value) => value.clone(),
            Self::Failure(message) => json!({ "error": message }),
        }
    }

    /// Text placed in the MCP `content` entry (compact JSON)
    pub fn to_text(&self) -> String {
        self.to_value().to_string()
    }
}
