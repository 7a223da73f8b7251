/// Core types used throughout the domain layer

use serde::{Deserialize, Serialize};
use crate::domain::DomainError;

/// Identifier of a QR code on the remote service
///
/// Clients send it either as a JSON string or as an integer; both forms are
/// normalized to the string used in the resource path.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawQrId", into = "String")]
pub struct QrId(String);

impl QrId {
    /// Create a QR code ID from its string form
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Borrow the ID as a path segment
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// An empty ID counts as "not provided"
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// `.` and `..` would be resolved away when appended to a URL path
    pub fn is_dot_segment(&self) -> bool {
        matches!(self.0.as_str(), "." | "..")
    }
}

impl From<QrId> for String {
    fn from(id: QrId) -> Self {
        id.0
    }
}

/// Wire forms accepted for a QR code ID
#[derive(Deserialize)]
#[serde(untagged)]
enum RawQrId {
    Text(String),
    Number(serde_json::Number),
}

impl TryFrom<RawQrId> for QrId {
    type Error = DomainError;

    fn try_from(raw: RawQrId) -> Result<Self, Self::Error> {
        match raw {
            RawQrId::Text(text) => {
                let id = Self(text);
                if id.is_dot_segment() {
                    return Err(DomainError::InvalidQrId(format!(
                        "'{}' is not a valid path segment",
                        id.0
                    )));
                }
                Ok(id)
            }
            RawQrId::Number(n) if n.is_i64() || n.is_u64() => Ok(Self(n.to_string())),
            RawQrId::Number(n) => Err(DomainError::InvalidQrId(format!(
                "expected a string or integer, got {}",
                n
            ))),
        }
    }
}
