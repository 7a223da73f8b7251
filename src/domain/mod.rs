/// Domain module containing the core value types of the QR code API
/// 
/// These types sit between the MCP dispatcher and the remote service:
/// identifiers for QR codes and the result shape every backend operation
/// produces.

pub mod outcome;
pub mod types;

// Re-export public types for easy access
pub use outcome::*;
pub use types::*;

use thiserror::Error;

/// Errors raised while interpreting tool arguments
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DomainError {
    #[error("Invalid QR code ID: {0}")]
    InvalidQrId(String),
}
