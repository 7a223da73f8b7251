/// Backend operations exposed as MCP tools
///
/// Each operation is a thin call into the remote QR code service: it checks
/// the credential, validates its required arguments, sends one request and
/// turns whatever comes back into an `OperationResult`.

pub mod activation;
pub mod create;
pub mod download;
pub mod list;
pub mod registry;
pub mod retrieve;
pub mod update;

// Re-export tool functions for easy access
pub use activation::*;
pub use create::*;
pub use download::*;
pub use list::*;
pub use registry::*;
pub use retrieve::*;
pub use update::*;

use crate::auth::ApiKey;
use crate::client::{ApiRequest, QrCodeApi};
use crate::domain::{OperationResult, QrId};

/// Failure returned by every operation called without a credential
pub const API_KEY_REQUIRED: &str =
    "API key is required. Please configure your Scanova API key in your MCP client.";

/// Failure message for a missing QR code ID
fn qrid_required(operation: &str) -> String {
    format!("QR code ID is required for {} operation", operation)
}

/// Treat an empty ID the same as an absent one
fn present(qrid: Option<QrId>) -> Option<QrId> {
    qrid.filter(|id| !id.is_empty())
}

/// Send a request and pass the decoded JSON body through, whatever the status
async fn send_json<A: QrCodeApi + ?Sized>(
    api: &A,
    api_key: &ApiKey,
    request: ApiRequest,
) -> OperationResult {
    match api.send(api_key, request).await.and_then(|response| response.json()) {
        Ok(body) => OperationResult::Success(body),
        Err(e) => e.into(),
    }
}
