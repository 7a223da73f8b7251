/// Tool for creating new QR codes
///
/// This module implements the create_qr_code MCP tool.

use reqwest::Method;
use serde::Deserialize;
use serde_json::{Map, Value};

use crate::auth::ApiKey;
use crate::client::{ApiRequest, Endpoint, QrCodeApi};
use crate::domain::OperationResult;
use crate::tools::{send_json, API_KEY_REQUIRED};

/// Arguments for creating a QR code
#[derive(Debug, Default, Deserialize)]
pub struct CreateQrParams {
    /// QR code definition (qr_type, category, info, name, ...), sent as the POST body
    pub params: Option<Map<String, Value>>,
}

/// Create a new QR code from the given definition
///
/// The definition must carry an `info` field; everything else is forwarded untouched.
pub async fn create_qr_code<A: QrCodeApi + ?Sized>(
    api: &A,
    api_key: Option<&ApiKey>,
    params: CreateQrParams,
) -> OperationResult {
    let Some(api_key) = api_key else {
        return OperationResult::failure(API_KEY_REQUIRED);
    };

    let Some(definition) = params.params.filter(|p| p.contains_key("info")) else {
        return OperationResult::failure(
            "Parameters with 'info' field are required for QR code creation",
        );
    };

    let request = ApiRequest::new(Method::POST, Endpoint::Collection)
        .with_body(Value::Object(definition));
    send_json(api, api_key, request).await
}
