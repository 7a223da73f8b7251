/// Tools for switching QR codes on and off
///
/// This module implements the activate_qr_code and deactivate_qr_code MCP
/// tools. Both are a PATCH of the QR code's `is_active` flag.

use reqwest::Method;
use serde::Deserialize;
use serde_json::{json, Map, Value};

use crate::auth::ApiKey;
use crate::client::{ApiRequest, Endpoint, QrCodeApi};
use crate::domain::{OperationResult, QrId};
use crate::tools::{present, qrid_required, send_json, API_KEY_REQUIRED};

/// Arguments for activating or deactivating a QR code
#[derive(Debug, Default, Deserialize)]
pub struct ActivationParams {
    pub qrid: Option<QrId>,
    /// PATCH body override; defaults to `{"is_active": <bool>}`
    pub params: Option<Map<String, Value>>,
}

/// Activate a QR code
pub async fn activate_qr_code<A: QrCodeApi + ?Sized>(
    api: &A,
    api_key: Option<&ApiKey>,
    params: ActivationParams,
) -> OperationResult {
    set_active(api, api_key, params, true).await
}

/// Deactivate a QR code
pub async fn deactivate_qr_code<A: QrCodeApi + ?Sized>(
    api: &A,
    api_key: Option<&ApiKey>,
    params: ActivationParams,
) -> OperationResult {
    set_active(api, api_key, params, false).await
}

async fn set_active<A: QrCodeApi + ?Sized>(
    api: &A,
    api_key: Option<&ApiKey>,
    params: ActivationParams,
    active: bool,
) -> OperationResult {
    let operation = if active { "activate" } else { "deactivate" };

    let Some(api_key) = api_key else {
        return OperationResult::failure(API_KEY_REQUIRED);
    };
    let Some(qrid) = present(params.qrid) else {
        return OperationResult::failure(qrid_required(operation));
    };

    let body = match params.params {
        Some(patch) => Value::Object(patch),
        None => json!({ "is_active": active }),
    };

    let request = ApiRequest::new(Method::PATCH, Endpoint::Item(qrid)).with_body(body);
    send_json(api, api_key, request).await
}
