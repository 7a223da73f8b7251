/// Tool for updating existing QR codes
///
/// This module implements the update_qr_code MCP tool, a full PUT of the
/// QR code definition.

use reqwest::Method;
use serde::Deserialize;
use serde_json::{Map, Value};

use crate::auth::ApiKey;
use crate::client::{ApiRequest, Endpoint, QrCodeApi};
use crate::domain::{OperationResult, QrId};
use crate::tools::{present, qrid_required, send_json, API_KEY_REQUIRED};

/// Arguments for updating a QR code
#[derive(Debug, Default, Deserialize)]
pub struct UpdateQrParams {
    pub qrid: Option<QrId>,
    /// New definition, sent as the PUT body
    pub params: Option<Map<String, Value>>,
}

/// Replace the definition of an existing QR code
pub async fn update_qr_code<A: QrCodeApi + ?Sized>(
    api: &A,
    api_key: Option<&ApiKey>,
    params: UpdateQrParams,
) -> OperationResult {
    let Some(api_key) = api_key else {
        return OperationResult::failure(API_KEY_REQUIRED);
    };
    let Some(qrid) = present(params.qrid) else {
        return OperationResult::failure(qrid_required("update"));
    };
    let Some(definition) = params.params.filter(|p| !p.is_empty()) else {
        return OperationResult::failure("Parameters are required for QR code update");
    };

    let request =
        ApiRequest::new(Method::PUT, Endpoint::Item(qrid)).with_body(Value::Object(definition));
    send_json(api, api_key, request).await
}
