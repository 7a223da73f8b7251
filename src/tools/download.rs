/// Tool for downloading QR code images
///
/// This module implements the download_qr_code MCP tool. The image itself
/// is not relayed; a successful download is reported with its content type.

use reqwest::Method;
use serde::Deserialize;
use serde_json::{json, Map, Value};

use crate::auth::ApiKey;
use crate::client::{query_pairs, ApiRequest, Endpoint, QrCodeApi};
use crate::domain::{OperationResult, QrId};
use crate::tools::{present, qrid_required, API_KEY_REQUIRED};

/// Arguments for downloading a QR code
#[derive(Debug, Default, Deserialize)]
pub struct DownloadQrParams {
    pub qrid: Option<QrId>,
    /// Download options (size, format, ...) sent as the query string
    pub params: Option<Map<String, Value>>,
}

/// Download a QR code image
///
/// Only HTTP 200 counts as success. Any other status passes the decoded
/// error body through.
pub async fn download_qr_code<A: QrCodeApi + ?Sized>(
    api: &A,
    api_key: Option<&ApiKey>,
    params: DownloadQrParams,
) -> OperationResult {
    let Some(api_key) = api_key else {
        return OperationResult::failure(API_KEY_REQUIRED);
    };
    let Some(qrid) = present(params.qrid) else {
        return OperationResult::failure(qrid_required("download"));
    };

    let query = params.params.as_ref().map(query_pairs).unwrap_or_default();
    let request = ApiRequest::new(Method::GET, Endpoint::Download(qrid)).with_query(query);

    let response = match api.send(api_key, request).await {
        Ok(response) => response,
        Err(e) => return e.into(),
    };

    if response.status == 200 {
        return OperationResult::Success(json!({
            "success": true,
            "message": "QR code download successful",
            "content_type": response.content_type,
        }));
    }

    match response.json() {
        Ok(body) => OperationResult::Success(body),
        Err(e) => e.into(),
    }
}
