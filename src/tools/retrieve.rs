/// Tool for fetching a single QR code
///
/// This module implements the retrieve_qr_code MCP tool.

use reqwest::Method;
use serde::Deserialize;
use serde_json::{Map, Value};

use crate::auth::ApiKey;
use crate::client::{query_pairs, ApiRequest, Endpoint, QrCodeApi};
use crate::domain::{OperationResult, QrId};
use crate::tools::{present, qrid_required, send_json, API_KEY_REQUIRED};

/// Arguments for retrieving a QR code
#[derive(Debug, Default, Deserialize)]
pub struct RetrieveQrParams {
    pub qrid: Option<QrId>,
    /// Extra query parameters passed through to the service
    pub params: Option<Map<String, Value>>,
}

/// Fetch the details of one QR code
pub async fn retrieve_qr_code<A: QrCodeApi + ?Sized>(
    api: &A,
    api_key: Option<&ApiKey>,
    params: RetrieveQrParams,
) -> OperationResult {
    let Some(api_key) = api_key else {
        return OperationResult::failure(API_KEY_REQUIRED);
    };
    let Some(qrid) = present(params.qrid) else {
        return OperationResult::failure(qrid_required("retrieve"));
    };

    let query = params.params.as_ref().map(query_pairs).unwrap_or_default();
    let request = ApiRequest::new(Method::GET, Endpoint::Item(qrid)).with_query(query);
    send_json(api, api_key, request).await
}
