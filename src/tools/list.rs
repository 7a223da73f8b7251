/// Tool for listing QR codes
///
/// This module implements the list_qr_codes MCP tool.

use reqwest::Method;
use serde::Deserialize;

use crate::auth::ApiKey;
use crate::client::{ApiRequest, Endpoint, QrCodeApi};
use crate::domain::OperationResult;
use crate::tools::{send_json, API_KEY_REQUIRED};

/// Arguments for listing QR codes
#[derive(Debug, Default, Deserialize)]
pub struct ListQrParams {
    pub page: Option<u64>,
    pub limit: Option<u64>,
    pub search: Option<String>,
}

impl ListQrParams {
    /// Query string for the provided filters
    ///
    /// Zero and empty values count as not provided and are left out.
    pub fn filters(&self) -> Vec<(String, String)> {
        let mut query = Vec::new();
        if let Some(page) = self.page.filter(|p| *p > 0) {
            query.push(("page".to_string(), page.to_string()));
        }
        if let Some(limit) = self.limit.filter(|l| *l > 0) {
            query.push(("limit".to_string(), limit.to_string()));
        }
        if let Some(search) = self.search.as_ref().filter(|s| !s.is_empty()) {
            query.push(("search".to_string(), search.clone()));
        }
        query
    }
}

/// List the caller's QR codes, optionally paged and filtered
pub async fn list_qr_codes<A: QrCodeApi + ?Sized>(
    api: &A,
    api_key: Option<&ApiKey>,
    params: ListQrParams,
) -> OperationResult {
    let Some(api_key) = api_key else {
        return OperationResult::failure(API_KEY_REQUIRED);
    };

    let request = ApiRequest::new(Method::GET, Endpoint::Collection).with_query(params.filters());
    send_json(api, api_key, request).await
}
