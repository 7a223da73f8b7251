/// In-memory stand-in for the remote QR code service
use std::sync::Mutex;

use async_trait::async_trait;
use scanova_mcp::{ApiError, ApiKey, ApiRequest, ApiResponse, QrCodeApi};
use serde_json::Value;

/// Answers every request with the same JSON body and records what it received
pub struct MockQrCodeApi {
    status: u16,
    body: Value,
    received: Mutex<Vec<(String, ApiRequest)>>,
}

impl MockQrCodeApi {
    pub fn new(status: u16, body: Value) -> Self {
        Self {
            status,
            body,
            received: Mutex::new(Vec::new()),
        }
    }

    pub fn received(&self) -> Vec<(String, ApiRequest)> {
        self.received.lock().unwrap().clone()
    }
}

#[async_trait]
impl QrCodeApi for MockQrCodeApi {
    async fn send(&self, api_key: &ApiKey, request: ApiRequest) -> Result<ApiResponse, ApiError> {
        self.received
            .lock()
            .unwrap()
            .push((api_key.expose().to_string(), request));
        Ok(ApiResponse::json_body(self.status, &self.body))
    }
}
