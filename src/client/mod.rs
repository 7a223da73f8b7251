/// Client layer for the remote Scanova QR code service
///
/// This module defines the interface the backend operations use to reach the
/// remote service. The HTTP implementation lives in `http`; tests substitute
/// their own implementation of `QrCodeApi`.

pub mod http;

// Re-export the main client types
pub use http::*;

use async_trait::async_trait;
use reqwest::Method;
use serde_json::{Map, Value};
use thiserror::Error;

use crate::auth::ApiKey;
use crate::domain::{OperationResult, QrId};

/// Errors that can occur while talking to the remote service
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("{0}")]
    Network(#[from] reqwest::Error),

    #[error("invalid JSON response: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("invalid URL: {0}")]
    InvalidUrl(String),

    #[error("API key contains characters that are not allowed in a header")]
    InvalidCredential,
}

impl From<ApiError> for OperationResult {
    fn from(error: ApiError) -> Self {
        OperationResult::Failure(format!("API request failed: {}", error))
    }
}

/// Resource addressed by a request, relative to the service base URL
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Endpoint {
    /// `/qrcode/`
    Collection,
    /// `/qrcode/{id}/`
    Item(QrId),
    /// `/qrcode/{id}/download`
    Download(QrId),
}

impl Endpoint {
    /// Path segments appended to the base URL
    pub fn segments(&self) -> Vec<&str> {
        match self {
            Endpoint::Collection => vec!["qrcode", ""],
            Endpoint::Item(id) => vec!["qrcode", id.as_str(), ""],
            Endpoint::Download(id) => vec!["qrcode", id.as_str(), "download"],
        }
    }

    /// The QR code this endpoint addresses, if any
    pub fn qrid(&self) -> Option<&QrId> {
        match self {
            Endpoint::Collection => None,
            Endpoint::Item(id) | Endpoint::Download(id) => Some(id),
        }
    }
}

/// A single call to the remote service
#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    pub method: Method,
    pub endpoint: Endpoint,
    /// Query string pairs, in order
    pub query: Vec<(String, String)>,
    /// JSON body, if any
    pub body: Option<Value>,
}

impl ApiRequest {
    pub fn new(method: Method, endpoint: Endpoint) -> Self {
        Self {
            method,
            endpoint,
            query: Vec::new(),
            body: None,
        }
    }

    pub fn with_query(mut self, query: Vec<(String, String)>) -> Self {
        self.query = query;
        self
    }

    pub fn with_body(mut self, body: Value) -> Self {
        self.body = Some(body);
        self
    }
}

/// Raw response from the remote service
#[derive(Debug, Clone, PartialEq)]
pub struct ApiResponse {
    pub status: u16,
    pub content_type: Option<String>,
    pub body: Vec<u8>,
}

impl ApiResponse {
    pub fn new(status: u16, content_type: Option<String>, body: Vec<u8>) -> Self {
        Self {
            status,
            content_type,
            body,
        }
    }

    /// Convenience constructor for a JSON response
    pub fn json_body(status: u16, body: &Value) -> Self {
        Self::new(
            status,
            Some("application/json".to_string()),
            body.to_string().into_bytes(),
        )
    }

    /// Decode the body as JSON, regardless of status
    pub fn json(&self) -> Result<Value, ApiError> {
        Ok(serde_json::from_slice(&self.body)?)
    }
}

/// Interface to the remote QR code service
///
/// Every request carries the caller's API key. Implementations report
/// transport and URL failures as `ApiError`; non-2xx statuses are ordinary
/// responses.
#[async_trait]
pub trait QrCodeApi: Send + Sync {
    async fn send(&self, api_key: &ApiKey, request: ApiRequest) -> Result<ApiResponse, ApiError>;
}

/// Flatten a JSON object into query string pairs
///
/// Strings are sent as-is, numbers and booleans in their JSON form, nulls are
/// dropped and nested values are sent as compact JSON.
pub fn query_pairs(params: &Map<String, Value>) -> Vec<(String, String)> {
    params
        .iter()
        .filter_map(|(key, value)| {
            let value = match value {
                Value::Null => return None,
                Value::String(s) => s.clone(),
                other => other.to_string(),
            };
            Some((key.clone(), value))
        })
        .collect()
}
