/// reqwest implementation of the QR code service interface
///
/// Requests go to `<base_url>/qrcode/...` with the caller's API key in the
/// Authorization header and a JSON content type, matching what the Scanova
/// management API expects.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::{HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use reqwest::Url;
use tracing::{debug, warn};

use crate::auth::ApiKey;
use crate::client::{ApiError, ApiRequest, ApiResponse, Endpoint, QrCodeApi};

/// User agent sent on every outbound request
const USER_AGENT: &str = concat!("scanova-mcp/", env!("CARGO_PKG_VERSION"));

/// HTTP client for the Scanova management API
pub struct HttpQrCodeApi {
    client: reqwest::Client,
    base_url: Url,
}

impl HttpQrCodeApi {
    /// Create a client for the given base URL
    ///
    /// Fails if the URL cannot carry a path (e.g. `mailto:`) or the underlying
    /// reqwest client cannot be built.
    pub fn new(base_url: Url, timeout: Duration) -> Result<Self, ApiError> {
        if base_url.cannot_be_a_base() {
            return Err(ApiError::InvalidUrl(base_url.to_string()));
        }

        let client = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(USER_AGENT)
            .build()?;

        Ok(Self { client, base_url })
    }

    /// Resolve an endpoint against the base URL
    ///
    /// Segments are appended (not joined), so a trailing slash on the base URL
    /// never yields `//qrcode/`. IDs are percent-encoded; `.` and `..` are
    /// refused because the URL parser would drop them and address the collection.
    pub fn url_for(&self, endpoint: &Endpoint) -> Result<Url, ApiError> {
        if let Some(id) = endpoint.qrid().filter(|id| id.is_dot_segment()) {
            return Err(ApiError::InvalidUrl(format!(
                "QR code ID '{}' is not a valid path segment",
                id.as_str()
            )));
        }

        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| ApiError::InvalidUrl(self.base_url.to_string()))?
            .pop_if_empty()
            .extend(endpoint.segments());
        Ok(url)
    }
}

#[async_trait]
impl QrCodeApi for HttpQrCodeApi {
    async fn send(&self, api_key: &ApiKey, request: ApiRequest) -> Result<ApiResponse, ApiError> {
        let url = self.url_for(&request.endpoint)?;
        debug!(method = %request.method, path = url.path(), "Calling Scanova API");

        let mut auth = HeaderValue::from_str(api_key.expose())
            .map_err(|_| ApiError::InvalidCredential)?;
        auth.set_sensitive(true);

        let mut builder = self
            .client
            .request(request.method.clone(), url)
            .header(AUTHORIZATION, auth)
            .header(CONTENT_TYPE, "application/json");

        if !request.query.is_empty() {
            builder = builder.query(&request.query);
        }
        if let Some(body) = &request.body {
            builder = builder.json(body);
        }

        let response = builder.send().await.map_err(|e| {
            warn!(method = %request.method, "Scanova API request failed: {}", e);
            ApiError::Network(e)
        })?;

        let status = response.status().as_u16();
        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .map(str::to_string);
        let body = response.bytes().await?.to_vec();

        debug!(status, bytes = body.len(), "Scanova API responded");

        Ok(ApiResponse::new(status, content_type, body))
    }
}
