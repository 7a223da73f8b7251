/// Credential extraction for inbound MCP requests
///
/// Clients configure their Scanova API key as a request header. Several
/// header spellings are accepted because MCP clients differ in what they let
/// users configure.

use std::fmt;

use axum::http::HeaderMap;

/// Bearer prefix stripped from the Authorization header
const BEARER_PREFIX: &str = "Bearer ";

/// Fallback API key headers, checked in order after Authorization.
/// Header name lookup is case-insensitive.
pub const API_KEY_HEADERS: [&str; 3] = ["x-api-key", "scanova-api-key", "api-key"];

/// Extract the caller's credential from the request headers
///
/// Precedence (first match wins):
/// 1. `Authorization`: `Bearer <token>` yields `<token>`, anything else is returned verbatim
/// 2. `X-API-Key`
/// 3. `Scanova-API-Key`
/// 4. `API-Key`
///
/// Empty header values are skipped. Returns `None` when no header carries a value.
pub fn extract_api_key(headers: &HeaderMap) -> Option<String> {
    if let Some(auth) = header_value(headers, "authorization") {
        return Some(match auth.strip_prefix(BEARER_PREFIX) {
            Some(token) => token.to_string(),
            None => auth.to_string(),
        });
    }

    API_KEY_HEADERS
        .iter()
        .find_map(|name| header_value(headers, name))
        .map(str::to_string)
}

fn header_value<'a>(headers: &'a HeaderMap, name: &str) -> Option<&'a str> {
    headers
        .get(name)
        .and_then(|value| value.to_str().ok())
        .filter(|value| !value.is_empty())
}

/// A non-empty Scanova API key
///
/// The key is forwarded to the remote service as-is. It is never printed:
/// `Debug` is redacted and there is no `Display` impl.
#[derive(Clone, PartialEq, Eq)]
pub struct ApiKey(String);

impl ApiKey {
    /// Wrap a raw credential, rejecting the empty string
    pub fn new(raw: impl Into<String>) -> Option<Self> {
        let raw = raw.into();
        if raw.is_empty() {
            None
        } else {
            Some(Self(raw))
        }
    }

    /// The raw key, for the outbound Authorization header only
    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ApiKey(***)")
    }
}
