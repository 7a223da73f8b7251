/// Server configuration
///
/// Values come from command line flags with environment fallbacks (see
/// `main.rs`); this module only holds and validates them.

use std::time::Duration;

use reqwest::Url;

use crate::ServerError;

/// Default base URL of the Scanova management API
pub const DEFAULT_BASE_URL: &str = "https://management.scanova.io/";

/// Runtime configuration of the MCP server
#[derive(Debug, Clone, PartialEq)]
pub struct ServerConfig {
    /// Interface to bind the HTTP listener to
    pub host: String,
    /// Port to bind the HTTP listener to
    pub port: u16,
    /// Base URL of the remote QR code service
    pub base_url: Url,
    /// Timeout applied to each outbound request
    pub request_timeout: Duration,
}

impl ServerConfig {
    /// Build a configuration, validating the base URL
    pub fn new(
        host: impl Into<String>,
        port: u16,
        base_url: &str,
        request_timeout: Duration,
    ) -> Result<Self, ServerError> {
        let base_url = Url::parse(base_url).map_err(|e| ServerError::Config {
            message: format!("invalid base URL '{}': {}", base_url, e),
        })?;
        if base_url.cannot_be_a_base() {
            return Err(ServerError::Config {
                message: format!("base URL '{}' cannot carry a path", base_url),
            });
        }

        Ok(Self {
            host: host.into(),
            port,
            base_url,
            request_timeout,
        })
    }

    /// Address to listen on, as `host:port`
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
