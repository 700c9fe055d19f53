//! Registry client for latest-version lookups
//!
//! Issues `GET {registry}/{name}/latest` and reads the `version` field from
//! the JSON body. Every lookup is independent: no batching, no retry, no
//! caching between packages.

use crate::error::{Error, Result};
use reqwest::blocking::Client;
use serde::Deserialize;
use std::time::Duration;

/// Public npm registry
pub const DEFAULT_REGISTRY: &str = "https://registry.npmjs.org";

/// Default HTTP timeout for a single lookup
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// The subset of the `latest` document we care about
#[derive(Debug, Deserialize)]
struct LatestManifest {
    version: Option<String>,
}

/// HTTP client bound to one registry
pub struct RegistryClient {
    client: Client,
    base_url: String,
}

impl RegistryClient {
    /// Create a client for `base_url` (trailing slashes are ignored)
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(concat!("depwiz/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| Error::Network(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// URL of the `latest` document for `name`
    pub fn latest_url(&self, name: &str) -> String {
        format!("{}/{}/latest", self.base_url, name)
    }

    /// Resolve the latest published version of `name`.
    ///
    /// Any non-200 status, transport failure, or body without a usable
    /// `version` is reported as [`Error::VersionLookup`].
    pub fn resolve_latest_version(&self, name: &str) -> Result<String> {
        let url = self.latest_url(name);
        tracing::debug!(package = name, %url, "resolving latest version");

        let response = self.client.get(&url).send().map_err(|e| {
            if e.is_timeout() {
                Error::lookup(name, format!("request timed out: {}", url))
            } else if e.is_connect() {
                Error::lookup(name, format!("connection failed: {}", url))
            } else {
                Error::lookup(name, format!("HTTP error: {}", e))
            }
        })?;

        let status = response.status();
        if status != reqwest::StatusCode::OK {
            let reason = format!("HTTP {} for {}", status.as_u16(), url);
            return Err(Error::lookup(name, reason));
        }

        let body: LatestManifest = response
            .json()
            .map_err(|e| Error::lookup(name, format!("malformed response: {}", e)))?;

        match body.version {
            Some(version) if !version.trim().is_empty() => {
                tracing::debug!(package = name, %version, "resolved");
                Ok(version.trim().to_string())
            }
            _ => Err(Error::lookup(name, "response has no version field")),
        }
    }
}
