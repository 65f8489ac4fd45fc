//! Dev-server reachability probe.
//!
//! Issues one `GET` against the dev server's status endpoint
//! (`http://localhost:8081/status` by default) and reports whether it
//! answered with a success status.  The response body is ignored.
//!
//! The probe is advisory.  Connection refused, DNS and TLS failures, and
//! timeouts surface internally as [`ProbeError`] and are then mapped to
//! `false`; callers of [`is_dev_server_running`] never see an error.  There is
//! no retry and no explicit timeout beyond the HTTP client's defaults.

use async_trait::async_trait;
use testapp_core::DEV_SERVER_STATUS_URL;
use thiserror::Error;
use tracing::debug;

use crate::application::startup::DevServerProbe;

/// Error type for the dev-server probe.
#[derive(Debug, Error)]
pub enum ProbeError {
    /// The HTTP client could not be constructed.
    #[error("failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    /// The request failed before a response arrived.
    #[error("request to {url} failed: {source}")]
    Request {
        url: String,
        #[source]
        source: reqwest::Error,
    },
}

/// Probes the dev server at a fixed URL.
#[derive(Debug, Clone)]
pub struct HttpDevServerProbe {
    client: reqwest::Client,
    url: String,
}

impl HttpDevServerProbe {
    /// Probes `url`.
    ///
    /// The dev server always runs on this machine, so system proxy settings
    /// are bypassed.
    ///
    /// # Errors
    ///
    /// Returns [`ProbeError::Client`] if the HTTP client cannot be built.
    pub fn new(url: impl Into<String>) -> Result<Self, ProbeError> {
        let client = reqwest::Client::builder()
            .no_proxy()
            .build()
            .map_err(ProbeError::Client)?;
        Ok(Self {
            client,
            url: url.into(),
        })
    }

    /// Probes [`DEV_SERVER_STATUS_URL`].
    ///
    /// # Errors
    ///
    /// Returns [`ProbeError::Client`] if the HTTP client cannot be built.
    pub fn local() -> Result<Self, ProbeError> {
        Self::new(DEV_SERVER_STATUS_URL)
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// Sends the request and reports whether the status was a success.
    ///
    /// # Errors
    ///
    /// Returns [`ProbeError::Request`] on any transport failure.  A
    /// non-success status is `Ok(false)`, not an error.
    pub async fn status(&self) -> Result<bool, ProbeError> {
        let response = self
            .client
            .get(&self.url)
            .send()
            .await
            .map_err(|source| ProbeError::Request {
                url: self.url.clone(),
                source,
            })?;
        debug!("dev server {} answered {}", self.url, response.status());
        Ok(response.status().is_success())
    }
}

#[async_trait]
impl DevServerProbe for HttpDevServerProbe {
    async fn is_running(&self) -> bool {
        self.status().await.unwrap_or_else(|e| {
            debug!("dev server not reachable: {e}");
            false
        })
    }
}

/// Resolves to `true` when the dev server at
/// `http://localhost:8081/status` answers with a success status.
pub async fn is_dev_server_running() -> bool {
    match HttpDevServerProbe::local() {
        Ok(probe) => probe.is_running().await,
        Err(e) => {
            debug!("dev server probe unavailable: {e}");
            false
        }
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
