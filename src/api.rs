//! # Management API Client
//!
//! This module provides access to the repository manager's REST API behind
//! the [`RepositoryApi`] trait. The trait separates what the orchestrator
//! needs (an existence probe and a create call) from how it is performed,
//! so tests can substitute a mock implementation and exercise the whole
//! provisioning flow without a live server.
//!
//! - **`RepositoryApi`**: the interface the orchestrator drives.
//! - **`HttpRepositoryApi`**: the real implementation, a blocking HTTP
//!   client with basic auth, a fixed request timeout, and an opt-in escape
//!   hatch for self-signed TLS certificates.
//!
//! The existence probe is read-only. A probe that fails (network error,
//! auth rejection, unexpected status) is reported as an error, never as
//! "does not exist" -- guessing absence could send a duplicate create call
//! downstream.

use std::time::Duration;

use reqwest::StatusCode;
use url::Url;

use crate::error::{Error, Result};
use crate::formats::CanonicalFormat;
use crate::payload::ProxyRepositoryRequest;

/// REST path of the existence probe for a named repository.
pub fn repository_path(name: &str) -> String {
    format!(
        "/service/rest/v1/repositories/{}",
        urlencoding::encode(name)
    )
}

/// REST path of the proxy-repository create endpoint for a format.
pub fn proxy_create_path(format: CanonicalFormat) -> String {
    format!(
        "/service/rest/v1/repositories/{}/proxy",
        format.endpoint_segment()
    )
}

/// Operations the orchestrator needs from the repository manager.
///
/// Implemented by `HttpRepositoryApi` for real runs and by mocks in tests.
pub trait RepositoryApi {
    /// Whether a repository with this name already exists.
    ///
    /// Read-only; must not mutate the target system.
    fn repository_exists(&self, name: &str) -> Result<bool>;

    /// Create a proxy repository. `Ok(())` only on a success response.
    fn create_proxy_repository(
        &self,
        format: CanonicalFormat,
        request: &ProxyRepositoryRequest,
    ) -> Result<()>;

    /// The endpoint a create call for this format would target, rendered
    /// for dry-run previews.
    fn create_endpoint(&self, format: CanonicalFormat) -> String {
        proxy_create_path(format)
    }
}

/// Basic-auth credentials for the management API.
#[derive(Debug, Clone)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

/// The real API client: blocking HTTP against the manager's base URL.
pub struct HttpRepositoryApi {
    base_url: Url,
    credentials: Credentials,
    client: reqwest::blocking::Client,
}

impl HttpRepositoryApi {
    /// Build a client for the given base URL.
    ///
    /// `insecure` disables TLS certificate verification, for managers behind
    /// self-signed certificates.
    pub fn new(
        base_url: Url,
        credentials: Credentials,
        insecure: bool,
        timeout: Duration,
    ) -> Result<Self> {
        let client = reqwest::blocking::Client::builder()
            .timeout(timeout)
            .danger_accept_invalid_certs(insecure)
            .build()?;

        Ok(Self {
            base_url,
            credentials,
            client,
        })
    }

    fn absolute(&self, path: &str) -> Result<Url> {
        Ok(self.base_url.join(path)?)
    }
}

impl RepositoryApi for HttpRepositoryApi {
    fn repository_exists(&self, name: &str) -> Result<bool> {
        let url = self
            .absolute(&repository_path(name))
            .map_err(|e| Error::ExistenceCheck {
                name: name.to_string(),
                message: e.to_string(),
            })?;

        let response = self
            .client
            .get(url)
            .basic_auth(&self.credentials.username, Some(&self.credentials.password))
            .send()
            .map_err(|e| Error::ExistenceCheck {
                name: name.to_string(),
                message: e.to_string(),
            })?;

        let status = response.status();
        if status.is_success() {
            Ok(true)
        } else if status == StatusCode::NOT_FOUND {
            Ok(false)
        } else {
            Err(Error::ExistenceCheck {
                name: name.to_string(),
                message: format!("unexpected status {}", status),
            })
        }
    }

    fn create_proxy_repository(
        &self,
        format: CanonicalFormat,
        request: &ProxyRepositoryRequest,
    ) -> Result<()> {
        let url = self
            .absolute(&proxy_create_path(format))
            .map_err(|e| Error::CreateRequest {
                name: request.name.clone(),
                message: e.to_string(),
            })?;

        let response = self
            .client
            .post(url)
            .basic_auth(&self.credentials.username, Some(&self.credentials.password))
            .json(request)
            .send()
            .map_err(|e| Error::CreateRequest {
                name: request.name.clone(),
                message: e.to_string(),
            })?;

        let status = response.status();
        if status.is_success() {
            Ok(())
        } else {
            let body = response.text().unwrap_or_default();
            let body = body.trim();
            let message = if body.is_empty() {
                format!("HTTP {}", status)
            } else {
                format!("HTTP {}: {}", status, body)
            };
            Err(Error::CreateRequest {
                name: request.name.clone(),
                message,
            })
        }
    }

    fn create_endpoint(&self, format: CanonicalFormat) -> String {
        self.absolute(&proxy_create_path(format))
            .map(|url| url.to_string())
            .unwrap_or_else(|_| proxy_create_path(format))
    }
}
