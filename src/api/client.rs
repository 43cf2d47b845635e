//! HTTP client for the Branch API.

use reqwest::Method;
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::api::Credentials;
use crate::error::{BranchError, Result};

/// Production API endpoint.
const BASE_URL: &str = "https://api2.branch.io/v1";

/// Client for the Branch deep-linking API.
///
/// Holds the resolved account [`Credentials`] for its lifetime and exposes
/// one method per remote operation. Cloning is cheap (the transport is
/// reference-counted) and all operations take `&self`, so a single instance
/// can serve concurrent tasks; calls are independent and unordered.
#[derive(Debug, Clone)]
pub struct BranchClient {
    http: reqwest::Client,
    base_url: String,
    credentials: Credentials,
}

impl BranchClient {
    /// Create a client with a default HTTP transport.
    pub fn new(credentials: Credentials) -> Self {
        Self::with_client(reqwest::Client::new(), credentials)
    }

    /// Create a client backed by a caller-supplied `reqwest` client, for
    /// sharing a connection pool or tuning transport settings.
    pub fn with_client(http: reqwest::Client, credentials: Credentials) -> Self {
        Self {
            http,
            base_url: BASE_URL.to_string(),
            credentials,
        }
    }

    /// Create a client from the `BRANCH_APP_ID` / `BRANCH_KEY` /
    /// `BRANCH_SECRET` environment variables.
    ///
    /// # Errors
    /// Returns [`BranchError::InvalidCredentials`] when the variables name
    /// neither or both of the identifying fields.
    pub fn from_env() -> Result<Self> {
        Ok(Self::new(Credentials::from_env()?))
    }

    /// Point the client at a different API endpoint, e.g. a local test
    /// server.
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// The credentials this client was constructed with.
    pub fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Start a request against a base-URL-relative path.
    pub(crate) fn request(&self, method: Method, path: &str) -> reqwest::RequestBuilder {
        debug!(%method, path, "building Branch API request");
        self.http.request(method, self.url(path))
    }

    /// Issue a prepared request and decode the JSON response body.
    ///
    /// Non-success statuses are mapped to [`BranchError::Api`] with the
    /// response text attached.
    pub(crate) async fn send<T: DeserializeOwned>(
        &self,
        request: reqwest::RequestBuilder,
    ) -> Result<T> {
        let response = request.send().await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            debug!(%status, "Branch API request failed");
            return Err(BranchError::Api { status, body });
        }

        Ok(response.json().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_base_url() {
        let client = BranchClient::new(Credentials::app_id("app_123"));
        assert_eq!(client.url("/url"), "https://api2.branch.io/v1/url");
    }

    #[test]
    fn test_base_url_override() {
        let client = BranchClient::new(Credentials::key("key_test_k1"))
            .with_base_url("http://127.0.0.1:9090");
        assert_eq!(client.url("/credits"), "http://127.0.0.1:9090/credits");
    }

    #[test]
    fn test_credentials_accessor() {
        let client = BranchClient::new(Credentials::key_with_secret("k1", "s1"));
        assert_eq!(client.credentials().secret(), Some("s1"));
    }
}
