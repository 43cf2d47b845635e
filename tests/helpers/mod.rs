//! Shared setup for API tests against a local mock server.

use branchio::{BranchClient, Credentials, DeepLinkData};
use wiremock::MockServer;

/// Client pointed at the mock server with the given credentials.
pub fn client_with(server: &MockServer, credentials: Credentials) -> BranchClient {
    BranchClient::new(credentials).with_base_url(server.uri())
}

/// App-id account (`app_123`).
pub fn app_id_client(server: &MockServer) -> BranchClient {
    client_with(server, Credentials::app_id("app_123"))
}

/// Key-only account (`key_test_k1`).
pub fn key_client(server: &MockServer) -> BranchClient {
    client_with(server, Credentials::key("key_test_k1"))
}

/// Key account with the secret configured.
pub fn key_secret_client(server: &MockServer) -> BranchClient {
    client_with(server, Credentials::key_with_secret("key_test_k1", "secret_s1"))
}

/// Build link metadata from string pairs.
pub fn link_data(entries: &[(&str, &str)]) -> DeepLinkData {
    entries
        .iter()
        .map(|(key, value)| ((*key).to_string(), serde_json::Value::from(*value)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_link_data_builder() {
        let data = link_data(&[("campaign", "spring"), ("channel", "email")]);
        assert_eq!(data.len(), 2);
        assert_eq!(data["campaign"], "spring");
    }
}
