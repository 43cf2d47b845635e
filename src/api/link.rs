//! Deep link operations: create, bulk create, read, update, delete.

use reqwest::Method;
use serde::Deserialize;
use serde_json::Value;

use crate::api::{BranchClient, Credentials};
use crate::error::{BranchError, Result};
use crate::validate;

/// Open-ended link metadata (channel, campaign, tags, custom data, ...),
/// passed through to the API without interpretation.
pub type DeepLinkData = serde_json::Map<String, Value>;

/// Response to link creation.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LinkResult {
    /// The generated deep link URL.
    pub url: String,
}

/// Response to a link update.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct UpdateResult {
    pub url: String,
    pub deleted: bool,
}

/// Response to a link deletion.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct DeleteResult {
    pub url: String,
    pub deleted: bool,
}

impl BranchClient {
    /// Create a single deep link.
    ///
    /// Posts the link payload together with the account's identifying field
    /// and returns the generated URL.
    ///
    /// # Errors
    /// Transport and API failures are propagated.
    pub async fn create_link(&self, link_data: &DeepLinkData) -> Result<LinkResult> {
        let (name, value) = self.credentials().id_param();
        let mut body = link_data.clone();
        body.insert(name.to_string(), value.into());

        self.send(self.request(Method::POST, "/url").json(&body)).await
    }

    /// Create several deep links in one call.
    ///
    /// The payload array is posted as-is to the key-scoped bulk endpoint;
    /// results come back in the order the payloads were given.
    ///
    /// # Errors
    /// Transport and API failures are propagated.
    pub async fn bulk_create_links(&self, links_data: &[DeepLinkData]) -> Result<Vec<LinkResult>> {
        let path = format!("/url/bulk/{}", self.credentials().scope());

        self.send(self.request(Method::POST, &path).json(&links_data))
            .await
    }

    /// Look up the metadata stored for an existing deep link.
    ///
    /// Returns the raw response mapping without schema validation.
    ///
    /// # Errors
    /// Returns [`BranchError::MissingParameter`] when `deep_link` is blank.
    pub async fn read_link(&self, deep_link: &str) -> Result<Value> {
        validate::require("deep_link", deep_link)?;

        let query = [("url", deep_link), self.credentials().id_param()];
        self.send(self.request(Method::GET, "/url").query(&query))
            .await
    }

    /// Update the metadata of an existing deep link.
    ///
    /// Requires key-style credentials with the account secret configured;
    /// the merged payload carries the full credential set.
    ///
    /// # Errors
    /// Returns [`BranchError::MissingParameter`] when `data` is empty or
    /// `deep_link` is blank, and [`BranchError::MissingSecret`] when no
    /// secret is configured.
    pub async fn update_link(&self, deep_link: &str, data: &DeepLinkData) -> Result<UpdateResult> {
        if data.is_empty() {
            return Err(BranchError::MissingParameter { name: "data" });
        }
        validate::require("deep_link", deep_link)?;
        self.credentials().require_secret()?;

        let mut body = data.clone();
        body.extend(self.credentials().body_fields()?);

        self.send(
            self.request(Method::PUT, "/url")
                .query(&[("url", deep_link)])
                .json(&body),
        )
        .await
    }

    /// Delete an existing deep link.
    ///
    /// Deletion is only available to app-id accounts and needs a user
    /// access token, sent as the `Access-Token` header.
    ///
    /// # Errors
    /// Returns [`BranchError::MissingParameter`] when `deep_link` or
    /// `access_token` is blank, or when the client holds key-style
    /// credentials instead of an app id.
    pub async fn delete_link(&self, deep_link: &str, access_token: &str) -> Result<DeleteResult> {
        validate::require("deep_link", deep_link)?;
        validate::require("access_token", access_token)?;

        let Credentials::AppId { app_id } = self.credentials() else {
            return Err(BranchError::MissingParameter { name: "app_id" });
        };

        let query = [("url", deep_link), ("app_id", app_id.as_str())];
        self.send(
            self.request(Method::DELETE, "/url")
                .header("Access-Token", access_token)
                .query(&query),
        )
        .await
    }
}
