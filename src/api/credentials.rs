//! Account credentials for the Branch API.
//!
//! An account is identified either by its legacy app id or by a branch key;
//! the two styles are mutually exclusive, so the type is a two-variant enum
//! rather than a struct with optional fields. The secret only exists for
//! key-style accounts and is only demanded by link updates.

use serde::Serialize;

use crate::error::{BranchError, Result};
use crate::validate;

/// Environment variable holding the legacy app id.
const ENV_APP_ID: &str = "BRANCH_APP_ID";
/// Environment variable holding the branch key.
const ENV_KEY: &str = "BRANCH_KEY";
/// Environment variable holding the branch secret.
const ENV_SECRET: &str = "BRANCH_SECRET";

/// Resolved account credentials, fixed for the lifetime of a client.
///
/// Serializes to the wire field names (`app_id`, `branch_key`,
/// `branch_secret`) so it can be merged into request payloads directly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Credentials {
    /// Legacy app-id identification.
    AppId {
        #[serde(rename = "app_id")]
        app_id: String,
    },

    /// Branch-key identification with an optional secret.
    Key {
        #[serde(rename = "branch_key")]
        key: String,

        #[serde(rename = "branch_secret", skip_serializing_if = "Option::is_none")]
        secret: Option<String>,
    },
}

impl Credentials {
    /// App-id credentials.
    pub fn app_id(app_id: impl Into<String>) -> Self {
        Self::AppId {
            app_id: app_id.into(),
        }
    }

    /// Branch-key credentials without a secret.
    pub fn key(key: impl Into<String>) -> Self {
        Self::Key {
            key: key.into(),
            secret: None,
        }
    }

    /// Branch-key credentials with the account secret.
    pub fn key_with_secret(key: impl Into<String>, secret: impl Into<String>) -> Self {
        Self::Key {
            key: key.into(),
            secret: Some(secret.into()),
        }
    }

    /// Resolve credentials from optional settings.
    ///
    /// Exactly one of `app_id` and `key` must be given; a blank value counts
    /// as absent. `secret` is only meaningful alongside `key`.
    ///
    /// # Errors
    /// Returns [`BranchError::InvalidCredentials`] when neither or both
    /// identifying fields are present.
    pub fn resolve(
        app_id: Option<&str>,
        key: Option<&str>,
        secret: Option<&str>,
    ) -> Result<Self> {
        let app_id = app_id.filter(|v| !v.is_empty());
        let key = key.filter(|v| !v.is_empty());

        match (app_id, key) {
            (None, None) => Err(BranchError::InvalidCredentials(
                "Initialize with either app_id or key".to_string(),
            )),
            (Some(_), Some(_)) => Err(BranchError::InvalidCredentials(
                "Do not initialize with both app_id and key".to_string(),
            )),
            (Some(app_id), None) => Ok(Self::app_id(app_id)),
            (None, Some(key)) => Ok(Self::Key {
                key: key.to_string(),
                secret: secret.filter(|v| !v.is_empty()).map(String::from),
            }),
        }
    }

    /// Read credentials from `BRANCH_APP_ID`, `BRANCH_KEY`, and
    /// `BRANCH_SECRET`.
    ///
    /// # Errors
    /// Same shape rules as [`Credentials::resolve`].
    pub fn from_env() -> Result<Self> {
        let app_id = std::env::var(ENV_APP_ID).ok();
        let key = std::env::var(ENV_KEY).ok();
        let secret = std::env::var(ENV_SECRET).ok();

        Self::resolve(app_id.as_deref(), key.as_deref(), secret.as_deref())
    }

    /// The configured secret, if any.
    pub fn secret(&self) -> Option<&str> {
        match self {
            Self::Key { secret, .. } => secret.as_deref(),
            Self::AppId { .. } => None,
        }
    }

    /// Fail unless the account secret is configured.
    pub(crate) fn require_secret(&self) -> Result<()> {
        if validate::is_absent(self.secret()) {
            return Err(BranchError::MissingSecret);
        }
        Ok(())
    }

    /// Query pair identifying the account (`app_id` or `branch_key`).
    pub(crate) fn id_param(&self) -> (&'static str, &str) {
        match self {
            Self::AppId { app_id } => ("app_id", app_id),
            Self::Key { key, .. } => ("branch_key", key),
        }
    }

    /// Identifier scoping the bulk-create endpoint path.
    pub(crate) fn scope(&self) -> &str {
        match self {
            Self::AppId { app_id } => app_id,
            Self::Key { key, .. } => key,
        }
    }

    /// All credential fields as JSON object entries, for merging into a
    /// request body.
    pub(crate) fn body_fields(&self) -> Result<serde_json::Map<String, serde_json::Value>> {
        match serde_json::to_value(self)? {
            serde_json::Value::Object(fields) => Ok(fields),
            // Serialize on this enum always yields an object
            _ => Ok(serde_json::Map::new()),
        }
    }
}
