//! Error types for the Branch API client.

use thiserror::Error;

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, BranchError>;

/// Errors surfaced by credential resolution and API operations.
///
/// Everything except [`Transport`](BranchError::Transport) and
/// [`Api`](BranchError::Api) is raised before a request is sent.
#[derive(Debug, Error)]
pub enum BranchError {
    /// Credential shape violation at construction.
    #[error("{0}")]
    InvalidCredentials(String),

    /// A required argument was absent or empty.
    #[error("Parameter {name} is required")]
    MissingParameter { name: &'static str },

    /// The operation needs the account secret, which is not configured.
    #[error("Branch secret is required for this operation")]
    MissingSecret,

    /// Network-level or decoding failure reported by the HTTP transport.
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The API answered with a non-success status.
    #[error("Branch API returned {status}: {body}")]
    Api {
        status: reqwest::StatusCode,
        body: String,
    },

    /// A request payload could not be serialized.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
