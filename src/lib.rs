//! Client library for the Branch deep-linking API.
//!
//! Each client method maps one-to-one onto a remote operation: validate the
//! arguments, issue a single HTTP request against
//! `https://api2.branch.io/v1`, and return the parsed response.
//!
//! # Quick Start
//!
//! ```no_run
//! use branchio::{BranchClient, Credentials, DeepLinkData};
//!
//! #[tokio::main]
//! async fn main() -> branchio::Result<()> {
//!     let client = BranchClient::new(Credentials::key_with_secret(
//!         "key_live_abc",
//!         "secret_xyz",
//!     ));
//!
//!     let mut link = DeepLinkData::new();
//!     link.insert("campaign".to_string(), "spring".into());
//!
//!     let created = client.create_link(&link).await?;
//!     println!("{}", created.url);
//!     Ok(())
//! }
//! ```
//!
//! Accounts are identified either by a branch key (optionally with the
//! account secret, needed for link updates) or by a legacy app id (needed
//! for link deletion). See [`Credentials`].

// Core modules
pub mod api;
pub mod error;
pub mod validate;

// Re-export commonly used types for convenience
pub use api::{BranchClient, Credentials, DeepLinkData, DeleteResult, LinkResult, UpdateResult};
pub use error::{BranchError, Result};
