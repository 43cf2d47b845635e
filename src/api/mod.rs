//! Branch API client implementation.
//!
//! One method per remote operation: each call validates its arguments and
//! the credential shape, issues a single HTTP request, and returns the
//! parsed response body. Nothing is retried, cached, or reordered.

pub mod client;
pub mod credentials;
pub mod link;
pub mod referral;

// Re-export commonly used types
pub use client::BranchClient;
pub use credentials::Credentials;
pub use link::{DeepLinkData, DeleteResult, LinkResult, UpdateResult};
