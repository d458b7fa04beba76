//! Error types for sync operations.
//!
//! Every user-facing failure is a distinct variant so the presentation layer
//! can decide how to surface it; nothing in this crate prints or logs notices
//! on its own.

use thiserror::Error;

/// Result type for sync operations.
pub type Result<T> = std::result::Result<T, SyncError>;

#[derive(Debug, Error)]
pub enum SyncError {
    /// The document's `halo.site` points at a different site than the one
    /// configured. Publishing would cross-link two sites, so we refuse.
    #[error("document is linked to {linked}, not the configured site {configured}")]
    SiteMismatch { linked: String, configured: String },

    /// Front-matter `halo.slug` does not match the allowed slug format.
    #[error("invalid slug {0:?}: expected lowercase alphanumerics separated by single hyphens")]
    InvalidSlug(String),

    /// Front-matter `halo.publishTime` is not a canonical seconds-precision
    /// ISO-8601 UTC timestamp.
    #[error("invalid publish time {0:?}: expected e.g. 2024-01-02T03:04:05Z")]
    InvalidPublishTime(String),

    /// The operation needs an existing remote post but the document has no
    /// `halo.name` linkage.
    #[error("document has not been published to this site yet")]
    NotPublished,

    /// The linked remote post does not exist.
    #[error("post {0:?} was not found on the remote site")]
    PostNotFound(String),

    /// Front-matter could not be parsed or serialized.
    #[error("front matter error: {0}")]
    FrontMatter(#[from] serde_yaml::Error),

    /// A remote API call failed.
    #[error(transparent)]
    Api(#[from] halo_client::HaloError),
}
