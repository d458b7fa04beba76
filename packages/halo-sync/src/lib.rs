//! Synchronize locally authored Markdown documents with Halo CMS posts.
//!
//! A document is Markdown body text plus YAML front-matter. The `halo` block
//! in the front-matter caches the remote linkage (site, post identifier,
//! slug, publish state); everything else in the block is regular authoring
//! metadata (`title`, `categories`, `tags`, `excerpt`).
//!
//! Three operations, all on [`service::HaloService`]:
//!
//! - **publish**: create-or-update the remote post, publish/unpublish it,
//!   and rewrite the front-matter from the canonical remote state.
//! - **update**: overwrite the local document with the remote state.
//! - **pull**: fetch a remote post by identifier into a fresh document.
//!
//! Known limitation, inherited from the remote API: updating an existing
//! post takes two calls (spec, then content) with no atomicity between them.
//! A failure in between leaves the remote post with a new spec and old
//! content; the local front-matter is only rewritten after the whole
//! sequence succeeds, so rerunning publish converges.

pub mod document;
pub mod error;
pub mod mapper;
pub mod markdown;
pub mod service;
pub mod taxonomy;
pub mod validate;

pub use document::{Document, FrontMatter, HaloLink};
pub use error::{Result, SyncError};
pub use service::{HaloService, PublishReport};
