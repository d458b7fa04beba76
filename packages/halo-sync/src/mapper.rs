//! Pure bidirectional mapping between front-matter and the remote post
//! resource. No I/O here; taxonomy identifiers are resolved by the caller
//! before the overlay is applied.

use crate::document::{FrontMatter, HaloLink};
use crate::error::{Result, SyncError};
use crate::validate::{canonical_publish_time, is_valid_slug, parse_publish_time};
use halo_client::{Excerpt, Post, PostRequest};

/// Overlay local document state onto a post request (blank template or a
/// previously fetched post). Validates `halo.slug` and `halo.publishTime`
/// before anything is sent to the remote side.
///
/// Categories and tags are not touched here; the orchestrator assigns the
/// resolved identifier lists itself.
pub fn apply_local(
    params: &mut PostRequest,
    front_matter: &FrontMatter,
    raw: &str,
    rendered: String,
) -> Result<()> {
    params.content.raw = raw.to_string();
    params.content.content = rendered;
    params.content.raw_type = "markdown".to_string();

    if let Some(title) = &front_matter.title {
        params.post.spec.title = title.clone();
    }

    let link = front_matter.halo.as_ref();

    if let Some(cover) = link.and_then(|h| h.cover.as_deref()) {
        params.post.spec.cover = cover.to_string();
    }

    params.post.spec.excerpt = match front_matter.excerpt.as_deref() {
        Some(excerpt) if !excerpt.is_empty() => Excerpt {
            auto_generate: false,
            raw: excerpt.to_string(),
        },
        _ => Excerpt::default(),
    };

    if let Some(slug) = link.and_then(|h| h.slug.as_deref()) {
        if !is_valid_slug(slug) {
            return Err(SyncError::InvalidSlug(slug.to_string()));
        }
        params.post.spec.slug = slug.to_string();
    }

    if let Some(publish_time) = link.and_then(|h| h.publish_time.as_deref()) {
        let parsed = parse_publish_time(publish_time)
            .ok_or_else(|| SyncError::InvalidPublishTime(publish_time.to_string()))?;
        params.post.spec.publish_time = Some(parsed);
    }

    if let Some(pinned) = link.and_then(|h| h.pinned) {
        params.post.spec.pinned = pinned;
    }

    Ok(())
}

/// Merge the canonical remote state back into the front-matter. Keys other
/// than the ones written here (including everything in `extra`) are left
/// untouched.
pub fn apply_remote(
    front_matter: &mut FrontMatter,
    post: &Post,
    site_url: &str,
    categories: Vec<String>,
    tags: Vec<String>,
) {
    let spec = &post.spec;

    front_matter.title = Some(spec.title.clone());
    front_matter.url = Some(post_url(site_url, &spec.slug));
    front_matter.categories = Some(categories);
    front_matter.tags = Some(tags);
    front_matter.excerpt = Some(spec.excerpt.raw.clone());
    front_matter.halo = Some(HaloLink {
        site: Some(site_url.trim_end_matches('/').to_string()),
        name: Some(post.metadata.name.clone()),
        slug: Some(spec.slug.clone()),
        cover: Some(spec.cover.clone()),
        publish: Some(spec.publish),
        publish_time: spec.publish_time.as_ref().map(canonical_publish_time),
        pinned: Some(spec.pinned),
    });
}

/// Permalink-style URL of a post on its site.
pub fn post_url(site_url: &str, slug: &str) -> String {
    format!("{}/archives/{}", site_url.trim_end_matches('/'), slug)
}
