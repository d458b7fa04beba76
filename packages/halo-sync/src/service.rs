//! The sync orchestrator: publish, update, and pull a document against one
//! configured site.
//!
//! All remote calls for an operation complete before the document is touched,
//! so a failed operation never leaves half-rewritten front-matter. There is
//! no compensation for remote calls that already went through; see the crate
//! docs for the known non-atomic spec/content update window.

use crate::document::{Document, FrontMatter};
use crate::error::{Result, SyncError};
use crate::validate::slugify;
use crate::{mapper, markdown, taxonomy};
use chrono::{Timelike, Utc};
use halo_client::{HaloClient, Post, PostRequest};
use uuid::Uuid;

pub struct HaloService {
    client: HaloClient,
}

/// Outcome of a successful publish, for the presentation layer to surface.
#[derive(Debug, Clone)]
pub struct PublishReport {
    pub name: String,
    pub title: String,
    pub url: String,
    pub published: bool,
}

impl HaloService {
    pub fn new(client: HaloClient) -> Self {
        Self { client }
    }

    pub fn client(&self) -> &HaloClient {
        &self.client
    }

    /// Create-or-update the remote post from the document, publish or
    /// unpublish it per `halo.publish`, then rewrite the front-matter from
    /// the canonical remote state.
    ///
    /// `fallback_title` (typically the file's base name) is used on first
    /// publish when the front-matter has no title.
    pub async fn publish(&self, doc: &mut Document, fallback_title: &str) -> Result<PublishReport> {
        let front_matter = doc.front_matter.clone();
        self.check_site(&front_matter)?;

        // Start from the linked post when there is one. A confirmed 404
        // demotes to create; any other fetch failure aborts so a transient
        // error cannot mint a duplicate post.
        let mut params = match front_matter.post_name() {
            Some(name) => self.client.get_post(name).await?.unwrap_or_default(),
            None => PostRequest::default(),
        };

        // Validates slug and publishTime; nothing has been mutated remotely
        // if this fails.
        let rendered = markdown::render(&doc.body);
        mapper::apply_local(&mut params, &front_matter, &doc.body, rendered)?;

        if let Some(names) = &front_matter.categories {
            params.post.spec.categories =
                taxonomy::resolve_category_names(&self.client, names).await?;
        }
        if let Some(names) = &front_matter.tags {
            params.post.spec.tags = taxonomy::resolve_tag_names(&self.client, names).await?;
        }

        if params.post.metadata.name.is_empty() {
            self.fill_first_publish_defaults(&mut params, fallback_title);
            tracing::info!(name = %params.post.metadata.name, "Creating post");
            params.post = self.client.create_post(&params).await?;
        } else {
            let name = params.post.metadata.name.clone();
            tracing::info!(name = %name, "Updating post");
            params.post = self.client.update_post(&name, &params.post).await?;
            self.client.update_content(&name, &params.content).await?;
        }

        let name = params.post.metadata.name.clone();
        let published = front_matter
            .halo
            .as_ref()
            .and_then(|h| h.publish)
            .unwrap_or(false);
        if published {
            self.client.publish_post(&name).await?;
        } else {
            self.client.unpublish_post(&name).await?;
        }

        // Prefer the canonical remote state for the write-back; if the
        // refetch fails we fall back to the locally held copy.
        match self.client.get_post(&name).await {
            Ok(Some(canonical)) => params = canonical,
            Ok(None) => {}
            Err(err) => {
                tracing::warn!(error = %err, "Refetch after publish failed, keeping local copy");
            }
        }

        self.write_back(&mut doc.front_matter, &params.post).await?;

        Ok(PublishReport {
            url: mapper::post_url(self.client.base_url(), &params.post.spec.slug),
            title: params.post.spec.title,
            name,
            published,
        })
    }

    /// Overwrite the local document wholesale with the remote canonical
    /// state, addressed via the document's own `halo.name` linkage.
    pub async fn update(&self, doc: &mut Document) -> Result<()> {
        let Some(name) = doc.front_matter.post_name().map(str::to_string) else {
            return Err(SyncError::NotPublished);
        };
        let Some(fetched) = self.client.get_post(&name).await? else {
            return Err(SyncError::PostNotFound(name));
        };

        doc.body = fetched.content.raw;
        self.write_back(&mut doc.front_matter, &fetched.post).await
    }

    /// Fetch a remote post by identifier into a fresh document.
    pub async fn pull(&self, name: &str) -> Result<Document> {
        let Some(fetched) = self.client.get_post(name).await? else {
            return Err(SyncError::PostNotFound(name.to_string()));
        };

        let mut doc = Document {
            front_matter: FrontMatter::default(),
            body: fetched.content.raw,
        };
        self.write_back(&mut doc.front_matter, &fetched.post).await?;
        Ok(doc)
    }

    fn check_site(&self, front_matter: &FrontMatter) -> Result<()> {
        if let Some(site) = front_matter.halo.as_ref().and_then(|h| h.site.as_deref()) {
            let configured = self.client.base_url();
            if site.trim_end_matches('/') != configured {
                return Err(SyncError::SiteMismatch {
                    linked: site.to_string(),
                    configured: configured.to_string(),
                });
            }
        }
        Ok(())
    }

    /// First publish only: identifier, title, slug and publish time that the
    /// front-matter did not supply are derived here.
    fn fill_first_publish_defaults(&self, params: &mut PostRequest, fallback_title: &str) {
        params.post.metadata.name = Uuid::new_v4().to_string();

        if params.post.spec.title.is_empty() {
            params.post.spec.title = fallback_title.to_string();
        }
        if params.post.spec.slug.is_empty() {
            let slug = slugify(&params.post.spec.title);
            // a title with no ASCII alphanumerics slugifies to nothing
            params.post.spec.slug = if slug.is_empty() {
                params.post.metadata.name.clone()
            } else {
                slug
            };
        }
        if params.post.spec.publish_time.is_none() {
            let now = Utc::now();
            params.post.spec.publish_time = Some(now.with_nanosecond(0).unwrap_or(now));
        }
    }

    async fn write_back(&self, front_matter: &mut FrontMatter, post: &Post) -> Result<()> {
        let categories =
            taxonomy::category_display_names(&self.client, &post.spec.categories).await?;
        let tags = taxonomy::tag_display_names(&self.client, &post.spec.tags).await?;
        mapper::apply_remote(front_matter, post, self.client.base_url(), categories, tags);
        Ok(())
    }
}
