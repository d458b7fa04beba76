//! Pure Halo CMS REST API client.
//!
//! A minimal client for the Halo content API. Covers the post resource, its
//! content sub-resource, the console publish/unpublish actions, and the
//! category/tag taxonomy collections. No sync logic lives here.
//!
//! # Example
//!
//! ```rust,ignore
//! use halo_client::HaloClient;
//!
//! let client = HaloClient::new("https://blog.example.com", "your-pat-token");
//!
//! if let Some(post) = client.get_post("7d8a2b90-...").await? {
//!     println!("{}", post.post.spec.title);
//! }
//! ```

pub mod error;
pub mod types;

pub use error::{HaloError, Result};
pub use types::{
    Category, Content, Excerpt, ListResult, Metadata, Post, PostRequest, PostSpec, PostStatus,
    Tag, Visible,
};

const CONTENT_API: &str = "apis/content.halo.run/v1alpha1";
const CONSOLE_API: &str = "apis/api.console.halo.run/v1alpha1";

pub struct HaloClient {
    client: reqwest::Client,
    base_url: String,
    token: String,
}

impl HaloClient {
    /// Create a client for one site. Trailing slashes on the base URL are
    /// stripped so that derived URLs are stable.
    pub fn new(base_url: impl Into<String>, token: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            client: reqwest::Client::new(),
            base_url,
            token: token.into(),
        }
    }

    /// The normalized site base URL this client talks to.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Fetch a post and its head content by identifier.
    ///
    /// Returns `Ok(None)` only on a confirmed 404; every other failure is an
    /// error. Callers rely on this distinction to avoid recreating posts on
    /// transient failures.
    pub async fn get_post(&self, name: &str) -> Result<Option<PostRequest>> {
        let url = format!("{}/{}/posts/{}", self.base_url, CONTENT_API, name);
        let resp = self.client.get(&url).bearer_auth(&self.token).send().await?;

        if resp.status() == reqwest::StatusCode::NOT_FOUND {
            tracing::debug!(name, "Post not found");
            return Ok(None);
        }
        if !resp.status().is_success() {
            return Err(Self::api_error(resp).await);
        }
        let post: Post = resp.json().await?;

        let Some(content) = self.get_content(name).await? else {
            return Ok(None);
        };

        Ok(Some(PostRequest { post, content }))
    }

    /// Fetch the head (latest draft) content of a post. `Ok(None)` on 404.
    pub async fn get_content(&self, name: &str) -> Result<Option<Content>> {
        let url = format!("{}/{}/posts/{}/head-content", self.base_url, CONSOLE_API, name);
        let resp = self.client.get(&url).bearer_auth(&self.token).send().await?;

        if resp.status() == reqwest::StatusCode::NOT_FOUND {
            return Ok(None);
        }
        if !resp.status().is_success() {
            return Err(Self::api_error(resp).await);
        }
        let content: Content = resp.json().await?;
        Ok(Some(content))
    }

    /// Create a post together with its content in a single call.
    /// Returns the created post with its server-assigned fields.
    pub async fn create_post(&self, params: &PostRequest) -> Result<Post> {
        let url = format!("{}/{}/posts", self.base_url, CONSOLE_API);
        let resp = self
            .client
            .post(&url)
            .bearer_auth(&self.token)
            .json(params)
            .send()
            .await?;

        if !resp.status().is_success() {
            return Err(Self::api_error(resp).await);
        }
        let post: Post = resp.json().await?;
        tracing::info!(name = %post.metadata.name, "Created post");
        Ok(post)
    }

    /// Update a post's spec document. Returns the updated post.
    pub async fn update_post(&self, name: &str, post: &Post) -> Result<Post> {
        let url = format!("{}/{}/posts/{}", self.base_url, CONTENT_API, name);
        let resp = self
            .client
            .put(&url)
            .bearer_auth(&self.token)
            .json(post)
            .send()
            .await?;

        if !resp.status().is_success() {
            return Err(Self::api_error(resp).await);
        }
        let post: Post = resp.json().await?;
        Ok(post)
    }

    /// Update a post's content sub-resource.
    pub async fn update_content(&self, name: &str, content: &Content) -> Result<()> {
        let url = format!("{}/{}/posts/{}/content", self.base_url, CONSOLE_API, name);
        let resp = self
            .client
            .put(&url)
            .bearer_auth(&self.token)
            .json(content)
            .send()
            .await?;

        if !resp.status().is_success() {
            return Err(Self::api_error(resp).await);
        }
        Ok(())
    }

    /// Publish the current head content of a post.
    pub async fn publish_post(&self, name: &str) -> Result<()> {
        self.console_action(name, "publish").await
    }

    /// Revert a post to unpublished.
    pub async fn unpublish_post(&self, name: &str) -> Result<()> {
        self.console_action(name, "unpublish").await
    }

    async fn console_action(&self, name: &str, action: &str) -> Result<()> {
        let url = format!("{}/{}/posts/{}/{}", self.base_url, CONSOLE_API, name, action);
        let resp = self.client.put(&url).bearer_auth(&self.token).send().await?;

        if !resp.status().is_success() {
            return Err(Self::api_error(resp).await);
        }
        tracing::debug!(name, action, "Post state changed");
        Ok(())
    }

    /// Fetch the full category collection.
    pub async fn list_categories(&self) -> Result<Vec<Category>> {
        let url = format!("{}/{}/categories", self.base_url, CONTENT_API);
        let resp = self.client.get(&url).bearer_auth(&self.token).send().await?;

        if !resp.status().is_success() {
            return Err(Self::api_error(resp).await);
        }
        let list: ListResult<Category> = resp.json().await?;
        Ok(list.items)
    }

    /// Create a category. Returns it with the server-assigned identifier.
    pub async fn create_category(&self, category: &Category) -> Result<Category> {
        let url = format!("{}/{}/categories", self.base_url, CONTENT_API);
        let resp = self
            .client
            .post(&url)
            .bearer_auth(&self.token)
            .json(category)
            .send()
            .await?;

        if !resp.status().is_success() {
            return Err(Self::api_error(resp).await);
        }
        let category: Category = resp.json().await?;
        tracing::info!(name = %category.metadata.name, display_name = %category.spec.display_name, "Created category");
        Ok(category)
    }

    /// Fetch the full tag collection.
    pub async fn list_tags(&self) -> Result<Vec<Tag>> {
        let url = format!("{}/{}/tags", self.base_url, CONTENT_API);
        let resp = self.client.get(&url).bearer_auth(&self.token).send().await?;

        if !resp.status().is_success() {
            return Err(Self::api_error(resp).await);
        }
        let list: ListResult<Tag> = resp.json().await?;
        Ok(list.items)
    }

    /// Create a tag. Returns it with the server-assigned identifier.
    pub async fn create_tag(&self, tag: &Tag) -> Result<Tag> {
        let url = format!("{}/{}/tags", self.base_url, CONTENT_API);
        let resp = self
            .client
            .post(&url)
            .bearer_auth(&self.token)
            .json(tag)
            .send()
            .await?;

        if !resp.status().is_success() {
            return Err(Self::api_error(resp).await);
        }
        let tag: Tag = resp.json().await?;
        tracing::info!(name = %tag.metadata.name, display_name = %tag.spec.display_name, "Created tag");
        Ok(tag)
    }

    async fn api_error(resp: reqwest::Response) -> HaloError {
        let status = resp.status().as_u16();
        let message = resp.text().await.unwrap_or_default();
        HaloError::Api { status, message }
    }
}
