//! Typed models for the Halo content API (`content.halo.run/v1alpha1`).
//!
//! `Default` impls produce the blank resource templates used when creating
//! new posts and taxonomy entries, with the field defaults the console API
//! expects (`allowComment=true`, `visible=PUBLIC`, `rawType=markdown`).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

pub const API_VERSION: &str = "content.halo.run/v1alpha1";
pub const POST_KIND: &str = "Post";
pub const CATEGORY_KIND: &str = "Category";
pub const TAG_KIND: &str = "Tag";

/// Resource metadata. `name` is the opaque identifier assigned on creation;
/// `generate_name` asks the server to derive one from the given prefix.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Metadata {
    #[serde(default)]
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub generate_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub annotations: Option<HashMap<String, String>>,
}

/// A post resource: metadata, desired spec, and server-maintained status.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    #[serde(default)]
    pub api_version: String,
    #[serde(default)]
    pub kind: String,
    #[serde(default)]
    pub metadata: Metadata,
    pub spec: PostSpec,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<PostStatus>,
}

impl Default for Post {
    fn default() -> Self {
        Self {
            api_version: API_VERSION.to_string(),
            kind: POST_KIND.to_string(),
            metadata: Metadata::default(),
            spec: PostSpec::default(),
            status: None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostSpec {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub slug: String,
    #[serde(default)]
    pub template: String,
    #[serde(default)]
    pub cover: String,
    #[serde(default)]
    pub deleted: bool,
    #[serde(default)]
    pub publish: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub publish_time: Option<DateTime<Utc>>,
    #[serde(default)]
    pub pinned: bool,
    #[serde(default = "default_true")]
    pub allow_comment: bool,
    #[serde(default)]
    pub visible: Visible,
    #[serde(default)]
    pub priority: i32,
    #[serde(default)]
    pub excerpt: Excerpt,
    #[serde(default)]
    pub categories: Vec<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub html_metas: Vec<HashMap<String, String>>,
}

impl Default for PostSpec {
    fn default() -> Self {
        Self {
            title: String::new(),
            slug: String::new(),
            template: String::new(),
            cover: String::new(),
            deleted: false,
            publish: false,
            publish_time: None,
            pinned: false,
            allow_comment: true,
            visible: Visible::Public,
            priority: 0,
            excerpt: Excerpt::default(),
            categories: Vec::new(),
            tags: Vec::new(),
            html_metas: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostStatus {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub permalink: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub excerpt: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Visible {
    #[default]
    Public,
    Internal,
    Private,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Excerpt {
    #[serde(default = "default_true")]
    pub auto_generate: bool,
    #[serde(default)]
    pub raw: String,
}

impl Default for Excerpt {
    fn default() -> Self {
        Self {
            auto_generate: true,
            raw: String::new(),
        }
    }
}

/// The editable content sub-resource of a post.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Content {
    #[serde(default)]
    pub raw: String,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub raw_type: String,
}

impl Default for Content {
    fn default() -> Self {
        Self {
            raw: String::new(),
            content: String::new(),
            raw_type: "markdown".to_string(),
        }
    }
}

/// Combined post + content body, as accepted by the console create endpoint.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PostRequest {
    pub post: Post,
    pub content: Content,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    #[serde(default)]
    pub api_version: String,
    #[serde(default)]
    pub kind: String,
    #[serde(default)]
    pub metadata: Metadata,
    pub spec: CategorySpec,
}

impl Category {
    /// Template for creating a category; the server generates the identifier
    /// from the `category-` prefix.
    pub fn for_create(display_name: &str, slug: &str, priority: i32) -> Self {
        Self {
            api_version: API_VERSION.to_string(),
            kind: CATEGORY_KIND.to_string(),
            metadata: Metadata {
                name: String::new(),
                generate_name: Some("category-".to_string()),
                annotations: None,
            },
            spec: CategorySpec {
                display_name: display_name.to_string(),
                slug: slug.to_string(),
                description: String::new(),
                cover: String::new(),
                template: String::new(),
                priority,
                children: Vec::new(),
            },
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategorySpec {
    #[serde(default)]
    pub display_name: String,
    #[serde(default)]
    pub slug: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub cover: String,
    #[serde(default)]
    pub template: String,
    #[serde(default)]
    pub priority: i32,
    #[serde(default)]
    pub children: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tag {
    #[serde(default)]
    pub api_version: String,
    #[serde(default)]
    pub kind: String,
    #[serde(default)]
    pub metadata: Metadata,
    pub spec: TagSpec,
}

impl Tag {
    /// Template for creating a tag. New tags default to a white color.
    pub fn for_create(display_name: &str, slug: &str) -> Self {
        Self {
            api_version: API_VERSION.to_string(),
            kind: TAG_KIND.to_string(),
            metadata: Metadata {
                name: String::new(),
                generate_name: Some("tag-".to_string()),
                annotations: None,
            },
            spec: TagSpec {
                display_name: display_name.to_string(),
                slug: slug.to_string(),
                color: "#ffffff".to_string(),
                cover: String::new(),
            },
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TagSpec {
    #[serde(default)]
    pub display_name: String,
    #[serde(default)]
    pub slug: String,
    #[serde(default)]
    pub color: String,
    #[serde(default)]
    pub cover: String,
}

/// List responses carry paging fields we have no use for; only `items` is kept.
#[derive(Debug, Clone, Deserialize)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
pub struct ListResult<T> {
    #[serde(default)]
    pub items: Vec<T>,
}

fn default_true() -> bool {
    true
}
