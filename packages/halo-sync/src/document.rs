//! Local document model: YAML front-matter plus Markdown body.
//!
//! Front-matter is typed rather than an untyped key-value bag so that missing
//! or malformed fields fail at the parse boundary. Keys this tool does not
//! know about are kept in `extra` and survive every rewrite untouched.

use crate::error::{Result, SyncError};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// The `halo` front-matter block linking a document to a remote post.
///
/// Presence of `name` is the sole signal that the document has been published
/// before; `site` pins the linkage to one site so a document can never be
/// pushed to a different site by accident.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HaloLink {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub site: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cover: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub publish: Option<bool>,
    #[serde(
        default,
        rename = "publishTime",
        skip_serializing_if = "Option::is_none"
    )]
    pub publish_time: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pinned: Option<bool>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FrontMatter {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub categories: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub excerpt: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub halo: Option<HaloLink>,
    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_yaml::Value>,
}

impl FrontMatter {
    /// The remote post identifier this document is linked to, if any.
    pub fn post_name(&self) -> Option<&str> {
        self.halo.as_ref().and_then(|h| h.name.as_deref())
    }
}

/// A parsed Markdown document.
#[derive(Debug, Clone, Default)]
pub struct Document {
    pub front_matter: FrontMatter,
    pub body: String,
}

impl Document {
    /// Parse Markdown source with an optional leading `---` YAML block.
    /// Source without front-matter (or with an unterminated block) is treated
    /// as all body.
    pub fn parse(source: &str) -> Result<Self> {
        let Some(rest) = strip_open_delimiter(source) else {
            return Ok(Self {
                front_matter: FrontMatter::default(),
                body: source.to_string(),
            });
        };

        let Some((yaml, after)) = split_at_close_delimiter(rest) else {
            return Ok(Self {
                front_matter: FrontMatter::default(),
                body: source.to_string(),
            });
        };

        let front_matter = if yaml.trim().is_empty() {
            FrontMatter::default()
        } else {
            serde_yaml::from_str(yaml).map_err(SyncError::FrontMatter)?
        };

        // one separating blank line is formatting, not body content
        let body = after
            .strip_prefix("\r\n")
            .or_else(|| after.strip_prefix('\n'))
            .unwrap_or(after);

        Ok(Self {
            front_matter,
            body: body.to_string(),
        })
    }

    /// Serialize back to Markdown source with a front-matter block.
    pub fn render(&self) -> Result<String> {
        let yaml = serde_yaml::to_string(&self.front_matter).map_err(SyncError::FrontMatter)?;
        Ok(format!("---\n{yaml}---\n\n{}", self.body))
    }
}

fn strip_open_delimiter(source: &str) -> Option<&str> {
    let rest = source.strip_prefix("---")?;
    rest.strip_prefix('\n').or_else(|| rest.strip_prefix("\r\n"))
}

/// Split `rest` at the first line that is exactly `---`, returning the YAML
/// part and everything after the delimiter line.
fn split_at_close_delimiter(rest: &str) -> Option<(&str, &str)> {
    let mut offset = 0;
    for line in rest.split_inclusive('\n') {
        if line.trim_end_matches(['\r', '\n']) == "---" {
            return Some((&rest[..offset], &rest[offset + line.len()..]));
        }
        offset += line.len();
    }
    None
}
