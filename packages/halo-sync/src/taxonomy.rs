//! Taxonomy resolution: display names <-> remote identifiers for categories
//! and tags. Missing entries are created on the fly; creations for one batch
//! run concurrently and fail as a unit.

use crate::error::Result;
use crate::validate::slugify;
use futures::future::try_join_all;
use halo_client::{Category, HaloClient, Tag};

/// Resolve category display names to identifiers, creating categories that do
/// not exist yet. Result order is existing matches first, then new creations.
pub async fn resolve_category_names(
    client: &HaloClient,
    display_names: &[String],
) -> Result<Vec<String>> {
    let all = client.list_categories().await?;

    let mut resolved: Vec<String> = Vec::with_capacity(display_names.len());
    let mut missing: Vec<&str> = Vec::new();
    for name in display_names {
        match all.iter().find(|c| c.spec.display_name == *name) {
            Some(found) => resolved.push(found.metadata.name.clone()),
            // a name requested twice still gets created once
            None if !missing.contains(&name.as_str()) => missing.push(name.as_str()),
            None => {}
        }
    }

    if missing.is_empty() {
        return Ok(resolved);
    }

    tracing::info!(count = missing.len(), "Creating missing categories");
    let base_priority = all.iter().map(|c| c.spec.priority).max().unwrap_or(0);
    let created = try_join_all(missing.iter().enumerate().map(|(index, name)| {
        let slug = slugify(name);
        async move {
            let category = Category::for_create(name, &slug, base_priority + index as i32 + 1);
            client.create_category(&category).await
        }
    }))
    .await?;

    resolved.extend(created.into_iter().map(|c| c.metadata.name));
    Ok(resolved)
}

/// Map category identifiers back to display names. Identifiers with no match
/// are silently dropped.
pub async fn category_display_names(client: &HaloClient, names: &[String]) -> Result<Vec<String>> {
    if names.is_empty() {
        return Ok(Vec::new());
    }
    let all = client.list_categories().await?;
    Ok(names
        .iter()
        .filter_map(|name| {
            all.iter()
                .find(|c| c.metadata.name == *name)
                .map(|c| c.spec.display_name.clone())
        })
        .collect())
}

/// Resolve tag display names to identifiers, creating tags that do not exist
/// yet. Same contract as [`resolve_category_names`].
pub async fn resolve_tag_names(client: &HaloClient, display_names: &[String]) -> Result<Vec<String>> {
    let all = client.list_tags().await?;

    let mut resolved: Vec<String> = Vec::with_capacity(display_names.len());
    let mut missing: Vec<&str> = Vec::new();
    for name in display_names {
        match all.iter().find(|t| t.spec.display_name == *name) {
            Some(found) => resolved.push(found.metadata.name.clone()),
            None if !missing.contains(&name.as_str()) => missing.push(name.as_str()),
            None => {}
        }
    }

    if missing.is_empty() {
        return Ok(resolved);
    }

    tracing::info!(count = missing.len(), "Creating missing tags");
    let created = try_join_all(missing.iter().map(|name| {
        let slug = slugify(name);
        async move {
            let tag = Tag::for_create(name, &slug);
            client.create_tag(&tag).await
        }
    }))
    .await?;

    resolved.extend(created.into_iter().map(|t| t.metadata.name));
    Ok(resolved)
}

/// Map tag identifiers back to display names, dropping unknown identifiers.
pub async fn tag_display_names(client: &HaloClient, names: &[String]) -> Result<Vec<String>> {
    if names.is_empty() {
        return Ok(Vec::new());
    }
    let all = client.list_tags().await?;
    Ok(names
        .iter()
        .filter_map(|name| {
            all.iter()
                .find(|t| t.metadata.name == *name)
                .map(|t| t.spec.display_name.clone())
        })
        .collect())
}
