// src/domain/bookmark.rs
use derive_builder::Builder;
use serde::{Deserialize, Serialize};
use std::fmt;
use url::Url;

use crate::domain::error::{DomainError, DomainResult};
use crate::domain::tag::Tag;

/// Represents a bookmark domain entity.
///
/// A bookmark without an `id` has not been saved by the native host yet and
/// is only valid as a creation payload. The host assigns the identifier.
#[derive(Builder, Clone, Debug, PartialEq, Serialize, Deserialize)]
#[builder(setter(into))]
pub struct Bookmark {
    #[builder(default)]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i32>,

    pub url: String,

    #[builder(default)]
    #[serde(default)]
    pub title: String,

    #[builder(default)]
    #[serde(default)]
    pub description: String,

    #[builder(default)]
    #[serde(default)]
    pub tags: Vec<Tag>,

    #[builder(default = "0")]
    #[serde(default)]
    pub flags: i32,
}

impl Bookmark {
    pub fn new<S: AsRef<str>>(
        url: S,
        title: S,
        description: S,
        tags: Vec<Tag>,
    ) -> DomainResult<Self> {
        let url_str = url.as_ref();
        validate_url(url_str)?;

        Ok(Self {
            id: None,
            url: url_str.to_string(),
            title: title.as_ref().to_string(),
            description: description.as_ref().to_string(),
            tags,
            flags: 0,
        })
    }

    /// Whether the native host has assigned an identifier to this bookmark.
    pub fn is_saved(&self) -> bool {
        self.id.is_some()
    }

    /// Comma-joined tag string as stored by the host.
    pub fn tags_string(&self) -> String {
        use itertools::Itertools;
        self.tags.iter().map(Tag::value).join(",")
    }
}

impl fmt::Display for Bookmark {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.id {
            Some(id) => write!(f, "[{}] {} ({})", id, self.title, self.url),
            None => write!(f, "[unsaved] {} ({})", self.title, self.url),
        }
    }
}

impl From<BookmarkBuilderError> for DomainError {
    fn from(e: BookmarkBuilderError) -> Self {
        DomainError::Other(e.to_string())
    }
}

// Absolute URLs must parse; anything without a scheme is accepted verbatim
// because the host also stores bare paths and search shortcuts.
fn validate_url(url: &str) -> DomainResult<()> {
    if url.trim().is_empty() {
        return Err(DomainError::InvalidUrl("URL cannot be empty".to_string()));
    }

    if url.contains("://") {
        Url::parse(url).map_err(|e| DomainError::InvalidUrl(format!("{}: {}", url, e)))?;
    }

    Ok(())
}
