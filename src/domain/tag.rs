// src/domain/tag.rs
use std::fmt;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::domain::error::{DomainError, DomainResult};

/// Represents a single tag as a value object
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Tag {
    value: String,
}

impl Tag {
    /// Creates a new Tag with validation
    pub fn new<S: AsRef<str>>(value: S) -> DomainResult<Self> {
        let value = value.as_ref().trim().to_lowercase();

        if value.is_empty() {
            return Err(DomainError::InvalidTag("Tag cannot be empty".to_string()));
        }

        if value.contains(',') || value.contains(' ') {
            return Err(DomainError::InvalidTag(
                "Tag cannot contain commas or spaces".to_string(),
            ));
        }

        Ok(Self { value })
    }

    /// Get the tag value
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Parse a comma-separated tag string into a list of valid Tags.
    ///
    /// Order is preserved, duplicates are dropped.
    pub fn parse_tags<S: AsRef<str>>(tag_str: S) -> DomainResult<Vec<Tag>> {
        let mut result: Vec<Tag> = Vec::new();

        for tag_value in tag_str
            .as_ref()
            .split(',')
            .map(|s| s.trim())
            .filter(|s| !s.is_empty())
        {
            let tag = Tag::new(tag_value)?;
            if !result.contains(&tag) {
                result.push(tag);
            }
        }

        Ok(result)
    }

    /// Parse an optional string into an `Option<Vec<Tag>>`.
    ///
    /// Returns `None` if the input is `None` or an empty string.
    pub fn parse_tag_option(tag_str: Option<impl AsRef<str>>) -> DomainResult<Option<Vec<Tag>>> {
        match tag_str {
            None => Ok(None),
            Some(s) => {
                let s = s.as_ref();
                if s.is_empty() {
                    Ok(None)
                } else {
                    Tag::parse_tags(s).map(Some)
                }
            }
        }
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

// On the wire a tag is a bare string.
impl Serialize for Tag {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.value)
    }
}

impl<'de> Deserialize<'de> for Tag {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = String::deserialize(deserializer)?;
        Tag::new(&value).map_err(D::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn given_mixed_case_value_when_new_then_normalizes_to_lowercase() {
        let tag = Tag::new(" Rust ").unwrap();
        assert_eq!(tag.value(), "rust");
    }

    #[test]
    fn given_value_with_comma_when_new_then_fails() {
        assert!(Tag::new("a,b").is_err());
        assert!(Tag::new("a b").is_err());
        assert!(Tag::new("").is_err());
    }

    #[test]
    fn given_comma_string_when_parse_tags_then_preserves_order_and_dedupes() {
        let tags = Tag::parse_tags("web, rust,web,cli").unwrap();
        let values: Vec<&str> = tags.iter().map(Tag::value).collect();
        assert_eq!(values, vec!["web", "rust", "cli"]);
    }

    #[test]
    fn given_empty_input_when_parse_tag_option_then_none() {
        assert!(Tag::parse_tag_option(None::<&str>).unwrap().is_none());
        assert!(Tag::parse_tag_option(Some("")).unwrap().is_none());
        assert!(Tag::parse_tag_option(Some("a,b")).unwrap().is_some());
    }
}
