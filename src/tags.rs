/// Instance and network tags
use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Longest tag the compute API accepts.
pub const MAX_TAG_LENGTH: usize = 63;

/// The naming rule a tag broke.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TagRule {
    /// Tags cannot be empty
    Empty,
    /// Tags are limited to [`MAX_TAG_LENGTH`] characters
    TooLong,
    /// First character must be a lowercase letter
    LeadingCharacter,
    /// Only lowercase letters, digits and hyphens are allowed
    Character(char),
    /// Last character cannot be a hyphen
    TrailingHyphen,
}

impl fmt::Display for TagRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TagRule::Empty => write!(f, "must not be empty"),
            TagRule::TooLong => write!(f, "must be at most {} characters long", MAX_TAG_LENGTH),
            TagRule::LeadingCharacter => write!(f, "must start with a lowercase letter"),
            TagRule::Character(c) => write!(
                f,
                "contains {:?}; only lowercase letters, digits and hyphens are allowed",
                c
            ),
            TagRule::TrailingHyphen => write!(f, "must not end with a hyphen"),
        }
    }
}

/// A tag that failed validation
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("tag {tag:?} {rule}")]
pub struct TagError {
    pub tag: String,
    pub rule: TagRule,
}

/// Ordered set of tags attached to an instance or a network.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Tags(pub Vec<String>);

impl Tags {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, String> {
        self.0.iter()
    }

    /// Check every tag against the naming rules, stopping at the first
    /// failure.
    ///
    /// # Examples
    ///
    /// ```
    /// use cpi_props::tags::{Tags, TagRule};
    ///
    /// let ok = Tags::from(vec!["web", "db-1"]);
    /// assert!(ok.validate().is_ok());
    ///
    /// let bad = Tags::from(vec!["web", "Invalid_Tag!", "-x"]);
    /// let err = bad.validate().unwrap_err();
    /// assert_eq!(err.tag, "Invalid_Tag!");
    /// assert_eq!(err.rule, TagRule::LeadingCharacter);
    /// ```
    pub fn validate(&self) -> Result<(), TagError> {
        for tag in &self.0 {
            validate_tag(tag)?;
        }
        Ok(())
    }
}

impl<S: Into<String>> From<Vec<S>> for Tags {
    fn from(tags: Vec<S>) -> Self {
        Tags(tags.into_iter().map(Into::into).collect())
    }
}

impl<'a> IntoIterator for &'a Tags {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Validate a single tag.
pub fn validate_tag(tag: &str) -> Result<(), TagError> {
    check_tag(tag).map_err(|rule| TagError { tag: tag.to_string(), rule })
}

fn check_tag(tag: &str) -> Result<(), TagRule> {
    let mut chars = tag.chars();
    let first = chars.next().ok_or(TagRule::Empty)?;
    if tag.chars().count() > MAX_TAG_LENGTH {
        return Err(TagRule::TooLong);
    }
    if !first.is_ascii_lowercase() {
        return Err(TagRule::LeadingCharacter);
    }
    if let Some(c) = chars.find(|c| !(c.is_ascii_lowercase() || c.is_ascii_digit() || *c == '-')) {
        return Err(TagRule::Character(c));
    }
    if tag.ends_with('-') {
        return Err(TagRule::TrailingHyphen);
    }
    Ok(())
}
