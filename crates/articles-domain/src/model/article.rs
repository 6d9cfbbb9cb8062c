//! Article - The single entity this service stores
//!
//! An Article is an Entity: its `id` is assigned by storage on insert and
//! never changes, even when the title or body is edited.

use std::num::ParseIntError;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Unique identifier for an Article (generated by storage)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ArticleId(i64);

impl ArticleId {
    pub fn new(id: i64) -> Self {
        Self(id)
    }

    pub fn get(self) -> i64 {
        self.0
    }
}

impl core::fmt::Display for ArticleId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A path segment that is not an integer id
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidArticleId {
    pub raw: String,
    pub source: ParseIntError,
}

impl core::fmt::Display for InvalidArticleId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "invalid article id '{}': {}", self.raw, self.source)
    }
}

impl std::error::Error for InvalidArticleId {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.source)
    }
}

impl FromStr for ArticleId {
    type Err = InvalidArticleId;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse::<i64>().map(Self).map_err(|source| InvalidArticleId {
            raw: s.to_string(),
            source,
        })
    }
}

/// A stored article, exactly as a row of the `articles` table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Article {
    pub id: ArticleId,
    pub title: String,
    pub body: String,
    pub created_at: DateTime<Utc>,
}

/// Client input that failed a domain rule
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    message: String,
}

impl ValidationError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl core::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for ValidationError {}

/// Body of `POST /v1/articles`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateArticleRequest {
    pub title: String,
    pub body: String,
}

/// Body of `PATCH /v1/articles/{id}`
///
/// Absent and `null` fields both mean "leave unchanged".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateArticleRequest {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub body: Option<String>,
}

/// A create request that passed validation
///
/// Only obtainable through [`NewArticle::parse`], so holding one proves
/// both fields contain something other than whitespace.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewArticle {
    title: String,
    body: String,
}

impl NewArticle {
    /// Validate a create request
    pub fn parse(request: CreateArticleRequest) -> Result<Self, ValidationError> {
        if is_blank(&request.title) {
            return Err(ValidationError::new("title is required"));
        }
        if is_blank(&request.body) {
            return Err(ValidationError::new("body is required"));
        }

        Ok(Self {
            title: request.title,
            body: request.body,
        })
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn body(&self) -> &str {
        &self.body
    }
}

pub(crate) fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}
