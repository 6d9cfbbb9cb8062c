//! ArticleUpdate - A partial update as a tagged set of field assignments
//!
//! Storage adapters render an `ArticleUpdate` into whatever statement they
//! need. Column names come from [`ArticleField::column`], a fixed mapping,
//! so nothing a client sends ever ends up in statement text.

use super::article::{is_blank, Article, UpdateArticleRequest, ValidationError};

/// The editable columns of an Article
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ArticleField {
    Title,
    Body,
}

impl ArticleField {
    /// Column name in the `articles` table
    pub fn column(self) -> &'static str {
        match self {
            ArticleField::Title => "title",
            ArticleField::Body => "body",
        }
    }
}

impl core::fmt::Display for ArticleField {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.column())
    }
}

/// One assignment in an update
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldUpdate {
    Title(String),
    Body(String),
}

impl FieldUpdate {
    pub fn field(&self) -> ArticleField {
        match self {
            FieldUpdate::Title(_) => ArticleField::Title,
            FieldUpdate::Body(_) => ArticleField::Body,
        }
    }

    pub fn value(&self) -> &str {
        match self {
            FieldUpdate::Title(value) | FieldUpdate::Body(value) => value,
        }
    }

    fn apply_to(&self, article: &mut Article) {
        match self {
            FieldUpdate::Title(title) => article.title = title.clone(),
            FieldUpdate::Body(body) => article.body = body.clone(),
        }
    }
}

/// A non-empty set of field assignments, at most one per field
///
/// Build one with [`ArticleUpdate::builder`] or [`ArticleUpdate::from_request`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArticleUpdate {
    updates: Vec<FieldUpdate>,
}

impl ArticleUpdate {
    pub fn builder() -> ArticleUpdateBuilder {
        ArticleUpdateBuilder::default()
    }

    /// Turn a PATCH body into an update set
    ///
    /// Fails if no field is supplied, or if a supplied field is blank.
    pub fn from_request(request: UpdateArticleRequest) -> Result<Self, ValidationError> {
        let mut builder = Self::builder();

        if let Some(title) = request.title {
            if is_blank(&title) {
                return Err(ValidationError::new("title must not be blank"));
            }
            builder = builder.title(title);
        }

        if let Some(body) = request.body {
            if is_blank(&body) {
                return Err(ValidationError::new("body must not be blank"));
            }
            builder = builder.body(body);
        }

        builder.build()
    }

    /// Assignments in the order they were added
    pub fn fields(&self) -> &[FieldUpdate] {
        &self.updates
    }

    pub fn get(&self, field: ArticleField) -> Option<&str> {
        self.updates
            .iter()
            .find(|u| u.field() == field)
            .map(FieldUpdate::value)
    }

    /// Apply the assignments to an in-memory article
    pub fn apply(&self, article: &mut Article) {
        for update in &self.updates {
            update.apply_to(article);
        }
    }
}

/// Builder for [`ArticleUpdate`]
#[derive(Debug, Clone, Default)]
pub struct ArticleUpdateBuilder {
    updates: Vec<FieldUpdate>,
}

impl ArticleUpdateBuilder {
    pub fn title(self, title: impl Into<String>) -> Self {
        self.set(FieldUpdate::Title(title.into()))
    }

    pub fn body(self, body: impl Into<String>) -> Self {
        self.set(FieldUpdate::Body(body.into()))
    }

    /// Add an assignment, replacing an earlier one for the same field
    pub fn set(mut self, update: FieldUpdate) -> Self {
        let field = update.field();
        self.updates.retain(|u| u.field() != field);
        self.updates.push(update);
        self
    }

    pub fn build(self) -> Result<ArticleUpdate, ValidationError> {
        if self.updates.is_empty() {
            return Err(ValidationError::new("at least one field required"));
        }
        Ok(ArticleUpdate {
            updates: self.updates,
        })
    }
}
