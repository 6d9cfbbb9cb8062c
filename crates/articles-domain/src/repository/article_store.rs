//! Articles Store - Abstract persistence for Articles
//!
//! This trait defines what operations the service needs.
//! How they're implemented (PostgreSQL, memory) is not our concern here.

use crate::model::article::{Article, ArticleId, NewArticle};
use crate::model::update::ArticleUpdate;

/// Errors that can occur during store operations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// No article with this id
    NotFound { id: ArticleId },
    /// Query or connectivity failure
    Storage { message: String },
}

impl StoreError {
    pub fn storage(message: impl Into<String>) -> Self {
        StoreError::Storage {
            message: message.into(),
        }
    }
}

impl core::fmt::Display for StoreError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            StoreError::NotFound { id } => {
                write!(f, "article {} not found", id)
            }
            StoreError::Storage { message } => {
                write!(f, "storage error: {}", message)
            }
        }
    }
}

impl std::error::Error for StoreError {}

/// Articles Store Trait
///
/// This is a PORT in hexagonal architecture.
/// The application root owns one implementation and hands it to the
/// use-case layer as `Arc<dyn ArticlesStore>`.
///
/// `update` and `delete` do not check that the row exists: touching a
/// missing id is a successful no-op.
#[async_trait::async_trait]
pub trait ArticlesStore: Send + Sync {
    /// All articles, ordered by id
    async fn list(&self) -> Result<Vec<Article>, StoreError>;

    /// One article, or `StoreError::NotFound`
    async fn get(&self, id: ArticleId) -> Result<Article, StoreError>;

    /// Insert and return the stored row with its generated id and timestamp
    async fn create(&self, article: &NewArticle) -> Result<Article, StoreError>;

    /// Apply a partial update
    async fn update(&self, id: ArticleId, update: &ArticleUpdate) -> Result<(), StoreError>;

    /// Delete by id
    async fn delete(&self, id: ArticleId) -> Result<(), StoreError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_store_error_display() {
        let err = StoreError::NotFound {
            id: ArticleId::new(9),
        };
        assert_eq!(err.to_string(), "article 9 not found");

        let err = StoreError::storage("connection refused");
        assert_eq!(err.to_string(), "storage error: connection refused");
    }

    #[test]
    fn test_store_is_object_safe() {
        fn assert_dyn(_: Option<&dyn ArticlesStore>) {}
        assert_dyn(None);
    }
}
