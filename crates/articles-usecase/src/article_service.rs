//! ArticleService - Validation and orchestration for article requests
//!
//! Handlers never call the store directly: they go through this service,
//! which enforces the domain rules before anything reaches storage.

use std::sync::Arc;

use articles_domain::{
    Article, ArticleId, ArticleUpdate, ArticlesStore, CreateArticleRequest, NewArticle,
    StoreError, UpdateArticleRequest, ValidationError,
};
use thiserror::Error;

/// Errors surfaced by [`ArticleService`]
#[derive(Debug, Error)]
pub enum ServiceError {
    /// The request broke a domain rule; nothing was written
    #[error("{0}")]
    Validation(#[from] ValidationError),

    #[error("article {id} not found")]
    NotFound { id: ArticleId },

    /// The store failed to execute the statement
    #[error("storage error: {message}")]
    Storage { message: String },
}

impl From<StoreError> for ServiceError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound { id } => ServiceError::NotFound { id },
            StoreError::Storage { message } => ServiceError::Storage { message },
        }
    }
}

/// Use case entry point for everything the HTTP API can do to articles
#[derive(Clone)]
pub struct ArticleService {
    store: Arc<dyn ArticlesStore>,
}

impl ArticleService {
    /// Create a service over an explicitly owned store handle
    pub fn new(store: Arc<dyn ArticlesStore>) -> Self {
        Self { store }
    }

    #[tracing::instrument(name = "List articles", skip_all)]
    pub async fn list(&self) -> Result<Vec<Article>, ServiceError> {
        let articles = self.store.list().await.map_err(log_store_error)?;
        tracing::debug!(count = articles.len(), "listed articles");
        Ok(articles)
    }

    #[tracing::instrument(name = "Get article", skip_all, fields(article_id = %id))]
    pub async fn get(&self, id: ArticleId) -> Result<Article, ServiceError> {
        self.store.get(id).await.map_err(log_store_error)
    }

    /// Validate and insert a new article
    ///
    /// Blank title or body is rejected before the store is called.
    #[tracing::instrument(name = "Create article", skip_all)]
    pub async fn create(&self, request: CreateArticleRequest) -> Result<Article, ServiceError> {
        let new_article = NewArticle::parse(request)?;
        let article = self
            .store
            .create(&new_article)
            .await
            .map_err(log_store_error)?;
        tracing::info!(article_id = %article.id, "article created");
        Ok(article)
    }

    /// Apply a partial update
    ///
    /// An empty request, or a blank supplied field, is a validation error.
    /// A missing id is not: the store treats it as a no-op.
    #[tracing::instrument(name = "Update article", skip_all, fields(article_id = %id))]
    pub async fn update(
        &self,
        id: ArticleId,
        request: UpdateArticleRequest,
    ) -> Result<(), ServiceError> {
        let update = ArticleUpdate::from_request(request)?;
        self.store
            .update(id, &update)
            .await
            .map_err(log_store_error)?;
        tracing::info!(fields = update.fields().len(), "article updated");
        Ok(())
    }

    /// Delete by id; deleting a missing id succeeds
    #[tracing::instrument(name = "Delete article", skip_all, fields(article_id = %id))]
    pub async fn delete(&self, id: ArticleId) -> Result<(), ServiceError> {
        self.store.delete(id).await.map_err(log_store_error)?;
        tracing::info!("article deleted");
        Ok(())
    }
}

fn log_store_error(err: StoreError) -> ServiceError {
    if let StoreError::Storage { message } = &err {
        tracing::error!(error = %message, "article store failed");
    }
    err.into()
}
