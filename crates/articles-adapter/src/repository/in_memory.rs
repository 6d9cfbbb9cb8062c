//! In-Memory Repository Implementation
//!
//! A map-backed `ArticlesStore`. Used as the test double for the HTTP
//! layer.

use std::collections::BTreeMap;
use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::{Arc, RwLock};

use articles_domain::{Article, ArticleId, ArticleUpdate, ArticlesStore, NewArticle, StoreError};
use chrono::Utc;

/// In-memory Articles Store
///
/// Thread-safe implementation using RwLock. Clones share the same data.
/// Ids are handed out from 1 upwards and never reused.
#[derive(Debug, Clone)]
pub struct InMemoryArticlesStore {
    articles: Arc<RwLock<BTreeMap<ArticleId, Article>>>,
    next_id: Arc<AtomicI64>,
}

impl Default for InMemoryArticlesStore {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryArticlesStore {
    pub fn new() -> Self {
        Self {
            articles: Arc::new(RwLock::new(BTreeMap::new())),
            next_id: Arc::new(AtomicI64::new(1)),
        }
    }

    /// Number of stored articles
    pub fn len(&self) -> Result<usize, StoreError> {
        let articles = self.articles.read().map_err(|_| read_lock_error())?;
        Ok(articles.len())
    }

    pub fn is_empty(&self) -> Result<bool, StoreError> {
        Ok(self.len()? == 0)
    }
}

#[async_trait::async_trait]
impl ArticlesStore for InMemoryArticlesStore {
    async fn list(&self) -> Result<Vec<Article>, StoreError> {
        let articles = self.articles.read().map_err(|_| read_lock_error())?;
        Ok(articles.values().cloned().collect())
    }

    async fn get(&self, id: ArticleId) -> Result<Article, StoreError> {
        let articles = self.articles.read().map_err(|_| read_lock_error())?;
        articles
            .get(&id)
            .cloned()
            .ok_or(StoreError::NotFound { id })
    }

    async fn create(&self, article: &NewArticle) -> Result<Article, StoreError> {
        let mut articles = self.articles.write().map_err(|_| write_lock_error())?;
        let id = ArticleId::new(self.next_id.fetch_add(1, Ordering::Relaxed));
        let stored = Article {
            id,
            title: article.title().to_string(),
            body: article.body().to_string(),
            created_at: Utc::now(),
        };
        articles.insert(id, stored.clone());
        Ok(stored)
    }

    async fn update(&self, id: ArticleId, update: &ArticleUpdate) -> Result<(), StoreError> {
        let mut articles = self.articles.write().map_err(|_| write_lock_error())?;
        if let Some(article) = articles.get_mut(&id) {
            update.apply(article);
        }
        Ok(())
    }

    async fn delete(&self, id: ArticleId) -> Result<(), StoreError> {
        let mut articles = self.articles.write().map_err(|_| write_lock_error())?;
        articles.remove(&id);
        Ok(())
    }
}

fn read_lock_error() -> StoreError {
    StoreError::storage("Failed to acquire read lock")
}

fn write_lock_error() -> StoreError {
    StoreError::storage("Failed to acquire write lock")
}
