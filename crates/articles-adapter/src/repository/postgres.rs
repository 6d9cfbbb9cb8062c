//! PostgreSQL Repository Implementation
//!
//! `ArticlesStore` on top of a `sqlx` connection pool. Every operation is a
//! single statement; connections are checked out of the pool for the
//! duration of that statement only.

use articles_domain::{Article, ArticleId, ArticleUpdate, ArticlesStore, NewArticle, StoreError};
use sqlx::postgres::{PgPoolOptions, PgRow};
use sqlx::{PgPool, Postgres, QueryBuilder, Row};

/// An articles store using Postgres as its backend.
///
/// # Implementation details
///
/// All articles live in a single `articles` table. You can use
/// [`migrate`](Self::migrate) to create it, or take the statement from
/// [`migration_query`](Self::migration_query) and add it to your own
/// migration scripts.
#[derive(Debug, Clone)]
pub struct PgArticlesStore {
    pool: PgPool,
}

impl PgArticlesStore {
    /// Creates a store over an existing pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Opens a pool against `database_url` and wraps it in a store.
    ///
    /// Opening the pool establishes one connection, so an unreachable
    /// database fails here rather than on the first request.
    pub async fn connect(database_url: &str, max_connections: u32) -> Result<Self, sqlx::Error> {
        let pool = PgPoolOptions::new()
            .max_connections(max_connections)
            .connect(database_url)
            .await?;
        Ok(Self::new(pool))
    }

    /// The underlying pool
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// Return the query used to create the articles table.
    ///
    /// The query is idempotent: if the table already exists, it does nothing.
    pub fn migration_query() -> &'static str {
        "CREATE TABLE IF NOT EXISTS articles (
    id BIGSERIAL PRIMARY KEY,
    title TEXT NOT NULL,
    body TEXT NOT NULL,
    created_at TIMESTAMPTZ NOT NULL DEFAULT now()
);"
    }

    /// Create the articles table in the database.
    ///
    /// Safe to call on every startup.
    pub async fn migrate(&self) -> Result<(), sqlx::Error> {
        use sqlx::Executor as _;

        self.pool.execute(Self::migration_query()).await?;
        Ok(())
    }
}

/// Build the `UPDATE` statement for a field-update set.
///
/// Column names come from the fixed field-to-column mapping; every value,
/// including the id, is a bound parameter.
pub fn update_statement(id: ArticleId, update: &ArticleUpdate) -> QueryBuilder<'_, Postgres> {
    let mut builder = QueryBuilder::new("UPDATE articles SET ");

    let mut assignments = builder.separated(", ");
    for assignment in update.fields() {
        assignments.push(assignment.field().column());
        assignments.push_unseparated(" = ");
        assignments.push_bind_unseparated(assignment.value());
    }

    builder.push(" WHERE id = ");
    builder.push_bind(id.get());
    builder
}

fn article_from_row(row: &PgRow) -> Result<Article, sqlx::Error> {
    Ok(Article {
        id: ArticleId::new(row.try_get("id")?),
        title: row.try_get("title")?,
        body: row.try_get("body")?,
        created_at: row.try_get("created_at")?,
    })
}

fn storage_error(err: sqlx::Error) -> StoreError {
    StoreError::storage(err.to_string())
}

#[async_trait::async_trait]
impl ArticlesStore for PgArticlesStore {
    #[tracing::instrument(name = "Select all article rows", level = tracing::Level::DEBUG, skip_all)]
    async fn list(&self) -> Result<Vec<Article>, StoreError> {
        let rows = sqlx::query("SELECT id, title, body, created_at FROM articles ORDER BY id")
            .fetch_all(&self.pool)
            .await
            .map_err(storage_error)?;

        rows.iter()
            .map(article_from_row)
            .collect::<Result<Vec<_>, _>>()
            .map_err(storage_error)
    }

    #[tracing::instrument(name = "Select article row", level = tracing::Level::DEBUG, skip_all, fields(article_id = %id))]
    async fn get(&self, id: ArticleId) -> Result<Article, StoreError> {
        let row = sqlx::query("SELECT id, title, body, created_at FROM articles WHERE id = $1")
            .bind(id.get())
            .fetch_optional(&self.pool)
            .await
            .map_err(storage_error)?;

        match row {
            Some(row) => article_from_row(&row).map_err(storage_error),
            None => Err(StoreError::NotFound { id }),
        }
    }

    #[tracing::instrument(name = "Insert article row", level = tracing::Level::DEBUG, skip_all)]
    async fn create(&self, article: &NewArticle) -> Result<Article, StoreError> {
        let row = sqlx::query(
            "INSERT INTO articles (title, body) VALUES ($1, $2) \
            RETURNING id, title, body, created_at",
        )
        .bind(article.title())
        .bind(article.body())
        .fetch_one(&self.pool)
        .await
        .map_err(storage_error)?;

        article_from_row(&row).map_err(storage_error)
    }

    #[tracing::instrument(name = "Update article row", level = tracing::Level::DEBUG, skip_all, fields(article_id = %id))]
    async fn update(&self, id: ArticleId, update: &ArticleUpdate) -> Result<(), StoreError> {
        let mut statement = update_statement(id, update);
        let result = statement
            .build()
            .execute(&self.pool)
            .await
            .map_err(storage_error)?;

        tracing::debug!(rows_affected = result.rows_affected(), "update executed");
        Ok(())
    }

    #[tracing::instrument(name = "Delete article row", level = tracing::Level::DEBUG, skip_all, fields(article_id = %id))]
    async fn delete(&self, id: ArticleId) -> Result<(), StoreError> {
        let result = sqlx::query("DELETE FROM articles WHERE id = $1")
            .bind(id.get())
            .execute(&self.pool)
            .await
            .map_err(storage_error)?;

        tracing::debug!(rows_affected = result.rows_affected(), "delete executed");
        Ok(())
    }
}
