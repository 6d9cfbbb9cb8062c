//! Route handlers for `/v1/articles`
//!
//! Request bodies are read as raw bytes and decoded as JSON whatever the
//! `Content-Type` header says.

use articles_domain::{Article, ArticleId, CreateArticleRequest, UpdateArticleRequest};
use axum::body::Bytes;
use axum::extract::{Path, State};
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::Json;

use super::error::ApiError;
use super::AppState;

const LIST_CACHE_CONTROL: &str = "public, max-age=300";
const ITEM_CACHE_CONTROL: &str = "public, max-age=3600";

/// `GET /v1/articles`
pub async fn list_articles(State(state): State<AppState>) -> Result<impl IntoResponse, ApiError> {
    let articles = state.articles.list().await?;
    Ok(([(header::CACHE_CONTROL, LIST_CACHE_CONTROL)], Json(articles)))
}

/// `GET /v1/articles/{id}`
pub async fn get_article(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let id: ArticleId = raw_id.parse()?;
    let article = state.articles.get(id).await?;
    Ok(([(header::CACHE_CONTROL, ITEM_CACHE_CONTROL)], Json(article)))
}

/// `POST /v1/articles`
pub async fn create_article(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<(StatusCode, Json<Article>), ApiError> {
    let request: CreateArticleRequest = serde_json::from_slice(&body)?;
    let article = state.articles.create(request).await?;
    Ok((StatusCode::CREATED, Json(article)))
}

/// `PATCH /v1/articles/{id}`
pub async fn update_article(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
    body: Bytes,
) -> Result<StatusCode, ApiError> {
    let id: ArticleId = raw_id.parse()?;
    let request: UpdateArticleRequest = serde_json::from_slice(&body)?;
    state.articles.update(id, request).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// `DELETE /v1/articles/{id}`
pub async fn delete_article(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> Result<StatusCode, ApiError> {
    let id: ArticleId = raw_id.parse()?;
    state.articles.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
