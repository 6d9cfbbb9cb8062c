//! # Articles Domain Layer
//!
//! Pure business rules for the articles service.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                    Domain Layer (This Crate)                     │
//! │  ┌─────────────────────────────────────────────────────────────┐│
//! │  │  model/     - Article entity, requests, field-update sets   ││
//! │  │  repository/- ArticlesStore trait (not implementations)     ││
//! │  └─────────────────────────────────────────────────────────────┘│
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Nothing in here talks to a database or a socket. If we switch from
//! PostgreSQL to something else, this crate doesn't change.

pub mod model;
pub mod repository;

// Re-export commonly used types
pub use model::{
    article::{
        Article, ArticleId, CreateArticleRequest, InvalidArticleId, NewArticle,
        UpdateArticleRequest, ValidationError,
    },
    update::{ArticleField, ArticleUpdate, ArticleUpdateBuilder, FieldUpdate},
};

pub use repository::article_store::{ArticlesStore, StoreError};
