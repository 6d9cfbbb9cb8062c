//! # Articles Adapter Layer
//!
//! External system integrations (Hexagonal Architecture adapters).
//!
//! ## Structure
//!
//! - `controller/` - Inbound adapter (HTTP API on axum)
//! - `repository/` - Persistence implementations of `ArticlesStore`

pub mod controller;
pub mod repository;

pub use controller::{router, ApiToken, AppState};
pub use repository::{in_memory::InMemoryArticlesStore, postgres::PgArticlesStore};
