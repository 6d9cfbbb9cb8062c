//! Persistence Adapters - Repository implementations
//!
//! These implement the `ArticlesStore` trait from articles-domain.

pub mod in_memory;
pub mod postgres;
