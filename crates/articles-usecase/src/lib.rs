//! # Articles Use Case Layer
//!
//! Application-specific business rules.
//! This layer sits between the HTTP controller and the store: it
//! validates requests and decides which store call to make.

pub mod article_service;

pub use article_service::{ArticleService, ServiceError};
pub use articles_domain;
