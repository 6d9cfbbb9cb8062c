//! Repository Traits - The "Ports" of Hexagonal Architecture
//!
//! These traits define WHAT the service needs from persistence,
//! but NOT how it's done. That's the adapter's job.
//!
//! ```text
//! Domain Layer          │  Adapter Layer
//! ──────────────────────┼────────────────────────
//! trait ArticlesStore   │  PgArticlesStore
//!   fn list()           │  InMemoryArticlesStore
//!   fn update()         │
//! ```

pub mod article_store;
