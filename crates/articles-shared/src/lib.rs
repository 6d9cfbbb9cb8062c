//! # Articles Shared
//!
//! Configuration types and errors used by the binary and the adapters.

pub mod config;
pub mod error;

// Re-exports
pub use config::*;
pub use error::*;
