//! Domain Models - The vocabulary of the articles service
//!
//! Every name here should match how the HTTP API talks about the data.

pub mod article;
pub mod update;
