//! CLI command handlers.

pub mod config;
mod input;
pub mod measure;
pub mod truncate;
