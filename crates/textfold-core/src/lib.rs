//! Core textfold library (measurement, truncation, fold state, config).

pub mod config;
pub mod fold;
pub mod logging;
pub mod measure;
pub mod span;
pub mod truncate;
