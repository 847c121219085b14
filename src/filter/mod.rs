//! Search and filter pipeline for catalogue listings.
//!
//! Combines a debounced free-text query with per-group value selections to
//! produce the visible subset of the active category.

pub mod debounce;
pub mod engine;
pub mod matcher;

pub use engine::FilterEngine;

use thiserror::Error;

/// Errors returned by [`FilterEngine`] operations.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum FilterError {
    #[error("unknown category '{0}'")]
    UnknownCategory(String),

    #[error("catalog contains no categories")]
    EmptyCatalog,
}
