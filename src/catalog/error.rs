//! Catalogue loading and validation errors.

use std::path::PathBuf;
use thiserror::Error;

/// Errors produced while loading or validating a catalogue.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// Catalogue file could not be read.
    #[error("failed to read catalog file {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Catalogue file is not valid JSON or does not match the schema.
    #[error("failed to parse catalog file {}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("catalog contains no categories")]
    Empty,

    #[error("duplicate category name '{0}'")]
    DuplicateCategory(String),

    /// Record ids must be unique within their category.
    #[error("duplicate record id '{id}' in category '{category}'")]
    DuplicateRecord { category: String, id: String },

    #[error("duplicate filter group '{group}' in category '{category}'")]
    DuplicateGroup { category: String, group: String },

    #[error("filter group '{group}' in category '{category}' declares no values")]
    EmptyGroup { category: String, group: String },

    #[error("record '{id}' in category '{category}' has score {score} above 100")]
    ScoreOutOfRange {
        category: String,
        id: String,
        score: u8,
    },

    /// Free-text search can only look into tag attributes.
    #[error("category '{category}' searches categorical group '{group}' as tags")]
    CategoricalSearchTags { category: String, group: String },
}
