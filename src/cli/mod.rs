//! CLI support for pupil
//!
//! Provides programmatic access to the pupil CLI functionality for embedding
//! in other tools.

mod check;
mod convert;
mod docs;

pub use check::{
    BatchOptions, CheckOptions, execute_batch, execute_check, execute_tokens, execute_tree,
    list_checks,
};
pub use convert::{json_to_batch, json_to_value};
pub use docs::{DocCategory, get_doc_category, get_docs_overview};

use std::io;

/// Errors that can occur during CLI operations
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("Parse error: {0}")]
    Parse(#[from] crate::ParseError),

    #[error("{0}")]
    Validation(#[from] crate::ValidationError),

    #[error("Invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// The batch JSON didn't have the `{"field": [value, rule]}` shape
    #[error("Malformed batch: {0}")]
    MalformedBatch(String),

    /// A JSON value with no pupil counterpart (array or object)
    #[error("Unsupported value: {0}")]
    UnsupportedValue(String),

    #[error("No input provided. Use --input or pipe JSON to stdin.")]
    NoInput,

    #[error("Unknown category: '{0}'\nRun 'pupil docs' to see available categories.")]
    UnknownCategory(String),
}
