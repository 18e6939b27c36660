//! Error types for the generator.
//!
//! Every failure is fatal: errors propagate to the binary, which prints
//! them and exits with a non-zero status. Nothing is retried and no partial
//! page is ever produced.

use std::path::PathBuf;

use thiserror::Error;

/// Main error type for the generator library.
#[derive(Debug, Error)]
pub enum GeneratorError {
    /// An input file could not be read.
    #[error("Failed to read {}: {source}", .path.display())]
    ReadFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Paragraph JSON is malformed or a record has the wrong shape.
    #[error("Invalid paragraph data in {}: {source}", .path.display())]
    ParagraphData {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// A paragraph record has an empty primary-language text.
    #[error("Paragraph #{index} (chapter '{chapter}', article '{article}') has empty 'lt' text")]
    EmptyPrimaryText {
        index: usize,
        chapter: String,
        article: String,
    },

    /// Invalid document language code.
    #[error("Invalid language code: '{0}'. Expected a language tag (e.g., lt, en-GB)")]
    InvalidLang(String),

    /// Page title is blank.
    #[error("Page title must not be empty")]
    EmptyTitle,

    /// IO error while writing output.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for generator operations.
pub type Result<T> = std::result::Result<T, GeneratorError>;
