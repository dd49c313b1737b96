//! Error types for the Annotator

use std::fmt;

use thiserror::Error;

/// Rejections of caller input
///
/// Raised before any graph is built.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Text is empty after trimming
    #[error("Text is required")]
    EmptyText,

    /// Document name is empty after trimming
    #[error("Document name is required")]
    EmptyDocumentName,

    /// Language tag is not one of the supported languages
    #[error("Language must be 'english' or 'german', got '{0}'")]
    UnsupportedLanguage(String),

    /// Text exceeds the configured maximum length
    #[error("Text too long: {0} chars (max: {1})")]
    TextTooLong(usize, usize),
}

/// Level of the segment hierarchy
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SegmentKind {
    /// Paragraph located within the document
    Paragraph,
    /// Sentence located within its paragraph
    Sentence,
}

impl fmt::Display for SegmentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SegmentKind::Paragraph => f.write_str("paragraph"),
            SegmentKind::Sentence => f.write_str("sentence"),
        }
    }
}

/// Errors that can occur during annotation
#[derive(Error, Debug)]
pub enum AnnotatorError {
    /// Caller input was rejected
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// A segment could not be found in its parent text at or after the cursor
    #[error("Consistency error: {kind} {segment:?} not found at or after offset {cursor}")]
    SegmentNotFound {
        /// Which level failed
        kind: SegmentKind,
        /// The segment text
        segment: String,
        /// Character cursor the search started from
        cursor: usize,
    },

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}
