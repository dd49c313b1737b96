//! Request and result types for annotation

use nifkit_domain::{AnnotationGraph, Iri, Language, ResourceId, Span};
use serde::{Deserialize, Serialize};

use crate::config::AnnotatorConfig;
use crate::error::ValidationError;

/// Raw processing request as submitted by a caller
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentRequest {
    /// Full document text
    #[serde(default)]
    pub text: String,

    /// Display name of the document
    #[serde(default)]
    pub document_name: String,

    /// Language name; `english` when absent
    #[serde(default)]
    pub language: Option<String>,
}

impl DocumentRequest {
    /// Check the request and turn it into a [`Document`]
    ///
    /// Text and name are trimmed; offsets of the resulting graph are relative
    /// to the trimmed text.
    pub fn validate(self, config: &AnnotatorConfig) -> Result<Document, ValidationError> {
        let text = self.text.trim();
        if text.is_empty() {
            return Err(ValidationError::EmptyText);
        }

        let name = self.document_name.trim();
        if name.is_empty() {
            return Err(ValidationError::EmptyDocumentName);
        }

        let language = match self.language.as_deref() {
            None => Language::default(),
            Some(tag) => Language::parse(tag)
                .ok_or_else(|| ValidationError::UnsupportedLanguage(tag.to_string()))?,
        };

        let length = text.chars().count();
        if length > config.max_text_length {
            return Err(ValidationError::TextTooLong(length, config.max_text_length));
        }

        Ok(Document {
            text: text.to_string(),
            name: name.to_string(),
            language,
        })
    }
}

/// A validated document, ready for annotation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    text: String,
    name: String,
    language: Language,
}

impl Document {
    /// Full (trimmed, non-empty) text
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Display name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Document language
    pub fn language(&self) -> Language {
        self.language
    }
}

/// A sentence node of the annotation graph
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SentenceNode {
    /// Resource locator
    pub iri: Iri,
    /// Sentence text
    pub text: String,
    /// Span within the document
    pub span: Span,
}

/// A paragraph node of the annotation graph
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParagraphNode {
    /// Resource locator
    pub iri: Iri,
    /// Paragraph text
    pub text: String,
    /// Span within the document
    pub span: Span,
    /// Sentences in order of appearance
    pub sentences: Vec<SentenceNode>,
}

/// Result of annotating one document
///
/// Holds the finished graph together with an outline of the hierarchy it
/// encodes.
#[derive(Debug, Clone)]
pub struct AnnotatedDocument {
    /// Every statement produced for the request
    pub graph: AnnotationGraph,

    /// Named graph identifier
    pub graph_id: ResourceId,

    /// Named graph locator
    pub graph_iri: Iri,

    /// Document resource locator
    pub document_iri: Iri,

    /// Paragraphs in order of appearance
    pub paragraphs: Vec<ParagraphNode>,
}

impl AnnotatedDocument {
    /// Number of sentences across all paragraphs
    pub fn sentence_count(&self) -> usize {
        self.paragraphs.iter().map(|p| p.sentences.len()).sum()
    }

    /// The first `limit` resource locators in emission order
    ///
    /// The document comes first, then paragraphs and sentences as they were
    /// emitted.
    pub fn sample_resources(&self, limit: usize) -> Vec<&Iri> {
        self.graph.subjects().into_iter().take(limit).collect()
    }
}
