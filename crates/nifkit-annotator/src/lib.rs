//! nifkit Annotator
//!
//! Converts free text into a NIF annotation graph.
//!
//! # Overview
//!
//! A validated document is split into paragraphs and sentences, every
//! segment is located at its exact character span within the document, and
//! each node is emitted as a set of NIF triples scoped to a freshly minted
//! named graph.
//!
//! # Architecture
//!
//! ```text
//! DocumentRequest → validate → Document → Annotator → AnnotatedDocument
//!                                            │
//!                       segmenter ───────────┤
//!                       OffsetLocator ───────┤
//!                       IdAllocator/Locators ┘
//! ```
//!
//! # Key Features
//!
//! - **Deterministic segmentation**: blank-line paragraphs, punctuation sentences
//! - **Exact offsets**: spans always slice back to the stored text, even when
//!   the same sentence repeats verbatim
//! - **All or nothing**: a segment that cannot be located aborts the request,
//!   no partial graph escapes
//!
//! # Example Usage
//!
//! ```
//! use nifkit_annotator::{Annotator, AnnotatorConfig, DocumentRequest};
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let annotator = Annotator::new(AnnotatorConfig::default())?;
//!
//! let request = DocumentRequest {
//!     text: "Hello world. This is NIF.\n\nSecond paragraph here.".to_string(),
//!     document_name: "greeting".to_string(),
//!     language: Some("english".to_string()),
//! };
//!
//! let document = annotator.validate(request)?;
//! let annotated = annotator.annotate(&document)?;
//!
//! assert_eq!(annotated.paragraphs.len(), 2);
//! assert_eq!(annotated.paragraphs[0].sentences.len(), 2);
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

#![warn(missing_docs)]

mod builder;
mod config;
mod error;
mod locator;
pub mod segmenter;
mod types;


pub use builder::Annotator;
pub use config::AnnotatorConfig;
pub use error::{AnnotatorError, SegmentKind, ValidationError};
pub use locator::OffsetLocator;
pub use segmenter::{split_paragraphs, split_sentences};
pub use types::{AnnotatedDocument, Document, DocumentRequest, ParagraphNode, SentenceNode};
