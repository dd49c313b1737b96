//! nifkit Domain Layer
//!
//! This crate contains the value types every other nifkit crate speaks:
//! the RDF statement model, the fixed NIF vocabulary, identifiers and the
//! locators derived from them, supported languages, and character spans.
//! Apart from `uuid` it has no external dependencies.
//!
//! ## Key Concepts
//!
//! - **AnnotationGraph**: the immutable set of triples produced for one request
//! - **GraphBuilder**: append-only accumulator that yields an `AnnotationGraph`
//! - **ResourceId**: a UUIDv7 minted per node or named graph, never reused
//! - **Locators**: pure `(base, id) -> IRI` templates for resources and graphs
//! - **Span**: a `[begin, end)` character offset pair within the document text
//!
//! ## Architecture
//!
//! - No I/O, no logging, no async
//! - Infrastructure (segmentation, storage, HTTP) lives in other crates
//! - Trait seams (`IdAllocator`) for anything a test may want to substitute

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod graph;
pub mod identifier;
pub mod language;
pub mod rdf;
pub mod span;
pub mod vocabulary;

// Re-exports for convenience
pub use graph::{AnnotationGraph, GraphBuilder};
pub use identifier::{IdAllocator, Locators, ResourceId, UuidAllocator};
pub use language::Language;
pub use rdf::{Iri, Literal, Term, Triple};
pub use span::Span;
