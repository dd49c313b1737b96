//! Annotation graph construction

use nifkit_domain::vocabulary as voc;
use nifkit_domain::{GraphBuilder, IdAllocator, Iri, Literal, Locators, Span, UuidAllocator};
use tracing::{debug, info};

use crate::config::AnnotatorConfig;
use crate::error::{AnnotatorError, SegmentKind, ValidationError};
use crate::locator::OffsetLocator;
use crate::segmenter::{split_paragraphs, split_sentences};
use crate::types::{AnnotatedDocument, Document, DocumentRequest, ParagraphNode, SentenceNode};

/// The Annotator turns a validated document into a NIF annotation graph
///
/// Each call to [`Annotator::annotate`] mints a fresh named graph and fresh
/// node identifiers, so annotators can be shared freely between concurrent
/// requests.
#[derive(Debug, Clone)]
pub struct Annotator<A = UuidAllocator> {
    config: AnnotatorConfig,
    locators: Locators,
    allocator: A,
}

impl Annotator<UuidAllocator> {
    /// Create a new Annotator with UUIDv7 identifiers
    pub fn new(config: AnnotatorConfig) -> Result<Self, AnnotatorError> {
        Self::with_allocator(config, UuidAllocator)
    }
}

impl<A: IdAllocator> Annotator<A> {
    /// Create a new Annotator with a specific identifier allocator
    pub fn with_allocator(config: AnnotatorConfig, allocator: A) -> Result<Self, AnnotatorError> {
        config.validate().map_err(AnnotatorError::Config)?;
        let locators = Locators::new(config.resource_base.as_str()).map_err(AnnotatorError::Config)?;

        Ok(Self {
            config,
            locators,
            allocator,
        })
    }

    /// Configuration in use
    pub fn config(&self) -> &AnnotatorConfig {
        &self.config
    }

    /// Locator templates in use
    pub fn locators(&self) -> &Locators {
        &self.locators
    }

    /// Validate a raw request against this annotator's configuration
    pub fn validate(&self, request: DocumentRequest) -> Result<Document, ValidationError> {
        request.validate(&self.config)
    }

    /// Build the annotation graph for a document
    ///
    /// # Errors
    /// Returns [`AnnotatorError::SegmentNotFound`] if a paragraph or sentence
    /// cannot be located in its parent text. No graph is returned in that
    /// case.
    pub fn annotate(&self, document: &Document) -> Result<AnnotatedDocument, AnnotatorError> {
        let graph_id = self.allocator.new_id();
        let graph_iri = self.locators.graph(&graph_id);
        let document_iri = self.locators.resource(&self.allocator.new_id());
        let text = document.text();

        let mut graph = GraphBuilder::new();
        let document_span = Span::new(0, text.chars().count());

        graph
            .add(&document_iri, &voc::rdf_type(), voc::nif_context())
            .add(&document_iri, &voc::rdf_type(), voc::nif_string());
        emit_string_attributes(&mut graph, &document_iri, text, document_span, &graph_iri);
        graph
            .add(&document_iri, &voc::schema_name(), Literal::string(document.name()))
            .add(&document_iri, &voc::nif_pred_lang(), document.language().lexvo_iri());

        let mut paragraphs = Vec::new();
        let mut document_cursor = OffsetLocator::new(text, SegmentKind::Paragraph);

        for paragraph_text in split_paragraphs(text) {
            let paragraph_span = document_cursor.locate(paragraph_text)?;
            let paragraph_iri = self.locators.resource(&self.allocator.new_id());

            graph
                .add(&paragraph_iri, &voc::rdf_type(), voc::nif_paragraph())
                .add(&paragraph_iri, &voc::rdf_type(), voc::nif_context())
                .add(&paragraph_iri, &voc::rdf_type(), voc::nif_string())
                .add(&paragraph_iri, &voc::nif_reference_context(), document_iri.clone());
            emit_string_attributes(&mut graph, &paragraph_iri, paragraph_text, paragraph_span, &graph_iri);

            let mut sentences = Vec::new();
            let mut paragraph_cursor = OffsetLocator::new(paragraph_text, SegmentKind::Sentence);

            for sentence_text in split_sentences(paragraph_text) {
                let sentence_span = paragraph_cursor
                    .locate(sentence_text)?
                    .shift(paragraph_span.begin);
                let sentence_iri = self.locators.resource(&self.allocator.new_id());

                graph
                    .add(&sentence_iri, &voc::rdf_type(), voc::nif_sentence())
                    .add(&sentence_iri, &voc::rdf_type(), voc::nif_string())
                    .add(&sentence_iri, &voc::nif_reference_context(), paragraph_iri.clone());
                emit_string_attributes(&mut graph, &sentence_iri, sentence_text, sentence_span, &graph_iri);

                sentences.push(SentenceNode {
                    iri: sentence_iri,
                    text: sentence_text.to_string(),
                    span: sentence_span,
                });
            }

            debug!(
                "Paragraph {} at [{}, {}) has {} sentences",
                paragraphs.len(),
                paragraph_span.begin,
                paragraph_span.end,
                sentences.len()
            );

            paragraphs.push(ParagraphNode {
                iri: paragraph_iri,
                text: paragraph_text.to_string(),
                span: paragraph_span,
                sentences,
            });
        }

        let graph = graph.build();
        let annotated = AnnotatedDocument {
            graph,
            graph_id,
            graph_iri,
            document_iri,
            paragraphs,
        };

        info!(
            "Annotated '{}' into graph {}: {} paragraphs, {} sentences, {} triples",
            document.name(),
            annotated.graph_iri.as_str(),
            annotated.paragraphs.len(),
            annotated.sentence_count(),
            annotated.graph.len()
        );

        Ok(annotated)
    }
}

/// String content, span and graph membership shared by every node
fn emit_string_attributes(graph: &mut GraphBuilder, node: &Iri, text: &str, span: Span, graph_iri: &Iri) {
    graph
        .add(node, &voc::nif_is_string(), Literal::string(text))
        .add(node, &voc::nif_begin_index(), Literal::int(span.begin))
        .add(node, &voc::nif_end_index(), Literal::int(span.end))
        .add(node, &voc::rdfs_is_defined_by(), graph_iri.clone());
}
