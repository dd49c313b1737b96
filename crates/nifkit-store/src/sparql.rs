//! Request body serialization
//!
//! Terms are rendered N-Triples style, which is valid inside SPARQL
//! `INSERT DATA` blocks as well, so the same statement lines feed both
//! write protocols.

use nifkit_domain::vocabulary::PREFIXES;
use nifkit_domain::{AnnotationGraph, Iri};

/// Build a single SPARQL Update that inserts the whole graph into `graph_iri`
///
/// ```text
/// PREFIX nif: <...>
/// ...
/// INSERT DATA {
///   GRAPH <g> {
///     <s> <p> <o> .
///   }
/// }
/// ```
pub fn insert_data(graph: &AnnotationGraph, graph_iri: &Iri) -> String {
    let mut body = String::new();

    for (prefix, namespace) in PREFIXES {
        body.push_str(&format!("PREFIX {}: <{}>\n", prefix, namespace));
    }

    body.push_str("\nINSERT DATA {\n");
    body.push_str(&format!("  GRAPH {} {{\n", graph_iri));
    for triple in graph {
        body.push_str("    ");
        body.push_str(&triple.to_string());
        body.push('\n');
    }
    body.push_str("  }\n}\n");

    body
}

/// Build an N-Triples document for the Graph Store protocol
pub fn ntriples(graph: &AnnotationGraph) -> String {
    graph.to_ntriples()
}
