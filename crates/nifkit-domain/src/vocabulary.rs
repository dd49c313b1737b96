//! Fixed vocabulary used by the annotation graph
//!
//! The literal spellings are those of NIF 2.0 core plus RDF, RDFS, XSD,
//! schema.org and lexvo. Downstream consumers of the triple store query by
//! these names, so they are not configurable.

use crate::rdf::Iri;

/// NIF 2.0 core namespace
pub const NIF: &str = "http://persistence.uni-leipzig.de/nlp2rdf/ontologies/nif-core#";
/// RDF namespace
pub const RDF: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#";
/// RDFS namespace
pub const RDFS: &str = "http://www.w3.org/2000/01/rdf-schema#";
/// XML Schema datatypes namespace
pub const XSD: &str = "http://www.w3.org/2001/XMLSchema#";
/// schema.org namespace
pub const SCHEMA: &str = "http://schema.org/";
/// lexvo ISO 639-3 language namespace
pub const LEXVO: &str = "http://lexvo.org/id/iso639-3/";

/// Prefix declarations for the namespaces above, in SPARQL syntax order
pub const PREFIXES: [(&str, &str); 6] = [
    ("nif", NIF),
    ("rdf", RDF),
    ("rdfs", RDFS),
    ("xsd", XSD),
    ("schema", SCHEMA),
    ("lexvo", LEXVO),
];

fn term(namespace: &str, local: &str) -> Iri {
    Iri::from_trusted(format!("{}{}", namespace, local))
}

/// `rdf:type`
pub fn rdf_type() -> Iri {
    term(RDF, "type")
}

/// `nif:Context`, the role of a text unit other spans are offset against
pub fn nif_context() -> Iri {
    term(NIF, "Context")
}

/// `nif:String`
pub fn nif_string() -> Iri {
    term(NIF, "String")
}

/// `nif:Paragraph`
pub fn nif_paragraph() -> Iri {
    term(NIF, "Paragraph")
}

/// `nif:Sentence`
pub fn nif_sentence() -> Iri {
    term(NIF, "Sentence")
}

/// `nif:isString`, the full string content of a node
pub fn nif_is_string() -> Iri {
    term(NIF, "isString")
}

/// `nif:beginIndex`
pub fn nif_begin_index() -> Iri {
    term(NIF, "beginIndex")
}

/// `nif:endIndex`
pub fn nif_end_index() -> Iri {
    term(NIF, "endIndex")
}

/// `nif:referenceContext`, pointing at the parent context
pub fn nif_reference_context() -> Iri {
    term(NIF, "referenceContext")
}

/// `nif:predLang`, predominant language of the document
pub fn nif_pred_lang() -> Iri {
    term(NIF, "predLang")
}

/// `rdfs:isDefinedBy`, membership in the request's named graph
pub fn rdfs_is_defined_by() -> Iri {
    term(RDFS, "isDefinedBy")
}

/// `schema:name`, the document display name
pub fn schema_name() -> Iri {
    term(SCHEMA, "name")
}

/// `xsd:int`
pub fn xsd_int() -> Iri {
    term(XSD, "int")
}

/// lexvo language resource for an ISO 639-3 code
pub fn lexvo(code: &str) -> Iri {
    term(LEXVO, code)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vocabulary_terms_are_valid_iris() {
        for iri in [
            rdf_type(),
            nif_context(),
            nif_string(),
            nif_paragraph(),
            nif_sentence(),
            nif_is_string(),
            nif_begin_index(),
            nif_end_index(),
            nif_reference_context(),
            nif_pred_lang(),
            rdfs_is_defined_by(),
            schema_name(),
            xsd_int(),
            lexvo("eng"),
        ] {
            assert!(Iri::new(iri.as_str()).is_ok(), "{} should be valid", iri);
        }
    }

    #[test]
    fn test_nif_spelling() {
        assert_eq!(
            nif_reference_context().as_str(),
            "http://persistence.uni-leipzig.de/nlp2rdf/ontologies/nif-core#referenceContext"
        );
        assert_eq!(lexvo("deu").as_str(), "http://lexvo.org/id/iso639-3/deu");
    }
}
