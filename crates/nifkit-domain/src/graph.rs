//! Annotation graphs
//!
//! A graph is accumulated through an append-only [`GraphBuilder`] and then
//! frozen into an [`AnnotationGraph`]. Nothing can observe a half-built
//! graph: the builder is consumed by [`GraphBuilder::build`].

use std::collections::HashSet;

use crate::rdf::{Iri, Term, Triple};

/// The complete statement set produced for one processing request
///
/// Statements keep their insertion order so serialization is reproducible.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AnnotationGraph {
    triples: Vec<Triple>,
}

impl AnnotationGraph {
    /// Number of statements
    pub fn len(&self) -> usize {
        self.triples.len()
    }

    /// Whether the graph holds no statements
    pub fn is_empty(&self) -> bool {
        self.triples.is_empty()
    }

    /// Statements in emission order
    pub fn triples(&self) -> &[Triple] {
        &self.triples
    }

    /// Iterate statements in emission order
    pub fn iter(&self) -> impl Iterator<Item = &Triple> {
        self.triples.iter()
    }

    /// Distinct subjects in order of first appearance
    pub fn subjects(&self) -> Vec<&Iri> {
        let mut seen = HashSet::new();
        self.triples
            .iter()
            .map(|t| &t.subject)
            .filter(|s| seen.insert(*s))
            .collect()
    }

    /// Objects of every statement with the given subject and predicate
    pub fn objects<'a>(&'a self, subject: &Iri, predicate: &Iri) -> impl Iterator<Item = &'a Term> + 'a {
        let subject = subject.clone();
        let predicate = predicate.clone();
        self.triples
            .iter()
            .filter(move |t| t.subject == subject && t.predicate == predicate)
            .map(|t| &t.object)
    }

    /// The single object for a subject/predicate pair, if exactly one exists
    pub fn object(&self, subject: &Iri, predicate: &Iri) -> Option<&Term> {
        let mut objects = self.objects(subject, predicate);
        let first = objects.next()?;
        match objects.next() {
            Some(_) => None,
            None => Some(first),
        }
    }

    /// Serialize the whole graph as an N-Triples document
    pub fn to_ntriples(&self) -> String {
        let mut out = String::new();
        for triple in &self.triples {
            out.push_str(&triple.to_string());
            out.push('\n');
        }
        out
    }
}

impl<'a> IntoIterator for &'a AnnotationGraph {
    type Item = &'a Triple;
    type IntoIter = std::slice::Iter<'a, Triple>;

    fn into_iter(self) -> Self::IntoIter {
        self.triples.iter()
    }
}

/// Append-only accumulator for an [`AnnotationGraph`]
///
/// # Examples
///
/// ```
/// use nifkit_domain::{GraphBuilder, Iri, Literal};
///
/// let s = Iri::new("http://ex.org/s").unwrap();
/// let p = Iri::new("http://ex.org/p").unwrap();
///
/// let mut builder = GraphBuilder::new();
/// builder.add(&s, &p, Literal::string("o"));
/// let graph = builder.build();
///
/// assert_eq!(graph.len(), 1);
/// ```
#[derive(Debug, Default)]
pub struct GraphBuilder {
    triples: Vec<Triple>,
}

impl GraphBuilder {
    /// Create an empty builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one statement
    pub fn add(&mut self, subject: &Iri, predicate: &Iri, object: impl Into<Term>) -> &mut Self {
        self.triples
            .push(Triple::new(subject.clone(), predicate.clone(), object));
        self
    }

    /// Number of statements accumulated so far
    pub fn len(&self) -> usize {
        self.triples.len()
    }

    /// Whether nothing has been added yet
    pub fn is_empty(&self) -> bool {
        self.triples.is_empty()
    }

    /// Freeze the accumulated statements into a graph
    pub fn build(self) -> AnnotationGraph {
        AnnotationGraph {
            triples: self.triples,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rdf::Literal;

    fn iri(s: &str) -> Iri {
        Iri::new(s).unwrap()
    }

    fn sample() -> AnnotationGraph {
        let a = iri("http://ex.org/a");
        let b = iri("http://ex.org/b");
        let p = iri("http://ex.org/p");
        let q = iri("http://ex.org/q");

        let mut builder = GraphBuilder::new();
        builder
            .add(&a, &p, Literal::string("one"))
            .add(&b, &p, a.clone())
            .add(&a, &q, Literal::int(7))
            .add(&b, &q, Literal::int(1))
            .add(&b, &q, Literal::int(2));
        builder.build()
    }

    #[test]
    fn test_builder_preserves_order() {
        let graph = sample();
        assert_eq!(graph.len(), 5);
        assert_eq!(graph.triples()[0].subject.as_str(), "http://ex.org/a");
        assert_eq!(graph.triples()[1].subject.as_str(), "http://ex.org/b");
    }

    #[test]
    fn test_subjects_distinct_in_order() {
        let graph = sample();
        let subjects: Vec<&str> = graph.subjects().iter().map(|s| s.as_str()).collect();
        assert_eq!(subjects, vec!["http://ex.org/a", "http://ex.org/b"]);
    }

    #[test]
    fn test_object_lookup() {
        let graph = sample();
        let a = iri("http://ex.org/a");
        let b = iri("http://ex.org/b");
        let q = iri("http://ex.org/q");

        assert_eq!(graph.object(&a, &q).and_then(|t| t.as_literal()).and_then(|l| l.as_int()), Some(7));
        // Two objects means no single answer
        assert!(graph.object(&b, &q).is_none());
        assert_eq!(graph.objects(&b, &q).count(), 2);
    }

    #[test]
    fn test_to_ntriples() {
        let graph = sample();
        let nt = graph.to_ntriples();
        assert_eq!(nt.lines().count(), 5);
        assert!(nt.starts_with("<http://ex.org/a> <http://ex.org/p> \"one\" .\n"));
        assert!(nt.lines().all(|line| line.ends_with(" .")));
    }

    #[test]
    fn test_empty_graph() {
        let graph = GraphBuilder::new().build();
        assert!(graph.is_empty());
        assert_eq!(graph.to_ntriples(), "");
    }
}
