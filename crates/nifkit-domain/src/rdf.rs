//! RDF statement model
//!
//! Only what the NIF annotator emits: IRIs, plain and datatyped literals,
//! and subject/predicate/object triples. `Display` renders every type in
//! N-Triples syntax, which is also valid inside a SPARQL `INSERT DATA` block.

use std::fmt;

use crate::vocabulary;

/// An absolute IRI
///
/// Construction rejects characters that N-Triples does not allow inside
/// `<...>`, so a rendered `Iri` can always be embedded in a request body.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Iri(String);

impl Iri {
    /// Create a new IRI
    ///
    /// # Errors
    /// Returns error if the value is empty, has no scheme, or contains
    /// whitespace, control characters or any of `<>"{}|^`\`.
    ///
    /// # Examples
    ///
    /// ```
    /// use nifkit_domain::Iri;
    ///
    /// let iri = Iri::new("http://example.org/doc").unwrap();
    /// assert_eq!(iri.to_string(), "<http://example.org/doc>");
    ///
    /// assert!(Iri::new("not an iri").is_err());
    /// ```
    pub fn new(value: impl Into<String>) -> Result<Self, String> {
        let value = value.into();
        if value.is_empty() {
            return Err("IRI cannot be empty".to_string());
        }
        if let Some(bad) = value
            .chars()
            .find(|c| c.is_control() || c.is_whitespace() || "<>\"{}|^`\\".contains(*c))
        {
            return Err(format!("IRI '{}' contains invalid character {:?}", value, bad));
        }
        match value.find(':') {
            Some(idx) if idx > 0 => Ok(Self(value)),
            _ => Err(format!("IRI '{}' has no scheme", value)),
        }
    }

    /// Wrap a value already known to be a valid IRI.
    pub(crate) fn from_trusted(value: String) -> Self {
        debug_assert!(Self::new(value.clone()).is_ok(), "untrusted IRI: {}", value);
        Self(value)
    }

    /// Get the IRI as a string, without angle brackets
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Iri {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<{}>", self.0)
    }
}

/// A literal value
///
/// Strings are emitted as plain literals; integers carry an explicit
/// `xsd:int` datatype.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Literal {
    lexical: String,
    datatype: Option<Iri>,
}

impl Literal {
    /// Create a plain string literal
    pub fn string(value: impl Into<String>) -> Self {
        Self {
            lexical: value.into(),
            datatype: None,
        }
    }

    /// Create an `xsd:int` literal
    pub fn int(value: usize) -> Self {
        Self {
            lexical: value.to_string(),
            datatype: Some(vocabulary::xsd_int()),
        }
    }

    /// Lexical form of the literal
    pub fn lexical(&self) -> &str {
        &self.lexical
    }

    /// Datatype IRI, `None` for plain literals
    pub fn datatype(&self) -> Option<&Iri> {
        self.datatype.as_ref()
    }

    /// Parse the lexical form as an integer, if the literal is `xsd:int`
    pub fn as_int(&self) -> Option<usize> {
        match &self.datatype {
            Some(dt) if *dt == vocabulary::xsd_int() => self.lexical.parse().ok(),
            _ => None,
        }
    }
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("\"")?;
        for c in self.lexical.chars() {
            match c {
                '"' => f.write_str("\\\"")?,
                '\\' => f.write_str("\\\\")?,
                '\n' => f.write_str("\\n")?,
                '\r' => f.write_str("\\r")?,
                '\t' => f.write_str("\\t")?,
                '\u{8}' => f.write_str("\\b")?,
                '\u{c}' => f.write_str("\\f")?,
                c => write!(f, "{}", c)?,
            }
        }
        f.write_str("\"")?;
        if let Some(datatype) = &self.datatype {
            write!(f, "^^{}", datatype)?;
        }
        Ok(())
    }
}

/// Object position of a triple
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Term {
    /// Reference to another resource
    Iri(Iri),
    /// Literal value
    Literal(Literal),
}

impl Term {
    /// The IRI, if this term is one
    pub fn as_iri(&self) -> Option<&Iri> {
        match self {
            Term::Iri(iri) => Some(iri),
            Term::Literal(_) => None,
        }
    }

    /// The literal, if this term is one
    pub fn as_literal(&self) -> Option<&Literal> {
        match self {
            Term::Literal(literal) => Some(literal),
            Term::Iri(_) => None,
        }
    }
}

impl From<Iri> for Term {
    fn from(iri: Iri) -> Self {
        Term::Iri(iri)
    }
}

impl From<Literal> for Term {
    fn from(literal: Literal) -> Self {
        Term::Literal(literal)
    }
}

impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Term::Iri(iri) => iri.fmt(f),
            Term::Literal(literal) => literal.fmt(f),
        }
    }
}

/// A single subject/predicate/object statement
///
/// Subjects are always IRIs; the annotator never mints blank nodes.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Triple {
    /// Subject resource
    pub subject: Iri,
    /// Predicate
    pub predicate: Iri,
    /// Object resource or literal
    pub object: Term,
}

impl Triple {
    /// Create a new triple
    pub fn new(subject: Iri, predicate: Iri, object: impl Into<Term>) -> Self {
        Self {
            subject,
            predicate,
            object: object.into(),
        }
    }
}

impl fmt::Display for Triple {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {} .", self.subject, self.predicate, self.object)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_iri_validation() {
        assert!(Iri::new("http://localhost:8080/resource/abc").is_ok());
        assert!(Iri::new("urn:x").is_ok());
        assert!(Iri::new("").is_err());
        assert!(Iri::new("relative/path").is_err());
        assert!(Iri::new(":nope").is_err());
        assert!(Iri::new("http://a b").is_err());
        assert!(Iri::new("http://a>b").is_err());
        assert!(Iri::new("http://a\nb").is_err());
    }

    #[test]
    fn test_plain_literal_escaping() {
        let literal = Literal::string("He said \"hi\"\\\nthen\tleft\r");
        assert_eq!(
            literal.to_string(),
            r#""He said \"hi\"\\\nthen\tleft\r""#
        );
    }

    #[test]
    fn test_plain_literal_keeps_unicode() {
        let literal = Literal::string("Grüße, Straße");
        assert_eq!(literal.to_string(), "\"Grüße, Straße\"");
    }

    #[test]
    fn test_int_literal_is_typed() {
        let literal = Literal::int(42);
        assert_eq!(
            literal.to_string(),
            "\"42\"^^<http://www.w3.org/2001/XMLSchema#int>"
        );
        assert_eq!(literal.as_int(), Some(42));
        assert_eq!(Literal::string("42").as_int(), None);
    }

    #[test]
    fn test_triple_display() {
        let triple = Triple::new(
            Iri::new("http://ex.org/s").unwrap(),
            Iri::new("http://ex.org/p").unwrap(),
            Literal::string("o"),
        );
        assert_eq!(triple.to_string(), "<http://ex.org/s> <http://ex.org/p> \"o\" .");
    }
}
