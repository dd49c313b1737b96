//! Identifiers and the locators built from them

use std::fmt;

use crate::rdf::Iri;

/// Unique identifier for a document, paragraph, sentence or named graph
///
/// Backed by a UUIDv7:
/// - 128-bit uniqueness without any shared counter or registry
/// - Chronological sortability, handy when browsing a store by graph
/// - RFC 9562-standard string form
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ResourceId(u128);

impl ResourceId {
    /// Generate a new UUIDv7-based ResourceId
    ///
    /// # Examples
    ///
    /// ```
    /// use nifkit_domain::ResourceId;
    ///
    /// let a = ResourceId::new();
    /// let b = ResourceId::new();
    /// assert_ne!(a, b);
    /// ```
    pub fn new() -> Self {
        Self(uuid::Uuid::now_v7().as_u128())
    }

    /// Create a ResourceId from a raw u128 value
    pub fn from_value(value: u128) -> Self {
        Self(value)
    }

    /// Parse a ResourceId from its hyphenated string form
    ///
    /// # Examples
    ///
    /// ```
    /// use nifkit_domain::ResourceId;
    ///
    /// let id = ResourceId::new();
    /// let parsed = ResourceId::from_string(&id.to_string()).unwrap();
    /// assert_eq!(id, parsed);
    /// ```
    pub fn from_string(s: &str) -> Result<Self, String> {
        uuid::Uuid::parse_str(s)
            .map(|u| Self(u.as_u128()))
            .map_err(|e| format!("Invalid resource id '{}': {}", s, e))
    }

    /// Get the raw u128 value
    pub fn value(&self) -> u128 {
        self.0
    }
}

impl Default for ResourceId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ResourceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", uuid::Uuid::from_u128(self.0))
    }
}

/// Source of fresh identifiers
///
/// Implementations must never hand out the same id twice and must not
/// require coordination between concurrent callers.
pub trait IdAllocator {
    /// Mint a new identifier
    fn new_id(&self) -> ResourceId;
}

/// Default allocator backed by UUIDv7
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidAllocator;

impl IdAllocator for UuidAllocator {
    fn new_id(&self) -> ResourceId {
        ResourceId::new()
    }
}

/// Builds resource and graph IRIs from identifiers
///
/// Both templates are pure functions of the base address and the id:
/// `{base}/resource/{id}` and `{base}/graph/{id}`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Locators {
    base: String,
}

impl Locators {
    /// Create locators rooted at `base` (trailing slashes are ignored)
    ///
    /// # Errors
    /// Returns error if `base` is not a valid absolute IRI
    ///
    /// # Examples
    ///
    /// ```
    /// use nifkit_domain::{Locators, ResourceId};
    ///
    /// let locators = Locators::new("http://localhost:8080/").unwrap();
    /// let id = ResourceId::from_value(1);
    /// assert_eq!(
    ///     locators.graph(&id).as_str(),
    ///     "http://localhost:8080/graph/00000000-0000-0000-0000-000000000001"
    /// );
    /// ```
    pub fn new(base: impl Into<String>) -> Result<Self, String> {
        let base = base.into();
        let base = base.trim_end_matches('/').to_string();
        Iri::new(base.clone())?;
        Ok(Self { base })
    }

    /// Base address without trailing slash
    pub fn base(&self) -> &str {
        &self.base
    }

    /// Locator for a document, paragraph or sentence node
    pub fn resource(&self, id: &ResourceId) -> Iri {
        Iri::from_trusted(format!("{}/resource/{}", self.base, id))
    }

    /// Locator for a named graph
    pub fn graph(&self, id: &ResourceId) -> Iri {
        Iri::from_trusted(format!("{}/graph/{}", self.base, id))
    }

    /// Whether `iri` was minted by [`Locators::resource`] under this base
    pub fn is_resource(&self, iri: &Iri) -> bool {
        iri.as_str()
            .strip_prefix(self.base.as_str())
            .is_some_and(|rest| rest.starts_with("/resource/"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resource_id_display_and_parse() {
        let id = ResourceId::new();
        let id_str = id.to_string();

        // 8-4-4-4-12 with hyphens
        assert_eq!(id_str.len(), 36);
        assert_eq!(ResourceId::from_string(&id_str).unwrap(), id);
    }

    #[test]
    fn test_resource_id_invalid_string() {
        assert!(ResourceId::from_string("not-a-valid-uuid").is_err());
        assert!(ResourceId::from_string("").is_err());
    }

    #[test]
    fn test_uuid_allocator_never_repeats() {
        let allocator = UuidAllocator;
        let mut seen = std::collections::HashSet::new();
        for _ in 0..1000 {
            assert!(seen.insert(allocator.new_id()));
        }
    }

    #[test]
    fn test_locator_templates() {
        let locators = Locators::new("http://localhost:8080").unwrap();
        let id = ResourceId::from_value(0xabc);

        assert_eq!(
            locators.resource(&id).as_str(),
            "http://localhost:8080/resource/00000000-0000-0000-0000-000000000abc"
        );
        assert_eq!(
            locators.graph(&id).as_str(),
            "http://localhost:8080/graph/00000000-0000-0000-0000-000000000abc"
        );
    }

    #[test]
    fn test_locators_are_pure() {
        let a = Locators::new("http://example.org/nif/").unwrap();
        let b = Locators::new("http://example.org/nif").unwrap();
        let id = ResourceId::new();

        assert_eq!(a, b);
        assert_eq!(a.resource(&id), b.resource(&id));
        assert_eq!(a.graph(&id), b.graph(&id));
    }

    #[test]
    fn test_invalid_base_rejected() {
        assert!(Locators::new("localhost:8080 base").is_err());
        assert!(Locators::new("").is_err());
    }

    #[test]
    fn test_is_resource() {
        let locators = Locators::new("http://localhost:8080").unwrap();
        let id = ResourceId::new();

        assert!(locators.is_resource(&locators.resource(&id)));
        assert!(!locators.is_resource(&locators.graph(&id)));
        assert!(!locators.is_resource(&Iri::new("http://elsewhere/resource/x").unwrap()));
    }
}
