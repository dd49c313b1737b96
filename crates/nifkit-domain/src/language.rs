//! Supported document languages

use crate::rdf::Iri;
use crate::vocabulary;

/// Language of a submitted document
///
/// Segmentation applies the same rules to every language; the tag only
/// selects the `nif:predLang` code recorded on the document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Language {
    /// English (`lexvo:eng`)
    #[default]
    English,

    /// German (`lexvo:deu`)
    German,
}

impl Language {
    /// All supported languages
    pub const ALL: [Language; 2] = [Language::English, Language::German];

    /// Get the language name as accepted in requests
    pub fn as_str(&self) -> &'static str {
        match self {
            Language::English => "english",
            Language::German => "german",
        }
    }

    /// Parse a language name (case-insensitive, surrounding whitespace ignored)
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "english" => Some(Language::English),
            "german" => Some(Language::German),
            _ => None,
        }
    }

    /// ISO 639-3 code
    pub fn iso639_3(&self) -> &'static str {
        match self {
            Language::English => "eng",
            Language::German => "deu",
        }
    }

    /// lexvo IRI used as the `nif:predLang` object
    pub fn lexvo_iri(&self) -> Iri {
        vocabulary::lexvo(self.iso639_3())
    }
}
