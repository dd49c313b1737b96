//! Character spans

/// A `[begin, end)` offset pair, counted in Unicode scalar values
///
/// Offsets of paragraphs and sentences are always absolute to the document
/// text, never relative to the enclosing paragraph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Span {
    /// Inclusive start offset
    pub begin: usize,
    /// Exclusive end offset
    pub end: usize,
}

impl Span {
    /// Create a new span
    pub fn new(begin: usize, end: usize) -> Self {
        debug_assert!(begin <= end, "span begin {} after end {}", begin, end);
        Self { begin, end }
    }

    /// Number of characters covered
    pub fn len(&self) -> usize {
        self.end - self.begin
    }

    /// Whether the span covers no characters
    pub fn is_empty(&self) -> bool {
        self.begin == self.end
    }

    /// Translate by `offset` characters
    pub fn shift(&self, offset: usize) -> Self {
        Self::new(self.begin + offset, self.end + offset)
    }

    /// Whether `other` lies entirely within this span
    pub fn contains(&self, other: &Span) -> bool {
        self.begin <= other.begin && other.end <= self.end
    }

    /// Whether this span ends at or before `other` begins
    pub fn precedes(&self, other: &Span) -> bool {
        self.end <= other.begin
    }

    /// Extract the covered characters from `text`
    ///
    /// Returns `None` if the span runs past the end of `text`.
    pub fn slice<'a>(&self, text: &'a str) -> Option<&'a str> {
        let mut indices = text.char_indices().map(|(i, _)| i).chain(std::iter::once(text.len()));
        let start = indices.nth(self.begin)?;
        let end = if self.is_empty() {
            start
        } else {
            indices.nth(self.len() - 1)?
        };
        Some(&text[start..end])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_span_basics() {
        let span = Span::new(3, 8);
        assert_eq!(span.len(), 5);
        assert!(!span.is_empty());
        assert_eq!(span.shift(10), Span::new(13, 18));
    }

    #[test]
    fn test_span_contains_and_precedes() {
        let outer = Span::new(0, 25);
        let first = Span::new(0, 12);
        let second = Span::new(13, 25);

        assert!(outer.contains(&first));
        assert!(outer.contains(&second));
        assert!(!first.contains(&outer));
        assert!(first.precedes(&second));
        assert!(!second.precedes(&first));
    }

    #[test]
    fn test_span_slice_counts_chars() {
        let text = "Grüße aus Köln.";
        assert_eq!(Span::new(0, 5).slice(text), Some("Grüße"));
        assert_eq!(Span::new(10, 15).slice(text), Some("Köln."));
        assert_eq!(Span::new(15, 15).slice(text), Some(""));
        assert_eq!(Span::new(10, 16).slice(text), None);
        assert_eq!(Span::new(16, 16).slice(text), None);
    }
}
