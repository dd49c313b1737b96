//! Offset recovery for segments within their parent text

use nifkit_domain::Span;

use crate::error::{AnnotatorError, SegmentKind};

/// Left-to-right cursor over a parent text
///
/// Each call to [`OffsetLocator::locate`] finds the first occurrence of a
/// segment at or after the cursor and moves the cursor past it, so a segment
/// that repeats verbatim is placed at its own occurrence rather than the
/// first one in the text.
///
/// The search runs on byte positions; spans are reported in characters.
/// The character cursor is advanced incrementally, so a whole document is
/// located in a single pass.
///
/// # Examples
///
/// ```
/// use nifkit_annotator::{OffsetLocator, SegmentKind};
/// use nifkit_domain::Span;
///
/// let mut locator = OffsetLocator::new("Go now. Go now.", SegmentKind::Sentence);
/// assert_eq!(locator.locate("Go now.").unwrap(), Span::new(0, 7));
/// assert_eq!(locator.locate("Go now.").unwrap(), Span::new(8, 15));
/// assert!(locator.locate("Go now.").is_err());
/// ```
#[derive(Debug, Clone)]
pub struct OffsetLocator<'a> {
    parent: &'a str,
    kind: SegmentKind,
    byte_cursor: usize,
    char_cursor: usize,
}

impl<'a> OffsetLocator<'a> {
    /// Start a cursor at the beginning of `parent`
    pub fn new(parent: &'a str, kind: SegmentKind) -> Self {
        Self {
            parent,
            kind,
            byte_cursor: 0,
            char_cursor: 0,
        }
    }

    /// Current cursor position in characters
    pub fn cursor(&self) -> usize {
        self.char_cursor
    }

    /// Locate the next occurrence of `segment` and advance past it
    ///
    /// # Errors
    /// Returns [`AnnotatorError::SegmentNotFound`] if `segment` is empty or
    /// does not occur at or after the cursor. The cursor is left unchanged.
    pub fn locate(&mut self, segment: &str) -> Result<Span, AnnotatorError> {
        let found = if segment.is_empty() {
            None
        } else {
            self.parent[self.byte_cursor..].find(segment)
        };

        let Some(relative) = found else {
            return Err(AnnotatorError::SegmentNotFound {
                kind: self.kind,
                segment: segment.to_string(),
                cursor: self.char_cursor,
            });
        };

        let start_byte = self.byte_cursor + relative;
        let begin = self.char_cursor + self.parent[self.byte_cursor..start_byte].chars().count();
        let end = begin + segment.chars().count();

        self.byte_cursor = start_byte + segment.len();
        self.char_cursor = end;

        Ok(Span::new(begin, end))
    }
}
