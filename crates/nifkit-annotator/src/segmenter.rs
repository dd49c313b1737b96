//! Paragraph and sentence segmentation
//!
//! Both splitters are plain punctuation/whitespace heuristics and apply the
//! same rules to every supported language. Every returned segment is a
//! trimmed, non-empty slice of the input, so it can always be found again in
//! its parent text.

use std::sync::LazyLock;

use regex::Regex;

/// One or more blank lines: a newline, optional whitespace, a newline
static PARAGRAPH_BREAK: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\n\s*\n").expect("paragraph break pattern is valid")
});

/// Split text into paragraphs separated by blank lines
///
/// Leading and trailing whitespace is trimmed from each paragraph and empty
/// paragraphs are dropped. Text without a blank line yields one paragraph;
/// whitespace-only text yields none.
///
/// # Examples
///
/// ```
/// use nifkit_annotator::split_paragraphs;
///
/// let text = "First one.\n\n  \nSecond one.";
/// assert_eq!(split_paragraphs(text), vec!["First one.", "Second one."]);
/// ```
pub fn split_paragraphs(text: &str) -> Vec<&str> {
    PARAGRAPH_BREAK
        .split(text.trim())
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .collect()
}

/// Split a paragraph into sentences
///
/// A run of `.`, `!` or `?` followed by whitespace ends a sentence; the
/// punctuation stays with the sentence. The remainder after the last break
/// is the final sentence, terminated or not.
///
/// # Examples
///
/// ```
/// use nifkit_annotator::split_sentences;
///
/// let sentences = split_sentences("Really?! Yes. No punctuation here");
/// assert_eq!(sentences, vec!["Really?!", "Yes.", "No punctuation here"]);
/// ```
pub fn split_sentences(paragraph: &str) -> Vec<&str> {
    let text = paragraph.trim();
    let mut sentences = Vec::new();
    let mut start = 0;
    let mut after_terminal = false;
    let mut chars = text.char_indices().peekable();

    while let Some((idx, c)) = chars.next() {
        if after_terminal && c.is_whitespace() {
            sentences.push(text[start..idx].trim());

            // Swallow the rest of the whitespace run
            let mut next_start = idx + c.len_utf8();
            while let Some(&(j, d)) = chars.peek() {
                if !d.is_whitespace() {
                    break;
                }
                next_start = j + d.len_utf8();
                chars.next();
            }
            start = next_start;
            after_terminal = false;
            continue;
        }
        after_terminal = is_terminal(c);
    }
    sentences.push(text[start..].trim());

    sentences.retain(|s| !s.is_empty());
    sentences
}

fn is_terminal(c: char) -> bool {
    matches!(c, '.' | '!' | '?')
}
