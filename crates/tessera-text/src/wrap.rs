#![forbid(unsafe_code)]

//! Width-correct line wrapping.
//!
//! Lines break on `\n` and between words. A word wider than the line is
//! split at grapheme boundaries, so emoji and combining sequences are never
//! cut in half.
//!
//! ```
//! use tessera_text::wrap::wrap_words;
//!
//! assert_eq!(wrap_words("Item 1", 18), vec!["Item 1"]);
//! assert_eq!(wrap_words("Item 1", 4), vec!["Item", "1"]);
//! ```

use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

/// Wrap `text` into lines at most `width` cells wide.
///
/// Empty text yields no lines. A `width` of 0 disables wrapping: only explicit
/// newlines split the text. A single grapheme wider than `width` still gets a
/// line of its own.
#[must_use]
pub fn wrap_words(text: &str, width: usize) -> Vec<String> {
    if text.is_empty() {
        return Vec::new();
    }
    if width == 0 {
        return text.split('\n').map(str::to_string).collect();
    }

    let mut lines = Vec::new();
    for paragraph in text.split('\n') {
        let mut current = String::new();
        let mut current_width = 0;

        for word in paragraph.split_whitespace() {
            let word_width = word.width();
            if !current.is_empty() {
                if current_width + 1 + word_width <= width {
                    current.push(' ');
                    current.push_str(word);
                    current_width += 1 + word_width;
                    continue;
                }
                lines.push(std::mem::take(&mut current));
            }

            current_width = if word_width <= width {
                current.push_str(word);
                word_width
            } else {
                split_long_word(word, width, &mut lines, &mut current)
            };
        }

        lines.push(current);
    }

    lines
}

/// Break `word` at grapheme boundaries. Full lines go to `lines`; the tail
/// is left in `current` and its width returned.
fn split_long_word(
    word: &str,
    width: usize,
    lines: &mut Vec<String>,
    current: &mut String,
) -> usize {
    let mut current_width = 0;
    for grapheme in word.graphemes(true) {
        let grapheme_width = grapheme.width();
        if current_width + grapheme_width > width && !current.is_empty() {
            lines.push(std::mem::take(current));
            current_width = 0;
        }
        current.push_str(grapheme);
        current_width += grapheme_width;
    }
    current_width
}

/// Display width of `text` in cells.
#[inline]
#[must_use]
pub fn display_width(text: &str) -> usize {
    text.width()
}

/// Longest prefix of `text` that fits in `max_width` cells.
///
/// Respects grapheme boundaries.
#[must_use]
pub fn truncate_to_width(text: &str, max_width: usize) -> &str {
    let mut end = 0;
    let mut current_width = 0;
    for (offset, grapheme) in text.grapheme_indices(true) {
        let grapheme_width = grapheme.width();
        if current_width + grapheme_width > max_width {
            break;
        }
        current_width += grapheme_width;
        end = offset + grapheme.len();
    }
    &text[..end]
}
