//! String transformations and counters behind the text operations.

/// Reverses `text` by code point, so multi-byte characters stay intact.
pub fn reverse(text: &str) -> String {
    text.chars().rev().collect()
}

/// Converts `text` to uppercase using the full Unicode case mapping.
pub fn uppercase(text: &str) -> String {
    text.to_uppercase()
}

/// Counts line records in `text`.
///
/// A record ends at `\n`, `\r\n` or a lone `\r`. A trailing record without a
/// terminator still counts, and empty input has no lines.
pub fn count_lines(text: &str) -> usize {
    let mut lines = 0;
    let mut chars = text.chars().peekable();
    let mut open = false;

    while let Some(ch) = chars.next() {
        match ch {
            '\n' => {
                lines += 1;
                open = false;
            }
            '\r' => {
                chars.next_if_eq(&'\n');
                lines += 1;
                open = false;
            }
            _ => open = true,
        }
    }

    if open {
        lines += 1;
    }
    lines
}

/// Counts tokens separated by runs of Unicode whitespace.
pub fn count_words(text: &str) -> usize {
    text.split_whitespace().count()
}
