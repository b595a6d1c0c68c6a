//! Word wrapping by display width

use textwrap::{Options as WrapOptions, WrapAlgorithm};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Wrap `text` into lines no wider than `width` display columns.
///
/// Breaks at whitespace; words longer than a line are split by character.
/// Explicit newlines are kept. Always returns at least one line.
pub fn wrap(text: &str, width: u16) -> Vec<String> {
    let options = WrapOptions::new(usize::from(width.max(1)))
        .wrap_algorithm(WrapAlgorithm::FirstFit)
        .break_words(true);
    let mut lines: Vec<String> = textwrap::wrap(text, options)
        .into_iter()
        .map(|line| line.into_owned())
        .collect();

    if lines.is_empty() {
        lines.push(String::new());
    }
    lines
}

/// Truncate to `width` columns, ending with `…` when cut
pub fn truncate(text: &str, width: u16) -> String {
    let width = usize::from(width);
    if text.width() <= width {
        return text.to_string();
    }
    let mut out = String::new();
    let mut used = 0;
    for ch in text.chars() {
        let w = ch.width().unwrap_or(0);
        if used + w + 1 > width {
            break;
        }
        out.push(ch);
        used += w;
    }
    if width > 0 {
        out.push('…');
    }
    out
}
