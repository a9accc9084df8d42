// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Text helpers for list labels.

/// Longest paragraph preview shown in the paragraph list, in characters.
pub const PREVIEW_CHARS: usize = 80;

/// Shorten a paragraph for display, appending "..." when cut.
pub fn truncate_preview(text: &str) -> String {
    match text.char_indices().nth(PREVIEW_CHARS) {
        Some((cut, _)) => format!("{}...", &text[..cut]),
        None => text.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_text_unchanged() {
        assert_eq!(truncate_preview("hello"), "hello");
        let exact = "x".repeat(PREVIEW_CHARS);
        assert_eq!(truncate_preview(&exact), exact);
    }

    #[test]
    fn test_long_text_cut_on_char_boundary() {
        let long = "段".repeat(PREVIEW_CHARS + 5);
        let preview = truncate_preview(&long);
        assert!(preview.ends_with("..."));
        assert_eq!(preview.chars().count(), PREVIEW_CHARS + 3);
    }
}
