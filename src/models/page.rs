// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Page data structures.
//!
//! A page is one user-authored unit: a title, a subtitle, an optional media
//! reference, the paragraphs to draw from and the bounds of the number
//! generator.

use serde::{Deserialize, Serialize};

/// Title used when the user leaves the title blank.
pub const UNTITLED: &str = "Untitled Page";

/// Paragraph substituted when a page would otherwise have none.
pub const EMPTY_PARAGRAPHS_PLACEHOLDER: &str = "Please enter at least one paragraph.";

/// Separator between paragraphs in the editor text.
pub const PARAGRAPH_SEPARATOR: &str = "\n\n";

/// One page of content.
///
/// Keys missing from a stored page fall back to the default page's values;
/// unknown keys are rejected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Page {
    pub title: String,
    pub subtitle: String,
    pub media_path: String,
    pub paragraphs: Vec<String>,
    pub random_min: i64,
    pub random_max: i64,
}

impl Default for Page {
    fn default() -> Self {
        Self {
            title: "Sample Page".to_string(),
            subtitle: "Subtitle".to_string(),
            media_path: String::new(),
            paragraphs: vec![
                "Write your description here. Separate paragraphs with a blank line.".to_string(),
                "Click \"Pick Paragraph\" to cycle through the paragraphs and draw one.".to_string(),
            ],
            random_min: 1,
            random_max: 10,
        }
    }
}

impl Page {
    /// Create a default page titled after its position in the collection.
    pub fn numbered(number: usize) -> Self {
        Self {
            title: format!("Page {}", number),
            ..Self::default()
        }
    }

    /// Drop blank paragraphs and replace an empty list with the placeholder.
    ///
    /// Returns `true` if the placeholder was inserted.
    pub fn ensure_paragraphs(&mut self) -> bool {
        self.paragraphs.retain(|paragraph| !paragraph.trim().is_empty());
        if self.paragraphs.is_empty() {
            self.paragraphs = vec![EMPTY_PARAGRAPHS_PLACEHOLDER.to_string()];
            true
        } else {
            false
        }
    }

    /// Paragraphs joined back into editor text.
    pub fn paragraphs_text(&self) -> String {
        self.paragraphs.join(PARAGRAPH_SEPARATOR)
    }

    /// Label for the page list.
    pub fn label(&self, index: usize) -> String {
        if self.title.is_empty() {
            format!("Page {}", index + 1)
        } else {
            self.title.clone()
        }
    }
}

/// Split editor text into trimmed, non-empty paragraphs.
pub fn split_paragraphs(text: &str) -> Vec<String> {
    text.split(PARAGRAPH_SEPARATOR)
        .map(str::trim)
        .filter(|block| !block.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_page() {
        let page = Page::default();
        assert_eq!(page.paragraphs.len(), 2);
        assert_eq!((page.random_min, page.random_max), (1, 10));
        assert!(page.media_path.is_empty());
    }

    #[test]
    fn test_split_paragraphs_drops_blank_blocks() {
        let text = "  first  \n\n\n\nsecond\nline\n\n   \n\nthird\n";
        assert_eq!(
            split_paragraphs(text),
            vec!["first", "second\nline", "third"]
        );
    }

    #[test]
    fn test_split_paragraphs_empty_input() {
        assert!(split_paragraphs("").is_empty());
        assert!(split_paragraphs("\n\n  \n\n").is_empty());
    }

    #[test]
    fn test_ensure_paragraphs_inserts_single_placeholder() {
        let mut page = Page {
            paragraphs: Vec::new(),
            ..Page::default()
        };
        assert!(page.ensure_paragraphs());
        assert_eq!(page.paragraphs, vec![EMPTY_PARAGRAPHS_PLACEHOLDER]);
        assert!(!page.ensure_paragraphs());
    }

    #[test]
    fn test_ensure_paragraphs_drops_blank_entries() {
        let mut page = Page {
            paragraphs: vec!["".to_string(), "  \n ".to_string()],
            ..Page::default()
        };
        assert!(page.ensure_paragraphs());
        assert_eq!(page.paragraphs, vec![EMPTY_PARAGRAPHS_PLACEHOLDER]);

        let mut page = Page {
            paragraphs: vec![" ".to_string(), "kept".to_string()],
            ..Page::default()
        };
        assert!(!page.ensure_paragraphs());
        assert_eq!(page.paragraphs, vec!["kept"]);
    }

    #[test]
    fn test_missing_keys_take_defaults() {
        let page: Page = serde_json::from_str(r#"{"title": "Only title"}"#).unwrap();
        assert_eq!(page.title, "Only title");
        assert_eq!(page.random_max, 10);
        assert_eq!(page.paragraphs, Page::default().paragraphs);
    }

    #[test]
    fn test_unknown_keys_rejected() {
        let result: Result<Page, _> = serde_json::from_str(r#"{"title": "x", "colour": "red"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_label_falls_back_to_position() {
        let page = Page {
            title: String::new(),
            ..Page::default()
        };
        assert_eq!(page.label(2), "Page 3");
        assert_eq!(Page::numbered(4).label(0), "Page 4");
    }
}
