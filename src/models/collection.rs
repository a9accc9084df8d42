// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! The ordered page collection.
//!
//! Storage order is display order. The collection never becomes empty:
//! decoding an empty array fails and removing the last page is refused.

use super::page::Page;
use crate::error::CollectionError;
use serde::{Deserialize, Serialize};

/// Ordered, non-empty list of pages persisted as a whole.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Page>", into = "Vec<Page>")]
pub struct PageCollection {
    pages: Vec<Page>,
}

impl Default for PageCollection {
    fn default() -> Self {
        Self {
            pages: vec![Page::default()],
        }
    }
}

impl TryFrom<Vec<Page>> for PageCollection {
    type Error = CollectionError;

    fn try_from(mut pages: Vec<Page>) -> Result<Self, Self::Error> {
        if pages.is_empty() {
            return Err(CollectionError::Empty);
        }
        for (index, page) in pages.iter_mut().enumerate() {
            if page.ensure_paragraphs() {
                log::warn!("Page {} had no usable paragraphs, inserted placeholder", index + 1);
            }
        }
        Ok(Self { pages })
    }
}

impl From<PageCollection> for Vec<Page> {
    fn from(collection: PageCollection) -> Self {
        collection.pages
    }
}

impl PageCollection {
    pub fn len(&self) -> usize {
        self.pages.len()
    }

    pub fn get(&self, index: usize) -> Option<&Page> {
        self.pages.get(index)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut Page> {
        self.pages.get_mut(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Page> {
        self.pages.iter()
    }

    /// Clamp an index into the valid range.
    pub fn clamp_index(&self, index: usize) -> usize {
        index.min(self.pages.len() - 1)
    }

    /// Append a new default page and return its index.
    pub fn add_page(&mut self) -> usize {
        self.pages.push(Page::numbered(self.pages.len() + 1));
        self.pages.len() - 1
    }

    /// Remove the page at `index`, refusing to remove the last one.
    pub fn remove(&mut self, index: usize) -> Result<Page, CollectionError> {
        if self.pages.len() <= 1 {
            return Err(CollectionError::LastPage);
        }
        let index = self.clamp_index(index);
        Ok(self.pages.remove(index))
    }
}
