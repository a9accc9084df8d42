// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Page editing state.
//!
//! Owns the in-memory collection, the index of the page being edited and the
//! text buffers behind the editor form. The editing flows write through the
//! page store after every change to the collection.

use crate::error::AppError;
use crate::io::store::PageStore;
use crate::models::{
    collection::PageCollection,
    page::{split_paragraphs, Page, UNTITLED},
};
use crate::selection::engine::parse_bound;

/// Text buffers bound to the editor widgets.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageForm {
    pub title: String,
    pub subtitle: String,
    pub media_path: String,
    pub paragraphs: String,
    pub random_min: String,
    pub random_max: String,
}

impl PageForm {
    pub fn from_page(page: &Page) -> Self {
        Self {
            title: page.title.clone(),
            subtitle: page.subtitle.clone(),
            media_path: page.media_path.clone(),
            paragraphs: page.paragraphs_text(),
            random_min: page.random_min.to_string(),
            random_max: page.random_max.to_string(),
        }
    }

    /// Paragraphs as currently typed.
    pub fn paragraph_items(&self) -> Vec<String> {
        split_paragraphs(&self.paragraphs)
    }
}

pub struct AppState {
    pages: PageCollection,
    current: usize,
    pub form: PageForm,
}

impl AppState {
    pub fn new(pages: PageCollection) -> Self {
        let form = pages.get(0).map(PageForm::from_page).unwrap_or_default();
        Self {
            pages,
            current: 0,
            form,
        }
    }

    pub fn pages(&self) -> &PageCollection {
        &self.pages
    }

    pub fn current_index(&self) -> usize {
        self.current
    }

    pub fn current_page(&self) -> Option<&Page> {
        self.pages.get(self.current)
    }

    /// Make `index` the edited page and reload the form. Unsaved form edits
    /// are discarded.
    pub fn select(&mut self, index: usize) {
        self.current = self.pages.clamp_index(index);
        if let Some(page) = self.pages.get(self.current) {
            self.form = PageForm::from_page(page);
        }
    }

    /// Copy the form into the current page.
    ///
    /// Both range bounds must parse; otherwise the page is left untouched.
    pub fn commit_form(&mut self) -> Result<(), AppError> {
        let random_min = parse_bound(&self.form.random_min)?;
        let random_max = parse_bound(&self.form.random_max)?;

        let title = match self.form.title.trim() {
            "" => UNTITLED.to_string(),
            title => title.to_string(),
        };

        if let Some(page) = self.pages.get_mut(self.current) {
            page.title = title;
            page.subtitle = self.form.subtitle.trim().to_string();
            page.media_path = self.form.media_path.trim().to_string();
            page.paragraphs = self.form.paragraph_items();
            page.ensure_paragraphs();
            page.random_min = random_min;
            page.random_max = random_max;
        }
        Ok(())
    }

    /// Commit the form and write the whole collection.
    pub fn save_current(&mut self, store: &PageStore) -> Result<(), AppError> {
        self.commit_form()?;
        store.save(&self.pages)?;
        Ok(())
    }

    /// Save the current page, then switch to `index`.
    pub fn switch_to(&mut self, index: usize, store: &PageStore) -> Result<(), AppError> {
        self.save_current(store)?;
        self.select(index);
        Ok(())
    }

    /// Save the current page, then append and select a new one.
    pub fn add_page(&mut self, store: &PageStore) -> Result<usize, AppError> {
        self.save_current(store)?;
        let index = self.pages.add_page();
        self.select(index);
        log::info!("Added page, total: {}", self.pages.len());
        Ok(index)
    }

    /// Delete the current page and select its predecessor.
    pub fn delete_current(&mut self, store: &PageStore) -> Result<(), AppError> {
        self.pages.remove(self.current)?;
        // The form follows `current` even when the write below fails.
        self.select(self.current.saturating_sub(1));
        store.save(&self.pages)?;
        log::info!("Deleted page, total: {}", self.pages.len());
        Ok(())
    }

    /// Replace the whole collection, as after an import.
    pub fn replace_pages(&mut self, pages: PageCollection, store: &PageStore) -> Result<(), AppError> {
        self.pages = pages;
        self.select(0);
        store.save(&self.pages)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{CollectionError, SelectionError};
    use crate::models::page::EMPTY_PARAGRAPHS_PLACEHOLDER;
    use tempfile::TempDir;

    fn setup() -> (TempDir, PageStore, AppState) {
        let dir = TempDir::new().unwrap();
        let store = PageStore::new(dir.path().join("pages.json"));
        let state = AppState::new(store.load().pages);
        (dir, store, state)
    }

    #[test]
    fn test_form_loads_first_page() {
        let (_dir, _store, state) = setup();
        assert_eq!(state.current_index(), 0);
        assert_eq!(state.form.random_min, "1");
        assert_eq!(state.form.random_max, "10");
        assert_eq!(state.form.paragraph_items().len(), 2);
    }

    #[test]
    fn test_save_applies_defaults() {
        let (_dir, store, mut state) = setup();
        state.form.title = "   ".to_string();
        state.form.subtitle = "  sub ".to_string();
        state.form.paragraphs = "\n\n   \n\n".to_string();
        state.save_current(&store).unwrap();

        let page = store.load().pages.get(0).cloned().unwrap();
        assert_eq!(page.title, UNTITLED);
        assert_eq!(page.subtitle, "sub");
        assert_eq!(page.paragraphs, vec![EMPTY_PARAGRAPHS_PLACEHOLDER]);
    }

    #[test]
    fn test_save_keeps_inverted_range() {
        let (_dir, store, mut state) = setup();
        state.form.random_min = "50".to_string();
        state.form.random_max = " -2".to_string();
        state.save_current(&store).unwrap();

        let page = store.load().pages.get(0).cloned().unwrap();
        assert_eq!((page.random_min, page.random_max), (50, -2));
    }

    #[test]
    fn test_invalid_range_blocks_save() {
        let (_dir, store, mut state) = setup();
        state.form.title = "Changed".to_string();
        state.form.random_max = "many".to_string();

        let result = state.save_current(&store);
        assert!(matches!(
            result,
            Err(AppError::Selection(SelectionError::InvalidRangeInput { .. }))
        ));
        assert_eq!(state.current_page().unwrap().title, "Sample Page");
        assert!(!store.path().exists());
    }

    #[test]
    fn test_add_switch_and_delete() {
        let (_dir, store, mut state) = setup();
        state.form.title = "First".to_string();

        assert_eq!(state.add_page(&store).unwrap(), 1);
        assert_eq!(state.form.title, "Page 2");
        assert_eq!(store.load().pages.get(0).unwrap().title, "First");

        state.form.title = "Second".to_string();
        state.switch_to(0, &store).unwrap();
        assert_eq!(state.form.title, "First");
        assert_eq!(state.pages().get(1).unwrap().title, "Second");

        state.select(1);
        state.delete_current(&store).unwrap();
        assert_eq!(state.current_index(), 0);
        assert_eq!(state.pages().len(), 1);
        assert_eq!(store.load().pages.len(), 1);
    }

    #[test]
    fn test_delete_last_page_refused() {
        let (_dir, store, mut state) = setup();
        let result = state.delete_current(&store);
        assert!(matches!(
            result,
            Err(AppError::Collection(CollectionError::LastPage))
        ));
        assert_eq!(state.pages().len(), 1);
    }

    #[test]
    fn test_failed_delete_save_keeps_form_in_sync() {
        let dir = TempDir::new().unwrap();
        let store = PageStore::new(dir.path().join("missing").join("pages.json"));
        let mut pages = PageCollection::default();
        pages.add_page();
        let mut state = AppState::new(pages);
        state.select(1);

        let result = state.delete_current(&store);
        assert!(matches!(result, Err(AppError::Write(_))));
        assert_eq!(state.current_index(), 0);
        assert_eq!(state.form.title, "Sample Page");

        state.commit_form().unwrap();
        assert_eq!(state.pages().get(0).unwrap().title, "Sample Page");
    }

    #[test]
    fn test_select_clamps() {
        let (_dir, _store, mut state) = setup();
        state.select(12);
        assert_eq!(state.current_index(), 0);
    }

    #[test]
    fn test_replace_pages() {
        let (_dir, store, mut state) = setup();
        let mut imported = PageCollection::default();
        imported.add_page();
        imported.add_page();
        state.select(0);

        state.replace_pages(imported.clone(), &store).unwrap();
        assert_eq!(state.pages(), &imported);
        assert_eq!(store.load().pages, imported);
    }
}
