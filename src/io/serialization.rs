// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Page collection export and import.
//!
//! This module handles exporting and importing the page collection in YAML
//! and JSON formats, chosen by file extension.

use crate::models::collection::PageCollection;
use anyhow::{bail, Result};
use std::path::Path;

/// Supported exchange formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Yaml,
    Json,
}

impl Format {
    /// Pick the format from a file extension.
    pub fn from_path(path: &Path) -> Result<Self> {
        let extension = path
            .extension()
            .and_then(|s| s.to_str())
            .map(str::to_ascii_lowercase);
        match extension.as_deref() {
            Some("yaml") | Some("yml") => Ok(Format::Yaml),
            Some("json") => Ok(Format::Json),
            other => bail!("Unsupported file extension: {:?}", other),
        }
    }
}

/// Export pages to the format implied by the path.
pub fn export(pages: &PageCollection, path: &Path) -> Result<()> {
    match Format::from_path(path)? {
        Format::Yaml => export_yaml(pages, path),
        Format::Json => export_json(pages, path),
    }
}

/// Import pages from the format implied by the path.
pub fn import(path: &Path) -> Result<PageCollection> {
    match Format::from_path(path)? {
        Format::Yaml => import_yaml(path),
        Format::Json => import_json(path),
    }
}

/// Export pages to YAML format.
pub fn export_yaml(pages: &PageCollection, path: &Path) -> Result<()> {
    let yaml = serde_yaml::to_string(pages)?;
    std::fs::write(path, yaml)?;
    Ok(())
}

/// Export pages to JSON format.
pub fn export_json(pages: &PageCollection, path: &Path) -> Result<()> {
    let json = serde_json::to_string_pretty(pages)?;
    std::fs::write(path, json)?;
    Ok(())
}

/// Import pages from YAML format.
pub fn import_yaml(path: &Path) -> Result<PageCollection> {
    let yaml = std::fs::read_to_string(path)?;
    let pages = serde_yaml::from_str(&yaml)?;
    Ok(pages)
}

/// Import pages from JSON format.
pub fn import_json(path: &Path) -> Result<PageCollection> {
    let json = std::fs::read_to_string(path)?;
    let pages = serde_json::from_str(&json)?;
    Ok(pages)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::page::Page;
    use tempfile::TempDir;

    fn two_pages() -> PageCollection {
        let mut pages = PageCollection::default();
        pages.add_page();
        if let Some(page) = pages.get_mut(1) {
            page.paragraphs = vec!["alpha".to_string(), "beta: gamma".to_string()];
        }
        pages
    }

    #[test]
    fn test_yaml_export_import() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("pages.yaml");
        let pages = two_pages();

        export(&pages, &path).unwrap();
        assert_eq!(import(&path).unwrap(), pages);
    }

    #[test]
    fn test_json_export_import() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("pages.JSON");
        let pages = two_pages();

        export(&pages, &path).unwrap();
        assert_eq!(import(&path).unwrap(), pages);
    }

    #[test]
    fn test_unsupported_extension() {
        let path = Path::new("pages.txt");
        assert!(Format::from_path(path).is_err());
        assert!(export(&PageCollection::default(), path).is_err());
    }

    #[test]
    fn test_import_rejects_empty_collection() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("pages.yml");
        std::fs::write(&path, "[]\n").unwrap();
        assert!(import(&path).is_err());

        std::fs::write(&path, "- title: Only\n").unwrap();
        let pages = import(&path).unwrap();
        assert_eq!(pages.get(0).unwrap().paragraphs, Page::default().paragraphs);
    }
}
