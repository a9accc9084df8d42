// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Persistent page storage.
//!
//! The whole collection lives in one pretty-printed JSON file. Loading never
//! fails: a missing or unreadable file yields the default collection.
//! Saving rewrites the file atomically and reports every failure.

use crate::error::{ReadError, WriteError};
use crate::models::collection::PageCollection;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Result of loading the page file.
#[derive(Debug)]
pub struct Loaded {
    pub pages: PageCollection,
    /// Set when the file existed but could not be used.
    pub warning: Option<ReadError>,
}

/// Reads and writes the page collection at a fixed path.
#[derive(Debug, Clone)]
pub struct PageStore {
    path: PathBuf,
}

impl PageStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the collection, falling back to the default on any failure.
    pub fn load(&self) -> Loaded {
        if !self.path.exists() {
            log::info!("{} not found, starting with the default page", self.path.display());
            return Loaded {
                pages: PageCollection::default(),
                warning: None,
            };
        }

        match self.read() {
            Ok(pages) => {
                log::info!("Loaded {} pages from {}", pages.len(), self.path.display());
                Loaded {
                    pages,
                    warning: None,
                }
            }
            Err(e) => {
                log::warn!("{}; using the default page", e);
                Loaded {
                    pages: PageCollection::default(),
                    warning: Some(e),
                }
            }
        }
    }

    fn read(&self) -> Result<PageCollection, ReadError> {
        let json = std::fs::read_to_string(&self.path).map_err(|source| ReadError::Io {
            path: self.path.clone(),
            source,
        })?;
        serde_json::from_str(&json).map_err(|source| ReadError::Decode {
            path: self.path.clone(),
            source,
        })
    }

    /// Write the whole collection, replacing the previous file.
    pub fn save(&self, pages: &PageCollection) -> Result<(), WriteError> {
        let json = serde_json::to_string_pretty(pages)?;
        self.write_atomic(json.as_bytes())
            .map_err(|source| WriteError::Io {
                path: self.path.clone(),
                source,
            })?;
        log::info!("Saved {} pages to {}", pages.len(), self.path.display());
        Ok(())
    }

    fn write_atomic(&self, bytes: &[u8]) -> std::io::Result<()> {
        let dir = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        let mut file = tempfile::NamedTempFile::new_in(dir)?;
        file.write_all(bytes)?;
        file.as_file().sync_all()?;
        file.persist(&self.path).map_err(|e| e.error)?;
        Ok(())
    }
}
