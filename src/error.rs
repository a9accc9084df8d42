// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Error types shared by the page store, selection engine and editing flows.

use std::num::ParseIntError;
use std::path::PathBuf;
use thiserror::Error;

/// Failure while reading the page file.
///
/// Always recovered by the store: the caller gets the default collection
/// and this error as a warning to show the user.
#[derive(Debug, Error)]
pub enum ReadError {
    #[error("cannot read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("cannot decode {}: {source}", .path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Failure while writing the page file. Never swallowed.
#[derive(Debug, Error)]
pub enum WriteError {
    #[error("cannot encode pages: {0}")]
    Encode(#[from] serde_json::Error),
    #[error("cannot write {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Errors raised by the selection engine.
#[derive(Debug, Error)]
pub enum SelectionError {
    #[error("there are no paragraphs to pick from")]
    EmptyInput,
    #[error("not a valid integer: {input:?}")]
    InvalidRangeInput {
        input: String,
        #[source]
        source: ParseIntError,
    },
}

/// Violations of the page collection invariants.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CollectionError {
    #[error("a page collection needs at least one page")]
    Empty,
    #[error("at least one page must be kept")]
    LastPage,
}

/// Errors surfaced by the page editing flows.
#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Selection(#[from] SelectionError),
    #[error(transparent)]
    Collection(#[from] CollectionError),
    #[error(transparent)]
    Write(#[from] WriteError),
}
