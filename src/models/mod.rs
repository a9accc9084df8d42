// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Data model for pages and the page collection.

pub mod collection;
pub mod page;
