// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! I/O operations for the page file, media and exports.

pub mod media;
pub mod serialization;
pub mod store;
