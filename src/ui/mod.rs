// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! UI components for the Page Roulette application.

pub mod dialogs;
pub mod editor;
pub mod page_list;
pub mod paragraphs;
pub mod preview;
pub mod randomizer;
