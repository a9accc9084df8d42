// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Sidebar listing the pages.

use crate::models::collection::PageCollection;

/// Result of page list interaction.
pub enum PageListAction {
    None,
    Select(usize),
    Add,
    Delete,
}

/// Display the page list with add/delete buttons.
pub fn show(ui: &mut egui::Ui, pages: &PageCollection, current: usize) -> PageListAction {
    let mut action = PageListAction::None;

    ui.heading("Pages");
    ui.separator();

    ui.horizontal(|ui| {
        if ui.button("➕ Add Page").clicked() {
            action = PageListAction::Add;
        }
        if ui.button("🗑 Delete Page").clicked() {
            action = PageListAction::Delete;
        }
    });

    ui.separator();

    egui::ScrollArea::vertical().show(ui, |ui| {
        for (index, page) in pages.iter().enumerate() {
            let selected = index == current;
            if ui.selectable_label(selected, page.label(index)).clicked() && !selected {
                action = PageListAction::Select(index);
            }
        }
    });

    action
}
