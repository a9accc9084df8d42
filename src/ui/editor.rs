// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Page editor form.
//!
//! Title, subtitle and media fields, the save button, and the multi-line
//! paragraph editor. Paragraphs are separated by a blank line.

use crate::state::PageForm;

/// Result of editor interaction.
pub enum EditorAction {
    None,
    BrowseMedia,
    OpenMedia,
    Save,
}

/// Display the title/subtitle/media form.
pub fn show_form(ui: &mut egui::Ui, form: &mut PageForm) -> EditorAction {
    let mut action = EditorAction::None;

    egui::Grid::new("page_form")
        .num_columns(2)
        .spacing([8.0, 6.0])
        .show(ui, |ui| {
            ui.label("Title");
            ui.add(egui::TextEdit::singleline(&mut form.title).desired_width(f32::INFINITY));
            ui.end_row();

            ui.label("Subtitle");
            ui.add(egui::TextEdit::singleline(&mut form.subtitle).desired_width(f32::INFINITY));
            ui.end_row();

            ui.label("Image or video");
            ui.horizontal(|ui| {
                ui.add(
                    egui::TextEdit::singleline(&mut form.media_path)
                        .desired_width((ui.available_width() - 140.0).max(120.0)),
                );
                if ui.button("Browse...").clicked() {
                    action = EditorAction::BrowseMedia;
                }
                if ui.button("▶ Open").clicked() {
                    action = EditorAction::OpenMedia;
                }
            });
            ui.end_row();
        });

    ui.with_layout(egui::Layout::right_to_left(egui::Align::TOP), |ui| {
        if ui.button("💾 Save Page").clicked() {
            action = EditorAction::Save;
        }
    });

    action
}

/// Display the paragraph text editor.
pub fn show_paragraphs(ui: &mut egui::Ui, form: &mut PageForm) {
    ui.label("Paragraphs (separate with a blank line)");
    egui::ScrollArea::vertical()
        .id_source("paragraph_editor")
        .show(ui, |ui| {
            ui.add(
                egui::TextEdit::multiline(&mut form.paragraphs)
                    .desired_width(f32::INFINITY)
                    .desired_rows(14),
            );
        });
}
