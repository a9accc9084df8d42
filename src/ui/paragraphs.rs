// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Paragraph list with the pick highlight.

use crate::util::text::truncate_preview;

/// Result of paragraph list interaction.
pub enum ParagraphAction {
    None,
    Pick,
}

/// Display the parsed paragraphs, highlighting `highlighted`.
///
/// While `picking` the pick button is disabled and the list follows the
/// highlight.
pub fn show(
    ui: &mut egui::Ui,
    items: &[String],
    highlighted: Option<usize>,
    picking: bool,
) -> ParagraphAction {
    let mut action = ParagraphAction::None;

    ui.horizontal(|ui| {
        ui.heading("Paragraphs");
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            let button = egui::Button::new("🎲 Pick Paragraph");
            if ui.add_enabled(!picking && !items.is_empty(), button).clicked() {
                action = ParagraphAction::Pick;
            }
        });
    });
    ui.separator();

    if items.is_empty() {
        ui.label(egui::RichText::new("No paragraphs yet").italics().weak());
        return action;
    }

    egui::ScrollArea::vertical()
        .id_source("paragraph_list")
        .show(ui, |ui| {
            for (index, item) in items.iter().enumerate() {
                let selected = highlighted == Some(index);
                let response = ui.selectable_label(selected, truncate_preview(item));
                if selected && picking {
                    response.scroll_to_me(Some(egui::Align::Center));
                }
            }
        });

    action
}
