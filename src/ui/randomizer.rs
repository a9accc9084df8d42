// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Random number panel.

/// Result of randomizer interaction.
pub enum RandomizerAction {
    None,
    Generate,
}

/// Display the min/max inputs, the generate button and the last result.
pub fn show(
    ui: &mut egui::Ui,
    random_min: &mut String,
    random_max: &mut String,
    result: Option<i64>,
) -> RandomizerAction {
    let mut action = RandomizerAction::None;

    ui.horizontal(|ui| {
        ui.label(egui::RichText::new("Random Number").strong());
        ui.separator();

        ui.label("Min");
        ui.add(egui::TextEdit::singleline(random_min).desired_width(80.0));
        ui.label("Max");
        ui.add(egui::TextEdit::singleline(random_max).desired_width(80.0));

        if ui.button("Generate").clicked() {
            action = RandomizerAction::Generate;
        }

        ui.separator();

        let text = match result {
            Some(value) => egui::RichText::new(format!("Result: {}", value)).strong().size(16.0),
            None => egui::RichText::new("The result will appear here").italics().weak(),
        };
        ui.label(text);
    });

    action
}
