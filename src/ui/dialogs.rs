// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Modal notices and confirmations.

/// Kind of notice, which decides its accent color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Info,
    Warning,
    Error,
    Result,
}

/// A message waiting to be acknowledged by the user.
#[derive(Debug, Clone)]
pub struct Notice {
    pub kind: NoticeKind,
    pub title: String,
    pub body: String,
}

impl Notice {
    pub fn new(kind: NoticeKind, title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            kind,
            title: title.into(),
            body: body.into(),
        }
    }
}

fn accent(kind: NoticeKind) -> egui::Color32 {
    match kind {
        NoticeKind::Info => egui::Color32::from_rgb(140, 180, 255),
        NoticeKind::Warning => egui::Color32::from_rgb(255, 200, 90),
        NoticeKind::Error => egui::Color32::from_rgb(255, 110, 110),
        NoticeKind::Result => egui::Color32::from_rgb(120, 220, 150),
    }
}

/// Display a notice. Returns `true` once dismissed.
pub fn show_notice(ctx: &egui::Context, notice: &Notice) -> bool {
    let mut dismissed = false;

    egui::Window::new(egui::RichText::new(&notice.title).color(accent(notice.kind)))
        .id(egui::Id::new("notice"))
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui| {
            ui.set_max_width(420.0);
            let body = egui::RichText::new(&notice.body);
            let body = if notice.kind == NoticeKind::Result {
                body.size(18.0).strong()
            } else {
                body
            };
            ui.label(body);
            ui.add_space(8.0);
            ui.vertical_centered(|ui| {
                if ui.button("OK").clicked() {
                    dismissed = true;
                }
            });
        });

    let text_focused = ctx.memory(|m| m.focused().is_some());
    let (enter, escape) = ctx.input(|i| {
        (i.key_pressed(egui::Key::Enter), i.key_pressed(egui::Key::Escape))
    });
    if dismisses_notice(enter, escape, text_focused) {
        dismissed = true;
    }

    dismissed
}

/// Escape always dismisses; Enter only when no widget holds keyboard focus,
/// so typing in an editor never closes a notice unread.
fn dismisses_notice(enter: bool, escape: bool, text_focused: bool) -> bool {
    escape || (enter && !text_focused)
}

/// Ask a yes/no question. Returns `Some(answer)` once the user chooses.
pub fn show_confirm(ctx: &egui::Context, title: &str, question: &str) -> Option<bool> {
    let mut answer = None;

    egui::Window::new(title)
        .id(egui::Id::new("confirm"))
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui| {
            ui.label(question);
            ui.add_space(8.0);
            ui.horizontal(|ui| {
                if ui.button("Yes").clicked() {
                    answer = Some(true);
                }
                if ui.button("No").clicked() {
                    answer = Some(false);
                }
            });
        });

    if ctx.input(|i| i.key_pressed(egui::Key::Escape)) {
        answer = Some(false);
    }

    answer
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_enter_in_focused_editor_keeps_notice() {
        assert!(!dismisses_notice(true, false, true));
        assert!(dismisses_notice(true, false, false));
    }

    #[test]
    fn test_escape_always_dismisses() {
        assert!(dismisses_notice(false, true, true));
        assert!(dismisses_notice(false, true, false));
        assert!(!dismisses_notice(false, false, false));
    }
}
