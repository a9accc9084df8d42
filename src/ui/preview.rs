// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Page preview banner.
//!
//! Draws the media image (cropped to cover the banner) with the page title
//! and subtitle overlaid along the bottom edge.

use crate::util::geometry::cover_uv;

/// Banner height in points.
const BANNER_HEIGHT: f32 = 240.0;

/// Height of the darkened title strip.
const OVERLAY_HEIGHT: f32 = 100.0;

/// What the banner has to show for the current media path.
pub enum PreviewContent<'a> {
    Empty,
    Loading,
    Image {
        texture: &'a egui::TextureHandle,
        size: (u32, u32),
    },
    Unavailable(&'a str),
}

/// Display the preview banner.
pub fn show(ui: &mut egui::Ui, title: &str, subtitle: &str, content: PreviewContent<'_>) {
    let width = ui.available_width();
    let (rect, _response) =
        ui.allocate_exact_size(egui::vec2(width, BANNER_HEIGHT), egui::Sense::hover());
    let painter = ui.painter_at(rect);

    painter.rect_filled(rect, 4.0, egui::Color32::from_rgb(15, 19, 28));

    match content {
        PreviewContent::Image { texture, size } => {
            let (u0, v0, u1, v1) = cover_uv(size.0, size.1, rect.width(), rect.height());
            painter.image(
                texture.id(),
                rect,
                egui::Rect::from_min_max(egui::pos2(u0, v0), egui::pos2(u1, v1)),
                egui::Color32::WHITE,
            );
        }
        PreviewContent::Loading => {
            painter.text(
                rect.min + egui::vec2(20.0, 20.0),
                egui::Align2::LEFT_TOP,
                "Loading preview...",
                egui::FontId::proportional(13.0),
                egui::Color32::from_gray(170),
            );
        }
        PreviewContent::Unavailable(path) => {
            painter.text(
                rect.min + egui::vec2(20.0, 20.0),
                egui::Align2::LEFT_TOP,
                format!("Preview unavailable: {}", path),
                egui::FontId::proportional(13.0),
                egui::Color32::from_rgb(158, 166, 255),
            );
        }
        PreviewContent::Empty => {}
    }

    let overlay = egui::Rect::from_min_max(
        egui::pos2(rect.min.x, rect.max.y - OVERLAY_HEIGHT),
        rect.max,
    );
    painter.rect_filled(overlay, 0.0, egui::Color32::from_rgba_unmultiplied(11, 13, 20, 160));

    painter.text(
        egui::pos2(rect.min.x + 24.0, rect.max.y - 90.0),
        egui::Align2::LEFT_TOP,
        title,
        egui::FontId::proportional(24.0),
        egui::Color32::WHITE,
    );
    painter.text(
        egui::pos2(rect.min.x + 24.0, rect.max.y - 50.0),
        egui::Align2::LEFT_TOP,
        subtitle,
        egui::FontId::proportional(16.0),
        egui::Color32::from_rgb(200, 208, 255),
    );
}
