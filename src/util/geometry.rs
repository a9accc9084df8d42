// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Geometric utility functions.
//!
//! This module computes how a preview image is cropped so that it covers
//! the banner area without distortion.

/// Normalized texture rectangle `(u_min, v_min, u_max, v_max)`.
pub type UvRect = (f32, f32, f32, f32);

/// Centered crop of an image that fills an area of the given size while
/// keeping the image's aspect ratio.
pub fn cover_uv(image_width: u32, image_height: u32, area_width: f32, area_height: f32) -> UvRect {
    if image_width == 0 || image_height == 0 || area_width <= 0.0 || area_height <= 0.0 {
        return (0.0, 0.0, 1.0, 1.0);
    }

    let image_aspect = image_width as f32 / image_height as f32;
    let area_aspect = area_width / area_height;

    if image_aspect > area_aspect {
        // Image is wider - crop the sides
        let visible = area_aspect / image_aspect;
        let margin = (1.0 - visible) / 2.0;
        (margin, 0.0, 1.0 - margin, 1.0)
    } else {
        // Image is taller - crop top and bottom
        let visible = image_aspect / area_aspect;
        let margin = (1.0 - visible) / 2.0;
        (0.0, margin, 1.0, 1.0 - margin)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: UvRect, b: UvRect) -> bool {
        (a.0 - b.0).abs() < 1e-4
            && (a.1 - b.1).abs() < 1e-4
            && (a.2 - b.2).abs() < 1e-4
            && (a.3 - b.3).abs() < 1e-4
    }

    #[test]
    fn test_same_aspect_uses_whole_image() {
        assert!(approx(cover_uv(1920, 1080, 960.0, 540.0), (0.0, 0.0, 1.0, 1.0)));
    }

    #[test]
    fn test_wide_image_crops_sides() {
        // 4:1 image into a 2:1 banner keeps the middle half
        assert!(approx(cover_uv(400, 100, 200.0, 100.0), (0.25, 0.0, 0.75, 1.0)));
    }

    #[test]
    fn test_tall_image_crops_top_and_bottom() {
        // square image into a 4:1 banner keeps the middle quarter
        assert!(approx(cover_uv(100, 100, 400.0, 100.0), (0.0, 0.375, 1.0, 0.625)));
    }

    #[test]
    fn test_degenerate_sizes() {
        assert_eq!(cover_uv(0, 10, 100.0, 100.0), (0.0, 0.0, 1.0, 1.0));
        assert_eq!(cover_uv(10, 10, 0.0, 100.0), (0.0, 0.0, 1.0, 1.0));
    }
}
