// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Media file handling.
//!
//! Decodes preview images into RGBA pixels for egui and hands other media
//! (videos in particular) to the platform's default application.

use anyhow::{bail, Context, Result};
use std::path::{Path, PathBuf};
use std::process::Command;

/// Longest preview edge in pixels. Larger images are downscaled.
const MAX_PREVIEW_EDGE: u32 = 1600;

/// Decoded image ready for texture upload.
pub struct LoadedImage {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<u8>,
}

/// Load an image file and convert it to RGBA8.
pub fn load_image(path: &Path) -> Result<LoadedImage> {
    let mut img = image::open(path)
        .with_context(|| format!("cannot decode {}", path.display()))?;
    if img.width() > MAX_PREVIEW_EDGE || img.height() > MAX_PREVIEW_EDGE {
        img = img.thumbnail(MAX_PREVIEW_EDGE, MAX_PREVIEW_EDGE);
    }
    let rgba = img.to_rgba8();
    Ok(LoadedImage {
        width: rgba.width(),
        height: rgba.height(),
        pixels: rgba.into_raw(),
    })
}

/// Resolve a user-entered media path to an absolute path.
pub fn resolve_path(raw: &str) -> PathBuf {
    let path = PathBuf::from(raw.trim());
    if path.is_absolute() {
        return path;
    }
    match std::env::current_dir() {
        Ok(cwd) => cwd.join(path),
        Err(_) => path,
    }
}

/// Open a media file with the platform's default application.
pub fn open_external(path: &Path) -> Result<()> {
    if !path.exists() {
        bail!("File does not exist: {}", path.display());
    }

    let mut command = if cfg!(target_os = "macos") {
        let mut c = Command::new("open");
        c.arg(path);
        c
    } else if cfg!(target_os = "windows") {
        let mut c = Command::new("cmd");
        c.args(["/C", "start", ""]).arg(path);
        c
    } else {
        let mut c = Command::new("xdg-open");
        c.arg(path);
        c
    };

    command
        .spawn()
        .with_context(|| format!("cannot open {}", path.display()))?;
    log::info!("Opened {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_resolve_keeps_absolute() {
        let dir = TempDir::new().unwrap();
        let absolute = dir.path().join("clip.mp4");
        let raw = format!("  {}  ", absolute.display());
        assert_eq!(resolve_path(&raw), absolute);
    }

    #[test]
    fn test_resolve_relative_is_absolute() {
        assert!(resolve_path("media/cover.png").is_absolute());
    }

    #[test]
    fn test_open_missing_file_fails() {
        let dir = TempDir::new().unwrap();
        assert!(open_external(&dir.path().join("nothing.mp4")).is_err());
    }

    #[test]
    fn test_load_image_downscales() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("wide.png");
        image::RgbaImage::new(3200, 100).save(&path).unwrap();

        let loaded = load_image(&path).unwrap();
        assert_eq!(loaded.width, MAX_PREVIEW_EDGE);
        assert_eq!(loaded.pixels.len(), (loaded.width * loaded.height * 4) as usize);
    }

    #[test]
    fn test_load_image_rejects_non_image() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("notes.png");
        std::fs::write(&path, "plain text").unwrap();
        assert!(load_image(&path).is_err());
    }
}
