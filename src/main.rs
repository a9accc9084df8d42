// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Page Roulette
//!
//! A desktop utility for keeping a list of pages, drawing a random
//! paragraph from a page with an animated highlight, and generating
//! random numbers in a range.

mod app;
mod config;
mod error;
mod io;
mod models;
mod selection;
mod state;
mod ui;
mod util;

use anyhow::Result;
use app::RouletteApp;
use config::AppConfig;

fn main() -> Result<()> {
    // Initialize logging
    env_logger::init();

    let config = AppConfig::from_env();

    // Configure egui options
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1200.0, 720.0])
            .with_min_inner_size([960.0, 640.0])
            .with_title("Page Roulette"),
        ..Default::default()
    };

    // Run the application
    eframe::run_native(
        "Page Roulette",
        options,
        Box::new(move |_cc| Ok(Box::new(RouletteApp::new(config)))),
    )
    .map_err(|e| anyhow::anyhow!("Application error: {}", e))?;

    Ok(())
}
