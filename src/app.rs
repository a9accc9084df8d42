// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Main application state and egui App implementation.
//!
//! This module contains the main application structure that implements
//! the egui::App trait. It owns the page store, the editing state and the
//! selection engine, and turns UI actions into calls on them.

use crate::config::AppConfig;
use crate::error::{AppError, CollectionError, SelectionError};
use crate::io::{media, serialization, store::PageStore};
use crate::selection::{PickAnimation, PickState, SelectionEngine, Timing};
use crate::state::AppState;
use crate::ui::{
    dialogs::{self, Notice, NoticeKind},
    editor, page_list, paragraphs,
    preview::{self, PreviewContent},
    randomizer,
};
use std::collections::VecDeque;
use std::path::PathBuf;
use std::sync::mpsc::{channel, Receiver};
use std::time::Instant;

/// A paragraph pick in progress, over a snapshot of the paragraphs.
struct ActivePick {
    animation: PickAnimation,
    items: Vec<String>,
}

/// Preview image for the current media path.
enum PreviewImage {
    None,
    Loading(Receiver<Result<media::LoadedImage, String>>),
    Ready {
        texture: egui::TextureHandle,
        size: (u32, u32),
    },
    Unavailable,
}

/// Main application state.
pub struct RouletteApp {
    /// Page file
    store: PageStore,

    /// Pages, current page and editor buffers
    state: AppState,

    /// Random source for picks and numbers
    engine: SelectionEngine,

    /// Pick animation step delays
    timing: Timing,

    /// Running paragraph pick
    active_pick: Option<ActivePick>,

    /// Paragraph highlighted by the last pick step
    highlighted: Option<usize>,

    /// Last generated number
    random_result: Option<i64>,

    /// Media path the preview was built for
    preview_path: String,

    /// Preview texture or its loading state
    preview: PreviewImage,

    /// Messages waiting to be shown, oldest first
    notices: VecDeque<Notice>,

    /// Delete confirmation is open
    confirm_delete: bool,
}

impl RouletteApp {
    /// Create the application, loading pages from the configured file.
    pub fn new(config: AppConfig) -> Self {
        let store = PageStore::new(config.data_file);
        log::info!("Using page file {}", store.path().display());
        let loaded = store.load();

        let mut notices = VecDeque::new();
        if let Some(warning) = loaded.warning {
            notices.push_back(Notice::new(
                NoticeKind::Warning,
                "Could not read pages",
                format!("{}\nThe default page will be used.", warning),
            ));
        }

        let engine = match config.seed {
            Some(seed) => {
                log::info!("Using fixed RNG seed {}", seed);
                SelectionEngine::seeded(seed)
            }
            None => SelectionEngine::from_os_rng(),
        };

        let mut app = Self {
            store,
            state: AppState::new(loaded.pages),
            engine,
            timing: config.timing,
            active_pick: None,
            highlighted: None,
            random_result: None,
            preview_path: String::new(),
            preview: PreviewImage::None,
            notices,
            confirm_delete: false,
        };
        app.sync_preview();
        app
    }

    fn notify(&mut self, kind: NoticeKind, title: &str, body: impl Into<String>) {
        self.notices.push_back(Notice::new(kind, title, body));
    }

    /// Log an error and show it to the user.
    fn report(&mut self, title: &str, error: impl std::fmt::Display) {
        log::error!("{}: {}", title, error);
        self.notify(NoticeKind::Error, title, error.to_string());
    }

    /// Called after the edited page changes.
    fn page_changed(&mut self) {
        self.highlighted = None;
        self.sync_preview();
    }

    fn save_page(&mut self) {
        match self.state.save_current(&self.store) {
            Ok(()) => self.sync_preview(),
            Err(e) => self.report("Could not save page", e),
        }
    }

    fn select_page(&mut self, index: usize) {
        match self.state.switch_to(index, &self.store) {
            Ok(()) => self.page_changed(),
            Err(e) => self.report("Could not save page", e),
        }
    }

    fn add_page(&mut self) {
        match self.state.add_page(&self.store) {
            Ok(_) => self.page_changed(),
            Err(e) => self.report("Could not save page", e),
        }
    }

    fn delete_page(&mut self) {
        match self.state.delete_current(&self.store) {
            Ok(()) => self.page_changed(),
            Err(AppError::Collection(CollectionError::LastPage)) => {
                self.notify(NoticeKind::Info, "Delete Page", "At least one page must be kept.");
            }
            Err(e) => self.report("Could not delete page", e),
        }
    }

    /// Start an animated pick over the paragraphs in the editor.
    fn start_pick(&mut self) {
        let items = self.state.form.paragraph_items();
        match self.engine.pick_paragraph(items.as_slice()) {
            Ok(sequence) => {
                let mut animation = PickAnimation::new(sequence, self.timing);
                animation.start(Instant::now());
                log::info!(
                    "Started pick over {} paragraphs, reveal in {:?}",
                    items.len(),
                    animation.total_duration()
                );
                self.active_pick = Some(ActivePick { animation, items });
            }
            Err(SelectionError::EmptyInput) => {
                self.notify(NoticeKind::Info, "Pick Paragraph", "Enter at least one paragraph first.");
            }
            Err(e) => self.report("Pick failed", e),
        }
    }

    /// Advance the running pick and schedule the next repaint.
    fn drive_pick(&mut self, ctx: &egui::Context) {
        let Some(pick) = &self.active_pick else {
            return;
        };

        let now = Instant::now();
        let state = pick.animation.state(now);
        self.highlighted = state.highlighted();

        if let PickState::Revealed { index } = state {
            let chosen = pick.items.get(index).cloned().unwrap_or_default();
            log::info!("Revealed paragraph {}", index + 1);
            self.active_pick = None;
            self.notify(NoticeKind::Result, "Picked Paragraph", chosen);
        } else if let Some(wait) = pick.animation.until_next_step(now) {
            ctx.request_repaint_after(wait);
        }
    }

    fn generate_number(&mut self) {
        let form = &self.state.form;
        match self
            .engine
            .random_in_range_input(&form.random_min, &form.random_max)
        {
            Ok(value) => self.random_result = Some(value),
            Err(e) => self.report("Please enter valid numbers", e),
        }
    }

    fn browse_media(&mut self) {
        if let Some(path) = rfd::FileDialog::new()
            .set_title("Choose an image or video")
            .pick_file()
        {
            self.state.form.media_path = media::resolve_path(&path.to_string_lossy())
                .display()
                .to_string();
            self.sync_preview();
        }
    }

    fn open_media(&mut self) {
        let raw = self.state.form.media_path.trim().to_string();
        if raw.is_empty() {
            self.notify(NoticeKind::Info, "Open Media", "Enter or choose a media path first.");
            return;
        }
        if let Err(e) = media::open_external(&media::resolve_path(&raw)) {
            self.report("Could not open media", e);
        }
    }

    fn export_pages(&mut self, path: PathBuf) {
        match serialization::export(self.state.pages(), &path) {
            Ok(()) => log::info!("Exported pages to {}", path.display()),
            Err(e) => self.report("Could not export pages", e),
        }
    }

    fn import_pages(&mut self, path: PathBuf) {
        let pages = match serialization::import(&path) {
            Ok(pages) => pages,
            Err(e) => {
                self.report("Could not import pages", e);
                return;
            }
        };
        log::info!("Imported {} pages from {}", pages.len(), path.display());
        match self.state.replace_pages(pages, &self.store) {
            Ok(()) => self.page_changed(),
            Err(e) => self.report("Could not save imported pages", e),
        }
    }

    /// Rebuild the preview if the media path in the form changed.
    fn sync_preview(&mut self) {
        let path = self.state.form.media_path.trim().to_string();
        if path == self.preview_path {
            return;
        }
        self.preview_path = path.clone();

        if path.is_empty() {
            self.preview = PreviewImage::None;
            return;
        }

        let resolved = media::resolve_path(&path);
        if !resolved.is_file() {
            self.preview = PreviewImage::Unavailable;
            return;
        }

        let (sender, receiver) = channel();
        self.preview = PreviewImage::Loading(receiver);

        // Spawn background thread for decoding
        std::thread::spawn(move || {
            let result = media::load_image(&resolved).map_err(|e| format!("{:#}", e));
            let _ = sender.send(result);
        });
    }

    /// Check for a finished preview decode.
    fn poll_preview(&mut self, ctx: &egui::Context) {
        let PreviewImage::Loading(ref receiver) = self.preview else {
            return;
        };

        match receiver.try_recv() {
            Ok(Ok(loaded)) => {
                let size = [loaded.width as usize, loaded.height as usize];
                let color_image = egui::ColorImage::from_rgba_unmultiplied(size, &loaded.pixels);
                let texture = ctx.load_texture("preview", color_image, egui::TextureOptions::LINEAR);
                self.preview = PreviewImage::Ready {
                    texture,
                    size: (loaded.width, loaded.height),
                };
            }
            Ok(Err(e)) => {
                log::warn!("Preview unavailable: {}", e);
                self.preview = PreviewImage::Unavailable;
            }
            Err(std::sync::mpsc::TryRecvError::Empty) => ctx.request_repaint(),
            Err(std::sync::mpsc::TryRecvError::Disconnected) => {
                self.preview = PreviewImage::Unavailable;
            }
        }
    }

    fn menu_bar(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            egui::menu::bar(ui, |ui| {
                ui.menu_button("File", |ui| {
                    if ui.button("Save Page").clicked() {
                        self.save_page();
                        ui.close_menu();
                    }
                    ui.separator();
                    if ui.button("Import Pages...").clicked() {
                        if let Some(path) = rfd::FileDialog::new()
                            .add_filter("Pages", &["yaml", "yml", "json"])
                            .pick_file()
                        {
                            self.import_pages(path);
                        }
                        ui.close_menu();
                    }
                    ui.menu_button("Export Pages", |ui| {
                        if ui.button("Export as YAML...").clicked() {
                            if let Some(path) = rfd::FileDialog::new()
                                .add_filter("YAML", &["yaml", "yml"])
                                .set_file_name("pages.yaml")
                                .save_file()
                            {
                                self.export_pages(path);
                            }
                            ui.close_menu();
                        }
                        if ui.button("Export as JSON...").clicked() {
                            if let Some(path) = rfd::FileDialog::new()
                                .add_filter("JSON", &["json"])
                                .set_file_name("pages-export.json")
                                .save_file()
                            {
                                self.export_pages(path);
                            }
                            ui.close_menu();
                        }
                    });
                    ui.separator();
                    if ui.button("Quit").clicked() {
                        ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                    }
                });
            });
        });
    }

    fn dialogs(&mut self, ctx: &egui::Context) {
        if let Some(notice) = self.notices.front() {
            if dialogs::show_notice(ctx, notice) {
                self.notices.pop_front();
            }
        } else if self.confirm_delete {
            if let Some(answer) =
                dialogs::show_confirm(ctx, "Delete Page", "Delete the current page?")
            {
                self.confirm_delete = false;
                if answer {
                    self.delete_page();
                }
            }
        }
    }
}

impl eframe::App for RouletteApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.poll_preview(ctx);
        self.drive_pick(ctx);

        let picking = self.active_pick.is_some();
        let modal = !self.notices.is_empty() || self.confirm_delete;

        self.menu_bar(ctx);

        // Page list (left side)
        let list_action = egui::SidePanel::left("pages")
            .default_width(200.0)
            .show(ctx, |ui| {
                ui.add_enabled_ui(!picking && !modal, |ui| {
                    page_list::show(ui, self.state.pages(), self.state.current_index())
                })
                .inner
            })
            .inner;

        match list_action {
            page_list::PageListAction::Select(index) => self.select_page(index),
            page_list::PageListAction::Add => self.add_page(),
            page_list::PageListAction::Delete => {
                if self.state.pages().len() <= 1 {
                    self.notify(NoticeKind::Info, "Delete Page", "At least one page must be kept.");
                } else {
                    self.confirm_delete = true;
                }
            }
            page_list::PageListAction::None => {}
        }

        // Random number panel (bottom)
        let random_action = egui::TopBottomPanel::bottom("randomizer")
            .show(ctx, |ui| {
                ui.add_space(4.0);
                let form = &mut self.state.form;
                let action = randomizer::show(
                    ui,
                    &mut form.random_min,
                    &mut form.random_max,
                    self.random_result,
                );
                ui.add_space(4.0);
                action
            })
            .inner;

        if let randomizer::RandomizerAction::Generate = random_action {
            self.generate_number();
        }

        // Paragraph list (right side)
        let paragraph_action = egui::SidePanel::right("paragraphs")
            .default_width(300.0)
            .show(ctx, |ui| match &self.active_pick {
                Some(pick) => paragraphs::show(ui, &pick.items, self.highlighted, true),
                None => {
                    let items = self.state.form.paragraph_items();
                    paragraphs::show(ui, &items, self.highlighted, false)
                }
            })
            .inner;

        if let paragraphs::ParagraphAction::Pick = paragraph_action {
            self.start_pick();
        }

        // Preview and editor (center)
        let editor_action = egui::CentralPanel::default()
            .show(ctx, |ui| {
                let content = match &self.preview {
                    PreviewImage::None => PreviewContent::Empty,
                    PreviewImage::Loading(_) => PreviewContent::Loading,
                    PreviewImage::Ready { texture, size } => PreviewContent::Image {
                        texture,
                        size: *size,
                    },
                    PreviewImage::Unavailable => PreviewContent::Unavailable(&self.preview_path),
                };
                let (title, subtitle) = match self.state.current_page() {
                    Some(page) => (page.title.as_str(), page.subtitle.as_str()),
                    None => ("", ""),
                };
                preview::show(ui, title, subtitle, content);
                ui.add_space(10.0);

                let action = editor::show_form(ui, &mut self.state.form);
                ui.separator();
                editor::show_paragraphs(ui, &mut self.state.form);
                action
            })
            .inner;

        match editor_action {
            editor::EditorAction::BrowseMedia => self.browse_media(),
            editor::EditorAction::OpenMedia => self.open_media(),
            editor::EditorAction::Save => self.save_page(),
            editor::EditorAction::None => {}
        }

        // Ctrl+S saves the current page
        if !modal && ctx.input(|i| i.modifiers.command && i.key_pressed(egui::Key::S)) {
            self.save_page();
        }

        self.dialogs(ctx);
    }
}
