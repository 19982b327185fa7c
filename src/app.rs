//! eframe shell around the editing session: panels, dialogs, hotkeys.

use crate::config::AppConfig;
use crate::image::FileCodec;
use crate::session::{Action, Session};
use egui::{Context, Key, TextureHandle};
use egui_file_dialog::DialogState;
use std::path::{Path, PathBuf};

mod actions;
mod texture;
mod ui;
mod ui_state;

use ui_state::{NativeDialog, UiState};

/// Texture mirroring the session image, tagged with the revision it was built from.
struct DisplayTexture {
    texture: TextureHandle,
    size: [usize; 2],
    revision: u64,
}

/// Top-level application state for the SnapShop UI.
pub struct SnapShopApp {
    session: Session<FileCodec>,
    display: Option<DisplayTexture>,
    active_dialog: Option<NativeDialog>,
    last_image_dir: Option<PathBuf>,
    config: AppConfig,
    ui: UiState,
}

impl SnapShopApp {
    pub fn new(config: AppConfig) -> Self {
        let codec = FileCodec::new(config.effective_image_limits());
        Self {
            session: Session::new(codec),
            display: None,
            active_dialog: None,
            last_image_dir: None,
            config,
            ui: UiState::default(),
        }
    }

    /// Create the app and open `initial_path` right away when given.
    pub fn new_with_initial_path(config: AppConfig, initial_path: Option<&Path>) -> Self {
        let mut app = Self::new(config);
        if let Some(p) = initial_path {
            app.open_image(p);
        }
        app
    }

    fn set_status(&mut self, msg: impl Into<String>) {
        self.ui.last_status = Some(msg.into());
    }

    fn handle_hotkeys(&mut self, ctx: &Context) {
        if ctx.wants_keyboard_input() || !self.accepts_actions() {
            return;
        }
        let bindings = [
            (Key::O, Action::Open),
            (Key::S, Action::Save),
            (Key::W, Action::Close),
        ];
        for (key, action) in bindings {
            if self.session.is_enabled(action)
                && ctx.input(|i| i.key_pressed(key) && i.modifiers.command)
            {
                self.trigger(action);
                return;
            }
        }
        // Ctrl/Cmd + I: show image info
        if self.session.image().is_some()
            && ctx.input(|i| i.key_pressed(Key::I) && i.modifiers.command)
        {
            self.ui.info_window_open = true;
        }
    }

    fn update_active_dialog(&mut self, ctx: &Context) {
        let Some(dialog_state) = self.active_dialog.as_mut() else {
            return;
        };
        let mut close_dialog = false;
        let mut picked: Option<(Action, PathBuf)> = None;
        let (action, dialog) = match dialog_state {
            NativeDialog::Open(dialog) => (Action::Open, dialog),
            NativeDialog::Save(dialog) => (Action::Save, dialog),
        };
        dialog.update(ctx);
        if let Some(path) = dialog.take_picked() {
            picked = Some((action, path));
            close_dialog = true;
        } else {
            match dialog.state() {
                DialogState::Cancelled => {
                    tracing::debug!(%action, "dialog cancelled");
                    close_dialog = true;
                }
                DialogState::Closed => close_dialog = true,
                _ => {}
            }
        }

        if close_dialog {
            self.active_dialog = None;
        }
        match picked {
            Some((Action::Open, path)) => self.open_image(&path),
            Some((_, path)) => self.save_image(&path),
            None => {}
        }
    }
}

impl eframe::App for SnapShopApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        self.sync_texture(ctx);
        self.handle_hotkeys(ctx);

        egui::SidePanel::left("actions")
            .resizable(false)
            .show(ctx, |ui| self.ui_action_panel(ui));
        egui::TopBottomPanel::bottom("status").show(ctx, |ui| self.ui_status_bar(ui));
        egui::CentralPanel::default().show(ctx, |ui| self.ui_central_image(ui));
        self.ui_image_info_window(ctx);
        self.ui_error_window(ctx);
        self.update_active_dialog(ctx);
        if self.texture_is_stale() {
            ctx.request_repaint();
        }
    }
}
