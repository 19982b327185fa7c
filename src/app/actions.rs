use super::SnapShopApp;
use super::ui_state::ErrorNotice;
use crate::image::Filter;
use crate::session::{Action, SessionError};
use std::path::Path;

impl SnapShopApp {
    /// No dialog or error window is waiting on the user.
    pub(crate) const fn accepts_actions(&self) -> bool {
        self.active_dialog.is_none() && self.ui.error.is_none()
    }

    /// Route an enabled action to its handler. Open and Save go through a file dialog first.
    pub(crate) fn trigger(&mut self, action: Action) {
        match action {
            Action::Open => self.open_image_dialog(),
            Action::Save => self.save_image_dialog(),
            Action::Close => self.close_image(),
            Action::Filter(filter) => self.apply_filter(filter),
        }
    }

    pub(crate) fn open_image(&mut self, path: &Path) {
        self.remember_image_dir_from_path(path);
        match self.session.open(path) {
            Ok(()) => {
                let name = self
                    .session
                    .image()
                    .map(|image| image.meta.display_name())
                    .unwrap_or_default();
                self.set_status(format!("Loaded {name}"));
            }
            Err(err) => self.report_open_failure(&err),
        }
    }

    pub(crate) fn save_image(&mut self, path: &Path) {
        self.remember_image_dir_from_path(path);
        match self.session.save(path) {
            Ok(()) => self.set_status(format!("Saved {}", path.display())),
            Err(err @ SessionError::Unavailable(_)) => self.report_unavailable(&err),
            Err(err) => {
                tracing::error!(path = %path.display(), "save failed: {err}");
                if self.config.surface_save_errors {
                    self.set_status(format!("Save failed: {err}"));
                    self.ui.error = Some(ErrorNotice {
                        title: "Save failed",
                        message: "The image could not be written.",
                        detail: err.to_string(),
                        reopen_on_dismiss: false,
                    });
                }
            }
        }
    }

    fn close_image(&mut self) {
        match self.session.close() {
            Ok(()) => {
                self.ui.info_window_open = false;
                self.set_status("Image closed.");
            }
            Err(err) => self.report_unavailable(&err),
        }
    }

    fn apply_filter(&mut self, filter: Filter) {
        match self.session.apply_filter(filter) {
            Ok(()) => self.set_status(format!("Applied {}.", filter.description())),
            Err(err) => self.report_unavailable(&err),
        }
    }

    fn report_open_failure(&mut self, err: &SessionError) {
        self.set_status(format!("Open failed: {err}"));
        if err.reprompts_open() {
            self.ui.error = Some(ErrorNotice {
                title: "Error!",
                message: "The selected file did not contain an image!",
                detail: err.to_string(),
                reopen_on_dismiss: self.config.reopen_on_decode_failure,
            });
        }
    }

    fn report_unavailable(&mut self, err: &SessionError) {
        tracing::warn!("{err}");
        self.set_status(err.to_string());
    }

    /// Close the error window; a failed open asks for another file.
    pub(crate) fn dismiss_error(&mut self) {
        let Some(notice) = self.ui.error.take() else {
            return;
        };
        if notice.reopen_on_dismiss && self.active_dialog.is_none() {
            self.open_image_dialog();
        }
    }

    pub(crate) fn remember_image_dir_from_path(&mut self, path: &Path) {
        let dir = path
            .parent()
            .map_or_else(|| std::path::PathBuf::from("."), Path::to_path_buf);
        self.last_image_dir = Some(dir);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::NativeDialog;
    use crate::config::AppConfig;
    use crate::image::{FileCodec, ImageCodec};
    use image::{Rgba, RgbaImage};
    use std::fs;
    use std::path::PathBuf;

    fn write_png(dir: &Path) -> PathBuf {
        let path = dir.join("tile.png");
        FileCodec::default()
            .save(&RgbaImage::from_pixel(3, 3, Rgba([40, 80, 120, 255])), &path)
            .expect("seed png");
        path
    }

    fn write_text(dir: &Path) -> PathBuf {
        let path = dir.join("notes.txt");
        fs::write(&path, "not an image").expect("write text");
        path
    }

    #[test]
    fn decode_failure_shows_error_then_offers_open_again() {
        let dir = tempfile::tempdir().expect("temp dir");
        let mut app = SnapShopApp::new(AppConfig::default());
        app.open_image(&write_text(dir.path()));

        let notice = app.ui.error.as_ref().expect("error notice");
        assert_eq!(notice.title, "Error!");
        assert_eq!(notice.message, "The selected file did not contain an image!");
        assert!(app.session.image().is_none());
        assert!(app.active_dialog.is_none());
        assert!(!app.accepts_actions());

        app.dismiss_error();
        assert!(app.ui.error.is_none());
        assert!(matches!(app.active_dialog, Some(NativeDialog::Open(_))));
        assert!(!app.accepts_actions());
    }

    #[test]
    fn reopening_after_decode_failure_can_be_disabled() {
        let dir = tempfile::tempdir().expect("temp dir");
        let mut app = SnapShopApp::new(AppConfig {
            reopen_on_decode_failure: false,
            ..AppConfig::default()
        });
        app.open_image(&write_text(dir.path()));
        assert!(app.ui.error.is_some());

        app.dismiss_error();
        assert!(app.ui.error.is_none());
        assert!(app.active_dialog.is_none());
        assert!(app.accepts_actions());
    }

    #[test]
    fn decode_failure_keeps_the_open_image() {
        let dir = tempfile::tempdir().expect("temp dir");
        let mut app = SnapShopApp::new(AppConfig::default());
        app.open_image(&write_png(dir.path()));
        let revision = app.session.revision();
        app.open_image(&write_text(dir.path()));

        let image = app.session.image().expect("image kept");
        assert_eq!(image.meta.display_name(), "tile.png");
        assert_eq!(app.session.revision(), revision);
    }

    #[test]
    fn save_failure_is_surfaced_by_default() {
        let dir = tempfile::tempdir().expect("temp dir");
        let mut app = SnapShopApp::new(AppConfig::default());
        app.open_image(&write_png(dir.path()));
        app.save_image(&dir.path().join("missing").join("out.png"));

        let notice = app.ui.error.as_ref().expect("save notice");
        assert_eq!(notice.title, "Save failed");
        assert!(!notice.reopen_on_dismiss);
        assert!(app.session.image().is_some());

        app.dismiss_error();
        assert!(app.active_dialog.is_none());
    }

    #[test]
    fn save_failure_can_be_log_only() {
        let dir = tempfile::tempdir().expect("temp dir");
        let mut app = SnapShopApp::new(AppConfig {
            surface_save_errors: false,
            ..AppConfig::default()
        });
        app.open_image(&write_png(dir.path()));
        app.save_image(&dir.path().join("missing").join("out.png"));

        assert!(app.ui.error.is_none());
        assert!(app.accepts_actions());
        assert!(app.session.image().is_some());
    }

    #[test]
    fn saving_without_an_image_reports_unavailable_not_a_write_error() {
        let dir = tempfile::tempdir().expect("temp dir");
        let target = dir.path().join("out.png");
        let mut app = SnapShopApp::new(AppConfig::default());
        app.save_image(&target);

        assert!(app.ui.error.is_none());
        let status = app.ui.last_status.as_deref().expect("status");
        assert!(status.contains("unavailable"), "{status}");
        assert!(!target.exists());
    }

    #[test]
    fn successful_save_writes_the_file() {
        let dir = tempfile::tempdir().expect("temp dir");
        let target = dir.path().join("copy.bmp");
        let mut app = SnapShopApp::new(AppConfig::default());
        app.open_image(&write_png(dir.path()));
        app.save_image(&target);

        assert!(app.ui.error.is_none());
        assert!(target.exists());
        assert_eq!(app.last_image_dir.as_deref(), Some(dir.path()));
    }
}
