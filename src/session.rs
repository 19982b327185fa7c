//! The single-image editing session.
//!
//! Owns at most one image, the fixed filter catalog, and the codec. Every
//! action goes through here; availability is derived from [`SessionState`]
//! on demand so it can never drift from whether an image is loaded.

mod action;
mod error;

pub use action::{Action, SessionState};
pub use error::SessionError;

use crate::image::{Filter, ImageCodec, ImageMeta, usize_dimensions};
use image::RgbaImage;
use std::path::Path;

/// The image currently being edited, together with where it came from.
///
/// Pixels are unmultiplied RGBA exactly as decoded; egui only ever sees a copy.
pub struct LoadedImage {
    pub pixels: RgbaImage,
    pub meta: ImageMeta,
}

impl LoadedImage {
    pub fn size(&self) -> [usize; 2] {
        usize_dimensions(&self.pixels)
    }
}

pub struct Session<C> {
    codec: C,
    catalog: &'static [Filter],
    image: Option<LoadedImage>,
    revision: u64,
}

impl<C: ImageCodec> Session<C> {
    /// Empty session offering every filter in [`Filter::CATALOG`].
    pub const fn new(codec: C) -> Self {
        Self::with_catalog(codec, &Filter::CATALOG)
    }

    pub const fn with_catalog(codec: C, catalog: &'static [Filter]) -> Self {
        Self {
            codec,
            catalog,
            image: None,
            revision: 0,
        }
    }

    pub const fn state(&self) -> SessionState {
        if self.image.is_some() {
            SessionState::Loaded
        } else {
            SessionState::Empty
        }
    }

    pub fn is_enabled(&self, action: Action) -> bool {
        let in_catalog = match action {
            Action::Filter(filter) => self.catalog.contains(&filter),
            Action::Open | Action::Save | Action::Close => true,
        };
        in_catalog && action.enabled_in(self.state())
    }

    /// Every action with its current enablement: options first, then filters in catalog order.
    pub fn actions(&self) -> impl Iterator<Item = (Action, bool)> + '_ {
        [Action::Open, Action::Save, Action::Close]
            .into_iter()
            .chain(self.catalog.iter().copied().map(Action::Filter))
            .map(|action| (action, self.is_enabled(action)))
    }

    pub const fn filters(&self) -> &'static [Filter] {
        self.catalog
    }

    pub const fn image(&self) -> Option<&LoadedImage> {
        self.image.as_ref()
    }

    /// Bumped whenever the image is replaced, transformed, or released.
    pub const fn revision(&self) -> u64 {
        self.revision
    }

    /// Decode `path` and make it the current image, dropping any previous one.
    ///
    /// On failure the session is untouched and the error asks the caller to
    /// prompt for another file (see [`SessionError::reprompts_open`]).
    pub fn open(&mut self, path: &Path) -> Result<(), SessionError> {
        self.ensure_enabled(Action::Open)?;
        let pixels = match self.codec.load(path) {
            Ok(pixels) => pixels,
            Err(err) => {
                tracing::warn!(path = %path.display(), "open failed: {err}");
                return Err(err.into());
            }
        };
        let (width, height) = pixels.dimensions();
        self.image = Some(LoadedImage {
            pixels,
            meta: ImageMeta::from_path(path),
        });
        self.bump_revision();
        tracing::info!(path = %path.display(), width, height, "opened image");
        Ok(())
    }

    /// Write the current image to `path`. The session itself does not change.
    pub fn save(&self, path: &Path) -> Result<(), SessionError> {
        self.ensure_enabled(Action::Save)?;
        let image = self.loaded()?;
        self.codec.save(&image.pixels, path)?;
        tracing::info!(path = %path.display(), "saved image");
        Ok(())
    }

    pub fn close(&mut self) -> Result<(), SessionError> {
        self.ensure_enabled(Action::Close)?;
        if let Some(image) = self.image.take() {
            tracing::info!(name = %image.meta.display_name(), "closed image");
        }
        self.bump_revision();
        Ok(())
    }

    /// Run `filter` over the current image in place.
    pub fn apply_filter(&mut self, filter: Filter) -> Result<(), SessionError> {
        self.ensure_enabled(Action::Filter(filter))?;
        let Some(image) = self.image.as_mut() else {
            return Err(SessionError::Unavailable(Action::Filter(filter)));
        };
        filter.apply(&mut image.pixels);
        self.bump_revision();
        tracing::debug!(filter = filter.description(), "applied filter");
        Ok(())
    }

    fn loaded(&self) -> Result<&LoadedImage, SessionError> {
        self.image
            .as_ref()
            .ok_or(SessionError::Unavailable(Action::Save))
    }

    fn ensure_enabled(&self, action: Action) -> Result<(), SessionError> {
        if self.is_enabled(action) {
            Ok(())
        } else {
            tracing::debug!(%action, "rejected unavailable action");
            Err(SessionError::Unavailable(action))
        }
    }

    const fn bump_revision(&mut self) {
        self.revision = self.revision.wrapping_add(1);
    }
}
