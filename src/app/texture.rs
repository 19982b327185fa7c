use super::{DisplayTexture, SnapShopApp};
use crate::image::rgba_to_color_image;
use egui::{Context, TextureOptions};

impl SnapShopApp {
    pub(super) fn texture_is_stale(&self) -> bool {
        match (&self.display, self.session.image()) {
            (Some(display), Some(_)) => display.revision != self.session.revision(),
            (None, None) => false,
            _ => true,
        }
    }

    /// Re-upload the session image when it changed since the last upload.
    pub(super) fn sync_texture(&mut self, ctx: &Context) {
        if !self.texture_is_stale() {
            return;
        }
        let revision = self.session.revision();
        let Some(image) = self.session.image() else {
            self.display = None;
            return;
        };
        let pixels = rgba_to_color_image(&image.pixels);
        let size = pixels.size;
        if let Some(display) = self.display.as_mut() {
            display.texture.set(pixels, TextureOptions::LINEAR);
            display.size = size;
            display.revision = revision;
        } else {
            let texture = ctx.load_texture("session_image", pixels, TextureOptions::LINEAR);
            self.display = Some(DisplayTexture {
                texture,
                size,
                revision,
            });
        }
    }
}
