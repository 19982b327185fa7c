use super::super::SnapShopApp;
use crate::util::safe_usize_to_f32;
use egui::RichText;

impl SnapShopApp {
    pub(crate) fn ui_central_image(&mut self, ui: &mut egui::Ui) {
        // A dropped file goes through the same path as Open.
        let dropped = ui.input(|i| {
            i.raw
                .dropped_files
                .iter()
                .find_map(|file| file.path.clone())
        });
        if let Some(path) = dropped {
            tracing::debug!(path = %path.display(), "file dropped");
            if self.accepts_actions() {
                self.open_image(&path);
            }
        }

        let Some(display) = self.display.as_ref() else {
            ui.centered_and_justified(|ui| {
                ui.label(
                    RichText::new("Open an image to start (Ctrl+O), or drop a file here.")
                        .weak(),
                );
            });
            return;
        };

        let (tex_id, img_size) = (display.texture.id(), display.size);
        egui::ScrollArea::both().show(ui, |ui| {
            let size = egui::vec2(
                safe_usize_to_f32(img_size[0]),
                safe_usize_to_f32(img_size[1]),
            );
            ui.add(egui::Image::new((tex_id, size)));
        });
    }
}
