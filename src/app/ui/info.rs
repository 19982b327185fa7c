use super::super::SnapShopApp;
use crate::image::{
    describe_aspect_ratio, format_system_time, human_readable_bytes, total_pixel_count,
};
use egui::{Color32, RichText};

impl SnapShopApp {
    pub(crate) fn ui_status_bar(&self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            let size_label = self.session.image().map_or_else(
                || "No image".to_string(),
                |image| {
                    let [w, h] = image.size();
                    format!("{w} × {h} px")
                },
            );
            ui.label(
                RichText::new(size_label)
                    .small()
                    .color(Color32::from_gray(180)),
            );
            if let Some(msg) = &self.ui.last_status {
                ui.separator();
                ui.label(
                    RichText::new(msg.as_str())
                        .small()
                        .color(Color32::from_gray(200)),
                );
            }
        });
    }

    pub(crate) fn ui_image_info_window(&mut self, ctx: &egui::Context) {
        if !self.ui.info_window_open {
            return;
        }
        let Some(image) = self.session.image() else {
            self.ui.info_window_open = false;
            return;
        };

        egui::Window::new("Image info")
            .open(&mut self.ui.info_window_open)
            .resizable(false)
            .collapsible(false)
            .show(ctx, |ui| {
                let meta = &image.meta;
                ui.heading("File");
                ui.label(format!("Name: {}", meta.display_name()));
                ui.label(format!("Path: {}", meta.path().display()));
                if let Some(bytes) = meta.byte_len() {
                    ui.label(format!(
                        "Size: {} ({bytes} bytes)",
                        human_readable_bytes(bytes),
                    ));
                } else {
                    ui.label("Size: Unknown");
                }
                if let Some(modified) = meta.last_modified() {
                    ui.label(format!("Modified: {}", format_system_time(modified)));
                } else {
                    ui.label("Modified: Unknown");
                }

                ui.add_space(6.0);
                ui.heading("Pixels");
                let [w, h] = image.size();
                ui.label(format!("Dimensions: {w} × {h}"));
                ui.label(format!(
                    "Total pixels: {}",
                    total_pixel_count(image.size())
                ));
                if let Some(ratio) = describe_aspect_ratio(image.size()) {
                    ui.label(format!("Aspect ratio: {ratio}"));
                }
            });
    }

    pub(crate) fn ui_error_window(&mut self, ctx: &egui::Context) {
        let Some(notice) = self.ui.error.as_ref() else {
            return;
        };
        let mut dismissed = false;
        let mut open = true;
        egui::Window::new(notice.title)
            .open(&mut open)
            .resizable(false)
            .collapsible(false)
            .anchor(egui::Align2::CENTER_CENTER, egui::Vec2::ZERO)
            .show(ctx, |ui| {
                ui.label(notice.message);
                ui.add_space(4.0);
                ui.label(RichText::new(notice.detail.as_str()).small().weak());
                ui.add_space(8.0);
                if ui.button("OK").clicked() {
                    dismissed = true;
                }
            });
        if dismissed || !open {
            self.dismiss_error();
        }
    }
}
