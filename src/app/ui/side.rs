use super::super::SnapShopApp;
use crate::session::Action;

const BUTTON_WIDTH: f32 = 150.0;

impl SnapShopApp {
    /// Filter buttons on top, file options below; enablement comes from the session.
    pub(crate) fn ui_action_panel(&mut self, ui: &mut egui::Ui) {
        let idle = self.accepts_actions();
        let filters: Vec<(Action, bool)> = self
            .session
            .filters()
            .iter()
            .map(|&filter| {
                let action = Action::Filter(filter);
                (action, idle && self.session.is_enabled(action))
            })
            .collect();
        let options: Vec<(Action, bool)> = self
            .session
            .actions()
            .filter(|(action, _)| !matches!(action, Action::Filter(_)))
            .map(|(action, enabled)| (action, idle && enabled))
            .collect();
        let mut clicked: Option<Action> = None;

        ui.add_space(6.0);
        ui.label("Filters");
        for (action, enabled) in filters {
            if Self::action_button(ui, action, enabled) {
                clicked = Some(action);
            }
        }

        ui.add_space(12.0);
        ui.separator();
        ui.label("Image");
        for (action, enabled) in options {
            if Self::action_button(ui, action, enabled) {
                clicked = Some(action);
            }
        }

        ui.add_space(12.0);
        let has_image = self.session.image().is_some();
        if ui
            .add_enabled(
                has_image,
                egui::Button::new("Image info")
                    .shortcut_text("Ctrl+I")
                    .min_size(egui::vec2(BUTTON_WIDTH, 0.0)),
            )
            .clicked()
        {
            self.ui.info_window_open = true;
        }

        if let Some(action) = clicked {
            self.trigger(action);
        }
    }

    fn action_button(ui: &mut egui::Ui, action: Action, enabled: bool) -> bool {
        let shortcut = match action {
            Action::Open => "Ctrl+O",
            Action::Save => "Ctrl+S",
            Action::Close => "Ctrl+W",
            Action::Filter(_) => "",
        };
        let button = egui::Button::new(action.label())
            .shortcut_text(shortcut)
            .min_size(egui::vec2(BUTTON_WIDTH, 0.0));
        ui.add_enabled(enabled, button).clicked()
    }
}
