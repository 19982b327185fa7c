use egui_file_dialog::FileDialog;

#[derive(Default)]
pub struct UiState {
    pub(super) info_window_open: bool,
    pub(super) last_status: Option<String>,
    pub(super) error: Option<ErrorNotice>,
}

/// Error shown in a blocking window until the user dismisses it.
#[derive(Debug, Clone)]
pub struct ErrorNotice {
    pub(super) title: &'static str,
    pub(super) message: &'static str,
    pub(super) detail: String,
    /// Present the Open dialog again once dismissed.
    pub(super) reopen_on_dismiss: bool,
}

#[derive(Debug)]
pub enum NativeDialog {
    Open(FileDialog),
    Save(FileDialog),
}
