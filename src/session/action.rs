use crate::image::Filter;
use std::fmt;

/// Whether the session currently holds an image.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Empty,
    Loaded,
}

/// A user-facing action whose availability the session decides.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    Open,
    Save,
    Close,
    Filter(Filter),
}

impl Action {
    /// Enablement policy: `Open` is always available, everything else needs an image.
    pub const fn enabled_in(self, state: SessionState) -> bool {
        match self {
            Self::Open => true,
            Self::Save | Self::Close | Self::Filter(_) => matches!(state, SessionState::Loaded),
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Open => "Open...",
            Self::Save => "Save As...",
            Self::Close => "Close image",
            Self::Filter(filter) => filter.description(),
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
