use super::Action;
use crate::image::{DecodeError, EncodeError};
use thiserror::Error;

#[derive(Debug, Clone, Error)]
pub enum SessionError {
    /// The action is disabled in the current state; nothing was changed.
    #[error("\"{0}\" is unavailable right now")]
    Unavailable(Action),
    #[error("could not open image {0}")]
    Decode(#[from] DecodeError),
    #[error("could not save image {0}")]
    Encode(#[from] EncodeError),
}

impl SessionError {
    /// A failed open leaves the session as it was; the caller should ask for another file.
    pub const fn reprompts_open(&self) -> bool {
        matches!(self, Self::Decode(_))
    }
}
