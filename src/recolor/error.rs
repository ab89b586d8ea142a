use std::path::PathBuf;
use thiserror::Error;

/// A specialized `Result` type for recolor operations.
pub type RecolorResult<T> = Result<T, RecolorError>;

/// The error type for every stage of a recolor session.
///
/// All variants are terminal: the session stops and the process exits
/// with a non-zero status.
#[derive(Debug, Error)]
pub enum RecolorError {
    #[error("Failed to load image {path:?}: {source}")]
    Load {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("Invalid selection: {reason}")]
    InvalidSelection { reason: String },

    #[error(
        "Template {}x{} is larger than the source image {}x{}",
        template.0, template.1, image.0, image.1
    )]
    TemplateTooLarge {
        template: (u32, u32),
        image: (u32, u32),
    },

    #[error("Color pick cancelled before a color was chosen")]
    PickCancelled,

    #[error("Failed to write image {path:?}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("Failed to encode preview: {description}")]
    Encode { description: String },

    #[error("The window was closed while waiting for input")]
    UiClosed,
}

impl RecolorError {
    /// True when the session ended because the user backed out rather
    /// than because something failed.
    pub fn is_user_cancellation(&self) -> bool {
        match self {
            RecolorError::PickCancelled | RecolorError::UiClosed => true,
            RecolorError::InvalidSelection { reason } => reason == SELECTION_CANCELLED,
            _ => false,
        }
    }

    pub(crate) fn selection_cancelled() -> Self {
        RecolorError::InvalidSelection {
            reason: SELECTION_CANCELLED.to_string(),
        }
    }
}

const SELECTION_CANCELLED: &str = "selection cancelled";
