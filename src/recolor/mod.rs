//! Symbol recoloring pipeline
//!
//! Loads an image, matches a user-selected symbol everywhere in it and
//! tints every match with a picked color.

pub mod compositor;
pub mod config;
pub mod error;
pub mod loader;
pub mod palette;
pub mod preview;
pub mod session;


// Re-export main types and functions
pub use compositor::{blend_channel, composite};
pub use config::RecolorConfig;
pub use error::{RecolorError, RecolorResult};
pub use loader::{SourceImage, write_image};
pub use palette::{Color, HueGradient, hsv_to_rgb, parse_hex_color, to_hex};
pub use preview::MatchPreview;
pub use session::{
    ColorChoice, Interaction, ScriptedInteraction, SessionSummary, recolor_source, run_session,
};
