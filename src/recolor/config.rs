//! Configuration for a recolor session

use crate::template_matching::DEFAULT_THRESHOLD;
use std::path::PathBuf;

pub const DEFAULT_INPUT: &str = "modified_image.png";
pub const DEFAULT_OUTPUT: &str = "modified_image_2.png";

#[derive(Debug, Clone)]
pub struct RecolorConfig {
    /// Image to search and recolor
    pub input_path: PathBuf,
    /// Where the recolored image is written
    pub output_path: PathBuf,
    /// Normalized score below which a location is a match (0.0 to 1.0)
    pub threshold: f32,
    /// Weight of the picked color in the blend (0.0 to 1.0)
    pub alpha: f32,
    /// Scale of the overview and final previews
    pub overview_scale: f32,
    /// Enlargement of the selected symbol preview
    pub symbol_scale: u32,
}

impl Default for RecolorConfig {
    fn default() -> Self {
        Self {
            input_path: PathBuf::from(DEFAULT_INPUT),
            output_path: PathBuf::from(DEFAULT_OUTPUT),
            threshold: DEFAULT_THRESHOLD,
            alpha: 0.5,
            overview_scale: 0.3,
            symbol_scale: 3,
        }
    }
}

impl RecolorConfig {
    pub fn with_paths(input: impl Into<PathBuf>, output: impl Into<PathBuf>) -> Self {
        Self {
            input_path: input.into(),
            output_path: output.into(),
            ..Self::default()
        }
    }
}
