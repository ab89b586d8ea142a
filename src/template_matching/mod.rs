/// Template matching module for locating a selected symbol in an image
///
/// This module provides:
/// - Rectangle selection types and template extraction
/// - Squared-difference scoring normalized to 0.0-1.0
/// - Thresholding to row-major match locations
pub mod matcher;
pub mod types;

pub use matcher::{DEFAULT_THRESHOLD, ScoreMap, TemplateMatcher};
pub use types::{MatchLocation, Rect, Template};
