/// Template matching implementation
///
/// Squared-difference scoring over every alignment, min-max normalized so
/// the threshold means the same thing for any image and template.
use super::types::{MatchLocation, Template};
use crate::recolor::error::{RecolorError, RecolorResult};
use image::GrayImage;
use imageproc::template_matching::{MatchTemplateMethod, match_template};

/// Normalized score below which a location counts as a match
pub const DEFAULT_THRESHOLD: f32 = 0.1;

/// Per-position similarity scores, one per candidate top-left corner.
///
/// Scores are normalized to 0.0..=1.0, lower is closer.
#[derive(Clone, Debug)]
pub struct ScoreMap {
    width: u32,
    height: u32,
    scores: Vec<f32>,
}

impl ScoreMap {
    /// Min-max normalize raw squared-difference scores into 0.0..=1.0.
    /// A flat map (every score equal) normalizes to all zeros.
    fn normalized(raw: &image::ImageBuffer<image::Luma<f32>, Vec<f32>>) -> Self {
        let (width, height) = raw.dimensions();
        let values = raw.as_raw();
        let (min, max) = values
            .iter()
            .fold((f32::INFINITY, f32::NEG_INFINITY), |(lo, hi), &v| {
                (lo.min(v), hi.max(v))
            });
        let range = max - min;
        let scores = if range > f32::EPSILON {
            values.iter().map(|&v| (v - min) / range).collect()
        } else {
            vec![0.0; values.len()]
        };
        Self {
            width,
            height,
            scores,
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn score(&self, row: u32, col: u32) -> Option<f32> {
        if row >= self.height || col >= self.width {
            return None;
        }
        self.scores
            .get((row as usize) * (self.width as usize) + col as usize)
            .copied()
    }

    /// Every location scoring strictly below `threshold`, row-major.
    pub fn locations_below(&self, threshold: f32) -> Vec<MatchLocation> {
        let width = self.width as usize;
        self.scores
            .iter()
            .enumerate()
            .filter(|(_, score)| **score < threshold)
            .map(|(idx, &score)| MatchLocation {
                row: (idx / width) as u32,
                col: (idx % width) as u32,
                score,
            })
            .collect()
    }
}

/// Template matcher for finding every copy of a symbol in an image
#[derive(Clone, Debug)]
pub struct TemplateMatcher {
    threshold: f32,
}

impl TemplateMatcher {
    /// Create a matcher that accepts normalized scores below `threshold`
    pub fn new(threshold: f32) -> Self {
        Self { threshold }
    }

    pub fn threshold(&self) -> f32 {
        self.threshold
    }

    /// Score every alignment of `template` against `source`.
    ///
    /// The map has `(H - h + 1)` rows and `(W - w + 1)` columns.
    pub fn score_map(&self, source: &GrayImage, template: &Template) -> RecolorResult<ScoreMap> {
        let (image_w, image_h) = source.dimensions();
        if template.width() > image_w || template.height() > image_h {
            return Err(RecolorError::TemplateTooLarge {
                template: (template.width(), template.height()),
                image: (image_w, image_h),
            });
        }
        let raw = match_template(
            source,
            template.pixels(),
            MatchTemplateMethod::SumOfSquaredErrors,
        );
        log::debug!(
            "  ⏳ Scored {}x{} alignments for a {}x{} template",
            raw.width(),
            raw.height(),
            template.width(),
            template.height()
        );
        Ok(ScoreMap::normalized(&raw))
    }

    /// Find all matches of `template` in `source`, in row-major order.
    ///
    /// Overlapping matches are all kept.
    pub fn find_matches(
        &self,
        source: &GrayImage,
        template: &Template,
    ) -> RecolorResult<Vec<MatchLocation>> {
        let scores = self.score_map(source, template)?;
        Ok(scores.locations_below(self.threshold))
    }
}

impl Default for TemplateMatcher {
    fn default() -> Self {
        Self::new(DEFAULT_THRESHOLD)
    }
}
