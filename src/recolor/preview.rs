//! Preview images shown while the user picks a color and after compositing

use crate::template_matching::{MatchLocation, Template};
use image::imageops::{self, FilterType};
use image::{GrayImage, Rgb, RgbImage};
use imageproc::drawing::draw_hollow_rect_mut;
use imageproc::rect::Rect as DrawRect;

/// Outline color for matches in the overview
pub const MATCH_OUTLINE: Rgb<u8> = Rgb([0, 255, 0]);
/// Outline thickness in source pixels
const OUTLINE_THICKNESS: u32 = 2;

/// What the matcher found, rendered for display
#[derive(Clone, Debug)]
pub struct MatchPreview {
    /// Source image with every match outlined, scaled down
    pub overview: RgbImage,
    /// The selected symbol, enlarged
    pub symbol: GrayImage,
    pub match_count: usize,
}

impl MatchPreview {
    pub fn render(
        gray: &GrayImage,
        template: &Template,
        matches: &[MatchLocation],
        overview_scale: f32,
        symbol_scale: u32,
    ) -> Self {
        let outlined = outline_matches(gray, matches, (template.width(), template.height()));
        let overview = scale_image(&outlined, overview_scale);
        let symbol_scale = symbol_scale.max(1);
        let symbol = imageops::resize(
            template.pixels(),
            template.width() * symbol_scale,
            template.height() * symbol_scale,
            FilterType::Nearest,
        );
        Self {
            overview,
            symbol,
            match_count: matches.len(),
        }
    }
}

/// Color copy of `gray` with a green box around every match
pub fn outline_matches(gray: &GrayImage, matches: &[MatchLocation], size: (u32, u32)) -> RgbImage {
    let mut canvas = image::DynamicImage::ImageLuma8(gray.clone()).to_rgb8();
    for location in matches {
        for inset in 0..OUTLINE_THICKNESS {
            let (w, h) = (
                size.0.saturating_sub(2 * inset),
                size.1.saturating_sub(2 * inset),
            );
            if w == 0 || h == 0 {
                break;
            }
            let rect = DrawRect::at((location.col + inset) as i32, (location.row + inset) as i32)
                .of_size(w, h);
            draw_hollow_rect_mut(&mut canvas, rect, MATCH_OUTLINE);
        }
    }
    canvas
}

/// Resize by `scale`, never below one pixel per side
pub fn scale_image(image: &RgbImage, scale: f32) -> RgbImage {
    let scale = if scale.is_finite() && scale > 0.0 { scale } else { 1.0 };
    let w = ((image.width() as f32 * scale).round() as u32).max(1);
    let h = ((image.height() as f32 * scale).round() as u32).max(1);
    imageops::resize(image, w, h, FilterType::Triangle)
}
