//! Alpha-blending the picked color over every match

use super::palette::Color;
use crate::template_matching::MatchLocation;
use image::RgbImage;

/// Blend one channel: `existing * (1 - alpha) + overlay * alpha`,
/// clamped to 0..=255 and truncated toward zero.
pub fn blend_channel(existing: u8, overlay: u8, alpha: f32) -> u8 {
    let alpha = alpha.clamp(0.0, 1.0) as f64;
    let mixed = existing as f64 * (1.0 - alpha) + overlay as f64 * alpha;
    mixed.clamp(0.0, 255.0) as u8
}

/// Blend `color` over the `size` region at every match location, in order.
///
/// Overlapping matches compound: a later blend starts from the result of
/// an earlier one. Regions are clipped to the image. Returns the number of
/// pixels written.
pub fn composite(
    image: &mut RgbImage,
    matches: &[MatchLocation],
    size: (u32, u32),
    color: Color,
    alpha: f32,
) -> usize {
    let (image_w, image_h) = image.dimensions();
    let mut touched = 0;
    for location in matches {
        let region = location.region(size);
        let x_end = region.x.saturating_add(region.width).min(image_w);
        let y_end = region.y.saturating_add(region.height).min(image_h);
        for y in region.y..y_end {
            for x in region.x..x_end {
                let pixel = image.get_pixel_mut(x, y);
                for (channel, overlay) in pixel.0.iter_mut().zip(color.0) {
                    *channel = blend_channel(*channel, overlay, alpha);
                }
                touched += 1;
            }
        }
    }
    touched
}
