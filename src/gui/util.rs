// gui/util.rs
// Utility helpers for GUI

use crate::recolor::{Color, HueGradient, RecolorError, RecolorResult};
use crate::template_matching::Rect;
use image::{DynamicImage, ImageFormat};
use std::io::Cursor;

/// Largest area the region selector image may occupy
pub const SELECT_MAX_WIDTH: f64 = 960.0;
pub const SELECT_MAX_HEIGHT: f64 = 620.0;
/// Small images are enlarged up to this factor
pub const SELECT_MAX_ZOOM: f64 = 8.0;
/// On-screen enlargement of the hue gradient
pub const GRADIENT_ZOOM: u32 = 3;
/// Longest side of the live patch preview
pub const PATCH_PREVIEW_SIZE: f64 = 160.0;
const PATCH_MAX_ZOOM: f64 = 16.0;

pub fn base64_encode(data: &[u8]) -> String {
    const CHARS: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789+/";
    let mut result = String::with_capacity(data.len().div_ceil(3) * 4);
    for chunk in data.chunks(3) {
        let mut buf = [0u8; 3];
        buf[..chunk.len()].copy_from_slice(chunk);
        let b = ((buf[0] as u32) << 16) | ((buf[1] as u32) << 8) | (buf[2] as u32);
        result.push(CHARS[((b >> 18) & 63) as usize] as char);
        result.push(CHARS[((b >> 12) & 63) as usize] as char);
        result.push(if chunk.len() > 1 {
            CHARS[((b >> 6) & 63) as usize] as char
        } else {
            '='
        });
        result.push(if chunk.len() > 2 {
            CHARS[(b & 63) as usize] as char
        } else {
            '='
        });
    }
    result
}

/// Encode `image` as a PNG `data:` URL for an `img` element
pub fn png_data_url(image: &DynamicImage) -> RecolorResult<String> {
    let mut bytes = Vec::new();
    image
        .write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)
        .map_err(|e| RecolorError::Encode {
            description: e.to_string(),
        })?;
    Ok(format!("data:image/png;base64,{}", base64_encode(&bytes)))
}

/// Scale that fits a `width`x`height` image in the selector area
pub fn display_scale(width: u32, height: u32) -> f64 {
    let fit_w = SELECT_MAX_WIDTH / width.max(1) as f64;
    let fit_h = SELECT_MAX_HEIGHT / height.max(1) as f64;
    fit_w.min(fit_h).min(SELECT_MAX_ZOOM)
}

/// Map a displayed coordinate back to an image pixel edge in `0..=limit`
pub fn to_image_coord(element: f64, scale: f64, limit: u32) -> u32 {
    if scale <= 0.0 || !element.is_finite() {
        return 0;
    }
    (element / scale).round().clamp(0.0, limit as f64) as u32
}

/// Rectangle spanned by two drag points given in displayed coordinates
pub fn selection_rect(a: (f64, f64), b: (f64, f64), scale: f64, width: u32, height: u32) -> Rect {
    Rect::from_corners(
        (to_image_coord(a.0, scale, width), to_image_coord(a.1, scale, height)),
        (to_image_coord(b.0, scale, width), to_image_coord(b.1, scale, height)),
    )
}

/// Gradient pixel under a displayed coordinate of the enlarged strip
pub fn gradient_pixel(gradient: &HueGradient, element_x: f64, element_y: f64) -> Option<Color> {
    if element_x < 0.0 || element_y < 0.0 {
        return None;
    }
    let zoom = GRADIENT_ZOOM as f64;
    let x = ((element_x / zoom).floor() as u32).min(gradient.width().saturating_sub(1));
    let y = ((element_y / zoom).floor() as u32).min(gradient.height().saturating_sub(1));
    gradient.color_at(x, y)
}

/// Zoomed crop of the selector image, in CSS pixels.
/// The full image becomes a background of `background` size shifted by `offset`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PatchCrop {
    pub zoom: f64,
    pub size: (f64, f64),
    pub offset: (f64, f64),
    pub background: (f64, f64),
}

/// Crop showing `rect` of a `width`x`height` image; `None` while the rectangle is empty
pub fn patch_crop(rect: Rect, width: u32, height: u32) -> Option<PatchCrop> {
    if rect.is_empty() {
        return None;
    }
    let zoom = (PATCH_PREVIEW_SIZE / rect.width.max(rect.height) as f64).min(PATCH_MAX_ZOOM);
    Some(PatchCrop {
        zoom,
        size: (rect.width as f64 * zoom, rect.height as f64 * zoom),
        offset: (-(rect.x as f64) * zoom, -(rect.y as f64) * zoom),
        background: (width as f64 * zoom, height as f64 * zoom),
    })
}

impl PatchCrop {
    /// Inline style for a `div` showing the crop of `image_url`
    pub fn style(&self, image_url: &str) -> String {
        format!(
            "width:{}px; height:{}px; background-image:url('{}'); background-size:{}px {}px; background-position:{}px {}px; background-repeat:no-repeat; image-rendering:pixelated;",
            self.size.0,
            self.size.1,
            image_url,
            self.background.0,
            self.background.1,
            self.offset.0,
            self.offset.1
        )
    }
}

/// CSS color for a picked color
pub fn css_rgb(color: Color) -> String {
    format!("rgb({},{},{})", color[0], color[1], color[2])
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgb;

    #[test]
    fn test_base64_padding() {
        assert_eq!(base64_encode(b""), "");
        assert_eq!(base64_encode(b"f"), "Zg==");
        assert_eq!(base64_encode(b"fo"), "Zm8=");
        assert_eq!(base64_encode(b"foo"), "Zm9v");
        assert_eq!(base64_encode(b"foobar"), "Zm9vYmFy");
    }

    #[test]
    fn test_png_data_url_prefix() {
        let image = DynamicImage::ImageRgb8(image::RgbImage::new(2, 2));
        let url = png_data_url(&image).unwrap();
        assert!(url.starts_with("data:image/png;base64,iVBORw0KGgo"));
    }

    #[test]
    fn test_display_scale() {
        assert_eq!(display_scale(10, 10), SELECT_MAX_ZOOM);
        assert_eq!(display_scale(1920, 620), 0.5);
        assert_eq!(display_scale(960, 1240), 0.5);
    }

    #[test]
    fn test_selection_rect_maps_back_to_pixels() {
        let rect = selection_rect((80.0, 40.0), (16.0, 16.0), 8.0, 10, 10);
        assert_eq!(rect, Rect::new(2, 2, 8, 3));
    }

    #[test]
    fn test_click_without_drag_is_empty() {
        let rect = selection_rect((33.0, 17.0), (33.0, 17.0), 8.0, 10, 10);
        assert!(rect.is_empty());
    }

    #[test]
    fn test_selection_clamped_to_image() {
        let rect = selection_rect((-20.0, -5.0), (500.0, 500.0), 8.0, 10, 10);
        assert_eq!(rect, Rect::new(0, 0, 10, 10));
    }

    #[test]
    fn test_gradient_pixel_lookup() {
        let gradient = HueGradient::new();
        assert_eq!(gradient_pixel(&gradient, 1.0, 1.0), Some(Rgb([255, 0, 0])));
        assert_eq!(
            gradient_pixel(&gradient, 150.0, 60.0 * 3.0 + 2.0),
            gradient.hue_color(60)
        );
        // past the bottom edge clamps to the last row
        assert_eq!(gradient_pixel(&gradient, 0.0, 10_000.0), gradient.hue_color(179));
        assert_eq!(gradient_pixel(&gradient, -1.0, 5.0), None);
    }

    #[test]
    fn test_patch_crop_follows_rectangle() {
        assert_eq!(patch_crop(Rect::new(3, 3, 0, 5), 10, 10), None);

        let crop = patch_crop(Rect::new(2, 4, 8, 4), 10, 10).unwrap();
        assert_eq!(crop.zoom, 16.0);
        assert_eq!(crop.size, (128.0, 64.0));
        assert_eq!(crop.offset, (-32.0, -64.0));
        assert_eq!(crop.background, (160.0, 160.0));
        let style = crop.style("data:image/png;base64,AAAA");
        assert!(style.contains("url('data:image/png;base64,AAAA')"));
        assert!(style.contains("background-position:-32px -64px"));
    }

    #[test]
    fn test_large_patch_shrinks_to_preview_size() {
        let crop = patch_crop(Rect::new(0, 0, 320, 80), 640, 480).unwrap();
        assert_eq!(crop.zoom, 0.5);
        assert_eq!(crop.size, (160.0, 40.0));
    }
}
