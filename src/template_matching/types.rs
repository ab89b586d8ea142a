/// Template matching data types
use crate::recolor::error::{RecolorError, RecolorResult};
use image::GrayImage;

/// Axis-aligned box in image pixel coordinates
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rect {
    /// Left edge (column)
    pub x: u32,
    /// Top edge (row)
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl Rect {
    pub fn new(x: u32, y: u32, width: u32, height: u32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Build a rectangle from two opposite corners given in any order.
    /// The far corner is exclusive, so equal corners give a zero-area box.
    pub fn from_corners(a: (u32, u32), b: (u32, u32)) -> Self {
        let (left, right) = (a.0.min(b.0), a.0.max(b.0));
        let (top, bottom) = (a.1.min(b.1), a.1.max(b.1));
        Self::new(left, top, right - left, bottom - top)
    }

    pub fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Check the rectangle can serve as a template for an image of the
    /// given dimensions.
    pub fn validate_within(&self, image_width: u32, image_height: u32) -> RecolorResult<()> {
        if self.is_empty() {
            return Err(RecolorError::InvalidSelection {
                reason: format!("zero-area rectangle {}x{}", self.width, self.height),
            });
        }
        if self.width > image_width || self.height > image_height {
            return Err(RecolorError::TemplateTooLarge {
                template: self.size(),
                image: (image_width, image_height),
            });
        }
        let fits_x = self.x.checked_add(self.width).is_some_and(|r| r <= image_width);
        let fits_y = self.y.checked_add(self.height).is_some_and(|b| b <= image_height);
        if !fits_x || !fits_y {
            return Err(RecolorError::InvalidSelection {
                reason: format!(
                    "rectangle {} extends past the {}x{} image",
                    self, image_width, image_height
                ),
            });
        }
        Ok(())
    }
}

impl std::fmt::Display for Rect {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{},{},{},{}]", self.x, self.y, self.width, self.height)
    }
}

/// Grayscale symbol cut out of the source image
#[derive(Clone, Debug)]
pub struct Template {
    /// Where the template was cut from
    pub origin: Rect,
    pixels: GrayImage,
}

impl Template {
    /// Cut the template out of `source` at `rect`.
    pub fn extract(source: &GrayImage, rect: Rect) -> RecolorResult<Self> {
        rect.validate_within(source.width(), source.height())?;
        let pixels =
            image::imageops::crop_imm(source, rect.x, rect.y, rect.width, rect.height).to_image();
        Ok(Self {
            origin: rect,
            pixels,
        })
    }

    pub fn width(&self) -> u32 {
        self.pixels.width()
    }

    pub fn height(&self) -> u32 {
        self.pixels.height()
    }

    pub fn pixels(&self) -> &GrayImage {
        &self.pixels
    }
}

/// A position where the template matched
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MatchLocation {
    /// Top edge of the match
    pub row: u32,
    /// Left edge of the match
    pub col: u32,
    /// Normalized squared-difference score (0.0 = identical)
    pub score: f32,
}

impl MatchLocation {
    /// Region covered by this match for a template of `size`.
    pub fn region(&self, size: (u32, u32)) -> Rect {
        Rect::new(self.col, self.row, size.0, size.1)
    }
}

impl std::fmt::Display for MatchLocation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "(row {}, col {}) score {:.4}", self.row, self.col, self.score)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_corners_normalizes_drag_direction() {
        let rect = Rect::from_corners((7, 9), (2, 3));
        assert_eq!(rect, Rect::new(2, 3, 5, 6));
    }

    #[test]
    fn test_zero_area_rejected() {
        let err = Rect::new(4, 4, 0, 3).validate_within(10, 10).unwrap_err();
        assert!(matches!(err, RecolorError::InvalidSelection { .. }));
    }

    #[test]
    fn test_oversized_rejected() {
        let err = Rect::new(0, 0, 11, 2).validate_within(10, 10).unwrap_err();
        assert!(matches!(err, RecolorError::TemplateTooLarge { .. }));
    }

    #[test]
    fn test_out_of_bounds_rejected() {
        let err = Rect::new(8, 8, 3, 3).validate_within(10, 10).unwrap_err();
        assert!(matches!(err, RecolorError::InvalidSelection { .. }));
        assert!(Rect::new(7, 7, 3, 3).validate_within(10, 10).is_ok());
    }

    #[test]
    fn test_extract_template() {
        let source = GrayImage::from_fn(6, 6, |x, y| image::Luma([(y * 6 + x) as u8]));
        let template = Template::extract(&source, Rect::new(1, 2, 3, 2)).unwrap();
        assert_eq!((template.width(), template.height()), (3, 2));
        assert_eq!(template.pixels().get_pixel(0, 0)[0], 13);
        assert_eq!(template.pixels().get_pixel(2, 1)[0], 21);
    }
}
