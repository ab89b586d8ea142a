//! Reading the source image and writing the result

use super::error::{RecolorError, RecolorResult};
use image::{GrayImage, RgbImage};
use std::path::Path;

/// The loaded image in both forms the pipeline needs
#[derive(Clone, Debug)]
pub struct SourceImage {
    /// Original colors, recolored in place and written out
    pub color: RgbImage,
    /// Luma version used for matching and selection
    pub gray: GrayImage,
}

impl SourceImage {
    pub fn load(path: &Path) -> RecolorResult<Self> {
        let decoded = image::open(path).map_err(|source| RecolorError::Load {
            path: path.to_path_buf(),
            source,
        })?;
        let source = Self::from_color(decoded.to_rgb8());
        log::info!(
            "📂 Loaded {} ({}x{})",
            path.display(),
            source.width(),
            source.height()
        );
        Ok(source)
    }

    pub fn from_color(color: RgbImage) -> Self {
        let gray = image::DynamicImage::ImageRgb8(color.clone()).to_luma8();
        Self { color, gray }
    }

    pub fn width(&self) -> u32 {
        self.color.width()
    }

    pub fn height(&self) -> u32 {
        self.color.height()
    }
}

/// Write `image` to `path`, the format follows the file extension.
pub fn write_image(image: &RgbImage, path: &Path) -> RecolorResult<()> {
    image.save(path).map_err(|source| RecolorError::Write {
        path: path.to_path_buf(),
        source,
    })?;
    log::info!("💾 Wrote {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgb;

    fn temp_path(name: &str) -> std::path::PathBuf {
        std::env::temp_dir().join(format!("symbol-recolor-{}-{}", std::process::id(), name))
    }

    #[test]
    fn test_missing_file_is_load_error() {
        let path = temp_path("does-not-exist.png");
        let err = SourceImage::load(&path).unwrap_err();
        assert!(matches!(err, RecolorError::Load { .. }));
        assert!(err.to_string().contains("does-not-exist.png"));
    }

    #[test]
    fn test_gray_matches_color_dimensions() {
        let source = SourceImage::from_color(RgbImage::from_pixel(7, 4, Rgb([10, 200, 30])));
        assert_eq!(source.gray.dimensions(), (7, 4));
    }

    #[test]
    fn test_gray_of_neutral_pixels_is_unchanged() {
        let source = SourceImage::from_color(RgbImage::from_pixel(2, 2, Rgb([200, 200, 200])));
        assert_eq!(source.gray.get_pixel(1, 1)[0], 200);
    }

    #[test]
    fn test_write_then_load() {
        let path = temp_path("write-load.png");
        let image = RgbImage::from_fn(5, 3, |x, y| Rgb([x as u8 * 40, y as u8 * 60, 7]));
        write_image(&image, &path).unwrap();
        let loaded = SourceImage::load(&path).unwrap();
        assert_eq!(loaded.color, image);
        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn test_unwritable_path_is_write_error() {
        let path = temp_path("no-such-dir").join("out.png");
        let image = RgbImage::new(2, 2);
        let err = write_image(&image, &path).unwrap_err();
        assert!(matches!(err, RecolorError::Write { .. }));
    }
}
