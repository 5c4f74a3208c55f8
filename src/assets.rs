//! Team logo images, decoded and PNG-encoded once per run.

use crate::error::AppError;
use crate::layout::HEADER_LOGO_PX;
use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use image::imageops::FilterType;
use image::{DynamicImage, ImageFormat};
use std::io::Cursor;
use std::path::Path;

/// A logo ready to be embedded in the report.
#[derive(Debug, Clone, PartialEq)]
pub struct EmbeddedImage {
    pub data_uri: String,
    pub width: u32,
    pub height: u32,
}

impl EmbeddedImage {
    pub fn from_image(image: &DynamicImage) -> Result<Self, AppError> {
        Ok(Self {
            data_uri: png_data_uri(image)?,
            width: image.width(),
            height: image.height(),
        })
    }

    /// Width over height.
    pub fn aspect_ratio(&self) -> f64 {
        f64::from(self.width) / f64::from(self.height.max(1))
    }
}

/// Both logos used on every page.
#[derive(Debug, Clone)]
pub struct Logos {
    /// Opaque logo in the page corner, resized to a fixed square.
    pub header: EmbeddedImage,
    /// Transparent logo watermarked onto centre field at its own aspect ratio.
    pub watermark: EmbeddedImage,
}

impl Logos {
    pub fn load(header_path: &Path, watermark_path: &Path) -> Result<Self, AppError> {
        let header = image::open(header_path)?;
        let watermark = image::open(watermark_path)?;
        log::debug!(
            "loaded logos {}x{} and {}x{}",
            header.width(),
            header.height(),
            watermark.width(),
            watermark.height()
        );
        Self::from_images(&header, &watermark)
    }

    pub fn from_images(header: &DynamicImage, watermark: &DynamicImage) -> Result<Self, AppError> {
        let header = header
            .resize_exact(HEADER_LOGO_PX, HEADER_LOGO_PX, FilterType::Lanczos3)
            .to_rgb8();
        Ok(Self {
            header: EmbeddedImage::from_image(&DynamicImage::ImageRgb8(header))?,
            watermark: EmbeddedImage::from_image(watermark)?,
        })
    }
}

/// Encodes an image as a `data:image/png;base64,...` URI.
pub fn png_data_uri(image: &DynamicImage) -> Result<String, AppError> {
    let mut bytes = Vec::new();
    image.write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)?;
    Ok(format!("data:image/png;base64,{}", STANDARD.encode(&bytes)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgba, RgbaImage};

    fn solid(width: u32, height: u32) -> DynamicImage {
        DynamicImage::ImageRgba8(RgbaImage::from_pixel(width, height, Rgba([200, 30, 40, 128])))
    }

    #[test]
    fn header_logo_is_resized_to_a_square() {
        let logos = Logos::from_images(&solid(400, 300), &solid(300, 82)).unwrap();
        assert_eq!((logos.header.width, logos.header.height), (150, 150));
        assert_eq!((logos.watermark.width, logos.watermark.height), (300, 82));
        assert!((logos.watermark.aspect_ratio() - 300.0 / 82.0).abs() < 1e-12);
    }

    #[test]
    fn data_uri_round_trips_through_png() {
        let uri = png_data_uri(&solid(4, 2)).unwrap();
        let payload = uri.strip_prefix("data:image/png;base64,").unwrap();
        let bytes = STANDARD.decode(payload).unwrap();
        let decoded = image::load_from_memory_with_format(&bytes, ImageFormat::Png).unwrap();
        assert_eq!((decoded.width(), decoded.height()), (4, 2));
    }

    #[test]
    fn missing_logo_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("logo.png");
        assert!(matches!(
            Logos::load(&missing, &missing),
            Err(AppError::Image(_))
        ));
    }
}
