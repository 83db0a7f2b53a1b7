//! Display bitmap generation
//! Scales a decoded image to fit the image label, keeping its aspect ratio

use iced::widget::image::Handle;
use image::{imageops::FilterType, DynamicImage};

/// A bitmap ready to hand to the image widget
#[derive(Debug, Clone)]
pub struct FittedBitmap {
    pub width: u32,
    pub height: u32,
    pub handle: Handle,
}

impl FittedBitmap {
    /// Wrap already-scaled RGBA bytes
    pub fn from_rgba(width: u32, height: u32, rgba: Vec<u8>) -> Self {
        Self {
            width,
            height,
            handle: Handle::from_rgba(width, height, rgba),
        }
    }
}

/// Fit `image` inside `area` (width, height) with Lanczos3 resampling.
/// The result touches the area on at least one axis; smaller images are enlarged.
pub fn fit_to_area(image: &DynamicImage, area: (u32, u32)) -> FittedBitmap {
    let (width, height) = area;
    let fitted = image
        .resize(width.max(1), height.max(1), FilterType::Lanczos3)
        .to_rgba8();
    let (width, height) = fitted.dimensions();

    FittedBitmap::from_rgba(width, height, fitted.into_raw())
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgb, RgbImage};

    fn solid(width: u32, height: u32) -> DynamicImage {
        DynamicImage::ImageRgb8(RgbImage::from_pixel(width, height, Rgb([40, 80, 120])))
    }

    #[test]
    fn tall_image_is_bounded_by_height() {
        let bitmap = fit_to_area(&solid(300, 600), (634, 480));
        assert_eq!((bitmap.width, bitmap.height), (240, 480));
    }

    #[test]
    fn large_wide_image_is_shrunk_to_width() {
        let bitmap = fit_to_area(&solid(4000, 1000), (634, 480));
        assert_eq!(bitmap.width, 634);
        assert!(bitmap.height <= 480);
    }
}
