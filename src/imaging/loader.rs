//! Image file loader
//!
//! Decodes whatever the `image` crate recognises, sniffing the format from
//! the file contents so extension-less or mislabelled files still open.
//! Each decode yields the two renditions the viewer needs: a raw BGR buffer
//! for pixel processing and a bitmap fitted to the image label.

use image::{DynamicImage, ImageError, ImageReader};
use log::debug;
use std::path::Path;

use super::preview::fit_to_area;
use crate::error::{Result, ViewerError};
use crate::state::data::LoadedImage;

/// Packed 8-bit BGR pixels, row-major, no padding
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BgrImage {
    pub width: u32,
    pub height: u32,
    pub data: Vec<u8>,
}

impl BgrImage {
    /// Wrap an existing buffer; `None` if its length does not match the dimensions
    #[cfg(test)]
    pub fn from_raw(width: u32, height: u32, data: Vec<u8>) -> Option<Self> {
        if data.len() != width as usize * height as usize * 3 {
            return None;
        }
        Some(Self {
            width,
            height,
            data,
        })
    }

    /// Convert any decoded image to 3-channel BGR (alpha is dropped, gray is expanded)
    pub fn from_dynamic(image: &DynamicImage) -> Self {
        let rgb = image.to_rgb8();
        let (width, height) = rgb.dimensions();
        let data = rgb
            .pixels()
            .flat_map(|pixel| [pixel[2], pixel[1], pixel[0]])
            .collect();

        Self {
            width,
            height,
            data,
        }
    }

    /// Iterate over pixels as `[b, g, r]`
    pub fn pixels(&self) -> impl Iterator<Item = [u8; 3]> + '_ {
        self.data
            .chunks_exact(3)
            .map(|chunk| [chunk[0], chunk[1], chunk[2]])
    }

    /// Opaque RGBA bytes, the layout the GUI toolkit uploads
    pub fn to_rgba(&self) -> Vec<u8> {
        self.pixels()
            .flat_map(|[b, g, r]| [r, g, b, u8::MAX])
            .collect()
    }
}

/// Decode the file at `path`
pub fn decode(path: &Path) -> Result<DynamicImage> {
    let decode_error = |source: ImageError| ViewerError::Decode {
        path: path.to_path_buf(),
        source,
    };

    let reader = ImageReader::open(path)
        .and_then(|reader| reader.with_guessed_format())
        .map_err(|e| decode_error(ImageError::IoError(e)))?;

    reader.decode().map_err(decode_error)
}

/// Decode `path` and build both renditions for the viewer
pub fn load(path: &Path, fit_area: (u32, u32)) -> Result<LoadedImage> {
    let image = decode(path)?;
    debug!(
        "Decoded {} ({}x{})",
        path.display(),
        image.width(),
        image.height()
    );

    Ok(LoadedImage {
        path: path.to_path_buf(),
        bgr: BgrImage::from_dynamic(&image),
        bitmap: fit_to_area(&image, fit_area),
    })
}
