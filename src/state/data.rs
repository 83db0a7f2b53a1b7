//! Shared data structures for the application state
//!
//! These structs represent the data model that flows between
//! the decoding layer and the UI layer.

use std::path::PathBuf;

use crate::imaging::{BgrImage, FittedBitmap};

/// The image currently shown in the label
#[derive(Debug, Clone)]
pub struct LoadedImage {
    /// Full path of the decoded file
    pub path: PathBuf,
    /// Raw pixels used by the brightness inspection
    pub bgr: BgrImage,
    /// Bitmap already fitted to the label, before zoom
    pub bitmap: FittedBitmap,
}
