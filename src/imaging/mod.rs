/// Image decoding module
///
/// This module handles:
/// - Decoding the current file into a raw BGR buffer for processing
/// - Fitting a displayable bitmap into the image label

pub mod loader;
pub mod preview;

pub use loader::BgrImage;
pub use preview::FittedBitmap;
