use std::path::Path;

use image::{DynamicImage, GenericImageView, ImageReader};
use tracing::debug;

use crate::error::Result;

/// Decode an image, guessing the format from its content rather than its extension.
pub fn read_image(path: &Path) -> Result<DynamicImage> {
    let img = ImageReader::open(path)?.with_guessed_format()?.decode()?;
    let (width, height) = img.dimensions();
    debug!("Decoded {:?}: {}x{} {:?}", path, width, height, img.color());
    Ok(img)
}
