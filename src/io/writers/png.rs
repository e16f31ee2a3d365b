use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use image::DynamicImage;
use image::codecs::png::{CompressionType, FilterType, PngEncoder};

/// Write `img` as an optimized PNG, replacing any existing file.
pub fn write_png(output: &Path, img: &DynamicImage) -> crate::Result<()> {
    let file = File::create(output)?;
    let mut writer = BufWriter::new(file);
    let encoder =
        PngEncoder::new_with_quality(&mut writer, CompressionType::Best, FilterType::Adaptive);
    img.write_with_encoder(encoder)?;
    writer.flush()?;
    Ok(())
}
