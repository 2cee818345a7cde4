use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use image::codecs::png::{CompressionType, FilterType, PngEncoder};
use image::{ColorType, ImageEncoder, ImageError, RgbImage};

use crate::error::IconError;

/// Encode `canvas` as an RGB PNG at `path`, using maximum compression.
pub fn write_png(canvas: &RgbImage, path: &Path) -> Result<(), IconError> {
    let write_err = |source: ImageError| IconError::ImageWrite {
        path: path.to_path_buf(),
        source,
    };

    let file = File::create(path).map_err(|e| write_err(ImageError::IoError(e)))?;
    let mut writer = BufWriter::new(file);

    let encoder =
        PngEncoder::new_with_quality(&mut writer, CompressionType::Best, FilterType::Adaptive);
    encoder
        .write_image(
            canvas.as_raw(),
            canvas.width(),
            canvas.height(),
            ColorType::Rgb8,
        )
        .map_err(write_err)?;

    writer
        .into_inner()
        .map_err(|e| write_err(ImageError::IoError(e.into_error())))?;
    Ok(())
}
