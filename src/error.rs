use std::path::PathBuf;

use thiserror::Error;

/// Failures while composing an icon.
#[derive(Debug, Error)]
pub enum IconError {
    /// The source image is missing or could not be decoded.
    #[error("failed to load source image {}: {source}", path.display())]
    ImageLoad {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    /// The output file could not be created or encoded.
    #[error("failed to write icon {}: {source}", path.display())]
    ImageWrite {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("invalid icon dimensions: size={size}, logo_percentage={logo_percentage}")]
    InvalidDimension { size: u32, logo_percentage: f64 },
}
