pub mod color;
pub mod encode;
pub mod layout;

use std::path::Path;

use image::imageops::{self, FilterType};
use image::{DynamicImage, RgbImage};
use tracing::{debug, info};

use crate::config::IconConfig;
use crate::error::IconError;
pub use color::Background;
pub use encode::write_png;
pub use layout::Layout;

/// Compose `source` onto a fresh canvas filled with `background`.
///
/// The logo is squashed to `logo_size`×`logo_size` with Lanczos3 and pasted
/// at the layout offset. Alpha is dropped before pasting, so transparent
/// source pixels overwrite the canvas with their raw color.
pub fn compose(source: &DynamicImage, layout: &Layout, background: Background) -> RgbImage {
    let mut canvas = RgbImage::from_pixel(layout.size, layout.size, background.0);

    if layout.logo_size == 0 {
        return canvas;
    }

    let logo = imageops::resize(
        &source.to_rgb8(),
        layout.logo_size,
        layout.logo_size,
        FilterType::Lanczos3,
    );
    imageops::replace(
        &mut canvas,
        &logo,
        i64::from(layout.offset),
        i64::from(layout.offset),
    );
    canvas
}

/// Load `source_path`, compose it and write the icon to `output_path`.
pub fn create_icon(
    source_path: &Path,
    output_path: &Path,
    size: u32,
    logo_percentage: f64,
    background: Background,
) -> Result<Layout, IconError> {
    let layout = Layout::compute(size, logo_percentage)?;

    let source = image::open(source_path).map_err(|source| IconError::ImageLoad {
        path: source_path.to_path_buf(),
        source,
    })?;
    debug!(
        "Loaded {} ({}x{})",
        source_path.display(),
        source.width(),
        source.height()
    );
    if source.width() != source.height() {
        debug!("Source is not square, logo will be stretched");
    }

    let canvas = compose(&source, &layout, background);
    write_png(&canvas, output_path)?;

    println!(
        "✓ Created: {} ({}x{}, logo at {}%)",
        output_path.display(),
        size,
        size,
        logo_percentage
    );
    Ok(layout)
}

/// Run every configured job in order, stopping at the first failure.
///
/// Icons written before a failure are left on disk.
pub fn generate_all(config: &IconConfig) -> Result<usize, IconError> {
    info!(
        "Generating {} icons from {}",
        config.icons.len(),
        config.source.display()
    );

    for job in &config.icons {
        let layout = create_icon(
            &config.source,
            &job.output,
            job.size,
            job.logo_percentage,
            config.background,
        )?;
        debug!(
            "{}: logo {}px at offset {}",
            job.output.display(),
            layout.logo_size,
            layout.offset
        );
    }

    Ok(config.icons.len())
}
