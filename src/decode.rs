//! Image loading with content-based format detection.

use crate::Result;
use image::{DynamicImage, ImageReader};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// Open and decode an image, sniffing the container from its bytes.
///
/// The file extension is ignored. Animated GIFs yield their first frame.
/// The file handle is closed when this returns.
pub fn decode(path: impl AsRef<Path>) -> Result<DynamicImage> {
    let path = path.as_ref();
    // ImageReader::open would seed the format from the extension
    let reader = ImageReader::new(BufReader::new(File::open(path)?)).with_guessed_format()?;
    log::debug!("{}: detected format {:?}", path.display(), reader.format());

    let image = reader.decode()?;
    log::debug!("{}: decoded {}x{}", path.display(), image.width(), image.height());
    Ok(image)
}
