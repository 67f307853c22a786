//! Image to ASCII converter using a luminance glyph ramp.

pub mod decode;
pub mod grid;
pub mod luma;
pub mod ramp;
pub mod render;

pub use decode::decode;
pub use grid::{build_grid, CharGrid};
pub use ramp::{glyph_for, GLYPH_RAMP};
pub use render::{render, render_text};

use image::DynamicImage;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum GlyphError {
    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, GlyphError>;

/// Grid and render an already decoded image.
pub fn convert(image: &DynamicImage) -> String {
    render_text(&build_grid(image))
}

/// Converter for image files
#[derive(Debug, Clone, Default)]
pub struct Converter {
    width: u32,
}

impl Converter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Requested output width. Stored but not applied: output always has one
    /// row per image row and half the image's columns.
    pub fn with_width(mut self, width: u32) -> Self {
        self.width = width;
        self
    }

    /// Decode `path` and return the complete rendered text.
    pub fn convert_file(&self, path: impl AsRef<Path>) -> Result<String> {
        let image = decode(path)?;
        if self.width != 0 && self.width != image.width() {
            log::warn!(
                "width {} ignored, output follows the {}px source width",
                self.width,
                image.width()
            );
        }
        Ok(convert(&image))
    }
}
