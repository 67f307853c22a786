//! Character grid - one glyph per source pixel.

use crate::luma::luma16;
use crate::ramp::glyph_for;
use image::{DynamicImage, ImageBuffer, Rgba};
use rayon::prelude::*;

/// Row-major grid of glyphs with the same dimensions as its source image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CharGrid {
    width: u32,
    height: u32,
    cells: Vec<char>,
}

impl CharGrid {
    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn get(&self, x: u32, y: u32) -> Option<char> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.cells.get(y as usize * self.width as usize + x as usize).copied()
    }

    pub fn row(&self, y: u32) -> Option<&[char]> {
        if y >= self.height {
            return None;
        }
        let start = y as usize * self.width as usize;
        self.cells.get(start..start + self.width as usize)
    }

    /// Rows top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[char]> + '_ {
        let w = self.width as usize;
        (0..self.height as usize).map(move |y| &self.cells[y * w..(y + 1) * w])
    }
}

/// Build the glyph grid for a decoded image.
///
/// Each cell depends only on its own pixel, so rows are filled in parallel.
pub fn build_grid(image: &DynamicImage) -> CharGrid {
    // 16-bit so deep sources are weighted before any narrowing
    let rgba = image.to_rgba16();
    grid_from_rgba(&rgba)
}

fn grid_from_rgba(rgba: &ImageBuffer<Rgba<u16>, Vec<u16>>) -> CharGrid {
    let (width, height) = rgba.dimensions();
    let mut cells = vec![' '; width as usize * height as usize];

    if width > 0 {
        cells
            .par_chunks_mut(width as usize)
            .enumerate()
            .for_each(|(y, row)| {
                for (x, cell) in row.iter_mut().enumerate() {
                    *cell = glyph_for(luma16(*rgba.get_pixel(x as u32, y as u32)));
                }
            });
    }

    log::debug!("built {width}x{height} glyph grid");
    CharGrid { width, height, cells }
}
