//! Text output for a character grid.

use crate::grid::CharGrid;

/// Columns emitted per row: 0, 2, 4, ...
///
/// Terminal glyphs are roughly twice as tall as wide, so keeping every other
/// column stands in for aspect-ratio correction.
pub const COLUMN_STRIDE: usize = 2;

/// One line per grid row, without line terminators.
pub fn render(grid: &CharGrid) -> Vec<String> {
    grid.rows()
        .map(|row| row.iter().step_by(COLUMN_STRIDE).collect())
        .collect()
}

/// Rendered rows, each terminated by `\n`.
pub fn render_text(grid: &CharGrid) -> String {
    let lines = render(grid);
    let mut out = String::with_capacity(lines.iter().map(|l| l.len() + 1).sum());
    for line in &lines {
        out.push_str(line);
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::build_grid;
    use image::{DynamicImage, GrayImage, Luma};

    fn grid_from(rows: &[&[u8]]) -> CharGrid {
        let (w, h) = (rows[0].len() as u32, rows.len() as u32);
        let img = GrayImage::from_fn(w, h, |x, y| Luma([rows[y as usize][x as usize]]));
        build_grid(&DynamicImage::ImageLuma8(img))
    }

    #[test]
    fn two_by_two_keeps_first_column() {
        let grid = grid_from(&[&[0, 255], &[0, 255]]);
        assert_eq!(render(&grid), vec![" ", " "]);
        assert_eq!(render_text(&grid), " \n \n");
    }

    #[test]
    fn odd_width_rounds_up() {
        let grid = grid_from(&[&[255, 0, 255, 0, 255]]);
        assert_eq!(render(&grid), vec!["###"]);
    }

    #[test]
    fn no_trimming() {
        let grid = grid_from(&[&[0, 0, 0, 0], &[255, 255, 255, 255]]);
        assert_eq!(render_text(&grid), "  \n##\n");
    }

    #[test]
    fn empty_grid_renders_nothing() {
        let grid = build_grid(&DynamicImage::ImageLuma8(GrayImage::new(0, 0)));
        assert!(render(&grid).is_empty());
        assert_eq!(render_text(&grid), "");
    }
}
