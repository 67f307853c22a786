//! Glyph ramp and the brightness-to-glyph mapping.

/// Glyphs ordered from darkest (space) to brightest.
pub const GLYPH_RAMP: [char; 12] = [' ', '.', '\'', ',', ';', '"', 'o', 'O', '%', '8', '@', '#'];

const LAST: u32 = GLYPH_RAMP.len() as u32 - 1;

/// Ramp index for an 8-bit intensity: `floor(g * 11 / 255)`.
///
/// The floor makes the buckets uneven: the first eleven hold 23 or 24
/// intensities each and the brightest glyph is reached only at 255.
#[inline]
pub fn bucket_index(gray: u8) -> usize {
    (gray as u32 * LAST / 255) as usize
}

/// Map an 8-bit intensity to its glyph.
#[inline]
pub fn glyph_for(gray: u8) -> char {
    GLYPH_RAMP[bucket_index(gray)]
}
