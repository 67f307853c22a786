//! RGBA to 8-bit gray using BT.601 luma weights.

use image::Rgba;

// BT.601 weights scaled so they sum to 1 << 16.
const WR: u32 = 19595;
const WG: u32 = 38470;
const WB: u32 = 7471;

/// Gray intensity of a straight-alpha 16-bit RGBA pixel.
///
/// Channels are premultiplied by alpha before weighting, so a fully
/// transparent pixel is black regardless of its color.
/// Y = (19595*R + 38470*G + 7471*B + 2^15) >> 24.
pub fn luma16(px: Rgba<u16>) -> u8 {
    let [r, g, b, a] = px.0;
    let a = a as u32;
    let premul = |c: u16| c as u32 * a / 0xffff;

    // max is 65536 * 65535 + 32768, which still fits in u32
    let y = (WR * premul(r) + WG * premul(g) + WB * premul(b) + (1 << 15)) >> 24;
    y as u8
}

/// Gray intensity of a straight-alpha 8-bit RGBA pixel.
pub fn luma(px: Rgba<u8>) -> u8 {
    luma16(Rgba(px.0.map(|c| c as u16 * 0x101)))
}
