//! Packing and unpacking of `0xAARRGGBB` pixels.

/// Mask selecting the alpha bits of a packed pixel.
pub const ALPHA_MASK: u32 = 0xFF00_0000;

/// Fully opaque black.
pub const OPAQUE_BLACK: u32 = 0xFF00_0000;

/// Extract the red channel of a packed pixel.
#[inline]
pub fn red(pixel: u32) -> u32 {
    (pixel & 0x00FF_0000) >> 16
}

/// Extract the green channel of a packed pixel.
#[inline]
pub fn green(pixel: u32) -> u32 {
    (pixel & 0x0000_FF00) >> 8
}

/// Extract the blue channel of a packed pixel.
#[inline]
pub fn blue(pixel: u32) -> u32 {
    pixel & 0x0000_00FF
}

/// Pack the three color channels into a pixel with the alpha forced to opaque.
///
/// The channels are expected in `0..=255`; they are not masked.
#[inline]
pub fn pack_opaque(r: u32, g: u32, b: u32) -> u32 {
    ALPHA_MASK | (r << 16) | (g << 8) | b
}

/// Pack an `[r, g, b, a]` byte quadruple into `0xAARRGGBB`.
#[inline]
pub fn from_rgba8([r, g, b, a]: [u8; 4]) -> u32 {
    (a as u32) << 24 | (r as u32) << 16 | (g as u32) << 8 | b as u32
}

/// Unpack `0xAARRGGBB` into an `[r, g, b, a]` byte quadruple.
#[inline]
pub fn to_rgba8(pixel: u32) -> [u8; 4] {
    [
        red(pixel) as u8,
        green(pixel) as u8,
        blue(pixel) as u8,
        (pixel >> 24) as u8,
    ]
}
