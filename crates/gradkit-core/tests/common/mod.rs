#![allow(dead_code)]

use gradkit_core::image::Image;

/// Value pre-loaded into destinations so untouched pixels are detectable.
pub const SENTINEL: u8 = 77;

/// Single-channel 8-bit image built from `f(row, col)`.
pub fn gray_from_fn(width: usize, height: usize, f: impl Fn(usize, usize) -> u8) -> Image {
    let mut data = Vec::with_capacity(width * height);
    for row in 0..height {
        for col in 0..width {
            data.push(f(row, col));
        }
    }
    Image::from_gray(width, height, data).expect("buffer matches dimensions")
}

/// Destination of the given size filled with [`SENTINEL`].
pub fn sentinel_dst(width: usize, height: usize) -> Image {
    Image::filled(width, height, SENTINEL)
}

pub fn checkerboard(width: usize, height: usize) -> Image {
    gray_from_fn(width, height, |r, c| if (r + c) % 2 == 0 { 255 } else { 0 })
}

/// Left half 0, right half 255.
pub fn vertical_step(width: usize, height: usize) -> Image {
    gray_from_fn(width, height, |_, c| if c < width / 2 { 0 } else { 255 })
}

/// Assert the outermost rows and columns still hold [`SENTINEL`].
pub fn assert_border_untouched(dst: &Image) {
    let (w, h) = (dst.width(), dst.height());
    for row in 0..h {
        for col in 0..w {
            let border = row == 0 || col == 0 || row + 1 == h || col + 1 == w;
            if border {
                assert_eq!(
                    dst.pixel(row, col),
                    SENTINEL,
                    "border pixel ({row},{col}) was written"
                );
            }
        }
    }
}

/// Assert every interior pixel equals `expected`.
pub fn assert_interior_eq(dst: &Image, expected: u8) {
    let (w, h) = (dst.width(), dst.height());
    for row in 1..h.saturating_sub(1) {
        for col in 1..w.saturating_sub(1) {
            assert_eq!(
                dst.pixel(row, col),
                expected,
                "interior pixel ({row},{col})"
            );
        }
    }
}
