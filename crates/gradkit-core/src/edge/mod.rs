//! Fixed 3x3 stencil edge operators over single-channel 8-bit images.
//!
//! All operators share one border policy: only strictly interior pixels
//! (rows `1..=h-2`, columns `1..=w-2`) of the destination are written, and
//! each reads exactly the 3x3 neighborhood around its output pixel. The
//! outermost rows and columns of the destination keep whatever they held
//! before the call. Images narrower or shorter than 3 pixels have no
//! interior and are left untouched.

pub mod canny;
pub mod laplace;
pub mod prewitt;
pub mod sobel;

use ndarray::{s, ArrayView2, Zip};

use crate::consts::{Kernel3, MAX_SAMPLE, MIN_STENCIL_SIDE};
use crate::error::Result;
use crate::image::Image;

pub use canny::canny;
pub use laplace::{laplace, laplace_with, LaplaceKernel};
pub use prewitt::prewitt;
pub use sobel::sobel;

/// Weighted sum of a 3x3 window.
#[inline]
pub(crate) fn correlate(window: &ArrayView2<u8>, kernel: &Kernel3) -> i16 {
    let mut acc = 0i16;
    for (r, row) in kernel.iter().enumerate() {
        for (c, &k) in row.iter().enumerate() {
            acc += k * window[[r, c]] as i16;
        }
    }
    acc
}

/// Clamp a response into the 8-bit output range.
#[inline]
pub(crate) fn saturate(value: i16) -> u8 {
    value.clamp(0, MAX_SAMPLE) as u8
}

/// Write `response(window)` to every interior destination pixel.
///
/// Callers validate the pair first; this only checks the interior exists.
pub(crate) fn scan_interior<F>(src: &Image, dst: &mut Image, response: F) -> Result<()>
where
    F: Fn(&ArrayView2<u8>) -> i16,
{
    let (h, w) = (src.height(), src.width());
    if h < MIN_STENCIL_SIDE || w < MIN_STENCIL_SIDE {
        return Ok(());
    }

    let input = src.as_array()?;
    let mut output = dst.as_array_mut()?;
    Zip::from(output.slice_mut(s![1..h - 1, 1..w - 1]))
        .and(input.windows((3, 3)))
        .for_each(|out, window| *out = saturate(response(&window)));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::{LAPLACE_4, SOBEL_X};
    use ndarray::array;

    #[test]
    fn correlate_matches_hand_sum() {
        let win = array![[1u8, 2, 3], [4, 5, 6], [7, 8, 9]];
        // 2 + 4 + 6 + 8 - 20
        assert_eq!(correlate(&win.view(), &LAPLACE_4), 0);
        // (1 + 4 + 3) - (7 + 16 + 9)
        assert_eq!(correlate(&win.view(), &SOBEL_X), -24);
    }

    #[test]
    fn saturate_clamps_both_ends() {
        assert_eq!(saturate(-5), 0);
        assert_eq!(saturate(128), 128);
        assert_eq!(saturate(2040), 255);
    }
}
