use crate::consts::{SOBEL_X, SOBEL_Y};
use crate::edge::{correlate, scan_interior};
use crate::error::Result;
use crate::image::Image;
use crate::validate::check_gray_pair;

/// Software Sobel gradient magnitude, `min(|Gx| + |Gy|, 255)`.
///
///   Gx =  1  2  1     Gy = 1  0 -1
///         0  0  0          2  0 -2
///        -1 -2 -1          1  0 -1
///
/// Always runs on the CPU; use [`crate::detector::EdgeDetector::sobel`] to
/// honour the images' acceleration flags.
pub fn sobel(src: &Image, dst: &mut Image) -> Result<()> {
    check_gray_pair(src, dst)?;
    scan_interior(src, dst, |window| {
        correlate(window, &SOBEL_X).abs() + correlate(window, &SOBEL_Y).abs()
    })
}
