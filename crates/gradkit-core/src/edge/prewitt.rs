use crate::consts::{PREWITT_X, PREWITT_Y};
use crate::edge::{correlate, scan_interior};
use crate::error::Result;
use crate::image::Image;
use crate::validate::check_gray_pair;

/// Prewitt gradient magnitude, `min(|Gx| + |Gy|, 255)`.
///
///   Gx =  1  1  1     Gy = 1  0 -1
///         0  0  0          1  0 -1
///        -1 -1 -1          1  0 -1
pub fn prewitt(src: &Image, dst: &mut Image) -> Result<()> {
    check_gray_pair(src, dst)?;
    scan_interior(src, dst, |window| {
        correlate(window, &PREWITT_X).abs() + correlate(window, &PREWITT_Y).abs()
    })
}
