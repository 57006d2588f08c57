use crate::error::Result;
use crate::image::Image;

/// Canny edge detection entry point.
///
/// Gradient, orientation binning, non-maximum suppression and hysteresis are
/// not implemented: the call succeeds without reading or writing any of the
/// three images.
pub fn canny(_src: &Image, _dst: &mut Image, _direction: &mut Image) -> Result<()> {
    Ok(())
}
