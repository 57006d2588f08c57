use crate::edge::sobel;
use crate::error::Result;
use crate::image::Image;

use super::SobelKernel;

/// Sobel on the CPU, one pass over the interior.
pub struct SoftwareKernel;

impl SobelKernel for SoftwareKernel {
    fn name(&self) -> &str {
        "CPU"
    }

    fn apply(&self, src: &Image, dst: &mut Image) -> Result<()> {
        sobel(src, dst)
    }
}
