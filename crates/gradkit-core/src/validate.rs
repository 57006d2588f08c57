use crate::error::{GradError, Result};
use crate::image::{Image, PixelDepth};

/// Confirm each image declares its paired depth.
///
/// Errors carry the position of the first offending image in `checks`.
pub fn check_depth(checks: &[(&Image, PixelDepth)]) -> Result<()> {
    for (index, (image, expected)) in checks.iter().enumerate() {
        if image.depth() != *expected {
            return Err(GradError::DepthOrFormatMismatch {
                index,
                expected: *expected,
                found: image.depth(),
            });
        }
    }
    Ok(())
}

/// Confirm every image is single-channel.
pub fn check_single_channel(images: &[&Image]) -> Result<()> {
    for (index, image) in images.iter().enumerate() {
        if image.channels() != 1 {
            return Err(GradError::ChannelCountNotSupported {
                index,
                channels: image.channels(),
            });
        }
    }
    Ok(())
}

/// Preconditions shared by every stencil operator: both images 8-bit
/// unsigned, single channel, same width and height. Index 0 is the source,
/// index 1 the destination.
pub fn check_gray_pair(src: &Image, dst: &Image) -> Result<()> {
    check_depth(&[(src, PixelDepth::U8), (dst, PixelDepth::U8)])?;
    check_single_channel(&[src, dst])?;

    if src.width() != dst.width() || src.height() != dst.height() {
        return Err(GradError::DimensionMismatch {
            src_width: src.width(),
            src_height: src.height(),
            dst_width: dst.width(),
            dst_height: dst.height(),
        });
    }
    Ok(())
}
