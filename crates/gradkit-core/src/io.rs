use std::path::Path;

use ::image::{GrayImage, ImageFormat};

use crate::error::{GradError, Result};
use crate::image::{Image, PixelDepth};
use crate::validate::{check_depth, check_single_channel};

/// Load any supported image file as 8-bit single channel.
///
/// Color and 16-bit inputs are converted to 8-bit luma.
pub fn load_gray(path: &Path) -> Result<Image> {
    let gray = ::image::open(path)?.into_luma8();
    let (w, h) = gray.dimensions();
    Image::from_gray(w as usize, h as usize, gray.into_raw())
}

/// Save an 8-bit single-channel image, choosing the format from the file
/// extension (PNG unless the extension says TIFF).
pub fn save_gray(img: &Image, path: &Path) -> Result<()> {
    check_depth(&[(img, PixelDepth::U8)])?;
    check_single_channel(&[img])?;

    let buf = GrayImage::from_raw(img.width() as u32, img.height() as u32, img.data().to_vec())
        .ok_or(GradError::BufferSizeMismatch {
            expected: img.expected_len(),
            actual: img.data().len(),
        })?;

    let format = match path.extension().and_then(|e| e.to_str()) {
        Some("tiff" | "tif") => ImageFormat::Tiff,
        _ => ImageFormat::Png,
    };
    buf.save_with_format(path, format)?;
    Ok(())
}
