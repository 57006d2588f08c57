use thiserror::Error;

use crate::image::PixelDepth;

#[derive(Error, Debug)]
pub enum GradError {
    #[error("Image {index}: expected {expected} depth, found {found}")]
    DepthOrFormatMismatch {
        index: usize,
        expected: PixelDepth,
        found: PixelDepth,
    },

    #[error("Image {index}: {channels} channels not supported (single channel only)")]
    ChannelCountNotSupported { index: usize, channels: usize },

    #[error(
        "Source is {src_width}x{src_height} but destination is {dst_width}x{dst_height}"
    )]
    DimensionMismatch {
        src_width: usize,
        src_height: usize,
        dst_width: usize,
        dst_height: usize,
    },

    #[error("Pixel buffer holds {actual} bytes, header describes {expected}")]
    BufferSizeMismatch { expected: usize, actual: usize },

    #[error("Accelerator error: {0}")]
    Accelerator(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Image format error: {0}")]
    ImageError(#[from] ::image::ImageError),

    #[error("Config error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, GradError>;
