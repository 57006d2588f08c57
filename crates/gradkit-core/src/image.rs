use std::fmt;

use ndarray::{Array2, ArrayView2, ArrayViewMut2};

use crate::error::{GradError, Result};

/// Sample format of an image buffer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum PixelDepth {
    #[default]
    U8,
    S8,
    U16,
    S16,
    S32,
    F32,
}

impl PixelDepth {
    pub fn bytes_per_sample(self) -> usize {
        match self {
            PixelDepth::U8 | PixelDepth::S8 => 1,
            PixelDepth::U16 | PixelDepth::S16 => 2,
            PixelDepth::S32 | PixelDepth::F32 => 4,
        }
    }
}

impl fmt::Display for PixelDepth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            PixelDepth::U8 => "8U",
            PixelDepth::S8 => "8S",
            PixelDepth::U16 => "16U",
            PixelDepth::S16 => "16S",
            PixelDepth::S32 => "32S",
            PixelDepth::F32 => "32F",
        };
        f.write_str(s)
    }
}

/// Byte length of a `width` x `height` buffer, or `None` if it does not fit
/// in `usize`.
fn buffer_len(width: usize, height: usize, channels: usize, depth: PixelDepth) -> Option<usize> {
    width
        .checked_mul(height)?
        .checked_mul(channels)?
        .checked_mul(depth.bytes_per_sample())
}

/// A raster image with interleaved channels.
///
/// The buffer is row-major, `width * height * channels` samples long,
/// each sample `depth.bytes_per_sample()` bytes wide.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Image {
    width: usize,
    height: usize,
    channels: usize,
    depth: PixelDepth,
    /// Eligible for the accelerated kernel path.
    hw_accel: bool,
    data: Vec<u8>,
}

impl Image {
    /// Allocate a zero-filled image.
    ///
    /// Panics with a capacity overflow if the size does not fit in memory,
    /// like `vec!`.
    pub fn new(width: usize, height: usize, channels: usize, depth: PixelDepth) -> Self {
        let len = buffer_len(width, height, channels, depth).unwrap_or(usize::MAX);
        Self {
            width,
            height,
            channels,
            depth,
            hw_accel: false,
            data: vec![0; len],
        }
    }

    /// Allocate a single-channel 8-bit image filled with `value`.
    pub fn filled(width: usize, height: usize, value: u8) -> Self {
        Self {
            width,
            height,
            channels: 1,
            depth: PixelDepth::U8,
            hw_accel: false,
            data: vec![value; width.checked_mul(height).unwrap_or(usize::MAX)],
        }
    }

    /// Wrap an existing single-channel 8-bit buffer.
    pub fn from_gray(width: usize, height: usize, data: Vec<u8>) -> Result<Self> {
        Self::from_raw(width, height, 1, PixelDepth::U8, data)
    }

    /// Wrap an existing buffer of any depth and channel count.
    pub fn from_raw(
        width: usize,
        height: usize,
        channels: usize,
        depth: PixelDepth,
        data: Vec<u8>,
    ) -> Result<Self> {
        // An unrepresentable size can never match a real buffer.
        let expected = buffer_len(width, height, channels, depth).unwrap_or(usize::MAX);
        if data.len() != expected {
            return Err(GradError::BufferSizeMismatch {
                expected,
                actual: data.len(),
            });
        }
        Ok(Self {
            width,
            height,
            channels,
            depth,
            hw_accel: false,
            data,
        })
    }

    /// Build a single-channel 8-bit image from a (height, width) array.
    pub fn from_array(array: &Array2<u8>) -> Self {
        let (h, w) = array.dim();
        Self {
            width: w,
            height: h,
            channels: 1,
            depth: PixelDepth::U8,
            hw_accel: false,
            data: array.iter().copied().collect(),
        }
    }

    pub fn with_hw_accel(mut self, enabled: bool) -> Self {
        self.hw_accel = enabled;
        self
    }

    pub fn set_hw_accel(&mut self, enabled: bool) {
        self.hw_accel = enabled;
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn channels(&self) -> usize {
        self.channels
    }

    pub fn depth(&self) -> PixelDepth {
        self.depth
    }

    pub fn hw_accel(&self) -> bool {
        self.hw_accel
    }

    /// Number of bytes the header says the buffer should hold.
    pub fn expected_len(&self) -> usize {
        buffer_len(self.width, self.height, self.channels, self.depth).unwrap_or(usize::MAX)
    }

    pub fn data(&self) -> &[u8] {
        &self.data
    }

    pub fn data_mut(&mut self) -> &mut [u8] {
        &mut self.data
    }

    /// Sample at (row, col) of a single-channel 8-bit image.
    pub fn pixel(&self, row: usize, col: usize) -> u8 {
        self.data[row * self.width + col]
    }

    pub fn set_pixel(&mut self, row: usize, col: usize, value: u8) {
        self.data[row * self.width + col] = value;
    }

    /// Borrow a single-channel 8-bit image as a (height, width) view.
    pub fn as_array(&self) -> Result<ArrayView2<'_, u8>> {
        self.ensure_gray_layout()?;
        ArrayView2::from_shape((self.height, self.width), &self.data[..]).map_err(|_| {
            GradError::BufferSizeMismatch {
                expected: self.expected_len(),
                actual: self.data.len(),
            }
        })
    }

    /// Mutable (height, width) view of a single-channel 8-bit image.
    pub fn as_array_mut(&mut self) -> Result<ArrayViewMut2<'_, u8>> {
        self.ensure_gray_layout()?;
        let expected = self.expected_len();
        let actual = self.data.len();
        ArrayViewMut2::from_shape((self.height, self.width), &mut self.data[..])
            .map_err(|_| GradError::BufferSizeMismatch { expected, actual })
    }

    /// Copy a single-channel 8-bit image into an owned array.
    pub fn to_array(&self) -> Result<Array2<u8>> {
        Ok(self.as_array()?.to_owned())
    }

    fn ensure_gray_layout(&self) -> Result<()> {
        if self.depth != PixelDepth::U8 {
            return Err(GradError::DepthOrFormatMismatch {
                index: 0,
                expected: PixelDepth::U8,
                found: self.depth,
            });
        }
        if self.channels != 1 {
            return Err(GradError::ChannelCountNotSupported {
                index: 0,
                channels: self.channels,
            });
        }
        Ok(())
    }
}
