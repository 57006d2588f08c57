use std::sync::Arc;

use tracing::debug;

use crate::accel::{create_accelerator, DevicePreference, SobelKernel, SoftwareKernel};
use crate::config::EdgeOperator;
use crate::edge::{self, LaplaceKernel};
use crate::error::Result;
use crate::image::Image;
use crate::validate::check_gray_pair;

/// Runs the edge operators, routing Sobel to an accelerated kernel when
/// both images ask for it and one was resolved at construction.
///
/// Cheap to clone and safe to share across threads.
#[derive(Clone)]
pub struct EdgeDetector {
    accelerator: Option<Arc<dyn SobelKernel>>,
}

impl EdgeDetector {
    /// Resolve the accelerator once from the device preference.
    pub fn new(device: &DevicePreference) -> Self {
        Self {
            accelerator: create_accelerator(device),
        }
    }

    /// Detector that never leaves the software path.
    pub fn software_only() -> Self {
        Self { accelerator: None }
    }

    /// Detector with an explicitly supplied accelerated kernel.
    pub fn with_accelerator(kernel: Arc<dyn SobelKernel>) -> Self {
        Self {
            accelerator: Some(kernel),
        }
    }

    pub fn accelerator_name(&self) -> Option<&str> {
        self.accelerator.as_deref().map(|k| k.name())
    }

    /// Name of the device Sobel runs on for flagged image pairs.
    pub fn device_name(&self) -> &str {
        self.accelerator_name().unwrap_or("CPU")
    }

    /// Kernel that would serve a Sobel call on this pair.
    pub fn sobel_kernel_for(&self, src: &Image, dst: &Image) -> &dyn SobelKernel {
        match &self.accelerator {
            Some(kernel) if src.hw_accel() && dst.hw_accel() => &**kernel,
            _ => &SoftwareKernel,
        }
    }

    /// Sobel gradient magnitude.
    ///
    /// An accelerator failure is returned as-is; the software path is not
    /// retried.
    pub fn sobel(&self, src: &Image, dst: &mut Image) -> Result<()> {
        check_gray_pair(src, dst)?;
        let kernel = self.sobel_kernel_for(src, dst);
        debug!("Sobel on {}x{} via {}", src.width(), src.height(), kernel.name());
        kernel.apply(src, dst)
    }

    pub fn laplace(&self, src: &Image, dst: &mut Image, selection: u8) -> Result<()> {
        edge::laplace(src, dst, selection)
    }

    pub fn laplace_with(&self, src: &Image, dst: &mut Image, kernel: LaplaceKernel) -> Result<()> {
        edge::laplace_with(src, dst, kernel)
    }

    pub fn prewitt(&self, src: &Image, dst: &mut Image) -> Result<()> {
        edge::prewitt(src, dst)
    }

    pub fn canny(&self, src: &Image, dst: &mut Image, direction: &mut Image) -> Result<()> {
        edge::canny(src, dst, direction)
    }

    /// Run a configured operator. Canny gets a scratch direction map sized
    /// like `src`.
    pub fn apply(&self, operator: &EdgeOperator, src: &Image, dst: &mut Image) -> Result<()> {
        match operator {
            EdgeOperator::Laplace { kernel } => self.laplace_with(src, dst, *kernel),
            EdgeOperator::Sobel => self.sobel(src, dst),
            EdgeOperator::Prewitt => self.prewitt(src, dst),
            EdgeOperator::Canny => {
                let mut direction = Image::new(src.width(), src.height(), 1, src.depth());
                self.canny(src, dst, &mut direction)
            }
        }
    }
}

impl Default for EdgeDetector {
    fn default() -> Self {
        Self::new(&DevicePreference::default())
    }
}
