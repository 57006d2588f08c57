//! Sobel kernel strategies: the always-available software kernel and an
//! optional accelerated one, chosen once from a [`DevicePreference`].

pub mod cpu;
#[cfg(feature = "gpu")]
pub mod wgpu_backend;

use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::image::Image;

pub use cpu::SoftwareKernel;

/// A Sobel implementation with the software path's contract: 8-bit
/// single-channel pair of equal size in, interior of `dst` overwritten,
/// border kept.
///
/// `apply` validates the pair itself, so a kernel can be called directly.
pub trait SobelKernel: Send + Sync {
    fn name(&self) -> &str;

    fn is_accelerated(&self) -> bool {
        false
    }

    fn apply(&self, src: &Image, dst: &mut Image) -> Result<()>;
}

/// Which device the accelerated Sobel path should use.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum DevicePreference {
    /// Use a GPU adapter if one is present, otherwise software only.
    #[default]
    Auto,
    /// Never accelerate.
    Cpu,
    /// Ask for a GPU; falls back to software only if none can be opened.
    Gpu,
}

impl fmt::Display for DevicePreference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DevicePreference::Auto => write!(f, "Auto"),
            DevicePreference::Cpu => write!(f, "CPU"),
            DevicePreference::Gpu => write!(f, "GPU"),
        }
    }
}

/// Resolve the accelerated kernel for this process, if any.
///
/// Returns `None` when acceleration is disabled, the crate was built without
/// the `gpu` feature, or no adapter could be opened.
pub fn create_accelerator(preference: &DevicePreference) -> Option<Arc<dyn SobelKernel>> {
    match preference {
        DevicePreference::Cpu => None,
        DevicePreference::Auto | DevicePreference::Gpu => open_gpu(preference),
    }
}

#[cfg(feature = "gpu")]
fn open_gpu(preference: &DevicePreference) -> Option<Arc<dyn SobelKernel>> {
    match wgpu_backend::WgpuKernel::new() {
        Ok(kernel) => Some(Arc::new(kernel)),
        Err(e) => {
            if *preference == DevicePreference::Gpu {
                tracing::warn!("GPU requested but unavailable, using software Sobel: {e}");
            } else {
                tracing::debug!("No GPU adapter, using software Sobel: {e}");
            }
            None
        }
    }
}

#[cfg(not(feature = "gpu"))]
fn open_gpu(preference: &DevicePreference) -> Option<Arc<dyn SobelKernel>> {
    if *preference == DevicePreference::Gpu {
        tracing::warn!("GPU requested but gradkit was built without the `gpu` feature");
    }
    None
}
