use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Args, ValueEnum};
use gradkit_core::accel::DevicePreference;
use gradkit_core::config::{EdgeConfig, EdgeOperator};
use gradkit_core::detector::EdgeDetector;
use gradkit_core::edge::LaplaceKernel;
use gradkit_core::image::Image;
use gradkit_core::io::{load_gray, save_gray};
use tracing::debug;

#[derive(Clone, Copy, ValueEnum)]
pub enum OperatorArg {
    Laplace4,
    Laplace8,
    Sobel,
    Prewitt,
    Canny,
}

impl From<OperatorArg> for EdgeOperator {
    fn from(arg: OperatorArg) -> Self {
        match arg {
            OperatorArg::Laplace4 => EdgeOperator::Laplace {
                kernel: LaplaceKernel::FourNeighbor,
            },
            OperatorArg::Laplace8 => EdgeOperator::Laplace {
                kernel: LaplaceKernel::EightNeighbor,
            },
            OperatorArg::Sobel => EdgeOperator::Sobel,
            OperatorArg::Prewitt => EdgeOperator::Prewitt,
            OperatorArg::Canny => EdgeOperator::Canny,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
pub enum DeviceArg {
    Auto,
    Cpu,
    Gpu,
}

impl From<DeviceArg> for DevicePreference {
    fn from(arg: DeviceArg) -> Self {
        match arg {
            DeviceArg::Auto => DevicePreference::Auto,
            DeviceArg::Cpu => DevicePreference::Cpu,
            DeviceArg::Gpu => DevicePreference::Gpu,
        }
    }
}

/// Options shared by `apply` and `batch`. Flags override the config file.
#[derive(Args)]
pub struct RunOptions {
    /// TOML config file (see `gradkit config`)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Edge operator
    #[arg(long, value_enum)]
    pub operator: Option<OperatorArg>,

    /// Device for the accelerated Sobel path
    #[arg(long, value_enum)]
    pub device: Option<DeviceArg>,

    /// Mark images as eligible for the accelerated path
    #[arg(long)]
    pub hw_accel: bool,
}

impl RunOptions {
    pub fn resolve(&self) -> Result<EdgeConfig> {
        let mut config = match &self.config {
            Some(path) => EdgeConfig::load(path)
                .with_context(|| format!("Failed to load config {}", path.display()))?,
            None => EdgeConfig::default(),
        };
        if let Some(op) = self.operator {
            config.operator = op.into();
        }
        if let Some(device) = self.device {
            config.device = device.into();
        }
        if self.hw_accel {
            config.hw_accel = true;
        }
        debug!("Resolved config: {config:?}");
        Ok(config)
    }
}

/// Load `input`, run the configured operator into a zeroed destination and
/// save the result to `output`.
pub fn process_file(
    detector: &EdgeDetector,
    config: &EdgeConfig,
    input: &Path,
    output: &Path,
) -> Result<()> {
    let mut src =
        load_gray(input).with_context(|| format!("Failed to load {}", input.display()))?;
    src.set_hw_accel(config.hw_accel);
    let mut dst = Image::filled(src.width(), src.height(), 0).with_hw_accel(config.hw_accel);

    detector
        .apply(&config.operator, &src, &mut dst)
        .with_context(|| format!("{} failed on {}", config.operator, input.display()))?;

    save_gray(&dst, output).with_context(|| format!("Failed to write {}", output.display()))?;
    Ok(())
}
