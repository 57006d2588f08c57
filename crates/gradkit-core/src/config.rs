use std::fmt;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::accel::DevicePreference;
use crate::edge::LaplaceKernel;
use crate::error::{GradError, Result};

/// Which edge operator to run.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind")]
pub enum EdgeOperator {
    Laplace {
        #[serde(default)]
        kernel: LaplaceKernel,
    },
    #[default]
    Sobel,
    Prewitt,
    Canny,
}

impl fmt::Display for EdgeOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EdgeOperator::Laplace { kernel } => write!(f, "Laplace ({kernel})"),
            EdgeOperator::Sobel => write!(f, "Sobel"),
            EdgeOperator::Prewitt => write!(f, "Prewitt"),
            EdgeOperator::Canny => write!(f, "Canny"),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct EdgeConfig {
    #[serde(default)]
    pub device: DevicePreference,
    /// Mark loaded images as eligible for the accelerated path.
    #[serde(default)]
    pub hw_accel: bool,
    #[serde(default)]
    pub operator: EdgeOperator,
}

impl EdgeConfig {
    pub fn from_toml_str(s: &str) -> Result<Self> {
        toml::from_str(s).map_err(|e| GradError::Config(e.to_string()))
    }

    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_toml_str(&text)
    }

    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(|e| GradError::Config(e.to_string()))
    }
}
