use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::consts::{LAPLACE_4, LAPLACE_8};
use crate::edge::{correlate, scan_interior};
use crate::error::Result;
use crate::image::Image;
use crate::validate::check_gray_pair;

/// Second-derivative stencil variants.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum LaplaceKernel {
    /// |N + S + E + W - 4c|
    #[default]
    FourNeighbor = 1,
    /// |sum of 8 neighbors - 8c|
    EightNeighbor = 2,
}

impl LaplaceKernel {
    /// Map a numeric selector (1 or 2) to a kernel.
    pub fn from_selector(selection: u8) -> Option<Self> {
        match selection {
            1 => Some(LaplaceKernel::FourNeighbor),
            2 => Some(LaplaceKernel::EightNeighbor),
            _ => None,
        }
    }

    pub fn selector(self) -> u8 {
        self as u8
    }
}

impl fmt::Display for LaplaceKernel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LaplaceKernel::FourNeighbor => write!(f, "4-neighbor"),
            LaplaceKernel::EightNeighbor => write!(f, "8-neighbor"),
        }
    }
}

/// Laplacian edge response with a numeric kernel selector.
///
/// Selectors other than 1 and 2 leave `dst` untouched and still return
/// `Ok(())` once the images have been validated.
pub fn laplace(src: &Image, dst: &mut Image, selection: u8) -> Result<()> {
    check_gray_pair(src, dst)?;

    match LaplaceKernel::from_selector(selection) {
        Some(kernel) => apply(src, dst, kernel),
        None => {
            debug!("Laplace selector {selection} unsupported, destination left untouched");
            Ok(())
        }
    }
}

/// Laplacian edge response with a typed kernel.
pub fn laplace_with(src: &Image, dst: &mut Image, kernel: LaplaceKernel) -> Result<()> {
    check_gray_pair(src, dst)?;
    apply(src, dst, kernel)
}

fn apply(src: &Image, dst: &mut Image, kernel: LaplaceKernel) -> Result<()> {
    let mask = match kernel {
        LaplaceKernel::FourNeighbor => &LAPLACE_4,
        LaplaceKernel::EightNeighbor => &LAPLACE_8,
    };
    scan_interior(src, dst, |window| correlate(window, mask).abs())
}
