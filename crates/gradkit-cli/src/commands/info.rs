use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use gradkit_core::io::load_gray;

#[derive(Args)]
pub struct InfoArgs {
    /// Input image file
    pub file: PathBuf,
}

pub fn run(args: &InfoArgs) -> Result<()> {
    let img = load_gray(&args.file)
        .with_context(|| format!("Failed to load {}", args.file.display()))?;

    let (min, max) = img
        .data()
        .iter()
        .fold((u8::MAX, u8::MIN), |(lo, hi), &v| (lo.min(v), hi.max(v)));

    println!("File:        {}", args.file.display());
    println!("Dimensions:  {}x{}", img.width(), img.height());
    println!("Channels:    {} (as loaded)", img.channels());
    println!("Depth:       {}", img.depth());
    if !img.data().is_empty() {
        println!("Range:       {min}..={max}");
    }

    Ok(())
}
