use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use gradkit_core::detector::EdgeDetector;

use super::options::{process_file, RunOptions};
use crate::summary::print_run_summary;

#[derive(Args)]
pub struct ApplyArgs {
    /// Input image file (PNG, TIFF, ...)
    pub file: PathBuf,

    /// Output file path
    #[arg(short, long, default_value = "edges.png")]
    pub output: PathBuf,

    #[command(flatten)]
    pub run: RunOptions,
}

pub fn run(args: &ApplyArgs) -> Result<()> {
    let config = args.run.resolve()?;
    let detector = EdgeDetector::new(&config.device);
    print_run_summary(&config, detector.device_name(), 1);

    process_file(&detector, &config, &args.file, &args.output)?;
    println!("Saved to {}", args.output.display());
    Ok(())
}
