use std::collections::HashMap;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Args;
use gradkit_core::detector::EdgeDetector;
use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;

use super::options::{process_file, RunOptions};
use crate::summary::print_run_summary;

#[derive(Args)]
pub struct BatchArgs {
    /// Input image files
    #[arg(required = true)]
    pub files: Vec<PathBuf>,

    /// Directory for the `<stem>_edges.png` outputs
    #[arg(long, default_value = "edges")]
    pub out_dir: PathBuf,

    #[command(flatten)]
    pub run: RunOptions,
}

fn output_path(out_dir: &Path, input: &Path) -> PathBuf {
    let stem = input
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "image".to_string());
    out_dir.join(format!("{stem}_edges.png"))
}

/// Output path for every input, refusing any two inputs that would write
/// the same file.
fn output_paths(out_dir: &Path, inputs: &[PathBuf]) -> Result<Vec<PathBuf>> {
    let mut claimed: HashMap<PathBuf, &Path> = HashMap::new();
    let mut outputs = Vec::with_capacity(inputs.len());
    for input in inputs {
        let output = output_path(out_dir, input);
        if let Some(first) = claimed.insert(output.clone(), input) {
            anyhow::bail!(
                "{} and {} would both write {}",
                first.display(),
                input.display(),
                output.display()
            );
        }
        outputs.push(output);
    }
    Ok(outputs)
}

pub fn run(args: &BatchArgs) -> Result<()> {
    let config = args.run.resolve()?;
    let outputs = output_paths(&args.out_dir, &args.files)?;
    let detector = EdgeDetector::new(&config.device);
    print_run_summary(&config, detector.device_name(), args.files.len());

    std::fs::create_dir_all(&args.out_dir)
        .with_context(|| format!("Failed to create {}", args.out_dir.display()))?;

    let pb = ProgressBar::new(args.files.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{msg} [{bar:40}] {pos}/{len}")?
            .progress_chars("=> "),
    );
    pb.set_message("Processing");

    // Every file gets its own source/destination pair.
    let failures: Vec<(PathBuf, anyhow::Error)> = args
        .files
        .par_iter()
        .zip(outputs.par_iter())
        .filter_map(|(input, output)| {
            let result = process_file(&detector, &config, input, output);
            pb.inc(1);
            result.err().map(|e| (input.clone(), e))
        })
        .collect();
    pb.finish_with_message("Done");

    let done = args.files.len() - failures.len();
    println!("\n{done}/{} images written to {}", args.files.len(), args.out_dir.display());

    if !failures.is_empty() {
        for (path, err) in &failures {
            eprintln!("  {}: {err:#}", path.display());
        }
        anyhow::bail!("{} of {} images failed", failures.len(), args.files.len());
    }
    Ok(())
}
