//! Diff command
//!
//! Usage: kmdiff <OLD_FILE> <NEW_FILE> [--json]

use kmdiff_core::render::{render, OutputFormat};
use kmdiff_core::{diff_resources, ExError};
use kmdiff_manifest::load_manifest_file;
use std::path::PathBuf;
use thiserror::Error;

/// Resolved arguments for one comparison
#[derive(Debug)]
pub struct DiffArgs {
    pub old_file: PathBuf,
    pub new_file: PathBuf,
    pub format: OutputFormat,
}

/// Why a comparison could not produce a report
#[derive(Debug, Error)]
pub enum DiffFailure {
    /// Reading or parsing one of the manifests failed
    #[error("Failed to read or parse files: {0}")]
    Load(ExError),

    /// The comparison or rendering failed
    #[error("Failed to compare manifests: {0}")]
    Diff(ExError),
}

/// Execute the diff command, printing the report to stdout
///
/// Returns whether any change was found.
pub fn execute(args: DiffArgs) -> Result<bool, DiffFailure> {
    let old = load_manifest_file(&args.old_file).map_err(DiffFailure::Load)?;
    let new = load_manifest_file(&args.new_file).map_err(DiffFailure::Load)?;

    let result = diff_resources(&old, &new).map_err(DiffFailure::Diff)?;
    let report = render(&result, args.format).map_err(DiffFailure::Diff)?;

    match args.format {
        OutputFormat::Json => println!("{}", report),
        OutputFormat::Markdown => print!("{}", report),
    }

    Ok(!result.is_empty())
}
