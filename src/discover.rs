//! Input discovery.
//!
//! Stage 1 of the slide pipeline. Lists the regular files directly inside
//! the input directory and keeps those whose extension (lowercased, without
//! the dot) is in the configured allow-list. Subdirectories are never
//! recursed into; files with a missing or non-matching extension are
//! silently excluded.
//!
//! The returned list is sorted so a run is deterministic regardless of
//! filesystem enumeration order.

use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DiscoverError {
    #[error("Input directory not found: {0}")]
    InputDirMissing(PathBuf),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// List qualifying source images in `input_dir`, sorted by path.
pub fn discover(input_dir: &Path, allowed: &[String]) -> Result<Vec<PathBuf>, DiscoverError> {
    if !input_dir.is_dir() {
        return Err(DiscoverError::InputDirMissing(input_dir.to_path_buf()));
    }

    let mut files: Vec<PathBuf> = fs::read_dir(input_dir)?
        .filter_map(|e| e.ok())
        .map(|e| e.path())
        .filter(|p| p.is_file() && has_allowed_extension(p, allowed))
        .collect();

    files.sort();
    Ok(files)
}

fn has_allowed_extension(path: &Path, allowed: &[String]) -> bool {
    let ext = path
        .extension()
        .map(|e| e.to_string_lossy().to_lowercase())
        .unwrap_or_default();
    allowed.iter().any(|a| a == &ext)
}
