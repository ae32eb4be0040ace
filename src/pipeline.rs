//! Pipeline driver.
//!
//! Runs the four stages in order — discover, materialize, resize, caption —
//! honoring the two stage toggles. Each stage fully consumes the previous
//! stage's file list before the next begins; there is no streaming between
//! stages and no per-file recovery. The first error aborts the run.

use crate::caption::{self, CaptionError};
use crate::config::{ConfigError, SlideConfig};
use crate::discover::{self, DiscoverError};
use crate::materialize::{self, MaterializeError};
use crate::resize::{self, ResizeError};
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PipelineError {
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),
    #[error("Discovery failed: {0}")]
    Discover(#[from] DiscoverError),
    #[error("Materialization failed: {0}")]
    Materialize(#[from] MaterializeError),
    #[error("Resize failed: {0}")]
    Resize(#[from] ResizeError),
    #[error("Captioning failed: {0}")]
    Caption(#[from] CaptionError),
}

/// What one run produced, for the CLI reporter.
#[derive(Debug)]
pub struct RunSummary {
    /// Discovered source paths, in processing order.
    pub sources: Vec<PathBuf>,
    /// Materialized slide paths, parallel to `sources`.
    pub slides: Vec<PathBuf>,
    pub resized: bool,
    pub captioned: bool,
}

/// Run the full pipeline for one configuration.
pub fn run(config: &SlideConfig) -> Result<RunSummary, PipelineError> {
    config.validate()?;

    let sources = discover::discover(&config.input_dir, &config.allowed_extensions)?;
    let slides = materialize::materialize(&sources, config)?;

    if config.resize {
        resize::resize_all(&slides, config)?;
    }
    if config.captions {
        caption::caption_all(&slides, config)?;
    }

    Ok(RunSummary {
        sources,
        slides,
        resized: config.resize,
        captioned: config.captions,
    })
}
