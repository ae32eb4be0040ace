//! Slide parameter set.
//!
//! Every knob the tool exposes lives in [`SlideConfig`]: target dimensions,
//! caption typography, the extension allow-list, and the two stage toggles.
//! The struct is built once at startup and passed by reference into each
//! pipeline stage; nothing reads configuration ambiently.
//!
//! There is deliberately no config file format. The CLI overrides only the
//! paths and toggles; the numeric parameters are fixed defaults, editable
//! here the way one edits a settings block at the top of a script.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Config validation error: {0}")]
    Validation(String),
}

/// Fixed parameter set for one slide-generation run.
///
/// `Default` is the stock configuration: 400x200 slides, jpg/png inputs,
/// jpg output, a 70%-opaque caption box padded by a twentieth of the slide
/// height, 30px type with 4px line spacing.
#[derive(Debug, Clone)]
pub struct SlideConfig {
    /// Directory scanned for source images (not recursed into).
    pub input_dir: PathBuf,
    /// Directory slides are written to. Must already exist — the tool
    /// never creates it.
    pub output_dir: PathBuf,
    /// Scale and crop every slide to `width` x `height`.
    pub resize: bool,
    /// Overlay the wrapped filename caption.
    pub captions: bool,
    /// TrueType font used for captions.
    pub font_path: PathBuf,
    /// Extensions (lowercase, no dot) eligible for processing.
    pub allowed_extensions: Vec<String>,
    /// Extension — and thus encoder — for materialized slides.
    pub output_extension: String,
    /// Target slide width in pixels.
    pub width: u32,
    /// Target slide height in pixels.
    pub height: u32,
    /// Padding above and below the caption text, in pixels.
    pub box_padding: f32,
    /// Caption box opacity: 0.0 = invisible, 1.0 = solid black.
    pub box_opacity: f32,
    /// Caption font size in pixels.
    pub font_size: f32,
    /// Vertical gap between caption lines, in pixels.
    pub text_spacing: f32,
}

impl Default for SlideConfig {
    fn default() -> Self {
        let height = 200;
        Self {
            input_dir: PathBuf::from("in"),
            output_dir: PathBuf::from("out"),
            resize: true,
            captions: true,
            font_path: PathBuf::from("OpenSans-ExtraBold.ttf"),
            allowed_extensions: vec!["jpg".to_string(), "png".to_string()],
            output_extension: "jpg".to_string(),
            width: 400,
            height,
            box_padding: height as f32 / 20.0,
            box_opacity: 0.7,
            font_size: 30.0,
            text_spacing: 4.0,
        }
    }
}

impl SlideConfig {
    /// Width of the caption region: the box and the wrap budget both span
    /// the left three quarters of the slide.
    pub fn caption_span(&self) -> f32 {
        self.width as f32 * 0.75
    }

    /// Validate config values are within acceptable ranges.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.width == 0 || self.height == 0 {
            return Err(ConfigError::Validation(
                "width and height must be non-zero".into(),
            ));
        }
        if !(0.0..=1.0).contains(&self.box_opacity) {
            return Err(ConfigError::Validation(
                "box_opacity must be between 0.0 and 1.0".into(),
            ));
        }
        if self.font_size <= 0.0 {
            return Err(ConfigError::Validation("font_size must be positive".into()));
        }
        if self.allowed_extensions.is_empty() {
            return Err(ConfigError::Validation(
                "allowed_extensions must not be empty".into(),
            ));
        }
        if self.output_extension.is_empty() {
            return Err(ConfigError::Validation(
                "output_extension must not be empty".into(),
            ));
        }
        Ok(())
    }
}
