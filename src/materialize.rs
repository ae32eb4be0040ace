//! Slide materialization.
//!
//! Stage 2 of the slide pipeline. Each discovered source is decoded, forced
//! into 3-channel RGB (dropping any alpha channel — JPEG output cannot
//! carry one), and re-encoded into the output directory under the same
//! filename stem with the configured output extension.
//!
//! The output directory must already exist; the tool mirrors the input
//! layout but never creates directories, and fails up front when the
//! target is missing. Existing slides are overwritten.

use crate::config::SlideConfig;
use crate::imaging::{self, ImagingError};
use image::DynamicImage;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum MaterializeError {
    #[error("Output directory not found: {0} (mkslides does not create it)")]
    OutputDirMissing(PathBuf),
    #[error("Image processing failed: {0}")]
    Imaging(#[from] ImagingError),
}

/// Re-encode every source into the output tree, returning the produced
/// slide paths in the same order as the sources.
pub fn materialize(
    sources: &[PathBuf],
    config: &SlideConfig,
) -> Result<Vec<PathBuf>, MaterializeError> {
    if !config.output_dir.is_dir() {
        return Err(MaterializeError::OutputDirMissing(
            config.output_dir.clone(),
        ));
    }

    let mut slides = Vec::with_capacity(sources.len());
    for source in sources {
        // Discovery only yields files with an allow-listed extension, so a
        // filename and stem are always present.
        let filename = source.file_name().unwrap();
        let slide_path = config
            .output_dir
            .join(filename)
            .with_extension(&config.output_extension);

        let img = imaging::load_image(source)?;
        let rgb = DynamicImage::ImageRgb8(img.to_rgb8());
        imaging::save_image(&rgb, &slide_path)?;

        slides.push(slide_path);
    }
    Ok(slides)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::{slide_config, write_test_png, write_test_rgba_png};
    use image::ColorType;
    use std::fs;
    use tempfile::TempDir;

    fn setup() -> (TempDir, SlideConfig) {
        let tmp = TempDir::new().unwrap();
        fs::create_dir(tmp.path().join("in")).unwrap();
        fs::create_dir(tmp.path().join("out")).unwrap();
        let config = slide_config(tmp.path());
        (tmp, config)
    }

    #[test]
    fn one_slide_per_source_with_configured_extension() {
        let (tmp, config) = setup();
        write_test_png(&tmp.path().join("in/photo1.png"), 40, 30);
        write_test_png(&tmp.path().join("in/photo2.png"), 40, 30);

        let sources = vec![
            tmp.path().join("in/photo1.png"),
            tmp.path().join("in/photo2.png"),
        ];
        let slides = materialize(&sources, &config).unwrap();

        assert_eq!(
            slides,
            vec![
                tmp.path().join("out/photo1.jpg"),
                tmp.path().join("out/photo2.jpg"),
            ]
        );
        for slide in &slides {
            assert!(slide.exists());
        }
    }

    #[test]
    fn stem_preserved_verbatim() {
        let (tmp, config) = setup();
        write_test_png(&tmp.path().join("in/Dawn at the Lake.png"), 20, 20);

        let sources = vec![tmp.path().join("in/Dawn at the Lake.png")];
        let slides = materialize(&sources, &config).unwrap();

        assert_eq!(slides[0], tmp.path().join("out/Dawn at the Lake.jpg"));
    }

    #[test]
    fn alpha_channel_dropped() {
        let (tmp, config) = setup();
        write_test_rgba_png(&tmp.path().join("in/translucent.png"), 20, 20);

        let sources = vec![tmp.path().join("in/translucent.png")];
        let slides = materialize(&sources, &config).unwrap();

        let out = image::open(&slides[0]).unwrap();
        assert_eq!(out.color(), ColorType::Rgb8);
    }

    #[test]
    fn existing_slide_overwritten() {
        let (tmp, config) = setup();
        write_test_png(&tmp.path().join("in/photo.png"), 20, 20);
        fs::write(tmp.path().join("out/photo.jpg"), "stale").unwrap();

        let sources = vec![tmp.path().join("in/photo.png")];
        let slides = materialize(&sources, &config).unwrap();

        // Re-encoded image, not the stale placeholder
        assert!(image::open(&slides[0]).is_ok());
    }

    #[test]
    fn missing_output_dir_is_error() {
        let tmp = TempDir::new().unwrap();
        fs::create_dir(tmp.path().join("in")).unwrap();
        let config = slide_config(tmp.path());

        let result = materialize(&[], &config);
        assert!(matches!(
            result,
            Err(MaterializeError::OutputDirMissing(_))
        ));
    }

    #[test]
    fn undecodable_source_is_fatal() {
        let (tmp, config) = setup();
        fs::write(tmp.path().join("in/broken.png"), "not an image").unwrap();

        let sources = vec![tmp.path().join("in/broken.png")];
        let result = materialize(&sources, &config);
        assert!(matches!(result, Err(MaterializeError::Imaging(_))));
    }
}
