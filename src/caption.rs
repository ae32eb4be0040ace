//! Caption overlay: wrapped filename text over a translucent box.
//!
//! Stage 4 of the slide pipeline. The caption is the slide's filename stem
//! (output-directory prefix stripped), wrapped against a budget of three
//! quarters of the slide width. A black box at the configured opacity is
//! alpha-blended over the left caption region, vertically centered, and the
//! wrapped lines are drawn in white, each centered within that region.
//!
//! Two deliberate simplifications:
//!
//! - The per-line advance uses the ink height of the *full unwrapped*
//!   caption, not of each line, so multi-line boxes can be slightly
//!   misestimated when lines have very different ascenders.
//! - The box and text are positioned against the configured slide
//!   dimensions, so captions land mid-slide only when resizing is on.

use crate::config::SlideConfig;
use crate::imaging::{self, ImagingError};
use crate::text::{FontMetrics, TextMeasure, wrap_caption};
use ab_glyph::{FontVec, PxScale};
use image::{DynamicImage, Pixel, Rgba, RgbaImage};
use imageproc::drawing::draw_text_mut;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CaptionError {
    #[error("Failed to read font {0}: {1}")]
    FontRead(PathBuf, #[source] std::io::Error),
    #[error("Invalid font file {0}: {1}")]
    FontParse(PathBuf, #[source] ab_glyph::InvalidFont),
    #[error("Image processing failed: {0}")]
    Imaging(#[from] ImagingError),
}

/// Load the caption font from disk. Missing or unparseable fonts abort the
/// run before any slide is touched.
pub fn load_font(path: &Path) -> Result<FontVec, CaptionError> {
    let bytes =
        std::fs::read(path).map_err(|e| CaptionError::FontRead(path.to_path_buf(), e))?;
    FontVec::try_from_vec(bytes).map_err(|e| CaptionError::FontParse(path.to_path_buf(), e))
}

/// Caption text for a slide: its path relative to the output directory,
/// extension removed.
pub fn caption_text(slide: &Path, output_dir: &Path) -> String {
    let rel = slide.strip_prefix(output_dir).unwrap_or(slide);
    rel.with_extension("").to_string_lossy().into_owned()
}

/// Caption box height for `lines` wrapped lines.
///
/// One line-height per line, padding above and below the text block, and a
/// spacing gap before, between, and after the lines.
pub fn box_height(line_height: f32, lines: usize, padding: f32, spacing: f32) -> f32 {
    let n = lines as f32;
    line_height * n + 2.0 * padding + (n + 1.0) * spacing
}

/// Top and bottom edge of a box of `box_h` centered on a slide of
/// `slide_height`.
pub fn vertical_span(slide_height: u32, box_h: f32) -> (f32, f32) {
    let mid = slide_height as f32 / 2.0;
    (mid - box_h / 2.0, mid + box_h / 2.0)
}

/// Overlay captions on every slide, fully consuming the list.
pub fn caption_all(slides: &[PathBuf], config: &SlideConfig) -> Result<(), CaptionError> {
    let font = load_font(&config.font_path)?;
    let metrics = FontMetrics::new(&font, config.font_size);

    for slide in slides {
        caption_in_place(slide, config, &font, &metrics)?;
    }
    Ok(())
}

fn caption_in_place(
    slide: &Path,
    config: &SlideConfig,
    font: &FontVec,
    metrics: &impl TextMeasure,
) -> Result<(), CaptionError> {
    let mut img = imaging::load_image(slide)?.to_rgba8();

    let text = caption_text(slide, &config.output_dir);
    let span = config.caption_span();
    let lines = wrap_caption(&text, span, metrics);
    // Line height from the full unwrapped caption (see module docs)
    let line_height = metrics.ink_height(&text);
    let box_h = box_height(
        line_height,
        lines.len(),
        config.box_padding,
        config.text_spacing,
    );
    let (box_top, box_bottom) = vertical_span(config.height, box_h);

    fill_box(
        &mut img,
        span as u32,
        box_top,
        box_bottom,
        config.box_opacity,
    );

    let x_center = span / 2.0;
    let white = Rgba([255u8, 255, 255, 255]);
    let scale = PxScale::from(config.font_size);
    let mut y = box_top + config.box_padding + config.text_spacing;
    for line in &lines {
        let x = x_center - metrics.line_width(line) / 2.0;
        draw_text_mut(
            &mut img,
            white,
            x.round() as i32,
            y.round() as i32,
            scale,
            font,
            line,
        );
        y += line_height + config.text_spacing;
    }

    let rgb = DynamicImage::ImageRgb8(DynamicImage::ImageRgba8(img).to_rgb8());
    imaging::save_image(&rgb, slide)?;
    Ok(())
}

/// Alpha-blend a black rectangle over `[0, width) x [top, bottom)`,
/// clipped to the image bounds.
fn fill_box(img: &mut RgbaImage, width: u32, top: f32, bottom: f32, opacity: f32) {
    let overlay = Rgba([0u8, 0, 0, (255.0 * opacity) as u8]);
    let x_end = width.min(img.width());
    let y_start = top.max(0.0) as u32;
    let y_end = (bottom.max(0.0) as u32).min(img.height());

    for y in y_start..y_end {
        for x in 0..x_end {
            img.get_pixel_mut(x, y).blend(&overlay);
        }
    }
}
