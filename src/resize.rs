//! In-place scale-and-crop to the slide dimensions.
//!
//! Stage 3 of the slide pipeline. Each materialized slide is scaled so one
//! edge lands exactly on the target, then cropped on the other axis:
//!
//! - **Relatively taller** than the target aspect: scale to the target
//!   width, then crop vertically with equal top/bottom margins (centered).
//! - **Relatively wider**: scale to the target height, then keep the
//!   leftmost target-width slice. The horizontal crop is left-aligned,
//!   not centered.
//! - **Equal aspect**: scale straight to the target, no crop.
//!
//! The geometry lives in [`plan_resize`], a pure function testable without
//! any pixels; [`resize_all`] executes plans with Lanczos3 resampling and
//! writes each result back over its input path.

use crate::config::SlideConfig;
use crate::imaging::{self, ImagingError};
use image::imageops::FilterType;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ResizeError {
    #[error("Image processing failed: {0}")]
    Imaging(#[from] ImagingError),
}

/// Crop region applied after scaling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CropBox {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

/// Scale-then-crop plan for one slide.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResizePlan {
    /// Dimensions to scale to before cropping.
    pub scale_to: (u32, u32),
    /// Crop applied after scaling, if the aspect does not already match.
    pub crop: Option<CropBox>,
}

/// Compute the scale-and-crop geometry for a `source`-sized image.
///
/// Aspect classification uses cross-multiplication (`h*tw` vs `w*th`) so
/// no float comparison is involved. The two inequality checks are written
/// independently; they cannot both fire, and when neither does (exact
/// aspect match) the plan scales straight to the target without a crop.
pub fn plan_resize(source: (u32, u32), target: (u32, u32)) -> ResizePlan {
    let (w, h) = (source.0 as u64, source.1 as u64);
    let (tw, th) = (target.0 as u64, target.1 as u64);

    let mut plan = ResizePlan {
        scale_to: target,
        crop: None,
    };

    // Taller than the target aspect: width lands on target, crop centered.
    if h * tw > w * th {
        let scaled_h = ((h * tw) / w) as u32;
        let margin = scaled_h.saturating_sub(target.1) / 2;
        plan.scale_to = (target.0, scaled_h);
        plan.crop = Some(CropBox {
            x: 0,
            y: margin,
            width: target.0,
            height: target.1,
        });
    }
    // Wider than the target aspect: height lands on target, keep the left slice.
    if h * tw < w * th {
        let scaled_w = ((w * th) / h) as u32;
        plan.scale_to = (scaled_w, target.1);
        plan.crop = Some(CropBox {
            x: 0,
            y: 0,
            width: target.0,
            height: target.1,
        });
    }

    plan
}

/// Scale and crop one slide in place.
pub fn resize_in_place(path: &Path, config: &SlideConfig) -> Result<(), ResizeError> {
    let img = imaging::load_image(path)?;
    let plan = plan_resize((img.width(), img.height()), (config.width, config.height));

    let scaled = img.resize_exact(plan.scale_to.0, plan.scale_to.1, FilterType::Lanczos3);
    let result = match plan.crop {
        Some(c) => scaled.crop_imm(c.x, c.y, c.width, c.height),
        None => scaled,
    };

    imaging::save_image(&result, path)?;
    Ok(())
}

/// Resize every slide, fully consuming the list before the next stage.
pub fn resize_all(slides: &[PathBuf], config: &SlideConfig) -> Result<(), ResizeError> {
    for slide in slides {
        resize_in_place(slide, config)?;
    }
    Ok(())
}
