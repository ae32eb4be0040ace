//! Shared test utilities for the mkslides test suite.
//!
//! Synthetic image fixtures are encoded with the `image` crate so tests
//! never depend on binary files in the repository. PNG is used throughout:
//! it is lossless, so pixel assertions after resize/crop stay exact-ish
//! (resampling aside).

use crate::config::SlideConfig;
use image::{Rgb, RgbImage, Rgba, RgbaImage};
use std::path::Path;

/// A `SlideConfig` rooted at `base`, with `in/` and `out/` subdirectories.
pub fn slide_config(base: &Path) -> SlideConfig {
    SlideConfig {
        input_dir: base.join("in"),
        output_dir: base.join("out"),
        ..SlideConfig::default()
    }
}

/// Write a PNG with a smooth coordinate gradient.
pub fn write_test_png(path: &Path, width: u32, height: u32) {
    let img = RgbImage::from_fn(width, height, |x, y| {
        Rgb([(x % 256) as u8, (y % 256) as u8, 128])
    });
    img.save(path).unwrap();
}

/// Write a PNG with a semi-transparent alpha channel.
pub fn write_test_rgba_png(path: &Path, width: u32, height: u32) {
    let img = RgbaImage::from_pixel(width, height, Rgba([10, 200, 30, 128]));
    img.save(path).unwrap();
}

/// Write a PNG split into three horizontal bands: red, green, blue.
///
/// Used to verify which vertical region a centered crop keeps.
pub fn write_banded_png(path: &Path, width: u32, height: u32) {
    let img = RgbImage::from_fn(width, height, |_, y| {
        if y < height / 3 {
            Rgb([255, 0, 0])
        } else if y < 2 * height / 3 {
            Rgb([0, 255, 0])
        } else {
            Rgb([0, 0, 255])
        }
    });
    img.save(path).unwrap();
}

/// Write a PNG with the left half black and the right half white.
///
/// Used to verify that the horizontal crop is left-aligned.
pub fn write_split_png(path: &Path, width: u32, height: u32) {
    let img = RgbImage::from_fn(width, height, |x, _| {
        if x < width / 2 {
            Rgb([0, 0, 0])
        } else {
            Rgb([255, 255, 255])
        }
    });
    img.save(path).unwrap();
}
