//! Shared decode/encode helpers — pure Rust, zero external dependencies.
//!
//! | Operation | Crate / function |
//! |---|---|
//! | Decode (JPEG, PNG, TIFF, WebP) | `image` crate (pure Rust decoders) |
//! | Encode | `DynamicImage::save`, format inferred from extension |
//!
//! Every stage that touches pixels goes through these two functions so
//! decode and encode failures carry the offending path consistently.

use image::{DynamicImage, ImageReader};
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ImagingError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Imaging failed: {0}")]
    Failed(String),
}

/// Load and decode an image from disk.
pub fn load_image(path: &Path) -> Result<DynamicImage, ImagingError> {
    ImageReader::open(path)
        .map_err(ImagingError::Io)?
        .decode()
        .map_err(|e| ImagingError::Failed(format!("Failed to decode {}: {}", path.display(), e)))
}

/// Encode and save an image, inferring the format from the path extension.
///
/// JPEG output requires the image to already be alpha-free; callers force
/// RGB before encoding.
pub fn save_image(img: &DynamicImage, path: &Path) -> Result<(), ImagingError> {
    img.save(path)
        .map_err(|e| ImagingError::Failed(format!("Failed to encode {}: {}", path.display(), e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::write_test_png;
    use std::path::Path;

    #[test]
    fn load_roundtrips_dimensions() {
        let tmp = tempfile::TempDir::new().unwrap();
        let path = tmp.path().join("test.png");
        write_test_png(&path, 200, 150);

        let img = load_image(&path).unwrap();
        assert_eq!(img.width(), 200);
        assert_eq!(img.height(), 150);
    }

    #[test]
    fn load_nonexistent_is_io_error() {
        let result = load_image(Path::new("/nonexistent/image.png"));
        assert!(matches!(result, Err(ImagingError::Io(_))));
    }

    #[test]
    fn load_non_image_fails() {
        let tmp = tempfile::TempDir::new().unwrap();
        let path = tmp.path().join("fake.png");
        std::fs::write(&path, "not an image").unwrap();

        let result = load_image(&path);
        assert!(matches!(result, Err(ImagingError::Failed(_))));
    }

    #[test]
    fn save_unknown_extension_fails() {
        let tmp = tempfile::TempDir::new().unwrap();
        let path = tmp.path().join("test.png");
        write_test_png(&path, 10, 10);
        let img = load_image(&path).unwrap();

        let result = save_image(&img, &tmp.path().join("out.xyz"));
        assert!(result.is_err());
    }
}
