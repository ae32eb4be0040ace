//! # mkslides
//!
//! Batch-converts a folder of images into fixed-size "slide" thumbnails,
//! each optionally overlaid with a translucent caption box showing the
//! file's name, wrapped to fit.
//!
//! # Architecture: Four-Stage Pipeline
//!
//! One linear pass over the input directory, each stage fully consuming the
//! previous stage's file list before the next begins:
//!
//! ```text
//! 1. Discover     in/       →  [source paths]   (extension allow-list)
//! 2. Materialize  sources   →  out/*.jpg        (decode, force RGB, re-encode)
//! 3. Resize       out/*.jpg →  out/*.jpg        (scale + crop to 400x200, in place)
//! 4. Caption      out/*.jpg →  out/*.jpg        (wrapped filename over a box, in place)
//! ```
//!
//! Resize and caption are independently switchable. Every parameter lives in
//! a single [`config::SlideConfig`] built once at startup and passed by
//! reference into each stage — no ambient globals, no config files.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`discover`] | Stage 1 — lists input files matching the extension allow-list |
//! | [`materialize`] | Stage 2 — re-encodes each source into the output tree as RGB |
//! | [`resize`] | Stage 3 — scale-then-crop geometry and in-place execution |
//! | [`caption`] | Stage 4 — caption box layout and text overlay |
//! | [`text`] | Glyph measurement and greedy word wrapping |
//! | [`imaging`] | Shared decode/encode helpers over the `image` crate |
//! | [`config`] | The fixed slide parameter set and its validation |
//! | [`pipeline`] | Driver running the stages in order |
//! | [`output`] | CLI output formatting — per-slide display of pipeline results |
//!
//! # Design Decisions
//!
//! ## Pure-Rust Imaging
//!
//! Decoding, scaling (Lanczos3), cropping, and JPEG/PNG encoding all go
//! through the `image` crate; caption glyphs are measured with `ab_glyph`
//! and rasterized with `imageproc`. No ImageMagick, no system font stack —
//! the binary is self-contained apart from the user-supplied `.ttf`.
//!
//! ## Fail-Fast Error Policy
//!
//! A missing input directory, a missing output directory, an undecodable
//! file, or an unloadable font aborts the whole run with the underlying
//! error. There is no per-file skip-and-continue: for a small batch tool,
//! a partial output tree is worse than a clear failure.
//!
//! ## Asymmetric Cropping
//!
//! Images taller than the target aspect are cropped vertically with equal
//! margins; images wider than it keep the *leftmost* slice rather than the
//! center. Slides usually lead with their subject on the left, and the
//! asymmetry is kept deliberately — see [`resize::plan_resize`].

pub mod caption;
pub mod config;
pub mod discover;
pub mod imaging;
pub mod materialize;
pub mod output;
pub mod pipeline;
pub mod resize;
pub mod text;

#[cfg(test)]
pub(crate) mod test_helpers;
