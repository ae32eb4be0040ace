//! Caption text measurement and greedy word wrapping.
//!
//! Wrapping and box layout only ever ask two questions of a font: how wide
//! a line renders, and how tall the caption's ink is. The [`TextMeasure`]
//! trait captures exactly that seam so the layout logic is unit-testable
//! with fixed-advance metrics, while production code uses [`FontMetrics`]
//! backed by `ab_glyph`.

use ab_glyph::{Font, FontVec, PxScale, ScaleFont};

/// Rendered-text measurement used by wrapping and box layout.
pub trait TextMeasure {
    /// Advance width of `text` in pixels, including kerning.
    fn line_width(&self, text: &str) -> f32;

    /// Height of the ink bounding box of `text` in pixels — the vertical
    /// span actually covered by glyph outlines, not the font's line height.
    fn ink_height(&self, text: &str) -> f32;
}

/// `ab_glyph`-backed measurement at a fixed pixel size.
pub struct FontMetrics<'a> {
    font: &'a FontVec,
    scale: PxScale,
}

impl<'a> FontMetrics<'a> {
    pub fn new(font: &'a FontVec, size: f32) -> Self {
        Self {
            font,
            scale: PxScale::from(size),
        }
    }
}

impl TextMeasure for FontMetrics<'_> {
    fn line_width(&self, text: &str) -> f32 {
        let scaled = self.font.as_scaled(self.scale);
        let mut width = 0.0f32;
        let mut prev: Option<ab_glyph::GlyphId> = None;

        for ch in text.chars() {
            let id = scaled.glyph_id(ch);
            if let Some(prev) = prev {
                width += scaled.kern(prev, id);
            }
            width += scaled.h_advance(id);
            prev = Some(id);
        }

        width
    }

    fn ink_height(&self, text: &str) -> f32 {
        let mut top = f32::MAX;
        let mut bottom = f32::MIN;

        for ch in text.chars() {
            let glyph = self.font.glyph_id(ch).with_scale(self.scale);
            // Whitespace and other blank glyphs have no outline
            if let Some(outline) = self.font.outline_glyph(glyph) {
                let bounds = outline.px_bounds();
                top = top.min(bounds.min.y);
                bottom = bottom.max(bounds.max.y);
            }
        }

        if bottom > top { bottom - top } else { 0.0 }
    }
}

/// Greedy word wrap against a pixel budget.
///
/// Words are packed space-joined onto the current line while its rendered
/// width stays within `budget`; an overflowing word starts a new line and
/// is never split, so a single word may exceed the budget on its own line.
/// The wrap starts from one empty line, so a first word that already
/// overflows leaves that empty line in place.
pub fn wrap_caption(text: &str, budget: f32, metrics: &impl TextMeasure) -> Vec<String> {
    let mut lines = vec![String::new()];

    for word in text.split_whitespace() {
        let last = lines.last().unwrap();
        let candidate = if last.is_empty() {
            word.to_string()
        } else {
            format!("{last} {word}")
        };

        if metrics.line_width(&candidate) <= budget {
            *lines.last_mut().unwrap() = candidate;
        } else {
            lines.push(word.to_string());
        }
    }

    lines
}
