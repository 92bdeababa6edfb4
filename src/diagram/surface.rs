//! Drawing surface abstraction consumed by the chord renderer.
//!
//! Conventions shared by every backend:
//! - circles are addressed by the top-left corner of their bounding square
//! - text is addressed by its top-left corner
//! - stroked lines use round caps

use serde::{Deserialize, Serialize};

/// Average glyph advance of a sans-serif face, as a fraction of the font size
pub const AVERAGE_CHAR_WIDTH: f64 = 0.56;

/// Line height as a fraction of the font size
pub const LINE_HEIGHT_RATIO: f64 = 1.15;

/// Font family and pixel size
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Font {
    pub family: String,
    pub size: f64,
}

impl Font {
    pub fn new(family: &str, size: f64) -> Self {
        Self {
            family: family.to_string(),
            size,
        }
    }
}

/// Result of measuring a string
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TextMetrics {
    pub width: f64,
    pub line_height: f64,
}

/// A 2-D canvas the renderer draws onto.
///
/// The surface is borrowed for a single draw call and never retained.
pub trait DrawingSurface {
    fn fill_rect(&mut self, color: &str, x: f64, y: f64, width: f64, height: f64);

    fn stroke_line(&mut self, color: &str, width: f64, x1: f64, y1: f64, x2: f64, y2: f64);

    fn stroke_circle(&mut self, color: &str, width: f64, x: f64, y: f64, diameter: f64);

    fn fill_circle(&mut self, color: &str, x: f64, y: f64, diameter: f64);

    fn measure_text(&self, text: &str, font: &Font) -> TextMetrics;

    fn draw_text(&mut self, text: &str, font: &Font, color: &str, x: f64, y: f64);
}

/// Approximate text metrics for backends without a font rasterizer
pub fn estimate_text_metrics(text: &str, font: &Font) -> TextMetrics {
    TextMetrics {
        width: text.chars().count() as f64 * font.size * AVERAGE_CHAR_WIDTH,
        line_height: font.size * LINE_HEIGHT_RATIO,
    }
}
