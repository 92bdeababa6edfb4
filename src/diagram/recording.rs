//! Surface that records draw calls instead of drawing them.

use serde::Serialize;

use super::surface::{estimate_text_metrics, DrawingSurface, Font, TextMetrics};

/// One recorded drawing primitive
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum DrawOp {
    FillRect {
        color: String,
        x: f64,
        y: f64,
        width: f64,
        height: f64,
    },
    StrokeLine {
        color: String,
        width: f64,
        x1: f64,
        y1: f64,
        x2: f64,
        y2: f64,
    },
    StrokeCircle {
        color: String,
        width: f64,
        x: f64,
        y: f64,
        diameter: f64,
    },
    FillCircle {
        color: String,
        x: f64,
        y: f64,
        diameter: f64,
    },
    DrawText {
        text: String,
        font: Font,
        color: String,
        x: f64,
        y: f64,
    },
}

#[derive(Debug, Clone, Default)]
pub struct RecordingSurface {
    ops: Vec<DrawOp>,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn ops(&self) -> &[DrawOp] {
        &self.ops
    }

    pub fn into_ops(self) -> Vec<DrawOp> {
        self.ops
    }

    /// Recorded operations as a JSON array
    pub fn to_json(&self) -> Result<String, String> {
        serde_json::to_string_pretty(&self.ops).map_err(|e| format!("JSON serialization error: {e}"))
    }

    /// Text of every recorded `DrawText`, in drawing order
    pub fn texts(&self) -> Vec<&str> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                DrawOp::DrawText { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }
}

impl DrawingSurface for RecordingSurface {
    fn fill_rect(&mut self, color: &str, x: f64, y: f64, width: f64, height: f64) {
        self.ops.push(DrawOp::FillRect {
            color: color.to_string(),
            x,
            y,
            width,
            height,
        });
    }

    fn stroke_line(&mut self, color: &str, width: f64, x1: f64, y1: f64, x2: f64, y2: f64) {
        self.ops.push(DrawOp::StrokeLine {
            color: color.to_string(),
            width,
            x1,
            y1,
            x2,
            y2,
        });
    }

    fn stroke_circle(&mut self, color: &str, width: f64, x: f64, y: f64, diameter: f64) {
        self.ops.push(DrawOp::StrokeCircle {
            color: color.to_string(),
            width,
            x,
            y,
            diameter,
        });
    }

    fn fill_circle(&mut self, color: &str, x: f64, y: f64, diameter: f64) {
        self.ops.push(DrawOp::FillCircle {
            color: color.to_string(),
            x,
            y,
            diameter,
        });
    }

    fn measure_text(&self, text: &str, font: &Font) -> TextMetrics {
        estimate_text_metrics(text, font)
    }

    fn draw_text(&mut self, text: &str, font: &Font, color: &str, x: f64, y: f64) {
        self.ops.push(DrawOp::DrawText {
            text: text.to_string(),
            font: font.clone(),
            color: color.to_string(),
            x,
            y,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_records_in_order() {
        let mut surface = RecordingSurface::new();
        surface.fill_rect("#FFF", 0.0, 0.0, 10.0, 10.0);
        surface.draw_text("A", &Font::new("Arial", 12.0), "#000", 1.0, 2.0);
        assert_eq!(surface.ops().len(), 2);
        assert!(matches!(surface.ops()[0], DrawOp::FillRect { .. }));
        assert_eq!(surface.texts(), vec!["A"]);
    }

    #[test]
    fn test_json_tags_ops() {
        let mut surface = RecordingSurface::new();
        surface.fill_circle("#000", 1.0, 2.0, 3.0);
        let json = surface.to_json().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value[0]["op"], "fill_circle");
        assert_eq!(value[0]["diameter"], 3.0);
    }
}
