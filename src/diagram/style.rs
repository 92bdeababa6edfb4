//! Colors and font used when drawing a diagram

use serde::{Deserialize, Serialize};

pub const DEFAULT_FOREGROUND: &str = "#000";
pub const DEFAULT_BACKGROUND: &str = "#FFF";
pub const DEFAULT_FONT_FAMILY: &str = "Arial";

/// Color of the cross drawn for chords that fail to parse
pub const ERROR_COLOR: &str = "red";
pub const ERROR_LINE_WIDTH: f64 = 3.0;

/// Diagram styling.
///
/// Missing fields deserialize to their defaults, so `{}` is a valid style.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct ChordStyle {
    /// Background fill, `None` leaves the surface transparent
    #[serde(rename = "background-color")]
    pub background: Option<String>,
    /// Lines, dots and text
    pub color: String,
    pub font_family: String,
}

impl Default for ChordStyle {
    fn default() -> Self {
        Self {
            background: Some(DEFAULT_BACKGROUND.to_string()),
            color: DEFAULT_FOREGROUND.to_string(),
            font_family: DEFAULT_FONT_FAMILY.to_string(),
        }
    }
}

impl ChordStyle {
    pub fn transparent() -> Self {
        Self {
            background: None,
            ..Default::default()
        }
    }

    /// Color used for text drawn on top of filled dots
    pub fn contrast_color(&self) -> &str {
        self.background.as_deref().unwrap_or(DEFAULT_BACKGROUND)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_json_uses_defaults() {
        let style: ChordStyle = serde_json::from_str(r##"{"color": "#333"}"##).unwrap();
        assert_eq!(style.color, "#333");
        assert_eq!(style.background.as_deref(), Some("#FFF"));
        assert_eq!(style.font_family, "Arial");
    }

    #[test]
    fn test_null_background_is_transparent() {
        let style: ChordStyle =
            serde_json::from_str(r#"{"background-color": null, "font-family": "Verdana"}"#).unwrap();
        assert_eq!(style, ChordStyle {
            font_family: "Verdana".to_string(),
            ..ChordStyle::transparent()
        });
        assert_eq!(style.contrast_color(), "#FFF");
    }
}
