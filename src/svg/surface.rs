//! SVG implementation of the drawing surface.

use crate::diagram::{estimate_text_metrics, DrawingSurface, Font, TextMetrics};

/// Accumulates SVG elements and produces the final document
#[derive(Debug, Clone)]
pub struct SvgSurface {
    width: f64,
    height: f64,
    elements: Vec<String>,
}

impl SvgSurface {
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            elements: Vec::new(),
        }
    }

    /// Close the document
    pub fn finish(self) -> String {
        let w = fmt_num(self.width);
        let h = fmt_num(self.height);
        let mut svg = format!(
            r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 {} {}" width="{}" height="{}">"#,
            w, h, w, h
        );
        svg.push('\n');
        for el in &self.elements {
            svg.push_str("  ");
            svg.push_str(el);
            svg.push('\n');
        }
        svg.push_str("</svg>\n");
        svg
    }
}

impl DrawingSurface for SvgSurface {
    fn fill_rect(&mut self, color: &str, x: f64, y: f64, width: f64, height: f64) {
        self.elements.push(format!(
            r#"<rect x="{}" y="{}" width="{}" height="{}" fill="{}"/>"#,
            fmt_num(x),
            fmt_num(y),
            fmt_num(width),
            fmt_num(height),
            escape_xml(color)
        ));
    }

    fn stroke_line(&mut self, color: &str, width: f64, x1: f64, y1: f64, x2: f64, y2: f64) {
        self.elements.push(format!(
            r#"<line x1="{}" y1="{}" x2="{}" y2="{}" stroke="{}" stroke-width="{}" stroke-linecap="round"/>"#,
            fmt_num(x1),
            fmt_num(y1),
            fmt_num(x2),
            fmt_num(y2),
            escape_xml(color),
            fmt_num(width)
        ));
    }

    fn stroke_circle(&mut self, color: &str, width: f64, x: f64, y: f64, diameter: f64) {
        let r = diameter / 2.0;
        self.elements.push(format!(
            r#"<circle cx="{}" cy="{}" r="{}" fill="none" stroke="{}" stroke-width="{}"/>"#,
            fmt_num(x + r),
            fmt_num(y + r),
            fmt_num(r),
            escape_xml(color),
            fmt_num(width)
        ));
    }

    fn fill_circle(&mut self, color: &str, x: f64, y: f64, diameter: f64) {
        let r = diameter / 2.0;
        self.elements.push(format!(
            r#"<circle cx="{}" cy="{}" r="{}" fill="{}"/>"#,
            fmt_num(x + r),
            fmt_num(y + r),
            fmt_num(r),
            escape_xml(color)
        ));
    }

    fn measure_text(&self, text: &str, font: &Font) -> TextMetrics {
        estimate_text_metrics(text, font)
    }

    fn draw_text(&mut self, text: &str, font: &Font, color: &str, x: f64, y: f64) {
        // text-before-edge puts the top of the glyph box at y
        self.elements.push(format!(
            r#"<text x="{}" y="{}" font-family="{}" font-size="{}" fill="{}" dominant-baseline="text-before-edge">{}</text>"#,
            fmt_num(x),
            fmt_num(y),
            escape_xml(&font.family),
            fmt_num(font.size),
            escape_xml(color),
            escape_xml(text)
        ));
    }
}

/// Escape special XML characters in text content
pub fn escape_xml(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

/// Integers without a decimal point, other values rounded to 2 places
fn fmt_num(n: f64) -> String {
    if n.fract() == 0.0 {
        format!("{}", n as i64)
    } else {
        let s = format!("{:.2}", n);
        s.trim_end_matches('0').trim_end_matches('.').to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fmt_num() {
        assert_eq!(fmt_num(28.0), "28");
        assert_eq!(fmt_num(15.5), "15.5");
        assert_eq!(fmt_num(19.599999999999998), "19.6");
        assert_eq!(fmt_num(-1.25), "-1.25");
    }

    #[test]
    fn test_circle_uses_center() {
        let mut svg = SvgSurface::new(10.0, 10.0);
        svg.fill_circle("#000", 2.0, 4.0, 4.0);
        let out = svg.finish();
        assert!(out.contains(r##"<circle cx="4" cy="6" r="2" fill="#000"/>"##));
    }

    #[test]
    fn test_text_is_escaped() {
        let mut svg = SvgSurface::new(10.0, 10.0);
        svg.draw_text("A<b>&", &Font::new("Arial", 12.0), "#000", 0.0, 0.0);
        let out = svg.finish();
        assert!(out.contains("A&lt;b&gt;&amp;</text>"));
    }

    #[test]
    fn test_document_size() {
        let out = SvgSurface::new(46.0, 55.0).finish();
        assert!(out.starts_with(
            r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 46 55" width="46" height="55">"#
        ));
        assert!(out.trim_end().ends_with("</svg>"));
    }
}
