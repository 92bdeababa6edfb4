//! Pixel measurements for a chord diagram.
//!
//! Everything is derived from the string count, the number of fret rows and a
//! size scale. One size unit is a quarter of a fret cell.

use serde::Serialize;

use crate::types::normalize_size;

/// Ratio of a font's cap height to its em size
pub const CAP_HEIGHT_RATIO: f64 = 0.8;

/// Derived pixel geometry, recomputed for every diagram
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Geometry {
    pub size: f64,
    pub string_count: usize,
    pub fret_count: u32,

    pub fret_width: f64,
    pub nut_height: f64,
    pub line_width: f64,
    pub dot_width: f64,
    pub marker_width: f64,
    pub box_width: f64,
    pub box_height: f64,

    pub fret_font_size: f64,
    pub finger_font_size: f64,
    pub name_font_size: f64,
    pub superscript_font_size: f64,

    /// Upper-left corner of the fret grid
    pub xstart: f64,
    pub ystart: f64,
    pub image_width: f64,
    pub image_height: f64,
}

impl Geometry {
    pub fn new(string_count: usize, fret_count: u32, size: f64) -> Self {
        let size = normalize_size(size);
        let strings = string_count as f64;
        let frets = f64::from(fret_count);

        let fret_width = 4.0 * size;
        let nut_height = fret_width / 2.0;
        let line_width = (size * 0.31).ceil();
        let dot_width = (0.9 * fret_width).ceil();
        let marker_width = 0.7 * fret_width;
        let box_width = (strings - 1.0) * fret_width + strings * line_width;
        let box_height = frets * (fret_width + line_width) + line_width;

        let mut fret_font_size = fret_width / CAP_HEIGHT_RATIO;
        let mut finger_font_size = fret_width * CAP_HEIGHT_RATIO;
        let mut name_font_size = fret_width * 2.0 / CAP_HEIGHT_RATIO;
        let mut superscript_font_size = 0.7 * name_font_size;
        // The smallest scale is unreadable without a flat bump
        if size == 1.0 {
            fret_font_size += 2.0;
            finger_font_size += 2.0;
            name_font_size += 2.0;
            superscript_font_size += 2.0;
        }

        let xstart = fret_width;
        let ystart = (0.2 * superscript_font_size
            + name_font_size
            + nut_height
            + 1.7 * marker_width)
            .round();

        Self {
            size,
            string_count,
            fret_count,
            fret_width,
            nut_height,
            line_width,
            dot_width,
            marker_width,
            box_width,
            box_height,
            fret_font_size,
            finger_font_size,
            name_font_size,
            superscript_font_size,
            xstart,
            ystart,
            image_width: box_width + 5.0 * fret_width,
            image_height: box_height + ystart + 2.0 * fret_width,
        }
    }

    /// Distance between neighbouring strings (and fret lines)
    pub fn total_fret_width(&self) -> f64 {
        self.fret_width + self.line_width
    }

    /// X coordinate of string `index`
    pub fn string_x(&self, index: usize) -> f64 {
        self.xstart + index as f64 * self.total_fret_width()
    }

    /// Y coordinate of fret line `index`, 0 being the top of the grid
    pub fn fret_y(&self, index: u32) -> f64 {
        self.ystart + f64::from(index) * self.total_fret_width()
    }

    /// Left edge of the dot bounding square on string `index`
    pub fn dot_x(&self, index: usize) -> f64 {
        self.xstart - 0.5 * self.fret_width
            + 0.5 * self.line_width
            + index as f64 * self.total_fret_width()
    }

    /// Top edge of the dot bounding square on grid row `relative_fret` (1-based)
    pub fn dot_y(&self, relative_fret: u32) -> f64 {
        f64::from(relative_fret) * self.total_fret_width() + self.ystart - self.fret_width
    }

    /// Vertical centre of grid row `relative_fret` (1-based)
    pub fn row_center_y(&self, relative_fret: u32) -> f64 {
        self.fret_y(relative_fret) - self.total_fret_width() / 2.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_size_seven_guitar() {
        let g = Geometry::new(6, 5, 7.0);
        assert_eq!(g.fret_width, 28.0);
        assert_eq!(g.nut_height, 14.0);
        assert_eq!(g.line_width, 3.0);
        assert_eq!(g.dot_width, 26.0);
        assert!(close(g.marker_width, 19.6));
        assert_eq!(g.box_width, 158.0);
        assert_eq!(g.box_height, 158.0);
        assert!(close(g.fret_font_size, 35.0));
        assert!(close(g.finger_font_size, 22.4));
        assert!(close(g.name_font_size, 70.0));
        assert!(close(g.superscript_font_size, 49.0));
        assert_eq!(g.xstart, 28.0);
        assert_eq!(g.ystart, 127.0);
        assert_eq!(g.image_width, 298.0);
        assert_eq!(g.image_height, 341.0);
    }

    #[test]
    fn test_size_one_font_bump() {
        let g = Geometry::new(6, 5, 1.0);
        assert_eq!(g.fret_width, 4.0);
        assert_eq!(g.line_width, 1.0);
        assert_eq!(g.dot_width, 4.0);
        assert!(close(g.fret_font_size, 7.0));
        assert!(close(g.finger_font_size, 5.2));
        assert!(close(g.name_font_size, 12.0));
        assert!(close(g.superscript_font_size, 9.0));
        assert_eq!(g.ystart, 21.0);
        assert_eq!(g.image_width, 46.0);
        assert_eq!(g.image_height, 55.0);
    }

    #[test]
    fn test_no_bump_above_one() {
        let g = Geometry::new(6, 5, 2.0);
        assert!(close(g.name_font_size, 20.0));
        assert!(close(g.finger_font_size, 6.4));
    }

    #[test]
    fn test_invalid_size_falls_back_to_one() {
        assert_eq!(Geometry::new(6, 5, f64::NAN), Geometry::new(6, 5, 1.0));
        assert_eq!(Geometry::new(6, 5, -2.0), Geometry::new(6, 5, 1.0));
    }

    #[test]
    fn test_ukulele_box() {
        let g = Geometry::new(4, 4, 3.0);
        assert_eq!(g.fret_width, 12.0);
        assert_eq!(g.line_width, 1.0);
        assert_eq!(g.box_width, 3.0 * 12.0 + 4.0);
        assert_eq!(g.box_height, 4.0 * 13.0 + 1.0);
    }

    #[test]
    fn test_deterministic() {
        assert_eq!(Geometry::new(6, 5, 3.5), Geometry::new(6, 5, 3.5));
    }

    #[test]
    fn test_grid_helpers() {
        let g = Geometry::new(6, 5, 7.0);
        assert_eq!(g.string_x(0), 28.0);
        assert_eq!(g.string_x(5), 28.0 + 5.0 * 31.0);
        assert_eq!(g.fret_y(5), 127.0 + 155.0);
        assert_eq!(g.dot_x(0), 28.0 - 14.0 + 1.5);
        assert_eq!(g.dot_y(1), 31.0 + 127.0 - 28.0);
        assert_eq!(g.row_center_y(1), 127.0 + 15.5);
    }
}
