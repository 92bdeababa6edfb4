//! Drawing steps for a chord diagram.
//!
//! Steps run back-to-front: background → grid and nut → bars → dots and
//! open/muted markers → finger labels → string names → name → fret offset.

use super::geometry::Geometry;
use super::style::{ChordStyle, ERROR_COLOR, ERROR_LINE_WIDTH};
use super::surface::{DrawingSurface, Font};
use crate::types::{Bar, ChordName, Finger, StringState};

/// Issues drawing calls for one diagram against a borrowed surface
pub(crate) struct Painter<'a, S: DrawingSurface + ?Sized> {
    surface: &'a mut S,
    geo: &'a Geometry,
    style: &'a ChordStyle,
}

impl<'a, S: DrawingSurface + ?Sized> Painter<'a, S> {
    pub(crate) fn new(surface: &'a mut S, geo: &'a Geometry, style: &'a ChordStyle) -> Self {
        Self {
            surface,
            geo,
            style,
        }
    }

    fn font(&self, size: f64) -> Font {
        Font::new(&self.style.font_family, size)
    }

    pub(crate) fn background(&mut self) {
        if let Some(color) = &self.style.background {
            self.surface
                .fill_rect(color, 0.0, 0.0, self.geo.image_width, self.geo.image_height);
        }
    }

    /// Red cross from corner to corner
    pub(crate) fn error_cross(&mut self) {
        let (w, h) = (self.geo.image_width, self.geo.image_height);
        self.surface
            .stroke_line(ERROR_COLOR, ERROR_LINE_WIDTH, 0.0, 0.0, w, h);
        self.surface
            .stroke_line(ERROR_COLOR, ERROR_LINE_WIDTH, 0.0, h, w, 0.0);
    }

    pub(crate) fn chord_box(&mut self, base_fret: u32) {
        let geo = self.geo;
        let color = &self.style.color;

        for i in 0..=geo.fret_count {
            let y = geo.fret_y(i);
            self.surface.stroke_line(
                color,
                geo.line_width,
                geo.xstart,
                y,
                geo.xstart + geo.box_width - geo.line_width,
                y,
            );
        }

        for i in 0..geo.string_count {
            let x = geo.string_x(i);
            self.surface.stroke_line(
                color,
                geo.line_width,
                x,
                geo.ystart,
                x,
                geo.ystart + geo.box_height - geo.line_width,
            );
        }

        if base_fret == 1 {
            self.surface.fill_rect(
                color,
                geo.xstart - geo.line_width / 2.0,
                geo.ystart - geo.nut_height,
                geo.box_width,
                geo.nut_height,
            );
        }
    }

    pub(crate) fn bars(&mut self, bars: &[Bar], base_fret: u32) {
        let geo = self.geo;
        for bar in bars {
            let xstart = geo.string_x(bar.start);
            let xend = geo.string_x(bar.end());
            let y = geo.row_center_y(bar.fret + 1 - base_fret);
            self.surface.stroke_line(
                &self.style.color,
                geo.dot_width / 2.0,
                xstart,
                y,
                xend,
                y,
            );
        }
    }

    pub(crate) fn positions(&mut self, strings: &[StringState], base_fret: u32) {
        let geo = self.geo;
        let color = &self.style.color;
        let mut marker_y = geo.ystart - geo.fret_width;
        if base_fret == 1 {
            marker_y -= geo.nut_height;
        }

        for (i, state) in strings.iter().enumerate() {
            let xpos = geo.dot_x(i);
            let marker_x = xpos + (geo.dot_width - geo.marker_width) / 2.0;
            match *state {
                StringState::Fretted(fret) => {
                    let relative = fret + 1 - base_fret;
                    self.surface
                        .fill_circle(color, xpos, geo.dot_y(relative), geo.dot_width);
                }
                StringState::Open => {
                    self.surface.stroke_circle(
                        color,
                        geo.line_width,
                        marker_x,
                        marker_y,
                        geo.marker_width,
                    );
                }
                StringState::Muted => {
                    let width = geo.line_width * 1.5;
                    let size = geo.marker_width;
                    self.surface.stroke_line(
                        color,
                        width,
                        marker_x,
                        marker_y,
                        marker_x + size,
                        marker_y + size,
                    );
                    self.surface.stroke_line(
                        color,
                        width,
                        marker_x,
                        marker_y + size,
                        marker_x + size,
                        marker_y,
                    );
                }
            }
        }
    }

    /// Finger numbers centred inside their dots, in the background color
    pub(crate) fn fingers_inline(
        &mut self,
        strings: &[StringState],
        fingers: &[Finger],
        base_fret: u32,
    ) {
        let geo = self.geo;
        let font = self.font(geo.finger_font_size);
        let half_dot = geo.dot_width / 2.0;

        for (i, (state, finger)) in strings.iter().zip(fingers).enumerate() {
            let (Some(fret), Some(label)) = (state.fret(), finger.label()) else {
                continue;
            };
            let metrics = self.surface.measure_text(&label, &font);
            let x = geo.dot_x(i) + half_dot - metrics.width / 2.0;
            let y = geo.dot_y(fret + 1 - base_fret) + half_dot - metrics.line_height / 2.0;
            self.surface
                .draw_text(&label, &font, self.style.contrast_color(), x, y);
        }
    }

    /// Finger numbers in a row under the grid
    pub(crate) fn fingers_below(&mut self, fingers: &[Finger]) {
        let geo = self.geo;
        let font = self.font(geo.finger_font_size);
        let y = geo.ystart + geo.box_height;

        for (i, finger) in fingers.iter().enumerate() {
            if let Some(label) = finger.label() {
                self.label_under_string(i, &label, &font, y);
            }
        }
    }

    pub(crate) fn string_names(&mut self, names: &[String]) {
        let geo = self.geo;
        let font = self.font(geo.finger_font_size);
        let y = geo.ystart + geo.box_height;

        for (i, name) in names.iter().take(geo.string_count).enumerate() {
            if !name.is_empty() {
                self.label_under_string(i, name, &font, y);
            }
        }
    }

    fn label_under_string(&mut self, string: usize, text: &str, font: &Font, y: f64) {
        let x = self.geo.xstart + 0.5 * self.geo.line_width
            + string as f64 * self.geo.total_fret_width();
        let metrics = self.surface.measure_text(text, font);
        self.surface
            .draw_text(text, font, &self.style.color, x - 0.5 * metrics.width, y);
    }

    /// Name centred over the grid when it fits, with an optional superscript
    pub(crate) fn chord_name(&mut self, name: &ChordName) {
        if name.is_empty() {
            return;
        }
        let geo = self.geo;
        let name_font = self.font(geo.name_font_size);
        let metrics = self.surface.measure_text(&name.main, &name_font);

        let mut x = geo.xstart;
        if metrics.width < geo.box_width {
            x += (geo.box_width - metrics.width) / 2.0;
        }
        self.surface.draw_text(
            &name.main,
            &name_font,
            &self.style.color,
            x,
            0.2 * geo.superscript_font_size,
        );

        if let Some(superscript) = &name.superscript {
            let super_font = self.font(geo.superscript_font_size);
            self.surface.draw_text(
                superscript,
                &super_font,
                &self.style.color,
                x + 0.8 * metrics.width,
                0.0,
            );
        }
    }

    /// `{n}fr` to the right of the top grid row
    pub(crate) fn base_fret_label(&mut self, base_fret: u32) {
        if base_fret <= 1 {
            return;
        }
        let geo = self.geo;
        let font = self.font(geo.fret_font_size);
        let offset = (geo.fret_font_size - geo.fret_width) / 2.0;
        self.surface.draw_text(
            &format!("{}fr", base_fret),
            &font,
            &self.style.color,
            geo.xstart + geo.box_width + 0.4 * geo.fret_width,
            geo.ystart - offset,
        );
    }
}
