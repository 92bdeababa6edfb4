//! SVG backend - draws chord diagrams into SVG strings.
//!
//! Pure string building, no DOM manipulation.

mod surface;

pub use surface::{escape_xml, SvgSurface};

use crate::diagram::{ChordBox, ChordStyle};

/// Draw a chord into a standalone SVG document sized to the diagram.
pub fn render_chord_svg(chord: &ChordBox, style: &ChordStyle) -> String {
    let mut surface = SvgSurface::new(chord.width(), chord.height());
    chord.draw(&mut surface, style);
    surface.finish()
}
