//! Chord diagram construction and drawing.
//!
//! A [`ChordBox`] is built once from a [`ChordSpec`]: the encodings are parsed,
//! barres detected and pixel geometry computed. It can then be drawn any number
//! of times onto any [`DrawingSurface`].

pub mod bars;
pub mod geometry;
pub mod recording;
mod renderer;
pub mod style;
pub mod surface;

pub use bars::detect_bars;
pub use geometry::Geometry;
pub use recording::{DrawOp, RecordingSurface};
pub use style::ChordStyle;
pub use surface::{estimate_text_metrics, DrawingSurface, Font, TextMetrics};

use crate::parser::{self, ParseError, ParsedChord};
use crate::types::{default_string_names, Bar, ChordName, ChordSpec, Layout, GUITAR_FRET_WINDOW};
use renderer::Painter;

/// A chord ready to be drawn
#[derive(Debug, Clone, PartialEq)]
pub struct ChordBox {
    name: ChordName,
    layout: Layout,
    string_names: Vec<String>,
    chord: Result<ParsedChord, ParseError>,
    bars: Vec<Bar>,
    geometry: Geometry,
}

impl ChordBox {
    pub fn new(spec: &ChordSpec) -> Self {
        let string_count = spec
            .string_count
            .unwrap_or_else(|| parser::infer_string_count(&spec.positions));
        let chord = parser::parse_chord(&spec.positions, &spec.fingers, string_count);

        let (geometry, bars) = match &chord {
            Ok(parsed) => {
                let bars = detect_bars(&parsed.strings, &parsed.fingers);
                if !bars.is_empty() {
                    log::debug!("chord {:?}: {} bar(s) {:?}", spec.name, bars.len(), bars);
                }
                (
                    Geometry::new(parsed.string_count(), parsed.fret_window, spec.size),
                    bars,
                )
            }
            Err(e) => {
                log::warn!(
                    "chord {:?} ({:?}) drawn as error diagram: {}",
                    spec.name,
                    spec.positions,
                    e
                );
                // Unsupported counts get guitar proportions for the error cross
                let (count, window) = match parser::fret_window(string_count) {
                    Ok(window) => (string_count, window),
                    Err(_) => (6, GUITAR_FRET_WINDOW),
                };
                (Geometry::new(count, window, spec.size), Vec::new())
            }
        };

        let string_names = spec
            .string_names
            .clone()
            .unwrap_or_else(|| default_string_names(geometry.string_count));

        Self {
            name: ChordName::parse(&spec.name),
            layout: spec.layout,
            string_names,
            chord,
            bars,
            geometry,
        }
    }

    /// Same chord at another scale; the encodings are not parsed again
    pub fn with_size(&self, size: f64) -> Self {
        let mut resized = self.clone();
        resized.geometry = Geometry::new(
            self.geometry.string_count,
            self.geometry.fret_count,
            size,
        );
        resized
    }

    pub fn width(&self) -> f64 {
        self.geometry.image_width
    }

    pub fn height(&self) -> f64 {
        self.geometry.image_height
    }

    pub fn geometry(&self) -> &Geometry {
        &self.geometry
    }

    pub fn name(&self) -> &ChordName {
        &self.name
    }

    pub fn layout(&self) -> Layout {
        self.layout
    }

    pub fn bars(&self) -> &[Bar] {
        &self.bars
    }

    pub fn parsed(&self) -> Option<&ParsedChord> {
        self.chord.as_ref().ok()
    }

    pub fn error(&self) -> Option<&ParseError> {
        self.chord.as_ref().err()
    }

    pub fn is_error(&self) -> bool {
        self.chord.is_err()
    }

    /// Fret shown in the top grid row, `None` for error diagrams
    pub fn base_fret(&self) -> Option<u32> {
        self.parsed().map(|c| c.base_fret)
    }

    /// Draw the diagram. Never fails: undecodable chords draw a red cross.
    pub fn draw<S: DrawingSurface + ?Sized>(&self, surface: &mut S, style: &ChordStyle) {
        let mut painter = Painter::new(surface, &self.geometry, style);
        painter.background();

        let chord = match &self.chord {
            Ok(chord) => chord,
            Err(_) => {
                painter.error_cross();
                return;
            }
        };
        let base = chord.base_fret;

        painter.chord_box(base);
        painter.bars(&self.bars, base);
        painter.positions(&chord.strings, base);
        match self.layout {
            Layout::Inline => {
                painter.fingers_inline(&chord.strings, &chord.fingers, base);
                painter.string_names(&self.string_names);
            }
            Layout::Classic => painter.fingers_below(&chord.fingers),
        }
        painter.chord_name(&self.name);
        painter.base_fret_label(base);
    }
}
