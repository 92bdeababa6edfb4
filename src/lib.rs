//! chordbox - Render fretted-instrument chord diagrams
//!
//! This library turns a compact fret encoding such as `X02220` (plus an
//! optional finger string like `--123-`) into a chord diagram drawn on any
//! 2-D [`DrawingSurface`], with an SVG backend included.
//!
//! # Example
//!
//! ```rust
//! use chordbox::{render_to_svg, RenderOptions};
//!
//! let svg = render_to_svg("A", "X02220", "--123-", &RenderOptions::default());
//! assert!(svg.starts_with("<svg"));
//! ```
//!
//! # Encodings
//!
//! - Compact: one character per string, `0`-`9` or `X`/`x` (`133211`)
//! - Separated: dash-separated fields of one or two digits or `X`/`x`
//!   (`x-10-12-12-11-10`)
//! - Fingers: `-` (none), `T` (thumb), `1`-`4`; anything else is ignored
//!
//! Six-string (guitar) and four-string (ukulele) chords are supported.
//! Encodings that cannot be decoded are drawn as a red cross, never as an error.

pub mod database;
pub mod diagram;
pub mod markup;
pub mod parser;
pub mod svg;
pub mod types;

pub use diagram::{
    ChordBox, ChordStyle, DrawOp, DrawingSurface, Font, Geometry, RecordingSurface, TextMetrics,
};
pub use markup::replace_chord_elements;
pub use parser::{parse_chord, ParseError, ParsedChord};
pub use svg::{render_chord_svg, SvgSurface};
pub use types::*;

/// Configuration options for rendering a chord
#[derive(Debug, Clone, PartialEq)]
pub struct RenderOptions {
    /// Scale factor, one unit is a quarter of a fret cell. Default: 1
    pub size: f64,
    /// Default: `Layout::Classic` (finger numbers under the grid)
    pub layout: Layout,
    /// Labels under each string in `Layout::Inline`. Default: standard tuning
    pub string_names: Option<Vec<String>>,
    pub style: ChordStyle,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            size: 1.0,
            layout: Layout::default(),
            string_names: None,
            style: ChordStyle::default(),
        }
    }
}

impl RenderOptions {
    fn spec(&self, name: &str, positions: &str, fingers: &str) -> ChordSpec {
        let spec = ChordSpec::new(name, positions, fingers)
            .size(self.size)
            .layout(self.layout);
        match &self.string_names {
            Some(names) => spec.string_names(names.iter().cloned()),
            None => spec,
        }
    }
}

/// Draw a chord onto a caller-supplied surface.
///
/// The surface should be at least [`ChordBox::width`] × [`ChordBox::height`];
/// the returned `ChordBox` reports both.
pub fn render<S: DrawingSurface + ?Sized>(
    spec: &ChordSpec,
    surface: &mut S,
    style: &ChordStyle,
) -> ChordBox {
    let chord = ChordBox::new(spec);
    chord.draw(surface, style);
    chord
}

/// Render a chord to an SVG document sized to the diagram.
///
/// # Example
/// ```rust
/// use chordbox::{render_to_svg, Layout, RenderOptions};
///
/// let options = RenderOptions { size: 7.0, layout: Layout::Inline, ..Default::default() };
/// let svg = chordbox::render_to_svg("A", "X02220", "--123-", &options);
/// assert!(svg.contains(r#"width="298" height="341""#));
/// ```
pub fn render_to_svg(name: &str, positions: &str, fingers: &str, options: &RenderOptions) -> String {
    let chord = ChordBox::new(&options.spec(name, positions, fingers));
    render_chord_svg(&chord, &options.style)
}

/// Build a chord from the database, named after its note and kind (`Am`, `G7`).
pub fn named_chord(
    note: &str,
    kind: &str,
    options: &RenderOptions,
) -> Result<ChordBox, String> {
    let entry = database::lookup(database::DEFAULT_TUNING, kind, note)?;
    let name = database::default_name(note, kind);
    Ok(ChordBox::new(&options.spec(&name, &entry.positions, &entry.fingers)))
}

/// Render a chord from the database to SVG.
pub fn render_named_chord(note: &str, kind: &str, options: &RenderOptions) -> Result<String, String> {
    let chord = named_chord(note, kind, options)?;
    Ok(render_chord_svg(&chord, &options.style))
}
