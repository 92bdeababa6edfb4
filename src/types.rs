//! Type definitions for chord diagram structures

use serde::{Deserialize, Serialize};

/// Visible fret rows for six-string (guitar) diagrams
pub const GUITAR_FRET_WINDOW: u32 = 5;

/// Visible fret rows for four-string (ukulele) diagrams
pub const UKULELE_FRET_WINDOW: u32 = 4;

/// State of a single instrument string
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "state", content = "fret", rename_all = "lowercase")]
pub enum StringState {
    Muted,
    Open,
    Fretted(u32),
}

impl StringState {
    /// The fret number, if the string is fretted
    pub fn fret(&self) -> Option<u32> {
        match self {
            StringState::Fretted(fret) => Some(*fret),
            _ => None,
        }
    }
}

/// Finger assigned to a string
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Finger {
    None,   // -
    Thumb,  // T
    Index,  // 1
    Middle, // 2
    Ring,   // 3
    Little, // 4
}

impl Finger {
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            '-' => Some(Finger::None),
            'T' => Some(Finger::Thumb),
            '1' => Some(Finger::Index),
            '2' => Some(Finger::Middle),
            '3' => Some(Finger::Ring),
            '4' => Some(Finger::Little),
            _ => None,
        }
    }

    pub fn as_char(&self) -> char {
        match self {
            Finger::None => '-',
            Finger::Thumb => 'T',
            Finger::Index => '1',
            Finger::Middle => '2',
            Finger::Ring => '3',
            Finger::Little => '4',
        }
    }

    /// Text drawn for this finger, `None` when no finger is assigned
    pub fn label(&self) -> Option<String> {
        match self {
            Finger::None => None,
            other => Some(other.as_char().to_string()),
        }
    }
}

/// Arrangement of finger numbers and string names
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Layout {
    /// Variant 1: finger numbers inside the dots, string names below the grid
    Inline,
    /// Variant 2: finger numbers below the grid, no string names
    #[default]
    Classic,
}

impl Layout {
    pub fn from_number(n: u8) -> Option<Self> {
        match n {
            1 => Some(Layout::Inline),
            2 => Some(Layout::Classic),
            _ => None,
        }
    }

    pub fn number(&self) -> u8 {
        match self {
            Layout::Inline => 1,
            Layout::Classic => 2,
        }
    }
}

/// Display name split into main text and optional superscript
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChordName {
    pub main: String,
    pub superscript: Option<String>,
}

impl ChordName {
    /// Strip spaces and split on the first `_`; text after a second `_` is dropped.
    pub fn parse(raw: &str) -> Self {
        let compact: String = raw.chars().filter(|c| *c != ' ').collect();
        let mut parts = compact.split('_');
        let main = parts.next().unwrap_or_default().to_string();
        let superscript = parts
            .next()
            .filter(|s| !s.is_empty())
            .map(|s| s.to_string());
        Self { main, superscript }
    }

    pub fn is_empty(&self) -> bool {
        self.main.is_empty() && self.superscript.is_none()
    }
}

/// A barre: one finger holding several strings at the same fret
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bar {
    /// Index of the first string covered
    pub start: usize,
    pub fret: u32,
    /// Number of string gaps spanned, always > 0
    pub length: usize,
    pub finger: Finger,
}

impl Bar {
    /// Index of the last string covered
    pub fn end(&self) -> usize {
        self.start + self.length
    }
}

/// Input bundle for one chord diagram
#[derive(Debug, Clone, PartialEq)]
pub struct ChordSpec {
    pub name: String,
    pub positions: String,
    pub fingers: String,
    /// Explicit string count; inferred from `positions` when `None`
    pub string_count: Option<usize>,
    pub size: f64,
    pub layout: Layout,
    pub string_names: Option<Vec<String>>,
}

impl ChordSpec {
    pub fn new(name: &str, positions: &str, fingers: &str) -> Self {
        Self {
            name: name.to_string(),
            positions: positions.to_string(),
            fingers: fingers.to_string(),
            string_count: None,
            size: 1.0,
            layout: Layout::default(),
            string_names: None,
        }
    }

    pub fn size(mut self, size: f64) -> Self {
        self.size = size;
        self
    }

    pub fn layout(mut self, layout: Layout) -> Self {
        self.layout = layout;
        self
    }

    pub fn strings(mut self, count: usize) -> Self {
        self.string_count = Some(count);
        self
    }

    pub fn string_names<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.string_names = Some(names.into_iter().map(Into::into).collect());
        self
    }
}

/// Replace sizes that are not a positive finite number with 1.
pub fn normalize_size(size: f64) -> f64 {
    if size.is_finite() && size > 0.0 {
        size
    } else {
        1.0
    }
}

/// Open-string note names in standard tuning, low string first
pub fn default_string_names(string_count: usize) -> Vec<String> {
    let names: &[&str] = match string_count {
        4 => &["G", "C", "E", "A"],
        _ => &["E", "A", "D", "G", "B", "E"],
    };
    names.iter().map(|n| n.to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chord_name_superscript() {
        let name = ChordName::parse("C_maj7");
        assert_eq!(name.main, "C");
        assert_eq!(name.superscript.as_deref(), Some("maj7"));
    }

    #[test]
    fn test_chord_name_strips_spaces() {
        let name = ChordName::parse(" A m _ 7 _extra");
        assert_eq!(name.main, "Am");
        assert_eq!(name.superscript.as_deref(), Some("7"));
    }

    #[test]
    fn test_chord_name_trailing_underscore() {
        let name = ChordName::parse("G_");
        assert_eq!(name.main, "G");
        assert!(name.superscript.is_none());
    }

    #[test]
    fn test_normalize_size() {
        assert_eq!(normalize_size(7.0), 7.0);
        assert_eq!(normalize_size(0.0), 1.0);
        assert_eq!(normalize_size(-3.0), 1.0);
        assert_eq!(normalize_size(f64::NAN), 1.0);
        assert_eq!(normalize_size(f64::INFINITY), 1.0);
    }

    #[test]
    fn test_layout_numbers() {
        assert_eq!(Layout::from_number(1), Some(Layout::Inline));
        assert_eq!(Layout::from_number(2), Some(Layout::Classic));
        assert_eq!(Layout::from_number(3), None);
        assert_eq!(Layout::Inline.number(), 1);
    }

    #[test]
    fn test_finger_round_trip_chars() {
        for c in ['-', 'T', '1', '2', '3', '4'] {
            assert_eq!(Finger::from_char(c).map(|f| f.as_char()), Some(c));
        }
        assert_eq!(Finger::from_char('5'), None);
        assert_eq!(Finger::None.label(), None);
        assert_eq!(Finger::Thumb.label().as_deref(), Some("T"));
    }
}
