//! Parser for chord position and finger encodings

pub mod fingers;
pub mod positions;

use thiserror::Error;

use crate::types::{Finger, StringState, GUITAR_FRET_WINDOW, UKULELE_FRET_WINDOW};

pub use fingers::{normalize_fingers, parse_fingers};
pub use positions::{base_fret, parse_positions};

/// Errors raised while decoding a chord.
///
/// Every variant is recovered by the renderer, which draws the error diagram instead.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("invalid chord encoding {encoding:?} for {string_count} strings")]
    InvalidEncoding { encoding: String, string_count: usize },

    #[error("unsupported string count {0}, expected 4 or 6")]
    UnsupportedStringCount(usize),

    #[error("frets {min}..={max} do not fit a {window}-fret window")]
    FretSpanTooWide { min: u32, max: u32, window: u32 },
}

/// A decoded chord, ready for geometry and drawing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedChord {
    pub strings: Vec<StringState>,
    pub fingers: Vec<Finger>,
    /// Fret shown in the top row of the grid
    pub base_fret: u32,
    /// Number of fret rows drawn
    pub fret_window: u32,
}

impl ParsedChord {
    pub fn string_count(&self) -> usize {
        self.strings.len()
    }

    /// Grid row (1-based) a fretted string lands on, `None` for open and muted strings
    pub fn relative_fret(&self, string: usize) -> Option<u32> {
        self.strings
            .get(string)
            .and_then(|s| s.fret())
            .map(|fret| fret + 1 - self.base_fret)
    }
}

/// Decode a position string and a finger string for `string_count` strings.
pub fn parse_chord(
    positions: &str,
    fingers: &str,
    string_count: usize,
) -> Result<ParsedChord, ParseError> {
    let window = fret_window(string_count)?;
    let strings = parse_positions(positions, string_count)?;
    let base = base_fret(&strings, window);
    positions::check_window(&strings, base, window)?;
    let fingers = parse_fingers(fingers, string_count);

    log::debug!(
        "parsed chord {:?}: {} strings, base fret {}",
        positions,
        string_count,
        base
    );

    Ok(ParsedChord {
        strings,
        fingers,
        base_fret: base,
        fret_window: window,
    })
}

/// Number of fret rows drawn for an instrument with `string_count` strings
pub fn fret_window(string_count: usize) -> Result<u32, ParseError> {
    match string_count {
        6 => Ok(GUITAR_FRET_WINDOW),
        4 => Ok(UKULELE_FRET_WINDOW),
        n => Err(ParseError::UnsupportedStringCount(n)),
    }
}

/// Guess the string count from the shape of a position string.
///
/// Dash-separated encodings count their fields, compact ones their characters.
pub fn infer_string_count(positions: &str) -> usize {
    let trimmed = positions.trim();
    if trimmed.contains('-') {
        trimmed.split('-').count()
    } else {
        trimmed.chars().count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_a_major() {
        let chord = parse_chord("X02220", "--123-", 6).unwrap();
        assert_eq!(
            chord.strings,
            vec![
                StringState::Muted,
                StringState::Open,
                StringState::Fretted(2),
                StringState::Fretted(2),
                StringState::Fretted(2),
                StringState::Open,
            ]
        );
        assert_eq!(chord.fingers[2], Finger::Index);
        assert_eq!(chord.base_fret, 1);
        assert_eq!(chord.fret_window, 5);
    }

    #[test]
    fn test_parse_high_position() {
        let chord = parse_chord("466544", "134211", 6).unwrap();
        assert_eq!(chord.base_fret, 4);
        assert_eq!(chord.relative_fret(0), Some(1));
        assert_eq!(chord.relative_fret(1), Some(3));
    }

    #[test]
    fn test_parse_separated_two_digit_frets() {
        let chord = parse_chord("x-10-12-12-11-10", "-13421", 6).unwrap();
        assert_eq!(chord.strings[0], StringState::Muted);
        assert_eq!(chord.strings[2], StringState::Fretted(12));
        assert_eq!(chord.base_fret, 10);
        assert_eq!(chord.relative_fret(2), Some(3));
    }

    #[test]
    fn test_parse_wrong_length_is_invalid() {
        let err = parse_chord("12345", "", 6).unwrap_err();
        assert_eq!(
            err,
            ParseError::InvalidEncoding {
                encoding: "12345".to_string(),
                string_count: 6
            }
        );
    }

    #[test]
    fn test_parse_unsupported_string_count() {
        assert_eq!(
            parse_chord("00000", "", 5).unwrap_err(),
            ParseError::UnsupportedStringCount(5)
        );
    }

    #[test]
    fn test_parse_span_too_wide() {
        let err = parse_chord("1-X-X-X-X-12", "", 6).unwrap_err();
        assert_eq!(
            err,
            ParseError::FretSpanTooWide {
                min: 1,
                max: 12,
                window: 5
            }
        );
    }

    #[test]
    fn test_ukulele_window() {
        let chord = parse_chord("0003", "---3", 4).unwrap();
        assert_eq!(chord.fret_window, 4);
        assert_eq!(chord.base_fret, 1);
        let high = parse_chord("5-4-3-3", "", 4).unwrap();
        assert_eq!(high.base_fret, 3);
    }

    #[test]
    fn test_infer_string_count() {
        assert_eq!(infer_string_count("X02220"), 6);
        assert_eq!(infer_string_count("0003"), 4);
        assert_eq!(infer_string_count("x-10-12-12-11-10"), 6);
        assert_eq!(infer_string_count("12345"), 5);
    }
}
