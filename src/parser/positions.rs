//! Position string decoding and base-fret windowing

use lazy_static::lazy_static;
use regex::Regex;

use super::ParseError;
use crate::types::StringState;

lazy_static! {
    static ref RE_SIX_STRINGS: Regex = encoding_pattern(6);
    static ref RE_FOUR_STRINGS: Regex = encoding_pattern(4);
}

/// Compact form (`X02220`) or dash-separated form (`x-10-12-12-11-10`).
fn encoding_pattern(string_count: usize) -> Regex {
    let field = r"(?:[0-9]{1,2}|[xX])";
    let pattern = format!(
        r"^(?:[0-9xX]{{{n}}}|{field}(?:-{field}){{{rest}}})$",
        n = string_count,
        field = field,
        rest = string_count - 1
    );
    Regex::new(&pattern).unwrap()
}

fn pattern_for(string_count: usize) -> Result<&'static Regex, ParseError> {
    match string_count {
        6 => Ok(&*RE_SIX_STRINGS),
        4 => Ok(&*RE_FOUR_STRINGS),
        n => Err(ParseError::UnsupportedStringCount(n)),
    }
}

/// Decode one state per string from a position encoding.
pub fn parse_positions(
    encoding: &str,
    string_count: usize,
) -> Result<Vec<StringState>, ParseError> {
    let invalid = || ParseError::InvalidEncoding {
        encoding: encoding.to_string(),
        string_count,
    };

    if !pattern_for(string_count)?.is_match(encoding) {
        return Err(invalid());
    }

    let tokens: Vec<&str> = if encoding.len() > string_count {
        encoding.split('-').collect()
    } else {
        // Compact form is pure ASCII, so byte slicing is per character
        (0..encoding.len()).map(|i| &encoding[i..i + 1]).collect()
    };

    tokens
        .iter()
        .map(|token| {
            if token.eq_ignore_ascii_case("x") {
                Ok(StringState::Muted)
            } else {
                match token.parse::<u32>().map_err(|_| invalid())? {
                    0 => Ok(StringState::Open),
                    fret => Ok(StringState::Fretted(fret)),
                }
            }
        })
        .collect()
}

/// Fret mapped to the top grid row.
///
/// Chords that fit below `window` start at the nut, others start at their lowest fretted note.
pub fn base_fret(strings: &[StringState], window: u32) -> u32 {
    let frets = strings.iter().filter_map(|s| s.fret());
    let max = frets.clone().max().unwrap_or(0);
    let min = frets.min().unwrap_or(1);
    if max <= window {
        1
    } else {
        min
    }
}

/// Reject chords whose fretted notes cannot all be shown from `base`.
pub(super) fn check_window(
    strings: &[StringState],
    base: u32,
    window: u32,
) -> Result<(), ParseError> {
    let frets = strings.iter().filter_map(|s| s.fret());
    let Some(max) = frets.clone().max() else {
        return Ok(());
    };
    let min = frets.min().unwrap_or(max);
    if max + 1 - base > window {
        return Err(ParseError::FretSpanTooWide { min, max, window });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compact_form() {
        let strings = parse_positions("x32010", 6).unwrap();
        assert_eq!(strings[0], StringState::Muted);
        assert_eq!(strings[1], StringState::Fretted(3));
        assert_eq!(strings[3], StringState::Open);
    }

    #[test]
    fn test_separated_form_single_digits() {
        let strings = parse_positions("X-0-2-2-2-0", 6).unwrap();
        assert_eq!(strings, parse_positions("X02220", 6).unwrap());
    }

    #[test]
    fn test_rejects_malformed() {
        for bad in [
            "", "12345", "1234567", "X0222O", "X-0-2-2-2", "X-0-2-2-2-0-0", "X-0--2-2-2-0",
            "-1-0-2-2-2-0", "X-0-2-2-2-123", "X02220 ", "X,0,2,2,2,0",
        ] {
            assert!(
                matches!(
                    parse_positions(bad, 6),
                    Err(ParseError::InvalidEncoding { .. })
                ),
                "{:?} should be rejected",
                bad
            );
        }
    }

    #[test]
    fn test_four_string_forms() {
        assert_eq!(parse_positions("2010", 4).unwrap().len(), 4);
        assert_eq!(parse_positions("12-12-11-x", 4).unwrap()[3], StringState::Muted);
        assert!(parse_positions("X02220", 4).is_err());
    }

    #[test]
    fn test_base_fret_low_chord() {
        let strings = parse_positions("022100", 6).unwrap();
        assert_eq!(base_fret(&strings, 5), 1);
        let five = parse_positions("X35553", 6).unwrap();
        assert_eq!(base_fret(&five, 5), 1);
    }

    #[test]
    fn test_base_fret_ignores_open_strings() {
        let strings = parse_positions("0-7-9-9-8-0", 6).unwrap();
        assert_eq!(base_fret(&strings, 5), 7);
    }

    #[test]
    fn test_base_fret_all_open_or_muted() {
        let strings = parse_positions("XX0000", 6).unwrap();
        assert_eq!(base_fret(&strings, 5), 1);
    }

    #[test]
    fn test_window_property_for_high_chords() {
        for encoding in ["466544", "X-9-11-11-11-9", "8-10-10-9-8-8", "355333"] {
            let strings = parse_positions(encoding, 6).unwrap();
            let base = base_fret(&strings, 5);
            check_window(&strings, base, 5).unwrap();
            for fret in strings.iter().filter_map(|s| s.fret()) {
                let relative = fret + 1 - base;
                assert!((1..=5).contains(&relative), "{} in {}", fret, encoding);
            }
        }
    }
}
