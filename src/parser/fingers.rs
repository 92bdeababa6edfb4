//! Finger string normalization
//!
//! Finger data is decorative, so malformed input is coerced instead of rejected.

use crate::types::Finger;

const FINGER_CHARS: &[char] = &['-', 'T', '1', '2', '3', '4'];

/// Uppercase, pad with `-`, strip anything outside `-T1234`, then truncate.
///
/// Padding happens before stripping, so the result always has exactly
/// `string_count` characters.
pub fn normalize_fingers(raw: &str, string_count: usize) -> String {
    let mut padded = raw.to_uppercase();
    padded.push_str(&"-".repeat(string_count));
    padded
        .chars()
        .filter(|c| FINGER_CHARS.contains(c))
        .take(string_count)
        .collect()
}

/// One finger per string, `Finger::None` for missing or invalid slots.
pub fn parse_fingers(raw: &str, string_count: usize) -> Vec<Finger> {
    normalize_fingers(raw, string_count)
        .chars()
        .map(|c| Finger::from_char(c).unwrap_or(Finger::None))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_literal_cases() {
        assert_eq!(normalize_fingers("t12340000", 6), "T1234-");
        assert_eq!(normalize_fingers("--123-", 6), "--123-");
        assert_eq!(normalize_fingers("", 6), "------");
        assert_eq!(normalize_fingers("1", 4), "1---");
        assert_eq!(normalize_fingers("x1y2z3", 6), "123---");
        assert_eq!(normalize_fingers("1342111111", 6), "134211");
        assert_eq!(normalize_fingers("-1 2 3", 4), "-123");
    }

    #[test]
    fn test_parse_fingers() {
        let fingers = parse_fingers("t-4", 4);
        assert_eq!(
            fingers,
            vec![Finger::Thumb, Finger::None, Finger::Little, Finger::None]
        );
    }
}
