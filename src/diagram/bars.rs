//! Barre detection

use crate::types::{Bar, Finger, StringState};

/// Find barres: the same finger on the same fret across several strings.
///
/// Each finger yields at most one bar, anchored at its first fretted string and
/// reaching the last string it holds on that fret. Strings in between may carry
/// other fingers (an F major barre spans all six strings).
pub fn detect_bars(strings: &[StringState], fingers: &[Finger]) -> Vec<Bar> {
    let count = strings.len().min(fingers.len());
    let mut bars: Vec<Bar> = Vec::new();

    for i in 0..count.saturating_sub(1) {
        let (Some(fret), finger) = (strings[i].fret(), fingers[i]) else {
            continue;
        };
        if finger == Finger::None || bars.iter().any(|b| b.finger == finger) {
            continue;
        }

        let length = (i + 1..count)
            .filter(|&j| fingers[j] == finger && strings[j].fret() == Some(fret))
            .last()
            .map_or(0, |j| j - i);

        if length > 0 {
            bars.push(Bar {
                start: i,
                fret,
                length,
                finger,
            });
        }
    }

    bars
}
