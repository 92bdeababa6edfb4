//! Knowledge base of common chord shapes.
//!
//! Maps (tuning, kind, note) to position and finger encodings. This module is
//! independent of the renderer; callers pass the encodings on themselves.

use lazy_static::lazy_static;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

pub const DEFAULT_TUNING: &str = "standard";
pub const DEFAULT_KIND: &str = "major";

/// Scale used for diagrams made from database lookups
pub const DEFAULT_DIAGRAM_SIZE: f64 = 3.0;

/// One voicing of a chord
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChordEntry {
    pub positions: String,
    pub fingers: String,
}

/// A chord belonging to a key
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyChord {
    pub note: String,
    #[serde(default = "default_kind")]
    pub kind: String,
}

fn default_kind() -> String {
    DEFAULT_KIND.to_string()
}

type Voicings = BTreeMap<String, Vec<ChordEntry>>;

#[derive(Debug, Deserialize)]
struct ChordTable {
    abbreviations: BTreeMap<String, String>,
    /// tuning → kind → note → voicings
    tunings: BTreeMap<String, BTreeMap<String, Voicings>>,
    /// mode → key → chords
    keys: BTreeMap<String, BTreeMap<String, Vec<KeyChord>>>,
}

lazy_static! {
    static ref COMMON: ChordTable = serde_json::from_str(include_str!("common.json")).unwrap();
}

fn voicing_table(tuning: &str, kind: &str) -> Result<&'static Voicings, String> {
    let kinds = COMMON
        .tunings
        .get(tuning)
        .ok_or_else(|| format!("Unknown tuning '{}'", tuning))?;
    kinds
        .get(kind)
        .ok_or_else(|| format!("Unknown chord kind '{}'", kind))
}

/// Find the table key for a note, accepting either half of `A#/Bb`
fn resolve_note<'t, V>(table: &'t BTreeMap<String, V>, note: &str) -> Option<&'t V> {
    table.get(note).or_else(|| {
        table
            .iter()
            .find(|(key, _)| key.split('/').any(|part| part == note))
            .map(|(_, value)| value)
    })
}

/// All voicings of a chord, most common first
pub fn voicings(tuning: &str, kind: &str, note: &str) -> Result<&'static [ChordEntry], String> {
    resolve_note(voicing_table(tuning, kind)?, note)
        .map(|v| v.as_slice())
        .ok_or_else(|| format!("No {} chord for note '{}'", kind, note))
}

/// The preferred voicing of a chord
pub fn lookup(tuning: &str, kind: &str, note: &str) -> Result<ChordEntry, String> {
    voicings(tuning, kind, note)?
        .first()
        .cloned()
        .ok_or_else(|| format!("No voicing stored for {} {}", note, kind))
}

/// Name suffix for a chord kind (`minor` → `m`)
pub fn abbreviation(kind: &str) -> Option<&'static str> {
    COMMON.abbreviations.get(kind).map(|s| s.as_str())
}

/// Display name built from the note and the kind's abbreviation
pub fn default_name(note: &str, kind: &str) -> String {
    format!("{}{}", note, abbreviation(kind).unwrap_or_default())
}

pub fn tunings() -> Vec<&'static str> {
    COMMON.tunings.keys().map(|k| k.as_str()).collect()
}

pub fn kinds(tuning: &str) -> Vec<&'static str> {
    COMMON
        .tunings
        .get(tuning)
        .map(|kinds| kinds.keys().map(|k| k.as_str()).collect())
        .unwrap_or_default()
}

pub fn notes(tuning: &str, kind: &str) -> Vec<&'static str> {
    voicing_table(tuning, kind)
        .map(|table| table.keys().map(|k| k.as_str()).collect())
        .unwrap_or_default()
}

/// The seven diatonic chords of a major key, tonic first
pub fn key_chords(key: &str) -> Result<&'static [KeyChord], String> {
    let keys = COMMON
        .keys
        .get(DEFAULT_KIND)
        .ok_or_else(|| "No major keys stored".to_string())?;
    resolve_note(keys, key)
        .map(|chords| chords.as_slice())
        .ok_or_else(|| format!("Unknown key '{}'", key))
}
