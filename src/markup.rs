//! Markup adapter: swaps chord elements in HTML text for inline SVG diagrams.
//!
//! Two forms are recognised:
//! - `<chord name="A" positions="X02220" fingers="--123-" size="7"></chord>`,
//!   replaced entirely by the diagram
//! - any element with a `data-positions` attribute, e.g.
//!   `<span data-positions="X02220" data-fingers="--123-">A</span>`, whose
//!   content becomes the diagram. The name falls back to the text content and
//!   is kept in a `data-name` attribute so the element can be re-rendered.

use lazy_static::lazy_static;
use regex::{Captures, Regex};
use std::collections::HashMap;

use crate::diagram::{ChordBox, ChordStyle};
use crate::svg::{escape_xml, render_chord_svg};
use crate::types::{ChordSpec, Layout};

lazy_static! {
    static ref RE_CHORD_ELEMENT: Regex =
        Regex::new(r"(?is)<chord\b([^>]*?)/?>(?:\s*</chord\s*>)?").unwrap();
    static ref RE_DATA_ELEMENT: Regex =
        Regex::new(r"(?is)<([a-z][a-z0-9]*)\b([^>]*\bdata-positions\s*=[^>]*)>([^<]*)</([a-z][a-z0-9]*)\s*>")
            .unwrap();
    static ref RE_ATTRIBUTE: Regex =
        Regex::new(r#"([A-Za-z][\w-]*)\s*=\s*(?:"([^"]*)"|'([^']*)')"#).unwrap();
    static ref RE_ENTITY: Regex =
        Regex::new(r"&(#[0-9]{1,7}|#[xX][0-9a-fA-F]{1,6}|[a-zA-Z]+);").unwrap();
}

/// Size used when an element has no (valid) size attribute
pub const DEFAULT_MARKUP_SIZE: f64 = 1.0;

/// Replace every chord element in `html` with an inline SVG diagram.
pub fn replace_chord_elements(html: &str, style: &ChordStyle) -> String {
    let replaced = RE_DATA_ELEMENT.replace_all(html, |caps: &Captures<'_>| {
        render_data_element(caps, style)
    });
    RE_CHORD_ELEMENT
        .replace_all(&replaced, |caps: &Captures<'_>| {
            let attrs = parse_attributes(&caps[1]);
            let name = attrs.get("name").map(String::as_str).unwrap_or_default();
            log::debug!("replacing <chord> element {:?}", name);
            render_element(name, &attrs, "", style)
        })
        .into_owned()
}

fn render_data_element(caps: &Captures<'_>, style: &ChordStyle) -> String {
    let tag = &caps[1];
    // No backreferences in `regex`, so mismatched tags are left alone
    if !tag.eq_ignore_ascii_case(&caps[4]) {
        return caps[0].to_string();
    }
    let raw_attrs = caps[2].trim_end();
    let attrs = parse_attributes(raw_attrs);
    let text = decode_entities(caps[3].trim());

    let (name, extra_attr) = match attrs.get("data-name") {
        Some(name) => (name.clone(), String::new()),
        None => {
            let attr = format!(r#" data-name="{}""#, escape_xml(&text));
            (text, attr)
        }
    };
    log::debug!("replacing <{}> element {:?}", tag, name);

    let svg = render_element(&name, &attrs, "data-", style);
    format!("<{}{}{}>{}</{}>", tag, raw_attrs, extra_attr, svg.trim_end(), tag)
}

/// Render from attributes named `{prefix}positions`, `{prefix}fingers`, ...
fn render_element(
    name: &str,
    attrs: &HashMap<String, String>,
    prefix: &str,
    style: &ChordStyle,
) -> String {
    let get = |key: &str| attrs.get(&format!("{}{}", prefix, key)).map(String::as_str);

    let size = get("size")
        .and_then(|s| s.trim().parse::<f64>().ok())
        .unwrap_or(DEFAULT_MARKUP_SIZE);
    let layout = get("layout")
        .and_then(|s| s.trim().parse::<u8>().ok())
        .and_then(Layout::from_number)
        .unwrap_or_default();

    let spec = ChordSpec::new(
        name,
        get("positions").unwrap_or_default(),
        get("fingers").unwrap_or_default(),
    )
    .size(size)
    .layout(layout);

    render_chord_svg(&ChordBox::new(&spec), style)
        .trim_end()
        .to_string()
}

/// Attribute names are lowercased; values have their entities decoded.
fn parse_attributes(raw: &str) -> HashMap<String, String> {
    RE_ATTRIBUTE
        .captures_iter(raw)
        .map(|caps| {
            let value = caps
                .get(2)
                .or_else(|| caps.get(3))
                .map(|m| m.as_str())
                .unwrap_or_default();
            (caps[1].to_lowercase(), decode_entities(value))
        })
        .collect()
}

/// Decode named XML entities and numeric character references.
/// Unknown or invalid references are kept as written.
fn decode_entities(text: &str) -> String {
    if !text.contains('&') {
        return text.to_string();
    }
    RE_ENTITY
        .replace_all(text, |caps: &Captures<'_>| {
            let entity = &caps[1];
            let decoded = match entity {
                "amp" => Some('&'),
                "lt" => Some('<'),
                "gt" => Some('>'),
                "quot" => Some('"'),
                "apos" => Some('\''),
                "nbsp" => Some('\u{a0}'),
                _ => entity.strip_prefix('#').and_then(|num| {
                    let code = match num.strip_prefix('x').or_else(|| num.strip_prefix('X')) {
                        Some(hex) => u32::from_str_radix(hex, 16).ok(),
                        None => num.parse::<u32>().ok(),
                    };
                    code.and_then(char::from_u32)
                }),
            };
            decoded.map_or_else(|| caps[0].to_string(), String::from)
        })
        .into_owned()
}
