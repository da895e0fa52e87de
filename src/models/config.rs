//! The decoded skin configuration model.

use std::collections::HashMap;

use image::Rgba;
use serde::{Deserialize, Serialize};

use crate::colour;

/// Everything a `skin.ini` carries, decoded but mostly untyped.
///
/// Only the values the resolver gives dedicated treatment are lifted out of
/// the raw entry map: the format version, named custom colours, and the
/// ordered combo colour sequence. Every other `Key: Value` pair stays in
/// [`entries`](Self::entries) as a raw string and is interpreted lazily at
/// lookup time.
///
/// The configuration is immutable after decoding; all lookup-time state
/// (notably the per-key-count cache) lives in the resolver.
///
/// # Examples
///
/// ```
/// use maniaskin::models::SkinConfiguration;
///
/// let config = SkinConfiguration::default();
/// assert!(config.version.is_none());
/// assert!(config.entry("CursorExpand").is_none());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SkinConfiguration {
    /// Decimal legacy format version, when the skin declares one
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub version: Option<f64>,
    /// Raw untyped `Key: Value` pairs
    #[serde(default)]
    pub entries: HashMap<String, String>,
    /// Named colours from the `[Colours]` section, decoded to RGBA
    #[serde(with = "colour::serde_hex_map", default)]
    pub custom_colours: HashMap<String, Rgba<u8>>,
    /// Ordered `Combo1..Combo8` colour sequence, or absent
    #[serde(
        with = "colour::serde_hex_list",
        skip_serializing_if = "Option::is_none",
        default
    )]
    pub combo_colours: Option<Vec<Rgba<u8>>>,
}

impl SkinConfiguration {
    /// Returns the raw string value for a generic entry, if present.
    pub fn entry(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    /// Returns a named custom colour, if present.
    pub fn custom_colour(&self, name: &str) -> Option<Rgba<u8>> {
        self.custom_colours.get(name).copied()
    }
}
