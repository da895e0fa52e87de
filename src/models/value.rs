//! Typed configuration values and the coercions that produce them.

use std::fmt;
use std::str::FromStr;

use image::Rgba;
use serde::Serialize;

use crate::colour::{self, parse_colour};

/// The value type a caller expects a configuration lookup to produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueKind {
    Float,
    Bool,
    Version,
    Colour,
    ColourList,
    Text,
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Float => "float",
            Self::Bool => "bool",
            Self::Version => "version",
            Self::Colour => "colour",
            Self::ColourList => "colours",
            Self::Text => "text",
        };
        f.write_str(name)
    }
}

impl FromStr for ValueKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "float" => Ok(Self::Float),
            "bool" => Ok(Self::Bool),
            "version" => Ok(Self::Version),
            "colour" => Ok(Self::Colour),
            "colours" => Ok(Self::ColourList),
            "text" => Ok(Self::Text),
            other => Err(format!("unknown value kind '{other}'")),
        }
    }
}

/// A successfully resolved configuration value.
///
/// The variant always matches the [`ValueKind`] the caller declared; a
/// lookup whose stored encoding cannot produce the declared kind misses
/// instead of coercing.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ConfigValue {
    Float(f32),
    Bool(bool),
    Version(f64),
    Colour(#[serde(with = "colour::serde_hex")] Rgba<u8>),
    Colours(#[serde(with = "colour::serde_hex_vec")] Vec<Rgba<u8>>),
    Text(String),
}

impl ConfigValue {
    /// The kind of this value.
    pub fn kind(&self) -> ValueKind {
        match self {
            Self::Float(_) => ValueKind::Float,
            Self::Bool(_) => ValueKind::Bool,
            Self::Version(_) => ValueKind::Version,
            Self::Colour(_) => ValueKind::Colour,
            Self::Colours(_) => ValueKind::ColourList,
            Self::Text(_) => ValueKind::Text,
        }
    }
}

impl fmt::Display for ConfigValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Float(value) => write!(f, "{value}"),
            Self::Bool(value) => write!(f, "{value}"),
            Self::Version(value) => write!(f, "{value}"),
            Self::Colour(value) => f.write_str(&colour::to_hex(value)),
            Self::Colours(values) => {
                let hex: Vec<String> = values.iter().map(colour::to_hex).collect();
                f.write_str(&hex.join(", "))
            }
            Self::Text(value) => f.write_str(value),
        }
    }
}

/// Normalize the legacy integer-as-boolean encoding to `"true"`/`"false"`.
///
/// Old skins write booleans as `"1"`/`"0"`. `"1"` means true; anything that
/// is not already the literal `"true"` or `"false"` means false. This quirk
/// lives only on the generic entry path; nothing else should call it.
pub fn normalize_legacy_bool(raw: &str) -> &'static str {
    match raw {
        "1" | "true" => "true",
        _ => "false",
    }
}

/// Parse a raw entry string into the expected kind. A parse failure is a
/// miss, not an error.
pub(crate) fn parse_entry(raw: &str, expected: ValueKind) -> Option<ConfigValue> {
    let raw = raw.trim();
    match expected {
        ValueKind::Float => raw.parse::<f32>().ok().map(ConfigValue::Float),
        ValueKind::Bool => {
            normalize_legacy_bool(raw).parse::<bool>().ok().map(ConfigValue::Bool)
        }
        ValueKind::Version => raw.parse::<f64>().ok().map(ConfigValue::Version),
        ValueKind::Colour => parse_colour(raw).ok().map(ConfigValue::Colour),
        // Colour sequences never live in plain entries
        ValueKind::ColourList => None,
        ValueKind::Text => Some(ConfigValue::Text(raw.to_string())),
    }
}
