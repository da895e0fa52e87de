//! Colour parsing for legacy skin values.
//!
//! Legacy skins store colours as comma-separated byte components
//! (`255,192,0` or `255,192,0,128`). Later format versions also accept hex
//! notation (`#RGB`, `#RGBA`, `#RRGGBB`, `#RRGGBBAA`). Both forms decode to
//! [`image::Rgba<u8>`]; a missing alpha component means fully opaque.

use image::Rgba;
use thiserror::Error;

/// Error type for colour parsing failures
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColourError {
    /// The input was empty or whitespace-only
    #[error("empty colour value")]
    Empty,
    /// Wrong number of comma-separated components
    #[error("expected 3 or 4 colour components, found {0}")]
    ComponentCount(usize),
    /// A component was not a byte value (0-255)
    #[error("invalid colour component '{0}'")]
    InvalidComponent(String),
    /// Hex string had a length other than 3, 4, 6, or 8 digits
    #[error("invalid hex colour length {0}")]
    InvalidHexLength(usize),
    /// Hex string contained non-hex characters
    #[error("invalid hex colour '{0}'")]
    InvalidHex(String),
}

/// Parse a legacy colour string into an RGBA colour.
///
/// Accepts comma-separated components (`"255,192,0"`, `"255,192,0,128"`) and
/// `#`-prefixed hex (`"#FC0"`, `"#FFCC00"`, `"#FFCC0080"`). Components outside
/// the byte range are rejected rather than clamped.
///
/// # Examples
///
/// ```
/// use image::Rgba;
/// use maniaskin::colour::parse_colour;
///
/// assert_eq!(parse_colour("255, 192, 0"), Ok(Rgba([255, 192, 0, 255])));
/// assert_eq!(parse_colour("#FFCC00"), Ok(Rgba([255, 204, 0, 255])));
/// ```
pub fn parse_colour(input: &str) -> Result<Rgba<u8>, ColourError> {
    let input = input.trim();
    if input.is_empty() {
        return Err(ColourError::Empty);
    }
    match input.strip_prefix('#') {
        Some(hex) => parse_hex_colour(hex),
        None => parse_component_colour(input),
    }
}

/// Format a colour as a hex string (`#RRGGBB`, or `#RRGGBBAA` when not fully
/// opaque). The inverse of the hex form accepted by [`parse_colour`].
pub fn to_hex(colour: &Rgba<u8>) -> String {
    let Rgba([r, g, b, a]) = *colour;
    if a == 255 {
        format!("#{r:02X}{g:02X}{b:02X}")
    } else {
        format!("#{r:02X}{g:02X}{b:02X}{a:02X}")
    }
}

fn parse_component_colour(input: &str) -> Result<Rgba<u8>, ColourError> {
    let parts: Vec<&str> = input.split(',').map(str::trim).collect();
    if parts.len() != 3 && parts.len() != 4 {
        return Err(ColourError::ComponentCount(parts.len()));
    }

    let mut channels = [0u8, 0, 0, 255];
    for (i, part) in parts.iter().enumerate() {
        channels[i] = part
            .parse::<u8>()
            .map_err(|_| ColourError::InvalidComponent((*part).to_string()))?;
    }
    Ok(Rgba(channels))
}

fn parse_hex_colour(hex: &str) -> Result<Rgba<u8>, ColourError> {
    if !hex.is_ascii() {
        return Err(ColourError::InvalidHex(hex.to_string()));
    }

    let mut channels = [0u8, 0, 0, 255];
    match hex.len() {
        // Shorthand: each digit expands to a doubled pair (F -> FF)
        3 | 4 => {
            for (i, digit) in hex.char_indices() {
                let value = digit
                    .to_digit(16)
                    .ok_or_else(|| ColourError::InvalidHex(hex.to_string()))?;
                channels[i] = (value * 17) as u8;
            }
        }
        6 | 8 => {
            for i in 0..hex.len() / 2 {
                channels[i] = u8::from_str_radix(&hex[i * 2..i * 2 + 2], 16)
                    .map_err(|_| ColourError::InvalidHex(hex.to_string()))?;
            }
        }
        len => return Err(ColourError::InvalidHexLength(len)),
    }
    Ok(Rgba(channels))
}

/// Serde adapter serializing a single colour as a hex string.
pub mod serde_hex {
    use image::Rgba;
    use serde::{Deserialize, Deserializer, Serializer};

    use super::{parse_colour, to_hex};

    pub fn serialize<S: Serializer>(colour: &Rgba<u8>, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&to_hex(colour))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Rgba<u8>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        parse_colour(&raw).map_err(serde::de::Error::custom)
    }
}

/// Serde adapter serializing a colour sequence as hex strings.
pub mod serde_hex_vec {
    use image::Rgba;
    use serde::{Deserialize, Deserializer, Serializer};

    use super::{parse_colour, to_hex};

    pub fn serialize<S: Serializer>(
        colours: &[Rgba<u8>],
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(colours.iter().map(to_hex))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Vec<Rgba<u8>>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = Vec::<String>::deserialize(deserializer)?;
        raw.iter()
            .map(|s| parse_colour(s).map_err(serde::de::Error::custom))
            .collect()
    }
}

/// Serde adapter for an optional colour sequence.
pub mod serde_hex_list {
    use image::Rgba;
    use serde::{Deserialize, Deserializer, Serializer};

    use super::{parse_colour, to_hex};

    pub fn serialize<S: Serializer>(
        colours: &Option<Vec<Rgba<u8>>>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        match colours {
            Some(list) => serializer.collect_seq(list.iter().map(to_hex)),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<Vec<Rgba<u8>>>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = Option::<Vec<String>>::deserialize(deserializer)?;
        raw.map(|list| {
            list.iter()
                .map(|s| parse_colour(s).map_err(serde::de::Error::custom))
                .collect()
        })
        .transpose()
    }
}

/// Serde adapter for a name -> colour map, serialized with stable key order.
pub mod serde_hex_map {
    use std::collections::{BTreeMap, HashMap};

    use image::Rgba;
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    use super::{parse_colour, to_hex};

    pub fn serialize<S: Serializer>(
        colours: &HashMap<String, Rgba<u8>>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        let ordered: BTreeMap<&str, String> =
            colours.iter().map(|(name, colour)| (name.as_str(), to_hex(colour))).collect();
        ordered.serialize(serializer)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<HashMap<String, Rgba<u8>>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = HashMap::<String, String>::deserialize(deserializer)?;
        raw.into_iter()
            .map(|(name, value)| {
                parse_colour(&value).map(|colour| (name, colour)).map_err(serde::de::Error::custom)
            })
            .collect()
    }
}
