//! Lookup request descriptors.
//!
//! Every question the resolver can answer is a value of one of the closed
//! unions in this module: a configuration lookup, a gameplay component
//! lookup, or an audio sample lookup. Texture lookups are plain strings.

use serde::{Deserialize, Serialize};

/// A typed configuration lookup against a decoded skin.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigLookup {
    /// A colour the format gives a well-known name
    Colour(GlobalColour),
    /// A setting from the legacy version-tagged header
    Legacy(LegacySetting),
    /// A custom colour by its exact `[Colours]` name
    CustomColour(String),
    /// A per-key-count playfield setting
    Keymode { keys: u32, field: KeymodeField },
    /// Generic fallback: exact string match against the raw entry map
    Entry(String),
}

/// Colours with a fixed meaning across all skins.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GlobalColour {
    /// The ordered combo colour rotation
    ComboColours,
    /// Glow tint behind the main menu logo
    MenuGlow,
    /// Border colour of slider bodies
    SliderBorder,
}

impl GlobalColour {
    /// Key used when the colour is stored as a named custom colour.
    pub fn lookup_name(self) -> &'static str {
        match self {
            Self::ComboColours => "ComboColours",
            Self::MenuGlow => "MenuGlow",
            Self::SliderBorder => "SliderBorder",
        }
    }
}

/// Settings tied to the legacy format header rather than the entry map.
///
/// Only `Version` has a dedicated decoding; other legacy settings read
/// through the generic entry path and miss here.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LegacySetting {
    /// The decimal format version the skin declares
    Version,
    /// Frame rate applied to skinned animations
    AnimationFramerate,
}

/// Sub-fields of a per-key-count configuration.
///
/// Column-indexed fields carry their column index directly, so a lookup
/// without an index cannot be constructed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeymodeField {
    /// Width of the given column
    ColumnWidth(usize),
    /// Leading spacing of the given column
    ColumnSpacing(usize),
    /// Vertical hit receptor position
    HitPosition,
    /// Judgement line visibility
    ShowJudgementLine,
}

/// A gameplay component to resolve to an animated drawable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ComponentLookup {
    /// A judgement display for a hit result
    Judgement(HitResult),
    /// Any other component, looked up under its own declared name
    Named(String),
}

/// Gameplay hit results that map to judgement textures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HitResult {
    Miss,
    Meh,
    Good,
    Great,
}

impl HitResult {
    /// The conventional legacy resource name for this result.
    pub fn lookup_name(self) -> &'static str {
        match self {
            Self::Miss => "hit0",
            Self::Meh => "hit50",
            Self::Good => "hit100",
            Self::Great => "hit300",
        }
    }
}

/// An audio sample to resolve.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum SampleLookup {
    /// An explicit candidate list, tried in order
    Names(Vec<String>),
    /// A gameplay hit sample with bank-qualified naming conventions
    Hit(HitSample),
}

impl SampleLookup {
    /// Candidate lookup names, most specific first.
    pub fn candidates(&self) -> Vec<String> {
        match self {
            Self::Names(names) => names.clone(),
            Self::Hit(sample) => sample.lookup_names(),
        }
    }

    /// The bare bank-free name tried as a last resort, when this lookup
    /// carries one.
    pub fn bare_name(&self) -> Option<&str> {
        match self {
            Self::Names(_) => None,
            Self::Hit(sample) => Some(&sample.name),
        }
    }
}

/// A gameplay hit sample: a base name qualified by a sample bank and an
/// optional custom sample-set suffix.
///
/// # Examples
///
/// ```
/// use maniaskin::models::HitSample;
///
/// let sample = HitSample {
///     bank: "soft".to_string(),
///     name: "hitclap".to_string(),
///     suffix: Some("2".to_string()),
/// };
/// assert_eq!(sample.lookup_names(), vec!["soft-hitclap2", "soft-hitclap"]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HitSample {
    /// Sample bank, e.g. `normal`, `soft`, `drum`
    pub bank: String,
    /// Bank-free sample name, e.g. `hitnormal`
    pub name: String,
    /// Custom sample-set index appended to the qualified name
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub suffix: Option<String>,
}

impl HitSample {
    /// Bank-qualified candidate names, most specific first. The bare
    /// [`name`](Self::name) is not included; it is only a last resort after
    /// every candidate fails.
    pub fn lookup_names(&self) -> Vec<String> {
        let mut names = Vec::with_capacity(2);
        if let Some(suffix) = &self.suffix {
            names.push(format!("{}-{}{}", self.bank, self.name, suffix));
        }
        names.push(format!("{}-{}", self.bank, self.name));
        names
    }
}
