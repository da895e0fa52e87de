//! Configuration value resolution.

use crate::models::value::parse_entry;
use crate::models::{
    ConfigLookup, ConfigValue, GlobalColour, KeymodeField, LegacySetting, ValueKind,
};

use super::SkinResolver;

impl SkinResolver {
    /// Resolve a configuration lookup to a value of the expected kind.
    ///
    /// The first matching branch wins; there is no fallthrough between
    /// branches. A lookup misses when no value exists, when the stored
    /// encoding cannot produce the expected kind, or when a raw entry fails
    /// to parse. Misses are `None`, never panics.
    pub fn resolve_config(
        &self,
        lookup: &ConfigLookup,
        expected: ValueKind,
    ) -> Option<ConfigValue> {
        match lookup {
            ConfigLookup::Colour(GlobalColour::ComboColours) => {
                if expected != ValueKind::ColourList {
                    return None;
                }
                match &self.configuration.combo_colours {
                    Some(colours) if !colours.is_empty() => {
                        Some(ConfigValue::Colours(colours.clone()))
                    }
                    _ => None,
                }
            }
            // Other global colours are stored as custom colours under their
            // well-known names
            ConfigLookup::Colour(global) => {
                self.custom_colour_value(global.lookup_name(), expected)
            }
            ConfigLookup::Legacy(LegacySetting::Version) => {
                if expected != ValueKind::Version {
                    return None;
                }
                self.configuration.version.map(ConfigValue::Version)
            }
            ConfigLookup::Legacy(_) => None,
            ConfigLookup::CustomColour(name) => self.custom_colour_value(name, expected),
            ConfigLookup::Keymode { keys, field } => {
                self.resolve_keymode_field(*keys, *field, expected)
            }
            ConfigLookup::Entry(key) => {
                let raw = self.configuration.entries.get(key)?;
                parse_entry(raw, expected)
            }
        }
    }

    /// Resolve a lookup expected to be a float.
    pub fn config_float(&self, lookup: &ConfigLookup) -> Option<f32> {
        match self.resolve_config(lookup, ValueKind::Float)? {
            ConfigValue::Float(value) => Some(value),
            _ => None,
        }
    }

    /// Resolve a lookup expected to be a boolean.
    pub fn config_bool(&self, lookup: &ConfigLookup) -> Option<bool> {
        match self.resolve_config(lookup, ValueKind::Bool)? {
            ConfigValue::Bool(value) => Some(value),
            _ => None,
        }
    }

    /// Resolve a lookup expected to be the format version.
    pub fn config_version(&self, lookup: &ConfigLookup) -> Option<f64> {
        match self.resolve_config(lookup, ValueKind::Version)? {
            ConfigValue::Version(value) => Some(value),
            _ => None,
        }
    }

    /// Resolve a lookup expected to be a single colour.
    pub fn config_colour(&self, lookup: &ConfigLookup) -> Option<image::Rgba<u8>> {
        match self.resolve_config(lookup, ValueKind::Colour)? {
            ConfigValue::Colour(value) => Some(value),
            _ => None,
        }
    }

    /// Resolve a lookup expected to be a colour sequence.
    pub fn config_colours(&self, lookup: &ConfigLookup) -> Option<Vec<image::Rgba<u8>>> {
        match self.resolve_config(lookup, ValueKind::ColourList)? {
            ConfigValue::Colours(values) => Some(values),
            _ => None,
        }
    }

    /// Resolve a lookup expected to be raw text.
    pub fn config_text(&self, lookup: &ConfigLookup) -> Option<String> {
        match self.resolve_config(lookup, ValueKind::Text)? {
            ConfigValue::Text(value) => Some(value),
            _ => None,
        }
    }

    fn custom_colour_value(&self, name: &str, expected: ValueKind) -> Option<ConfigValue> {
        if expected != ValueKind::Colour {
            return None;
        }
        self.configuration.custom_colour(name).map(ConfigValue::Colour)
    }

    fn resolve_keymode_field(
        &self,
        keys: u32,
        field: KeymodeField,
        expected: ValueKind,
    ) -> Option<ConfigValue> {
        if !self.keymode_lookups_enabled {
            return None;
        }

        // Read-or-create under one lock acquisition; two configs for the
        // same key count must never exist
        let mut cache = self.lock_keymodes();
        let config = cache
            .entry(keys)
            .or_insert_with(|| crate::models::KeymodeConfig::with_defaults(keys));

        let value = match field {
            KeymodeField::ColumnWidth(column) => {
                ConfigValue::Float(config.column_width(column)?)
            }
            KeymodeField::ColumnSpacing(column) => {
                ConfigValue::Float(config.column_spacing(column)?)
            }
            KeymodeField::HitPosition => ConfigValue::Float(config.hit_position),
            KeymodeField::ShowJudgementLine => ConfigValue::Bool(config.show_judgement_line),
        };
        (value.kind() == expected).then_some(value)
    }
}
