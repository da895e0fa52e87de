//! Decoder for the legacy ini-style `skin.ini` format.
//!
//! The format is line-oriented: `[Section]` headers, `Key: Value` pairs, and
//! `//` comment lines. Decoding is lenient; malformed lines become warnings
//! in the result rather than aborting the decode, because real skins in the
//! wild are full of them.

use std::collections::BTreeMap;
use std::io::{BufRead, BufReader, Read};

use image::Rgba;
use serde::{Deserialize, Serialize};

use crate::colour::parse_colour;
use crate::models::{KeymodeConfig, SkinConfiguration};

/// Version assigned when a skin declares `Version: latest`.
pub const LATEST_VERSION: f64 = 2.7;

/// Highest combo colour index the format supports (`Combo1`..`Combo8`).
pub const MAX_COMBO_COLOURS: u32 = 8;

/// A recoverable oddity encountered while decoding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DecodeWarning {
    pub message: String,
    /// 1-based line number the warning refers to
    pub line: usize,
}

/// Result of decoding a `skin.ini`: the configuration, any per-key-count
/// blocks, and the warnings produced along the way.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DecodeResult {
    pub configuration: SkinConfiguration,
    pub keymodes: Vec<KeymodeConfig>,
    pub warnings: Vec<DecodeWarning>,
}

/// Decode a `skin.ini` from a string.
///
/// # Examples
///
/// ```
/// use maniaskin::decoder::decode_str;
///
/// let result = decode_str("[General]\nName: my skin\nVersion: 2.4\n");
/// assert_eq!(result.configuration.version, Some(2.4));
/// assert_eq!(result.configuration.entry("Name"), Some("my skin"));
/// ```
pub fn decode_str(input: &str) -> DecodeResult {
    decode_stream(input.as_bytes())
}

/// Decode a `skin.ini` from a reader. Unreadable lines end the decode with
/// whatever was collected up to that point.
pub fn decode_stream<R: Read>(reader: R) -> DecodeResult {
    let mut decoder = Decoder::default();
    let mut line_number = 0;

    let mut lines = BufReader::new(reader).lines();
    while let Some(Ok(line)) = lines.next() {
        line_number += 1;
        decoder.line(&line, line_number);
    }
    decoder.finish()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
enum Section {
    #[default]
    General,
    Colours,
    Mania,
    Other,
}

/// A `[Mania]` block being assembled; flushed into a [`KeymodeConfig`] when
/// the next `Keys:` line or section header arrives, or at end of input.
struct PendingKeymode {
    keys: u32,
    line: usize,
    column_width: Option<Vec<Option<f32>>>,
    column_spacing: Option<Vec<Option<f32>>>,
    hit_position: Option<f32>,
    show_judgement_line: Option<bool>,
}

impl PendingKeymode {
    fn new(keys: u32, line: usize) -> Self {
        Self {
            keys,
            line,
            column_width: None,
            column_spacing: None,
            hit_position: None,
            show_judgement_line: None,
        }
    }

    fn finish(self) -> KeymodeConfig {
        let mut config = KeymodeConfig::with_defaults(self.keys);
        if let Some(widths) = self.column_width {
            overlay(&mut config.column_width, &widths);
        }
        if let Some(spacings) = self.column_spacing {
            overlay(&mut config.column_spacing, &spacings);
        }
        if let Some(hit_position) = self.hit_position {
            config.hit_position = hit_position;
        }
        if let Some(show) = self.show_judgement_line {
            config.show_judgement_line = show;
        }
        config
    }
}

/// Apply parsed list values over defaults, column by column. Values beyond
/// the key count are dropped; unparseable slots keep their defaults.
fn overlay(target: &mut [f32], values: &[Option<f32>]) {
    for (slot, value) in target.iter_mut().zip(values) {
        if let Some(value) = value {
            *slot = *value;
        }
    }
}

fn parse_float_list(value: &str) -> (Vec<Option<f32>>, Vec<String>) {
    let mut parsed = Vec::new();
    let mut invalid = Vec::new();
    for part in value.split(',') {
        let part = part.trim();
        match part.parse::<f32>() {
            Ok(value) => parsed.push(Some(value)),
            Err(_) => {
                parsed.push(None);
                if !part.is_empty() {
                    invalid.push(part.to_string());
                }
            }
        }
    }
    (parsed, invalid)
}

#[derive(Default)]
struct Decoder {
    configuration: SkinConfiguration,
    combo: BTreeMap<u32, Rgba<u8>>,
    keymodes: Vec<KeymodeConfig>,
    pending: Option<PendingKeymode>,
    section: Section,
    warnings: Vec<DecodeWarning>,
}

impl Decoder {
    fn line(&mut self, raw: &str, number: usize) {
        let line = raw.trim();
        if line.is_empty() || line.starts_with("//") {
            return;
        }

        if let Some(name) = line.strip_prefix('[').and_then(|rest| rest.strip_suffix(']')) {
            self.enter_section(name);
            return;
        }

        let Some((key, value)) = line.split_once(':') else {
            self.warn(format!("expected 'Key: Value', found '{line}'"), number);
            return;
        };
        let key = key.trim();
        let value = value.trim();

        match self.section {
            Section::General | Section::Other => self.general_pair(key, value, number),
            Section::Colours => self.colours_pair(key, value, number),
            Section::Mania => self.mania_pair(key, value, number),
        }
    }

    fn enter_section(&mut self, name: &str) {
        self.flush_pending();
        self.section = match name {
            "General" => Section::General,
            "Colours" => Section::Colours,
            "Mania" => Section::Mania,
            _ => Section::Other,
        };
    }

    fn general_pair(&mut self, key: &str, value: &str, number: usize) {
        if key == "Version" {
            if value.eq_ignore_ascii_case("latest") {
                self.configuration.version = Some(LATEST_VERSION);
            } else if let Ok(version) = value.parse::<f64>() {
                self.configuration.version = Some(version);
            } else {
                self.warn(format!("unparseable version '{value}'"), number);
            }
            return;
        }
        self.configuration.entries.insert(key.to_string(), value.to_string());
    }

    fn colours_pair(&mut self, key: &str, value: &str, number: usize) {
        let colour = match parse_colour(value) {
            Ok(colour) => colour,
            Err(error) => {
                self.warn(format!("{key}: {error}"), number);
                return;
            }
        };

        if let Some(index) = key.strip_prefix("Combo").and_then(|rest| rest.parse::<u32>().ok())
        {
            if index >= 1 && index <= MAX_COMBO_COLOURS {
                self.combo.insert(index, colour);
            } else {
                self.warn(format!("combo colour index {index} out of range"), number);
            }
            return;
        }
        self.configuration.custom_colours.insert(key.to_string(), colour);
    }

    fn mania_pair(&mut self, key: &str, value: &str, number: usize) {
        if key == "Keys" {
            self.flush_pending();
            match value.parse::<u32>() {
                Ok(keys) if keys > 0 => self.pending = Some(PendingKeymode::new(keys, number)),
                _ => self.warn(format!("invalid key count '{value}'"), number),
            }
            return;
        }

        if self.pending.is_none() {
            self.warn(format!("'{key}' before any Keys declaration"), number);
            return;
        }

        match key {
            "ColumnWidth" => {
                let (values, invalid) = parse_float_list(value);
                if let Some(pending) = self.pending.as_mut() {
                    pending.column_width = Some(values);
                }
                for item in invalid {
                    self.warn(format!("ColumnWidth: invalid value '{item}'"), number);
                }
            }
            "ColumnSpacing" => {
                let (values, invalid) = parse_float_list(value);
                if let Some(pending) = self.pending.as_mut() {
                    pending.column_spacing = Some(values);
                }
                for item in invalid {
                    self.warn(format!("ColumnSpacing: invalid value '{item}'"), number);
                }
            }
            "HitPosition" => match value.parse::<f32>() {
                Ok(position) => {
                    if let Some(pending) = self.pending.as_mut() {
                        pending.hit_position = Some(position);
                    }
                }
                Err(_) => self.warn(format!("HitPosition: invalid value '{value}'"), number),
            },
            "JudgementLine" => {
                let show = value == "1" || value.eq_ignore_ascii_case("true");
                if let Some(pending) = self.pending.as_mut() {
                    pending.show_judgement_line = Some(show);
                }
            }
            // Old skins carry plenty of mania keys this model does not
            // track; they are not worth a warning each
            _ => {}
        }
    }

    fn flush_pending(&mut self) {
        let Some(pending) = self.pending.take() else {
            return;
        };
        let line = pending.line;
        let config = pending.finish();

        if let Some(index) = self.keymodes.iter().position(|k| k.keys == config.keys) {
            self.warn(
                format!("duplicate configuration for {}K replaces the earlier block", config.keys),
                line,
            );
            self.keymodes[index] = config;
        } else {
            self.keymodes.push(config);
        }
    }

    fn finish(mut self) -> DecodeResult {
        self.flush_pending();
        if !self.combo.is_empty() {
            self.configuration.combo_colours = Some(self.combo.into_values().collect());
        }
        DecodeResult {
            configuration: self.configuration,
            keymodes: self.keymodes,
            warnings: self.warnings,
        }
    }

    fn warn(&mut self, message: String, line: usize) {
        self.warnings.push(DecodeWarning { message, line });
    }
}
