//! Per-key-count playfield configuration.

use serde::{Deserialize, Serialize};

/// Layout settings for one key count (number of playfield columns).
///
/// Decoded from a `[Mania]` block when the skin provides one, otherwise
/// built from defaults on first lookup. The resolver guarantees at most one
/// instance per key count.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KeymodeConfig {
    /// Number of columns this configuration applies to
    pub keys: u32,
    /// Per-column width in playfield units
    pub column_width: Vec<f32>,
    /// Per-column leading spacing in playfield units
    pub column_spacing: Vec<f32>,
    /// Vertical position of the hit receptors
    pub hit_position: f32,
    /// Whether the judgement line is drawn at the hit position
    pub show_judgement_line: bool,
}

impl KeymodeConfig {
    /// Default width of a single column.
    pub const DEFAULT_COLUMN_WIDTH: f32 = 30.0;
    /// Default spacing between adjacent columns.
    pub const DEFAULT_COLUMN_SPACING: f32 = 1.0;
    /// Default hit receptor position.
    pub const DEFAULT_HIT_POSITION: f32 = 402.0;

    /// Create a configuration for `keys` columns with built-in defaults.
    pub fn with_defaults(keys: u32) -> Self {
        let columns = keys as usize;
        Self {
            keys,
            column_width: vec![Self::DEFAULT_COLUMN_WIDTH; columns],
            column_spacing: vec![Self::DEFAULT_COLUMN_SPACING; columns],
            hit_position: Self::DEFAULT_HIT_POSITION,
            show_judgement_line: true,
        }
    }

    /// Returns the width of the given column, or `None` when the index is
    /// outside this key count.
    pub fn column_width(&self, column: usize) -> Option<f32> {
        self.column_width.get(column).copied()
    }

    /// Returns the leading spacing of the given column, or `None` when the
    /// index is outside this key count.
    pub fn column_spacing(&self, column: usize) -> Option<f32> {
        self.column_spacing.get(column).copied()
    }
}
