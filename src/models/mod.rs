//! Data model for decoded legacy skins and the lookup requests made against
//! them.

pub mod config;
pub mod keymode;
pub mod lookup;
pub mod value;

pub use config::SkinConfiguration;
pub use keymode::KeymodeConfig;
pub use lookup::{
    ComponentLookup, ConfigLookup, GlobalColour, HitResult, HitSample, KeymodeField,
    LegacySetting, SampleLookup,
};
pub use value::{normalize_legacy_bool, ConfigValue, ValueKind};
