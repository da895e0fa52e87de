//! Maniaskin - decoder and lookup resolver for legacy rhythm-game skins
//!
//! A legacy skin is an ini-style `skin.ini` file plus a directory of loosely
//! named textures and audio samples. Nothing about it is typed: booleans are
//! stored as `"1"`, colours as `255,192,0`, high-density textures live next to
//! their plain variants under an `@2x` suffix, and per-key-count settings are
//! scattered across repeated `[Mania]` blocks.
//!
//! This crate decodes that format into a [`models::SkinConfiguration`] and
//! answers typed lookups against it through [`resolver::SkinResolver`], which
//! applies the full set of legacy fallback chains: combo/custom colour
//! resolution, integer-as-boolean normalization, lazily created per-key-count
//! configurations, `@2x`-before-plain texture probing, and bank-qualified
//! sample candidate lists.

pub mod cli;
pub mod colour;
pub mod decoder;
pub mod models;
pub mod resolver;
pub mod store;
