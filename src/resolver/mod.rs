//! The skin resolver: typed, fallback-chained lookups against a decoded skin.
//!
//! [`SkinResolver`] owns the decoded configuration, a cache of per-key-count
//! configurations created on first use, and optional texture/sample stores.
//! Every operation is a synchronous total lookup: a missing key, a malformed
//! value, or an absent store is a `None`, never a panic.

mod config;
mod drawable;
mod sample;
mod texture;

pub use drawable::{SkinAnimation, DEFAULT_FRAME_TIME_MS};
pub use texture::normalize_texture_name;

use std::collections::HashMap;
use std::fmt;
use std::sync::{Mutex, PoisonError};

use crate::decoder::DecodeResult;
use crate::models::{KeymodeConfig, SkinConfiguration};
use crate::store::{SampleStore, TextureStore};

/// Resolves typed configuration values and named resources for one skin.
///
/// # Examples
///
/// ```
/// use maniaskin::decoder;
/// use maniaskin::models::{ConfigLookup, ConfigValue, ValueKind};
/// use maniaskin::resolver::SkinResolver;
///
/// let decoded = decoder::decode_str("[General]\nCursorExpand: 1\n");
/// let resolver = SkinResolver::from_decoded(decoded);
///
/// let lookup = ConfigLookup::Entry("CursorExpand".to_string());
/// assert_eq!(
///     resolver.resolve_config(&lookup, ValueKind::Bool),
///     Some(ConfigValue::Bool(true))
/// );
/// ```
pub struct SkinResolver {
    pub(crate) configuration: SkinConfiguration,
    /// Key count -> configuration; at most one entry per key count
    pub(crate) keymodes: Mutex<HashMap<u32, KeymodeConfig>>,
    pub(crate) textures: Option<Box<dyn TextureStore + Send + Sync>>,
    pub(crate) samples: Option<Box<dyn SampleStore + Send + Sync>>,
    pub(crate) keymode_lookups_enabled: bool,
}

impl SkinResolver {
    /// Create a resolver over a decoded configuration, with no stores
    /// attached and no pre-populated keymode configurations.
    pub fn new(configuration: SkinConfiguration) -> Self {
        Self {
            configuration,
            keymodes: Mutex::new(HashMap::new()),
            textures: None,
            samples: None,
            keymode_lookups_enabled: true,
        }
    }

    /// Create a resolver from a full decode result, pre-populating the
    /// keymode cache with the decoded `[Mania]` blocks. Decode warnings are
    /// the caller's to report.
    pub fn from_decoded(decoded: DecodeResult) -> Self {
        Self::new(decoded.configuration).with_keymodes(decoded.keymodes)
    }

    /// Pre-populate keymode configurations. A later configuration for the
    /// same key count replaces an earlier one.
    pub fn with_keymodes(self, keymodes: impl IntoIterator<Item = KeymodeConfig>) -> Self {
        {
            let mut cache = self.lock_keymodes();
            for keymode in keymodes {
                cache.insert(keymode.keys, keymode);
            }
        }
        self
    }

    /// Attach a texture store. Without one, every texture lookup misses.
    pub fn with_texture_store(
        mut self,
        store: impl TextureStore + Send + Sync + 'static,
    ) -> Self {
        self.textures = Some(Box::new(store));
        self
    }

    /// Attach a sample store. Without one, every sample lookup misses.
    pub fn with_sample_store(mut self, store: impl SampleStore + Send + Sync + 'static) -> Self {
        self.samples = Some(Box::new(store));
        self
    }

    /// Disable keymode lookups entirely. Disabled lookups miss without
    /// materializing a configuration in the cache.
    pub fn without_keymode_lookups(mut self) -> Self {
        self.keymode_lookups_enabled = false;
        self
    }

    /// The decoded configuration this resolver answers from.
    pub fn configuration(&self) -> &SkinConfiguration {
        &self.configuration
    }

    /// Key counts with a cached configuration, in ascending order.
    pub fn cached_keymodes(&self) -> Vec<u32> {
        let mut keys: Vec<u32> = self.lock_keymodes().keys().copied().collect();
        keys.sort_unstable();
        keys
    }

    /// The configuration for a key count, created with defaults on first
    /// access. `None` only when keymode lookups are disabled.
    pub fn keymode_config(&self, keys: u32) -> Option<KeymodeConfig> {
        if !self.keymode_lookups_enabled {
            return None;
        }
        let mut cache = self.lock_keymodes();
        Some(cache.entry(keys).or_insert_with(|| KeymodeConfig::with_defaults(keys)).clone())
    }

    /// Acquire the keymode cache lock. A poisoned lock is recovered; the
    /// cache holds no invariants a panicked writer could break mid-update.
    pub(crate) fn lock_keymodes(
        &self,
    ) -> std::sync::MutexGuard<'_, HashMap<u32, KeymodeConfig>> {
        self.keymodes.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl fmt::Debug for SkinResolver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SkinResolver")
            .field("configuration", &self.configuration)
            .field("keymode_lookups_enabled", &self.keymode_lookups_enabled)
            .field("has_texture_store", &self.textures.is_some())
            .field("has_sample_store", &self.samples.is_some())
            .finish_non_exhaustive()
    }
}
