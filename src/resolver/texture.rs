//! Texture name normalization and density-aware resolution.

use crate::store::Texture;

use super::SkinResolver;

/// Suffix marking a high-density texture variant.
const HD_SUFFIX: &str = "@2x";

/// Legacy directory prefix whose contents were flattened to `taiko-` names.
const TAIKO_PREFIX: &str = "Gameplay/taiko/";

/// Normalize a requested texture name to the flat legacy naming scheme.
///
/// Path-style requests are stripped to their last segment. Requests into the
/// legacy taiko directory instead gain a `taiko-` prefix on the stripped
/// name, matching where those assets actually live in old skins.
///
/// # Examples
///
/// ```
/// use maniaskin::resolver::normalize_texture_name;
///
/// assert_eq!(normalize_texture_name("hit300"), "hit300");
/// assert_eq!(normalize_texture_name("a/b/c"), "c");
/// assert_eq!(normalize_texture_name("Gameplay/taiko/bignote"), "taiko-bignote");
/// ```
pub fn normalize_texture_name(name: &str) -> String {
    let stripped = name.rsplit('/').next().unwrap_or(name);
    if name.starts_with(TAIKO_PREFIX) {
        format!("taiko-{stripped}")
    } else {
        stripped.to_string()
    }
}

impl SkinResolver {
    /// Resolve a texture by name, preferring the high-density variant.
    ///
    /// The normalized name is probed as `{name}@2x` first; a hit is tagged
    /// with scale-adjust 2. Only when the high-density probe misses is the
    /// plain name probed, tagged with scale-adjust 1. Misses when neither
    /// name resolves or no texture store is attached.
    pub fn resolve_texture(&self, name: &str) -> Option<Texture> {
        let store = self.textures.as_deref()?;
        let normalized = normalize_texture_name(name);

        if let Some(mut texture) = store.get(&format!("{normalized}{HD_SUFFIX}")) {
            texture.scale_adjust = 2.0;
            return Some(texture);
        }
        store.get(&normalized).map(|mut texture| {
            texture.scale_adjust = 1.0;
            texture
        })
    }
}

#[cfg(test)]
mod tests {
    use crate::models::SkinConfiguration;
    use crate::store::MemoryTextureStore;

    use super::*;

    fn resolver_with(names: &[&str]) -> SkinResolver {
        let mut store = MemoryTextureStore::new();
        for name in names {
            store.insert(*name);
        }
        SkinResolver::new(SkinConfiguration::default()).with_texture_store(store)
    }

    #[test]
    fn test_normalize_plain_name_unchanged() {
        assert_eq!(normalize_texture_name("hit300"), "hit300");
    }

    #[test]
    fn test_normalize_strips_path_to_last_segment() {
        assert_eq!(normalize_texture_name("a/b/c"), "c");
        assert_eq!(normalize_texture_name("Interface/cursor"), "cursor");
    }

    #[test]
    fn test_normalize_taiko_prefix() {
        assert_eq!(normalize_texture_name("Gameplay/taiko/bignote"), "taiko-bignote");
        assert_eq!(normalize_texture_name("Gameplay/taiko/sub/note"), "taiko-note");
        // Prefix match is on the original name, not a later segment
        assert_eq!(normalize_texture_name("other/Gameplay/taiko/note"), "note");
    }

    #[test]
    fn test_hd_variant_preferred_and_tagged() {
        let resolver = resolver_with(&["hit100@2x", "hit100"]);
        let texture = resolver.resolve_texture("hit100").unwrap();
        assert_eq!(texture.name, "hit100@2x");
        assert_eq!(texture.scale_adjust, 2.0);
    }

    #[test]
    fn test_plain_variant_fallback() {
        let resolver = resolver_with(&["hit100"]);
        let texture = resolver.resolve_texture("hit100").unwrap();
        assert_eq!(texture.name, "hit100");
        assert_eq!(texture.scale_adjust, 1.0);
    }

    #[test]
    fn test_miss_when_neither_variant_exists() {
        let resolver = resolver_with(&["hit100"]);
        assert_eq!(resolver.resolve_texture("hit300"), None);
    }

    #[test]
    fn test_miss_without_store() {
        let resolver = SkinResolver::new(SkinConfiguration::default());
        assert_eq!(resolver.resolve_texture("hit100"), None);
    }

    #[test]
    fn test_path_request_resolves_flattened_asset() {
        let resolver = resolver_with(&["taiko-bignote@2x"]);
        let texture = resolver.resolve_texture("Gameplay/taiko/bignote").unwrap();
        assert_eq!(texture.name, "taiko-bignote@2x");
        assert_eq!(texture.scale_adjust, 2.0);
    }
}
