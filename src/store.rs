//! Abstract resource stores queried by the resolver.
//!
//! The resolver never touches the GPU or an audio device; it asks a store
//! whether a name resolves and works with the lightweight handles the store
//! returns. The in-memory implementations here back the tests and the CLI.

use std::collections::{HashMap, HashSet};

/// Read access to named textures.
pub trait TextureStore {
    /// Look up a texture by exact name.
    fn get(&self, name: &str) -> Option<Texture>;
}

/// Read access to named audio samples.
pub trait SampleStore {
    /// Look up a sample by exact name.
    fn get(&self, name: &str) -> Option<Sample>;
}

/// A resolved texture handle.
#[derive(Debug, Clone, PartialEq)]
pub struct Texture {
    /// The store name this texture resolved under
    pub name: String,
    pub width: u32,
    pub height: u32,
    /// Display-density divisor applied at draw time; the resolver sets this
    /// to 2.0 for `@2x` assets and 1.0 otherwise
    pub scale_adjust: f32,
}

impl Texture {
    /// Create a texture handle at the default display density.
    pub fn new(name: impl Into<String>, width: u32, height: u32) -> Self {
        Self { name: name.into(), width, height, scale_adjust: 1.0 }
    }
}

/// A resolved audio sample handle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sample {
    /// The store name this sample resolved under
    pub name: String,
}

impl Sample {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// Map-backed texture store.
#[derive(Debug, Clone, Default)]
pub struct MemoryTextureStore {
    textures: HashMap<String, (u32, u32)>,
}

impl MemoryTextureStore {
    /// Create a new empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a texture name without dimensions.
    pub fn insert(&mut self, name: impl Into<String>) {
        self.insert_sized(name, 0, 0);
    }

    /// Register a texture name with dimensions. An existing entry under the
    /// same name is replaced.
    pub fn insert_sized(&mut self, name: impl Into<String>, width: u32, height: u32) {
        self.textures.insert(name.into(), (width, height));
    }

    /// Check whether a texture with the given name exists.
    pub fn contains(&self, name: &str) -> bool {
        self.textures.contains_key(name)
    }

    /// Number of registered textures.
    pub fn len(&self) -> usize {
        self.textures.len()
    }

    /// Check if the store is empty.
    pub fn is_empty(&self) -> bool {
        self.textures.is_empty()
    }
}

impl TextureStore for MemoryTextureStore {
    fn get(&self, name: &str) -> Option<Texture> {
        self.textures.get(name).map(|&(width, height)| Texture::new(name, width, height))
    }
}

/// Set-backed sample store.
#[derive(Debug, Clone, Default)]
pub struct MemorySampleStore {
    samples: HashSet<String>,
}

impl MemorySampleStore {
    /// Create a new empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a sample name.
    pub fn insert(&mut self, name: impl Into<String>) {
        self.samples.insert(name.into());
    }

    /// Check whether a sample with the given name exists.
    pub fn contains(&self, name: &str) -> bool {
        self.samples.contains(name)
    }

    /// Number of registered samples.
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// Check if the store is empty.
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }
}

impl SampleStore for MemorySampleStore {
    fn get(&self, name: &str) -> Option<Sample> {
        self.samples.contains(name).then(|| Sample::new(name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_texture_store_get() {
        let mut store = MemoryTextureStore::new();
        store.insert_sized("hit300", 128, 128);

        let texture = store.get("hit300").unwrap();
        assert_eq!(texture.name, "hit300");
        assert_eq!((texture.width, texture.height), (128, 128));
        assert_eq!(texture.scale_adjust, 1.0);
        assert_eq!(store.get("hit0"), None);
    }

    #[test]
    fn test_texture_store_replaces_duplicates() {
        let mut store = MemoryTextureStore::new();
        store.insert_sized("note", 16, 16);
        store.insert_sized("note", 32, 32);

        assert_eq!(store.len(), 1);
        assert_eq!(store.get("note").unwrap().width, 32);
    }

    #[test]
    fn test_sample_store_get() {
        let mut store = MemorySampleStore::new();
        store.insert("normal-hitnormal");

        assert_eq!(store.get("normal-hitnormal"), Some(Sample::new("normal-hitnormal")));
        assert_eq!(store.get("soft-hitnormal"), None);
    }
}
