//! Gameplay component and animation resolution.

use crate::models::{ComponentLookup, ConfigLookup};
use crate::store::Texture;

use super::SkinResolver;

/// Frame time used when the skin declares no `AnimationFramerate`.
pub const DEFAULT_FRAME_TIME_MS: f64 = 1000.0 / 60.0;

/// Configuration entry controlling the frame rate of skinned animations.
const ANIMATION_FRAMERATE_KEY: &str = "AnimationFramerate";

/// An animation resolved from a skin: ordered frames plus playback settings.
#[derive(Debug, Clone, PartialEq)]
pub struct SkinAnimation {
    /// Resolved frame textures, in playback order
    pub frames: Vec<Texture>,
    /// Whether playback repeats from the first frame
    pub looping: bool,
    /// Time each frame is displayed, in milliseconds
    pub frame_delay_ms: f64,
}

impl SkinAnimation {
    /// Number of frames.
    pub fn frame_count(&self) -> usize {
        self.frames.len()
    }

    /// Whether this is a single static frame.
    pub fn is_static(&self) -> bool {
        self.frames.len() == 1
    }
}

impl SkinResolver {
    /// Resolve a gameplay component to its animated drawable.
    ///
    /// Judgement results map to the fixed conventional names (`hit0`,
    /// `hit50`, `hit100`, `hit300`) and loop; any other component is looked
    /// up under its own declared name without looping. Neither path falls
    /// back to a static frame. Misses when no frame resolves.
    pub fn resolve_drawable(&self, component: &ComponentLookup) -> Option<SkinAnimation> {
        match component {
            ComponentLookup::Judgement(result) => {
                self.resolve_animation(result.lookup_name(), true, false)
            }
            ComponentLookup::Named(name) => self.resolve_animation(name, false, false),
        }
    }

    /// Resolve an animation by probing `{name}-0`, `{name}-1`, ... through
    /// the texture resolver.
    ///
    /// When no numbered frame resolves and `static_fallback` is set, the
    /// bare `{name}` is probed as a single static frame. The frame delay
    /// honours the skin's `AnimationFramerate` entry when it declares a
    /// positive rate.
    pub fn resolve_animation(
        &self,
        name: &str,
        looping: bool,
        static_fallback: bool,
    ) -> Option<SkinAnimation> {
        let mut frames = Vec::new();
        loop {
            match self.resolve_texture(&format!("{name}-{}", frames.len())) {
                Some(texture) => frames.push(texture),
                None => break,
            }
        }

        if frames.is_empty() {
            if !static_fallback {
                return None;
            }
            frames.push(self.resolve_texture(name)?);
        }

        Some(SkinAnimation { frames, looping, frame_delay_ms: self.frame_delay_ms() })
    }

    fn frame_delay_ms(&self) -> f64 {
        let lookup = ConfigLookup::Entry(ANIMATION_FRAMERATE_KEY.to_string());
        match self.config_float(&lookup) {
            Some(rate) if rate > 0.0 => 1000.0 / f64::from(rate),
            _ => DEFAULT_FRAME_TIME_MS,
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::models::{HitResult, SkinConfiguration};
    use crate::store::MemoryTextureStore;

    use super::*;

    fn resolver_with(names: &[&str], configuration: SkinConfiguration) -> SkinResolver {
        let mut store = MemoryTextureStore::new();
        for name in names {
            store.insert(*name);
        }
        SkinResolver::new(configuration).with_texture_store(store)
    }

    #[test]
    fn test_judgement_mapping() {
        let resolver = resolver_with(
            &["hit0-0", "hit50-0", "hit100-0", "hit300-0"],
            SkinConfiguration::default(),
        );
        for (result, name) in [
            (HitResult::Miss, "hit0-0"),
            (HitResult::Meh, "hit50-0"),
            (HitResult::Good, "hit100-0"),
            (HitResult::Great, "hit300-0"),
        ] {
            let animation =
                resolver.resolve_drawable(&ComponentLookup::Judgement(result)).unwrap();
            assert_eq!(animation.frames[0].name, name);
            assert!(animation.looping);
        }
    }

    #[test]
    fn test_judgement_has_no_static_fallback() {
        // Only the bare name exists; a judgement lookup must miss
        let resolver = resolver_with(&["hit0"], SkinConfiguration::default());
        assert_eq!(resolver.resolve_drawable(&ComponentLookup::Judgement(HitResult::Miss)), None);
    }

    #[test]
    fn test_named_component_uses_declared_name() {
        let resolver = resolver_with(
            &["scorebar-colour-0", "scorebar-colour-1"],
            SkinConfiguration::default(),
        );
        let animation = resolver
            .resolve_drawable(&ComponentLookup::Named("scorebar-colour".to_string()))
            .unwrap();
        assert_eq!(animation.frame_count(), 2);
        assert!(!animation.looping);
    }

    #[test]
    fn test_frames_collected_in_order_until_first_gap() {
        // Frame 2 is missing, so frame 3 is never reached
        let resolver =
            resolver_with(&["note-0", "note-1", "note-3"], SkinConfiguration::default());
        let animation = resolver.resolve_animation("note", true, false).unwrap();
        assert_eq!(animation.frame_count(), 2);
        assert_eq!(animation.frames[1].name, "note-1");
    }

    #[test]
    fn test_static_fallback_when_requested() {
        let resolver = resolver_with(&["follow"], SkinConfiguration::default());
        assert_eq!(resolver.resolve_animation("follow", false, false), None);

        let animation = resolver.resolve_animation("follow", false, true).unwrap();
        assert!(animation.is_static());
        assert_eq!(animation.frames[0].name, "follow");
    }

    #[test]
    fn test_frame_delay_defaults_to_sixty_fps() {
        let resolver = resolver_with(&["note-0"], SkinConfiguration::default());
        let animation = resolver.resolve_animation("note", false, false).unwrap();
        assert_eq!(animation.frame_delay_ms, DEFAULT_FRAME_TIME_MS);
    }

    #[test]
    fn test_frame_delay_honours_configured_framerate() {
        let mut configuration = SkinConfiguration::default();
        configuration.entries.insert("AnimationFramerate".to_string(), "10".to_string());
        let resolver = resolver_with(&["note-0"], configuration);
        let animation = resolver.resolve_animation("note", false, false).unwrap();
        assert_eq!(animation.frame_delay_ms, 100.0);
    }

    #[test]
    fn test_non_positive_framerate_ignored() {
        let mut configuration = SkinConfiguration::default();
        configuration.entries.insert("AnimationFramerate".to_string(), "0".to_string());
        let resolver = resolver_with(&["note-0"], configuration);
        let animation = resolver.resolve_animation("note", false, false).unwrap();
        assert_eq!(animation.frame_delay_ms, DEFAULT_FRAME_TIME_MS);
    }

    #[test]
    fn test_animation_frames_prefer_hd_variants() {
        let resolver = resolver_with(&["note-0@2x", "note-0"], SkinConfiguration::default());
        let animation = resolver.resolve_animation("note", false, false).unwrap();
        assert_eq!(animation.frames[0].name, "note-0@2x");
        assert_eq!(animation.frames[0].scale_adjust, 2.0);
    }

    #[test]
    fn test_miss_without_texture_store() {
        let resolver = SkinResolver::new(SkinConfiguration::default());
        assert_eq!(resolver.resolve_drawable(&ComponentLookup::Named("note".to_string())), None);
    }
}
