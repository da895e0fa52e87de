//! End-to-end resolver tests: decode a realistic skin.ini, then resolve
//! configuration values and resources against it.

use image::Rgba;
use maniaskin::decoder::decode_str;
use maniaskin::models::{
    ComponentLookup, ConfigLookup, GlobalColour, HitResult, HitSample, KeymodeConfig,
    KeymodeField, LegacySetting, SampleLookup, ValueKind,
};
use maniaskin::resolver::SkinResolver;
use maniaskin::store::{MemorySampleStore, MemoryTextureStore};

const SKIN_INI: &str = "\
[General]
Name: Integration skin
Author: somebody
Version: 2.4
CursorExpand: 1
SliderBallFlip: 0
AnimationFramerate: 10

[Colours]
Combo1: 255,0,0
Combo2: 0,255,0
MenuGlow: 0,0,255
Lane1: 20,20,20

[Mania]
Keys: 4
ColumnWidth: 20,25,25,20
HitPosition: 420
JudgementLine: 1
";

fn resolver() -> SkinResolver {
    let decoded = decode_str(SKIN_INI);
    assert!(decoded.warnings.is_empty(), "unexpected warnings: {:?}", decoded.warnings);
    SkinResolver::from_decoded(decoded)
}

fn texture_store(names: &[&str]) -> MemoryTextureStore {
    let mut store = MemoryTextureStore::new();
    for name in names {
        store.insert(*name);
    }
    store
}

fn sample_store(names: &[&str]) -> MemorySampleStore {
    let mut store = MemorySampleStore::new();
    for name in names {
        store.insert(*name);
    }
    store
}

#[test]
fn test_decoded_version_resolves() {
    let resolver = resolver();
    assert_eq!(
        resolver.config_version(&ConfigLookup::Legacy(LegacySetting::Version)),
        Some(2.4)
    );
}

#[test]
fn test_combo_colours_keep_declared_order() {
    let resolver = resolver();
    assert_eq!(
        resolver.config_colours(&ConfigLookup::Colour(GlobalColour::ComboColours)),
        Some(vec![Rgba([255, 0, 0, 255]), Rgba([0, 255, 0, 255])])
    );
}

#[test]
fn test_global_and_custom_colours() {
    let resolver = resolver();
    assert_eq!(
        resolver.config_colour(&ConfigLookup::Colour(GlobalColour::MenuGlow)),
        Some(Rgba([0, 0, 255, 255]))
    );
    assert_eq!(
        resolver.config_colour(&ConfigLookup::CustomColour("Lane1".to_string())),
        Some(Rgba([20, 20, 20, 255]))
    );
    assert_eq!(
        resolver.config_colour(&ConfigLookup::CustomColour("Lane2".to_string())),
        None
    );
}

#[test]
fn test_legacy_bool_entries() {
    let resolver = resolver();
    assert_eq!(resolver.config_bool(&ConfigLookup::Entry("CursorExpand".to_string())), Some(true));
    assert_eq!(
        resolver.config_bool(&ConfigLookup::Entry("SliderBallFlip".to_string())),
        Some(false)
    );
    // Free text coerces to false rather than missing
    assert_eq!(resolver.config_bool(&ConfigLookup::Entry("Name".to_string())), Some(false));
}

#[test]
fn test_decoded_keymode_block_feeds_lookups() {
    let resolver = resolver();
    assert_eq!(
        resolver.config_float(&ConfigLookup::Keymode {
            keys: 4,
            field: KeymodeField::ColumnWidth(1)
        }),
        Some(25.0)
    );
    assert_eq!(
        resolver.config_float(&ConfigLookup::Keymode {
            keys: 4,
            field: KeymodeField::HitPosition
        }),
        Some(420.0)
    );
    assert_eq!(
        resolver.config_bool(&ConfigLookup::Keymode {
            keys: 4,
            field: KeymodeField::ShowJudgementLine
        }),
        Some(true)
    );
}

#[test]
fn test_undeclared_key_count_gets_lazy_defaults() {
    let resolver = resolver();
    assert_eq!(resolver.cached_keymodes(), vec![4]);

    assert_eq!(
        resolver.config_float(&ConfigLookup::Keymode {
            keys: 7,
            field: KeymodeField::ColumnWidth(6)
        }),
        Some(KeymodeConfig::DEFAULT_COLUMN_WIDTH)
    );
    assert_eq!(resolver.cached_keymodes(), vec![4, 7]);

    // Repeated lookups reuse the created config
    resolver.config_float(&ConfigLookup::Keymode { keys: 7, field: KeymodeField::HitPosition });
    assert_eq!(resolver.cached_keymodes(), vec![4, 7]);
}

#[test]
fn test_texture_density_chain() {
    let resolver = SkinResolver::from_decoded(decode_str(SKIN_INI))
        .with_texture_store(texture_store(&["mania-note1@2x", "mania-note2"]));

    let hd = resolver.resolve_texture("mania-note1").unwrap();
    assert_eq!((hd.name.as_str(), hd.scale_adjust), ("mania-note1@2x", 2.0));

    let plain = resolver.resolve_texture("mania-note2").unwrap();
    assert_eq!((plain.name.as_str(), plain.scale_adjust), ("mania-note2", 1.0));

    assert!(resolver.resolve_texture("mania-note3").is_none());
}

#[test]
fn test_texture_name_normalization() {
    let resolver = SkinResolver::from_decoded(decode_str(SKIN_INI))
        .with_texture_store(texture_store(&["taiko-bignote", "cursor"]));

    assert_eq!(
        resolver.resolve_texture("Gameplay/taiko/bignote").unwrap().name,
        "taiko-bignote"
    );
    assert_eq!(resolver.resolve_texture("Interface/menu/cursor").unwrap().name, "cursor");
}

#[test]
fn test_judgement_animation_uses_configured_framerate() {
    let resolver = SkinResolver::from_decoded(decode_str(SKIN_INI))
        .with_texture_store(texture_store(&["hit0-0", "hit0-1"]));

    let animation =
        resolver.resolve_drawable(&ComponentLookup::Judgement(HitResult::Miss)).unwrap();
    assert_eq!(animation.frame_count(), 2);
    assert!(animation.looping);
    // AnimationFramerate: 10 -> 100ms per frame
    assert_eq!(animation.frame_delay_ms, 100.0);
}

#[test]
fn test_unmapped_component_uses_its_own_name() {
    let resolver = SkinResolver::from_decoded(decode_str(SKIN_INI))
        .with_texture_store(texture_store(&["stage-light-0"]));

    let animation =
        resolver.resolve_drawable(&ComponentLookup::Named("stage-light".to_string())).unwrap();
    assert_eq!(animation.frames[0].name, "stage-light-0");
    assert!(!animation.looping);
}

#[test]
fn test_sample_candidate_chain() {
    let resolver = SkinResolver::from_decoded(decode_str(SKIN_INI))
        .with_sample_store(sample_store(&["soft-hitclap", "hitfinish"]));

    let qualified = resolver
        .resolve_sample(&SampleLookup::Hit(HitSample {
            bank: "soft".to_string(),
            name: "hitclap".to_string(),
            suffix: Some("2".to_string()),
        }))
        .unwrap();
    assert_eq!(qualified.name, "soft-hitclap");

    // Bare name as last resort
    let bare = resolver
        .resolve_sample(&SampleLookup::Hit(HitSample {
            bank: "drum".to_string(),
            name: "hitfinish".to_string(),
            suffix: None,
        }))
        .unwrap();
    assert_eq!(bare.name, "hitfinish");

    assert!(resolver
        .resolve_sample(&SampleLookup::Hit(HitSample {
            bank: "drum".to_string(),
            name: "hitwhistle".to_string(),
            suffix: None,
        }))
        .is_none());
}

#[test]
fn test_every_operation_is_idempotent() {
    let resolver = SkinResolver::from_decoded(decode_str(SKIN_INI))
        .with_texture_store(texture_store(&["hit300-0"]))
        .with_sample_store(sample_store(&["normal-hitnormal"]));

    let config_lookup = ConfigLookup::Keymode { keys: 9, field: KeymodeField::HitPosition };
    assert_eq!(
        resolver.resolve_config(&config_lookup, ValueKind::Float),
        resolver.resolve_config(&config_lookup, ValueKind::Float)
    );

    let component = ComponentLookup::Judgement(HitResult::Great);
    assert_eq!(resolver.resolve_drawable(&component), resolver.resolve_drawable(&component));

    assert_eq!(resolver.resolve_texture("hit300"), resolver.resolve_texture("hit300"));

    let sample_lookup = SampleLookup::Hit(HitSample {
        bank: "normal".to_string(),
        name: "hitnormal".to_string(),
        suffix: None,
    });
    assert_eq!(resolver.resolve_sample(&sample_lookup), resolver.resolve_sample(&sample_lookup));
}
