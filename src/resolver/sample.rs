//! Audio sample resolution.

use crate::models::SampleLookup;
use crate::store::Sample;

use super::SkinResolver;

impl SkinResolver {
    /// Resolve an audio sample, trying candidates most specific first.
    ///
    /// Each candidate name is probed in order and the first hit wins. Only
    /// when every candidate fails, and the lookup carries a bare bank-free
    /// name, is that bare name probed as a last resort. Misses when all
    /// probes fail or no sample store is attached.
    pub fn resolve_sample(&self, lookup: &SampleLookup) -> Option<Sample> {
        let store = self.samples.as_deref()?;

        for candidate in lookup.candidates() {
            if let Some(sample) = store.get(&candidate) {
                return Some(sample);
            }
        }
        lookup.bare_name().and_then(|name| store.get(name))
    }
}

#[cfg(test)]
mod tests {
    use crate::models::{HitSample, SkinConfiguration};
    use crate::store::MemorySampleStore;

    use super::*;

    fn resolver_with(names: &[&str]) -> SkinResolver {
        let mut store = MemorySampleStore::new();
        for name in names {
            store.insert(*name);
        }
        SkinResolver::new(SkinConfiguration::default()).with_sample_store(store)
    }

    fn hit(bank: &str, name: &str, suffix: Option<&str>) -> SampleLookup {
        SampleLookup::Hit(HitSample {
            bank: bank.to_string(),
            name: name.to_string(),
            suffix: suffix.map(str::to_string),
        })
    }

    #[test]
    fn test_most_specific_candidate_wins() {
        let resolver = resolver_with(&["soft-hitclap2", "soft-hitclap", "hitclap"]);
        let sample = resolver.resolve_sample(&hit("soft", "hitclap", Some("2"))).unwrap();
        assert_eq!(sample.name, "soft-hitclap2");
    }

    #[test]
    fn test_falls_back_through_candidates_in_order() {
        let resolver = resolver_with(&["soft-hitclap", "hitclap"]);
        let sample = resolver.resolve_sample(&hit("soft", "hitclap", Some("2"))).unwrap();
        assert_eq!(sample.name, "soft-hitclap");
    }

    #[test]
    fn test_bare_name_only_after_all_candidates_fail() {
        let resolver = resolver_with(&["hitclap"]);
        let sample = resolver.resolve_sample(&hit("soft", "hitclap", Some("2"))).unwrap();
        assert_eq!(sample.name, "hitclap");
    }

    #[test]
    fn test_explicit_name_list_has_no_bare_fallback() {
        let resolver = resolver_with(&["applause"]);
        let lookup = SampleLookup::Names(vec!["menu-applause".to_string()]);
        assert_eq!(resolver.resolve_sample(&lookup), None);

        let lookup =
            SampleLookup::Names(vec!["menu-applause".to_string(), "applause".to_string()]);
        assert_eq!(resolver.resolve_sample(&lookup).unwrap().name, "applause");
    }

    #[test]
    fn test_miss_when_nothing_matches() {
        let resolver = resolver_with(&["normal-hitnormal"]);
        assert_eq!(resolver.resolve_sample(&hit("drum", "hitfinish", None)), None);
    }

    #[test]
    fn test_miss_without_store() {
        let resolver = SkinResolver::new(SkinConfiguration::default());
        assert_eq!(resolver.resolve_sample(&hit("normal", "hitnormal", None)), None);
    }

    #[test]
    fn test_resolution_is_idempotent() {
        let resolver = resolver_with(&["hitclap"]);
        let lookup = hit("soft", "hitclap", None);
        assert_eq!(resolver.resolve_sample(&lookup), resolver.resolve_sample(&lookup));
    }
}
