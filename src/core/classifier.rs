use crate::domain::model::{LoaderTier, TierModuleSet, BASE_MODULE};
use std::collections::{BTreeMap, HashSet};

/// Assigns module names to loader tiers with a deterministic order.
///
/// Classification happens once, at construction; the result is immutable
/// afterwards and safe to share with any number of readers.
#[derive(Debug)]
pub struct LoaderClassifier {
    tiers: BTreeMap<LoaderTier, TierModuleSet>,
}

impl LoaderClassifier {
    /// Classifies the three input sets. A tier with an empty input set gets
    /// no entry; querying it later yields an empty sequence.
    pub fn new(
        boot_modules: HashSet<String>,
        ext_modules: HashSet<String>,
        app_modules: HashSet<String>,
    ) -> Self {
        let mut tiers = BTreeMap::new();
        for (tier, modules) in [
            (LoaderTier::Boot, boot_modules),
            (LoaderTier::Ext, ext_modules),
            (LoaderTier::App, app_modules),
        ] {
            if modules.is_empty() {
                continue;
            }
            let ordered = order_modules(modules);
            tracing::debug!(tier = tier.label(), count = ordered.len(), "classified tier");
            tiers.insert(tier, TierModuleSet::new(tier, ordered));
        }
        Self { tiers }
    }

    /// Module names mapped to the given tier, in image order. Empty for a
    /// tier that was never populated; never fails.
    pub fn modules_for(&self, tier: LoaderTier) -> &[String] {
        self.tiers.get(&tier).map(TierModuleSet::modules).unwrap_or(&[])
    }

    pub fn tier_module_set(&self, tier: LoaderTier) -> Option<&TierModuleSet> {
        self.tiers.get(&tier)
    }
}

// Base module first, then the rest sorted ascending.
fn order_modules(modules: HashSet<String>) -> Vec<String> {
    let mut ordered = Vec::with_capacity(modules.len());
    let mut rest: Vec<String> = Vec::with_capacity(modules.len());
    for module in modules {
        if module == BASE_MODULE {
            ordered.push(module);
        } else {
            rest.push(module);
        }
    }
    rest.sort_unstable();
    ordered.extend(rest);
    ordered
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(names: &[&str]) -> HashSet<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_base_module_sorts_first() {
        let classifier = LoaderClassifier::new(
            set(&["java.logging", "java.base", "java.compiler"]),
            set(&[]),
            set(&[]),
        );

        assert_eq!(
            classifier.modules_for(LoaderTier::Boot),
            &["java.base", "java.compiler", "java.logging"]
        );
    }

    #[test]
    fn test_order_is_lexicographic_without_base_module() {
        let classifier =
            LoaderClassifier::new(set(&[]), set(&[]), set(&["zeta.app", "alpha.app", "mid.app"]));

        assert_eq!(
            classifier.modules_for(LoaderTier::App),
            &["alpha.app", "mid.app", "zeta.app"]
        );
    }

    #[test]
    fn test_empty_tier_yields_empty_sequence() {
        let classifier = LoaderClassifier::new(set(&["java.base"]), set(&[]), set(&[]));

        assert!(classifier.modules_for(LoaderTier::Ext).is_empty());
        assert!(classifier.modules_for(LoaderTier::App).is_empty());
        assert!(classifier.tier_module_set(LoaderTier::Ext).is_none());
    }

    #[test]
    fn test_remaining_entries_strictly_increase() {
        let classifier = LoaderClassifier::new(
            set(&["java.base", "b.mod", "a.mod", "c.mod"]),
            set(&[]),
            set(&[]),
        );

        let modules = classifier.modules_for(LoaderTier::Boot);
        assert_eq!(modules[0], "java.base");
        for pair in modules[1..].windows(2) {
            assert!(pair[0] < pair[1]);
        }
    }
}
