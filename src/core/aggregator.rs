use crate::core::classifier::LoaderClassifier;
use crate::domain::model::{LoaderTier, TierView, TierViewEntry};
use crate::utils::error::{ImageError, Result};
use std::collections::{HashMap, HashSet};

/// Owns the module → owned-packages map and derives per-tier views for the
/// image writer.
///
/// Usage discipline: all [`set_packages`](Self::set_packages) calls for the
/// modules of a tier must complete before [`build_view`](Self::build_view)
/// is called for that tier. One aggregator per image build; not shared
/// across builds.
#[derive(Debug, Default)]
pub struct ModuleDataAggregator {
    packages: HashMap<String, HashSet<String>>,
}

impl ModuleDataAggregator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the packages owned by a module, in dotted form as supplied by
    /// discovery. Replaces any previous entry; last write wins.
    pub fn set_packages(&mut self, module: impl Into<String>, packages: HashSet<String>) {
        let module = module.into();
        tracing::debug!(module = %module, count = packages.len(), "set module packages");
        self.packages.insert(module, packages);
    }

    /// The full current module → packages map.
    pub fn packages_by_module(&self) -> &HashMap<String, HashSet<String>> {
        &self.packages
    }

    /// Builds the ordered module/package view for one tier.
    ///
    /// Module order comes from the classifier (base module first). Package
    /// names are translated to path form (`a.b` → `a/b`) and sorted. A
    /// classified module with no package entry is a contract violation and
    /// fails with [`ImageError::MissingModuleData`] rather than producing an
    /// empty list, which would corrupt the written image.
    pub fn build_view(&self, tier: LoaderTier, classifier: &LoaderClassifier) -> Result<TierView> {
        let mut entries = Vec::new();
        for module in classifier.modules_for(tier) {
            let packages = self
                .packages
                .get(module)
                .ok_or_else(|| ImageError::MissingModuleData {
                    module: module.clone(),
                })?;

            let mut paths: Vec<String> =
                packages.iter().map(|pkg| pkg.replace('.', "/")).collect();
            paths.sort_unstable();

            entries.push(TierViewEntry {
                module: module.clone(),
                packages: paths,
            });
        }
        Ok(TierView::new(tier, entries))
    }
}
