use crate::utils::error::{ImageError, Result};
use serde::{Deserialize, Serialize};

/// The module every image contains and every boot tier lists first.
pub const BASE_MODULE: &str = "java.base";

/// Class-loading tier a module is assigned to in the image.
///
/// Each tier has a stable integer id used when tiers are persisted in the
/// wider image format, and a fixed label used as the section name by the
/// image writer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum LoaderTier {
    Boot,
    Ext,
    App,
}

impl LoaderTier {
    /// All tiers, in id order.
    pub const ALL: [LoaderTier; 3] = [LoaderTier::Boot, LoaderTier::Ext, LoaderTier::App];

    pub fn id(self) -> i32 {
        match self {
            LoaderTier::Boot => 0,
            LoaderTier::Ext => 1,
            LoaderTier::App => 2,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            LoaderTier::Boot => "bootmodules",
            LoaderTier::Ext => "extmodules",
            LoaderTier::App => "appmodules",
        }
    }

    pub fn from_id(id: i32) -> Result<Self> {
        match id {
            0 => Ok(LoaderTier::Boot),
            1 => Ok(LoaderTier::Ext),
            2 => Ok(LoaderTier::App),
            _ => Err(ImageError::InvalidLoaderId { id }),
        }
    }
}

/// Immutable ordered module list for one tier.
///
/// Built once by the classifier: [`BASE_MODULE`] first if present, the rest
/// in ascending lexicographic order, no duplicates.
#[derive(Debug, Clone)]
pub struct TierModuleSet {
    tier: LoaderTier,
    modules: Vec<String>,
}

impl TierModuleSet {
    pub(crate) fn new(tier: LoaderTier, modules: Vec<String>) -> Self {
        Self { tier, modules }
    }

    pub fn tier(&self) -> LoaderTier {
        self.tier
    }

    pub fn modules(&self) -> &[String] {
        &self.modules
    }
}

/// One module's entry in a [`TierView`]: the module name and its packages in
/// path-hierarchy form, lexicographically sorted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TierViewEntry {
    pub module: String,
    pub packages: Vec<String>,
}

/// Ordered module → package-path mapping for one tier, ready for the image
/// writer. Recomputed on demand; module order matches the tier's
/// [`TierModuleSet`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TierView {
    tier: LoaderTier,
    entries: Vec<TierViewEntry>,
}

impl TierView {
    pub(crate) fn new(tier: LoaderTier, entries: Vec<TierViewEntry>) -> Self {
        Self { tier, entries }
    }

    pub fn tier(&self) -> LoaderTier {
        self.tier
    }

    pub fn label(&self) -> &'static str {
        self.tier.label()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn entries(&self) -> &[TierViewEntry] {
        &self.entries
    }

    /// Package paths for one module, if the module is part of this view.
    pub fn packages_for(&self, module: &str) -> Option<&[String]> {
        self.entries
            .iter()
            .find(|e| e.module == module)
            .map(|e| e.packages.as_slice())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tier_ids_and_labels_are_fixed() {
        assert_eq!(LoaderTier::Boot.id(), 0);
        assert_eq!(LoaderTier::Ext.id(), 1);
        assert_eq!(LoaderTier::App.id(), 2);
        assert_eq!(LoaderTier::Boot.label(), "bootmodules");
        assert_eq!(LoaderTier::Ext.label(), "extmodules");
        assert_eq!(LoaderTier::App.label(), "appmodules");
    }

    #[test]
    fn test_from_id_inverts_id() {
        for tier in LoaderTier::ALL {
            assert_eq!(LoaderTier::from_id(tier.id()).unwrap(), tier);
        }
    }

    #[test]
    fn test_from_id_rejects_out_of_range() {
        for bad in [-1, 3, 42] {
            match LoaderTier::from_id(bad) {
                Err(ImageError::InvalidLoaderId { id }) => assert_eq!(id, bad),
                other => panic!("expected InvalidLoaderId for {}, got {:?}", bad, other),
            }
        }
    }

    #[test]
    fn test_tiers_ordered_by_id() {
        assert!(LoaderTier::Boot < LoaderTier::Ext);
        assert!(LoaderTier::Ext < LoaderTier::App);
    }
}
