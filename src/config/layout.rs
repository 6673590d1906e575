use crate::core::{LoaderClassifier, LoaderTier, ModuleDataAggregator};
use crate::utils::error::{ImageError, Result};
use crate::utils::validation::{validate_module_name, Validate};
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use std::path::Path;

/// Image layout description: which modules each loader tier gets, and which
/// packages each module owns. This is the file-based stand-in for the
/// discovery collaborator that would normally scan modules on disk.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LayoutConfig {
    pub tiers: TiersConfig,
    #[serde(default)]
    pub packages: HashMap<String, Vec<String>>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TiersConfig {
    #[serde(default)]
    pub boot: Vec<String>,
    #[serde(default)]
    pub ext: Vec<String>,
    #[serde(default)]
    pub app: Vec<String>,
}

impl LayoutConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(ImageError::IoError)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content);

        toml::from_str(&processed_content).map_err(|e| ImageError::ConfigError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    // Replaces ${VAR_NAME} with the environment value; unknown vars are left as-is.
    fn substitute_env_vars(content: &str) -> String {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").unwrap();

        re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        })
        .to_string()
    }

    /// The module set for one tier, ready for the classifier.
    pub fn tier_modules(&self, tier: LoaderTier) -> HashSet<String> {
        let names = match tier {
            LoaderTier::Boot => &self.tiers.boot,
            LoaderTier::Ext => &self.tiers.ext,
            LoaderTier::App => &self.tiers.app,
        };
        names.iter().cloned().collect()
    }

    pub fn classifier(&self) -> LoaderClassifier {
        LoaderClassifier::new(
            self.tier_modules(LoaderTier::Boot),
            self.tier_modules(LoaderTier::Ext),
            self.tier_modules(LoaderTier::App),
        )
    }

    pub fn aggregator(&self) -> ModuleDataAggregator {
        let mut aggregator = ModuleDataAggregator::new();
        for (module, packages) in &self.packages {
            aggregator.set_packages(module.clone(), packages.iter().cloned().collect());
        }
        aggregator
    }

    pub fn validate_config(&self) -> Result<()> {
        let mut seen: HashMap<&str, LoaderTier> = HashMap::new();

        for tier in LoaderTier::ALL {
            let field = format!("tiers.{}", tier.label());
            let names = match tier {
                LoaderTier::Boot => &self.tiers.boot,
                LoaderTier::Ext => &self.tiers.ext,
                LoaderTier::App => &self.tiers.app,
            };
            for name in names {
                validate_module_name(&field, name)?;

                if let Some(previous) = seen.insert(name, tier) {
                    return Err(ImageError::InvalidConfigValue {
                        field,
                        value: name.clone(),
                        reason: format!(
                            "Module already assigned to the {} tier",
                            previous.label()
                        ),
                    });
                }

                if !self.packages.contains_key(name) {
                    return Err(ImageError::InvalidConfigValue {
                        field,
                        value: name.clone(),
                        reason: "No [packages] entry for this module".to_string(),
                    });
                }
            }
        }

        Ok(())
    }
}

impl Validate for LayoutConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}
