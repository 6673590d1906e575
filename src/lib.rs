pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use adapters::JsonDirWriter;
pub use config::LayoutConfig;
pub use core::{
    ImageBuildEngine, LoaderClassifier, LoaderTier, ModuleDataAggregator, TierView, TierViewEntry,
    BASE_MODULE,
};
pub use domain::ports::ImageWriter;
pub use utils::error::{ImageError, Result};
