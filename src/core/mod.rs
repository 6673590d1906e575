pub mod aggregator;
pub mod classifier;
pub mod engine;

pub use crate::domain::model::{LoaderTier, TierModuleSet, TierView, TierViewEntry, BASE_MODULE};
pub use crate::domain::ports::ImageWriter;
pub use crate::utils::error::Result;
pub use aggregator::ModuleDataAggregator;
pub use classifier::LoaderClassifier;
pub use engine::ImageBuildEngine;
