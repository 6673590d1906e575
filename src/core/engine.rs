use crate::core::{LoaderClassifier, ModuleDataAggregator};
use crate::domain::model::LoaderTier;
use crate::domain::ports::ImageWriter;
use crate::utils::error::Result;

/// Drives the per-tier views into an image writer.
pub struct ImageBuildEngine<W: ImageWriter> {
    writer: W,
}

impl<W: ImageWriter> ImageBuildEngine<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    /// Builds the view for every populated tier, in tier-id order, and hands
    /// each one to the writer under the tier's label. Empty tiers produce no
    /// section.
    pub fn run(
        &mut self,
        classifier: &LoaderClassifier,
        aggregator: &ModuleDataAggregator,
    ) -> Result<usize> {
        let mut written = 0;
        for tier in LoaderTier::ALL {
            let view = aggregator.build_view(tier, classifier)?;
            if view.is_empty() {
                tracing::debug!(tier = tier.label(), "tier empty, skipping");
                continue;
            }
            tracing::info!(
                section = tier.label(),
                modules = view.len(),
                "writing tier section"
            );
            self.writer.write_section(tier.label(), &view)?;
            written += 1;
        }
        Ok(written)
    }

    pub fn into_writer(self) -> W {
        self.writer
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::TierView;
    use std::collections::HashSet;

    #[derive(Default)]
    struct RecordingWriter {
        sections: Vec<(String, TierView)>,
    }

    impl ImageWriter for RecordingWriter {
        fn write_section(&mut self, label: &str, view: &TierView) -> Result<()> {
            self.sections.push((label.to_string(), view.clone()));
            Ok(())
        }
    }

    fn set(names: &[&str]) -> HashSet<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_engine_skips_empty_tiers_and_orders_sections() {
        let classifier =
            LoaderClassifier::new(set(&["java.base"]), set(&[]), set(&["com.example.app"]));
        let mut aggregator = ModuleDataAggregator::new();
        aggregator.set_packages("java.base", set(&["java.lang"]));
        aggregator.set_packages("com.example.app", set(&["com.example"]));

        let mut engine = ImageBuildEngine::new(RecordingWriter::default());
        let written = engine.run(&classifier, &aggregator).unwrap();
        assert_eq!(written, 2);

        let writer = engine.into_writer();
        let labels: Vec<&str> = writer.sections.iter().map(|(l, _)| l.as_str()).collect();
        assert_eq!(labels, ["bootmodules", "appmodules"]);
    }

    #[test]
    fn test_engine_propagates_missing_module_data() {
        let classifier = LoaderClassifier::new(set(&["m1"]), set(&[]), set(&[]));
        let aggregator = ModuleDataAggregator::new();

        let mut engine = ImageBuildEngine::new(RecordingWriter::default());
        assert!(engine.run(&classifier, &aggregator).is_err());
    }
}
