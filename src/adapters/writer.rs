use crate::domain::model::TierView;
use crate::domain::ports::ImageWriter;
use crate::utils::error::Result;
use std::fs;
use std::path::{Path, PathBuf};

/// Writes each tier section as a JSON file named after the tier label.
///
/// Stands in for the image-container writer during development and in
/// tests; the real container format lives downstream of the
/// [`ImageWriter`] boundary.
#[derive(Debug, Clone)]
pub struct JsonDirWriter {
    base_path: PathBuf,
}

impl JsonDirWriter {
    pub fn new<P: AsRef<Path>>(base_path: P) -> Self {
        Self {
            base_path: base_path.as_ref().to_path_buf(),
        }
    }

    pub fn section_path(&self, label: &str) -> PathBuf {
        self.base_path.join(format!("{}.json", label))
    }
}

impl ImageWriter for JsonDirWriter {
    fn write_section(&mut self, label: &str, view: &TierView) -> Result<()> {
        fs::create_dir_all(&self.base_path)?;
        let data = serde_json::to_vec_pretty(view)?;
        fs::write(self.section_path(label), data)?;
        Ok(())
    }
}
