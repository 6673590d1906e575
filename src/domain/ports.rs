use crate::domain::model::TierView;
use crate::utils::error::Result;

/// Boundary to the image-writer collaborator.
///
/// The engine hands over one section per non-empty tier: the tier's fixed
/// label (used as the section name in the image container) and the ordered
/// module/package view. Everything downstream of this call, byte layout
/// included, belongs to the writer.
pub trait ImageWriter {
    fn write_section(&mut self, label: &str, view: &TierView) -> Result<()>;
}
