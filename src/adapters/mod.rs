// Adapters layer: concrete implementations for external collaborators.

pub mod writer;

pub use writer::JsonDirWriter;
