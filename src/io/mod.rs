//! I/O module for reading alignments and writing draw reports.

pub mod alignments;
pub mod table;

// Re-export main types
pub use alignments::{TemplateCollector, TemplateSet, read_templates};
pub use table::DrawWriter;
