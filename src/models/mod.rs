//! Empirical template models that summarize observed alignments and draw templates for simulation.

pub mod paired;
pub mod params;
pub mod stats;
pub mod unpaired;

pub use paired::PairedModel;
pub use params::ModelParams;
pub use stats::LengthSummary;
pub use unpaired::UnpairedModel;
