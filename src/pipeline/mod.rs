// file: src/pipeline/mod.rs
// description: extraction pipeline module exports
// reference: pipeline orchestration

mod extractor;
mod progress;

pub use extractor::Extractor;
pub use progress::{ExtractionStats, ProgressTracker};
