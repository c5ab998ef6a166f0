//! Pixel-buffer sampling, aggregation, and the analysis result model.

mod analyzer;
mod options;
mod result;

pub use analyzer::ColorAnalyzer;
pub use options::AnalyzeOptions;
pub use result::{ColorAnalysis, DominantColor};
