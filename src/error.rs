//! Error types for color parsing and analysis.

use std::num::ParseIntError;
use thiserror::Error;

/// Error type for parsing hex color strings.
///
/// Returned when parsing a hex color string fails, either due to
/// invalid length or invalid hexadecimal characters.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParseColorError {
    /// Hex string has invalid length (must be 3 or 6 characters after stripping '#')
    #[error("invalid hex color length (expected 3 or 6 characters)")]
    InvalidLength,

    /// Invalid hexadecimal character encountered
    #[error("invalid hex character: {0}")]
    InvalidHex(#[from] ParseIntError),
}

/// Error type for the analysis pipeline.
///
/// These errors never reach callers of [`ColorAnalyzer::analyze`]: the
/// analyzer absorbs them into the empty [`ColorAnalysis`] so that a failed
/// analysis degrades to "no data" instead of aborting the caller's pipeline.
///
/// [`ColorAnalyzer::analyze`]: crate::ColorAnalyzer::analyze
/// [`ColorAnalysis`]: crate::ColorAnalysis
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AnalyzeError {
    /// Sampling stride of zero would never advance through the buffer
    #[error("sampling stride must be at least 1")]
    InvalidSamplingStride,
}
