//! Analyzer options.
//!
//! This module provides the [`AnalyzeOptions`] struct for configuring
//! the sampling and ranking behavior of [`ColorAnalyzer`].
//!
//! [`ColorAnalyzer`]: crate::ColorAnalyzer

use serde::{Deserialize, Serialize};

/// Configuration options for color analysis.
///
/// The defaults reproduce the reference behavior and are what
/// [`ColorAnalyzer::new`] uses; hosts that load analyzer settings from a
/// config file can deserialize this struct directly (missing fields fall
/// back to the defaults).
///
/// # Example
///
/// ```
/// use webtone::AnalyzeOptions;
///
/// // Use defaults (recommended for most cases)
/// let options = AnalyzeOptions::new();
///
/// // Or customize with builder pattern
/// let options = AnalyzeOptions::new()
///     .sampling_stride(12)
///     .max_dominant(5);
/// ```
///
/// [`ColorAnalyzer::new`]: crate::ColorAnalyzer::new
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalyzeOptions {
    /// Byte step between sampled positions in the pixel buffer.
    ///
    /// Subsamples the buffer for speed instead of scanning every byte.
    /// The walk is byte-based, so a stride that is not a multiple of the
    /// buffer's channel width drifts across channel phase; that tradeoff
    /// is part of the contract, not corrected here.
    ///
    /// Must be at least 1. Default: `24`
    #[serde(default = "default_sampling_stride")]
    pub sampling_stride: usize,

    /// Maximum number of dominant colors returned.
    ///
    /// The frequency map still counts every bucket; this only caps the
    /// ranked list in the result.
    ///
    /// Default: `20`
    #[serde(default = "default_max_dominant")]
    pub max_dominant: usize,
}

fn default_sampling_stride() -> usize {
    24
}

fn default_max_dominant() -> usize {
    20
}

impl Default for AnalyzeOptions {
    fn default() -> Self {
        Self {
            sampling_stride: default_sampling_stride(),
            max_dominant: default_max_dominant(),
        }
    }
}

impl AnalyzeOptions {
    /// Create new options with default values.
    ///
    /// This is equivalent to `AnalyzeOptions::default()` but more discoverable.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the sampling stride in bytes.
    #[inline]
    pub fn sampling_stride(mut self, stride: usize) -> Self {
        self.sampling_stride = stride;
        self
    }

    /// Set the maximum number of dominant colors returned.
    #[inline]
    pub fn max_dominant(mut self, max: usize) -> Self {
        self.max_dominant = max;
        self
    }
}
