//! Analysis result model.
//!
//! These structs are the crate's outward-facing data shape. They serialize
//! with camelCase field names so the JSON form matches what UI theming
//! consumers expect (`dominantColors`, `darkPercentage`, `isDark`, ...).

use serde::{Deserialize, Serialize};

use crate::color::Rgb;

/// One entry in the dominant-color ranking.
///
/// The color is the quantized bucket representative (each channel a
/// multiple of 10); luminance and the dark flag are computed from that
/// representative, not voted by the constituent pixels.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DominantColor {
    /// Bucket color as channel values
    pub rgb: Rgb,
    /// Bucket color as a lowercase `#rrggbb` string
    pub hex: String,
    /// Share of sampled pixels that fell into this bucket, 0..=100
    pub percentage: f64,
    /// Luminance rescaled to 0..=255, kept for display-legacy consumers
    pub brightness: f64,
    /// Relative luminance of the bucket color, 0..=1
    pub luminance: f64,
    /// Dark/light classification of the bucket color
    pub is_dark: bool,
}

/// The result of analyzing one pixel buffer.
///
/// Always structurally valid: an empty or unreadable buffer produces
/// [`ColorAnalysis::empty`] rather than an error.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ColorAnalysis {
    /// Quantized colors ranked by share of sampled pixels, descending.
    /// Capped (by default at 20); `total_colors` counts the full set.
    pub dominant_colors: Vec<DominantColor>,
    /// Share of sampled pixels classified dark, 0..=100
    pub dark_percentage: f64,
    /// Share of sampled pixels classified light, 0..=100
    pub light_percentage: f64,
    /// Number of distinct color buckets observed (may exceed the cap)
    pub total_colors: usize,
}

impl ColorAnalysis {
    /// The degenerate zero result: no samples, no colors.
    pub fn empty() -> Self {
        Self {
            dominant_colors: Vec::new(),
            dark_percentage: 0.0,
            light_percentage: 0.0,
            total_colors: 0,
        }
    }
}
