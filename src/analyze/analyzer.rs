//! The sampling and aggregation pass.
//!
//! [`ColorAnalyzer`] walks the raw pixel buffer at a fixed byte stride,
//! classifies each sampled color as dark or light, accumulates quantized
//! colors into a frequency map, and ranks the buckets into a
//! [`ColorAnalysis`].

use std::collections::HashMap;

use crate::analyze::options::AnalyzeOptions;
use crate::analyze::result::{ColorAnalysis, DominantColor};
use crate::classify::is_dark;
use crate::color::{relative_luminance, Rgb};
use crate::error::AnalyzeError;

/// Channel quantization step for bucket aggregation.
const BUCKET_STEP: u8 = 10;

/// Color-composition analyzer for raw interleaved pixel buffers.
///
/// The analyzer is stateless between calls: each [`analyze`](Self::analyze)
/// invocation reads one buffer and returns a fresh [`ColorAnalysis`], so a
/// single analyzer can be shared and reused across independent images.
///
/// # Input
///
/// A byte slice of interleaved channels (RGB or RGBA; any trailing alpha
/// or padding channel is simply never read as a sample start when the
/// stride is a multiple of the channel width). The caller is responsible
/// for decoding and resizing the source image into this raw form; the
/// analyzer validates nothing beyond handling the empty buffer.
///
/// # Example
///
/// ```
/// use webtone::ColorAnalyzer;
///
/// // A 200x150 RGB buffer of pure black
/// let pixels = vec![0u8; 200 * 150 * 3];
/// let analysis = ColorAnalyzer::new().analyze(&pixels);
///
/// assert_eq!(analysis.dark_percentage, 100.0);
/// assert_eq!(analysis.dominant_colors[0].hex, "#000000");
/// ```
#[derive(Debug, Clone, Default)]
pub struct ColorAnalyzer {
    options: AnalyzeOptions,
}

/// Raw counts accumulated by the sampling walk.
struct SampleCounts {
    dark: u64,
    light: u64,
    buckets: HashMap<Rgb, u64>,
}

impl ColorAnalyzer {
    /// Create an analyzer with default options (stride 24, cap 20).
    pub fn new() -> Self {
        Self::with_options(AnalyzeOptions::default())
    }

    /// Create an analyzer with explicit options.
    pub fn with_options(options: AnalyzeOptions) -> Self {
        Self { options }
    }

    /// Analyze a raw pixel buffer.
    ///
    /// This never fails: an empty buffer yields the zeroed
    /// [`ColorAnalysis::empty`], and any internal error (such as a
    /// misconfigured stride) is logged and absorbed into the same empty
    /// result so the caller's pipeline keeps going with "no data".
    pub fn analyze(&self, pixels: &[u8]) -> ColorAnalysis {
        match self.try_analyze(pixels) {
            Ok(analysis) => analysis,
            Err(e) => {
                tracing::warn!(error = %e, "color analysis failed, returning empty result");
                ColorAnalysis::empty()
            }
        }
    }

    fn try_analyze(&self, pixels: &[u8]) -> Result<ColorAnalysis, AnalyzeError> {
        let counts = self.sample(pixels)?;
        Ok(self.rank(counts))
    }

    /// Walk the buffer at the configured byte stride, classifying and
    /// bucketing each sampled color.
    ///
    /// The walk is deliberately byte-based: when the stride is not a
    /// multiple of the channel width, sample positions drift across
    /// channel phase over the buffer. Channel reads past the end of the
    /// buffer are taken as 0.
    fn sample(&self, pixels: &[u8]) -> Result<SampleCounts, AnalyzeError> {
        if self.options.sampling_stride == 0 {
            return Err(AnalyzeError::InvalidSamplingStride);
        }

        let mut counts = SampleCounts {
            dark: 0,
            light: 0,
            buckets: HashMap::new(),
        };

        for i in (0..pixels.len()).step_by(self.options.sampling_stride) {
            let color = Rgb::new(
                pixels[i],
                pixels.get(i + 1).copied().unwrap_or(0),
                pixels.get(i + 2).copied().unwrap_or(0),
            );

            if is_dark(color) {
                counts.dark += 1;
            } else {
                counts.light += 1;
            }

            *counts.buckets.entry(color.quantized(BUCKET_STEP)).or_insert(0) += 1;
        }

        tracing::debug!(
            sampled = counts.dark + counts.light,
            distinct = counts.buckets.len(),
            "sampled pixel buffer"
        );

        Ok(counts)
    }

    /// Turn raw counts into the ranked result.
    fn rank(&self, counts: SampleCounts) -> ColorAnalysis {
        let total = counts.dark + counts.light;
        if total == 0 {
            return ColorAnalysis::empty();
        }

        let total_colors = counts.buckets.len();

        // Count descending, then channel order ascending: the tiebreak
        // makes the ranking independent of map iteration order, so
        // repeated analysis of the same buffer is bit-identical.
        let mut ranked: Vec<(Rgb, u64)> = counts.buckets.into_iter().collect();
        ranked.sort_by(|(color_a, count_a), (color_b, count_b)| {
            count_b.cmp(count_a).then_with(|| color_a.cmp(color_b))
        });
        ranked.truncate(self.options.max_dominant);

        let dominant_colors = ranked
            .into_iter()
            .map(|(color, count)| {
                // Buckets are classified by their quantized representative,
                // not by majority vote of the pixels that fell into them.
                let luminance = relative_luminance(color);
                DominantColor {
                    rgb: color,
                    hex: color.to_hex(),
                    percentage: count as f64 / total as f64 * 100.0,
                    brightness: luminance * 255.0,
                    luminance,
                    is_dark: is_dark(color),
                }
            })
            .collect();

        ColorAnalysis {
            dominant_colors,
            dark_percentage: counts.dark as f64 / total as f64 * 100.0,
            light_percentage: counts.light as f64 / total as f64 * 100.0,
            total_colors,
        }
    }
}
