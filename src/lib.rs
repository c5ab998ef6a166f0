//! webtone: color-composition analysis for rendered page pixels
//!
//! This library takes a raw interleaved pixel buffer (typically a decoded,
//! downscaled screenshot of a web page) and summarizes its color
//! composition for UI theming decisions: a dark/light balance and a ranked
//! list of dominant quantized colors.
//!
//! # Quick Start
//!
//! [`ColorAnalyzer`] is the primary entry point:
//!
//! ```
//! use webtone::ColorAnalyzer;
//!
//! // A 200x150 RGB buffer (decoded elsewhere)
//! let pixels = vec![30u8; 200 * 150 * 3];
//!
//! let analyzer = ColorAnalyzer::new();
//! let analysis = analyzer.analyze(&pixels);
//!
//! assert_eq!(analysis.dark_percentage, 100.0);
//! assert_eq!(analysis.dominant_colors[0].hex, "#1e1e1e");
//! ```
//!
//! The analyzer never fails: an empty or unreadable buffer degrades to the
//! zeroed [`ColorAnalysis::empty`] so the caller's pipeline keeps going.
//!
//! # Color Science
//!
//! This section explains the rationale behind the brightness model and the
//! classification heuristics. Subtle changes (e.g., skipping gamma
//! expansion, or reordering the classification rules) produce results that
//! disagree with how viewers actually perceive a page.
//!
//! ## Luminance, not channel average
//!
//! Pixel bytes are sRGB-encoded: they represent perceptual steps, not
//! light intensity. [`relative_luminance`] therefore gamma-expands each
//! channel to linear light before applying the eye's spectral weights
//! (0.2126 R + 0.7152 G + 0.0722 B). A naive channel average would call
//! sRGB mid-gray "50% bright" when its light output is closer to 21%.
//!
//! ## Classification is a rule cascade
//!
//! Luminance alone misclassifies vivid, highly saturated hues. Pure blue
//! has a luminance of 0.0722, well under any sensible dark threshold, yet
//! a page flooded with `#0000ff` reads as bright (and costs real power on
//! OLED panels). [`is_dark`] is therefore an ordered cascade:
//!
//! 1. Pure vivid blues are light (blue > 200, red and green < 120).
//! 2. Vivid saturated colors are light (HSV saturation > 0.8, value > 0.6).
//! 3. Otherwise dark iff luminance < 0.15.
//!
//! ## Sampling stride
//!
//! The analyzer does not scan every byte: it walks the buffer at a fixed
//! byte stride (24 by default) as a speed/accuracy tradeoff. The walk is
//! byte-based, so with channel widths that do not divide the stride the
//! sample positions drift across channel phase. That drift is part of the
//! reference behavior and is preserved, not corrected.
//!
//! ## Dominant colors
//!
//! Each sampled color is quantized to a bucket (channels floored to
//! multiples of 10) and counted in a frequency map. Buckets are ranked by
//! share of sampled pixels and capped; each returned entry carries the
//! bucket's own luminance and dark/light verdict, computed from the
//! quantized representative rather than voted by its constituent pixels.

pub mod analyze;
pub mod classify;
pub mod color;
pub mod error;


pub use analyze::{AnalyzeOptions, ColorAnalysis, ColorAnalyzer, DominantColor};
pub use classify::is_dark;
pub use color::{relative_luminance, Rgb};
pub use error::{AnalyzeError, ParseColorError};
