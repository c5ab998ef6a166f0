//! Relative luminance model
//!
//! Perceptually weighted brightness per the W3C relative-luminance formula
//! (the same model contrast-ratio calculations use). The computation is
//! done directly in `f64` rather than through a lookup table: downstream
//! consumers compare the value against exact thresholds, so the result has
//! to be bit-for-bit reproducible, not LUT-approximated.

use super::rgb::Rgb;

/// Compute the relative luminance of a color, in 0.0..=1.0.
///
/// The model is the standard display-perception one:
///
/// 1. Normalize each channel to 0.0..=1.0.
/// 2. Gamma-expand each channel to linear light
///    (IEC 61966-2-1: `v / 12.92` below 0.04045, else
///    `((v + 0.055) / 1.055) ^ 2.4`).
/// 3. Weight the linear channels by the eye's spectral sensitivity:
///    `0.2126 * R + 0.7152 * G + 0.0722 * B`.
///
/// The gamma step matters: sRGB bytes encode perceptual steps, not light
/// intensity, so a naive channel average badly overestimates the brightness
/// of mid-tones.
///
/// This is a pure function of its input and is deterministic across calls.
///
/// # Examples
///
/// ```
/// use webtone::{relative_luminance, Rgb};
///
/// assert_eq!(relative_luminance(Rgb::new(0, 0, 0)), 0.0);
/// assert!((relative_luminance(Rgb::new(255, 255, 255)) - 1.0).abs() < 1e-12);
///
/// // Green dominates perceived brightness
/// let green = relative_luminance(Rgb::new(0, 255, 0));
/// let blue = relative_luminance(Rgb::new(0, 0, 255));
/// assert!(green > blue * 9.0);
/// ```
#[inline]
pub fn relative_luminance(color: Rgb) -> f64 {
    let r = gamma_expand(f64::from(color.r) / 255.0);
    let g = gamma_expand(f64::from(color.g) / 255.0);
    let b = gamma_expand(f64::from(color.b) / 255.0);

    0.2126 * r + 0.7152 * g + 0.0722 * b
}

/// Gamma-expand a normalized sRGB channel to linear light.
#[inline]
fn gamma_expand(v: f64) -> f64 {
    if v <= 0.04045 {
        v / 12.92
    } else {
        ((v + 0.055) / 1.055).powf(2.4)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoints() {
        assert_eq!(relative_luminance(Rgb::new(0, 0, 0)), 0.0);
        assert!((relative_luminance(Rgb::new(255, 255, 255)) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_known_values() {
        // sRGB mid-gray (128) is linear ~0.2158, not 0.5
        let mid = relative_luminance(Rgb::new(128, 128, 128));
        assert!((mid - 0.2158).abs() < 0.001, "mid-gray luminance {mid}");

        // Primary weights: a pure channel contributes exactly its weight
        assert!((relative_luminance(Rgb::new(255, 0, 0)) - 0.2126).abs() < 1e-12);
        assert!((relative_luminance(Rgb::new(0, 255, 0)) - 0.7152).abs() < 1e-12);
        assert!((relative_luminance(Rgb::new(0, 0, 255)) - 0.0722).abs() < 1e-12);
    }

    #[test]
    fn test_linear_segment_boundary() {
        // 10/255 = 0.0392 sits below the 0.04045 knee: divided, not powed
        let low = relative_luminance(Rgb::new(10, 10, 10));
        let expected = (10.0 / 255.0) / 12.92;
        assert!((low - expected).abs() < 1e-15);
    }

    #[test]
    fn test_range_and_monotonicity_per_channel() {
        for v in 0..255u8 {
            for (base, next) in [
                (Rgb::new(v, 40, 90), Rgb::new(v + 1, 40, 90)),
                (Rgb::new(40, v, 90), Rgb::new(40, v + 1, 90)),
                (Rgb::new(40, 90, v), Rgb::new(40, 90, v + 1)),
            ] {
                let a = relative_luminance(base);
                let b = relative_luminance(next);
                assert!((0.0..=1.0).contains(&a));
                assert!(b >= a, "luminance decreased from {base:?} to {next:?}");
            }
        }
    }

    #[test]
    fn test_deterministic() {
        let color = Rgb::new(137, 42, 203);
        assert_eq!(relative_luminance(color), relative_luminance(color));
    }
}
