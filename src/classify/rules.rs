//! Ordered dark/light rule cascade
//!
//! Each rule is a predicate that either decides the classification
//! (`Some(verdict)`) or abstains (`None`). Rules are evaluated in declared
//! order and the first decision wins; the terminal luminance rule always
//! decides, so the cascade is total. Keeping the rules as separate named
//! functions keeps their precedence auditable and lets each be tested in
//! isolation.

use crate::color::{relative_luminance, Rgb};

/// A classification rule: `Some(true)` = dark, `Some(false)` = light,
/// `None` = no opinion, fall through to the next rule.
type Rule = fn(Rgb) -> Option<bool>;

/// The cascade, in precedence order. The last rule never abstains.
const CASCADE: &[(&str, Rule)] = &[
    ("oled-blue", oled_blue),
    ("vivid-saturated", vivid_saturated),
    ("luminance-threshold", luminance_threshold),
];

/// Classify a color as dark (`true`) or light (`false`).
///
/// Evaluates the rule cascade in order, short-circuiting on the first
/// decision:
///
/// 1. **Pure vivid blues are light.** Blue above 200 with red and green
///    both below 120 reads as bright to a viewer (and costs real power on
///    OLED panels) even though the luminance formula weights blue at only
///    0.0722.
/// 2. **Vivid saturated colors are light.** HSV saturation above 0.8 with
///    value above 0.6 reads as "light" regardless of what the luminance
///    number says.
/// 3. **Otherwise, luminance decides**: dark iff relative luminance is
///    strictly below 0.15.
///
/// # Examples
///
/// ```
/// use webtone::{is_dark, Rgb};
///
/// assert!(is_dark(Rgb::new(10, 10, 10)));    // near-black
/// assert!(!is_dark(Rgb::new(200, 200, 200))); // bright gray
/// assert!(!is_dark(Rgb::new(0, 0, 255)));    // vivid blue override
/// assert!(!is_dark(Rgb::new(255, 0, 255)));  // saturated magenta override
/// ```
#[inline]
pub fn is_dark(color: Rgb) -> bool {
    CASCADE
        .iter()
        .find_map(|(_, rule)| rule(color))
        .unwrap_or(false)
}

/// Rule 1: pure, vivid blues classify as light.
fn oled_blue(color: Rgb) -> Option<bool> {
    if color.b > 200 && color.r < 120 && color.g < 120 {
        Some(false)
    } else {
        None
    }
}

/// Rule 2: highly saturated, bright colors classify as light.
fn vivid_saturated(color: Rgb) -> Option<bool> {
    if color.hsv_saturation() > 0.8 && color.hsv_value() > 0.6 {
        Some(false)
    } else {
        None
    }
}

/// Terminal rule: dark iff relative luminance < 0.15. Always decides.
fn luminance_threshold(color: Rgb) -> Option<bool> {
    Some(relative_luminance(color) < 0.15)
}
