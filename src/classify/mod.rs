//! Dark/light classification.
//!
//! A single luminance threshold misreads vivid, highly saturated hues, so
//! classification is an ordered cascade of rules rather than one formula.
//! See [`is_dark`] for the rule order.

mod rules;

pub use rules::is_dark;
