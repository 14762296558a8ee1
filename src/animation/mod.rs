// SPDX-License-Identifier: MPL-2.0
//! Timed interpolation of scalar values for the reaction UI.
//!
//! The update loop owns [`Animated`] values and requests transitions on
//! them; the view layer samples them each frame to compute render sizes and
//! colors. Sampling takes an explicit [`std::time::Instant`] so the whole
//! layer can be exercised in tests by fabricating time instead of sleeping.

mod easing;
mod timeline;

pub use easing::Easing;
pub use timeline::Animated;
