// SPDX-License-Identifier: MPL-2.0
//! Reaction picker visibility and its show/hide timelines.
//!
//! The picker animates in on a long-press and back out once a reaction is
//! picked. Scale and opacity run as a parallel pair over the same duration;
//! the visibility flag flips off only after the hide timeline's deadline.
//! Each `show` bumps a generation counter, and a pending hide deadline from
//! an earlier generation is discarded when it comes due, so re-opening the
//! picker mid-hide cannot snap it shut.

use crate::animation::{Animated, Easing};
use std::time::{Duration, Instant};

/// Duration of the show and hide transitions.
pub const SHOW_HIDE_DURATION: Duration = Duration::from_millis(300);

/// Scale target when the picker is presented.
const SHOWN_SCALE: f32 = 1.0;

/// Scale target when the picker is dismissed.
const HIDDEN_SCALE: f32 = 0.0;

/// Opacity target for the picker surface.
///
/// The hide transition keeps this same target: the box disappears through
/// its scale collapsing to zero while opacity stays at overlay strength.
const OVERLAY_OPACITY: f32 = 0.9;

/// A scheduled flip of the visibility flag, tagged with the show/hide
/// generation it belongs to.
#[derive(Debug, Clone, Copy)]
struct HideDeadline {
    generation: u64,
    at: Instant,
}

/// Reaction picker state.
#[derive(Debug, Clone)]
pub struct State {
    visible: bool,
    generation: u64,
    hide_deadline: Option<HideDeadline>,
    scale: Animated,
    opacity: Animated,
}

impl Default for State {
    fn default() -> Self {
        Self {
            visible: false,
            generation: 0,
            hide_deadline: None,
            scale: Animated::new(HIDDEN_SCALE),
            opacity: Animated::new(0.0),
        }
    }
}

impl State {
    /// Presents the picker and starts the show timelines.
    ///
    /// Idempotent with respect to visibility: re-triggering while already
    /// visible restarts the timelines from their current values. Bumping
    /// the generation invalidates any pending hide deadline.
    pub fn show(&mut self, now: Instant) {
        self.visible = true;
        self.generation = self.generation.wrapping_add(1);
        self.scale
            .transition_to(SHOWN_SCALE, SHOW_HIDE_DURATION, Easing::EaseOut, now);
        self.opacity
            .transition_to(OVERLAY_OPACITY, SHOW_HIDE_DURATION, Easing::Linear, now);
    }

    /// Starts the hide timelines and arms the visibility deadline.
    ///
    /// The flag stays set until the deadline fires so the view keeps
    /// rendering the box while it shrinks away.
    pub fn hide(&mut self, now: Instant) {
        self.scale
            .transition_to(HIDDEN_SCALE, SHOW_HIDE_DURATION, Easing::EaseOut, now);
        self.opacity
            .transition_to(OVERLAY_OPACITY, SHOW_HIDE_DURATION, Easing::Linear, now);
        self.hide_deadline = Some(HideDeadline {
            generation: self.generation,
            at: now + SHOW_HIDE_DURATION,
        });
    }

    /// Advances timers. Returns `true` if the picker became hidden.
    pub fn tick(&mut self, now: Instant) -> bool {
        let mut hid = false;
        if let Some(deadline) = self.hide_deadline {
            if deadline.generation != self.generation {
                // A newer show superseded this hide; drop the stale deadline.
                self.hide_deadline = None;
            } else if now >= deadline.at {
                self.hide_deadline = None;
                self.visible = false;
                hid = true;
            }
        }
        self.scale.settle(now);
        self.opacity.settle(now);
        hid
    }

    /// Whether the picker is currently rendered.
    #[must_use]
    pub fn visible(&self) -> bool {
        self.visible
    }

    /// Samples the picker scale at `now`.
    #[must_use]
    pub fn scale(&self, now: Instant) -> f32 {
        self.scale.value(now)
    }

    /// Samples the picker opacity at `now`.
    #[must_use]
    pub fn opacity(&self, now: Instant) -> f32 {
        self.opacity.value(now)
    }

    /// Whether anything here still needs ticks: a running timeline or an
    /// armed deadline.
    #[must_use]
    pub fn is_active(&self, now: Instant) -> bool {
        self.hide_deadline.is_some()
            || self.scale.is_animating(now)
            || self.opacity.is_animating(now)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    const EPSILON: f32 = 1e-5;

    #[test]
    fn show_presents_immediately() {
        let now = Instant::now();
        let mut picker = State::default();
        picker.show(now);

        assert!(picker.visible());
        assert_abs_diff_eq!(picker.scale(now), 0.0, epsilon = EPSILON);
        assert_abs_diff_eq!(
            picker.scale(now + SHOW_HIDE_DURATION),
            1.0,
            epsilon = EPSILON
        );
    }

    #[test]
    fn hide_flips_visibility_only_after_the_deadline() {
        let now = Instant::now();
        let mut picker = State::default();
        picker.show(now);
        picker.hide(now + Duration::from_millis(400));

        // Still rendered while the box shrinks.
        let mid_hide = now + Duration::from_millis(550);
        assert!(!picker.tick(mid_hide));
        assert!(picker.visible());

        let after = now + Duration::from_millis(400) + SHOW_HIDE_DURATION;
        assert!(picker.tick(after));
        assert!(!picker.visible());
        assert_abs_diff_eq!(picker.scale(after), 0.0, epsilon = EPSILON);
    }

    #[test]
    fn reshow_during_hide_discards_the_stale_deadline() {
        let now = Instant::now();
        let mut picker = State::default();
        picker.show(now);
        picker.hide(now + Duration::from_millis(100));

        // A second long-press lands before the hide deadline elapses.
        picker.show(now + Duration::from_millis(200));
        assert!(picker.visible());

        // Even once the old deadline has come due, the picker stays up.
        let past_stale_deadline = now + Duration::from_millis(500);
        assert!(!picker.tick(past_stale_deadline));
        assert!(picker.visible());
    }

    #[test]
    fn reshow_overrides_the_inflight_hide_timeline() {
        let now = Instant::now();
        let mut picker = State::default();
        picker.show(now);
        picker.tick(now + SHOW_HIDE_DURATION);
        picker.hide(now + Duration::from_millis(400));

        // Halfway through the hide, the scale has dropped below shown size.
        let midway = now + Duration::from_millis(550);
        let shrinking = picker.scale(midway);
        assert!(shrinking < 1.0);

        // Last write wins: the reshow continues from the sampled value.
        picker.show(midway);
        assert_abs_diff_eq!(picker.scale(midway), shrinking, epsilon = EPSILON);
        assert_abs_diff_eq!(
            picker.scale(midway + SHOW_HIDE_DURATION),
            1.0,
            epsilon = EPSILON
        );
    }

    #[test]
    fn hide_keeps_opacity_target_at_overlay_level() {
        // Deliberate behavior carried over from the screen's original
        // design: dismissal fades nothing out. The box vanishes because its
        // scale reaches zero while opacity holds at overlay strength.
        let now = Instant::now();
        let mut picker = State::default();
        picker.show(now);
        picker.tick(now + SHOW_HIDE_DURATION);
        picker.hide(now + Duration::from_millis(400));

        let after = now + Duration::from_millis(400) + SHOW_HIDE_DURATION;
        picker.tick(after);
        assert_abs_diff_eq!(picker.opacity(after), 0.9, epsilon = EPSILON);
        assert_abs_diff_eq!(picker.scale(after), 0.0, epsilon = EPSILON);
    }

    #[test]
    fn repeated_show_is_idempotent_on_visibility() {
        let now = Instant::now();
        let mut picker = State::default();
        picker.show(now);
        picker.show(now + Duration::from_millis(50));
        assert!(picker.visible());
        assert_abs_diff_eq!(
            picker.scale(now + Duration::from_millis(50) + SHOW_HIDE_DURATION),
            1.0,
            epsilon = EPSILON
        );
    }

    #[test]
    fn inactive_once_settled() {
        let now = Instant::now();
        let mut picker = State::default();
        assert!(!picker.is_active(now));

        picker.show(now);
        assert!(picker.is_active(now));

        let settled = now + SHOW_HIDE_DURATION;
        picker.tick(settled);
        assert!(!picker.is_active(settled));
    }
}
