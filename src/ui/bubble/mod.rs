// SPDX-License-Identifier: MPL-2.0
//! Chat-message bubble component with long-press reactions.
//!
//! The component is a reducer: [`State::handle`] applies a [`Message`],
//! mutates local state, requests animation timelines, and returns an
//! [`Effect`] for the caller. Counter updates and visibility flips always
//! happen before any timeline is scheduled within one message.

pub mod picker;
mod view;

pub use view::{view, ViewContext};

use crate::animation::Animated;
use crate::domain::{ReactionCounts, ReactionKind};
use std::time::{Duration, Instant};

/// How long a press must be held before it counts as a long-press.
pub const LONG_PRESS_THRESHOLD: Duration = Duration::from_millis(500);

/// Peak scale of a count bubble while its pulse plays.
const PULSE_PEAK: f32 = 1.3;

/// Duration of each pulse leg (up, then back down).
const PULSE_LEG: Duration = Duration::from_millis(150);

/// Resting scale of a count bubble.
const COUNTER_REST_SCALE: f32 = 1.0;

/// Message-bubble component state.
#[derive(Debug, Clone)]
pub struct State {
    counts: ReactionCounts,
    picker: picker::State,
    like_pulse: Animated,
    dislike_pulse: Animated,
    /// When the current press began, if one is in progress.
    pressed_at: Option<Instant>,
    /// Latch so one physical press fires at most one long-press.
    long_press_sent: bool,
}

impl Default for State {
    fn default() -> Self {
        Self {
            counts: ReactionCounts::new(),
            picker: picker::State::default(),
            like_pulse: Animated::new(COUNTER_REST_SCALE),
            dislike_pulse: Animated::new(COUNTER_REST_SCALE),
            pressed_at: None,
            long_press_sent: false,
        }
    }
}

/// Messages for the bubble component.
#[derive(Debug, Clone)]
pub enum Message {
    /// A press started on the bubble.
    PressBegan,
    /// The press was released.
    PressEnded,
    /// The pointer left the bubble mid-press.
    PressCancelled,
    /// One of the picker buttons was tapped.
    ReactionPicked(ReactionKind),
    /// Periodic tick driving long-press detection and timers.
    Tick(Instant),
}

/// Effects produced by the bubble component.
#[derive(Debug, Clone)]
pub enum Effect {
    /// No effect.
    None,
    /// A long-press opened the reaction picker.
    PickerOpened,
    /// A reaction was tallied.
    ReactionRecorded(ReactionKind),
}

impl State {
    /// Creates a freshly mounted bubble: zero counts, picker hidden.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Handle a bubble message.
    ///
    /// Note: Takes `Message` by value following Iced's `update(message: Message)` pattern.
    #[allow(clippy::needless_pass_by_value)]
    pub fn handle(&mut self, msg: Message) -> Effect {
        match msg {
            Message::PressBegan => {
                self.pressed_at = Some(Instant::now());
                self.long_press_sent = false;
                Effect::None
            }
            Message::PressEnded | Message::PressCancelled => {
                self.pressed_at = None;
                Effect::None
            }
            Message::ReactionPicked(kind) => {
                // Tally first, then schedule the animations.
                self.counts.record(kind);
                let now = Instant::now();
                self.picker.hide(now);
                self.pulse_mut(kind).pulse(PULSE_PEAK, PULSE_LEG, now);
                Effect::ReactionRecorded(kind)
            }
            Message::Tick(now) => self.tick(now),
        }
    }

    fn tick(&mut self, now: Instant) -> Effect {
        let mut effect = Effect::None;

        if let Some(pressed_at) = self.pressed_at {
            let held = now.saturating_duration_since(pressed_at);
            if !self.long_press_sent && held >= LONG_PRESS_THRESHOLD {
                self.long_press_sent = true;
                self.picker.show(now);
                effect = Effect::PickerOpened;
            }
        }

        self.picker.tick(now);
        self.like_pulse.settle(now);
        self.dislike_pulse.settle(now);
        effect
    }

    /// Reaction tallies for this message.
    #[must_use]
    pub fn counts(&self) -> ReactionCounts {
        self.counts
    }

    /// Whether the reaction picker is currently rendered.
    #[must_use]
    pub fn picker_visible(&self) -> bool {
        self.picker.visible()
    }

    /// Samples the picker scale at `now`.
    #[must_use]
    pub fn picker_scale(&self, now: Instant) -> f32 {
        self.picker.scale(now)
    }

    /// Samples the picker opacity at `now`.
    #[must_use]
    pub fn picker_opacity(&self, now: Instant) -> f32 {
        self.picker.opacity(now)
    }

    /// Samples the pulse scale of one counter at `now`.
    #[must_use]
    pub fn counter_scale(&self, kind: ReactionKind, now: Instant) -> f32 {
        match kind {
            ReactionKind::Like => self.like_pulse.value(now),
            ReactionKind::Dislike => self.dislike_pulse.value(now),
        }
    }

    /// Whether the component needs tick messages: a press is being timed,
    /// the picker has work pending, or a pulse is still playing.
    #[must_use]
    pub fn needs_ticks(&self, now: Instant) -> bool {
        self.pressed_at.is_some()
            || self.picker.is_active(now)
            || self.like_pulse.is_animating(now)
            || self.dislike_pulse.is_animating(now)
    }

    fn pulse_mut(&mut self, kind: ReactionKind) -> &mut Animated {
        match kind {
            ReactionKind::Like => &mut self.like_pulse,
            ReactionKind::Dislike => &mut self.dislike_pulse,
        }
    }
}
