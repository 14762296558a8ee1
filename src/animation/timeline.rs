// SPDX-License-Identifier: MPL-2.0
//! Animated scalar values driven by segment timelines.

use super::Easing;
use std::time::{Duration, Instant};

/// One timed interpolation between two values.
#[derive(Debug, Clone, Copy)]
struct Segment {
    from: f32,
    to: f32,
    duration: Duration,
    easing: Easing,
}

impl Segment {
    fn sample(&self, elapsed: Duration) -> f32 {
        if self.duration.is_zero() {
            return self.to;
        }
        let t = (elapsed.as_secs_f32() / self.duration.as_secs_f32()).clamp(0.0, 1.0);
        self.from + (self.to - self.from) * self.easing.apply(t)
    }
}

/// A sequence of segments played back to back from a fixed start instant.
#[derive(Debug, Clone)]
struct Timeline {
    started_at: Instant,
    segments: Vec<Segment>,
}

impl Timeline {
    fn total_duration(&self) -> Duration {
        self.segments
            .iter()
            .map(|segment| segment.duration)
            .sum()
    }

    /// Samples the timeline at `now`. Past the end, the final target holds.
    fn sample(&self, now: Instant) -> f32 {
        let mut remaining = now.saturating_duration_since(self.started_at);
        for segment in &self.segments {
            if remaining < segment.duration {
                return segment.sample(remaining);
            }
            remaining -= segment.duration;
        }
        self.segments.last().map_or(0.0, |segment| segment.to)
    }

    fn is_finished(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.started_at) >= self.total_duration()
    }
}

/// A scalar value with a resting state and at most one active timeline.
///
/// Starting a new timeline on a value interrupts and overrides any in-flight
/// one (last write wins), picking up from the value sampled at the moment of
/// interruption. Distinct `Animated` values never interfere with each other.
#[derive(Debug, Clone)]
pub struct Animated {
    /// Value reported while no timeline is active.
    rest: f32,
    timeline: Option<Timeline>,
}

impl Animated {
    /// Creates a value resting at `rest` with no active timeline.
    #[must_use]
    pub fn new(rest: f32) -> Self {
        Self {
            rest,
            timeline: None,
        }
    }

    /// Samples the current value at `now`.
    #[must_use]
    pub fn value(&self, now: Instant) -> f32 {
        self.timeline
            .as_ref()
            .map_or(self.rest, |timeline| timeline.sample(now))
    }

    /// Starts a single timed interpolation toward `target`.
    ///
    /// The interpolation begins at the value sampled at `now`, so replacing
    /// an in-flight timeline continues from wherever it had gotten to.
    pub fn transition_to(&mut self, target: f32, duration: Duration, easing: Easing, now: Instant) {
        let from = self.value(now);
        self.timeline = Some(Timeline {
            started_at: now,
            segments: vec![Segment {
                from,
                to: target,
                duration,
                easing,
            }],
        });
    }

    /// Starts a two-leg pulse: up to `peak`, then back to the resting value.
    ///
    /// The second leg only begins once the first completes. Each leg runs for
    /// `leg` with linear easing. However often pulses are retriggered, the
    /// value lands back on the resting value once the timeline finishes.
    pub fn pulse(&mut self, peak: f32, leg: Duration, now: Instant) {
        let from = self.value(now);
        self.timeline = Some(Timeline {
            started_at: now,
            segments: vec![
                Segment {
                    from,
                    to: peak,
                    duration: leg,
                    easing: Easing::Linear,
                },
                Segment {
                    from: peak,
                    to: self.rest,
                    duration: leg,
                    easing: Easing::Linear,
                },
            ],
        });
    }

    /// Whether a timeline is still running at `now`.
    #[must_use]
    pub fn is_animating(&self, now: Instant) -> bool {
        self.timeline
            .as_ref()
            .is_some_and(|timeline| !timeline.is_finished(now))
    }

    /// Retires a finished timeline, folding its final target into the
    /// resting value. Call once per tick; sampling stays correct either way.
    pub fn settle(&mut self, now: Instant) {
        if let Some(timeline) = &self.timeline {
            if timeline.is_finished(now) {
                self.rest = timeline.sample(now);
                self.timeline = None;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    const EPSILON: f32 = 1e-5;

    fn ms(millis: u64) -> Duration {
        Duration::from_millis(millis)
    }

    #[test]
    fn idle_value_reports_rest() {
        let value = Animated::new(1.0);
        assert_abs_diff_eq!(value.value(Instant::now()), 1.0);
        assert!(!value.is_animating(Instant::now()));
    }

    #[test]
    fn transition_reaches_target_after_duration() {
        let start = Instant::now();
        let mut value = Animated::new(0.0);
        value.transition_to(1.0, ms(300), Easing::EaseOut, start);

        assert!(value.is_animating(start));
        assert_abs_diff_eq!(value.value(start), 0.0, epsilon = EPSILON);
        assert_abs_diff_eq!(value.value(start + ms(300)), 1.0, epsilon = EPSILON);
        assert!(!value.is_animating(start + ms(300)));
    }

    #[test]
    fn transition_is_monotonic_toward_target() {
        let start = Instant::now();
        let mut value = Animated::new(0.0);
        value.transition_to(1.0, ms(300), Easing::EaseOut, start);

        let mut previous = value.value(start);
        for step in 1..=30 {
            let sampled = value.value(start + ms(step * 10));
            assert!(sampled >= previous);
            previous = sampled;
        }
    }

    #[test]
    fn interrupting_transition_resumes_from_sampled_value() {
        let start = Instant::now();
        let mut value = Animated::new(0.0);
        value.transition_to(1.0, ms(300), Easing::EaseOut, start);

        // Interrupt halfway; the replacement starts where the first left off.
        let midpoint = start + ms(150);
        let sampled = value.value(midpoint);
        assert!(sampled > 0.0 && sampled < 1.0);

        value.transition_to(0.0, ms(300), Easing::EaseOut, midpoint);
        assert_abs_diff_eq!(value.value(midpoint), sampled, epsilon = EPSILON);
        assert_abs_diff_eq!(value.value(midpoint + ms(300)), 0.0, epsilon = EPSILON);
    }

    #[test]
    fn pulse_peaks_then_returns_to_rest() {
        let start = Instant::now();
        let mut value = Animated::new(1.0);
        value.pulse(1.3, ms(150), start);

        assert_abs_diff_eq!(value.value(start + ms(150)), 1.3, epsilon = EPSILON);
        assert_abs_diff_eq!(value.value(start + ms(300)), 1.0, epsilon = EPSILON);
    }

    #[test]
    fn pulse_second_leg_waits_for_the_first() {
        let start = Instant::now();
        let mut value = Animated::new(1.0);
        value.pulse(1.3, ms(150), start);

        // Still climbing during the first leg.
        assert!(value.value(start + ms(75)) < 1.3);
        // Descending only after the first leg completes.
        let descending = value.value(start + ms(225));
        assert!(descending < 1.3 && descending > 1.0);
    }

    #[test]
    fn rapid_pulses_still_land_exactly_on_rest() {
        let start = Instant::now();
        let mut value = Animated::new(1.0);
        value.pulse(1.3, ms(150), start);
        value.pulse(1.3, ms(150), start + ms(40));
        value.pulse(1.3, ms(150), start + ms(90));

        let settled = value.value(start + ms(90) + ms(300));
        assert_abs_diff_eq!(settled, 1.0, epsilon = EPSILON);
    }

    #[test]
    fn settle_folds_final_target_into_rest() {
        let start = Instant::now();
        let mut value = Animated::new(0.0);
        value.transition_to(0.9, ms(300), Easing::Linear, start);

        value.settle(start + ms(100));
        assert!(value.is_animating(start + ms(100)));

        value.settle(start + ms(300));
        assert!(!value.is_animating(start + ms(300)));
        assert_abs_diff_eq!(value.value(start + ms(400)), 0.9, epsilon = EPSILON);
    }

    #[test]
    fn distinct_values_do_not_interfere() {
        let start = Instant::now();
        let mut first = Animated::new(0.0);
        let mut second = Animated::new(1.0);
        first.transition_to(1.0, ms(300), Easing::EaseOut, start);
        second.pulse(1.3, ms(150), start);

        assert_abs_diff_eq!(first.value(start + ms(300)), 1.0, epsilon = EPSILON);
        assert_abs_diff_eq!(second.value(start + ms(300)), 1.0, epsilon = EPSILON);
    }

    #[test]
    fn zero_duration_transition_jumps_to_target() {
        let start = Instant::now();
        let mut value = Animated::new(0.0);
        value.transition_to(1.0, Duration::ZERO, Easing::Linear, start);
        assert_abs_diff_eq!(value.value(start), 1.0, epsilon = EPSILON);
    }
}
