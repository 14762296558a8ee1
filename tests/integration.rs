// SPDX-License-Identifier: MPL-2.0
//! End-to-end scenarios driven through the library API with fabricated
//! instants, plus a config round trip.

use approx::assert_abs_diff_eq;
use iced_bubble::app::config::{self, Config};
use iced_bubble::domain::ReactionKind;
use iced_bubble::ui::bubble::{self, picker, Message, State};
use iced_bubble::ui::theming::ThemeMode;
use std::time::{Duration, Instant};
use tempfile::tempdir;

/// Opens the picker as a long-press would: press, then a tick past the
/// hold threshold.
fn open_picker(state: &mut State) {
    state.handle(Message::PressBegan);
    let effect = state.handle(Message::Tick(
        Instant::now() + bubble::LONG_PRESS_THRESHOLD + Duration::from_millis(50),
    ));
    assert!(matches!(effect, bubble::Effect::PickerOpened));
    state.handle(Message::PressEnded);
}

fn after_hide_delay() -> Instant {
    Instant::now() + picker::SHOW_HIDE_DURATION + Duration::from_millis(20)
}

#[test]
fn long_press_then_like_runs_the_full_cycle() {
    let mut state = State::new();

    open_picker(&mut state);
    assert!(state.picker_visible());

    state.handle(Message::ReactionPicked(ReactionKind::Like));
    assert_eq!(state.counts().count(ReactionKind::Like), 1);
    assert_eq!(state.counts().count(ReactionKind::Dislike), 0);

    state.handle(Message::Tick(after_hide_delay()));
    assert!(!state.picker_visible());
}

#[test]
fn three_likes_count_three() {
    let mut state = State::new();
    for _ in 0..3 {
        open_picker(&mut state);
        state.handle(Message::ReactionPicked(ReactionKind::Like));
        state.handle(Message::Tick(after_hide_delay()));
    }
    assert_eq!(state.counts().count(ReactionKind::Like), 3);
}

#[test]
fn reopening_during_the_hide_delay_keeps_the_picker_up() {
    let mut state = State::new();

    open_picker(&mut state);
    state.handle(Message::ReactionPicked(ReactionKind::Dislike));

    // Before the hide deadline elapses, press again.
    open_picker(&mut state);
    assert!(state.picker_visible());

    // The stale deadline from the dismissed cycle is discarded, so the
    // picker is still up once it would have fired.
    state.handle(Message::Tick(after_hide_delay()));
    assert!(state.picker_visible());
}

#[test]
fn pulses_settle_back_to_unit_scale() {
    let mut state = State::new();
    for _ in 0..4 {
        state.handle(Message::ReactionPicked(ReactionKind::Like));
        state.handle(Message::ReactionPicked(ReactionKind::Dislike));
    }

    let settled = Instant::now() + Duration::from_millis(400);
    for kind in ReactionKind::ALL {
        assert_abs_diff_eq!(state.counter_scale(kind, settled), 1.0, epsilon = 1e-5);
    }
}

#[test]
fn picker_opacity_holds_at_overlay_strength_after_dismissal() {
    // The dismissal keeps the opacity target at 0.9; the box disappears
    // through its scale reaching zero. Chosen deliberately to match the
    // screen's original presentation.
    let mut state = State::new();
    open_picker(&mut state);
    state.handle(Message::ReactionPicked(ReactionKind::Like));

    let settled = after_hide_delay();
    state.handle(Message::Tick(settled));
    assert!(!state.picker_visible());
    assert_abs_diff_eq!(state.picker_scale(settled), 0.0, epsilon = 1e-5);
    assert_abs_diff_eq!(state.picker_opacity(settled), 0.9, epsilon = 1e-5);
}

#[test]
fn theme_change_via_config_round_trip() {
    let dir = tempdir().expect("temp dir");
    let path = dir.path().join("settings.toml");

    let mut config = Config::default();
    config.general.theme_mode = ThemeMode::Light;
    config.message.sender = Some("Jane Roe".to_string());
    config::save_to_path(&config, &path).expect("save config");

    let loaded = config::load_from_path(&path).expect("load config");
    assert_eq!(loaded.general.theme_mode, ThemeMode::Light);
    assert_eq!(loaded.sender(), "Jane Roe");

    config.general.theme_mode = ThemeMode::Dark;
    config::save_to_path(&config, &path).expect("save config");
    let reloaded = config::load_from_path(&path).expect("reload config");
    assert_eq!(reloaded.general.theme_mode, ThemeMode::Dark);
}
