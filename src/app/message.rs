// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::ui::bubble;
use crate::ui::theming::ThemeMode;
use std::time::Instant;

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    Bubble(bubble::Message),
    /// Periodic tick driving animation timelines and timers.
    Tick(Instant),
}

/// Runtime flags passed in from the CLI to tweak startup behavior.
#[derive(Debug, Default)]
pub struct Flags {
    /// Theme mode override (`light`, `dark`, or `system`).
    pub theme: Option<ThemeMode>,
    /// Config directory override, highest priority over env and platform
    /// defaults.
    pub config_dir: Option<String>,
    /// Message body override for the demo bubble.
    pub body: Option<String>,
}
