// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.

use super::Message;
use iced::{time, Subscription};
use std::time::Duration;

/// Tick interval while timelines or timers are live. Close to a display
/// frame so transitions render smoothly.
const TICK_INTERVAL: Duration = Duration::from_millis(16);

/// Creates the periodic tick subscription for long-press detection,
/// animation stepping, and the picker hide deadline.
///
/// Idle screens subscribe to nothing so the event loop stays quiet.
pub fn create_tick_subscription(needs_ticks: bool) -> Subscription<Message> {
    if needs_ticks {
        time::every(TICK_INTERVAL).map(Message::Tick)
    } else {
        Subscription::none()
    }
}
