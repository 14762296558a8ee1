// SPDX-License-Identifier: MPL-2.0
//! Update logic and message handlers for the application.

use super::{App, Message};
use crate::ui::bubble;
use iced::Task;

impl App {
    /// Applies a top-level message. All state mutation funnels through the
    /// bubble component's reducer; this layer only observes its effects.
    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Bubble(msg) => self.apply_bubble(msg),
            Message::Tick(now) => self.apply_bubble(bubble::Message::Tick(now)),
        }
        Task::none()
    }

    fn apply_bubble(&mut self, msg: bubble::Message) {
        match self.bubble.handle(msg) {
            bubble::Effect::None | bubble::Effect::PickerOpened => {}
            bubble::Effect::ReactionRecorded(_) => {
                // Tallies are ephemeral screen state; nothing to persist.
            }
        }
    }
}
