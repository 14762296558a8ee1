// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.

use super::{App, Message};
use crate::ui::bubble;
use iced::alignment::{Horizontal, Vertical};
use iced::widget::{container, Container};
use iced::{Background, Element, Length, Theme};
use std::time::Instant;

impl App {
    /// Renders the screen: the message bubble centered on the surface.
    pub fn view(&self) -> Element<'_, Message> {
        let bubble_view = bubble::view(
            &self.bubble,
            bubble::ViewContext {
                sender: &self.sender,
                body: &self.body,
                scheme: &self.scheme,
                now: Instant::now(),
            },
        )
        .map(Message::Bubble);

        let surface = self.scheme.surface_primary;
        Container::new(bubble_view)
            .width(Length::Fill)
            .height(Length::Fill)
            .align_x(Horizontal::Center)
            .align_y(Vertical::Center)
            .style(move |_theme: &Theme| container::Style {
                background: Some(Background::Color(surface)),
                ..Default::default()
            })
            .into()
    }
}
