// SPDX-License-Identifier: MPL-2.0
//! View rendering for the message bubble, its reaction picker overlay, and
//! the count bubbles.
//!
//! Animated values are sampled here each frame and mapped onto render
//! properties: the picker's scale drives icon and padding sizes, its
//! opacity drives the surface alpha, and each counter's pulse scales its
//! pill contents.

use super::{Message, State};
use crate::domain::ReactionKind;
use crate::ui::design_tokens::{radius, shadow, sizing, spacing, typography};
use crate::ui::icons;
use crate::ui::theming::ColorScheme;
use iced::alignment::{Horizontal, Vertical};
use iced::font::Weight;
use iced::widget::{button, container, mouse_area, text, Column, Container, Row, Space, Stack};
use iced::{Background, Border, Color, Element, Font, Length, Padding, Theme};
use std::time::Instant;

/// Context required to render the bubble.
pub struct ViewContext<'a> {
    /// Display name shown above the message text.
    pub sender: &'a str,
    /// The message body.
    pub body: &'a str,
    /// Resolved colors for the active theme.
    pub scheme: &'a ColorScheme,
    /// Sampling instant for the animated values.
    pub now: Instant,
}

/// Renders the bubble with its overlays.
pub fn view<'a>(state: &'a State, ctx: ViewContext<'a>) -> Element<'a, Message> {
    let scheme = ctx.scheme;

    let sender = text(ctx.sender)
        .size(typography::LABEL)
        .font(Font {
            weight: Weight::Bold,
            ..Font::DEFAULT
        })
        .style({
            let color = scheme.text_secondary;
            move |_theme: &Theme| text::Style { color: Some(color) }
        });

    let body = text(ctx.body).size(typography::BODY).style({
        let color = scheme.text_primary;
        move |_theme: &Theme| text::Style { color: Some(color) }
    });

    let mut card_content = Column::new()
        .spacing(spacing::XXS)
        .push(sender)
        .push(body);

    if state.counts().any() {
        card_content = card_content.push(counters_row(state, ctx.scheme, ctx.now));
    }

    let card = Container::new(card_content)
        .width(Length::Fixed(sizing::BUBBLE_WIDTH))
        .padding(spacing::SM)
        .style({
            let background = scheme.bubble_background;
            move |_theme: &Theme| container::Style {
                background: Some(Background::Color(background)),
                border: Border {
                    radius: radius::MD.into(),
                    ..Border::default()
                },
                shadow: shadow::MD,
                ..Default::default()
            }
        });

    let pressable = mouse_area(card)
        .on_press(Message::PressBegan)
        .on_release(Message::PressEnded)
        .on_exit(Message::PressCancelled);

    // Clearance above the card keeps room for the picker overlay.
    let base = Column::new()
        .push(Space::new().height(Length::Fixed(sizing::PICKER_CLEARANCE)))
        .push(pressable);

    let mut stack = Stack::new().push(base);

    if state.picker_visible() {
        stack = stack.push(
            Container::new(picker_row(state, scheme, ctx.now))
                .width(Length::Fill)
                .align_x(Horizontal::Right)
                .padding(Padding {
                    right: spacing::LG,
                    ..Padding::ZERO
                }),
        );
    }

    stack.into()
}

/// The like/dislike picker, scaled and faded by its animated values.
fn picker_row<'a>(state: &State, scheme: &ColorScheme, now: Instant) -> Element<'a, Message> {
    let scale = state.picker_scale(now);
    let alpha = state.picker_opacity(now);
    let icon_size = sizing::ICON_MD * scale;

    let reaction_button = |kind: ReactionKind| {
        let (icon, accent) = match kind {
            ReactionKind::Like => (icons::thumbs_up(), scheme.like_accent),
            ReactionKind::Dislike => (icons::thumbs_down(), scheme.dislike_accent),
        };
        button(icons::tinted(icons::sized(icon, icon_size), accent))
            .padding(spacing::XXS * scale)
            .style(picker_button_style)
            .on_press(Message::ReactionPicked(kind))
    };

    let buttons = Row::new()
        .spacing(spacing::MD * scale)
        .align_y(Vertical::Center)
        .push(reaction_button(ReactionKind::Like))
        .push(reaction_button(ReactionKind::Dislike));

    let surface = Color {
        a: alpha,
        ..scheme.picker_background
    };

    Container::new(buttons)
        .padding(Padding {
            top: spacing::XS * scale,
            right: spacing::MD * scale,
            bottom: spacing::XS * scale,
            left: spacing::MD * scale,
        })
        .style(move |_theme: &Theme| container::Style {
            background: Some(Background::Color(surface)),
            border: Border {
                radius: radius::PILL.into(),
                ..Border::default()
            },
            ..Default::default()
        })
        .into()
}

/// One pill per reaction kind with at least one tally, pulsing on updates.
fn counters_row<'a>(state: &State, scheme: &ColorScheme, now: Instant) -> Element<'a, Message> {
    let mut row = Row::new().spacing(spacing::XS);

    for kind in ReactionKind::ALL {
        let count = state.counts().count(kind);
        if count == 0 {
            continue;
        }

        let scale = state.counter_scale(kind, now);
        let (icon, accent) = match kind {
            ReactionKind::Like => (icons::thumbs_up(), scheme.like_accent),
            ReactionKind::Dislike => (icons::thumbs_down(), scheme.dislike_accent),
        };

        let label = text(count.to_string()).size(typography::CAPTION * scale).style({
            let color = scheme.text_primary;
            move |_theme: &Theme| text::Style { color: Some(color) }
        });

        let pill = Row::new()
            .spacing(spacing::XXS)
            .align_y(Vertical::Center)
            .push(icons::tinted(
                icons::sized(icon, sizing::ICON_SM * scale),
                accent,
            ))
            .push(label);

        row = row.push(
            Container::new(pill)
                .padding([spacing::XXS, spacing::XS])
                .style({
                    let background = scheme.pill_background;
                    move |_theme: &Theme| container::Style {
                        background: Some(Background::Color(background)),
                        border: Border {
                            radius: radius::PILL.into(),
                            ..Border::default()
                        },
                        ..Default::default()
                    }
                }),
        );
    }

    Container::new(row)
        .padding(Padding {
            top: spacing::XS,
            ..Padding::ZERO
        })
        .into()
}

/// Style function for the picker buttons: flat at rest, a subtle wash on
/// hover and press.
fn picker_button_style(_theme: &Theme, status: button::Status) -> button::Style {
    match status {
        button::Status::Hovered | button::Status::Pressed => button::Style {
            background: Some(Background::Color(Color {
                a: 0.12,
                ..Color::BLACK
            })),
            border: Border {
                radius: radius::SM.into(),
                ..Border::default()
            },
            ..button::Style::default()
        },
        button::Status::Active | button::Status::Disabled => button::Style {
            background: None,
            border: Border::default(),
            ..button::Style::default()
        },
    }
}
