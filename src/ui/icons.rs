// SPDX-License-Identifier: MPL-2.0
//! Centralized icon module for the reaction glyphs.
//!
//! Icons are single-path SVGs embedded at compile time via `include_bytes!`,
//! with handles cached in a `OnceLock` so repeated views reuse the parsed
//! asset. Tinting happens at style time, which covers both themes from one
//! source file.
//!
//! # Naming Convention
//!
//! Icons use generic visual names describing the icon's appearance,
//! not the action context (e.g., `thumbs_up` not `like_button`).

use iced::widget::svg::{self, Handle, Svg};
use iced::{Color, Length, Theme};
use std::sync::OnceLock;

/// Defines an icon function with a cached handle.
macro_rules! define_icon {
    ($name:ident, $filename:literal, $doc:literal) => {
        #[doc = $doc]
        pub fn $name() -> Svg<'static> {
            static HANDLE: OnceLock<Handle> = OnceLock::new();
            static DATA: &[u8] = include_bytes!(concat!("../../assets/icons/", $filename));
            let handle = HANDLE.get_or_init(|| Handle::from_memory(DATA));
            Svg::new(handle.clone())
        }
    };
}

define_icon!(
    thumbs_up,
    "thumbs-up.svg",
    "Thumbs-up glyph: open hand, thumb raised."
);
define_icon!(
    thumbs_down,
    "thumbs-down.svg",
    "Thumbs-down glyph: open hand, thumb lowered."
);

/// Sizes an icon to a square of the given side length.
pub fn sized(icon: Svg<'static>, size: f32) -> Svg<'static> {
    icon.width(Length::Fixed(size)).height(Length::Fixed(size))
}

/// Tints an icon with a solid color, replacing the source fill.
pub fn tinted(icon: Svg<'static>, color: Color) -> Svg<'static> {
    icon.style(move |_theme: &Theme, _status| svg::Style { color: Some(color) })
}
