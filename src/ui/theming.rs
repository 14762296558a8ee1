// SPDX-License-Identifier: MPL-2.0
//! Extensible theming system.

use crate::ui::design_tokens::palette;
use iced::Color;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// User-facing theme selection.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "kebab-case")]
pub enum ThemeMode {
    Light,
    Dark,
    /// Follow the operating system preference.
    #[default]
    System,
}

impl ThemeMode {
    /// Resolves the mode to a concrete dark/light decision.
    ///
    /// `System` asks the OS via `dark-light`; detection failures fall back
    /// to dark, matching the viewer-friendly default.
    #[must_use]
    pub fn is_dark(self) -> bool {
        match self {
            ThemeMode::Light => false,
            ThemeMode::Dark => true,
            ThemeMode::System => !matches!(dark_light::detect(), Ok(dark_light::Mode::Light)),
        }
    }

    /// The built-in Iced theme matching this mode.
    #[must_use]
    pub fn iced_theme(self) -> iced::Theme {
        if self.is_dark() {
            iced::Theme::Dark
        } else {
            iced::Theme::Light
        }
    }

    /// The color scheme matching this mode.
    #[must_use]
    pub fn scheme(self) -> ColorScheme {
        if self.is_dark() {
            ColorScheme::dark()
        } else {
            ColorScheme::light()
        }
    }
}

impl FromStr for ThemeMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "light" => Ok(ThemeMode::Light),
            "dark" => Ok(ThemeMode::Dark),
            "system" => Ok(ThemeMode::System),
            other => Err(format!("unknown theme mode: {other}")),
        }
    }
}

/// Color palette for a theme.
#[derive(Debug, Clone)]
pub struct ColorScheme {
    // Surface colors
    pub surface_primary: Color,
    pub surface_secondary: Color,

    // Text colors
    pub text_primary: Color,
    pub text_secondary: Color,

    // Chat bubble surfaces
    pub bubble_background: Color,
    pub pill_background: Color,
    pub picker_background: Color,

    // Reaction accents
    pub like_accent: Color,
    pub dislike_accent: Color,
}

impl ColorScheme {
    /// Light theme.
    #[must_use]
    pub fn light() -> Self {
        Self {
            surface_primary: Color::from_rgb(0.965, 0.965, 0.965),
            surface_secondary: palette::GRAY_100,

            text_primary: palette::GRAY_900,
            text_secondary: palette::GRAY_700,

            bubble_background: palette::WHITE,
            pill_background: Color::from_rgb(0.878, 0.878, 0.878),
            picker_background: Color::from_rgb(0.878, 0.878, 0.878),

            like_accent: palette::PRIMARY_500,
            dislike_accent: palette::ERROR_500,
        }
    }

    /// Dark theme.
    #[must_use]
    pub fn dark() -> Self {
        Self {
            surface_primary: Color::from_rgb(0.08, 0.08, 0.08),
            surface_secondary: Color::from_rgb(0.15, 0.15, 0.15),

            text_primary: palette::WHITE,
            text_secondary: palette::GRAY_200,

            bubble_background: palette::GRAY_900,
            pill_background: Color::from_rgb(0.2, 0.2, 0.2),
            picker_background: Color::from_rgb(0.25, 0.25, 0.25),

            like_accent: palette::PRIMARY_400,
            dislike_accent: palette::ERROR_400,
        }
    }
}
