// SPDX-License-Identifier: MPL-2.0
//! Centralized design tokens following the W3C Design Tokens standard.
//!
//! - **Palette**: base colors
//! - **Opacity**: standardized opacity levels
//! - **Spacing**: spacing scale (8px grid)
//! - **Sizing**: component sizes
//! - **Typography**: font size scale
//! - **Radius**: border radii
//! - **Shadow**: shadow definitions

use iced::Color;

// ============================================================================
// Color Palette
// ============================================================================

pub mod palette {
    use super::Color;

    // Grayscale
    pub const BLACK: Color = Color::BLACK;
    pub const WHITE: Color = Color::WHITE;
    pub const GRAY_900: Color = Color::from_rgb(0.1, 0.1, 0.1);
    pub const GRAY_700: Color = Color::from_rgb(0.3, 0.3, 0.3);
    pub const GRAY_400: Color = Color::from_rgb(0.4, 0.4, 0.4);
    pub const GRAY_200: Color = Color::from_rgb(0.75, 0.75, 0.75);
    pub const GRAY_100: Color = Color::from_rgb(0.85, 0.85, 0.85);

    // Brand colors (blue scale)
    pub const PRIMARY_400: Color = Color::from_rgb(0.4, 0.7, 1.0);
    pub const PRIMARY_500: Color = Color::from_rgb(0.3, 0.6, 0.9);
    pub const PRIMARY_600: Color = Color::from_rgb(0.2, 0.5, 0.8);

    // Semantic colors
    pub const ERROR_500: Color = Color::from_rgb(0.898, 0.224, 0.208);
    pub const ERROR_400: Color = Color::from_rgb(0.937, 0.404, 0.373);
}

// ============================================================================
// Opacity Scale
// ============================================================================

pub mod opacity {
    pub const TRANSPARENT: f32 = 0.0;
    pub const OVERLAY_SUBTLE: f32 = 0.2;
    pub const OVERLAY_MEDIUM: f32 = 0.5;

    /// Reaction picker surface at full presentation strength.
    pub const OVERLAY_PRESSED: f32 = 0.9;
    pub const OPAQUE: f32 = 1.0;
}

// ============================================================================
// Spacing Scale (8px baseline grid)
// ============================================================================

pub mod spacing {
    pub const XXS: f32 = 4.0; // 0.5 unit
    pub const XS: f32 = 8.0; // 1 unit
    pub const SM: f32 = 12.0; // 1.5 units
    pub const MD: f32 = 16.0; // 2 units
    pub const LG: f32 = 24.0; // 3 units
}

// ============================================================================
// Sizing Scale
// ============================================================================

pub mod sizing {
    pub const ICON_SM: f32 = 16.0;
    pub const ICON_MD: f32 = 24.0;

    /// Fixed width of the chat bubble card.
    pub const BUBBLE_WIDTH: f32 = 420.0;

    /// Height reserved above the bubble for the reaction picker overlay.
    pub const PICKER_CLEARANCE: f32 = 56.0;
}

// ============================================================================
// Typography Scale
// ============================================================================

pub mod typography {
    pub const CAPTION: f32 = 14.0;
    pub const BODY: f32 = 16.0;
    pub const LABEL: f32 = 14.0;
}

// ============================================================================
// Radius Scale
// ============================================================================

pub mod radius {
    pub const SM: f32 = 6.0;
    pub const MD: f32 = 10.0;

    /// Fully rounded pill shapes (picker box, count bubbles).
    pub const PILL: f32 = 30.0;
}

// ============================================================================
// Shadows
// ============================================================================

pub mod shadow {
    use iced::{Color, Shadow, Vector};

    pub const MD: Shadow = Shadow {
        color: Color {
            r: 0.0,
            g: 0.0,
            b: 0.0,
            a: 0.1,
        },
        offset: Vector { x: 0.0, y: 2.0 },
        blur_radius: 5.0,
    };
}
