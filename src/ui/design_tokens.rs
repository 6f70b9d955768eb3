// SPDX-License-Identifier: MPL-2.0
//! Centralized design tokens for the invitation page.
//!
//! - **Palette**: base colors (warm coral brand, map style colors)
//! - **Opacity**: standardized opacity levels
//! - **Spacing**: 8px-grid spacing scale
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

    // Brand colors (warm coral scale, #e74c3c at 500)
    pub const CORAL_100: Color = Color::from_rgb(0.99, 0.9, 0.88);
    pub const CORAL_300: Color = Color::from_rgb(1.0, 0.42, 0.42);
    pub const CORAL_400: Color = Color::from_rgb(0.95, 0.4, 0.33);
    pub const CORAL_500: Color = Color::from_rgb(0.906, 0.298, 0.235);
    pub const CORAL_600: Color = Color::from_rgb(0.75, 0.22, 0.17);

    // Page text on the light card
    pub const INK: Color = Color::from_rgb(0.173, 0.243, 0.314);

    // Map style colors (water / landscape / road)
    pub const MAP_WATER: Color = Color::from_rgb(0.914, 0.914, 0.914);
    pub const MAP_LANDSCAPE: Color = Color::from_rgb(0.96, 0.96, 0.96);
    pub const MAP_ROAD: Color = WHITE;

    /// Confetti particle colors, cycled per particle.
    pub const CONFETTI: [Color; 6] = [
        CORAL_500,
        CORAL_300,
        Color::from_rgb(0.18, 0.8, 0.44),
        Color::from_rgb(0.2, 0.6, 0.86),
        Color::from_rgb(0.95, 0.77, 0.06),
        Color::from_rgb(0.61, 0.35, 0.71),
    ];
}

// ============================================================================
// Opacity Scale
// ============================================================================

pub mod opacity {
    pub const OVERLAY_SUBTLE: f32 = 0.2;
    pub const OVERLAY_MEDIUM: f32 = 0.5;
    pub const OVERLAY_PRESSED: f32 = 0.9;

    /// Surface background for the card and its inset panels.
    pub const SURFACE: f32 = 0.95;
    /// Tinted panel backgrounds (music player, photo booth).
    pub const PANEL_TINT: f32 = 0.08;
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
    pub const XL: f32 = 32.0; // 4 units
}

// ============================================================================
// Sizing Scale
// ============================================================================

pub mod sizing {
    /// Maximum width of the invitation card.
    pub const CARD_MAX_WIDTH: f32 = 800.0;
    /// Height of the stylized map panel.
    pub const MAP_HEIGHT: f32 = 280.0;
    /// Side length of gallery thumbnails.
    pub const THUMBNAIL: f32 = 110.0;
}

// ============================================================================
// Typography Scale
// ============================================================================

pub mod typography {
    /// Page title.
    pub const TITLE_LG: f32 = 40.0;
    /// Section headers.
    pub const TITLE_SM: f32 = 20.0;
    /// Countdown digits.
    pub const COUNTDOWN: f32 = 26.0;
    /// Most UI text.
    pub const BODY: f32 = 15.0;
    /// Playlist chips, captions.
    pub const CAPTION: f32 = 13.0;
}

// ============================================================================
// Border Radius Scale
// ============================================================================

pub mod radius {
    pub const SM: f32 = 4.0;
    pub const MD: f32 = 10.0;
    pub const LG: f32 = 15.0;
    pub const FULL: f32 = 9999.0; // Pill shape
}

// ============================================================================
// Shadow Definitions
// ============================================================================

pub mod shadow {
    use super::palette;
    use iced::{Shadow, Vector};

    pub const NONE: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector::ZERO,
        blur_radius: 0.0,
    };

    pub const SM: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector { x: 0.0, y: 2.0 },
        blur_radius: 4.0,
    };

    pub const MD: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector { x: 0.0, y: 4.0 },
        blur_radius: 8.0,
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn confetti_colors_are_distinct() {
        for (i, a) in palette::CONFETTI.iter().enumerate() {
            for b in palette::CONFETTI.iter().skip(i + 1) {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn spacing_scale_is_monotonic() {
        let scale = [
            spacing::XXS,
            spacing::XS,
            spacing::SM,
            spacing::MD,
            spacing::LG,
            spacing::XL,
        ];
        assert!(scale.windows(2).all(|w| w[0] < w[1]));
    }
}
