// SPDX-License-Identifier: MPL-2.0
//! Design tokens for the studio's visual language.
//!
//! The site identity is a near-black stage with a single red accent.
//! Components never hardcode colors or sizes; they pull from these scales
//! so the whole app shifts together.

use iced::Color;

// ============================================================================
// Color Palette
// ============================================================================

pub mod palette {
    use super::Color;

    // Stage grayscale (dark theme only)
    pub const BLACK: Color = Color::BLACK;
    pub const WHITE: Color = Color::WHITE;
    pub const STAGE_950: Color = Color::from_rgb(0.04, 0.04, 0.045);
    pub const STAGE_900: Color = Color::from_rgb(0.09, 0.09, 0.10);
    pub const STAGE_800: Color = Color::from_rgb(0.14, 0.14, 0.15);
    pub const STAGE_700: Color = Color::from_rgb(0.22, 0.22, 0.23);
    pub const TEXT_GRAY: Color = Color::from_rgb(0.64, 0.64, 0.66);

    // Brand accent (red scale)
    pub const BRAND_RED: Color = Color::from_rgb(0.86, 0.13, 0.15);
    pub const BRAND_RED_DARK: Color = Color::from_rgb(0.64, 0.09, 0.11);

    // Semantic colors
    pub const SUCCESS_500: Color = Color::from_rgb(0.263, 0.702, 0.404);
    pub const WARNING_500: Color = Color::from_rgb(0.945, 0.651, 0.125);
    pub const ERROR_500: Color = Color::from_rgb(0.898, 0.224, 0.208);
}

// ============================================================================
// Opacity Scale
// ============================================================================

pub mod opacity {
    pub const OVERLAY_SUBTLE: f32 = 0.2;
    pub const OVERLAY_MEDIUM: f32 = 0.5;
    pub const OVERLAY_STRONG: f32 = 0.7;
    pub const BACKDROP: f32 = 0.9;
    pub const OPAQUE: f32 = 1.0;
}

// ============================================================================
// Spacing Scale (8px baseline grid)
// ============================================================================

pub mod spacing {
    pub const XXS: f32 = 4.0;
    pub const XS: f32 = 8.0;
    pub const SM: f32 = 12.0;
    pub const MD: f32 = 16.0;
    pub const LG: f32 = 24.0;
    pub const XL: f32 = 32.0;
    pub const XXL: f32 = 48.0;
    pub const SECTION: f32 = 96.0;
}

// ============================================================================
// Sizing Scale
// ============================================================================

pub mod sizing {
    /// Height of the pinned navigation bar.
    pub const NAVBAR_HEIGHT: f32 = 64.0;
    /// One mosaic grid cell; Large tiles take 2×2 of these plus the gap.
    pub const GRID_CELL: f32 = 200.0;
    /// Gap between mosaic tiles.
    pub const GRID_GAP: f32 = 4.0;
    /// Width of the centered content column.
    pub const CONTENT_WIDTH: f32 = 1100.0;
    /// Width of the modal player surface.
    pub const MODAL_WIDTH: f32 = 960.0;
    /// Square portfolio tile edge.
    pub const PORTFOLIO_TILE: f32 = 260.0;
    /// Play badge diameter on video tiles.
    pub const PLAY_BADGE: f32 = 64.0;
}

// ============================================================================
// Typography Scale
// ============================================================================

pub mod typography {
    pub const CAPTION: f32 = 11.0;
    pub const MONO_LABEL: f32 = 12.0;
    pub const BODY: f32 = 15.0;
    pub const LEAD: f32 = 19.0;
    pub const TITLE_SM: f32 = 22.0;
    pub const TITLE_MD: f32 = 30.0;
    pub const TITLE_LG: f32 = 44.0;
    pub const DISPLAY: f32 = 68.0;
}

// ============================================================================
// Radius Scale
// ============================================================================

pub mod radius {
    pub const SM: f32 = 4.0;
    pub const MD: f32 = 8.0;
    pub const LG: f32 = 12.0;
    pub const PILL: f32 = 999.0;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spacing_scale_is_monotonic() {
        let scale = [
            spacing::XXS,
            spacing::XS,
            spacing::SM,
            spacing::MD,
            spacing::LG,
            spacing::XL,
            spacing::XXL,
        ];
        assert!(scale.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn brand_red_dominates_its_channels() {
        assert!(palette::BRAND_RED.r > palette::BRAND_RED.g);
        assert!(palette::BRAND_RED.r > palette::BRAND_RED.b);
    }
}
