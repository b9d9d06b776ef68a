// SPDX-License-Identifier: MPL-2.0
//! Container styles.

use crate::ui::design_tokens::{palette, radius};
use iced::widget::container;
use iced::{Background, Border, Color, Theme};

/// Page background: the near-black stage every screen sits on.
pub fn stage(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(palette::STAGE_950)),
        text_color: Some(palette::WHITE),
        ..Default::default()
    }
}

/// Raised card surface (system offers, FAQ items, the contact panel).
pub fn card(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(palette::STAGE_900)),
        text_color: Some(palette::WHITE),
        border: Border {
            color: Color {
                a: 0.08,
                ..palette::WHITE
            },
            width: 1.0,
            radius: radius::MD.into(),
        },
        ..Default::default()
    }
}

/// The pinned navigation bar strip.
pub fn navbar(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(Color {
            a: 0.96,
            ..palette::STAGE_900
        })),
        text_color: Some(palette::WHITE),
        border: Border {
            color: Color {
                a: 0.08,
                ..palette::WHITE
            },
            width: 1.0,
            radius: radius::PILL.into(),
        },
        ..Default::default()
    }
}

/// Placeholder surface behind a thumbnail that has not resolved yet.
pub fn tile_placeholder(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(palette::STAGE_800)),
        text_color: Some(palette::TEXT_GRAY),
        ..Default::default()
    }
}
