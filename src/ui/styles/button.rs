// SPDX-License-Identifier: MPL-2.0
//! Centralized button styles.

use crate::ui::design_tokens::{palette, radius};
use iced::widget::button;
use iced::{Background, Border, Theme};

/// Primary call-to-action: solid brand red, white caption.
pub fn primary(_theme: &Theme, status: button::Status) -> button::Style {
    let background = match status {
        button::Status::Hovered | button::Status::Pressed => palette::BRAND_RED_DARK,
        _ => palette::BRAND_RED,
    };
    button::Style {
        background: Some(Background::Color(background)),
        text_color: palette::WHITE,
        border: Border {
            radius: radius::SM.into(),
            ..Default::default()
        },
        ..button::Style::default()
    }
}

/// Secondary action: hairline border, no fill until hovered.
pub fn outline(_theme: &Theme, status: button::Status) -> button::Style {
    let background = match status {
        button::Status::Hovered | button::Status::Pressed => {
            Some(Background::Color(palette::STAGE_800))
        }
        _ => None,
    };
    button::Style {
        background,
        text_color: palette::WHITE,
        border: Border {
            color: palette::STAGE_700,
            width: 1.0,
            radius: radius::SM.into(),
        },
        ..button::Style::default()
    }
}

/// Quiet text link: gray at rest, white on hover.
pub fn link(_theme: &Theme, status: button::Status) -> button::Style {
    let text_color = match status {
        button::Status::Hovered | button::Status::Pressed => palette::WHITE,
        _ => palette::TEXT_GRAY,
    };
    button::Style {
        background: None,
        text_color,
        border: Border::default(),
        ..button::Style::default()
    }
}

/// Filter tab or pill. The active one reads brand red.
pub fn tab(active: bool) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |_theme: &Theme, status: button::Status| {
        let text_color = if active {
            palette::BRAND_RED
        } else {
            match status {
                button::Status::Hovered | button::Status::Pressed => palette::WHITE,
                _ => palette::TEXT_GRAY,
            }
        };
        let border = if active {
            Border {
                color: palette::BRAND_RED,
                width: 1.0,
                radius: radius::PILL.into(),
            }
        } else {
            Border {
                radius: radius::PILL.into(),
                ..Default::default()
            }
        };
        button::Style {
            background: None,
            text_color,
            border,
            ..button::Style::default()
        }
    }
}

/// Gallery/portfolio tile surface: dark card that lifts slightly on hover.
pub fn tile(_theme: &Theme, status: button::Status) -> button::Style {
    let background = match status {
        button::Status::Hovered | button::Status::Pressed => palette::STAGE_800,
        _ => palette::STAGE_900,
    };
    button::Style {
        background: Some(Background::Color(background)),
        text_color: palette::WHITE,
        border: Border::default(),
        ..button::Style::default()
    }
}

/// Disabled state shared by the submit button while a draft is in flight.
pub fn disabled() -> impl Fn(&Theme, button::Status) -> button::Style {
    move |_theme: &Theme, _status: button::Status| button::Style {
        background: Some(Background::Color(palette::STAGE_800)),
        text_color: palette::TEXT_GRAY,
        border: Border {
            radius: radius::SM.into(),
            ..Default::default()
        },
        ..button::Style::default()
    }
}
