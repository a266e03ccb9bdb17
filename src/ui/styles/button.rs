// SPDX-License-Identifier: MPL-2.0
//! Centralized button styles.

use crate::ui::design_tokens::{
    opacity,
    palette::{self, WHITE},
    radius, shadow,
};
use iced::widget::button;
use iced::{Background, Border, Color, Theme};

/// Style for the primary call-to-action button (yellow pill).
pub fn cta(_theme: &Theme, status: button::Status) -> button::Style {
    match status {
        button::Status::Hovered => button::Style {
            background: Some(Background::Color(palette::BRAND_YELLOW_LIGHT)),
            text_color: palette::BRAND_BLACK,
            border: Border {
                color: palette::BRAND_YELLOW_LIGHT,
                width: 1.0,
                radius: radius::FULL.into(),
            },
            shadow: shadow::MD,
            snap: true,
        },
        _ => button::Style {
            background: Some(Background::Color(palette::BRAND_YELLOW)),
            text_color: palette::BRAND_BLACK,
            border: Border {
                color: palette::BRAND_YELLOW,
                width: 1.0,
                radius: radius::FULL.into(),
            },
            shadow: shadow::SM,
            snap: true,
        },
    }
}

/// Style for quiet icon buttons on dark surfaces (e.g. the close control).
pub fn ghost(_theme: &Theme, status: button::Status) -> button::Style {
    let alpha = match status {
        button::Status::Hovered | button::Status::Pressed => opacity::OPAQUE,
        _ => opacity::OVERLAY_STRONG,
    };

    button::Style {
        background: None,
        text_color: Color { a: alpha, ..WHITE },
        border: Border::default(),
        shadow: shadow::NONE,
        snap: true,
    }
}
