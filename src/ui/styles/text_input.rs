// SPDX-License-Identifier: MPL-2.0
//! Text input styles for the subscription form.

use crate::ui::design_tokens::{border, opacity, palette, radius};
use iced::widget::text_input;
use iced::{Background, Border, Color, Theme};

/// Pill-shaped email field on the dark panel: translucent white surface,
/// subtle border, light placeholder.
pub fn email_field(_theme: &Theme, _status: text_input::Status) -> text_input::Style {
    text_input::Style {
        background: Background::Color(Color {
            a: 0.1,
            ..palette::WHITE
        }),
        border: Border {
            color: Color {
                a: opacity::OVERLAY_SUBTLE,
                ..palette::WHITE
            },
            width: border::WIDTH_SM,
            radius: radius::FULL.into(),
        },
        icon: palette::WHITE,
        placeholder: Color {
            a: opacity::OVERLAY_MEDIUM,
            ..palette::WHITE
        },
        value: palette::WHITE,
        selection: palette::BRAND_YELLOW,
    }
}
