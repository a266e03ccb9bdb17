// SPDX-License-Identifier: MPL-2.0
//! Container styles for the popup card panels.

use crate::ui::design_tokens::{palette, radius, shadow};
use iced::border::Radius;
use iced::widget::container;
use iced::{Background, Color, Theme};

fn faded(color: Color, fade: f32) -> Color {
    Color {
        a: color.a * fade,
        ..color
    }
}

/// Left half of the popup card: the brand-colored call-to-action panel.
/// `fade` dims the panel while the exit transition plays.
pub fn cta_panel(fade: f32) -> impl Fn(&Theme) -> container::Style {
    move |_theme: &Theme| container::Style {
        background: Some(Background::Color(faded(palette::BRAND_YELLOW, fade))),
        text_color: Some(faded(palette::BRAND_BLACK, fade)),
        border: iced::Border {
            radius: Radius {
                top_left: radius::FULL,
                top_right: 0.0,
                bottom_right: 0.0,
                bottom_left: radius::FULL,
            },
            ..Default::default()
        },
        shadow: shadow::LG,
        ..Default::default()
    }
}

/// Right half of the popup card: the dark panel holding the form or the
/// confirmation view.
pub fn action_panel(fade: f32) -> impl Fn(&Theme) -> container::Style {
    move |_theme: &Theme| container::Style {
        background: Some(Background::Color(faded(palette::BRAND_BLACK, fade))),
        text_color: Some(faded(palette::WHITE, fade)),
        border: iced::Border {
            radius: Radius {
                top_left: 0.0,
                top_right: radius::FULL,
                bottom_right: radius::FULL,
                bottom_left: 0.0,
            },
            ..Default::default()
        },
        shadow: shadow::LG,
        ..Default::default()
    }
}
