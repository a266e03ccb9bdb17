// SPDX-License-Identifier: MPL-2.0
//! Overlay styles for the popup backdrop.

use crate::ui::design_tokens::{opacity, palette::BLACK};
use iced::widget::container;
use iced::{Background, Color, Theme};

/// Translucent veil covering the host view while the popup is shown.
/// `fade` dims the veil while the exit transition plays.
pub fn backdrop(fade: f32) -> impl Fn(&Theme) -> container::Style {
    move |_theme: &Theme| container::Style {
        background: Some(Background::Color(Color {
            a: opacity::BACKDROP * fade,
            ..BLACK
        })),
        ..Default::default()
    }
}
