// SPDX-License-Identifier: MPL-2.0
//! Landing view: the static marketing content the popup mounts over.
//!
//! The view is purely presentational and emits no messages of its own,
//! so it is generic over the host's message type.

use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{palette, spacing, typography};
use iced::widget::{Column, Container, Text};
use iced::{alignment, Color, Element, Length};

/// Renders the marketing hero.
pub fn view<'a, Message: 'a>(i18n: &'a I18n) -> Element<'a, Message> {
    let title = Text::new(i18n.tr("landing-title")).size(typography::TITLE_LG);

    let tagline = Text::new(i18n.tr("landing-tagline"))
        .size(typography::BODY)
        .color(palette::GRAY_400);

    let hint = Text::new(i18n.tr("landing-hint"))
        .size(typography::CAPTION)
        .color(Color {
            a: 0.6,
            ..palette::GRAY_400
        });

    let content = Column::new()
        .spacing(spacing::MD)
        .align_x(alignment::Horizontal::Center)
        .push(title)
        .push(tagline)
        .push(hint);

    Container::new(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn view_returns_element() {
        let i18n = I18n::default();
        let _element: Element<'_, ()> = view(&i18n);
        // Smoke test to ensure the view renders without panicking.
    }
}
