// SPDX-License-Identifier: MPL-2.0
//! Popup overlay rendering: backdrop plus the two-region card.
//!
//! The layout mirrors the marketing artwork: a brand-yellow call-to-action
//! half and a near-black half that carries either the email form or the
//! confirmation view. While the exit transition plays the layers render
//! faded and stop emitting messages.

use super::card_size::CardSize;
use super::state::{Content, Message, State};
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{opacity, palette, sizing, spacing, typography};
use crate::ui::{icons, styles};
use iced::widget::{button, mouse_area, text_input, Column, Container, Row, Space, Stack, Text};
use iced::{alignment, Color, Element, Length};

/// Context required to render the popup overlay.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub size: CardSize,
}

/// Renders the overlay, or `None` while the popup is hidden so it occupies
/// no interactive space at all.
pub fn view<'a>(state: &'a State, ctx: ViewContext<'a>) -> Option<Element<'a, Message>> {
    let (content, closing) = state.overlay_content()?;
    let fade = if closing { opacity::EXIT } else { opacity::OPAQUE };

    let veil = Container::new(Space::new().width(Length::Fill).height(Length::Fill))
        .width(Length::Fill)
        .height(Length::Fill)
        .style(styles::overlay::backdrop(fade));
    let backdrop: Element<'a, Message> = if closing {
        veil.into()
    } else {
        mouse_area(veil).on_press(Message::CloseRequested).into()
    };

    let card = Row::new()
        .push(cta_panel(ctx.i18n, fade))
        .push(action_panel(content, ctx.i18n, closing, fade))
        .width(Length::Fixed(ctx.size.width()))
        .height(Length::Fixed(ctx.size.height()));

    let centered = Container::new(card)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center);

    Some(
        Stack::new()
            .width(Length::Fill)
            .height(Length::Fill)
            .push(backdrop)
            .push(centered)
            .into(),
    )
}

/// Brand-colored half with the invitation copy.
fn cta_panel<'a>(i18n: &'a I18n, fade: f32) -> Element<'a, Message> {
    let copy = Column::new()
        .spacing(spacing::SM)
        .align_x(alignment::Horizontal::Center)
        .push(
            Text::new(i18n.tr("popup-title"))
                .size(typography::TITLE_MD)
                .align_x(alignment::Horizontal::Center),
        )
        .push(
            Text::new(i18n.tr("popup-tagline"))
                .size(typography::BODY)
                .align_x(alignment::Horizontal::Center),
        );

    Container::new(copy)
        .width(Length::FillPortion(1))
        .height(Length::Fill)
        .padding(spacing::LG)
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center)
        .style(styles::container::cta_panel(fade))
        .into()
}

/// Dark half: close control in the corner, then the form or the
/// confirmation view.
fn action_panel<'a>(
    content: &'a Content,
    i18n: &'a I18n,
    closing: bool,
    fade: f32,
) -> Element<'a, Message> {
    let mut close = button(icons::tinted(
        icons::sized(icons::cross(), sizing::ICON_SM),
        Color {
            a: opacity::OVERLAY_STRONG * fade,
            ..palette::WHITE
        },
    ))
    .padding(spacing::XXS)
    .style(styles::button::ghost);
    if !closing {
        close = close.on_press(Message::CloseRequested);
    }

    let header = Row::new()
        .push(Space::new().width(Length::Fill))
        .push(close);

    let body: Element<'a, Message> = match content {
        Content::Form { email } => form_body(email, i18n, closing),
        Content::Confirmed => confirmed_body(i18n),
    };

    let layout = Column::new().push(header).push(
        Container::new(body)
            .width(Length::Fill)
            .height(Length::Fill)
            .align_x(alignment::Horizontal::Center)
            .align_y(alignment::Vertical::Center),
    );

    Container::new(layout)
        .width(Length::FillPortion(1))
        .height(Length::Fill)
        .padding(spacing::MD)
        .style(styles::container::action_panel(fade))
        .into()
}

fn form_body<'a>(email: &'a str, i18n: &'a I18n, closing: bool) -> Element<'a, Message> {
    let heading = Text::new(i18n.tr("popup-subscribe-heading"))
        .size(typography::TITLE_SM)
        .color(palette::WHITE);

    let mut field = text_input(&i18n.tr("popup-email-placeholder"), email)
        .padding([spacing::XS, spacing::MD])
        .size(typography::BODY)
        .style(styles::text_input::email_field);
    if !closing {
        field = field
            .on_input(Message::EmailChanged)
            .on_submit(Message::SubmitPressed);
    }

    let submit_label = Row::new()
        .spacing(spacing::XS)
        .align_y(alignment::Vertical::Center)
        .push(Text::new(i18n.tr("popup-subscribe-button")).size(typography::BODY))
        .push(icons::tinted(
            icons::sized(icons::arrow_right(), sizing::ICON_SM),
            palette::BRAND_BLACK,
        ));

    let mut submit = button(
        Container::new(submit_label)
            .width(Length::Fill)
            .align_x(alignment::Horizontal::Center),
    )
    .width(Length::Fill)
    .padding([spacing::XS, spacing::LG])
    .style(styles::button::cta);
    if !closing {
        submit = submit.on_press(Message::SubmitPressed);
    }

    let privacy = Text::new(i18n.tr("popup-privacy-note"))
        .size(typography::CAPTION)
        .align_x(alignment::Horizontal::Center)
        .color(Color {
            a: 0.6,
            ..palette::WHITE
        });

    Column::new()
        .spacing(spacing::MD)
        .max_width(sizing::FORM_MAX_WIDTH)
        .push(heading)
        .push(field)
        .push(submit)
        .push(privacy)
        .into()
}

fn confirmed_body<'a>(i18n: &'a I18n) -> Element<'a, Message> {
    let checkmark = icons::tinted(
        icons::sized(icons::check_circle(), sizing::ICON_XXL),
        palette::BRAND_YELLOW,
    );

    let title = Text::new(i18n.tr("popup-confirmed-title"))
        .size(typography::TITLE_SM)
        .color(palette::WHITE);

    let body = Text::new(i18n.tr("popup-confirmed-body"))
        .size(typography::BODY)
        .align_x(alignment::Horizontal::Center)
        .color(Color {
            a: opacity::OVERLAY_STRONG,
            ..palette::WHITE
        });

    Column::new()
        .spacing(spacing::MD)
        .max_width(sizing::FORM_MAX_WIDTH)
        .align_x(alignment::Horizontal::Center)
        .push(checkmark)
        .push(title)
        .push(body)
        .into()
}
