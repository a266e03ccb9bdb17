// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! The view is a stack: the landing content at the bottom, the popup
//! overlay above it while visible, and the toast overlay on top.

use super::Message;
use crate::i18n::fluent::I18n;
use crate::ui::landing;
use crate::ui::notifications::{Manager, Toast};
use crate::ui::popup;
use iced::widget::Stack;
use iced::{Element, Length};

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub popup: &'a popup::State,
    pub popup_size: popup::CardSize,
    pub notifications: &'a Manager,
}

/// Renders the current application view.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let mut layers = Stack::new()
        .width(Length::Fill)
        .height(Length::Fill)
        .push(landing::view(ctx.i18n));

    if let Some(overlay) = popup::view(
        ctx.popup,
        popup::ViewContext {
            i18n: ctx.i18n,
            size: ctx.popup_size,
        },
    ) {
        layers = layers.push(overlay.map(Message::Popup));
    }

    if ctx.notifications.has_notifications() {
        layers = layers.push(Toast::view_overlay(ctx.notifications, ctx.i18n).map(Message::Notification));
    }

    layers.into()
}
