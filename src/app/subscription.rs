// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.

use super::Message;
use iced::{time, Subscription};
use std::time::Duration;

/// Creates a periodic tick subscription for the popup's entrance/close
/// deadlines and notification auto-dismiss.
///
/// The subscription only exists while something is actually waiting, so no
/// timer runs on an idle landing view.
pub fn create_tick_subscription(
    deadline_pending: bool,
    has_notifications: bool,
) -> Subscription<Message> {
    if deadline_pending || has_notifications {
        time::every(Duration::from_millis(100)).map(Message::Tick)
    } else {
        Subscription::none()
    }
}
