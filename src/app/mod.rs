// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration.
//!
//! The `App` struct wires together the landing view, the subscription
//! popup, localization, and the toast manager, and translates messages
//! into state transitions. This file intentionally keeps policy decisions
//! (window sizing, timing parameters, theme selection) close to the main
//! update loop so it is easy to audit user-facing behavior.

pub mod config;
mod message;
pub mod paths;
mod subscription;
mod view;

pub use message::{Flags, Message};

use crate::i18n::fluent::I18n;
use crate::ui::notifications;
use crate::ui::popup;
use crate::ui::theming::ThemeMode;
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;
use std::time::Instant;

/// Root Iced application state that bridges the popup widget, localization,
/// and user preferences.
pub struct App {
    pub i18n: I18n,
    popup: popup::State,
    popup_size: popup::CardSize,
    theme_mode: ThemeMode,
    /// Toast notification manager for user feedback.
    notifications: notifications::Manager,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("popup", self.popup.phase())
            .field("visible_toasts", &self.notifications.visible_count())
            .finish()
    }
}

pub const WINDOW_DEFAULT_WIDTH: u32 = 960;
pub const WINDOW_DEFAULT_HEIGHT: u32 = 640;
pub const MIN_WINDOW_WIDTH: u32 = 640;
pub const MIN_WINDOW_HEIGHT: u32 = 480;

/// Builds the window settings.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // Wrap flags in RefCell<Option<_>> to satisfy Fn trait requirement
    // while only consuming flags once (iced 0.14 requires Fn, not FnOnce)
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state
            .borrow_mut()
            .take()
            .expect("Boot function called more than once");
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl Default for App {
    fn default() -> Self {
        Self {
            i18n: I18n::default(),
            popup: popup::State::new(Instant::now(), popup::Timing::default()),
            popup_size: popup::CardSize::default(),
            theme_mode: ThemeMode::System,
            notifications: notifications::Manager::new(),
        }
    }
}

impl App {
    /// Initializes application state from `Flags` and the configuration
    /// file, arming the popup's entrance deadline.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let (config, config_warning) = config::load();
        let i18n = I18n::new(flags.lang, &config);

        let timing = popup::Timing::new(
            config
                .popup
                .entrance_delay_ms
                .unwrap_or(config::DEFAULT_ENTRANCE_DELAY_MS),
            config
                .popup
                .close_delay_ms
                .unwrap_or(config::DEFAULT_CLOSE_DELAY_MS),
        );
        let popup_size = popup::CardSize::new(
            config.popup.width.unwrap_or(config::DEFAULT_POPUP_WIDTH),
            config.popup.height.unwrap_or(config::DEFAULT_POPUP_HEIGHT),
        );

        let mut app = App {
            i18n,
            popup: popup::State::new(Instant::now(), timing),
            popup_size,
            theme_mode: config.general.theme_mode,
            notifications: notifications::Manager::new(),
        };

        // Show a warning for config loading issues
        if let Some(key) = config_warning {
            app.notifications
                .push(notifications::Notification::warning(key));
        }

        (app, Task::none())
    }

    fn title(&self) -> String {
        self.i18n.tr("window-title")
    }

    fn theme(&self) -> Theme {
        if self.theme_mode.is_dark() {
            Theme::Dark
        } else {
            Theme::Light
        }
    }

    fn subscription(&self) -> Subscription<Message> {
        subscription::create_tick_subscription(
            self.popup.has_pending_deadline(),
            self.notifications.has_notifications(),
        )
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Popup(popup_message) => {
                self.apply_popup(popup_message, Instant::now());
                Task::none()
            }
            Message::Notification(notification_message) => {
                self.notifications.handle_message(&notification_message);
                Task::none()
            }
            Message::Tick(now) => {
                // Drive the popup's entrance/close deadlines
                self.apply_popup(popup::Message::Tick(now), now);

                // Tick the notification manager to handle auto-dismiss
                self.notifications.tick();

                Task::none()
            }
        }
    }

    /// Forwards a message to the popup and routes emitted events to the
    /// notification collaborator.
    fn apply_popup(&mut self, message: popup::Message, now: Instant) {
        if let Some(popup::Event::Notify(notification)) = self.popup.update(message, now) {
            self.notifications.push(notification);
        }
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            popup: &self.popup,
            popup_size: self.popup_size,
            notifications: &self.notifications,
        })
    }
}
