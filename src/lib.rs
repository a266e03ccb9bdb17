// SPDX-License-Identifier: MPL-2.0
//! `iced_newsletter` is a newsletter-subscription popup demo built with the
//! Iced GUI framework.
//!
//! A static landing view mounts a self-scheduling subscription overlay. The
//! popup owns a small presentation state machine (deferred entrance, exit
//! transition, form submission state), validates the email superficially,
//! and reports outcomes through transient toast notifications. It also
//! demonstrates internationalization with Fluent and user preference
//! management.

pub mod app;
pub mod error;
pub mod i18n;
pub mod ui;
