// SPDX-License-Identifier: MPL-2.0
//! UI components, styling, and theming.

pub mod design_tokens;
pub mod icons;
pub mod landing;
pub mod notifications;
pub mod popup;
pub mod styles;
pub mod theming;
