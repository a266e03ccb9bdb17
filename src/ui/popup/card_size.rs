// SPDX-License-Identifier: MPL-2.0
//! Popup card size domain type.

use crate::app::config::{
    DEFAULT_POPUP_HEIGHT, DEFAULT_POPUP_WIDTH, MAX_POPUP_HEIGHT, MAX_POPUP_WIDTH,
    MIN_POPUP_HEIGHT, MIN_POPUP_WIDTH,
};

/// Popup card dimensions in logical pixels, clamped to the valid range.
///
/// Deployed variants differ only cosmetically in these values, so they are
/// carried as data rather than as separate layouts.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CardSize {
    width: f32,
    height: f32,
}

impl CardSize {
    /// Creates a new card size, clamping both dimensions to valid bounds.
    /// Non-finite inputs fall back to the defaults.
    #[must_use]
    pub fn new(width: f32, height: f32) -> Self {
        let width = if width.is_finite() {
            width.clamp(MIN_POPUP_WIDTH, MAX_POPUP_WIDTH)
        } else {
            DEFAULT_POPUP_WIDTH
        };
        let height = if height.is_finite() {
            height.clamp(MIN_POPUP_HEIGHT, MAX_POPUP_HEIGHT)
        } else {
            DEFAULT_POPUP_HEIGHT
        };
        Self { width, height }
    }

    /// Returns the card width.
    #[must_use]
    pub fn width(self) -> f32 {
        self.width
    }

    /// Returns the card height.
    #[must_use]
    pub fn height(self) -> f32 {
        self.height
    }
}

impl Default for CardSize {
    fn default() -> Self {
        Self::new(DEFAULT_POPUP_WIDTH, DEFAULT_POPUP_HEIGHT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_clamps_to_valid_range() {
        let size = CardSize::new(10_000.0, 1.0);
        assert_eq!(size.width(), MAX_POPUP_WIDTH);
        assert_eq!(size.height(), MIN_POPUP_HEIGHT);
    }

    #[test]
    fn new_accepts_valid_values() {
        let size = CardSize::new(640.0, 360.0);
        assert_eq!(size.width(), 640.0);
        assert_eq!(size.height(), 360.0);
    }

    #[test]
    fn non_finite_inputs_fall_back_to_defaults() {
        let size = CardSize::new(f32::NAN, f32::INFINITY);
        assert_eq!(size.width(), DEFAULT_POPUP_WIDTH);
        assert_eq!(size.height(), DEFAULT_POPUP_HEIGHT);
    }

    #[test]
    fn default_matches_configured_defaults() {
        let size = CardSize::default();
        assert_eq!(size.width(), DEFAULT_POPUP_WIDTH);
        assert_eq!(size.height(), DEFAULT_POPUP_HEIGHT);
    }
}
