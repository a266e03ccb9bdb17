// SPDX-License-Identifier: MPL-2.0
//! Centralized icon module for inline SVG icons.
//!
//! Icons are embedded as SVG sources and recolored at render time through
//! the svg style, so a single source serves every theme and accent color.
//!
//! # Naming Convention
//!
//! Icons use generic visual names describing the icon's appearance,
//! not the action context (e.g., `cross` not `close_popup`).

use iced::widget::svg::{self, Handle, Svg};
use iced::Color;

const CROSS_SVG: &str = r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round"><line x1="18" y1="6" x2="6" y2="18"/><line x1="6" y1="6" x2="18" y2="18"/></svg>"#;

const ARROW_RIGHT_SVG: &str = r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round"><line x1="5" y1="12" x2="19" y2="12"/><polyline points="12 5 19 12 12 19"/></svg>"#;

const CHECK_CIRCLE_SVG: &str = r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round"><path d="M22 11.08V12a10 10 0 1 1-5.93-9.14"/><polyline points="22 4 12 14.01 9 11.27"/></svg>"#;

const INFO_SVG: &str = r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round"><circle cx="12" cy="12" r="10"/><line x1="12" y1="16" x2="12" y2="12"/><line x1="12" y1="8" x2="12.01" y2="8"/></svg>"#;

const WARNING_SVG: &str = r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round"><path d="M10.29 3.86 1.82 18a2 2 0 0 0 1.71 3h16.94a2 2 0 0 0 1.71-3L13.71 3.86a2 2 0 0 0-3.42 0z"/><line x1="12" y1="9" x2="12" y2="13"/><line x1="12" y1="17" x2="12.01" y2="17"/></svg>"#;

/// Cross icon: two crossing diagonal lines.
pub fn cross<'a>() -> Svg<'a> {
    Svg::new(Handle::from_memory(CROSS_SVG.as_bytes()))
}

/// Arrow icon: horizontal line pointing right.
pub fn arrow_right<'a>() -> Svg<'a> {
    Svg::new(Handle::from_memory(ARROW_RIGHT_SVG.as_bytes()))
}

/// Checkmark inside a circle.
pub fn check_circle<'a>() -> Svg<'a> {
    Svg::new(Handle::from_memory(CHECK_CIRCLE_SVG.as_bytes()))
}

/// Info icon: lowercase i inside a circle.
pub fn info<'a>() -> Svg<'a> {
    Svg::new(Handle::from_memory(INFO_SVG.as_bytes()))
}

/// Warning icon: exclamation mark inside a triangle.
pub fn warning<'a>() -> Svg<'a> {
    Svg::new(Handle::from_memory(WARNING_SVG.as_bytes()))
}

/// Resizes an icon to a square of the given size.
pub fn sized(icon: Svg<'_>, size: f32) -> Svg<'_> {
    icon.width(size).height(size)
}

/// Recolors an icon with a fixed color.
pub fn tinted(icon: Svg<'_>, color: Color) -> Svg<'_> {
    icon.style(move |_theme, _status| svg::Style { color: Some(color) })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_icons_construct() {
        // Verify the embedded sources produce handles without panicking
        let _ = cross();
        let _ = arrow_right();
        let _ = check_circle();
        let _ = info();
        let _ = warning();
    }

    #[test]
    fn svg_sources_are_well_formed() {
        for source in [
            CROSS_SVG,
            ARROW_RIGHT_SVG,
            CHECK_CIRCLE_SVG,
            INFO_SVG,
            WARNING_SVG,
        ] {
            assert!(source.starts_with("<svg"));
            assert!(source.ends_with("</svg>"));
            assert!(source.contains("currentColor"));
        }
    }
}
