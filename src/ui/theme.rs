// SPDX-License-Identifier: MPL-2.0
//! Shared text colors and the application theme.

use crate::ui::design_tokens::palette;
use iced::{Color, Theme};

/// The home page only exists in a dark rendition.
#[must_use]
pub fn app_theme() -> Theme {
    Theme::Dark
}

/// Color of the "% Match" figure.
pub fn match_text_color() -> Color {
    palette::MATCH_GREEN
}

/// Brand wordmark color.
pub fn brand_color() -> Color {
    palette::BRAND_RED
}

/// Standard color for muted/secondary text.
pub fn muted_text_color() -> Color {
    palette::GRAY_400
}

/// Body text on dark surfaces.
pub fn body_text_color() -> Color {
    palette::GRAY_200
}
