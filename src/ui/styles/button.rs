// SPDX-License-Identifier: MPL-2.0
//! Centralized button styles.

use crate::ui::design_tokens::{
    opacity,
    palette::{self, BLACK, WHITE},
    radius, shadow,
};
use iced::widget::button;
use iced::{Background, Border, Color, Theme};

/// White "Play" button.
pub fn play(_theme: &Theme, status: button::Status) -> button::Style {
    let background = match status {
        button::Status::Hovered | button::Status::Pressed => Color {
            a: opacity::OVERLAY_HOVER,
            ..WHITE
        },
        _ => WHITE,
    };

    button::Style {
        background: Some(Background::Color(background)),
        text_color: BLACK,
        border: Border {
            radius: radius::SM.into(),
            ..Default::default()
        },
        shadow: shadow::NONE,
        snap: true,
    }
}

/// Translucent gray "More Info" button.
pub fn secondary(_theme: &Theme, status: button::Status) -> button::Style {
    let alpha = match status {
        button::Status::Hovered | button::Status::Pressed => opacity::OVERLAY_MEDIUM,
        _ => opacity::OVERLAY_STRONG,
    };

    button::Style {
        background: Some(Background::Color(Color {
            a: alpha,
            ..palette::GRAY_600
        })),
        text_color: WHITE,
        border: Border {
            radius: radius::SM.into(),
            ..Default::default()
        },
        shadow: shadow::NONE,
        snap: true,
    }
}

/// Circular outlined button used for add/like/close glyphs.
pub fn round(_theme: &Theme, status: button::Status) -> button::Style {
    let border_color = match status {
        button::Status::Hovered | button::Status::Pressed => WHITE,
        _ => palette::GRAY_400,
    };

    button::Style {
        background: Some(Background::Color(Color {
            a: opacity::OVERLAY_STRONG,
            ..palette::SURFACE_850
        })),
        text_color: WHITE,
        border: Border {
            color: border_color,
            width: 2.0,
            radius: radius::FULL.into(),
        },
        shadow: shadow::NONE,
        snap: true,
    }
}

/// Row paging arrow drawn over the cards.
pub fn row_arrow(_theme: &Theme, status: button::Status) -> button::Style {
    let alpha = match status {
        button::Status::Hovered => opacity::OVERLAY_HOVER,
        button::Status::Pressed => opacity::OVERLAY_PRESSED,
        _ => opacity::OVERLAY_MEDIUM,
    };

    button::Style {
        background: Some(Background::Color(Color { a: alpha, ..BLACK })),
        text_color: WHITE,
        border: Border::default(),
        shadow: shadow::NONE,
        snap: true,
    }
}

/// Borderless text button for navbar links and glyphs.
pub fn link(_theme: &Theme, status: button::Status) -> button::Style {
    let text_color = match status {
        button::Status::Hovered | button::Status::Pressed => palette::GRAY_400,
        _ => palette::GRAY_200,
    };

    button::Style {
        background: None,
        text_color,
        border: Border::default(),
        shadow: shadow::NONE,
        snap: true,
    }
}

/// Hero selector dot; the active one is filled white.
pub fn dot(active: bool) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |_theme: &Theme, status: button::Status| {
        let color = if active {
            WHITE
        } else if matches!(status, button::Status::Hovered) {
            palette::GRAY_200
        } else {
            palette::GRAY_600
        };

        button::Style {
            background: Some(Background::Color(color)),
            text_color: color,
            border: Border {
                radius: radius::FULL.into(),
                ..Default::default()
            },
            shadow: shadow::NONE,
            snap: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn play_button_is_white_at_rest() {
        let style = play(&Theme::Dark, button::Status::Active);
        assert_eq!(style.background, Some(Background::Color(WHITE)));
        assert_eq!(style.text_color, BLACK);
    }

    #[test]
    fn row_arrow_darkens_on_hover() {
        let rest = row_arrow(&Theme::Dark, button::Status::Active);
        let hover = row_arrow(&Theme::Dark, button::Status::Hovered);
        assert_ne!(rest.background, hover.background);
    }

    #[test]
    fn active_dot_is_white() {
        let style = dot(true)(&Theme::Dark, button::Status::Active);
        assert_eq!(style.background, Some(Background::Color(WHITE)));
        let inactive = dot(false)(&Theme::Dark, button::Status::Active);
        assert_ne!(inactive.background, style.background);
    }
}
