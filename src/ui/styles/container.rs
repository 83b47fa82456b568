// SPDX-License-Identifier: MPL-2.0
//! Container styles.

use crate::ui::design_tokens::{
    opacity,
    palette::{self, BLACK, WHITE},
    radius, shadow,
};
use iced::gradient::Linear;
use iced::widget::container;
use iced::{Background, Border, Color, Degrees, Gradient, Theme};

/// Page background behind everything.
pub fn page(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(palette::PAGE_900)),
        text_color: Some(WHITE),
        ..Default::default()
    }
}

/// Solid navbar once the page has scrolled.
pub fn navbar_solid(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(palette::PAGE_900)),
        text_color: Some(WHITE),
        ..Default::default()
    }
}

/// Top-of-page navbar: black fading to transparent.
pub fn navbar_gradient(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(top_fade(opacity::OVERLAY_STRONG)),
        text_color: Some(WHITE),
        ..Default::default()
    }
}

/// Shade over the hero backdrop so the text stays readable.
pub fn hero_scrim(_theme: &Theme) -> container::Style {
    let gradient = Linear::new(Degrees(90.0))
        .add_stop(0.0, Color {
            a: opacity::OVERLAY_HOVER,
            ..BLACK
        })
        .add_stop(0.6, Color {
            a: opacity::TRANSPARENT,
            ..BLACK
        });

    container::Style {
        background: Some(Background::Gradient(Gradient::Linear(gradient))),
        text_color: Some(WHITE),
        ..Default::default()
    }
}

/// Dimmed layer behind the detail modal.
pub fn modal_backdrop(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(Color {
            a: opacity::OVERLAY_STRONG,
            ..BLACK
        })),
        ..Default::default()
    }
}

/// Detail modal surface.
pub fn modal_panel(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(palette::SURFACE_850)),
        text_color: Some(WHITE),
        border: Border {
            radius: radius::MD.into(),
            ..Default::default()
        },
        shadow: shadow::LG,
        ..Default::default()
    }
}

/// Surface shown while an image loads, or instead of one that failed.
pub fn placeholder(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(palette::GRAY_800)),
        text_color: Some(palette::GRAY_400),
        border: Border {
            radius: radius::SM.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Detail strip revealed on a hovered card.
pub fn card_overlay(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(bottom_fade(opacity::OVERLAY_PRESSED)),
        text_color: Some(WHITE),
        ..Default::default()
    }
}

/// Outlined maturity rating badge.
pub fn badge(_theme: &Theme) -> container::Style {
    container::Style {
        text_color: Some(palette::GRAY_200),
        border: Border {
            color: palette::GRAY_400,
            width: 1.0,
            radius: radius::NONE.into(),
        },
        ..Default::default()
    }
}

/// Red square behind the avatar initial.
pub fn avatar(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(palette::BRAND_RED)),
        text_color: Some(WHITE),
        border: Border {
            radius: radius::SM.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Dropdown panel of the compact navbar.
pub fn menu_panel(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(Color {
            a: opacity::OVERLAY_PRESSED,
            ..BLACK
        })),
        text_color: Some(WHITE),
        border: Border {
            color: palette::GRAY_800,
            width: 1.0,
            radius: radius::NONE.into(),
        },
        ..Default::default()
    }
}

fn top_fade(alpha: f32) -> Background {
    let gradient = Linear::new(Degrees(180.0))
        .add_stop(0.0, Color { a: alpha, ..BLACK })
        .add_stop(1.0, Color {
            a: opacity::TRANSPARENT,
            ..BLACK
        });
    Background::Gradient(Gradient::Linear(gradient))
}

fn bottom_fade(alpha: f32) -> Background {
    let gradient = Linear::new(Degrees(0.0))
        .add_stop(0.0, Color { a: alpha, ..BLACK })
        .add_stop(1.0, Color {
            a: opacity::OVERLAY_SUBTLE,
            ..BLACK
        });
    Background::Gradient(Gradient::Linear(gradient))
}
