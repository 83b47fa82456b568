// SPDX-License-Identifier: MPL-2.0
//! Navigation bar pinned to the top of the home page.
//!
//! The bar fades from black to transparent while the page sits at the top
//! and turns solid once it scrolls. Below [`COMPACT_BREAKPOINT`] the inline
//! links collapse into a menu button that toggles a dropdown panel. Links,
//! search, and notifications are inert.

use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use crate::ui::theme;
use iced::{
    alignment::{Horizontal, Vertical},
    font,
    widget::{button, Column, Container, Row, Space, Text},
    Element, Font, Length,
};

/// Window width (logical pixels) under which the compact layout is used.
pub const COMPACT_BREAKPOINT: f32 = 768.0;

/// Contextual data needed to render the navbar.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub menu_open: bool,
    /// Page has scrolled away from the top.
    pub scrolled: bool,
    pub compact: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavLink {
    Home,
    TvShows,
    Movies,
    NewAndPopular,
    MyList,
}

impl NavLink {
    pub const ALL: [NavLink; 5] = [
        NavLink::Home,
        NavLink::TvShows,
        NavLink::Movies,
        NavLink::NewAndPopular,
        NavLink::MyList,
    ];

    fn i18n_key(self) -> &'static str {
        match self {
            NavLink::Home => "navbar-link-home",
            NavLink::TvShows => "navbar-link-tv-shows",
            NavLink::Movies => "navbar-link-movies",
            NavLink::NewAndPopular => "navbar-link-new-popular",
            NavLink::MyList => "navbar-link-my-list",
        }
    }
}

/// Messages emitted by the navbar.
#[derive(Debug, Clone)]
pub enum Message {
    ToggleMenu,
    LinkPressed(NavLink),
    SearchPressed,
    NotificationsPressed,
}

/// Process a navbar message. Only the menu flag changes.
pub fn update(message: Message, menu_open: &mut bool) {
    match message {
        Message::ToggleMenu => {
            *menu_open = !*menu_open;
        }
        Message::LinkPressed(link) => {
            log::debug!("navbar link {link:?} pressed");
            *menu_open = false;
        }
        Message::SearchPressed | Message::NotificationsPressed => {
            log::debug!("inert navbar control pressed: {message:?}");
        }
    }
}

/// Whether the page's vertical offset calls for the solid background.
#[must_use]
pub fn is_scrolled(offset_y: f32) -> bool {
    offset_y > 0.0
}

#[must_use]
pub fn is_compact(window_width: f32) -> bool {
    window_width < COMPACT_BREAKPOINT
}

/// Render the navigation bar.
pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let mut content = Column::new().width(Length::Fill);
    content = content.push(build_top_bar(&ctx));

    if ctx.compact && ctx.menu_open {
        content = content.push(build_dropdown(&ctx));
    }

    let bar = Container::new(content).width(Length::Fill);
    if ctx.scrolled {
        bar.style(styles::container::navbar_solid).into()
    } else {
        bar.style(styles::container::navbar_gradient).into()
    }
}

fn build_top_bar<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let brand = Text::new(ctx.i18n.tr("navbar-brand"))
        .size(typography::TITLE_LG)
        .color(theme::brand_color())
        .font(Font {
            weight: font::Weight::Bold,
            ..Font::DEFAULT
        });

    let mut row = Row::new()
        .spacing(spacing::LG)
        .align_y(Vertical::Center)
        .push(brand);

    if ctx.compact {
        row = row.push(
            button(Text::new(ctx.i18n.tr("navbar-menu-button")).size(typography::BODY))
                .on_press(Message::ToggleMenu)
                .style(styles::button::link),
        );
    } else {
        let links = NavLink::ALL
            .iter()
            .fold(Row::new().spacing(spacing::MD), |links, link| {
                links.push(link_button(ctx.i18n, *link))
            });
        row = row.push(links);
    }

    let avatar = Container::new(Text::new(ctx.i18n.tr("navbar-avatar")).size(typography::BODY))
        .width(sizing::AVATAR)
        .height(sizing::AVATAR)
        .align_x(Horizontal::Center)
        .align_y(Vertical::Center)
        .style(styles::container::avatar);

    row = row
        .push(Space::new().width(Length::Fill))
        .push(
            button(Text::new(ctx.i18n.tr("navbar-search")).size(typography::BODY))
                .on_press(Message::SearchPressed)
                .style(styles::button::link),
        )
        .push(
            button(Text::new(ctx.i18n.tr("navbar-notifications")).size(typography::BODY))
                .on_press(Message::NotificationsPressed)
                .style(styles::button::link),
        )
        .push(avatar);

    Container::new(row)
        .width(Length::Fill)
        .height(sizing::NAVBAR_HEIGHT)
        .padding([0.0, spacing::XXL])
        .align_y(Vertical::Center)
        .into()
}

fn build_dropdown<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let items = NavLink::ALL.iter().fold(
        Column::new().spacing(spacing::XXS),
        |items, link| items.push(link_button(ctx.i18n, *link).width(Length::Fill)),
    );

    Container::new(items)
        .width(Length::Fill)
        .padding([spacing::XS, spacing::XXL])
        .style(styles::container::menu_panel)
        .into()
}

fn link_button<'a>(i18n: &I18n, link: NavLink) -> iced::widget::Button<'a, Message> {
    button(Text::new(i18n.tr(link.i18n_key())).size(typography::BODY))
        .on_press(Message::LinkPressed(link))
        .padding([spacing::XXS, 0.0])
        .style(styles::button::link)
}
