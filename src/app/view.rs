// SPDX-License-Identifier: MPL-2.0
//! View rendering for the home page.
//!
//! Layers, bottom to top: the vertically scrolling page (hero, rows,
//! footer), the navbar, and the detail modal when a selection exists.

use super::Message;
use crate::catalog::{Catalog, ItemId};
use crate::i18n::fluent::I18n;
use crate::media::ImageStore;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::{content_row, hero_banner, movie_modal, navbar, styles, theme};
use iced::widget::scrollable::Viewport;
use iced::widget::{Column, Container, Scrollable, Stack, Text};
use iced::{alignment::Horizontal, Element, Length};

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub catalog: &'a Catalog,
    pub hero: &'a hero_banner::State,
    pub rows: &'a [content_row::State],
    pub images: &'a ImageStore,
    pub selection: Option<ItemId>,
    pub menu_open: bool,
    pub page_offset: f32,
    pub window_width: f32,
}

pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let mut stack = Stack::new()
        .width(Length::Fill)
        .height(Length::Fill)
        .push(view_page(&ctx))
        .push(
            navbar::view(navbar::ViewContext {
                i18n: ctx.i18n,
                menu_open: ctx.menu_open,
                scrolled: navbar::is_scrolled(ctx.page_offset),
                compact: navbar::is_compact(ctx.window_width),
            })
            .map(Message::Navbar),
        );

    if let Some(item) = ctx.selection.and_then(|id| ctx.catalog.find(id)) {
        stack = stack.push(
            movie_modal::view(movie_modal::ViewContext {
                i18n: ctx.i18n,
                item,
                backdrop: ctx.images.get(&item.backdrop_url),
            })
            .map(Message::Modal),
        );
    }

    stack.into()
}

fn view_page<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let backdrop = ctx
        .hero
        .current()
        .and_then(|index| ctx.catalog.featured.get(index))
        .map(|item| ctx.images.get(&item.backdrop_url))
        .unwrap_or(crate::media::ImageView::Loading);

    let hero = ctx
        .hero
        .view(hero_banner::ViewContext {
            i18n: ctx.i18n,
            items: &ctx.catalog.featured,
            backdrop,
        })
        .map(Message::Hero);

    let rows = ctx.rows.iter().zip(&ctx.catalog.categories).enumerate().fold(
        Column::new().spacing(spacing::LG),
        |column, (index, (row, category))| {
            column.push(
                row.view(content_row::ViewContext {
                    i18n: ctx.i18n,
                    category,
                    images: ctx.images,
                })
                .map(move |message| Message::Row { index, message }),
            )
        },
    );

    let footer = Container::new(
        Text::new(ctx.i18n.tr("footer-notice"))
            .size(typography::CAPTION)
            .color(theme::muted_text_color()),
    )
    .width(Length::Fill)
    .padding(spacing::XXL)
    .align_x(Horizontal::Center);

    let content = Column::new()
        .width(Length::Fill)
        .spacing(spacing::LG)
        .push(hero)
        .push(rows)
        .push(footer);

    let page = Scrollable::new(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .on_scroll(|viewport: Viewport| Message::PageScrolled(viewport.absolute_offset().y));

    Container::new(page)
        .width(Length::Fill)
        .height(Length::Fill)
        .style(styles::container::page)
        .into()
}
