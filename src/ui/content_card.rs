// SPDX-License-Identifier: MPL-2.0
//! Poster card shown inside a content row.
//!
//! Hovering grows the card and reveals a detail strip with the title, inert
//! action glyphs, the rating and the maturity badge. Pressing anywhere on the
//! card selects its item.

use crate::catalog::{CatalogItem, ItemId};
use crate::i18n::fluent::I18n;
use crate::media::ImageView;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use crate::ui::theme;
use fluent_bundle::FluentValue;
use iced::widget::{image, mouse_area, Column, Container, Row, Stack, Text};
use iced::{
    alignment::{Horizontal, Vertical},
    ContentFit, Element, Length,
};

/// Local card state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct State {
    hovered: bool,
}

#[derive(Debug, Clone)]
pub enum Message {
    PointerEntered,
    PointerExited,
    Pressed,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    None,
    Selected(ItemId),
}

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub item: &'a CatalogItem,
    pub poster: ImageView,
}

impl State {
    #[must_use]
    pub fn is_hovered(&self) -> bool {
        self.hovered
    }

    pub fn update(&mut self, message: Message, item_id: ItemId) -> Event {
        match message {
            Message::PointerEntered => {
                self.hovered = true;
                Event::None
            }
            Message::PointerExited => {
                self.hovered = false;
                Event::None
            }
            Message::Pressed => Event::Selected(item_id),
        }
    }

    /// Card footprint for the current hover state.
    #[must_use]
    pub fn size(&self) -> (f32, f32) {
        if self.hovered {
            (
                sizing::CARD_WIDTH * sizing::CARD_HOVER_SCALE,
                sizing::CARD_HEIGHT * sizing::CARD_HOVER_SCALE,
            )
        } else {
            (sizing::CARD_WIDTH, sizing::CARD_HEIGHT)
        }
    }

    pub fn view<'a>(&self, ctx: ViewContext<'a>) -> Element<'a, Message> {
        let (width, height) = self.size();

        let mut stack = Stack::new()
            .width(width)
            .height(height)
            .push(poster(ctx.item, ctx.poster));

        if self.hovered {
            stack = stack.push(hover_details(ctx.i18n, ctx.item));
        }

        mouse_area(stack)
            .on_enter(Message::PointerEntered)
            .on_exit(Message::PointerExited)
            .on_press(Message::Pressed)
            .into()
    }
}

fn poster<'a>(item: &'a CatalogItem, view: ImageView) -> Element<'a, Message> {
    match view {
        ImageView::Ready(handle) => image(handle)
            .width(Length::Fill)
            .height(Length::Fill)
            .content_fit(ContentFit::Cover)
            .into(),
        ImageView::Loading => Container::new(Text::new(""))
            .width(Length::Fill)
            .height(Length::Fill)
            .style(styles::container::placeholder)
            .into(),
        ImageView::Failed => {
            Container::new(Text::new(item.title.as_str()).size(typography::BODY))
                .width(Length::Fill)
                .height(Length::Fill)
                .padding(spacing::XS)
                .align_x(Horizontal::Center)
                .align_y(Vertical::Center)
                .style(styles::container::placeholder)
                .into()
        }
    }
}

fn hover_details<'a>(i18n: &I18n, item: &'a CatalogItem) -> Element<'a, Message> {
    // Glyphs are decorative: presses fall through to the card.
    let actions = ["▶", "+", "♥", "▾"].iter().fold(
        Row::new().spacing(spacing::XS),
        |row, glyph| {
            row.push(
                Container::new(Text::new(*glyph).size(typography::CAPTION))
                    .padding([spacing::XXS, spacing::XS])
                    .style(styles::container::badge),
            )
        },
    );

    let rating = Text::new(i18n.tr_with_args(
        "card-rating",
        &[("percent", FluentValue::from(item.rating.value()))],
    ))
    .size(typography::CAPTION)
    .color(theme::match_text_color());

    let facts = Row::new()
        .spacing(spacing::XS)
        .align_y(Vertical::Center)
        .push(rating)
        .push(maturity_badge(item));

    let details = Column::new()
        .spacing(spacing::XS)
        .push(Text::new(item.title.as_str()).size(typography::BODY))
        .push(actions)
        .push(facts);

    Container::new(details)
        .width(Length::Fill)
        .height(Length::Fill)
        .padding(spacing::XS)
        .align_y(Vertical::Bottom)
        .style(styles::container::card_overlay)
        .into()
}

/// Outlined maturity badge shared by the card, hero and modal.
pub fn maturity_badge<'a, M: 'a>(item: &CatalogItem) -> Element<'a, M> {
    Container::new(Text::new(item.maturity_rating.label()).size(typography::CAPTION))
        .padding([0.0, spacing::XXS])
        .style(styles::container::badge)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::seeded_catalog;

    #[test]
    fn pointer_enter_and_exit_toggle_hover() {
        let mut state = State::default();
        assert_eq!(state.update(Message::PointerEntered, ItemId(1)), Event::None);
        assert!(state.is_hovered());
        assert_eq!(state.update(Message::PointerExited, ItemId(1)), Event::None);
        assert!(!state.is_hovered());
    }

    #[test]
    fn press_selects_item() {
        let mut state = State::default();
        let event = state.update(Message::Pressed, ItemId(42));
        assert_eq!(event, Event::Selected(ItemId(42)));
    }

    #[test]
    fn hovered_card_grows() {
        let mut state = State::default();
        let (width, height) = state.size();
        state.update(Message::PointerEntered, ItemId(1));
        let (hover_width, hover_height) = state.size();
        assert!(hover_width > width);
        assert!(hover_height > height);
    }

    #[test]
    fn card_view_renders_every_image_state() {
        let i18n = I18n::default();
        let catalog = seeded_catalog();
        let item = &catalog.categories[0].items[0];
        let handle = image::Handle::from_rgba(1, 1, vec![0, 0, 0, 255]);

        for poster in [ImageView::Loading, ImageView::Failed, ImageView::Ready(handle)] {
            let mut state = State::default();
            let _element = state.view(ViewContext {
                i18n: &i18n,
                item,
                poster: poster.clone(),
            });
            state.update(Message::PointerEntered, item.id);
            let _hovered = state.view(ViewContext {
                i18n: &i18n,
                item,
                poster,
            });
        }
    }
}
