// SPDX-License-Identifier: MPL-2.0
//! Horizontally scrolling row of content cards for one category.
//!
//! The scrollbar is hidden; paging happens through the left/right arrows,
//! which are only drawn while the pointer is over the row and only when
//! there is content in that direction. An arrow click starts an eased
//! scroll that the page drives with [`State::animate`] on every frame tick.

use crate::catalog::{Category, ItemId};
use crate::config::RowsConfig;
use crate::i18n::fluent::I18n;
use crate::media::ImageStore;
use crate::ui::content_card;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::state::{ArrowVisibility, ScrollAnimation, ScrollDirection, ScrollMetrics};
use crate::ui::styles;
use iced::widget::operation;
use iced::widget::scrollable::{Direction, RelativeOffset, Scrollbar, Viewport};
use iced::widget::{button, mouse_area, Column, Container, Id, Row, Scrollable, Stack, Text};
use iced::{
    alignment::{Horizontal, Vertical},
    Element, Length, Task,
};
use std::time::{Duration, Instant};

#[derive(Debug, Clone)]
pub enum Message {
    Scrolled(ScrollMetrics),
    ScrollLeft,
    ScrollRight,
    PointerEntered,
    PointerExited,
    Card {
        index: usize,
        message: content_card::Message,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    None,
    Selected(ItemId),
}

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub category: &'a Category,
    pub images: &'a ImageStore,
}

#[derive(Debug, Clone)]
pub struct State {
    scrollable_id: Id,
    items: Vec<ItemId>,
    cards: Vec<content_card::State>,
    /// Last metrics reported by the scrollable, `None` before the first report.
    metrics: Option<ScrollMetrics>,
    arrows: ArrowVisibility,
    hovered: bool,
    animation: Option<ScrollAnimation>,
    page_fraction: f32,
    animation_duration: Duration,
    /// Window width, used as the viewport estimate until the first report.
    viewport_hint: f32,
}

impl State {
    #[must_use]
    pub fn new(category: &Category, config: &RowsConfig, viewport_hint: f32) -> Self {
        let items: Vec<ItemId> = category.items.iter().map(|item| item.id).collect();
        let mut state = Self {
            scrollable_id: Id::unique(),
            cards: vec![content_card::State::default(); items.len()],
            items,
            metrics: None,
            arrows: ArrowVisibility::default(),
            hovered: false,
            animation: None,
            page_fraction: config.page_fraction(),
            animation_duration: config.animation_duration(),
            viewport_hint,
        };
        state.arrows = state.current_metrics().arrows();
        state
    }

    #[must_use]
    pub fn arrows(&self) -> ArrowVisibility {
        self.arrows
    }

    #[must_use]
    pub fn is_hovered(&self) -> bool {
        self.hovered
    }

    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.animation.is_some()
    }

    /// Updates the viewport estimate; arrows follow it until the
    /// scrollable reports real metrics.
    pub fn set_viewport_hint(&mut self, width: f32) {
        self.viewport_hint = width;
        if self.metrics.is_none() {
            self.arrows = self.current_metrics().arrows();
        }
    }

    pub fn update(&mut self, message: Message) -> (Event, Task<Message>) {
        match message {
            Message::Scrolled(metrics) => {
                self.metrics = Some(metrics);
                self.arrows = metrics.arrows();
                (Event::None, Task::none())
            }
            Message::ScrollLeft => (
                Event::None,
                self.scroll(ScrollDirection::Left, Instant::now()),
            ),
            Message::ScrollRight => (
                Event::None,
                self.scroll(ScrollDirection::Right, Instant::now()),
            ),
            Message::PointerEntered => {
                self.hovered = true;
                (Event::None, Task::none())
            }
            Message::PointerExited => {
                self.hovered = false;
                (Event::None, Task::none())
            }
            Message::Card { index, message } => {
                let (Some(card), Some(item_id)) =
                    (self.cards.get_mut(index), self.items.get(index))
                else {
                    return (Event::None, Task::none());
                };
                match card.update(message, *item_id) {
                    content_card::Event::None => (Event::None, Task::none()),
                    content_card::Event::Selected(id) => (Event::Selected(id), Task::none()),
                }
            }
        }
    }

    /// Starts paging in `direction`. Repeated clicks chain from the pending
    /// target rather than from the current frame.
    pub fn scroll(&mut self, direction: ScrollDirection, now: Instant) -> Task<Message> {
        let mut metrics = self.current_metrics();
        let from = match &self.animation {
            Some(animation) => {
                let current = animation.sample(now);
                metrics.offset = animation.target();
                current
            }
            None => metrics.offset,
        };
        let target = metrics.step_target(direction, self.page_fraction);

        if self.animation_duration.is_zero() {
            self.animation = None;
            return self.snap(target);
        }

        self.animation = Some(ScrollAnimation::new(
            from,
            target,
            now,
            self.animation_duration,
        ));
        Task::none()
    }

    /// Advances the in-flight animation to `now`.
    pub fn animate(&mut self, now: Instant) -> Task<Message> {
        let Some(animation) = self.animation else {
            return Task::none();
        };

        let offset = animation.sample(now);
        if animation.is_finished(now) {
            self.animation = None;
        }
        self.snap(offset)
    }

    fn snap(&mut self, offset: f32) -> Task<Message> {
        let mut metrics = self.current_metrics();
        let relative = metrics.relative(offset);
        metrics.offset = offset.clamp(0.0, metrics.max_offset());
        self.metrics = Some(metrics);
        self.arrows = metrics.arrows();

        operation::snap_to(
            self.scrollable_id.clone(),
            RelativeOffset {
                x: relative,
                y: 0.0,
            },
        )
    }

    fn current_metrics(&self) -> ScrollMetrics {
        self.metrics.unwrap_or_else(|| {
            ScrollMetrics::new(0.0, estimated_content_width(self.items.len()), self.viewport_hint)
        })
    }

    pub fn view<'a>(&self, ctx: ViewContext<'a>) -> Element<'a, Message> {
        let cards = ctx
            .category
            .items
            .iter()
            .zip(&self.cards)
            .enumerate()
            .fold(
                Row::new()
                    .spacing(sizing::CARD_GAP)
                    .align_y(Vertical::Center)
                    .padding([0.0, sizing::ROW_HORIZONTAL_PADDING]),
                |row, (index, (item, card))| {
                    let card_view = card.view(content_card::ViewContext {
                        i18n: ctx.i18n,
                        item,
                        poster: ctx.images.get(&item.poster_url),
                    });
                    row.push(card_view.map(move |message| Message::Card { index, message }))
                },
            );

        let strip = Container::new(cards)
            .height(sizing::CARD_HEIGHT * sizing::CARD_HOVER_SCALE)
            .align_y(Vertical::Center);

        let scroller = Scrollable::new(strip)
            .id(self.scrollable_id.clone())
            .width(Length::Fill)
            .direction(Direction::Horizontal(Scrollbar::hidden()))
            .on_scroll(|viewport: Viewport| {
                Message::Scrolled(ScrollMetrics::new(
                    viewport.absolute_offset().x,
                    viewport.content_bounds().width,
                    viewport.bounds().width,
                ))
            });

        let mut stack = Stack::new().width(Length::Fill).push(scroller);

        if self.hovered {
            if self.arrows.left {
                stack = stack.push(arrow("◀", Message::ScrollLeft, Horizontal::Left));
            }
            if self.arrows.right {
                stack = stack.push(arrow("▶", Message::ScrollRight, Horizontal::Right));
            }
        }

        let title = Container::new(
            Text::new(ctx.category.title.as_str()).size(typography::TITLE_MD),
        )
        .padding([0.0, sizing::ROW_HORIZONTAL_PADDING]);

        Column::new()
            .spacing(spacing::XS)
            .push(title)
            .push(
                mouse_area(stack)
                    .on_enter(Message::PointerEntered)
                    .on_exit(Message::PointerExited),
            )
            .into()
    }
}

fn arrow<'a>(glyph: &'a str, message: Message, side: Horizontal) -> Element<'a, Message> {
    let control = button(
        Container::new(Text::new(glyph).size(typography::TITLE_LG))
            .height(Length::Fill)
            .align_y(Vertical::Center),
    )
    .on_press(message)
    .width(sizing::ROW_ARROW_WIDTH)
    .height(Length::Fill)
    .style(styles::button::row_arrow);

    Container::new(control)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(side)
        .into()
}

/// Width of a row of `count` resting cards including the side padding.
#[must_use]
pub fn estimated_content_width(count: usize) -> f32 {
    if count == 0 {
        return 0.0;
    }
    let count = count as f32;
    count * sizing::CARD_WIDTH
        + (count - 1.0) * sizing::CARD_GAP
        + 2.0 * sizing::ROW_HORIZONTAL_PADDING
}
