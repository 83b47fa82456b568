// SPDX-License-Identifier: MPL-2.0
//! Full-width banner cycling through the featured items.
//!
//! The banner advances on a timer subscription that only exists while there
//! is more than one featured item. Selector dots jump straight to an item;
//! they do not restart the timer, so the next automatic advance happens on
//! the original cadence.

use crate::catalog::CatalogItem;
use crate::config::HERO_MAX_DOTS;
use crate::i18n::fluent::I18n;
use crate::media::ImageView;
use crate::ui::content_card::maturity_badge;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::state::{Carousel, HeroInterval};
use crate::ui::styles;
use crate::ui::theme;
use fluent_bundle::FluentValue;
use iced::widget::{button, image, Column, Container, Row, Space, Stack, Text};
use iced::{
    alignment::{Horizontal, Vertical},
    time, ContentFit, Element, Length, Subscription,
};

/// Characters of description shown before the ellipsis.
pub const DESCRIPTION_BUDGET: usize = 150;

#[derive(Debug, Clone)]
pub enum Message {
    AutoAdvance,
    SelectDot(usize),
    PlayPressed,
    MoreInfoPressed,
}

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub items: &'a [CatalogItem],
    /// Backdrop of the current item.
    pub backdrop: ImageView,
}

#[derive(Debug, Clone, Default)]
pub struct State {
    carousel: Carousel,
    interval: HeroInterval,
}

impl State {
    #[must_use]
    pub fn new(len: usize, interval: HeroInterval) -> Self {
        Self {
            carousel: Carousel::new(len),
            interval,
        }
    }

    /// Index of the highlighted item, `None` with no featured items.
    #[must_use]
    pub fn current(&self) -> Option<usize> {
        self.carousel.current()
    }

    pub fn update(&mut self, message: Message) {
        match message {
            Message::AutoAdvance => self.carousel.advance(),
            Message::SelectDot(index) => {
                self.carousel.select(index);
            }
            Message::PlayPressed | Message::MoreInfoPressed => {
                log::debug!("inert hero control pressed: {message:?}");
            }
        }
    }

    /// Auto-advance timer, absent when there is nothing to rotate.
    pub fn subscription(&self) -> Subscription<Message> {
        if self.carousel.rotates() {
            time::every(self.interval.as_duration()).map(|_| Message::AutoAdvance)
        } else {
            Subscription::none()
        }
    }

    pub fn view<'a>(&self, ctx: ViewContext<'a>) -> Element<'a, Message> {
        let Some(item) = self.current().and_then(|index| ctx.items.get(index)) else {
            return Space::new().width(Length::Fill).height(0.0).into();
        };

        let label = backdrop_label(ctx.i18n, &ctx.backdrop).unwrap_or_default();
        let backdrop: Element<'a, Message> = match ctx.backdrop {
            ImageView::Ready(handle) => image(handle)
                .width(Length::Fill)
                .height(Length::Fill)
                .content_fit(ContentFit::Cover)
                .into(),
            ImageView::Loading | ImageView::Failed => {
                Container::new(
                    Text::new(label)
                        .size(typography::BODY)
                        .color(theme::muted_text_color()),
                )
                .width(Length::Fill)
                .height(Length::Fill)
                .padding([sizing::NAVBAR_HEIGHT + spacing::LG, spacing::XXL])
                .align_x(Horizontal::Right)
                .align_y(Vertical::Top)
                .style(styles::container::placeholder)
                .into()
            }
        };

        let scrim = Container::new(Text::new(""))
            .width(Length::Fill)
            .height(Length::Fill)
            .style(styles::container::hero_scrim);

        let details = Container::new(self.details(ctx.i18n, item))
            .width(Length::Fill)
            .height(Length::Fill)
            .padding([spacing::XXL * 2.0, spacing::XXL])
            .align_y(Vertical::Bottom);

        let dots = Container::new(self.dots(ctx.items.len()))
            .width(Length::Fill)
            .height(Length::Fill)
            .padding(spacing::LG)
            .align_x(Horizontal::Center)
            .align_y(Vertical::Bottom);

        Stack::new()
            .width(Length::Fill)
            .height(sizing::HERO_HEIGHT)
            .push(backdrop)
            .push(scrim)
            .push(details)
            .push(dots)
            .into()
    }

    fn details<'a>(&self, i18n: &I18n, item: &'a CatalogItem) -> Element<'a, Message> {
        let facts = Row::new()
            .spacing(spacing::SM)
            .align_y(Vertical::Center)
            .push(
                Text::new(i18n.tr_with_args(
                    "match-percent",
                    &[("percent", FluentValue::from(item.rating.value()))],
                ))
                .size(typography::BODY_LG)
                .color(theme::match_text_color()),
            )
            .push(maturity_badge(item))
            .push(Text::new(item.release_year.to_string()).size(typography::BODY_LG))
            .push(Text::new(item.duration.to_string()).size(typography::BODY_LG));

        let buttons = Row::new()
            .spacing(spacing::SM)
            .push(
                button(Text::new(format!("▶  {}", i18n.tr("hero-play-button"))))
                    .on_press(Message::PlayPressed)
                    .padding([spacing::XS, spacing::LG])
                    .style(styles::button::play),
            )
            .push(
                button(Text::new(i18n.tr("hero-more-info-button")))
                    .on_press(Message::MoreInfoPressed)
                    .padding([spacing::XS, spacing::LG])
                    .style(styles::button::secondary),
            );

        Column::new()
            .spacing(spacing::MD)
            .max_width(sizing::HERO_TEXT_WIDTH)
            .push(Text::new(item.title.as_str()).size(typography::DISPLAY))
            .push(facts)
            .push(
                Text::new(truncate_description(&item.description, DESCRIPTION_BUDGET))
                    .size(typography::BODY_LG)
                    .color(theme::body_text_color()),
            )
            .push(buttons)
            .into()
    }

    fn dots<'a>(&self, len: usize) -> Element<'a, Message> {
        let active = self.current();
        (0..len.min(HERO_MAX_DOTS))
            .fold(Row::new().spacing(spacing::XS), |row, index| {
                row.push(
                    button(Space::new().width(0.0).height(0.0))
                        .on_press(Message::SelectDot(index))
                        .width(sizing::HERO_DOT)
                        .height(sizing::HERO_DOT)
                        .style(styles::button::dot(active == Some(index))),
                )
            })
            .into()
    }
}

/// Shortens `text` to at most `budget` characters, cutting at a word
/// boundary and appending an ellipsis when anything was removed.
#[must_use]
pub fn truncate_description(text: &str, budget: usize) -> String {
    if text.chars().count() <= budget {
        return text.to_string();
    }

    let cut: String = text.chars().take(budget).collect();
    let trimmed = match cut.rfind(char::is_whitespace) {
        Some(boundary) if boundary > 0 => &cut[..boundary],
        _ => cut.as_str(),
    };
    format!(
        "{}…",
        trimmed.trim_end_matches(|c: char| c.is_whitespace() || c == ',')
    )
}

/// Text drawn over the backdrop surface when no image can be shown.
fn backdrop_label(i18n: &I18n, backdrop: &ImageView) -> Option<String> {
    backdrop
        .is_failed()
        .then(|| i18n.tr("image-placeholder-unavailable"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::seeded_catalog;

    #[test]
    fn auto_advance_wraps_around() {
        let mut state = State::new(5, HeroInterval::default());
        for ticks in 1..=7 {
            state.update(Message::AutoAdvance);
            assert_eq!(state.current(), Some(ticks % 5));
        }
    }

    #[test]
    fn dot_selects_item_immediately() {
        let mut state = State::new(5, HeroInterval::default());
        state.update(Message::SelectDot(3));
        assert_eq!(state.current(), Some(3));
        state.update(Message::AutoAdvance);
        assert_eq!(state.current(), Some(4));
    }

    #[test]
    fn inert_buttons_keep_index() {
        let mut state = State::new(5, HeroInterval::default());
        state.update(Message::SelectDot(2));
        state.update(Message::PlayPressed);
        state.update(Message::MoreInfoPressed);
        assert_eq!(state.current(), Some(2));
    }

    #[test]
    fn empty_banner_has_no_current_item() {
        let state = State::new(0, HeroInterval::default());
        assert_eq!(state.current(), None);
    }

    #[test]
    fn truncate_keeps_short_text() {
        assert_eq!(truncate_description("Short plot.", 50), "Short plot.");
    }

    #[test]
    fn truncate_cuts_at_word_boundary() {
        let text = "When a young boy vanishes, a small town uncovers a mystery";
        let shortened = truncate_description(text, 30);
        assert_eq!(shortened, "When a young boy vanishes, a…");
        assert!(shortened.chars().count() <= 31);
    }

    #[test]
    fn truncate_handles_multibyte_text() {
        let text = "é".repeat(40);
        let shortened = truncate_description(&text, 10);
        assert_eq!(shortened, format!("{}…", "é".repeat(10)));
    }

    #[test]
    fn failed_backdrop_gets_a_visible_label() {
        let i18n = I18n::new(Some("en-US".to_string()), &crate::config::Config::default());
        assert_eq!(
            backdrop_label(&i18n, &ImageView::Failed).as_deref(),
            Some("Image unavailable")
        );
        assert_eq!(backdrop_label(&i18n, &ImageView::Loading), None);
    }

    #[test]
    fn hero_view_renders_with_and_without_items() {
        let catalog = seeded_catalog();
        let i18n = I18n::default();
        let state = State::new(catalog.featured.len(), HeroInterval::default());
        let _element = state.view(ViewContext {
            i18n: &i18n,
            items: &catalog.featured,
            backdrop: ImageView::Failed,
        });

        let empty = State::new(0, HeroInterval::default());
        let _nothing = empty.view(ViewContext {
            i18n: &i18n,
            items: &[],
            backdrop: ImageView::Loading,
        });
    }
}
