// SPDX-License-Identifier: MPL-2.0
//! Detail modal for the selected catalog item.
//!
//! The modal is open exactly while the page holds a selection. It closes on a
//! backdrop click, on the close control, or on Escape. Presses inside the
//! panel are absorbed and never reach the backdrop.

use crate::catalog::CatalogItem;
use crate::i18n::fluent::I18n;
use crate::media::ImageView;
use crate::ui::content_card::maturity_badge;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use crate::ui::theme;
use fluent_bundle::FluentValue;
use iced::widget::{
    button, center, image, mouse_area, opaque, Column, Container, Row, Scrollable, Stack, Text,
};
use iced::{
    alignment::{Horizontal, Vertical},
    event, keyboard, window, ContentFit, Element, Event as IcedEvent, Length, Subscription,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    BackdropPressed,
    ClosePressed,
    /// Press inside the panel; absorbed.
    PanelPressed,
    EscapePressed,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    None,
    Close,
}

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub item: &'a CatalogItem,
    pub backdrop: ImageView,
}

pub fn update(message: Message) -> Event {
    match message {
        Message::BackdropPressed | Message::ClosePressed | Message::EscapePressed => Event::Close,
        Message::PanelPressed => Event::None,
    }
}

/// Escape listener, present only while the modal is open.
pub fn subscription(open: bool) -> Subscription<Message> {
    if open {
        event::listen_with(escape_filter)
    } else {
        Subscription::none()
    }
}

fn escape_filter(
    event: IcedEvent,
    _status: event::Status,
    _window: window::Id,
) -> Option<Message> {
    match event {
        IcedEvent::Keyboard(keyboard::Event::KeyPressed {
            key: keyboard::Key::Named(keyboard::key::Named::Escape),
            ..
        }) => Some(Message::EscapePressed),
        _ => None,
    }
}

pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let panel = Container::new(Scrollable::new(
        Column::new()
            .push(header(ctx.i18n, ctx.item, ctx.backdrop))
            .push(body(ctx.i18n, ctx.item)),
    ))
    .max_width(sizing::MODAL_WIDTH)
    .style(styles::container::modal_panel);

    let panel = opaque(mouse_area(panel).on_press(Message::PanelPressed));

    let backdrop = center(panel)
        .padding(spacing::MD)
        .style(styles::container::modal_backdrop);

    opaque(mouse_area(backdrop).on_press(Message::BackdropPressed))
}

fn header<'a>(i18n: &I18n, item: &'a CatalogItem, backdrop: ImageView) -> Element<'a, Message> {
    let picture: Element<'a, Message> = match backdrop {
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
        ImageView::Failed => Container::new(Text::new(item.title.as_str()))
            .width(Length::Fill)
            .height(Length::Fill)
            .align_x(Horizontal::Center)
            .align_y(Vertical::Center)
            .style(styles::container::placeholder)
            .into(),
    };

    // Decorative action buttons: no handler, so presses land on the panel.
    let actions = Row::new()
        .spacing(spacing::SM)
        .align_y(Vertical::Center)
        .push(
            button(Text::new(format!("▶  {}", i18n.tr("modal-play-button"))))
                .padding([spacing::XS, spacing::XL])
                .style(styles::button::play),
        )
        .push(round_glyph("+"))
        .push(round_glyph("♥"));

    let overlay = Container::new(
        Column::new()
            .spacing(spacing::MD)
            .push(Text::new(item.title.as_str()).size(typography::DISPLAY))
            .push(actions),
    )
    .width(Length::Fill)
    .height(Length::Fill)
    .padding(spacing::XL)
    .align_y(Vertical::Bottom);

    let close = Container::new(
        button(
            Container::new(Text::new("✕").size(typography::BODY_LG))
                .center_x(Length::Fill)
                .center_y(Length::Fill),
        )
        .on_press(Message::ClosePressed)
        .width(sizing::ROUND_BUTTON)
        .height(sizing::ROUND_BUTTON)
        .style(styles::button::round),
    )
    .width(Length::Fill)
    .padding(spacing::MD)
    .align_x(Horizontal::Right);

    Stack::new()
        .width(Length::Fill)
        .height(sizing::MODAL_BACKDROP_HEIGHT)
        .push(picture)
        .push(overlay)
        .push(close)
        .into()
}

fn body<'a>(i18n: &I18n, item: &'a CatalogItem) -> Element<'a, Message> {
    let facts = Row::new()
        .spacing(spacing::SM)
        .align_y(Vertical::Center)
        .push(
            Text::new(i18n.tr_with_args(
                "match-percent",
                &[("percent", FluentValue::from(item.rating.value()))],
            ))
            .size(typography::BODY)
            .color(theme::match_text_color()),
        )
        .push(Text::new(item.release_year.to_string()).size(typography::BODY))
        .push(maturity_badge(item))
        .push(Text::new(item.duration.to_string()).size(typography::BODY));

    let synopsis = Column::new()
        .spacing(spacing::MD)
        .width(Length::FillPortion(2))
        .push(facts)
        .push(
            Text::new(item.description.as_str())
                .size(typography::BODY)
                .color(theme::body_text_color()),
        );

    let side = Column::new()
        .spacing(spacing::XS)
        .width(Length::FillPortion(1))
        .push(Text::new(genre_line(i18n, item)).size(typography::BODY))
        .push(Text::new(i18n.tr("modal-tags")).size(typography::BODY));

    Container::new(Row::new().spacing(spacing::XL).push(synopsis).push(side))
        .padding(spacing::XL)
        .into()
}

/// "Genres: a, b, c" in the active locale.
#[must_use]
pub fn genre_line(i18n: &I18n, item: &CatalogItem) -> String {
    let names: Vec<String> = item
        .genres
        .iter()
        .map(|genre| i18n.tr(genre.i18n_key()))
        .collect();
    i18n.tr_with_args(
        "modal-genres",
        &[("genres", FluentValue::from(names.join(", ")))],
    )
}

fn round_glyph<'a>(glyph: &'a str) -> Element<'a, Message> {
    button(
        Container::new(Text::new(glyph).size(typography::BODY_LG))
            .center_x(Length::Fill)
            .center_y(Length::Fill),
    )
    .width(sizing::BUTTON_HEIGHT)
    .height(sizing::BUTTON_HEIGHT)
    .style(styles::button::round)
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Genre;
    use crate::config::Config;
    use crate::test_utils::seeded_catalog;

    fn key_event(key: keyboard::Key) -> IcedEvent {
        IcedEvent::Keyboard(keyboard::Event::KeyPressed {
            key: key.clone(),
            modified_key: key,
            physical_key: keyboard::key::Physical::Code(keyboard::key::Code::Escape),
            location: keyboard::Location::Standard,
            modifiers: keyboard::Modifiers::default(),
            text: None,
            repeat: false,
        })
    }

    #[test]
    fn backdrop_and_close_control_close() {
        assert_eq!(update(Message::BackdropPressed), Event::Close);
        assert_eq!(update(Message::ClosePressed), Event::Close);
    }

    #[test]
    fn escape_closes() {
        assert_eq!(update(Message::EscapePressed), Event::Close);
    }

    #[test]
    fn panel_press_does_not_close() {
        assert_eq!(update(Message::PanelPressed), Event::None);
    }

    #[test]
    fn escape_filter_maps_only_escape() {
        let escape = key_event(keyboard::Key::Named(keyboard::key::Named::Escape));
        assert_eq!(
            escape_filter(escape, event::Status::Ignored, window::Id::unique()),
            Some(Message::EscapePressed)
        );

        let enter = key_event(keyboard::Key::Named(keyboard::key::Named::Enter));
        assert_eq!(
            escape_filter(enter, event::Status::Ignored, window::Id::unique()),
            None
        );
    }

    #[test]
    fn genre_line_joins_translated_names() {
        let i18n = I18n::new(Some("en-US".to_string()), &Config::default());
        let mut item = seeded_catalog().featured[0].clone();
        item.genres = vec![Genre::Drama, Genre::Thriller, Genre::SciFi];
        assert_eq!(genre_line(&i18n, &item), "Genres: Drama, Thriller, Sci-Fi");
    }

    #[test]
    fn modal_view_renders() {
        let i18n = I18n::default();
        let catalog = seeded_catalog();
        for backdrop in [ImageView::Loading, ImageView::Failed] {
            let _element = view(ViewContext {
                i18n: &i18n,
                item: &catalog.featured[0],
                backdrop,
            });
        }
    }
}
