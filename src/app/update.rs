// SPDX-License-Identifier: MPL-2.0
//! Message handlers for the application.
//!
//! Components report intent through their `Event` values; only these
//! handlers write the selection.

use super::Message;
use crate::catalog::{Catalog, ItemId};
use crate::error::Error;
use crate::media::{ImageLoader, ImageStore};
use crate::ui::{content_row, movie_modal, navbar};
use iced::widget::image;
use iced::{Size, Task};
use std::time::Instant;

/// Mutable slices of the application state handed to the handlers.
pub struct UpdateContext<'a> {
    pub catalog: &'a Catalog,
    pub selection: &'a mut Option<ItemId>,
    pub images: &'a mut ImageStore,
    pub loader: &'a ImageLoader,
}

/// Starts fetching `url` unless it is already known to the store.
pub fn request_image(images: &mut ImageStore, loader: &ImageLoader, url: &str) -> Task<Message> {
    if !images.request(url) {
        return Task::none();
    }

    let url = url.to_string();
    let loader = loader.clone();
    Task::perform(loader.fetch(url.clone()), move |result| Message::ImageLoaded {
        url,
        result,
    })
}

pub fn handle_row_message(
    ctx: &mut UpdateContext<'_>,
    rows: &mut [content_row::State],
    index: usize,
    message: content_row::Message,
) -> Task<Message> {
    let Some(row) = rows.get_mut(index) else {
        return Task::none();
    };

    let (event, task) = row.update(message);
    let task = task.map(move |message| Message::Row { index, message });

    match event {
        content_row::Event::None => task,
        content_row::Event::Selected(id) => Task::batch([task, select(ctx, id)]),
    }
}

/// Opens the modal on `id` and fetches its backdrop.
pub fn select(ctx: &mut UpdateContext<'_>, id: ItemId) -> Task<Message> {
    let Some(item) = ctx.catalog.find(id) else {
        log::warn!("ignoring selection of unknown item {id}");
        return Task::none();
    };

    *ctx.selection = Some(id);
    request_image(ctx.images, ctx.loader, &item.backdrop_url)
}

pub fn handle_modal_message(
    ctx: &mut UpdateContext<'_>,
    message: movie_modal::Message,
) -> Task<Message> {
    match movie_modal::update(message) {
        movie_modal::Event::Close => *ctx.selection = None,
        movie_modal::Event::None => {}
    }
    Task::none()
}

pub fn handle_navbar_message(menu_open: &mut bool, message: navbar::Message) -> Task<Message> {
    navbar::update(message, menu_open);
    Task::none()
}

pub fn handle_window_resized(
    window_size: &mut Size,
    menu_open: &mut bool,
    rows: &mut [content_row::State],
    size: Size,
) -> Task<Message> {
    *window_size = size;
    if !navbar::is_compact(size.width) {
        *menu_open = false;
    }
    for row in rows {
        row.set_viewport_hint(size.width);
    }
    Task::none()
}

pub fn handle_animation_frame(rows: &mut [content_row::State], now: Instant) -> Task<Message> {
    Task::batch(rows.iter_mut().enumerate().map(|(index, row)| {
        row.animate(now)
            .map(move |message| Message::Row { index, message })
    }))
}

pub fn handle_image_loaded(
    images: &mut ImageStore,
    url: &str,
    result: Result<image::Handle, Error>,
) -> Task<Message> {
    images.resolve(url, result);
    Task::none()
}
