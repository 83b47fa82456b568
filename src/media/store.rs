// SPDX-License-Identifier: MPL-2.0
//! Per-URL record of image load state.
//!
//! A URL moves from unknown to [`ImageSlot::Pending`] when first requested,
//! then to `Ready` or `Failed`. `Failed` is terminal: the URL is never
//! requested again and a late success does not replace the placeholder.

use crate::error::Result;
use iced::widget::image;
use std::collections::HashMap;

#[derive(Debug, Clone)]
pub enum ImageSlot {
    Pending,
    Ready(image::Handle),
    Failed,
}

/// What a view should draw for a URL.
#[derive(Debug, Clone)]
pub enum ImageView {
    Loading,
    Ready(image::Handle),
    Failed,
}

impl ImageView {
    #[must_use]
    pub fn is_failed(&self) -> bool {
        matches!(self, ImageView::Failed)
    }
}

#[derive(Debug, Default)]
pub struct ImageStore {
    slots: HashMap<String, ImageSlot>,
    offline: bool,
}

impl ImageStore {
    /// Creates a store. With `enabled == false` every request fails at once.
    #[must_use]
    pub fn new(enabled: bool) -> Self {
        Self {
            slots: HashMap::new(),
            offline: !enabled,
        }
    }

    /// Registers interest in `url`. Returns `true` when the caller should
    /// start a fetch; `false` when the URL is already known.
    pub fn request(&mut self, url: &str) -> bool {
        if self.slots.contains_key(url) {
            return false;
        }
        if self.offline {
            self.slots.insert(url.to_string(), ImageSlot::Failed);
            return false;
        }
        self.slots.insert(url.to_string(), ImageSlot::Pending);
        true
    }

    /// Records the outcome of a fetch.
    pub fn resolve(&mut self, url: &str, result: Result<image::Handle>) {
        let slot = self
            .slots
            .entry(url.to_string())
            .or_insert(ImageSlot::Pending);

        match (&*slot, result) {
            (ImageSlot::Failed, _) => {}
            (_, Ok(handle)) => *slot = ImageSlot::Ready(handle),
            (_, Err(err)) => {
                log::debug!("image load failed for {url}: {err}");
                *slot = ImageSlot::Failed;
            }
        }
    }

    #[must_use]
    pub fn get(&self, url: &str) -> ImageView {
        match self.slots.get(url) {
            Some(ImageSlot::Ready(handle)) => ImageView::Ready(handle.clone()),
            Some(ImageSlot::Failed) => ImageView::Failed,
            Some(ImageSlot::Pending) | None => ImageView::Loading,
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    const URL: &str = "https://picsum.photos/seed/200/300/450";

    fn handle() -> image::Handle {
        image::Handle::from_rgba(1, 1, vec![0, 0, 0, 255])
    }

    #[test]
    fn first_request_starts_fetch() {
        let mut store = ImageStore::new(true);
        assert!(store.request(URL));
        assert!(matches!(store.get(URL), ImageView::Loading));
    }

    #[test]
    fn url_is_requested_at_most_once() {
        let mut store = ImageStore::new(true);
        assert!(store.request(URL));
        assert!(!store.request(URL));
        store.resolve(URL, Ok(handle()));
        assert!(!store.request(URL));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn success_makes_image_ready() {
        let mut store = ImageStore::new(true);
        store.request(URL);
        store.resolve(URL, Ok(handle()));
        assert!(matches!(store.get(URL), ImageView::Ready(_)));
    }

    #[test]
    fn failure_is_permanent() {
        let mut store = ImageStore::new(true);
        store.request(URL);
        store.resolve(URL, Err(Error::Http("HTTP status: 404 Not Found".into())));
        assert!(store.get(URL).is_failed());

        store.resolve(URL, Ok(handle()));
        assert!(store.get(URL).is_failed());
        assert!(!store.request(URL));
    }

    #[test]
    fn offline_store_fails_every_request() {
        let mut store = ImageStore::new(false);
        assert!(!store.request(URL));
        assert!(store.get(URL).is_failed());
    }

    #[test]
    fn unknown_url_renders_loading() {
        let store = ImageStore::default();
        assert!(store.is_empty());
        assert!(matches!(store.get(URL), ImageView::Loading));
    }
}
