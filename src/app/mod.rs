// SPDX-License-Identifier: MPL-2.0
//! Application root state: the home page.
//!
//! The `App` struct owns the generated catalog, the component states, the
//! image store and the single selection. Components never share state; they
//! report intent through events that the handlers in `update` apply.

mod message;
pub mod paths;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};

use crate::catalog::{Catalog, ItemId, MockGenerator};
use crate::config::{self, Config};
use crate::i18n::fluent::I18n;
use crate::media::{ImageLoader, ImageStore};
use crate::ui::state::HeroInterval;
use crate::ui::{content_row, hero_banner, movie_modal, theme};
use fluent_bundle::FluentValue;
use iced::{window, Element, Size, Subscription, Task, Theme};
use std::fmt;

/// Root Iced application state.
pub struct App {
    pub i18n: I18n,
    catalog: Catalog,
    hero: hero_banner::State,
    rows: Vec<content_row::State>,
    /// Item shown in the detail modal.
    selection: Option<ItemId>,
    images: ImageStore,
    loader: ImageLoader,
    window_size: Size,
    /// Vertical scroll offset of the page.
    page_offset: f32,
    /// Whether the compact navbar menu is open.
    menu_open: bool,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("selection", &self.selection)
            .field("rows", &self.rows.len())
            .field("images", &self.images.len())
            .finish()
    }
}

pub const WINDOW_DEFAULT_WIDTH: f32 = 1280.0;
pub const WINDOW_DEFAULT_HEIGHT: f32 = 800.0;
pub const MIN_WINDOW_WIDTH: f32 = 480.0;
pub const MIN_WINDOW_HEIGHT: f32 = 480.0;

pub fn window_settings() -> window::Settings {
    window::Settings {
        size: Size::new(WINDOW_DEFAULT_WIDTH, WINDOW_DEFAULT_HEIGHT),
        min_size: Some(Size::new(MIN_WINDOW_WIDTH, MIN_WINDOW_HEIGHT)),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // iced requires an `Fn` boot closure; flags are consumed on the first call.
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state.borrow_mut().take().unwrap_or_default();
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl App {
    /// Loads the config file and builds the page.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let (config, config_warning) = config::load();
        if let Some(warning) = config_warning {
            log::warn!("{warning}");
        }
        Self::with_config(flags, &config)
    }

    /// Builds the page from an already loaded configuration and starts the
    /// initial image requests.
    pub fn with_config(flags: Flags, config: &Config) -> (Self, Task<Message>) {
        let i18n = I18n::new(flags.lang.clone(), config);

        let seed = flags.seed.or(config.catalog.seed);
        match seed {
            Some(seed) => log::info!("generating catalog with seed {seed}"),
            None => log::info!("generating catalog from entropy"),
        }
        let catalog = Catalog::generate(&mut MockGenerator::from_seed_option(seed));

        let hero = hero_banner::State::new(
            catalog.featured.len(),
            HeroInterval::from_config(config.hero.auto_advance_ms),
        );
        let rows = catalog
            .categories
            .iter()
            .map(|category| content_row::State::new(category, &config.rows, WINDOW_DEFAULT_WIDTH))
            .collect();

        let mut app = Self {
            i18n,
            catalog,
            hero,
            rows,
            selection: None,
            images: ImageStore::new(config.images.is_enabled()),
            loader: ImageLoader::new(&config.images),
            window_size: Size::new(WINDOW_DEFAULT_WIDTH, WINDOW_DEFAULT_HEIGHT),
            page_offset: 0.0,
            menu_open: false,
        };

        let task = app.request_initial_images();
        (app, task)
    }

    fn request_initial_images(&mut self) -> Task<Message> {
        let urls: Vec<String> = self
            .catalog
            .featured
            .iter()
            .map(|item| item.backdrop_url.clone())
            .chain(
                self.catalog
                    .categories
                    .iter()
                    .flat_map(|category| category.items.iter())
                    .map(|item| item.poster_url.clone()),
            )
            .collect();

        Task::batch(
            urls.iter()
                .map(|url| update::request_image(&mut self.images, &self.loader, url))
                .collect::<Vec<_>>(),
        )
    }

    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    #[must_use]
    pub fn selection(&self) -> Option<ItemId> {
        self.selection
    }

    #[must_use]
    pub fn is_modal_open(&self) -> bool {
        self.selection.is_some()
    }

    #[must_use]
    pub fn hero_index(&self) -> Option<usize> {
        self.hero.current()
    }

    #[must_use]
    pub fn images(&self) -> &ImageStore {
        &self.images
    }

    #[must_use]
    pub fn menu_open(&self) -> bool {
        self.menu_open
    }

    pub fn title(&self) -> String {
        match self.selection.and_then(|id| self.catalog.find(id)) {
            Some(item) => self.i18n.tr_with_args(
                "window-title-with-item",
                &[("title", FluentValue::from(item.title.as_str()))],
            ),
            None => self.i18n.tr("window-title"),
        }
    }

    pub fn theme(&self) -> Theme {
        theme::app_theme()
    }

    pub fn subscription(&self) -> Subscription<Message> {
        let hero_sub = self.hero.subscription().map(Message::Hero);
        let modal_sub = movie_modal::subscription(self.is_modal_open()).map(Message::Modal);
        let window_sub = subscription::create_window_subscription();
        let animation_sub = subscription::create_animation_subscription(
            self.rows.iter().any(content_row::State::is_animating),
        );

        Subscription::batch([hero_sub, modal_sub, window_sub, animation_sub])
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        let mut ctx = update::UpdateContext {
            catalog: &self.catalog,
            selection: &mut self.selection,
            images: &mut self.images,
            loader: &self.loader,
        };

        match message {
            Message::Navbar(navbar_message) => {
                update::handle_navbar_message(&mut self.menu_open, navbar_message)
            }
            Message::Hero(hero_message) => {
                self.hero.update(hero_message);
                Task::none()
            }
            Message::Row { index, message } => {
                update::handle_row_message(&mut ctx, &mut self.rows, index, message)
            }
            Message::Modal(modal_message) => update::handle_modal_message(&mut ctx, modal_message),
            Message::PageScrolled(offset) => {
                self.page_offset = offset;
                Task::none()
            }
            Message::WindowResized(size) => update::handle_window_resized(
                &mut self.window_size,
                &mut self.menu_open,
                &mut self.rows,
                size,
            ),
            Message::AnimationFrame(now) => update::handle_animation_frame(&mut self.rows, now),
            Message::ImageLoaded { url, result } => {
                update::handle_image_loaded(ctx.images, &url, result)
            }
        }
    }

    pub fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            catalog: &self.catalog,
            hero: &self.hero,
            rows: &self.rows,
            images: &self.images,
            selection: self.selection,
            menu_open: self.menu_open,
            page_offset: self.page_offset,
            window_width: self.window_size.width,
        })
    }
}
