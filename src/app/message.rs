// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::error::Error;
use crate::ui::{content_row, hero_banner, movie_modal, navbar};
use iced::widget::image;
use iced::Size;
use std::time::Instant;

/// Top-level messages consumed by `App::update`. The variants forward
/// component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    Navbar(navbar::Message),
    Hero(hero_banner::Message),
    Row {
        index: usize,
        message: content_row::Message,
    },
    Modal(movie_modal::Message),
    /// Vertical offset of the page scrollable.
    PageScrolled(f32),
    WindowResized(Size),
    /// Frame tick while a row scroll animation is running.
    AnimationFrame(Instant),
    ImageLoaded {
        url: String,
        result: Result<image::Handle, Error>,
    },
}

/// Runtime flags passed in from the CLI to tweak startup behavior.
#[derive(Debug, Clone, Default)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `fr`, `en-US`).
    pub lang: Option<String>,
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over `ICED_FLIX_CONFIG_DIR` environment variable.
    pub config_dir: Option<String>,
    /// Seed for the mock catalog; overrides `[catalog] seed`.
    pub seed: Option<u64>,
}
