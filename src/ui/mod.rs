// SPDX-License-Identifier: MPL-2.0
//! User interface components and state management.
//!
//! Components follow the Elm-style "state down, messages up" pattern: each
//! one owns its local flags, exposes `update` returning an `Event` for the
//! page, and renders from a borrowed `ViewContext`.
//!
//! # Components
//!
//! - [`navbar`] - Scroll-reactive top bar with compact menu
//! - [`hero_banner`] - Rotating featured item banner
//! - [`content_row`] - Horizontally scrolling category row
//! - [`content_card`] - Poster card with hover details
//! - [`movie_modal`] - Detail modal for the selected item
//!
//! # Shared Infrastructure
//!
//! - [`state`] - Pure state types (carousel, scroll arrows, animation)
//! - [`styles`] - Centralized widget styles
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`theme`] - Theme and text color helpers

pub mod content_card;
pub mod content_row;
pub mod design_tokens;
pub mod hero_banner;
pub mod movie_modal;
pub mod navbar;
pub mod state;
pub mod styles;
pub mod theme;
