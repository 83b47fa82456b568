// SPDX-License-Identifier: MPL-2.0
//! `iced_flix` is a streaming-service style home page built with the Iced GUI
//! framework.
//!
//! It renders a rotating hero banner, horizontally scrolling content rows and
//! a detail modal over a randomly generated in-memory catalog. Every action
//! button is inert; nothing is played, persisted or searched.

#![doc(html_root_url = "https://docs.rs/iced_flix/0.1.0")]

pub mod app;
pub mod catalog;
pub mod config;
pub mod error;
pub mod i18n;
pub mod media;
pub mod ui;

#[cfg(test)]
pub(crate) mod test_utils;
