// SPDX-License-Identifier: MPL-2.0
//! Localization of every UI string using the Fluent system.
//!
//! Translations are embedded at build time from `assets/i18n/*.ftl`.
//! Catalog titles and descriptions are data and are never translated.
//!
//! Locale resolution order: `--lang`, `[general] language`, the OS
//! locale, then `en-US`. A key with no translation renders as
//! `MISSING: key`.

pub mod fluent;

pub use fluent::I18n;
