// SPDX-License-Identifier: MPL-2.0
//! Pure UI state types shared by the home page components.
//!
//! None of these types know about Iced; components wrap them and translate
//! widget events into calls.

pub mod carousel;
pub mod hero_interval;
pub mod scroll_animation;
pub mod scroll_arrows;

pub use carousel::Carousel;
pub use hero_interval::HeroInterval;
pub use scroll_animation::ScrollAnimation;
pub use scroll_arrows::{ArrowVisibility, ScrollDirection, ScrollMetrics, END_THRESHOLD};
