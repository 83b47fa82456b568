// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! Component timers (hero auto-advance, modal Escape listener) are owned by
//! their components; this module only holds the page-level ones.

use super::Message;
use iced::{event, time, window, Event, Subscription};
use std::time::Duration;

/// Interval between row animation frames (~60 Hz).
pub const ANIMATION_FRAME: Duration = Duration::from_millis(16);

/// Window resizes, always active.
pub fn create_window_subscription() -> Subscription<Message> {
    event::listen_with(window_filter)
}

fn window_filter(event: Event, _status: event::Status, _window: window::Id) -> Option<Message> {
    match event {
        Event::Window(window::Event::Resized(size)) => Some(Message::WindowResized(size)),
        _ => None,
    }
}

/// Frame ticks, only while some row is animating.
pub fn create_animation_subscription(animating: bool) -> Subscription<Message> {
    if animating {
        time::every(ANIMATION_FRAME).map(Message::AnimationFrame)
    } else {
        Subscription::none()
    }
}
