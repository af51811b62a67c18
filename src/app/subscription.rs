// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! Native events reach the overlay coordinator from here: escape presses,
//! and left clicks that no widget captured, which count as clicks outside
//! every dropdown and popover.

use super::Message;
use crate::config::TICK_INTERVAL_MS;
use crate::overlay::{ClickTarget, OverlayEvent};
use iced::{event, keyboard, mouse, time, window, Subscription};
use std::time::Duration;

/// Routes keyboard, mouse and window events.
pub fn create_event_subscription() -> Subscription<Message> {
    event::listen_with(|event, status, _window_id| match event {
        event::Event::Keyboard(keyboard::Event::KeyPressed {
            key: keyboard::Key::Named(keyboard::key::Named::Escape),
            ..
        }) => Some(Message::Overlay(OverlayEvent::Escape)),
        event::Event::Mouse(mouse::Event::ButtonPressed(mouse::Button::Left)) => match status {
            event::Status::Ignored => {
                Some(Message::Overlay(OverlayEvent::Click(ClickTarget::Outside)))
            }
            event::Status::Captured => None,
        },
        event::Event::Window(window::Event::Resized(size)) => Some(Message::WindowResized(size)),
        _ => None,
    })
}

/// Creates a periodic tick subscription for notification auto-dismiss. Only
/// runs while there is something to time.
pub fn create_tick_subscription(has_notifications: bool) -> Subscription<Message> {
    if has_notifications {
        time::every(Duration::from_millis(TICK_INTERVAL_MS)).map(Message::Tick)
    } else {
        Subscription::none()
    }
}
