// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! Native keyboard events are only listened to while an overlay is open, and
//! the periodic tick only runs while something is waiting on the clock.

use super::{Message, Overlay};
use iced::keyboard::{self, key::Named, Key};
use iced::{event, time, Subscription};
use std::time::Duration;

/// Tick interval for toast expiry and the save auto-close.
const TICK_INTERVAL: Duration = Duration::from_millis(100);

/// Routes Escape to the topmost overlay. Events captured by a widget (for
/// example a focused text input) are left alone.
pub fn create_event_subscription(overlay: Overlay) -> Subscription<Message> {
    if overlay == Overlay::None {
        return Subscription::none();
    }

    event::listen_with(|event, status, _window_id| match status {
        event::Status::Ignored => match event {
            event::Event::Keyboard(keyboard::Event::KeyPressed {
                key: Key::Named(Named::Escape),
                ..
            }) => Some(Message::EscapePressed),
            _ => None,
        },
        event::Status::Captured => None,
    })
}

/// Creates a periodic tick subscription for notification auto-dismiss and
/// the delayed close after a save.
pub fn create_tick_subscription(
    has_notifications: bool,
    editor_closing: bool,
) -> Subscription<Message> {
    if has_notifications || editor_closing {
        time::every(TICK_INTERVAL).map(Message::Tick)
    } else {
        Subscription::none()
    }
}
