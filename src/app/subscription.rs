// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! Two subscriptions drive everything outside the widget tree: a keyboard
//! listener for the global shortcuts and a gated periodic tick for timed UI
//! state (toast auto-dismiss, save-status flash revert).

use super::Message;
use iced::{event, keyboard, time, Subscription};
use std::time::Duration;

/// Creates the keyboard shortcut subscription.
///
/// Shortcuts use the platform command modifier (Ctrl, or Cmd on macOS) and
/// fire regardless of widget focus, so they keep working while a form input
/// is being edited:
///
/// - command+P starts the PDF export flow
/// - command+Enter forces a preview recompute
pub fn create_event_subscription() -> Subscription<Message> {
    event::listen_with(|event, _status, _window_id| match event {
        event::Event::Keyboard(keyboard::Event::KeyPressed { key, modifiers, .. })
            if modifiers.command() =>
        {
            match key {
                keyboard::Key::Character(ref c) if c.as_str() == "p" => {
                    Some(Message::ExportRequested)
                }
                keyboard::Key::Named(keyboard::key::Named::Enter) => {
                    Some(Message::RecomputeRequested)
                }
                _ => None,
            }
        }
        _ => None,
    })
}

/// Creates a periodic tick subscription for notification auto-dismiss and
/// the save-status flash.
///
/// The tick only runs while something is actually pending, so an idle app
/// schedules no timers.
pub fn create_tick_subscription(
    has_notifications: bool,
    save_status_pending: bool,
) -> Subscription<Message> {
    if has_notifications || save_status_pending {
        time::every(Duration::from_millis(100)).map(Message::Tick)
    } else {
        Subscription::none()
    }
}
