// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! Native window and keyboard events are translated into orchestrator
//! messages here. Timers drive carousel auto-play and toast auto-dismiss.

use super::Message;
use crate::app::orchestrator::{self, AutoPlayHandle};
use iced::keyboard::{self, key::Named, Key};
use iced::{event, time, window, Subscription};
use std::time::Duration;

/// Routes window resizes and the layout keyboard shortcuts.
///
/// Keys already consumed by a widget (typing in the URL field) are ignored.
pub fn create_event_subscription() -> Subscription<Message> {
    event::listen_with(|event, status, _window_id| match event {
        event::Event::Window(window::Event::Resized(size)) => Some(Message::Orchestrator(
            orchestrator::Message::ViewportResized(size),
        )),
        event::Event::Keyboard(keyboard::Event::KeyPressed { key, .. })
            if status == event::Status::Ignored =>
        {
            shortcut(&key).map(Message::Orchestrator)
        }
        _ => None,
    })
}

fn shortcut(key: &Key) -> Option<orchestrator::Message> {
    match key {
        Key::Named(Named::Escape) => Some(orchestrator::Message::CloseOverlay),
        Key::Named(Named::ArrowRight) => Some(orchestrator::Message::Advance),
        Key::Named(Named::Space) => Some(orchestrator::Message::TogglePlay),
        _ => None,
    }
}

/// Ticks the carousel while auto-play runs.
///
/// The subscription is keyed by the handle: restarting auto-play replaces the
/// timer, and a tick already in flight for an old handle is rejected by the
/// orchestrator.
pub fn create_autoplay_subscription(
    handle: Option<AutoPlayHandle>,
    interval: Duration,
) -> Subscription<Message> {
    match handle {
        Some(handle) => time::every(interval)
            .with(handle)
            .map(|(handle, _instant)| {
                Message::Orchestrator(orchestrator::Message::AutoPlayTick(handle))
            }),
        None => Subscription::none(),
    }
}

/// Creates a periodic tick subscription for notification auto-dismiss.
pub fn create_tick_subscription(has_notifications: bool) -> Subscription<Message> {
    if has_notifications {
        time::every(Duration::from_millis(100)).map(Message::Tick)
    } else {
        Subscription::none()
    }
}
