// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! Native window, mouse and keyboard events are only forwarded on the viewer
//! screen. The frame subscription drives the render loop while the viewer is
//! shown; the tick subscription only runs while the instructions deadline is
//! pending.

use super::{Message, Screen};
use iced::{event, keyboard, mouse, time, window, Event, Subscription};
use std::time::Duration;

/// Tick interval for the instructions deadline check.
const TICK_INTERVAL: Duration = Duration::from_millis(100);

/// Creates the event subscription for the current screen.
pub fn create_event_subscription(screen: Screen) -> Subscription<Message> {
    match screen {
        Screen::Viewer => event::listen_with(|event, status, window_id| {
            should_forward(&event, status).then_some(Message::RawEvent {
                window: window_id,
                event,
            })
        }),
        Screen::Gallery => Subscription::none(),
    }
}

/// Ids of opened windows.
pub fn create_window_subscription() -> Subscription<Message> {
    window::open_events().map(Message::WindowOpened)
}

/// Animation frames while the viewer is shown.
pub fn create_frame_subscription(screen: Screen) -> Subscription<Message> {
    match screen {
        Screen::Viewer => window::frames().map(Message::Frame),
        Screen::Gallery => Subscription::none(),
    }
}

/// Periodic tick while a deadline is pending.
pub fn create_tick_subscription(deadline_pending: bool) -> Subscription<Message> {
    if deadline_pending {
        time::every(TICK_INTERVAL).map(Message::Tick)
    } else {
        Subscription::none()
    }
}

/// Window events always pass; a global button release ends any drag, even
/// outside the viewport. Keys only pass when no widget consumed them.
fn should_forward(event: &Event, status: event::Status) -> bool {
    match event {
        Event::Window(
            window::Event::FileHovered(_)
            | window::Event::FilesHoveredLeft
            | window::Event::FileDropped(_)
            | window::Event::Resized(_),
        ) => true,
        Event::Mouse(mouse::Event::ButtonReleased(_)) => true,
        Event::Keyboard(keyboard::Event::KeyPressed { .. }) => status == event::Status::Ignored,
        _ => false,
    }
}
