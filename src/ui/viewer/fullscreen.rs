// SPDX-License-Identifier: MPL-2.0
//! Window mode helpers for the fullscreen toggle.
//!
//! The viewer never assumes a request succeeded. The app asks for the
//! opposite of the current mode, then reads the mode back and reports it with
//! [`Message::FullscreenChanged`](super::component::Message::FullscreenChanged).

use iced::window::Mode;

/// Whether `mode` counts as fullscreen.
#[must_use]
pub fn is_fullscreen(mode: Mode) -> bool {
    mode == Mode::Fullscreen
}

/// The mode to request when toggling from `current`.
#[must_use]
pub fn target_mode(current: Mode) -> Mode {
    if is_fullscreen(current) {
        Mode::Windowed
    } else {
        Mode::Fullscreen
    }
}
