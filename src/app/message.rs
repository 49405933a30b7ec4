// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::error::Error;
use crate::ui::gallery;
use crate::ui::navbar;
use crate::ui::viewer;
use iced::window;
use std::path::PathBuf;
use std::time::Instant;

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    Viewer(viewer::Message),
    Gallery(gallery::Message),
    Navbar(navbar::Message),
    /// The main window opened; its id is needed for mode changes.
    WindowOpened(window::Id),
    /// Native event forwarded by the event subscription.
    RawEvent {
        window: window::Id,
        event: iced::Event,
    },
    /// Periodic tick while the instructions deadline is pending.
    Tick(Instant),
    /// Animation frame on the viewer screen.
    Frame(Instant),
    /// The diagnostics file was written, or failed to be.
    DiagnosticsExported(Result<PathBuf, Error>),
}

/// Runtime flags passed from the command line.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional locale override (e.g. `fr`).
    pub lang: Option<String>,
    /// Optional configuration directory (`--config-dir`).
    pub config_dir: Option<String>,
    /// Gallery API root overriding the configured one.
    pub gallery_url: Option<String>,
    /// Model to open at startup.
    pub file_path: Option<String>,
}
