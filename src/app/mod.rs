// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration between the viewer and gallery.
//!
//! The `App` struct wires together the screens, localization and diagnostics,
//! and translates messages into side effects like file dialogs or window mode
//! changes. Only the active screen has state: switching screens drops the
//! previous one.

mod message;
pub mod paths;
mod screen;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};
pub use screen::Screen;

use crate::config::{self, Config};
use crate::diagnostics::{BufferCapacity, DiagnosticsCollector};
use crate::gallery::GalleryClient;
use crate::i18n::fluent::I18n;
use crate::ui::theming;
use crate::ui::{gallery, viewer};
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;
use std::path::PathBuf;
use std::time::Instant;

/// Root Iced application state.
pub struct App {
    pub i18n: I18n,
    config: Config,
    screen: Screen,
    viewer: Option<viewer::State>,
    gallery: Option<gallery::State>,
    /// `None` when the configured gallery URL is invalid.
    gallery_client: Option<GalleryClient>,
    window_id: Option<window::Id>,
    /// Session theme; starts from the configured mode.
    is_dark: bool,
    diagnostics: DiagnosticsCollector,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("screen", &self.screen)
            .field("is_dark", &self.is_dark)
            .field(
                "viewer_has_model",
                &self
                    .viewer
                    .as_ref()
                    .is_some_and(|v| v.model_reference().is_some()),
            )
            .finish()
    }
}

pub const WINDOW_DEFAULT_HEIGHT: u32 = 820;
pub const WINDOW_DEFAULT_WIDTH: u32 = 1100;
pub const MIN_WINDOW_HEIGHT: u32 = 650;
pub const MIN_WINDOW_WIDTH: u32 = 650;

/// Builds the window settings
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // Wrap flags in RefCell<Option<_>> to satisfy Fn trait requirement
    // while only consuming flags once (iced 0.14 requires Fn, not FnOnce)
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state
            .borrow_mut()
            .take()
            .expect("Boot function called more than once");
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl App {
    /// Initializes application state and optionally opens the model passed
    /// on the command line.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        paths::init_cli_overrides(flags.config_dir.clone());
        let (config, config_warning) = config::load();
        let i18n = I18n::new(flags.lang.clone(), &config);
        let mut diagnostics = DiagnosticsCollector::new(BufferCapacity::default());

        if let Some(key) = config_warning {
            let text = i18n.tr(&key);
            eprintln!("{}", text);
            diagnostics.log_warning(text);
        }
        if let Err(error) = config::save_if_missing(&config) {
            eprintln!("Failed to write default settings: {}", error);
            diagnostics.log_warning(format!("Failed to write default settings: {}", error));
        }

        let base_url = flags
            .gallery_url
            .clone()
            .unwrap_or_else(|| config.gallery.base_url.clone());
        let gallery_client = match GalleryClient::new(&base_url, &config.gallery.asset_base_url) {
            Ok(client) => Some(client),
            Err(error) => {
                eprintln!("Invalid gallery URL {}: {}", base_url, error);
                diagnostics.log_error(format!("Invalid gallery URL {}: {}", base_url, error));
                None
            }
        };

        let is_dark = config.general.theme_mode.is_dark();
        let mut viewer = update::create_viewer(&config, is_dark, &diagnostics);

        let task = match flags.file_path {
            Some(path) => viewer
                .open_path(PathBuf::from(path), "cli", Instant::now())
                .map(Message::Viewer),
            None => Task::none(),
        };

        let app = App {
            i18n,
            config,
            screen: Screen::Viewer,
            viewer: Some(viewer),
            gallery: None,
            gallery_client,
            window_id: None,
            is_dark,
            diagnostics,
        };
        (app, task)
    }

    fn title(&self) -> String {
        let app_name = self.i18n.tr("window-title");

        let file_name = match self.screen {
            Screen::Viewer => self
                .viewer
                .as_ref()
                .and_then(|v| v.model_reference())
                .map(|r| r.file_name().to_string()),
            Screen::Gallery => None,
        };

        match file_name {
            Some(name) => format!("{name} - {app_name}"),
            None => app_name,
        }
    }

    fn theme(&self) -> Theme {
        theming::iced_theme(self.is_dark)
    }

    fn subscription(&self) -> Subscription<Message> {
        let deadline_pending = self
            .viewer
            .as_ref()
            .is_some_and(viewer::State::has_pending_deadline);

        Subscription::batch([
            subscription::create_window_subscription(),
            subscription::create_event_subscription(self.screen),
            subscription::create_frame_subscription(self.screen),
            subscription::create_tick_subscription(deadline_pending),
        ])
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        let mut ctx = update::UpdateContext {
            i18n: &self.i18n,
            config: &self.config,
            screen: &mut self.screen,
            viewer: &mut self.viewer,
            gallery: &mut self.gallery,
            gallery_client: self.gallery_client.as_ref(),
            window_id: &mut self.window_id,
            is_dark: &mut self.is_dark,
            diagnostics: &mut self.diagnostics,
        };

        match message {
            Message::Viewer(viewer_message) => {
                update::handle_viewer_message(&mut ctx, viewer_message)
            }
            Message::Gallery(gallery_message) => {
                // The gallery has no frame loop, so drain here.
                ctx.diagnostics.process_pending();
                update::handle_gallery_message(&mut ctx, gallery_message)
            }
            Message::Navbar(navbar_message) => {
                update::handle_navbar_message(&mut ctx, navbar_message)
            }
            Message::WindowOpened(id) => {
                *ctx.window_id = Some(id);
                Task::none()
            }
            Message::RawEvent { window, event } => update::handle_raw_event(&mut ctx, window, event),
            Message::Tick(at) => {
                ctx.diagnostics.process_pending();
                update::handle_viewer_message(&mut ctx, viewer::Message::Tick(at))
            }
            Message::Frame(at) => {
                ctx.diagnostics.process_pending();
                update::handle_viewer_message(&mut ctx, viewer::Message::Frame(at))
            }
            Message::DiagnosticsExported(result) => {
                update::handle_diagnostics_exported(&mut ctx, result);
                Task::none()
            }
        }
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            screen: self.screen,
            viewer: self.viewer.as_ref(),
            gallery: self.gallery.as_ref(),
            is_dark: self.is_dark,
        })
    }
}
