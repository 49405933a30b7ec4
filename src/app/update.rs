// SPDX-License-Identifier: MPL-2.0
//! Message handlers for the application root.
//!
//! Components report side effects through their `Effect` values; this module
//! turns them into tasks (file dialogs, window mode changes) and owns screen
//! transitions, which create and tear down component state.

use super::{Message, Screen};
use crate::config::{Config, DIAGNOSTICS_FILE_NAME};
use crate::diagnostics::{DiagnosticsCollector, UserAction};
use crate::error::{Error, Result};
use crate::gallery::GalleryClient;
use crate::i18n::fluent::I18n;
use crate::model::format::SUPPORTED_EXTENSIONS;
use crate::render;
use crate::ui::navbar;
use crate::ui::state::InstructionsDelay;
use crate::ui::viewer::fullscreen;
use crate::ui::{gallery, viewer};
use iced::{keyboard, mouse, window, Event, Task};
use std::path::PathBuf;
use std::time::Instant;

/// Context for update operations containing mutable references to app state.
pub struct UpdateContext<'a> {
    pub i18n: &'a I18n,
    pub config: &'a Config,
    pub screen: &'a mut Screen,
    pub viewer: &'a mut Option<viewer::State>,
    pub gallery: &'a mut Option<gallery::State>,
    pub gallery_client: Option<&'a GalleryClient>,
    pub window_id: &'a mut Option<window::Id>,
    pub is_dark: &'a mut bool,
    pub diagnostics: &'a mut DiagnosticsCollector,
}

/// Builds a fresh viewer from the configuration.
pub fn create_viewer(
    config: &Config,
    is_dark: bool,
    diagnostics: &DiagnosticsCollector,
) -> viewer::State {
    viewer::State::new(viewer::StateConfig {
        render_size: config.viewer.render_size(),
        instructions_delay: InstructionsDelay::from(config.viewer.instructions_delay_ms),
        auto_rotate_speed: config
            .viewer
            .auto_rotate_speed
            .unwrap_or(crate::config::DEFAULT_AUTO_ROTATE_SPEED),
        export_dir: config.export.resolved_directory(),
        is_dark,
        fullscreen_active: false,
        diagnostics: diagnostics.handle(),
    })
}

/// Handles viewer component messages.
pub fn handle_viewer_message(
    ctx: &mut UpdateContext<'_>,
    message: viewer::Message,
) -> Task<Message> {
    let Some(state) = ctx.viewer.as_mut() else {
        return Task::none();
    };

    let (effect, task) = state.handle_message(message, Instant::now());
    let viewer_task = task.map(Message::Viewer);

    let side_effect = match effect {
        viewer::Effect::None => Task::none(),
        viewer::Effect::OpenFileDialog => handle_open_file_dialog(ctx.i18n),
        viewer::Effect::ToggleFullscreen => toggle_fullscreen(*ctx.window_id),
        viewer::Effect::QueryFullscreen => query_fullscreen(*ctx.window_id),
    };
    Task::batch([viewer_task, side_effect])
}

/// Handles gallery component messages.
pub fn handle_gallery_message(
    ctx: &mut UpdateContext<'_>,
    message: gallery::Message,
) -> Task<Message> {
    let Some(state) = ctx.gallery.as_mut() else {
        return Task::none();
    };

    let (effect, task) = state.handle_message(message);
    let gallery_task = task.map(Message::Gallery);

    let side_effect = match effect {
        gallery::Effect::None => Task::none(),
        gallery::Effect::PickUploadFile => handle_upload_file_dialog(ctx.i18n),
    };
    Task::batch([gallery_task, side_effect])
}

/// Handles navbar messages.
pub fn handle_navbar_message(
    ctx: &mut UpdateContext<'_>,
    message: navbar::Message,
) -> Task<Message> {
    match navbar::update(message, (*ctx.screen).into()) {
        navbar::Event::None => Task::none(),
        navbar::Event::SwitchTo(tab) => handle_screen_switch(ctx, tab.into()),
        navbar::Event::ToggleTheme => {
            *ctx.is_dark = !*ctx.is_dark;
            ctx.diagnostics.log_action(UserAction::ToggleTheme);
            if let Some(state) = ctx.viewer.as_mut() {
                state.set_theme(*ctx.is_dark);
            }
            Task::none()
        }
        navbar::Event::ExportDiagnostics => export_diagnostics(ctx),
    }
}

/// Serializes the diagnostics buffer, recording the export itself first.
fn diagnostics_report(diagnostics: &mut DiagnosticsCollector) -> Result<Vec<u8>> {
    diagnostics.process_pending();
    let recorded = diagnostics.len();
    diagnostics.log_action_with_details(
        UserAction::ExportDiagnostics,
        Some(format!("{recorded} events recorded")),
    );
    diagnostics
        .export_json()
        .map(String::into_bytes)
        .map_err(|e| Error::Export(e.to_string()))
}

/// Writes the diagnostics buffer as JSON into the export directory.
pub fn export_diagnostics(ctx: &mut UpdateContext<'_>) -> Task<Message> {
    match diagnostics_report(ctx.diagnostics) {
        Ok(bytes) => Task::perform(
            render::write_output(
                ctx.config.export.resolved_directory(),
                DIAGNOSTICS_FILE_NAME,
                bytes,
            ),
            Message::DiagnosticsExported,
        ),
        Err(error) => {
            handle_diagnostics_exported(ctx, Err(error));
            Task::none()
        }
    }
}

/// Reports where the diagnostics went, or why they could not be written.
pub fn handle_diagnostics_exported(ctx: &mut UpdateContext<'_>, result: Result<PathBuf>) {
    match result {
        Ok(path) => eprintln!("Diagnostics written to {}", path.display()),
        Err(error) => {
            eprintln!("Failed to export diagnostics: {}", error);
            ctx.diagnostics
                .log_error(format!("Failed to export diagnostics: {}", error));
        }
    }
}

/// Handles screen transitions.
///
/// Leaving a screen drops its state. For the viewer this revokes the object
/// URL and discards the instructions deadline; entering the gallery starts a
/// fresh fetch.
pub fn handle_screen_switch(ctx: &mut UpdateContext<'_>, target: Screen) -> Task<Message> {
    if *ctx.screen == target {
        return Task::none();
    }
    ctx.diagnostics.log_action(UserAction::SwitchScreen {
        screen: target.as_str().to_string(),
    });
    *ctx.screen = target;

    match target {
        Screen::Gallery => {
            *ctx.viewer = None;
            let (state, task) = gallery::State::new(gallery::StateConfig {
                client: ctx.gallery_client.cloned(),
                download_dir: ctx.config.export.resolved_directory(),
                diagnostics: ctx.diagnostics.handle(),
            });
            *ctx.gallery = Some(state);
            task.map(Message::Gallery)
        }
        Screen::Viewer => {
            *ctx.gallery = None;
            *ctx.viewer = Some(create_viewer(ctx.config, *ctx.is_dark, ctx.diagnostics));
            query_fullscreen(*ctx.window_id)
        }
    }
}

/// What a native event means for the viewer.
#[derive(Debug, Clone)]
pub enum RawAction {
    Viewer(viewer::Message),
    ExitFullscreen,
}

/// Maps a forwarded native event to a viewer action.
#[must_use]
pub fn route_raw_event(event: Event) -> Option<RawAction> {
    match event {
        Event::Window(window::Event::FileHovered(_)) => {
            Some(RawAction::Viewer(viewer::Message::FilesHovered))
        }
        Event::Window(window::Event::FilesHoveredLeft) => {
            Some(RawAction::Viewer(viewer::Message::FilesHoverLeft))
        }
        Event::Window(window::Event::FileDropped(path)) => {
            Some(RawAction::Viewer(viewer::Message::FileDropped(path)))
        }
        Event::Window(window::Event::Resized(size)) => {
            Some(RawAction::Viewer(viewer::Message::WindowResized(size)))
        }
        Event::Mouse(mouse::Event::ButtonReleased(_)) => {
            Some(RawAction::Viewer(viewer::Message::PointerReleased))
        }
        Event::Keyboard(keyboard::Event::KeyPressed {
            key: keyboard::Key::Named(named),
            ..
        }) => match named {
            keyboard::key::Named::F11 => {
                Some(RawAction::Viewer(viewer::Message::ToggleFullscreen))
            }
            keyboard::key::Named::Escape => Some(RawAction::ExitFullscreen),
            _ => None,
        },
        _ => None,
    }
}

/// Handles a native event forwarded by the event subscription.
pub fn handle_raw_event(
    ctx: &mut UpdateContext<'_>,
    window: window::Id,
    event: Event,
) -> Task<Message> {
    *ctx.window_id = Some(window);

    match route_raw_event(event) {
        Some(RawAction::Viewer(message)) => handle_viewer_message(ctx, message),
        Some(RawAction::ExitFullscreen) => {
            let fullscreen_active = ctx
                .viewer
                .as_ref()
                .is_some_and(|state| state.ui_state().fullscreen_active);
            if fullscreen_active {
                set_window_mode(*ctx.window_id, window::Mode::Windowed)
            } else {
                Task::none()
            }
        }
        None => Task::none(),
    }
}

/// Reads the window mode and reports it to the viewer.
fn query_fullscreen(window_id: Option<window::Id>) -> Task<Message> {
    let Some(id) = window_id else {
        return Task::none();
    };
    window::mode(id).map(|mode| {
        Message::Viewer(viewer::Message::FullscreenChanged(
            fullscreen::is_fullscreen(mode),
        ))
    })
}

/// Requests the opposite of the current window mode, then reports the
/// resulting mode. One request per call.
fn toggle_fullscreen(window_id: Option<window::Id>) -> Task<Message> {
    let Some(id) = window_id else {
        return Task::none();
    };
    window::mode(id)
        .then(move |mode| set_window_mode(Some(id), fullscreen::target_mode(mode)))
}

fn set_window_mode(window_id: Option<window::Id>, mode: window::Mode) -> Task<Message> {
    let Some(id) = window_id else {
        return Task::none();
    };
    window::set_mode::<Message>(id, mode).chain(query_fullscreen(Some(id)))
}

/// Opens the native dialog filtered to supported model files.
pub fn handle_open_file_dialog(i18n: &I18n) -> Task<Message> {
    let title = i18n.tr("viewer-open-dialog-title");
    let filter = i18n.tr("viewer-open-dialog-filter");
    Task::perform(
        async move {
            rfd::AsyncFileDialog::new()
                .set_title(title)
                .add_filter(filter, &SUPPORTED_EXTENSIONS[..])
                .pick_file()
                .await
                .map(|handle| handle.path().to_path_buf())
        },
        |path: Option<PathBuf>| Message::Viewer(viewer::Message::FileSelected(path)),
    )
}

/// Opens the native dialog for a gallery upload. Any file type is accepted.
pub fn handle_upload_file_dialog(i18n: &I18n) -> Task<Message> {
    let title = i18n.tr("gallery-upload-dialog-title");
    Task::perform(
        async move {
            rfd::AsyncFileDialog::new()
                .set_title(title)
                .pick_file()
                .await
                .map(|handle| handle.path().to_path_buf())
        },
        |path: Option<PathBuf>| Message::Gallery(gallery::Message::UploadFileChosen(path)),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnostics::BufferCapacity;

    #[test]
    fn file_drop_routes_to_viewer() {
        let event = Event::Window(window::Event::FileDropped(PathBuf::from("a.stl")));
        assert!(matches!(
            route_raw_event(event),
            Some(RawAction::Viewer(viewer::Message::FileDropped(path))) if path == PathBuf::from("a.stl")
        ));
    }

    #[test]
    fn button_release_ends_drag() {
        let event = Event::Mouse(mouse::Event::ButtonReleased(mouse::Button::Right));
        assert!(matches!(
            route_raw_event(event),
            Some(RawAction::Viewer(viewer::Message::PointerReleased))
        ));
    }

    #[test]
    fn screen_switch_tears_down_viewer_and_back() {
        let config = Config::default();
        let i18n = I18n::default();
        let mut diagnostics = DiagnosticsCollector::new(BufferCapacity::default());
        let client = GalleryClient::new(&config.gallery.base_url, &config.gallery.asset_base_url)
            .expect("default urls are valid");
        let mut screen = Screen::Viewer;
        let mut viewer = Some(create_viewer(&config, true, &diagnostics));
        let mut gallery = None;
        let mut window_id = None;
        let mut is_dark = true;

        let registry = viewer.as_ref().expect("viewer").registry().clone();
        let dir = tempfile::tempdir().expect("temp dir");
        let model = dir.path().join("m.stl");
        std::fs::write(&model, "solid m\nendsolid m\n").expect("write model");
        let _ = viewer
            .as_mut()
            .expect("viewer")
            .open_path(model, "cli", Instant::now());
        assert_eq!(registry.len(), 1);

        let mut ctx = UpdateContext {
            i18n: &i18n,
            config: &config,
            screen: &mut screen,
            viewer: &mut viewer,
            gallery: &mut gallery,
            gallery_client: Some(&client),
            window_id: &mut window_id,
            is_dark: &mut is_dark,
            diagnostics: &mut diagnostics,
        };
        let _ = handle_screen_switch(&mut ctx, Screen::Gallery);
        assert!(ctx.viewer.is_none());
        assert!(ctx.gallery.is_some());
        assert!(registry.is_empty());

        let _ = handle_screen_switch(&mut ctx, Screen::Viewer);
        assert!(ctx.gallery.is_none());
        let viewer = ctx.viewer.as_ref().expect("viewer recreated");
        assert!(viewer.ui_state().tutorial_visible);
    }

    #[test]
    fn gallery_opens_without_a_client() {
        let config = Config::default();
        let i18n = I18n::default();
        let mut diagnostics = DiagnosticsCollector::new(BufferCapacity::default());
        let mut screen = Screen::Viewer;
        let mut viewer = Some(create_viewer(&config, true, &diagnostics));
        let mut gallery = None;
        let mut window_id = None;
        let mut is_dark = true;

        let mut ctx = UpdateContext {
            i18n: &i18n,
            config: &config,
            screen: &mut screen,
            viewer: &mut viewer,
            gallery: &mut gallery,
            gallery_client: None,
            window_id: &mut window_id,
            is_dark: &mut is_dark,
            diagnostics: &mut diagnostics,
        };
        let _ = handle_screen_switch(&mut ctx, Screen::Gallery);

        let state = ctx.gallery.as_ref().expect("gallery created");
        let ids: Vec<u64> = state.list_models().map(|r| r.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
        assert!(!state.can_upload());
    }

    #[tokio::test]
    async fn diagnostics_export_writes_recorded_events() {
        let dir = tempfile::tempdir().expect("temp dir");
        let mut diagnostics = DiagnosticsCollector::new(BufferCapacity::default());
        diagnostics.log_action(UserAction::ResetView);
        diagnostics.log_error("disk full");

        let bytes = diagnostics_report(&mut diagnostics).expect("serializes");
        let path = render::write_output(dir.path().to_path_buf(), DIAGNOSTICS_FILE_NAME, bytes)
            .await
            .expect("written");

        let json = std::fs::read_to_string(&path).expect("readable");
        let events: Vec<serde_json::Value> = serde_json::from_str(&json).expect("valid json");
        assert_eq!(events.len(), 3);
        assert_eq!(events[0]["action"]["action"], "reset_view");
        assert_eq!(events[1]["type"], "error");
        assert_eq!(events[2]["action"]["action"], "export_diagnostics");
        assert_eq!(events[2]["details"], "2 events recorded");
        assert!(path.ends_with(DIAGNOSTICS_FILE_NAME));
    }

    #[test]
    fn theme_toggle_flips_flag() {
        let config = Config::default();
        let i18n = I18n::default();
        let mut diagnostics = DiagnosticsCollector::new(BufferCapacity::default());
        let mut screen = Screen::Viewer;
        let mut viewer = Some(create_viewer(&config, true, &diagnostics));
        let mut gallery = None;
        let mut window_id = None;
        let mut is_dark = true;

        let mut ctx = UpdateContext {
            i18n: &i18n,
            config: &config,
            screen: &mut screen,
            viewer: &mut viewer,
            gallery: &mut gallery,
            gallery_client: None,
            window_id: &mut window_id,
            is_dark: &mut is_dark,
            diagnostics: &mut diagnostics,
        };
        let _ = handle_navbar_message(&mut ctx, navbar::Message::ToggleTheme);

        assert!(!*ctx.is_dark);
        assert!(!ctx.viewer.as_ref().expect("viewer").is_dark());
    }
}
