// SPDX-License-Identifier: MPL-2.0
//! Viewer component encapsulating state and update logic.
//!
//! The state is created when the viewer screen is entered and dropped when it
//! is left. Dropping it revokes the current object URL, discards the
//! instructions deadline and releases the frame buffer.

use crate::config::{EXPORT_FILE_NAME, SCREENSHOT_FILE_NAME};
use crate::diagnostics::{AppStateEvent, DiagnosticsHandle, UserAction};
use crate::error::Error;
use crate::i18n::fluent::I18n;
use crate::model::{
    Applied, DisplayObject, LoadOutcome, ModelReference, ObjectUrlRegistry, Resolution,
    SceneLoader,
};
use crate::render::{self, glb, Frame, Rasterizer};
use crate::scene::{CompassLabel, OrbitControls, OrientationIndicator, Scene};
use crate::ui::design_tokens::sizing;
use crate::ui::state::{DragMode, DragState, InstructionsDelay};
use crate::ui::theming::ColorScheme;
use crate::ui::viewer::{controls, hud, pane};
use glam::Vec2;
use iced::widget::{image, Stack};
use iced::{mouse, Element, Length, Point, Size, Task};
use std::path::PathBuf;
use std::time::{Duration, Instant};

/// Drops arriving this close to an accepted one belong to the same gesture.
const DROP_BATCH_WINDOW: Duration = Duration::from_millis(250);

/// Longest step fed to animations, so a stalled window does not jump.
const MAX_FRAME_DELTA: f32 = 0.1;

/// Pixels of a precise scroll that count as one wheel notch.
const PIXELS_PER_NOTCH: f32 = 50.0;

/// Messages emitted by viewer-related widgets.
#[derive(Debug, Clone)]
pub enum Message {
    /// A file was dropped on the window.
    FileDropped(PathBuf),
    FilesHovered,
    FilesHoverLeft,
    /// Request to open the native file dialog.
    OpenFileRequested,
    /// Result of the file dialog.
    FileSelected(Option<PathBuf>),
    ModelLoaded(LoadOutcome),
    Export,
    ExportFinished(Result<PathBuf, Error>),
    Screenshot,
    ScreenshotFinished(Result<PathBuf, Error>),
    Reset,
    ToggleFullscreen,
    /// The window reported its actual mode.
    FullscreenChanged(bool),
    WindowResized(Size),
    DragStarted(DragMode),
    PointerMoved(Point),
    PointerReleased,
    Scrolled(mouse::ScrollDelta),
    /// Animation frame callback.
    Frame(Instant),
    /// Periodic tick while the instructions deadline is pending.
    Tick(Instant),
}

/// Side effects the application should perform after handling a viewer message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    None,
    OpenFileDialog,
    /// Query the window mode and request the opposite one.
    ToggleFullscreen,
    /// Query the window mode so the flag can resync.
    QueryFullscreen,
}

/// Visibility flags of the viewer chrome.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewerUiState {
    pub fullscreen_active: bool,
    pub tutorial_visible: bool,
    pub instructions_visible: bool,
}

impl Default for ViewerUiState {
    fn default() -> Self {
        Self {
            fullscreen_active: false,
            tutorial_visible: true,
            instructions_visible: true,
        }
    }
}

/// Settings the viewer is created with.
#[derive(Debug, Clone)]
pub struct StateConfig {
    pub render_size: (u32, u32),
    pub instructions_delay: InstructionsDelay,
    pub auto_rotate_speed: f32,
    pub export_dir: PathBuf,
    pub is_dark: bool,
    pub fullscreen_active: bool,
    pub diagnostics: DiagnosticsHandle,
}

/// Environment information required to render the viewer.
pub struct ViewEnv<'a> {
    pub i18n: &'a I18n,
}

/// Complete viewer component state.
#[derive(Debug)]
pub struct State {
    registry: ObjectUrlRegistry,
    loader: SceneLoader,
    model_ref: Option<ModelReference>,
    display: DisplayObject,
    controls: OrbitControls,
    orientation: OrientationIndicator,
    rasterizer: Rasterizer,
    frame: Option<Frame>,
    frame_handle: Option<image::Handle>,
    needs_redraw: bool,
    ui: ViewerUiState,
    instructions_delay: InstructionsDelay,
    instructions_deadline: Option<Instant>,
    drag: DragState,
    cursor: Option<Point>,
    files_hovered: bool,
    last_drop: Option<Instant>,
    last_frame: Option<Instant>,
    window_size: Option<Size>,
    is_dark: bool,
    export_dir: PathBuf,
    diagnostics: DiagnosticsHandle,
}

impl State {
    #[must_use]
    pub fn new(config: StateConfig) -> Self {
        let registry = ObjectUrlRegistry::new();
        let mut loader = SceneLoader::new(registry.clone());
        let display = match loader.resolve(None, config.is_dark) {
            Resolution::Fallback(cube) => DisplayObject::Fallback(cube),
            Resolution::Load(_) => DisplayObject::Empty,
        };
        let (width, height) = config.render_size;

        let mut state = Self {
            registry,
            loader,
            model_ref: None,
            display,
            controls: OrbitControls::new(config.auto_rotate_speed),
            orientation: OrientationIndicator::new(),
            rasterizer: Rasterizer::new(),
            frame: Frame::new(width, height),
            frame_handle: None,
            needs_redraw: true,
            ui: ViewerUiState {
                fullscreen_active: config.fullscreen_active,
                ..ViewerUiState::default()
            },
            instructions_delay: config.instructions_delay,
            instructions_deadline: None,
            drag: DragState::default(),
            cursor: None,
            files_hovered: false,
            last_drop: None,
            last_frame: None,
            window_size: None,
            is_dark: config.is_dark,
            export_dir: config.export_dir,
            diagnostics: config.diagnostics,
        };
        state.redraw();
        state
    }

    #[must_use]
    pub fn ui_state(&self) -> ViewerUiState {
        self.ui
    }

    #[must_use]
    pub fn model_reference(&self) -> Option<&ModelReference> {
        self.model_ref.as_ref()
    }

    #[must_use]
    pub fn display(&self) -> &DisplayObject {
        &self.display
    }

    #[must_use]
    pub fn controls(&self) -> &OrbitControls {
        &self.controls
    }

    #[must_use]
    pub fn orientation(&self) -> CompassLabel {
        self.orientation.label()
    }

    #[must_use]
    pub fn registry(&self) -> &ObjectUrlRegistry {
        &self.registry
    }

    #[must_use]
    pub fn frame(&self) -> Option<&Frame> {
        self.frame.as_ref()
    }

    #[must_use]
    pub fn files_hovered(&self) -> bool {
        self.files_hovered
    }

    /// Whether the instructions are waiting for their hide deadline.
    #[must_use]
    pub fn has_pending_deadline(&self) -> bool {
        self.instructions_deadline.is_some()
    }

    #[must_use]
    pub fn is_dark(&self) -> bool {
        self.is_dark
    }

    /// Switches palettes. The cube keeps its current rotation.
    pub fn set_theme(&mut self, is_dark: bool) {
        self.is_dark = is_dark;
        if let DisplayObject::Fallback(cube) = &mut self.display {
            cube.set_theme(is_dark);
        }
        self.needs_redraw = true;
    }

    pub fn handle_message(&mut self, message: Message, now: Instant) -> (Effect, Task<Message>) {
        match message {
            Message::FileDropped(path) => {
                self.files_hovered = false;
                let in_batch = self
                    .last_drop
                    .is_some_and(|at| now.saturating_duration_since(at) < DROP_BATCH_WINDOW);
                if in_batch {
                    return (Effect::None, Task::none());
                }
                match self.ingest(path, "drag_drop", now) {
                    Some(task) => {
                        self.last_drop = Some(now);
                        (Effect::None, task)
                    }
                    None => (Effect::None, Task::none()),
                }
            }
            Message::FilesHovered => {
                self.files_hovered = true;
                (Effect::None, Task::none())
            }
            Message::FilesHoverLeft => {
                self.files_hovered = false;
                (Effect::None, Task::none())
            }
            Message::OpenFileRequested => (Effect::OpenFileDialog, Task::none()),
            Message::FileSelected(path) => {
                let task = path
                    .and_then(|path| self.ingest(path, "file_dialog", now))
                    .unwrap_or_else(Task::none);
                (Effect::None, task)
            }
            Message::ModelLoaded(outcome) => {
                self.apply_outcome(outcome);
                (Effect::None, Task::none())
            }
            Message::Export => (Effect::None, self.export()),
            Message::ExportFinished(result) => {
                if let Err(error) = result {
                    self.report_failure("Failed to export scene", &error);
                }
                (Effect::None, Task::none())
            }
            Message::Screenshot => (Effect::None, self.screenshot()),
            Message::ScreenshotFinished(result) => {
                if let Err(error) = result {
                    self.report_failure("Failed to save screenshot", &error);
                }
                (Effect::None, Task::none())
            }
            Message::Reset => {
                self.reset();
                (Effect::None, Task::none())
            }
            Message::ToggleFullscreen => {
                self.diagnostics.log_action(UserAction::ToggleFullscreen);
                (Effect::ToggleFullscreen, Task::none())
            }
            Message::FullscreenChanged(active) => {
                if self.ui.fullscreen_active != active {
                    self.ui.fullscreen_active = active;
                    self.diagnostics
                        .log_state(AppStateEvent::FullscreenChanged { active });
                }
                (Effect::None, Task::none())
            }
            Message::WindowResized(size) => {
                self.window_size = Some(size);
                (Effect::QueryFullscreen, Task::none())
            }
            Message::DragStarted(mode) => {
                self.drag.start(mode, self.cursor);
                (Effect::None, Task::none())
            }
            Message::PointerMoved(position) => {
                self.cursor = Some(position);
                if let Some((mode, delta)) = self.drag.advance(position) {
                    let delta = Vec2::new(delta.x, delta.y);
                    let height = self.viewport_height();
                    let moved = match mode {
                        DragMode::Rotate => self.controls.rotate(delta, height),
                        DragMode::Pan => self.controls.pan(delta, height),
                    };
                    if moved {
                        self.camera_changed();
                    }
                }
                (Effect::None, Task::none())
            }
            Message::PointerReleased => {
                self.drag.stop();
                (Effect::None, Task::none())
            }
            Message::Scrolled(delta) => {
                let notches = match delta {
                    mouse::ScrollDelta::Lines { y, .. } => y,
                    mouse::ScrollDelta::Pixels { y, .. } => y / PIXELS_PER_NOTCH,
                };
                if self.controls.zoom(notches) {
                    self.camera_changed();
                }
                (Effect::None, Task::none())
            }
            Message::Frame(at) => {
                self.advance_frame(at);
                (Effect::None, Task::none())
            }
            Message::Tick(at) => {
                self.check_instructions_deadline(at);
                (Effect::None, Task::none())
            }
        }
    }

    /// Opens a file named outside the window, such as the command-line argument.
    pub fn open_path(&mut self, path: PathBuf, source: &str, now: Instant) -> Task<Message> {
        self.ingest(path, source, now).unwrap_or_else(Task::none)
    }

    /// Registers `path` and starts loading it. Returns `None` when the file
    /// type is not supported, leaving every flag untouched.
    fn ingest(&mut self, path: PathBuf, source: &str, now: Instant) -> Option<Task<Message>> {
        let reference = match ModelReference::register(&self.registry, path) {
            Ok(reference) => reference,
            Err(error) => {
                self.diagnostics
                    .log_warning(format!("Ignored dropped file: {}", error));
                return None;
            }
        };
        self.diagnostics.log_action(UserAction::LoadModel {
            source: Some(source.to_string()),
        });

        self.dismiss_tutorial(now);
        self.controls.set_auto_rotate(false);

        let resolution = self.loader.resolve(Some(&reference), self.is_dark);
        // Replacing the reference revokes the previous object URL.
        self.model_ref = Some(reference);
        self.needs_redraw = true;

        match resolution {
            Resolution::Load(job) => {
                self.display = DisplayObject::Pending(job.request());
                Some(Task::perform(job.run(), Message::ModelLoaded))
            }
            Resolution::Fallback(cube) => {
                self.display = DisplayObject::Fallback(cube);
                Some(Task::none())
            }
        }
    }

    fn apply_outcome(&mut self, outcome: LoadOutcome) {
        let request = outcome.request;
        match self.display.apply(outcome) {
            Applied::Loaded { triangles } => {
                let format = self
                    .model_ref
                    .as_ref()
                    .map(|r| r.format().to_string())
                    .unwrap_or_default();
                self.diagnostics
                    .log_state(AppStateEvent::ModelLoaded { format, triangles });
                self.needs_redraw = true;
            }
            Applied::Failed(error) => {
                let name = self
                    .model_ref
                    .as_ref()
                    .map(|r| r.file_name().to_string())
                    .unwrap_or_default();
                eprintln!("Failed to load model {} ({}): {}", name, request, error);
                self.diagnostics
                    .log_error(format!("Failed to load model {}: {}", name, error));
                self.needs_redraw = true;
            }
            Applied::Stale => {
                self.diagnostics.log_state(AppStateEvent::StaleLoadDiscarded);
            }
        }
    }

    fn reset(&mut self) {
        self.diagnostics.log_action(UserAction::ResetView);
        if self.model_ref.take().is_some() {
            // A fresh resolution supersedes any load still in flight.
            if let Resolution::Fallback(cube) = self.loader.resolve(None, self.is_dark) {
                self.display = DisplayObject::Fallback(cube);
            }
        }
        self.controls.set_auto_rotate(true);
        self.controls.reset();
        self.camera_changed();
    }

    fn export(&mut self) -> Task<Message> {
        self.diagnostics.log_action(UserAction::ExportScene);
        let scene = self.display.scene().unwrap_or_default();
        match glb::encode(&scene) {
            Ok(bytes) => Task::perform(
                render::write_output(self.export_dir.clone(), EXPORT_FILE_NAME, bytes),
                Message::ExportFinished,
            ),
            Err(error) => {
                self.report_failure("Failed to export scene", &error);
                Task::none()
            }
        }
    }

    fn screenshot(&mut self) -> Task<Message> {
        self.diagnostics.log_action(UserAction::CaptureScreenshot);
        let encoded = self
            .frame
            .as_ref()
            .ok_or_else(|| Error::Export("no frame has been rendered".into()))
            .and_then(Frame::encode_png);
        match encoded {
            Ok(bytes) => Task::perform(
                render::write_output(self.export_dir.clone(), SCREENSHOT_FILE_NAME, bytes),
                Message::ScreenshotFinished,
            ),
            Err(error) => {
                self.report_failure("Failed to save screenshot", &error);
                Task::none()
            }
        }
    }

    fn report_failure(&self, context: &str, error: &Error) {
        eprintln!("{}: {}", context, error);
        self.diagnostics.log_error(format!("{}: {}", context, error));
    }

    fn dismiss_tutorial(&mut self, now: Instant) {
        if !self.ui.tutorial_visible {
            return;
        }
        self.ui.tutorial_visible = false;
        if self.ui.instructions_visible {
            self.instructions_deadline = Some(now + self.instructions_delay.as_duration());
        }
    }

    fn check_instructions_deadline(&mut self, now: Instant) {
        if self.instructions_deadline.is_some_and(|deadline| now >= deadline) {
            self.instructions_deadline = None;
            self.ui.instructions_visible = false;
        }
    }

    fn advance_frame(&mut self, now: Instant) {
        let delta = self
            .last_frame
            .replace(now)
            .map(|previous| now.saturating_duration_since(previous).as_secs_f32())
            .unwrap_or(0.0)
            .min(MAX_FRAME_DELTA);

        if let DisplayObject::Fallback(cube) = &mut self.display {
            cube.advance(delta);
            self.needs_redraw = true;
        }
        if self.controls.update(delta) {
            self.camera_changed();
        }
        self.check_instructions_deadline(now);

        if self.needs_redraw {
            self.redraw();
        }
    }

    fn camera_changed(&mut self) {
        self.orientation.observe(self.controls.position());
        self.needs_redraw = true;
    }

    fn viewport_height(&self) -> f32 {
        let window_height = self.window_size.map_or(sizing::VIEWPORT_HEIGHT, |s| s.height);
        if self.ui.fullscreen_active {
            window_height
        } else {
            window_height.min(sizing::VIEWPORT_HEIGHT)
        }
    }

    fn redraw(&mut self) {
        let Some(frame) = self.frame.as_mut() else {
            return;
        };
        let scene = self.display.scene();
        self.rasterizer.draw(
            frame,
            scene.as_deref(),
            self.controls.view_matrix(),
            ColorScheme::for_theme(self.is_dark).viewport_clear_color(),
        );
        self.frame_handle = Some(frame.to_handle());
        self.needs_redraw = false;
    }

    /// The scene graph as currently displayed, for export and tests.
    #[must_use]
    pub fn live_scene(&self) -> Option<Scene> {
        self.display.scene().map(std::borrow::Cow::into_owned)
    }

    pub fn view<'a>(&'a self, env: ViewEnv<'a>) -> Element<'a, Message> {
        let i18n = env.i18n;
        let mut layers = Stack::new()
            .push(pane::view(pane::ViewContext {
                frame: self.frame_handle.as_ref(),
                is_dark: self.is_dark,
                is_dragging: self.drag.is_dragging(),
            }))
            .push(hud::compass(self.orientation.label(), self.is_dark))
            .push(hud::hint(i18n, self.ui, self.is_dark))
            .push(controls::view(controls::ViewContext {
                i18n,
                is_dark: self.is_dark,
                has_model: self.model_ref.is_some(),
            }));
        if self.files_hovered {
            layers = layers.push(hud::drop_overlay(i18n, self.is_dark));
        }

        let height = if self.ui.fullscreen_active {
            Length::Fill
        } else {
            Length::Fixed(sizing::VIEWPORT_HEIGHT)
        };
        layers.width(Length::Fill).height(height).into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnostics::{BufferCapacity, DiagnosticsCollector};
    use crate::model::LoadError;
    use crate::scene::CompassLabel;
    use std::path::Path;

    const TRIANGLE_STL: &str = "solid t\nfacet normal 0 0 1\nouter loop\nvertex 0 0 0\nvertex 1 0 0\nvertex 0 1 0\nendloop\nendfacet\nendsolid t\n";

    fn new_state(export_dir: &Path) -> (State, DiagnosticsCollector) {
        let collector = DiagnosticsCollector::new(BufferCapacity::default());
        let state = State::new(StateConfig {
            render_size: (160, 120),
            instructions_delay: InstructionsDelay::new(5000),
            auto_rotate_speed: 2.0,
            export_dir: export_dir.to_path_buf(),
            is_dark: true,
            fullscreen_active: false,
            diagnostics: collector.handle(),
        });
        (state, collector)
    }

    fn write_stl(dir: &Path, name: &str) -> PathBuf {
        let path = dir.join(name);
        std::fs::write(&path, TRIANGLE_STL).expect("write model");
        path
    }

    /// Delivers `message` and returns the effect, dropping the follow-up task.
    fn send(state: &mut State, message: Message, now: Instant) -> Effect {
        let (effect, _task) = state.handle_message(message, now);
        effect
    }

    fn drop_file(state: &mut State, path: PathBuf, now: Instant) {
        send(state, Message::FileDropped(path), now);
    }

    #[test]
    fn starts_with_tutorial_and_fallback_cube() {
        let dir = tempfile::tempdir().expect("temp dir");
        let (state, _collector) = new_state(dir.path());

        assert_eq!(state.ui_state(), ViewerUiState::default());
        assert!(matches!(state.display(), DisplayObject::Fallback(_)));
        assert!(state.controls().auto_rotate());
        assert_eq!(state.orientation(), CompassLabel::N);
        assert!(state.frame().is_some());
    }

    #[test]
    fn unsupported_drop_changes_nothing() {
        let dir = tempfile::tempdir().expect("temp dir");
        let (mut state, _collector) = new_state(dir.path());

        drop_file(&mut state, dir.path().join("notes.txt"), Instant::now());

        assert!(state.model_reference().is_none());
        assert!(state.ui_state().tutorial_visible);
        assert!(state.registry().is_empty());
        assert!(!state.has_pending_deadline());
    }

    #[test]
    fn valid_drop_dismisses_tutorial_and_starts_load() {
        let dir = tempfile::tempdir().expect("temp dir");
        let (mut state, _collector) = new_state(dir.path());

        drop_file(&mut state, write_stl(dir.path(), "a.stl"), Instant::now());

        assert!(!state.ui_state().tutorial_visible);
        assert!(state.ui_state().instructions_visible);
        assert!(state.has_pending_deadline());
        assert!(state.display().pending_request().is_some());
        assert!(!state.controls().auto_rotate());
        assert_eq!(state.registry().len(), 1);
    }

    #[test]
    fn second_drop_replaces_and_revokes_previous_reference() {
        let dir = tempfile::tempdir().expect("temp dir");
        let (mut state, _collector) = new_state(dir.path());
        let start = Instant::now();

        drop_file(&mut state, write_stl(dir.path(), "a.stl"), start);
        let first_url = state.model_reference().expect("reference").url().to_string();

        drop_file(
            &mut state,
            write_stl(dir.path(), "b.stl"),
            start + Duration::from_secs(2),
        );

        assert!(!state.ui_state().tutorial_visible);
        assert_eq!(state.registry().len(), 1);
        assert!(state.registry().resolve(&first_url).is_none());
        assert_eq!(
            state.model_reference().expect("reference").file_name(),
            "b.stl"
        );
    }

    #[test]
    fn only_first_file_of_a_multi_file_drop_is_used() {
        let dir = tempfile::tempdir().expect("temp dir");
        let (mut state, _collector) = new_state(dir.path());
        let start = Instant::now();

        drop_file(&mut state, write_stl(dir.path(), "a.stl"), start);
        drop_file(
            &mut state,
            write_stl(dir.path(), "b.stl"),
            start + Duration::from_millis(5),
        );

        assert_eq!(
            state.model_reference().expect("reference").file_name(),
            "a.stl"
        );
    }

    #[test]
    fn instructions_hide_at_deadline_not_before() {
        let dir = tempfile::tempdir().expect("temp dir");
        let (mut state, _collector) = new_state(dir.path());
        let start = Instant::now();
        drop_file(&mut state, write_stl(dir.path(), "a.stl"), start);

        send(
            &mut state,
            Message::Tick(start + Duration::from_millis(4999)),
            start + Duration::from_millis(4999),
        );
        assert!(state.ui_state().instructions_visible);

        send(
            &mut state,
            Message::Tick(start + Duration::from_millis(5000)),
            start + Duration::from_millis(5000),
        );
        assert!(!state.ui_state().instructions_visible);
        assert!(!state.has_pending_deadline());
    }

    #[test]
    fn later_drops_do_not_restart_the_deadline() {
        let dir = tempfile::tempdir().expect("temp dir");
        let (mut state, _collector) = new_state(dir.path());
        let start = Instant::now();
        drop_file(&mut state, write_stl(dir.path(), "a.stl"), start);
        drop_file(
            &mut state,
            write_stl(dir.path(), "b.stl"),
            start + Duration::from_secs(3),
        );

        send(
            &mut state,
            Message::Tick(start + Duration::from_secs(5)),
            start + Duration::from_secs(5),
        );
        assert!(!state.ui_state().instructions_visible);
    }

    #[test]
    fn reset_without_model_still_resets_camera() {
        let dir = tempfile::tempdir().expect("temp dir");
        let (mut state, _collector) = new_state(dir.path());
        let now = Instant::now();

        send(&mut state, Message::DragStarted(DragMode::Rotate), now);
        send(&mut state, Message::PointerMoved(Point::new(0.0, 0.0)), now);
        send(&mut state, Message::PointerMoved(Point::new(150.0, 0.0)), now);
        assert_ne!(state.orientation(), CompassLabel::N);

        send(&mut state, Message::Reset, now);

        assert!(state.model_reference().is_none());
        assert_eq!(state.controls(), &OrbitControls::new(2.0));
        assert_eq!(state.orientation(), CompassLabel::N);
    }

    #[test]
    fn reset_clears_reference_and_discards_in_flight_load() {
        let dir = tempfile::tempdir().expect("temp dir");
        let (mut state, _collector) = new_state(dir.path());
        drop_file(&mut state, write_stl(dir.path(), "a.stl"), Instant::now());
        let request = state.display().pending_request().expect("pending");

        send(&mut state, Message::Reset, Instant::now());

        assert!(state.model_reference().is_none());
        assert!(state.registry().is_empty());
        assert!(state.controls().auto_rotate());
        assert!(!state.ui_state().tutorial_visible);

        let late = LoadOutcome {
            request,
            result: Err(LoadError::Revoked),
        };
        send(&mut state, Message::ModelLoaded(late), Instant::now());
        assert!(matches!(state.display(), DisplayObject::Fallback(_)));
    }

    #[test]
    fn stale_load_results_are_discarded() {
        let dir = tempfile::tempdir().expect("temp dir");
        let (mut state, _collector) = new_state(dir.path());
        let start = Instant::now();

        drop_file(&mut state, write_stl(dir.path(), "a.stl"), start);
        let first = state.display().pending_request().expect("pending");
        drop_file(
            &mut state,
            write_stl(dir.path(), "b.stl"),
            start + Duration::from_secs(1),
        );
        let second = state.display().pending_request().expect("pending");
        assert_ne!(first, second);

        let stale = LoadOutcome {
            request: first,
            result: Ok(std::sync::Arc::new(Scene::default())),
        };
        send(&mut state, Message::ModelLoaded(stale), Instant::now());
        assert_eq!(state.display().pending_request(), Some(second));
    }

    #[test]
    fn fullscreen_flag_follows_reported_mode() {
        let dir = tempfile::tempdir().expect("temp dir");
        let (mut state, _collector) = new_state(dir.path());
        let now = Instant::now();

        let effect = send(&mut state, Message::ToggleFullscreen, now);
        assert_eq!(effect, Effect::ToggleFullscreen);
        assert!(!state.ui_state().fullscreen_active);

        send(&mut state, Message::FullscreenChanged(true), now);
        assert!(state.ui_state().fullscreen_active);

        // An external exit is picked up by the resize re-query.
        let effect = send(&mut state, Message::WindowResized(Size::new(800.0, 600.0)), now);
        assert_eq!(effect, Effect::QueryFullscreen);
        send(&mut state, Message::FullscreenChanged(false), now);
        assert!(!state.ui_state().fullscreen_active);
    }

    #[test]
    fn frames_spin_the_cube_and_auto_rotate_the_camera() {
        let dir = tempfile::tempdir().expect("temp dir");
        let (mut state, _collector) = new_state(dir.path());
        let start = Instant::now();

        send(&mut state, Message::Frame(start), start);
        let later = start + Duration::from_millis(50);
        send(&mut state, Message::Frame(later), later);

        let DisplayObject::Fallback(cube) = state.display() else {
            panic!("expected cube");
        };
        assert!((cube.rotation().x - 0.05 * 0.2).abs() < 1e-5);
        assert!(state.controls().position().x.abs() > 0.0);
    }

    #[test]
    fn scroll_zooms_in() {
        let dir = tempfile::tempdir().expect("temp dir");
        let (mut state, _collector) = new_state(dir.path());
        let before = state.controls().distance();

        send(
            &mut state,
            Message::Scrolled(mouse::ScrollDelta::Lines { x: 0.0, y: 1.0 }),
            Instant::now(),
        );

        assert!(state.controls().distance() < before);
    }

    #[test]
    fn theme_switch_recolors_cube() {
        let dir = tempfile::tempdir().expect("temp dir");
        let (mut state, _collector) = new_state(dir.path());

        state.set_theme(false);

        let DisplayObject::Fallback(cube) = state.display() else {
            panic!("expected cube");
        };
        assert_eq!(cube.palette(), crate::scene::CubePalette::LIGHT);
    }

    #[tokio::test]
    async fn export_and_screenshot_write_fixed_file_names() {
        let dir = tempfile::tempdir().expect("temp dir");
        let (mut state, _collector) = new_state(dir.path());

        let scene = state.live_scene().expect("cube scene");
        let bytes = glb::encode(&scene).expect("encodes");
        let path = render::write_output(dir.path().to_path_buf(), EXPORT_FILE_NAME, bytes)
            .await
            .expect("export written");
        assert_eq!(path.file_name().and_then(|n| n.to_str()), Some("model-export.glb"));

        let png = state.frame().expect("frame").encode_png().expect("png");
        let path = render::write_output(dir.path().to_path_buf(), SCREENSHOT_FILE_NAME, png)
            .await
            .expect("screenshot written");
        assert!(path.ends_with("model-screenshot.png"));

        // Failures are logged, never surfaced.
        let effect = send(
            &mut state,
            Message::ExportFinished(Err(Error::Io("disk full".into()))),
            Instant::now(),
        );
        assert_eq!(effect, Effect::None);
    }

    #[test]
    fn failures_reach_diagnostics() {
        let dir = tempfile::tempdir().expect("temp dir");
        let (mut state, mut collector) = new_state(dir.path());

        send(
            &mut state,
            Message::ScreenshotFinished(Err(Error::Io("denied".into()))),
            Instant::now(),
        );
        collector.process_pending();

        assert!(collector.iter().any(|event| matches!(
            &event.kind,
            crate::diagnostics::DiagnosticEventKind::Error { message }
                if message.contains("denied")
        )));
    }
}
