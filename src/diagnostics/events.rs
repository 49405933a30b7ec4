// SPDX-License-Identifier: MPL-2.0
//! Diagnostic event types for activity tracking.

use std::time::Instant;

use serde::{Deserialize, Serialize};

/// User-initiated actions that can be captured for diagnostics.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum UserAction {
    // ==========================================================================
    // Viewer Actions
    // ==========================================================================
    /// Load a model file (drag-drop, file dialog or CLI).
    LoadModel {
        /// Optional context (e.g., `file_dialog`, `drag_drop`, `cli`).
        #[serde(skip_serializing_if = "Option::is_none")]
        source: Option<String>,
    },

    /// Clear the model and reset the camera.
    ResetView,

    /// Export the live scene as GLB.
    ExportScene,

    /// Save a screenshot of the viewport.
    CaptureScreenshot,

    ToggleFullscreen,

    // ==========================================================================
    // Application Actions
    // ==========================================================================
    ToggleTheme,

    /// Write the diagnostics buffer to the export directory.
    ExportDiagnostics,

    /// Switch between the viewer and the gallery.
    SwitchScreen {
        screen: String,
    },

    // ==========================================================================
    // Gallery Actions
    // ==========================================================================
    UploadModel,

    DownloadModel {
        id: u64,
    },
}

/// Application state transitions worth recording.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum AppStateEvent {
    /// A model finished loading and replaced the display.
    ModelLoaded {
        format: String,
        triangles: usize,
    },

    /// A load result arrived for a request that is no longer current.
    StaleLoadDiscarded,

    /// The window reported a fullscreen mode change.
    FullscreenChanged {
        active: bool,
    },

    /// The gallery list was refreshed from the remote API.
    GalleryRefreshed {
        count: usize,
    },
}

/// A diagnostic event with timestamp.
#[derive(Debug, Clone)]
pub struct DiagnosticEvent {
    /// When the event occurred (monotonic clock for duration calculations)
    pub timestamp: Instant,
    pub kind: DiagnosticEventKind,
}

impl DiagnosticEvent {
    #[must_use]
    pub fn new(kind: DiagnosticEventKind) -> Self {
        Self {
            timestamp: Instant::now(),
            kind,
        }
    }

    #[must_use]
    pub fn with_timestamp(kind: DiagnosticEventKind, timestamp: Instant) -> Self {
        Self { timestamp, kind }
    }
}

/// The type and associated data for a diagnostic event.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum DiagnosticEventKind {
    UserAction {
        action: UserAction,
        /// Optional additional details (e.g., filename, error context).
        #[serde(skip_serializing_if = "Option::is_none")]
        details: Option<String>,
    },

    AppState {
        state: AppStateEvent,
    },

    /// Non-critical warning.
    Warning {
        message: String,
    },

    /// Operation failure. Nothing in this application is fatal.
    Error {
        message: String,
    },
}
