// SPDX-License-Identifier: MPL-2.0
//! Drag state management
//!
//! Tracks an orbit drag in the viewport: the left button rotates, the right
//! button pans.

use iced::{mouse, Point, Vector};

/// What a drag does to the camera.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragMode {
    Rotate,
    Pan,
}

impl DragMode {
    /// Mode for a pressed mouse button, if the button drags at all.
    #[must_use]
    pub fn for_button(button: mouse::Button) -> Option<Self> {
        match button {
            mouse::Button::Left => Some(DragMode::Rotate),
            mouse::Button::Right | mouse::Button::Middle => Some(DragMode::Pan),
            _ => None,
        }
    }
}

/// Manages orbit drag state
#[derive(Debug, Clone, Default)]
pub struct DragState {
    mode: Option<DragMode>,
    /// Last pointer position seen during the drag.
    last_position: Option<Point>,
}

impl DragState {
    /// Starts a drag; the first move sets the anchor position.
    pub fn start(&mut self, mode: DragMode, position: Option<Point>) {
        self.mode = Some(mode);
        self.last_position = position;
    }

    pub fn stop(&mut self) {
        self.mode = None;
        self.last_position = None;
    }

    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.mode.is_some()
    }

    #[must_use]
    pub fn mode(&self) -> Option<DragMode> {
        self.mode
    }

    /// Records the new pointer position and returns the movement since the
    /// previous one, or `None` when not dragging.
    pub fn advance(&mut self, position: Point) -> Option<(DragMode, Vector)> {
        let mode = self.mode?;
        let previous = self.last_position.replace(position)?;
        Some((mode, position - previous))
    }
}
