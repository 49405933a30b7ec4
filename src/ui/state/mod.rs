// SPDX-License-Identifier: MPL-2.0
//! UI state shared by the viewer screen.

pub mod drag;
pub mod instructions_delay;

pub use drag::{DragMode, DragState};
pub use instructions_delay::InstructionsDelay;
