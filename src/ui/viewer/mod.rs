// SPDX-License-Identifier: MPL-2.0
//! 3D model viewer: the viewport, its overlays and the action column.

pub mod component;
pub mod controls;
pub mod fullscreen;
pub mod hud;
pub mod pane;

pub use component::{Effect, Message, State, StateConfig, ViewEnv, ViewerUiState};
