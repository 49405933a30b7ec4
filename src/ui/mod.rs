// SPDX-License-Identifier: MPL-2.0
//! User interface components and state management.
//!
//! This module organizes all UI-related code following a component-based architecture
//! with the Elm-style "state down, messages up" pattern.
//!
//! # Screens
//!
//! - [`viewer`] - 3D viewport with orbit controls, export and screenshots
//! - [`gallery`] - Remote model gallery with upload and download
//!
//! # Shared Infrastructure
//!
//! - [`state`] - Orbit drag state
//! - [`styles`] - Centralized styling (buttons, containers, tooltips)
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`theming`] - Light/Dark/System theme mode management
//! - [`navbar`] - Title bar with screen tabs and theme toggle

pub mod design_tokens;
pub mod gallery;
pub mod navbar;
pub mod state;
pub mod styles;
pub mod theming;
pub mod viewer;
