// SPDX-License-Identifier: MPL-2.0
//! `model_lens` is a lightweight 3D model viewer built with the Iced GUI framework.
//!
//! It renders glTF, GLB, OBJ and STL files in an orbitable viewport, exports the
//! live scene as GLB, captures screenshots, and browses a remote model gallery.

#![doc(html_root_url = "https://docs.rs/model_lens/0.1.0")]

pub mod app;
pub mod config;
pub mod diagnostics;
pub mod error;
pub mod gallery;
pub mod i18n;
pub mod model;
pub mod render;
pub mod scene;
pub mod ui;
