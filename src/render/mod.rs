// SPDX-License-Identifier: MPL-2.0
//! Software rendering of the live scene and its exports.
//!
//! - [`frame`]: retained RGBA frame buffer shown in the viewport
//! - [`rasterizer`]: flat-shaded triangle rasterizer drawing into a frame
//! - [`glb`]: binary glTF serialization of the scene graph

pub mod frame;
pub mod glb;
pub mod rasterizer;

pub use frame::Frame;
pub use rasterizer::{Rasterizer, RenderStats};

use crate::error::Result;
use std::path::PathBuf;

/// Writes `bytes` to `directory/file_name`, creating the directory first.
///
/// An existing file with the same name is replaced.
///
/// # Errors
///
/// Returns [`crate::error::Error::Io`] if the directory or file cannot be written.
pub async fn write_output(directory: PathBuf, file_name: &str, bytes: Vec<u8>) -> Result<PathBuf> {
    tokio::fs::create_dir_all(&directory).await?;
    let path = directory.join(file_name);
    tokio::fs::write(&path, bytes).await?;
    Ok(path)
}
