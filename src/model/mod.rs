// SPDX-License-Identifier: MPL-2.0
//! 3D model ingestion.
//!
//! A dropped or selected file becomes a [`ModelReference`]: a revocable
//! object URL plus the detected [`ModelFormat`]. The [`loader`] resolves the
//! reference into something the viewer can display.

pub mod format;
pub mod gltf_reader;
pub mod loader;
pub mod obj_reader;
pub mod object_url;
pub mod stl_reader;

pub use format::ModelFormat;
pub use loader::{
    Applied, DisplayObject, LoadJob, LoadOutcome, LoadRequestId, Resolution, SceneLoader,
};
pub use object_url::{ObjectUrl, ObjectUrlRegistry};

use std::fmt;
use std::path::{Path, PathBuf};

/// Why a model could not be displayed.
#[derive(Debug, Clone, PartialEq)]
pub enum LoadError {
    /// The file extension is not one of glb, gltf, obj or stl.
    UnsupportedFormat(String),

    /// The object URL was revoked before the load read it.
    Revoked,

    /// The file could not be read.
    Io(String),

    /// The file was read but is not a valid model.
    Parse(String),

    /// The model parsed but contains no triangles.
    EmptyGeometry,
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoadError::UnsupportedFormat(ext) => write!(f, "Unsupported model format: {}", ext),
            LoadError::Revoked => write!(f, "Model reference was revoked"),
            LoadError::Io(msg) => write!(f, "I/O error: {}", msg),
            LoadError::Parse(msg) => write!(f, "Parse error: {}", msg),
            LoadError::EmptyGeometry => write!(f, "Model contains no geometry"),
        }
    }
}

impl std::error::Error for LoadError {}

impl From<std::io::Error> for LoadError {
    fn from(err: std::io::Error) -> Self {
        LoadError::Io(err.to_string())
    }
}

/// Handle to the model currently shown in the viewer.
///
/// Owns its object URL, so dropping the reference revokes the URL.
#[derive(Debug)]
pub struct ModelReference {
    url: ObjectUrl,
    file_name: String,
    format: ModelFormat,
}

impl ModelReference {
    /// Registers `path` and detects its format.
    ///
    /// # Errors
    ///
    /// Returns [`LoadError::UnsupportedFormat`] when the extension is not a
    /// supported model type. Nothing is registered in that case.
    pub fn register(
        registry: &ObjectUrlRegistry,
        path: impl Into<PathBuf>,
    ) -> Result<Self, LoadError> {
        let path = path.into();
        let format = ModelFormat::from_path(&path)?;
        let file_name = file_name_of(&path);
        Ok(Self {
            url: registry.create(path),
            file_name,
            format,
        })
    }

    #[must_use]
    pub fn url(&self) -> &str {
        self.url.as_str()
    }

    #[must_use]
    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    #[must_use]
    pub fn format(&self) -> ModelFormat {
        self.format
    }
}

fn file_name_of(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn register_rejects_unsupported_extension_without_registering() {
        let registry = ObjectUrlRegistry::default();
        let result = ModelReference::register(&registry, "/tmp/photo.png");
        assert!(matches!(result, Err(LoadError::UnsupportedFormat(ext)) if ext == "png"));
        assert_eq!(registry.len(), 0);
    }

    #[test]
    fn dropping_reference_revokes_url() {
        let registry = ObjectUrlRegistry::default();
        let reference =
            ModelReference::register(&registry, "/models/Tree.GLB").expect("glb is supported");
        assert_eq!(reference.format(), ModelFormat::Glb);
        assert_eq!(reference.file_name(), "Tree.GLB");
        let url = reference.url().to_string();
        assert!(registry.resolve(&url).is_some());

        drop(reference);
        assert!(registry.resolve(&url).is_none());
        assert_eq!(registry.len(), 0);
    }

    #[test]
    fn load_error_display_is_readable() {
        assert_eq!(
            LoadError::UnsupportedFormat("fbx".into()).to_string(),
            "Unsupported model format: fbx"
        );
        assert_eq!(
            LoadError::EmptyGeometry.to_string(),
            "Model contains no geometry"
        );
    }
}
