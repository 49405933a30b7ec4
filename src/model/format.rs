// SPDX-License-Identifier: MPL-2.0
//! Supported model file formats.

use super::LoadError;
use std::fmt;
use std::path::Path;

/// Extensions accepted by drop, open dialog and CLI.
pub const SUPPORTED_EXTENSIONS: [&str; 4] = ["glb", "gltf", "obj", "stl"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ModelFormat {
    /// Binary glTF.
    Glb,
    /// JSON glTF, possibly with external buffers.
    Gltf,
    /// Wavefront OBJ.
    Obj,
    /// Stereolithography, binary or ASCII.
    Stl,
}

impl ModelFormat {
    /// Detects the format from the extension, case-insensitively.
    ///
    /// # Errors
    ///
    /// Returns [`LoadError::UnsupportedFormat`] with the lowercased extension
    /// (empty when there is none).
    pub fn from_path(path: &Path) -> Result<Self, LoadError> {
        let extension = path
            .extension()
            .map(|ext| ext.to_string_lossy().to_lowercase())
            .unwrap_or_default();
        Self::from_extension(&extension).ok_or(LoadError::UnsupportedFormat(extension))
    }

    #[must_use]
    pub fn from_extension(extension: &str) -> Option<Self> {
        match extension.to_ascii_lowercase().as_str() {
            "glb" => Some(ModelFormat::Glb),
            "gltf" => Some(ModelFormat::Gltf),
            "obj" => Some(ModelFormat::Obj),
            "stl" => Some(ModelFormat::Stl),
            _ => None,
        }
    }

    #[must_use]
    pub fn extension(self) -> &'static str {
        match self {
            ModelFormat::Glb => "glb",
            ModelFormat::Gltf => "gltf",
            ModelFormat::Obj => "obj",
            ModelFormat::Stl => "stl",
        }
    }

    #[must_use]
    pub fn mime_type(self) -> &'static str {
        match self {
            ModelFormat::Glb => "model/gltf-binary",
            ModelFormat::Gltf => "model/gltf+json",
            ModelFormat::Obj => "model/obj",
            ModelFormat::Stl => "model/stl",
        }
    }
}

impl fmt::Display for ModelFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detects_all_supported_extensions_case_insensitively() {
        for (name, format) in [
            ("a.glb", ModelFormat::Glb),
            ("b.GLTF", ModelFormat::Gltf),
            ("c.Obj", ModelFormat::Obj),
            ("d.stl", ModelFormat::Stl),
        ] {
            assert_eq!(ModelFormat::from_path(Path::new(name)), Ok(format));
        }
    }

    #[test]
    fn rejects_other_extensions() {
        assert_eq!(
            ModelFormat::from_path(Path::new("scene.fbx")),
            Err(LoadError::UnsupportedFormat("fbx".into()))
        );
        assert_eq!(
            ModelFormat::from_path(Path::new("README")),
            Err(LoadError::UnsupportedFormat(String::new()))
        );
        assert!(ModelFormat::from_path(Path::new("model.glb.txt")).is_err());
    }

    #[test]
    fn supported_extensions_round_trip() {
        for ext in SUPPORTED_EXTENSIONS {
            let format = ModelFormat::from_extension(ext).expect("listed extension");
            assert_eq!(format.extension(), ext);
            assert!(format.mime_type().starts_with("model/"));
        }
    }
}
