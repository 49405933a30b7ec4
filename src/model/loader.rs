// SPDX-License-Identifier: MPL-2.0
//! Resolves the current model reference into something to display.
//!
//! With no reference the viewer shows the animated fallback cube. With one,
//! a [`LoadJob`] parses the file off the UI thread. Every job carries a
//! [`LoadRequestId`] and only the result of the latest request is applied.

use super::{
    gltf_reader, obj_reader, stl_reader, LoadError, ModelFormat, ModelReference,
    ObjectUrlRegistry,
};
use crate::scene::{FallbackCube, Scene};
use std::borrow::Cow;
use std::fmt;
use std::path::PathBuf;
use std::sync::Arc;

/// Monotonic id stamped on every load.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct LoadRequestId(u64);

impl fmt::Display for LoadRequestId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// What the viewport draws.
#[derive(Debug, Clone)]
pub enum DisplayObject {
    /// A load is in flight; nothing is drawn.
    Pending(LoadRequestId),
    /// A parsed model, centred on the origin.
    Model(Arc<Scene>),
    /// The placeholder cube shown without a model reference.
    Fallback(FallbackCube),
    /// The last load failed; nothing is drawn.
    Empty,
}

/// Result of handing a [`LoadOutcome`] to [`DisplayObject::apply`].
#[derive(Debug, Clone, PartialEq)]
pub enum Applied {
    Loaded { triangles: usize },
    Failed(LoadError),
    /// The outcome belongs to a superseded request and was dropped.
    Stale,
}

impl DisplayObject {
    /// The live scene graph, if anything is drawn.
    #[must_use]
    pub fn scene(&self) -> Option<Cow<'_, Scene>> {
        match self {
            DisplayObject::Model(scene) => Some(Cow::Borrowed(scene.as_ref())),
            DisplayObject::Fallback(cube) => Some(Cow::Owned(cube.scene())),
            DisplayObject::Pending(_) | DisplayObject::Empty => None,
        }
    }

    #[must_use]
    pub fn pending_request(&self) -> Option<LoadRequestId> {
        match self {
            DisplayObject::Pending(id) => Some(*id),
            _ => None,
        }
    }

    /// Applies a finished load if it answers the pending request.
    pub fn apply(&mut self, outcome: LoadOutcome) -> Applied {
        if self.pending_request() != Some(outcome.request) {
            return Applied::Stale;
        }
        match outcome.result {
            Ok(scene) => {
                let triangles = scene.triangle_count();
                *self = DisplayObject::Model(scene);
                Applied::Loaded { triangles }
            }
            Err(error) => {
                *self = DisplayObject::Empty;
                Applied::Failed(error)
            }
        }
    }
}

/// What [`SceneLoader::resolve`] asks the caller to do.
#[derive(Debug)]
pub enum Resolution {
    /// Show the cube right away.
    Fallback(FallbackCube),
    /// Show nothing until `job` finishes.
    Load(LoadJob),
}

/// Finished load, routed back to the viewer as a message.
#[derive(Debug, Clone)]
pub struct LoadOutcome {
    pub request: LoadRequestId,
    pub result: Result<Arc<Scene>, LoadError>,
}

/// An asynchronous parse of one model reference.
#[derive(Debug, Clone)]
pub struct LoadJob {
    request: LoadRequestId,
    url: String,
    format: ModelFormat,
    registry: ObjectUrlRegistry,
}

impl LoadJob {
    #[must_use]
    pub fn request(&self) -> LoadRequestId {
        self.request
    }

    /// Resolves the URL, parses the file on the blocking pool and centres
    /// the result. A URL revoked before this runs yields
    /// [`LoadError::Revoked`].
    pub async fn run(self) -> LoadOutcome {
        let request = self.request;
        let result = match self.registry.resolve(&self.url) {
            Some(path) => {
                let format = self.format;
                tokio::task::spawn_blocking(move || parse(format, path))
                    .await
                    .unwrap_or_else(|e| Err(LoadError::Parse(e.to_string())))
            }
            None => Err(LoadError::Revoked),
        };
        LoadOutcome {
            request,
            result: result.map(Arc::new),
        }
    }
}

/// Parses `path` as `format` and centres it on the origin.
///
/// # Errors
///
/// Returns the reader's error, or [`LoadError::EmptyGeometry`] when the file
/// holds no triangles.
pub fn parse(format: ModelFormat, path: PathBuf) -> Result<Scene, LoadError> {
    let mut scene = match format {
        ModelFormat::Glb | ModelFormat::Gltf => gltf_reader::read(&path)?,
        ModelFormat::Obj => obj_reader::read(&path)?,
        ModelFormat::Stl => stl_reader::read(&path)?,
    };
    if scene.is_empty() {
        return Err(LoadError::EmptyGeometry);
    }
    scene.center_on_origin();
    Ok(scene)
}

/// Issues load jobs against one object URL registry.
#[derive(Debug, Clone, Default)]
pub struct SceneLoader {
    registry: ObjectUrlRegistry,
    last_request: u64,
}

impl SceneLoader {
    #[must_use]
    pub fn new(registry: ObjectUrlRegistry) -> Self {
        Self {
            registry,
            last_request: 0,
        }
    }

    #[must_use]
    pub fn registry(&self) -> &ObjectUrlRegistry {
        &self.registry
    }

    /// Decides what to display for `model_ref`.
    ///
    /// Each call with a reference stamps a fresh request id, which supersedes
    /// every earlier one.
    pub fn resolve(&mut self, model_ref: Option<&ModelReference>, is_dark: bool) -> Resolution {
        match model_ref {
            None => Resolution::Fallback(FallbackCube::new(is_dark)),
            Some(reference) => {
                self.last_request += 1;
                Resolution::Load(LoadJob {
                    request: LoadRequestId(self.last_request),
                    url: reference.url().to_string(),
                    format: reference.format(),
                    registry: self.registry.clone(),
                })
            }
        }
    }
}
