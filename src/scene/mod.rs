// SPDX-License-Identifier: MPL-2.0
//! Live scene graph and camera.
//!
//! The scene graph is what gets drawn every frame, exported to GLB and
//! captured in screenshots. It holds either a parsed model or the animated
//! fallback cube. The camera is driven by [`orbit::OrbitControls`] and
//! reported to the user through [`orientation::OrientationIndicator`].

pub mod cube;
pub mod graph;
pub mod mesh;
pub mod orbit;
pub mod orientation;

pub use cube::{CubePalette, FallbackCube};
pub use graph::{Scene, SceneNode};
pub use mesh::{Bounds, Material, Mesh};
pub use orbit::OrbitControls;
pub use orientation::{CompassLabel, OrientationIndicator};
