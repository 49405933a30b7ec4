// SPDX-License-Identifier: MPL-2.0
//! Placeholder cube shown while no model is loaded.

use super::graph::{Scene, SceneNode};
use super::mesh::{Material, Mesh};
use crate::config::CUBE_SPIN_RATE;
use glam::{EulerRot, Mat4, Vec2};

/// Material factors for the cube, one per theme.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CubePalette {
    pub base: u32,
    pub emissive: u32,
    pub roughness: f32,
    pub metalness: f32,
    pub emissive_intensity: f32,
}

impl CubePalette {
    pub const LIGHT: Self = Self {
        base: 0xFF6B6B,
        emissive: 0xFF8787,
        roughness: 0.5,
        metalness: 1.0,
        emissive_intensity: 0.6,
    };

    pub const DARK: Self = Self {
        base: 0x06B6D4,
        emissive: 0x0EA5E9,
        roughness: 0.2,
        metalness: 0.9,
        emissive_intensity: 0.4,
    };

    #[must_use]
    pub fn for_theme(is_dark: bool) -> Self {
        if is_dark {
            Self::DARK
        } else {
            Self::LIGHT
        }
    }

    #[must_use]
    pub fn material(&self) -> Material {
        Material {
            roughness: self.roughness,
            metalness: self.metalness,
            emissive_intensity: self.emissive_intensity,
            ..Material::from_hex(self.base, self.emissive)
        }
    }
}

/// Self-animating unit cube.
#[derive(Debug, Clone, PartialEq)]
pub struct FallbackCube {
    /// Euler rotation around x and y, in radians.
    rotation: Vec2,
    palette: CubePalette,
}

impl FallbackCube {
    #[must_use]
    pub fn new(is_dark: bool) -> Self {
        Self {
            rotation: Vec2::ZERO,
            palette: CubePalette::for_theme(is_dark),
        }
    }

    /// Per-frame callback; `delta` is the elapsed time in seconds.
    pub fn advance(&mut self, delta: f32) {
        self.rotation.x += delta * CUBE_SPIN_RATE;
        self.rotation.y += delta * CUBE_SPIN_RATE;
    }

    /// Swaps the palette without resetting the animation.
    pub fn set_theme(&mut self, is_dark: bool) {
        self.palette = CubePalette::for_theme(is_dark);
    }

    #[must_use]
    pub fn rotation(&self) -> Vec2 {
        self.rotation
    }

    #[must_use]
    pub fn palette(&self) -> CubePalette {
        self.palette
    }

    #[must_use]
    pub fn transform(&self) -> Mat4 {
        Mat4::from_euler(EulerRot::XYZ, self.rotation.x, self.rotation.y, 0.0)
    }

    /// The cube as a one-node scene with its current rotation.
    #[must_use]
    pub fn scene(&self) -> Scene {
        Scene::new(vec![SceneNode::new(
            "Cube",
            self.transform(),
            vec![Mesh::unit_cube(self.palette.material())],
        )])
    }
}
