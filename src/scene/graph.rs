// SPDX-License-Identifier: MPL-2.0
//! Flattened scene graph.
//!
//! Node hierarchies from loaded files are baked into world transforms, so the
//! live scene is a flat list of named nodes.

use super::mesh::{Bounds, Mesh};
use glam::{Mat4, Vec3};

#[derive(Debug, Clone, PartialEq)]
pub struct SceneNode {
    pub name: String,
    /// Local-to-world transform.
    pub transform: Mat4,
    pub meshes: Vec<Mesh>,
}

impl SceneNode {
    #[must_use]
    pub fn new(name: impl Into<String>, transform: Mat4, meshes: Vec<Mesh>) -> Self {
        Self {
            name: name.into(),
            transform,
            meshes,
        }
    }

    #[must_use]
    pub fn bounds(&self) -> Option<Bounds> {
        self.meshes
            .iter()
            .filter_map(|mesh| mesh.bounds(self.transform))
            .reduce(Bounds::union)
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Scene {
    pub nodes: Vec<SceneNode>,
}

impl Scene {
    #[must_use]
    pub fn new(nodes: Vec<SceneNode>) -> Self {
        Self { nodes }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.triangle_count() == 0
    }

    #[must_use]
    pub fn triangle_count(&self) -> usize {
        self.nodes
            .iter()
            .flat_map(|node| &node.meshes)
            .map(Mesh::triangle_count)
            .sum()
    }

    #[must_use]
    pub fn bounds(&self) -> Option<Bounds> {
        self.nodes
            .iter()
            .filter_map(SceneNode::bounds)
            .reduce(Bounds::union)
    }

    /// Translates every node so the bounding box is centred on the origin.
    pub fn center_on_origin(&mut self) {
        let Some(bounds) = self.bounds() else {
            return;
        };
        let offset = Mat4::from_translation(-bounds.center());
        for node in &mut self.nodes {
            node.transform = offset * node.transform;
        }
    }

    /// Iterates `(world_transform, mesh)` pairs.
    pub fn meshes(&self) -> impl Iterator<Item = (Mat4, &Mesh)> {
        self.nodes
            .iter()
            .flat_map(|node| node.meshes.iter().map(move |mesh| (node.transform, mesh)))
    }

    /// Centre of the bounding box, or the origin for an empty scene.
    #[must_use]
    pub fn center(&self) -> Vec3 {
        self.bounds().map_or(Vec3::ZERO, |b| b.center())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::mesh::Material;

    fn cube_node_at(offset: Vec3) -> SceneNode {
        SceneNode::new(
            "cube",
            Mat4::from_translation(offset),
            vec![Mesh::unit_cube(Material::default())],
        )
    }

    #[test]
    fn empty_scene_has_no_bounds() {
        let scene = Scene::default();
        assert!(scene.is_empty());
        assert!(scene.bounds().is_none());
        assert_eq!(scene.center(), Vec3::ZERO);
    }

    #[test]
    fn center_on_origin_moves_bounds_center() {
        let mut scene = Scene::new(vec![
            cube_node_at(Vec3::new(10.0, 0.0, 0.0)),
            cube_node_at(Vec3::new(12.0, 4.0, 0.0)),
        ]);
        scene.center_on_origin();

        let center = scene.center();
        assert!(center.length() < 1e-5, "center was {center:?}");
        assert_eq!(scene.triangle_count(), 24);
    }

    #[test]
    fn meshes_pairs_each_mesh_with_node_transform() {
        let scene = Scene::new(vec![cube_node_at(Vec3::Y)]);
        let pairs: Vec<_> = scene.meshes().collect();
        assert_eq!(pairs.len(), 1);
        assert_eq!(pairs[0].0, Mat4::from_translation(Vec3::Y));
    }
}
