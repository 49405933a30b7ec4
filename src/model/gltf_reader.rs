// SPDX-License-Identifier: MPL-2.0
//! glTF 2.0 (`.gltf` and `.glb`) import through the `gltf` crate.
//!
//! Node hierarchies are flattened into world transforms. Only triangle
//! primitives are kept; images are never decoded.

use super::LoadError;
use crate::scene::{Material, Mesh, Scene, SceneNode};
use glam::{Mat4, Vec3};
use std::path::Path;

/// Parses the glTF file at `path`, resolving external buffers next to it.
///
/// # Errors
///
/// Returns [`LoadError::Parse`] for malformed documents or missing buffers.
pub fn read(path: &Path) -> Result<Scene, LoadError> {
    let gltf::Gltf { document, blob } =
        gltf::Gltf::open(path).map_err(|e| LoadError::Parse(e.to_string()))?;
    let buffers = gltf::import_buffers(&document, path.parent(), blob)
        .map_err(|e| LoadError::Parse(e.to_string()))?;
    Ok(build_scene(&document, &buffers))
}

/// Parses an in-memory binary or JSON glTF without external buffers.
///
/// # Errors
///
/// Returns [`LoadError::Parse`] for malformed documents.
pub fn read_slice(bytes: &[u8]) -> Result<Scene, LoadError> {
    let gltf::Gltf { document, blob } =
        gltf::Gltf::from_slice(bytes).map_err(|e| LoadError::Parse(e.to_string()))?;
    let buffers = gltf::import_buffers(&document, None, blob)
        .map_err(|e| LoadError::Parse(e.to_string()))?;
    Ok(build_scene(&document, &buffers))
}

fn build_scene(document: &gltf::Document, buffers: &[gltf::buffer::Data]) -> Scene {
    let mut nodes = Vec::new();
    match document.default_scene().or_else(|| document.scenes().next()) {
        Some(scene) => {
            for node in scene.nodes() {
                visit(&node, Mat4::IDENTITY, buffers, &mut nodes);
            }
        }
        // No scene: show every mesh once, untransformed.
        None => {
            for mesh in document.meshes() {
                let meshes = read_mesh(&mesh, buffers);
                if !meshes.is_empty() {
                    let name = mesh.name().unwrap_or("mesh").to_string();
                    nodes.push(SceneNode::new(name, Mat4::IDENTITY, meshes));
                }
            }
        }
    }
    Scene::new(nodes)
}

fn visit(
    node: &gltf::Node,
    parent: Mat4,
    buffers: &[gltf::buffer::Data],
    out: &mut Vec<SceneNode>,
) {
    let world = parent * Mat4::from_cols_array_2d(&node.transform().matrix());

    if let Some(mesh) = node.mesh() {
        let meshes = read_mesh(&mesh, buffers);
        if !meshes.is_empty() {
            let name = node
                .name()
                .or_else(|| mesh.name())
                .map_or_else(|| format!("node_{}", node.index()), str::to_string);
            out.push(SceneNode::new(name, world, meshes));
        }
    }

    for child in node.children() {
        visit(&child, world, buffers, out);
    }
}

fn read_mesh(mesh: &gltf::Mesh, buffers: &[gltf::buffer::Data]) -> Vec<Mesh> {
    let mut meshes = Vec::new();
    for primitive in mesh.primitives() {
        if primitive.mode() != gltf::mesh::Mode::Triangles {
            continue;
        }
        let reader = primitive.reader(|buffer| buffers.get(buffer.index()).map(|d| d.0.as_slice()));
        let Some(positions) = reader.read_positions() else {
            continue;
        };
        let positions: Vec<Vec3> = positions.map(Vec3::from).collect();
        let normals: Vec<Vec3> = reader
            .read_normals()
            .map(|normals| normals.map(Vec3::from).collect())
            .unwrap_or_default();
        #[allow(clippy::cast_possible_truncation)]
        let indices: Vec<u32> = match reader.read_indices() {
            Some(indices) => indices.into_u32().collect(),
            None => (0..positions.len() as u32).collect(),
        };

        let mesh = Mesh::new(positions, normals, indices, read_material(&primitive.material()));
        if !mesh.is_empty() {
            meshes.push(mesh);
        }
    }
    meshes
}

fn read_material(material: &gltf::Material) -> Material {
    let pbr = material.pbr_metallic_roughness();
    Material {
        base_color: pbr.base_color_factor(),
        emissive: material.emissive_factor(),
        emissive_intensity: 1.0,
        roughness: pbr.roughness_factor(),
        metalness: pbr.metallic_factor(),
    }
}
