// SPDX-License-Identifier: MPL-2.0
//! Wavefront OBJ import through the `obj` crate.
//!
//! Each OBJ object becomes one scene node. Polygons are fan-triangulated and
//! corners sharing a position/normal pair share a vertex.

use super::LoadError;
use crate::scene::{Material, Mesh, Scene, SceneNode};
use glam::{Mat4, Vec3};
use obj::ObjData;
use std::collections::HashMap;
use std::io::{BufReader, Read};
use std::path::Path;

/// Parses the OBJ file at `path`. Material libraries are ignored.
///
/// # Errors
///
/// Returns [`LoadError::Io`] if the file cannot be opened and
/// [`LoadError::Parse`] for malformed content.
pub fn read(path: &Path) -> Result<Scene, LoadError> {
    let file = std::fs::File::open(path)?;
    read_from(BufReader::new(file))
}

/// Parses OBJ text from any reader.
///
/// # Errors
///
/// Returns [`LoadError::Parse`] for malformed content.
pub fn read_from(input: impl Read) -> Result<Scene, LoadError> {
    let data = ObjData::load_buf(BufReader::new(input))
        .map_err(|e| LoadError::Parse(e.to_string()))?;

    let nodes = data
        .objects
        .iter()
        .filter_map(|object| {
            let mesh = build_mesh(&data, object.groups.iter().flat_map(|g| &g.polys));
            (!mesh.is_empty()).then(|| SceneNode::new(object.name.clone(), Mat4::IDENTITY, vec![mesh]))
        })
        .collect();

    Ok(Scene::new(nodes))
}

fn build_mesh<'a>(
    data: &ObjData,
    polygons: impl Iterator<Item = &'a obj::SimplePolygon>,
) -> Mesh {
    let mut positions = Vec::new();
    let mut normals = Vec::new();
    let mut indices = Vec::new();
    let mut lookup: HashMap<(usize, Option<usize>), u32> = HashMap::new();
    let mut all_have_normals = true;

    for polygon in polygons {
        let mut corners = Vec::with_capacity(polygon.0.len());
        for tuple in &polygon.0 {
            let obj::IndexTuple(position_index, _, normal_index) = *tuple;
            let Some(position) = data.position.get(position_index) else {
                continue;
            };
            let normal = normal_index.and_then(|i| data.normal.get(i));
            all_have_normals &= normal.is_some();

            #[allow(clippy::cast_possible_truncation)]
            let index = *lookup
                .entry((position_index, normal_index))
                .or_insert_with(|| {
                    positions.push(Vec3::from(*position));
                    normals.push(normal.map_or(Vec3::ZERO, |n| Vec3::from(*n)));
                    (positions.len() - 1) as u32
                });
            corners.push(index);
        }
        for i in 1..corners.len().saturating_sub(1) {
            indices.extend_from_slice(&[corners[0], corners[i], corners[i + 1]]);
        }
    }

    if !all_have_normals {
        normals.clear();
    }
    Mesh::new(positions, normals, indices, Material::default())
}
