// SPDX-License-Identifier: MPL-2.0
//! STL import, binary and ASCII.
//!
//! Binary files are recognised by their size (`84 + 50 × triangles`), which is
//! more reliable than the `solid` keyword: many binary exporters start their
//! header with it too.

use super::LoadError;
use crate::scene::{Material, Mesh, Scene, SceneNode};
use glam::{Mat4, Vec3};
use std::path::Path;

const HEADER_LEN: usize = 80;
const TRIANGLE_RECORD_LEN: usize = 50;

/// Parses the STL file at `path`.
///
/// # Errors
///
/// Returns [`LoadError::Io`] if the file cannot be read and
/// [`LoadError::Parse`] for malformed content.
pub fn read(path: &Path) -> Result<Scene, LoadError> {
    let bytes = std::fs::read(path)?;
    let name = path
        .file_stem()
        .map_or_else(|| "stl".to_string(), |s| s.to_string_lossy().into_owned());
    read_bytes(&bytes, &name)
}

/// Parses STL bytes into a one-node scene named `name`.
///
/// # Errors
///
/// Returns [`LoadError::Parse`] for malformed content.
pub fn read_bytes(bytes: &[u8], name: &str) -> Result<Scene, LoadError> {
    let triangles = if is_binary(bytes) {
        parse_binary(bytes)?
    } else {
        let text = std::str::from_utf8(bytes)
            .map_err(|_| LoadError::Parse("STL is neither binary nor ASCII".into()))?;
        parse_ascii(text)?
    };

    let mut positions = Vec::with_capacity(triangles.len() * 3);
    let mut normals = Vec::with_capacity(triangles.len() * 3);
    for [a, b, c] in triangles {
        // Stored facet normals are often zero or stale; derive from winding.
        let normal = (b - a).cross(c - a).try_normalize().unwrap_or(Vec3::Y);
        positions.extend_from_slice(&[a, b, c]);
        normals.extend_from_slice(&[normal; 3]);
    }
    #[allow(clippy::cast_possible_truncation)]
    let indices = (0..positions.len() as u32).collect();

    let mesh = Mesh::new(positions, normals, indices, Material::default());
    Ok(Scene::new(vec![SceneNode::new(name, Mat4::IDENTITY, vec![mesh])]))
}

fn is_binary(bytes: &[u8]) -> bool {
    triangle_count(bytes).is_some_and(|count| {
        HEADER_LEN + 4 + count * TRIANGLE_RECORD_LEN == bytes.len()
    })
}

fn triangle_count(bytes: &[u8]) -> Option<usize> {
    let raw: [u8; 4] = bytes.get(HEADER_LEN..HEADER_LEN + 4)?.try_into().ok()?;
    usize::try_from(u32::from_le_bytes(raw)).ok()
}

fn parse_binary(bytes: &[u8]) -> Result<Vec<[Vec3; 3]>, LoadError> {
    let count = triangle_count(bytes)
        .ok_or_else(|| LoadError::Parse("truncated STL header".into()))?;
    let body = &bytes[HEADER_LEN + 4..];

    let triangles = body
        .chunks_exact(TRIANGLE_RECORD_LEN)
        .take(count)
        .map(|record| {
            // Skip the 12-byte facet normal, read three vertices.
            let vertex = |k: usize| {
                let offset = 12 + k * 12;
                Vec3::new(
                    read_f32(record, offset),
                    read_f32(record, offset + 4),
                    read_f32(record, offset + 8),
                )
            };
            [vertex(0), vertex(1), vertex(2)]
        })
        .collect();
    Ok(triangles)
}

fn read_f32(record: &[u8], offset: usize) -> f32 {
    let mut raw = [0u8; 4];
    raw.copy_from_slice(&record[offset..offset + 4]);
    f32::from_le_bytes(raw)
}

fn parse_ascii(text: &str) -> Result<Vec<[Vec3; 3]>, LoadError> {
    if !text.trim_start().starts_with("solid") {
        return Err(LoadError::Parse("missing 'solid' keyword".into()));
    }

    let mut triangles = Vec::new();
    let mut facet = Vec::with_capacity(3);

    for (line_number, line) in text.lines().enumerate() {
        let mut tokens = line.split_whitespace();
        match tokens.next() {
            Some("vertex") => {
                let coords: Vec<f32> = tokens.filter_map(|t| t.parse().ok()).collect();
                let [x, y, z] = coords[..] else {
                    return Err(LoadError::Parse(format!(
                        "line {}: expected three vertex coordinates",
                        line_number + 1
                    )));
                };
                facet.push(Vec3::new(x, y, z));
            }
            Some("endfacet") => {
                let [a, b, c] = facet[..] else {
                    return Err(LoadError::Parse(format!(
                        "line {}: facet with {} vertices",
                        line_number + 1,
                        facet.len()
                    )));
                };
                triangles.push([a, b, c]);
                facet.clear();
            }
            _ => {}
        }
    }
    Ok(triangles)
}
