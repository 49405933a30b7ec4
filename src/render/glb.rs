// SPDX-License-Identifier: MPL-2.0
//! Binary glTF 2.0 (GLB) serialization of the live scene graph.
//!
//! Layout: 12-byte header, a JSON chunk padded with spaces, then a BIN chunk
//! padded with zeros. Each scene node becomes a glTF node carrying its world
//! matrix and one mesh; each of its meshes becomes a primitive.

use crate::error::{Error, Result};
use crate::scene::{Bounds, Material, Scene};
use serde_json::{json, Value};

const GLB_MAGIC: u32 = 0x4654_6C67; // "glTF"
const GLB_VERSION: u32 = 2;
const CHUNK_JSON: u32 = 0x4E4F_534A; // "JSON"
const CHUNK_BIN: u32 = 0x004E_4942; // "BIN\0"

const COMPONENT_FLOAT: u32 = 5126;
const COMPONENT_UNSIGNED_INT: u32 = 5125;
const TARGET_ARRAY_BUFFER: u32 = 34962;
const TARGET_ELEMENT_ARRAY_BUFFER: u32 = 34963;

/// Accumulates the binary buffer along with its views and accessors.
#[derive(Default)]
struct BufferBuilder {
    bin: Vec<u8>,
    views: Vec<Value>,
    accessors: Vec<Value>,
}

impl BufferBuilder {
    fn push_view(&mut self, bytes: &[u8], target: u32) -> usize {
        // Accessor offsets must be aligned to the component size.
        while self.bin.len() % 4 != 0 {
            self.bin.push(0);
        }
        self.views.push(json!({
            "buffer": 0,
            "byteOffset": self.bin.len(),
            "byteLength": bytes.len(),
            "target": target,
        }));
        self.bin.extend_from_slice(bytes);
        self.views.len() - 1
    }

    fn push_vec3(&mut self, values: &[glam::Vec3], with_bounds: bool) -> usize {
        let bytes: Vec<u8> = values
            .iter()
            .flat_map(|v| v.to_array())
            .flat_map(f32::to_le_bytes)
            .collect();
        let view = self.push_view(&bytes, TARGET_ARRAY_BUFFER);
        let mut accessor = json!({
            "bufferView": view,
            "componentType": COMPONENT_FLOAT,
            "count": values.len(),
            "type": "VEC3",
        });
        if with_bounds {
            if let Some(bounds) = Bounds::from_points(values.iter().copied()) {
                accessor["min"] = json!(bounds.min.to_array());
                accessor["max"] = json!(bounds.max.to_array());
            }
        }
        self.accessors.push(accessor);
        self.accessors.len() - 1
    }

    fn push_indices(&mut self, indices: &[u32]) -> usize {
        let bytes: Vec<u8> = indices.iter().flat_map(|i| i.to_le_bytes()).collect();
        let view = self.push_view(&bytes, TARGET_ELEMENT_ARRAY_BUFFER);
        self.accessors.push(json!({
            "bufferView": view,
            "componentType": COMPONENT_UNSIGNED_INT,
            "count": indices.len(),
            "type": "SCALAR",
        }));
        self.accessors.len() - 1
    }
}

fn material_json(material: &Material) -> Value {
    json!({
        "pbrMetallicRoughness": {
            "baseColorFactor": material.base_color,
            "metallicFactor": material.metalness,
            "roughnessFactor": material.roughness,
        },
        "emissiveFactor": material.emissive_factor(),
    })
}

/// Builds the glTF JSON document and its binary buffer.
fn build_document(scene: &Scene) -> (Value, Vec<u8>) {
    let mut buffers = BufferBuilder::default();
    let mut nodes = Vec::new();
    let mut meshes = Vec::new();
    let mut materials = Vec::new();

    for node in &scene.nodes {
        let primitives: Vec<Value> = node
            .meshes
            .iter()
            .filter(|mesh| !mesh.is_empty())
            .map(|mesh| {
                let position = buffers.push_vec3(&mesh.positions, true);
                let normal = buffers.push_vec3(&mesh.normals, false);
                let indices = buffers.push_indices(&mesh.indices);
                materials.push(material_json(&mesh.material));
                json!({
                    "attributes": { "POSITION": position, "NORMAL": normal },
                    "indices": indices,
                    "material": materials.len() - 1,
                })
            })
            .collect();

        let mut node_json = json!({
            "name": node.name,
            "matrix": node.transform.to_cols_array(),
        });
        if !primitives.is_empty() {
            meshes.push(json!({ "name": node.name, "primitives": primitives }));
            node_json["mesh"] = json!(meshes.len() - 1);
        }
        nodes.push(node_json);
    }

    let node_indices: Vec<usize> = (0..nodes.len()).collect();
    let mut document = json!({
        "asset": {
            "version": "2.0",
            "generator": concat!("model_lens ", env!("CARGO_PKG_VERSION")),
        },
        "scene": 0,
        "scenes": [{ "nodes": node_indices }],
        "nodes": nodes,
    });
    if !meshes.is_empty() {
        document["meshes"] = json!(meshes);
        document["materials"] = json!(materials);
        document["accessors"] = json!(buffers.accessors);
        document["bufferViews"] = json!(buffers.views);
        document["buffers"] = json!([{ "byteLength": buffers.bin.len() }]);
    }
    (document, buffers.bin)
}

fn push_chunk(out: &mut Vec<u8>, kind: u32, mut data: Vec<u8>, pad: u8) -> Result<()> {
    while data.len() % 4 != 0 {
        data.push(pad);
    }
    let length = u32::try_from(data.len()).map_err(|_| Error::Export("chunk too large".into()))?;
    out.extend_from_slice(&length.to_le_bytes());
    out.extend_from_slice(&kind.to_le_bytes());
    out.extend_from_slice(&data);
    Ok(())
}

/// Serializes `scene` into a GLB byte stream.
///
/// # Errors
///
/// Returns [`Error::Export`] if the JSON cannot be produced or the output
/// exceeds the 4 GiB GLB limit.
pub fn encode(scene: &Scene) -> Result<Vec<u8>> {
    let (document, bin) = build_document(scene);
    let json = serde_json::to_vec(&document).map_err(|e| Error::Export(e.to_string()))?;

    let mut body = Vec::with_capacity(json.len() + bin.len() + 16);
    push_chunk(&mut body, CHUNK_JSON, json, b' ')?;
    if !bin.is_empty() {
        push_chunk(&mut body, CHUNK_BIN, bin, 0)?;
    }

    let total = u32::try_from(12 + body.len()).map_err(|_| Error::Export("GLB too large".into()))?;
    let mut out = Vec::with_capacity(12 + body.len());
    out.extend_from_slice(&GLB_MAGIC.to_le_bytes());
    out.extend_from_slice(&GLB_VERSION.to_le_bytes());
    out.extend_from_slice(&total.to_le_bytes());
    out.extend_from_slice(&body);
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::{FallbackCube, Mesh, SceneNode};
    use glam::{Mat4, Vec3};

    fn u32_at(bytes: &[u8], offset: usize) -> u32 {
        u32::from_le_bytes(bytes[offset..offset + 4].try_into().expect("4 bytes"))
    }

    #[test]
    fn header_and_chunks_are_well_formed() {
        let bytes = encode(&FallbackCube::new(false).scene()).expect("encodes");

        assert_eq!(&bytes[..4], b"glTF");
        assert_eq!(u32_at(&bytes, 4), 2);
        assert_eq!(u32_at(&bytes, 8) as usize, bytes.len());

        let json_len = u32_at(&bytes, 12) as usize;
        assert_eq!(json_len % 4, 0);
        assert_eq!(u32_at(&bytes, 16), CHUNK_JSON);
        let bin_header = 20 + json_len;
        assert_eq!(u32_at(&bytes, bin_header + 4), CHUNK_BIN);
        assert_eq!(bytes.len() % 4, 0);
    }

    #[test]
    fn exported_scene_parses_with_gltf_crate() {
        let mut cube = FallbackCube::new(true);
        cube.advance(2.0);
        let scene = cube.scene();
        let bytes = encode(&scene).expect("encodes");

        let gltf = gltf::Gltf::from_slice(&bytes).expect("valid GLB");
        let node = gltf.document.nodes().next().expect("one node");
        assert_eq!(node.name(), Some("Cube"));

        let matrix = Mat4::from_cols_array_2d(&node.transform().matrix());
        assert!(matrix.abs_diff_eq(cube.transform(), 1e-6));

        let primitive = node.mesh().expect("mesh").primitives().next().expect("primitive");
        let pbr = primitive.material().pbr_metallic_roughness();
        assert!((pbr.metallic_factor() - 0.9).abs() < 1e-6);
        let position = primitive
            .get(&gltf::Semantic::Positions)
            .expect("positions");
        assert_eq!(position.count(), 24);
    }

    #[test]
    fn empty_scene_exports_json_only() {
        let bytes = encode(&Scene::default()).expect("encodes");
        let json_len = u32_at(&bytes, 12) as usize;
        assert_eq!(bytes.len(), 20 + json_len);
        assert!(gltf::Gltf::from_slice(&bytes).is_ok());
    }

    #[test]
    fn nodes_without_geometry_are_kept_without_mesh() {
        let empty = Mesh::new(vec![Vec3::ZERO], Vec::new(), Vec::new(), Material::default());
        let scene = Scene::new(vec![
            SceneNode::new("empty", Mat4::IDENTITY, vec![empty]),
            FallbackCube::new(true).scene().nodes.remove(0),
        ]);
        let bytes = encode(&scene).expect("encodes");
        let gltf = gltf::Gltf::from_slice(&bytes).expect("valid GLB");
        let meshes: Vec<_> = gltf.document.nodes().map(|n| n.mesh().is_some()).collect();
        assert_eq!(meshes, vec![false, true]);
    }
}
