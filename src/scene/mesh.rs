// SPDX-License-Identifier: MPL-2.0
//! Triangle meshes and their flat materials.

use glam::{Mat4, Vec3};

/// Surface description shared by the rasterizer and the GLB exporter.
///
/// Only the factors are kept; textures are not supported.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Material {
    /// Linear RGBA base color.
    pub base_color: [f32; 4],
    /// Linear RGB emissive color, before intensity is applied.
    pub emissive: [f32; 3],
    pub emissive_intensity: f32,
    pub roughness: f32,
    pub metalness: f32,
}

impl Default for Material {
    fn default() -> Self {
        Self {
            base_color: [0.8, 0.8, 0.8, 1.0],
            emissive: [0.0, 0.0, 0.0],
            emissive_intensity: 1.0,
            roughness: 1.0,
            metalness: 0.0,
        }
    }
}

impl Material {
    /// Builds a material from `#RRGGBB` hex colors.
    #[must_use]
    pub fn from_hex(base: u32, emissive: u32) -> Self {
        let [r, g, b] = hex_to_rgb(base);
        Self {
            base_color: [r, g, b, 1.0],
            emissive: hex_to_rgb(emissive),
            ..Self::default()
        }
    }

    /// Emissive color with intensity folded in, as glTF stores it.
    #[must_use]
    pub fn emissive_factor(&self) -> [f32; 3] {
        self.emissive.map(|c| (c * self.emissive_intensity).clamp(0.0, 1.0))
    }
}

#[allow(clippy::cast_precision_loss)]
fn hex_to_rgb(hex: u32) -> [f32; 3] {
    [
        ((hex >> 16) & 0xFF) as f32 / 255.0,
        ((hex >> 8) & 0xFF) as f32 / 255.0,
        (hex & 0xFF) as f32 / 255.0,
    ]
}

/// Axis-aligned bounding box.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub min: Vec3,
    pub max: Vec3,
}

impl Bounds {
    /// Returns the box enclosing `points`, or `None` if there are none.
    pub fn from_points(points: impl IntoIterator<Item = Vec3>) -> Option<Self> {
        points.into_iter().fold(None, |acc, p| {
            Some(match acc {
                None => Bounds { min: p, max: p },
                Some(b) => b.including(p),
            })
        })
    }

    #[must_use]
    pub fn including(self, p: Vec3) -> Self {
        Bounds {
            min: self.min.min(p),
            max: self.max.max(p),
        }
    }

    #[must_use]
    pub fn union(self, other: Bounds) -> Self {
        Bounds {
            min: self.min.min(other.min),
            max: self.max.max(other.max),
        }
    }

    #[must_use]
    pub fn center(&self) -> Vec3 {
        (self.min + self.max) * 0.5
    }

    #[must_use]
    pub fn size(&self) -> Vec3 {
        self.max - self.min
    }
}

/// Indexed triangle mesh.
#[derive(Debug, Clone, PartialEq)]
pub struct Mesh {
    pub positions: Vec<Vec3>,
    pub normals: Vec<Vec3>,
    pub indices: Vec<u32>,
    pub material: Material,
}

impl Mesh {
    /// Builds a mesh, computing smooth vertex normals when `normals` does not
    /// match `positions`. Triangles referencing missing vertices are dropped.
    #[must_use]
    pub fn new(
        positions: Vec<Vec3>,
        normals: Vec<Vec3>,
        indices: Vec<u32>,
        material: Material,
    ) -> Self {
        let vertex_count = positions.len();
        let indices: Vec<u32> = indices
            .chunks_exact(3)
            .filter(|tri| tri.iter().all(|&i| (i as usize) < vertex_count))
            .flatten()
            .copied()
            .collect();

        let normals = if normals.len() == vertex_count {
            normals
        } else {
            compute_vertex_normals(&positions, &indices)
        };

        Self {
            positions,
            normals,
            indices,
            material,
        }
    }

    /// Axis-aligned unit cube centred on the origin, with flat faces.
    #[must_use]
    pub fn unit_cube(material: Material) -> Self {
        const FACES: [(Vec3, Vec3, Vec3); 6] = [
            (Vec3::X, Vec3::Y, Vec3::NEG_Z),
            (Vec3::NEG_X, Vec3::Y, Vec3::Z),
            (Vec3::Y, Vec3::NEG_Z, Vec3::X),
            (Vec3::NEG_Y, Vec3::Z, Vec3::X),
            (Vec3::Z, Vec3::Y, Vec3::X),
            (Vec3::NEG_Z, Vec3::Y, Vec3::NEG_X),
        ];

        let mut positions = Vec::with_capacity(24);
        let mut normals = Vec::with_capacity(24);
        let mut indices = Vec::with_capacity(36);

        for (normal, up, right) in FACES {
            let base = positions.len() as u32;
            let center = normal * 0.5;
            for (su, sr) in [(-1.0, -1.0), (-1.0, 1.0), (1.0, 1.0), (1.0, -1.0)] {
                positions.push(center + up * (0.5 * su) + right * (0.5 * sr));
                normals.push(normal);
            }
            indices.extend_from_slice(&[base, base + 1, base + 2, base, base + 2, base + 3]);
        }

        Self {
            positions,
            normals,
            indices,
            material,
        }
    }

    #[must_use]
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    /// Bounds of the mesh after applying `transform`.
    #[must_use]
    pub fn bounds(&self, transform: Mat4) -> Option<Bounds> {
        Bounds::from_points(
            self.positions
                .iter()
                .map(|&p| transform.transform_point3(p)),
        )
    }
}

fn compute_vertex_normals(positions: &[Vec3], indices: &[u32]) -> Vec<Vec3> {
    let mut normals = vec![Vec3::ZERO; positions.len()];
    for tri in indices.chunks_exact(3) {
        let [a, b, c] = [tri[0] as usize, tri[1] as usize, tri[2] as usize];
        // Unnormalized cross product weights by triangle area.
        let face = (positions[b] - positions[a]).cross(positions[c] - positions[a]);
        normals[a] += face;
        normals[b] += face;
        normals[c] += face;
    }
    normals
        .into_iter()
        .map(|n| n.try_normalize().unwrap_or(Vec3::Y))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unit_cube_has_twelve_outward_triangles() {
        let cube = Mesh::unit_cube(Material::default());
        assert_eq!(cube.triangle_count(), 12);
        assert_eq!(cube.positions.len(), 24);

        for tri in cube.indices.chunks_exact(3) {
            let [a, b, c] = [0, 1, 2].map(|k| cube.positions[tri[k] as usize]);
            let winding = (b - a).cross(c - a);
            let normal = cube.normals[tri[0] as usize];
            assert!(winding.dot(normal) > 0.0, "triangle must wind counter-clockwise");
        }
    }

    #[test]
    fn unit_cube_spans_one_unit() {
        let cube = Mesh::unit_cube(Material::default());
        let bounds = cube.bounds(Mat4::IDENTITY).expect("cube has vertices");
        assert_eq!(bounds.min, Vec3::splat(-0.5));
        assert_eq!(bounds.max, Vec3::splat(0.5));
    }

    #[test]
    fn new_computes_normals_when_missing() {
        let mesh = Mesh::new(
            vec![Vec3::ZERO, Vec3::X, Vec3::Y],
            Vec::new(),
            vec![0, 1, 2],
            Material::default(),
        );
        assert_eq!(mesh.normals, vec![Vec3::Z; 3]);
    }

    #[test]
    fn new_drops_out_of_range_triangles() {
        let mesh = Mesh::new(
            vec![Vec3::ZERO, Vec3::X, Vec3::Y],
            Vec::new(),
            vec![0, 1, 2, 0, 1, 9],
            Material::default(),
        );
        assert_eq!(mesh.triangle_count(), 1);
    }

    #[test]
    fn from_hex_decodes_channels() {
        let material = Material::from_hex(0xFF0000, 0x0000FF);
        assert_eq!(material.base_color, [1.0, 0.0, 0.0, 1.0]);
        assert_eq!(material.emissive, [0.0, 0.0, 1.0]);
    }

    #[test]
    fn emissive_factor_applies_intensity() {
        let material = Material {
            emissive: [1.0, 0.5, 0.0],
            emissive_intensity: 0.5,
            ..Material::default()
        };
        assert_eq!(material.emissive_factor(), [0.5, 0.25, 0.0]);
    }

    #[test]
    fn bounds_center_and_size() {
        let bounds = Bounds::from_points([Vec3::new(-1.0, 0.0, 2.0), Vec3::new(3.0, 4.0, 6.0)])
            .expect("non-empty");
        assert_eq!(bounds.center(), Vec3::new(1.0, 2.0, 4.0));
        assert_eq!(bounds.size(), Vec3::new(4.0, 4.0, 4.0));
        assert!(Bounds::from_points(Vec::new()).is_none());
    }
}
