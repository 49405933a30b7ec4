// SPDX-License-Identifier: MPL-2.0
//! Flat-shaded triangle rasterizer on top of `tiny-skia`.
//!
//! Triangles are projected with a perspective camera, back faces are culled
//! and the rest are painted far to near. Each triangle gets one Lambert
//! shade from a directional light plus ambient and emissive terms.

use super::Frame;
use crate::config::CAMERA_FOV_DEGREES;
use crate::scene::{Material, Scene};
use glam::{Mat3, Mat4, Vec2, Vec3, Vec4Swizzles};
use tiny_skia::{Color, FillRule, Paint, PathBuilder, Transform};

const NEAR_PLANE: f32 = 0.1;
const FAR_PLANE: f32 = 1000.0;
const AMBIENT: f32 = 0.5;

/// Counters from one draw call.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RenderStats {
    pub drawn: usize,
    pub culled: usize,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rasterizer {
    fov_y: f32,
    /// Direction towards the light, normalized.
    light_dir: Vec3,
}

impl Default for Rasterizer {
    fn default() -> Self {
        Self {
            fov_y: CAMERA_FOV_DEGREES.to_radians(),
            light_dir: Vec3::new(5.0, 5.0, 5.0).normalize(),
        }
    }
}

struct ShadedTriangle {
    points: [Vec2; 3],
    depth: f32,
    color: Color,
}

impl Rasterizer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn projection(&self, aspect: f32) -> Mat4 {
        Mat4::perspective_rh(self.fov_y, aspect, NEAR_PLANE, FAR_PLANE)
    }

    /// Clears `frame` to `background` and draws `scene` as seen through `view`.
    pub fn draw(
        &self,
        frame: &mut Frame,
        scene: Option<&Scene>,
        view: Mat4,
        background: Color,
    ) -> RenderStats {
        frame.clear(background);
        let Some(scene) = scene else {
            return RenderStats::default();
        };

        #[allow(clippy::cast_precision_loss)]
        let (width, height) = (frame.width() as f32, frame.height() as f32);
        let view_projection = self.projection(width / height) * view;

        let mut stats = RenderStats::default();
        let mut triangles = Vec::new();

        for (model, mesh) in scene.meshes() {
            let clip_from_model = view_projection * model;
            let view_from_model = view * model;
            let normal_matrix = Mat3::from_mat4(model).inverse().transpose();

            for tri in mesh.indices.chunks_exact(3) {
                let ids = [tri[0] as usize, tri[1] as usize, tri[2] as usize];
                let clip = ids.map(|i| clip_from_model * mesh.positions[i].extend(1.0));

                // Triangles crossing the near plane are skipped rather than clipped.
                if clip.iter().any(|c| c.w < NEAR_PLANE) {
                    stats.culled += 1;
                    continue;
                }
                let ndc = clip.map(|c| c.xy() / c.w);
                let area = (ndc[1] - ndc[0]).perp_dot(ndc[2] - ndc[0]);
                if area <= 0.0 {
                    stats.culled += 1;
                    continue;
                }

                let normal = ids
                    .iter()
                    .filter_map(|&i| mesh.normals.get(i))
                    .sum::<Vec3>();
                let normal = (normal_matrix * normal).normalize_or_zero();
                let depth = ids
                    .iter()
                    .map(|&i| view_from_model.transform_point3(mesh.positions[i]).z)
                    .sum::<f32>();

                triangles.push(ShadedTriangle {
                    points: ndc.map(|p| {
                        Vec2::new((p.x + 1.0) * 0.5 * width, (1.0 - p.y) * 0.5 * height)
                    }),
                    depth,
                    color: self.shade(&mesh.material, normal),
                });
            }
        }

        // Farthest first: view-space z grows towards the camera.
        triangles.sort_by(|a, b| a.depth.total_cmp(&b.depth));

        let pixmap = frame.pixmap_mut();
        let mut paint = Paint {
            anti_alias: false,
            ..Paint::default()
        };
        for triangle in &triangles {
            let mut builder = PathBuilder::new();
            let [a, b, c] = triangle.points;
            builder.move_to(a.x, a.y);
            builder.line_to(b.x, b.y);
            builder.line_to(c.x, c.y);
            builder.close();
            let Some(path) = builder.finish() else {
                continue;
            };
            paint.set_color(triangle.color);
            pixmap.fill_path(&path, &paint, FillRule::Winding, Transform::identity(), None);
            stats.drawn += 1;
        }
        stats
    }

    fn shade(&self, material: &Material, normal: Vec3) -> Color {
        let diffuse = normal.dot(self.light_dir).max(0.0);
        // Metals reflect less diffuse light.
        let diffuse_weight = 1.0 - 0.5 * material.metalness;
        let intensity = AMBIENT + diffuse * diffuse_weight;
        let emissive = material.emissive_factor();

        let channel = |k: usize| (material.base_color[k] * intensity + emissive[k]).clamp(0.0, 1.0);
        Color::from_rgba(
            channel(0),
            channel(1),
            channel(2),
            material.base_color[3].clamp(0.0, 1.0),
        )
        .unwrap_or(Color::BLACK)
    }
}
