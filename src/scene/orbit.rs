// SPDX-License-Identifier: MPL-2.0
//! Orbit camera: rotate around a target, pan in screen space, dolly on scroll.
//!
//! The camera position is kept in spherical coordinates around the target,
//! with the azimuth measured from +Z towards +X and the polar angle from +Y.
//! Every operation that moves the camera returns `true` so callers can treat
//! it as a change notification.

use crate::config::{
    CAMERA_FOV_DEGREES, DEFAULT_AUTO_ROTATE_SPEED, DEFAULT_CAMERA_DISTANCE, MAX_CAMERA_DISTANCE,
    MIN_CAMERA_DISTANCE,
};
use glam::{Mat4, Vec2, Vec3};
use std::f32::consts::{PI, TAU};

/// Keeps the camera off the poles, where the up vector degenerates.
const POLAR_EPSILON: f32 = 1e-6;

/// Scale applied to the distance for one scroll notch.
const ZOOM_SCALE: f32 = 0.95;

#[derive(Debug, Clone, Copy, PartialEq)]
struct CameraState {
    target: Vec3,
    azimuth: f32,
    polar: f32,
    distance: f32,
}

impl CameraState {
    fn from_position(position: Vec3, target: Vec3) -> Self {
        let offset = position - target;
        let distance = offset.length().max(MIN_CAMERA_DISTANCE);
        Self {
            target,
            azimuth: offset.x.atan2(offset.z),
            polar: (offset.y / distance).clamp(-1.0, 1.0).acos(),
            distance,
        }
    }

    fn position(&self) -> Vec3 {
        let sin_polar = self.polar.sin();
        self.target
            + Vec3::new(
                sin_polar * self.azimuth.sin(),
                self.polar.cos(),
                sin_polar * self.azimuth.cos(),
            ) * self.distance
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct OrbitControls {
    current: CameraState,
    saved: CameraState,
    auto_rotate: bool,
    auto_rotate_speed: f32,
}

impl Default for OrbitControls {
    fn default() -> Self {
        Self::new(DEFAULT_AUTO_ROTATE_SPEED)
    }
}

impl OrbitControls {
    /// Camera at `[0, 0, DEFAULT_CAMERA_DISTANCE]` looking at the origin.
    /// The initial placement is the saved default used by [`Self::reset`].
    #[must_use]
    pub fn new(auto_rotate_speed: f32) -> Self {
        let state = CameraState::from_position(
            Vec3::new(0.0, 0.0, DEFAULT_CAMERA_DISTANCE),
            Vec3::ZERO,
        );
        Self {
            current: state,
            saved: state,
            auto_rotate: true,
            auto_rotate_speed,
        }
    }

    #[must_use]
    pub fn position(&self) -> Vec3 {
        self.current.position()
    }

    #[must_use]
    pub fn target(&self) -> Vec3 {
        self.current.target
    }

    #[must_use]
    pub fn distance(&self) -> f32 {
        self.current.distance
    }

    #[must_use]
    pub fn auto_rotate(&self) -> bool {
        self.auto_rotate
    }

    pub fn set_auto_rotate(&mut self, enabled: bool) {
        self.auto_rotate = enabled;
    }

    #[must_use]
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.position(), self.current.target, Vec3::Y)
    }

    /// Orbits by a pointer movement of `delta` pixels in a viewport of
    /// `viewport_height` pixels. A full-height drag is one full turn.
    pub fn rotate(&mut self, delta: Vec2, viewport_height: f32) -> bool {
        if delta == Vec2::ZERO || viewport_height <= 0.0 {
            return false;
        }
        self.rotate_left(TAU * delta.x / viewport_height);
        self.rotate_up(TAU * delta.y / viewport_height);
        true
    }

    /// Moves camera and target together so the scene follows the pointer.
    pub fn pan(&mut self, delta: Vec2, viewport_height: f32) -> bool {
        if delta == Vec2::ZERO || viewport_height <= 0.0 {
            return false;
        }
        let half_fov = (CAMERA_FOV_DEGREES.to_radians() * 0.5).tan();
        let world_per_pixel = 2.0 * self.current.distance * half_fov / viewport_height;

        let view = self.view_matrix().inverse();
        let right = view.x_axis.truncate();
        let up = view.y_axis.truncate();

        self.current.target += -right * (delta.x * world_per_pixel) + up * (delta.y * world_per_pixel);
        true
    }

    /// Dollies by `notches` scroll steps. Positive values move closer.
    pub fn zoom(&mut self, notches: f32) -> bool {
        if notches == 0.0 {
            return false;
        }
        let distance = (self.current.distance * ZOOM_SCALE.powf(notches))
            .clamp(MIN_CAMERA_DISTANCE, MAX_CAMERA_DISTANCE);
        let changed = (distance - self.current.distance).abs() > f32::EPSILON;
        self.current.distance = distance;
        changed
    }

    /// Per-frame update; `delta` is the elapsed time in seconds.
    ///
    /// Applies auto-rotation at `2π / 60 × speed` radians per second.
    pub fn update(&mut self, delta: f32) -> bool {
        if !self.auto_rotate || self.auto_rotate_speed == 0.0 || delta <= 0.0 {
            return false;
        }
        self.rotate_left(TAU / 60.0 * self.auto_rotate_speed * delta);
        true
    }

    /// Restores the saved default camera. Always reports a change.
    pub fn reset(&mut self) -> bool {
        self.current = self.saved;
        true
    }

    fn rotate_left(&mut self, angle: f32) {
        let azimuth = self.current.azimuth - angle;
        // Keep the azimuth in (-π, π] like atan2 does.
        self.current.azimuth = (azimuth + PI).rem_euclid(TAU) - PI;
    }

    fn rotate_up(&mut self, angle: f32) {
        self.current.polar =
            (self.current.polar - angle).clamp(POLAR_EPSILON, PI - POLAR_EPSILON);
    }
}
