// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the application. Constants are organized by category.
//!
//! # Categories
//!
//! - **Instructions**: Delay before the viewer's help banner hides
//! - **Render**: Size of the software-rendered viewport
//! - **Orbit**: Camera defaults and auto-rotation speed
//! - **Gallery**: Remote model gallery endpoints
//! - **Export**: File names written by export and screenshot

// ==========================================================================
// Instructions Defaults
// ==========================================================================

/// Delay before the instructions banner hides, once the tutorial is gone.
pub const DEFAULT_INSTRUCTIONS_DELAY_MS: u64 = 5000;

/// Minimum instructions delay.
pub const MIN_INSTRUCTIONS_DELAY_MS: u64 = 1000;

/// Maximum instructions delay.
pub const MAX_INSTRUCTIONS_DELAY_MS: u64 = 60_000;

// ==========================================================================
// Render Defaults
// ==========================================================================

/// Default width of the rendered frame, in pixels.
pub const DEFAULT_RENDER_WIDTH: u32 = 960;

/// Default height of the rendered frame, in pixels.
pub const DEFAULT_RENDER_HEIGHT: u32 = 600;

/// Smallest accepted frame dimension.
pub const MIN_RENDER_DIMENSION: u32 = 160;

/// Largest accepted frame dimension.
pub const MAX_RENDER_DIMENSION: u32 = 4096;

/// Vertical field of view of the viewport camera, in degrees.
pub const CAMERA_FOV_DEGREES: f32 = 50.0;

// ==========================================================================
// Orbit Defaults
// ==========================================================================

/// Distance of the default camera from the origin (camera at `[0, 0, 5]`).
pub const DEFAULT_CAMERA_DISTANCE: f32 = 5.0;

/// Closest the camera may dolly towards its target.
pub const MIN_CAMERA_DISTANCE: f32 = 0.5;

/// Farthest the camera may dolly away from its target.
pub const MAX_CAMERA_DISTANCE: f32 = 100.0;

/// Auto-rotation speed. 2.0 is one orbit every 30 seconds.
pub const DEFAULT_AUTO_ROTATE_SPEED: f32 = 2.0;

/// Cube spin rate on both x and y axes, in radians per second.
pub const CUBE_SPIN_RATE: f32 = 0.2;

// ==========================================================================
// Gallery Defaults
// ==========================================================================

/// Base URL of the remote gallery API.
pub const DEFAULT_GALLERY_BASE_URL: &str = "http://localhost:8000/api/models/";

/// Base URL against which relative download links are resolved.
pub const DEFAULT_ASSET_BASE_URL: &str = "http://localhost:3000/";

// ==========================================================================
// Export Defaults
// ==========================================================================

/// File name used when exporting the live scene.
pub const EXPORT_FILE_NAME: &str = "model-export.glb";

/// File name used when saving a screenshot of the viewport.
pub const SCREENSHOT_FILE_NAME: &str = "model-screenshot.png";

/// File name used when exporting the diagnostics buffer.
pub const DIAGNOSTICS_FILE_NAME: &str = "model-lens-diagnostics.json";

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    // Instructions
    assert!(MIN_INSTRUCTIONS_DELAY_MS > 0);
    assert!(MIN_INSTRUCTIONS_DELAY_MS <= DEFAULT_INSTRUCTIONS_DELAY_MS);
    assert!(MAX_INSTRUCTIONS_DELAY_MS >= DEFAULT_INSTRUCTIONS_DELAY_MS);

    // Render
    assert!(MIN_RENDER_DIMENSION > 0);
    assert!(DEFAULT_RENDER_WIDTH >= MIN_RENDER_DIMENSION);
    assert!(DEFAULT_RENDER_WIDTH <= MAX_RENDER_DIMENSION);
    assert!(DEFAULT_RENDER_HEIGHT >= MIN_RENDER_DIMENSION);
    assert!(DEFAULT_RENDER_HEIGHT <= MAX_RENDER_DIMENSION);
    assert!(CAMERA_FOV_DEGREES > 0.0);
    assert!(CAMERA_FOV_DEGREES < 180.0);

    // Orbit
    assert!(MIN_CAMERA_DISTANCE > 0.0);
    assert!(DEFAULT_CAMERA_DISTANCE >= MIN_CAMERA_DISTANCE);
    assert!(DEFAULT_CAMERA_DISTANCE <= MAX_CAMERA_DISTANCE);
    assert!(DEFAULT_AUTO_ROTATE_SPEED >= 0.0);
};
