// SPDX-License-Identifier: MPL-2.0
//! Compass label derived from the camera position.
//!
//! The angle is `atan2(x, z)` in degrees. The +X side reads as west, so `W`
//! shows when the camera sits on +X.

use glam::Vec3;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CompassLabel {
    #[default]
    N,
    NE,
    E,
    SE,
    S,
    SW,
    W,
    NW,
}

impl CompassLabel {
    /// Maps an angle in degrees, within (-180, 180], to a label.
    /// Intervals are open below and closed above.
    #[must_use]
    pub fn from_degrees(degrees: f32) -> Self {
        if degrees > -22.5 && degrees <= 22.5 {
            CompassLabel::N
        } else if degrees > 22.5 && degrees <= 67.5 {
            CompassLabel::NW
        } else if degrees > 67.5 && degrees <= 112.5 {
            CompassLabel::W
        } else if degrees > 112.5 && degrees <= 157.5 {
            CompassLabel::SW
        } else if degrees > 157.5 || degrees <= -157.5 {
            CompassLabel::S
        } else if degrees <= -112.5 {
            CompassLabel::SE
        } else if degrees <= -67.5 {
            CompassLabel::E
        } else {
            CompassLabel::NE
        }
    }

    /// Label for a camera at `position`; only `x` and `z` matter.
    #[must_use]
    pub fn from_position(position: Vec3) -> Self {
        Self::from_degrees(position.x.atan2(position.z).to_degrees())
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            CompassLabel::N => "N",
            CompassLabel::NE => "NE",
            CompassLabel::E => "E",
            CompassLabel::SE => "SE",
            CompassLabel::S => "S",
            CompassLabel::SW => "SW",
            CompassLabel::W => "W",
            CompassLabel::NW => "NW",
        }
    }
}

impl fmt::Display for CompassLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Tracks the label shown in the compass badge.
///
/// Recomputed on every camera-change notification, without smoothing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OrientationIndicator {
    label: CompassLabel,
}

impl OrientationIndicator {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn label(&self) -> CompassLabel {
        self.label
    }

    /// Recomputes the label; returns `true` when it changed.
    pub fn observe(&mut self, camera_position: Vec3) -> bool {
        let label = CompassLabel::from_position(camera_position);
        let changed = label != self.label;
        self.label = label;
        changed
    }
}
