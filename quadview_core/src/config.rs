//! Viewer configuration.
//!
//! Loads viewer settings from JSON strings/files (file IO left to app).

use serde::{Deserialize, Serialize};

use crate::math::Vec3;

/// Camera and projection settings for the quad viewer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ViewerConfig {
    /// Field-of-view half-angle in degrees while in portrait orientations.
    #[serde(default = "default_portrait_angle")]
    pub portrait_angle_deg: f32,
    /// Field-of-view half-angle in degrees while in landscape orientations.
    #[serde(default = "default_landscape_angle")]
    pub landscape_angle_deg: f32,
    /// Near clipping plane. Must differ from `far`.
    #[serde(default = "default_near")]
    pub near: f32,
    /// Far clipping plane.
    #[serde(default = "default_far")]
    pub far: f32,
    /// Camera eye point.
    #[serde(default)]
    pub eye: Vec3,
    /// Reference point indicating the center of the scene.
    #[serde(default = "default_center")]
    pub center: Vec3,
    /// Camera up vector.
    #[serde(default = "default_up")]
    pub up: Vec3,
    /// Object translation in (x, y, z) space.
    #[serde(default = "default_translate")]
    pub translate: Vec3,
}

fn default_portrait_angle() -> f32 {
    50.0
}

fn default_landscape_angle() -> f32 {
    35.0
}

fn default_near() -> f32 {
    0.1
}

fn default_far() -> f32 {
    100.0
}

fn default_center() -> Vec3 {
    Vec3::new(0.0, 0.0, 1.0)
}

fn default_up() -> Vec3 {
    Vec3::new(0.0, 1.0, 0.0)
}

fn default_translate() -> Vec3 {
    Vec3::new(0.0, -0.25, 2.0)
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            portrait_angle_deg: default_portrait_angle(),
            landscape_angle_deg: default_landscape_angle(),
            near: default_near(),
            far: default_far(),
            eye: Vec3::ZERO,
            center: default_center(),
            up: default_up(),
            translate: default_translate(),
        }
    }
}

impl ViewerConfig {
    /// Parses config from JSON.
    pub fn from_json_str(s: &str) -> serde_json::Result<Self> {
        serde_json::from_str(s)
    }
}
