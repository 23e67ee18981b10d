//! Per-orientation transform pipeline.
//!
//! The combined `perspective * (look_at * translate)` matrix only depends
//! on the device orientation (which drives the field-of-view angle) and
//! the view aspect ratio, so it is recomputed exactly once per orientation
//! change and reused for every frame in between. One slot, one
//! invalidation condition.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::ViewerConfig;
use crate::math::deg_to_rad;
use crate::matrix::Mat4;
use crate::transform::{frustum_oc, look_at};

/// Device interface orientation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum Orientation {
    #[default]
    Unknown,
    Portrait,
    PortraitUpsideDown,
    LandscapeLeft,
    LandscapeRight,
}

impl Orientation {
    /// Angle in degrees between a plane through the camera position and
    /// the top of the screen and one through the camera position and the
    /// bottom. Zero while the orientation is still unknown.
    pub fn view_angle_deg(self, cfg: &ViewerConfig) -> f32 {
        match self {
            Orientation::Portrait | Orientation::PortraitUpsideDown => cfg.portrait_angle_deg,
            Orientation::LandscapeLeft | Orientation::LandscapeRight => cfg.landscape_angle_deg,
            Orientation::Unknown => 0.0,
        }
    }
}

/// Builds and caches the combined quad transform.
#[derive(Debug, Clone)]
pub struct TransformPipeline {
    config: ViewerConfig,
    orientation: Orientation,
    look_at: Mat4,
    translate: Mat4,
    transform: Mat4,
}

impl TransformPipeline {
    /// Precomputes the viewing and translation matrices; neither depends
    /// on orientation, so they are built once.
    pub fn new(config: ViewerConfig) -> Self {
        let look_at = look_at(config.eye, config.center, config.up);
        let translate = Mat4::translation(config.translate);
        Self {
            config,
            orientation: Orientation::Unknown,
            look_at,
            translate,
            transform: Mat4::IDENTITY,
        }
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// The current combined transform.
    pub fn transform(&self) -> &Mat4 {
        &self.transform
    }

    /// Recomputes the combined transform if, and only if, the device
    /// orientation changed. Returns the fresh matrix on recompute and
    /// `None` when the cached one is still valid.
    ///
    /// An `Unknown` orientation has a zero view angle and produces a
    /// degenerate frustum; callers report real orientations here.
    pub fn reshape(&mut self, orientation: Orientation, aspect: f32) -> Option<&Mat4> {
        if self.orientation == orientation {
            return None;
        }
        self.orientation = orientation;

        let angle_deg = orientation.view_angle_deg(&self.config);
        let angle_rad = deg_to_rad(angle_deg);

        let length = self.config.near * angle_rad.tan();
        let right = length / aspect;
        let left = -right;
        let top = length;
        let bottom = -top;

        let perspective = frustum_oc(left, right, bottom, top, self.config.near, self.config.far);

        self.transform = perspective * (self.look_at * self.translate);

        debug!(
            orientation = ?orientation,
            aspect,
            angle_deg,
            "recomputed quad transform"
        );
        Some(&self.transform)
    }
}
