//! Textured-quad geometry and view-dependent scaling.
//!
//! The quad itself never changes: two counter-clockwise triangles spanning
//! [-1, 1] in x/y with matching texture coordinates. What does change is
//! the x/y scale applied to those vertices so the image keeps its aspect
//! ratio inside the current view bounds; the renderer only rewrites its
//! vertex buffer when that scale actually moves.

use serde::{Deserialize, Serialize};

use crate::math::{Vec2, Vec4};

/// Quad corners as homogeneous points, two triangles.
pub const QUAD_VERTICES: [Vec4; 6] = [
    Vec4::new(-1.0, -1.0, 0.0, 1.0),
    Vec4::new(1.0, -1.0, 0.0, 1.0),
    Vec4::new(-1.0, 1.0, 0.0, 1.0),
    Vec4::new(1.0, -1.0, 0.0, 1.0),
    Vec4::new(-1.0, 1.0, 0.0, 1.0),
    Vec4::new(1.0, 1.0, 0.0, 1.0),
];

/// Texture coordinates matching [`QUAD_VERTICES`] corner for corner.
pub const QUAD_TEXCOORDS: [Vec2; 6] = [
    Vec2::new(0.0, 0.0),
    Vec2::new(1.0, 0.0),
    Vec2::new(0.0, 1.0),
    Vec2::new(1.0, 0.0),
    Vec2::new(0.0, 1.0),
    Vec2::new(1.0, 1.0),
];

/// Axis-aligned view rectangle in points.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }
}

/// Placement of the textured quad inside the current view.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct QuadLayout {
    /// Source image size in pixels.
    pub size: Vec2,
    /// Bounding view rectangle.
    pub bounds: Rect,
    /// View aspect ratio, |width / height|.
    pub aspect: f32,
    /// Per-axis vertex scale derived from image size and bounds.
    pub scale: Vec2,
}

impl QuadLayout {
    pub fn new(size: Vec2) -> Self {
        Self {
            size,
            bounds: Rect::default(),
            aspect: 1.0,
            scale: Vec2::new(1.0, 1.0),
        }
    }

    /// Recomputes aspect and scale for new view bounds. Returns true when
    /// the scale changed and the renderer needs to rewrite its vertices.
    pub fn set_bounds(&mut self, bounds: Rect) -> bool {
        self.bounds = bounds;
        self.aspect = (bounds.width / bounds.height).abs();
        let inv_aspect = 1.0 / self.aspect;

        let scale = Vec2::new(
            inv_aspect * self.size.x / bounds.width,
            self.size.y / bounds.height,
        );

        let changed = scale != self.scale;
        if changed {
            self.scale = scale;
        }
        changed
    }

    /// The six quad vertices with x/y stretched to the current scale.
    pub fn scaled_vertices(&self) -> [Vec4; 6] {
        let mut verts = QUAD_VERTICES;
        for v in verts.iter_mut() {
            v.x = v.x.signum() * self.scale.x;
            v.y = v.y.signum() * self.scale.y;
        }
        verts
    }
}
