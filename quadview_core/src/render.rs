//! Rendering abstraction.
//!
//! This crate intentionally does not depend on a graphics backend.
//! Define traits that a renderer implementation would satisfy, plus the
//! byte-layout contract for handing the combined transform to a GPU
//! constant buffer.

use bytes::{BufMut, Bytes, BytesMut};

use crate::matrix::Mat4;
use crate::quad::QuadLayout;

/// Size of the transform constant buffer: 16 floats, 4 bytes each.
pub const TRANSFORM_BYTE_LEN: usize = 16 * 4;

/// A minimal rendering API.
pub trait RenderBackend: Send + Sync {
    fn begin_frame(&mut self);
    /// Receives exactly [`TRANSFORM_BYTE_LEN`] bytes, the flat matrix in
    /// linear layout order, little-endian floats.
    fn upload_transform(&mut self, transform: &[u8]);
    fn draw_quad(&mut self, quad: &QuadLayout);
    fn end_frame(&mut self);
}

/// A no-op renderer useful for headless tests.
#[derive(Default)]
pub struct NullRenderer;

impl RenderBackend for NullRenderer {
    fn begin_frame(&mut self) {}
    fn upload_transform(&mut self, _transform: &[u8]) {}
    fn draw_quad(&mut self, _quad: &QuadLayout) {}
    fn end_frame(&mut self) {}
}

/// Packs the matrix for the constant buffer: the 16 floats in linear
/// layout order, little-endian, 64 bytes total.
pub fn transform_bytes(m: &Mat4) -> Bytes {
    let mut buf = BytesMut::with_capacity(TRANSFORM_BYTE_LEN);
    for value in m.as_array() {
        buf.put_f32_le(*value);
    }
    buf.freeze()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::Vec3;

    #[test]
    fn transform_bytes_len_and_order() {
        let m = Mat4::translation(Vec3::new(1.0, 2.0, 3.0));
        let bytes = transform_bytes(&m);
        assert_eq!(bytes.len(), TRANSFORM_BYTE_LEN);
        // Index 12 holds the x translation.
        let chunk: [u8; 4] = bytes[48..52].try_into().unwrap();
        assert_eq!(f32::from_le_bytes(chunk), 1.0);
        // Index 0 holds the leading identity entry.
        let chunk: [u8; 4] = bytes[0..4].try_into().unwrap();
        assert_eq!(f32::from_le_bytes(chunk), 1.0);
        // Index 1 is zero.
        let chunk: [u8; 4] = bytes[4..8].try_into().unwrap();
        assert_eq!(f32::from_le_bytes(chunk), 0.0);
    }

    #[test]
    fn null_renderer_accepts_a_frame() {
        let mut renderer = NullRenderer;
        let quad = QuadLayout::new(crate::math::Vec2::new(64.0, 64.0));
        renderer.begin_frame();
        renderer.upload_transform(&transform_bytes(&Mat4::IDENTITY));
        renderer.draw_quad(&quad);
        renderer.end_frame();
    }
}
