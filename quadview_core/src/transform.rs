//! View and projection matrix builders.
//!
//! Both builders emit matrices in the linear layout described in
//! [`crate::matrix`] and are meant to be combined with `Mat4`
//! multiplication into a single per-frame transform.

use crate::math::{Vec3, Vec4};
use crate::matrix::Mat4;

/// Viewing matrix derived from an eye point, a reference point indicating
/// the center of the scene, and an up vector.
///
/// Degenerate input: when `up` is parallel to the viewing direction the
/// cross products collapse to zero vectors and the result is a
/// non-invertible matrix. Callers must avoid such input; the builder does
/// not guard against it.
pub fn look_at(eye: Vec3, center: Vec3, up: Vec3) -> Mat4 {
    let e = -eye;

    let n = (center + e).normalized();
    let u = up.cross(n).normalized();
    let v = n.cross(u).normalized();

    let mut p = Vec4::ZERO;
    let mut q = Vec4::ZERO;
    let mut r = Vec4::ZERO;
    let mut s = Vec4::ZERO;

    p.x = u.x;
    q.x = u.y;
    r.x = u.z;

    p.y = v.x;
    q.y = v.y;
    r.y = v.z;

    p.z = n.x;
    q.z = n.y;
    r.z = n.z;

    s.x = u.dot(e);
    s.y = v.dot(e);
    s.z = n.dot(e);
    s.w = 1.0;

    Mat4::from_rows(p, q, r, s)
}

/// Off-center perspective projection.
///
/// `near == far` divides by zero and yields an unusable matrix; callers
/// must never pass equal planes.
pub fn frustum_oc(left: f32, right: f32, bottom: f32, top: f32, near: f32, far: f32) -> Mat4 {
    let scale_width = 1.0 / (right - left);
    let scale_height = 1.0 / (top - bottom);
    let scale_depth = far / (far - near);
    let dnear = 2.0 * near;

    let mut p = Vec4::ZERO;
    let mut q = Vec4::ZERO;
    let mut r = Vec4::ZERO;
    let mut s = Vec4::ZERO;

    p.x = dnear * scale_width;
    q.y = dnear * scale_height;
    r.x = -scale_width * (right + left);
    r.y = -scale_height * (top + bottom);
    r.z = scale_depth;
    r.w = 1.0;
    s.z = -scale_depth * near;

    Mat4::from_rows(p, q, r, s)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn look_at_forward_z_is_identity() {
        let m = look_at(
            Vec3::new(0.0, 0.0, 0.0),
            Vec3::new(0.0, 0.0, 1.0),
            Vec3::new(0.0, 1.0, 0.0),
        );
        assert_eq!(m, Mat4::IDENTITY);
    }

    #[test]
    fn look_at_offset_eye_translates() {
        let eye = Vec3::new(0.0, 0.0, -2.0);
        let m = look_at(eye, Vec3::new(0.0, 0.0, 1.0), Vec3::new(0.0, 1.0, 0.0));
        // Rotation block stays the identity; the fourth row carries the
        // projected -eye.
        for r in 0..3 {
            for c in 0..3 {
                let want = if r == c { 1.0 } else { 0.0 };
                assert!((m[(r, c)] - want).abs() < 1e-6);
            }
        }
        assert!((m[14] - 2.0).abs() < 1e-6);
        assert_eq!(m[15], 1.0);
    }

    #[test]
    fn look_at_parallel_up_degenerates() {
        // Known degenerate input: up parallel to the view direction.
        let m = look_at(
            Vec3::new(0.0, 0.0, 0.0),
            Vec3::new(0.0, 0.0, 1.0),
            Vec3::new(0.0, 0.0, 1.0),
        );
        assert_eq!(m[(0, 0)], 0.0);
        assert_eq!(m[(1, 1)], 0.0);
    }

    #[test]
    fn frustum_reference_entries() {
        let m = frustum_oc(-1.0, 1.0, -1.0, 1.0, 0.1, 100.0);
        assert_eq!(m[(0, 0)], 2.0 * 0.1 / 2.0);
        assert_eq!(m[(2, 3)], 1.0);
        let scale_depth = 100.0 / (100.0 - 0.1);
        assert_eq!(m[(2, 2)], scale_depth);
        assert_eq!(m[(3, 2)], -scale_depth * 0.1);
        // Symmetric planes leave the off-center terms zero.
        assert_eq!(m[(2, 0)], 0.0);
        assert_eq!(m[(2, 1)], 0.0);
        assert_eq!(m[(1, 1)], 0.1);
        assert_eq!(m[(3, 3)], 0.0);
    }

    #[test]
    fn frustum_off_center_terms() {
        let m = frustum_oc(0.0, 2.0, -1.0, 1.0, 1.0, 10.0);
        // scale_width = 0.5, right+left = 2.
        assert_eq!(m[(2, 0)], -1.0);
        assert_eq!(m[(0, 0)], 1.0);
    }
}
