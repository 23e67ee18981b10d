//! Fixed-size square matrices in a flat, row-major linear layout.
//!
//! Element (row, col) of an NxN matrix lives at linear index `row*N + col`.
//! The multiplication and view/projection builders in this crate all assume
//! this one convention; do not change it without re-verifying them.

use std::fmt;
use std::ops::{Index, IndexMut, Mul};

use serde::{Deserialize, Serialize};

use crate::math::{Vec3, Vec4};

/// 3x3 matrix. Identity by default.
///
/// Only used for diagnostics/formatting; it carries no arithmetic.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Mat3 {
    pub m: [f32; 9],
}

impl Mat3 {
    pub const IDENTITY: Self = Self {
        m: [
            1.0, 0.0, 0.0, //
            0.0, 1.0, 0.0, //
            0.0, 0.0, 1.0,
        ],
    };

    pub const fn from_data(m: [f32; 9]) -> Self {
        Self { m }
    }
}

impl Default for Mat3 {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Index<usize> for Mat3 {
    type Output = f32;

    fn index(&self, index: usize) -> &f32 {
        assert!(index < 9, "Mat3 index out of range: {index}");
        &self.m[index]
    }
}

impl IndexMut<usize> for Mat3 {
    fn index_mut(&mut self, index: usize) -> &mut f32 {
        assert!(index < 9, "Mat3 index out of range: {index}");
        &mut self.m[index]
    }
}

impl Index<(usize, usize)> for Mat3 {
    type Output = f32;

    fn index(&self, (row, col): (usize, usize)) -> &f32 {
        let index = row * 3 + col;
        assert!(index < 9, "Mat3 index out of range: ({row}, {col})");
        &self.m[index]
    }
}

impl IndexMut<(usize, usize)> for Mat3 {
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut f32 {
        let index = row * 3 + col;
        assert!(index < 9, "Mat3 index out of range: ({row}, {col})");
        &mut self.m[index]
    }
}

impl fmt::Display for Mat3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "[")?;
        for row in 0..3 {
            writeln!(
                f,
                "   {:.3}, {:.3}, {:.3}",
                self[(row, 0)],
                self[(row, 1)],
                self[(row, 2)]
            )?;
        }
        write!(f, "]")
    }
}

/// 4x4 matrix. Identity by default.
///
/// The flat layout is what gets copied verbatim into the GPU constant
/// buffer (16 floats, 64 bytes), so the linear index order is part of the
/// renderer contract, not an implementation detail.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Mat4 {
    pub m: [f32; 16],
}

impl Mat4 {
    pub const IDENTITY: Self = Self {
        m: [
            1.0, 0.0, 0.0, 0.0, //
            0.0, 1.0, 0.0, 0.0, //
            0.0, 0.0, 1.0, 0.0, //
            0.0, 0.0, 0.0, 1.0,
        ],
    };

    pub const fn from_data(m: [f32; 16]) -> Self {
        Self { m }
    }

    /// Builds a matrix from four vectors placed contiguously in linear
    /// order: `p` fills indices 0..4, `q` 4..8, `r` 8..12, `s` 12..16.
    pub const fn from_rows(p: Vec4, q: Vec4, r: Vec4, s: Vec4) -> Self {
        Self {
            m: [
                p.x, p.y, p.z, p.w, //
                q.x, q.y, q.z, q.w, //
                r.x, r.y, r.z, r.w, //
                s.x, s.y, s.z, s.w,
            ],
        }
    }

    /// Identity with the translation written into the fourth row
    /// (linear indices 12, 13, 14).
    pub const fn translation(v: Vec3) -> Self {
        Self {
            m: [
                1.0, 0.0, 0.0, 0.0, //
                0.0, 1.0, 0.0, 0.0, //
                0.0, 0.0, 1.0, 0.0, //
                v.x, v.y, v.z, 1.0,
            ],
        }
    }

    /// The flat 16-float sequence in linear layout order.
    pub const fn as_array(&self) -> &[f32; 16] {
        &self.m
    }
}

impl Default for Mat4 {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Index<usize> for Mat4 {
    type Output = f32;

    fn index(&self, index: usize) -> &f32 {
        assert!(index < 16, "Mat4 index out of range: {index}");
        &self.m[index]
    }
}

impl IndexMut<usize> for Mat4 {
    fn index_mut(&mut self, index: usize) -> &mut f32 {
        assert!(index < 16, "Mat4 index out of range: {index}");
        &mut self.m[index]
    }
}

impl Index<(usize, usize)> for Mat4 {
    type Output = f32;

    fn index(&self, (row, col): (usize, usize)) -> &f32 {
        let index = row * 4 + col;
        assert!(index < 16, "Mat4 index out of range: ({row}, {col})");
        &self.m[index]
    }
}

impl IndexMut<(usize, usize)> for Mat4 {
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut f32 {
        let index = row * 4 + col;
        assert!(index < 16, "Mat4 index out of range: ({row}, {col})");
        &mut self.m[index]
    }
}

impl Mul for Mat4 {
    type Output = Self;

    /// `C = A * B` with the exact index algebra the rest of the crate is
    /// verified against: `C[i] = sum_j A[4*j + rem] * B[row_base + j]`
    /// where `row_base = (i/4)*4` and `rem = i - row_base`. This reads `A`
    /// column-wise and `B` row-wise relative to the linear layout; a naive
    /// row-major triple loop is not a drop-in replacement.
    fn mul(self, rhs: Self) -> Self {
        let mut m = [0.0f32; 16];
        for (i, out) in m.iter_mut().enumerate() {
            let row_base = (i / 4) * 4;
            let rem = i - row_base;
            let mut acc = 0.0f32;
            for j in 0..4 {
                acc += self.m[4 * j + rem] * rhs.m[row_base + j];
            }
            *out = acc;
        }
        Self { m }
    }
}

impl Mul<Mat4> for Vec4 {
    type Output = Vec4;

    /// Row-vector transform: `(v * M)[c] = sum_r v[r] * M[r*4 + c]`.
    /// Consistent with [`Mat4::translation`] putting the offset in the
    /// fourth row.
    fn mul(self, rhs: Mat4) -> Vec4 {
        let mut out = Vec4::ZERO;
        for c in 0..4 {
            out[c] = self.x * rhs.m[c]
                + self.y * rhs.m[4 + c]
                + self.z * rhs.m[8 + c]
                + self.w * rhs.m[12 + c];
        }
        out
    }
}

impl fmt::Display for Mat4 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "[")?;
        for row in 0..4 {
            writeln!(
                f,
                "   {:.3}, {:.3}, {:.3}, {:.3}",
                self[(row, 0)],
                self[(row, 1)],
                self[(row, 2)],
                self[(row, 3)]
            )?;
        }
        write!(f, "]")
    }
}
