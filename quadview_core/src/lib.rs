//! `quadview_core`
//!
//! Math and renderer-facing primitives for the textured-quad viewer.
//!
//! Design goals:
//! - Deterministic and modular where practical.
//! - Pure value types for math; a single trait seam toward the GPU backend.
//! - Programmer errors (bad indices) fail fast via assertions.
//! - No `unsafe`.

pub mod config;
pub mod math;
pub mod matrix;
pub mod pipeline;
pub mod quad;
pub mod render;
pub mod transform;

pub mod prelude {
    //! Commonly used exports.

    pub use crate::config::*;
    pub use crate::math::*;
    pub use crate::matrix::*;
    pub use crate::pipeline::*;
    pub use crate::quad::*;
    pub use crate::render::*;
    pub use crate::transform::*;
}
