//! Shared helpers for the integration tests.

use quadview_core::matrix::Mat4;

/// Installs a fmt subscriber once; later calls are no-ops.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "debug".into()),
        )
        .try_init();
}

/// Componentwise comparison with tolerance.
pub fn assert_mat4_approx_eq(a: &Mat4, b: &Mat4, tol: f32) {
    for i in 0..16 {
        assert!(
            (a[i] - b[i]).abs() <= tol,
            "matrices differ at index {i}: {} vs {}",
            a[i],
            b[i]
        );
    }
}
