//! End-to-end flow the way a display loop would drive it: view bounds
//! update the quad layout, orientation changes rebuild the transform, and
//! only those rebuilds reach the render backend.

use quadview_core::config::ViewerConfig;
use quadview_core::math::Vec2;
use quadview_core::pipeline::{Orientation, TransformPipeline};
use quadview_core::quad::{QuadLayout, Rect};
use quadview_core::render::{transform_bytes, RenderBackend, TRANSFORM_BYTE_LEN};
use quadview_tests::init_tracing;

/// Backend that records every constant-buffer upload.
#[derive(Default)]
struct RecordingRenderer {
    uploads: Vec<Vec<u8>>,
    frames: u32,
    draws: u32,
}

impl RenderBackend for RecordingRenderer {
    fn begin_frame(&mut self) {
        self.frames += 1;
    }

    fn upload_transform(&mut self, transform: &[u8]) {
        self.uploads.push(transform.to_vec());
    }

    fn draw_quad(&mut self, _quad: &QuadLayout) {
        self.draws += 1;
    }

    fn end_frame(&mut self) {}
}

const PORTRAIT: Rect = Rect::new(0.0, 0.0, 750.0, 1334.0);
const LANDSCAPE: Rect = Rect::new(0.0, 0.0, 1334.0, 750.0);

fn run_frame(
    pipeline: &mut TransformPipeline,
    quad: &mut QuadLayout,
    renderer: &mut RecordingRenderer,
    orientation: Orientation,
    bounds: Rect,
) {
    quad.set_bounds(bounds);
    renderer.begin_frame();
    if let Some(transform) = pipeline.reshape(orientation, quad.aspect) {
        renderer.upload_transform(&transform_bytes(transform));
    }
    renderer.draw_quad(quad);
    renderer.end_frame();
}

#[test]
fn uploads_happen_once_per_orientation_change() {
    init_tracing();

    let mut pipeline = TransformPipeline::new(ViewerConfig::default());
    let mut quad = QuadLayout::new(Vec2::new(512.0, 512.0));
    let mut renderer = RecordingRenderer::default();

    // Four portrait frames, then four landscape, then portrait again.
    for _ in 0..4 {
        run_frame(
            &mut pipeline,
            &mut quad,
            &mut renderer,
            Orientation::Portrait,
            PORTRAIT,
        );
    }
    for _ in 0..4 {
        run_frame(
            &mut pipeline,
            &mut quad,
            &mut renderer,
            Orientation::LandscapeLeft,
            LANDSCAPE,
        );
    }
    run_frame(
        &mut pipeline,
        &mut quad,
        &mut renderer,
        Orientation::Portrait,
        PORTRAIT,
    );

    assert_eq!(renderer.frames, 9);
    assert_eq!(renderer.draws, 9);
    assert_eq!(renderer.uploads.len(), 3);
    for upload in &renderer.uploads {
        assert_eq!(upload.len(), TRANSFORM_BYTE_LEN);
    }
    // Returning to an orientation with the same aspect reproduces the
    // exact same buffer contents.
    assert_eq!(renderer.uploads[0], renderer.uploads[2]);
    assert_ne!(renderer.uploads[0], renderer.uploads[1]);
}

#[test]
fn quad_rescales_with_bounds_not_frames() {
    init_tracing();

    let mut quad = QuadLayout::new(Vec2::new(512.0, 512.0));
    assert!(quad.set_bounds(PORTRAIT));
    assert!(!quad.set_bounds(PORTRAIT));
    assert!(quad.set_bounds(LANDSCAPE));
    assert!((quad.aspect - 1334.0 / 750.0).abs() < 1e-5);
}

#[test]
fn upload_bytes_are_the_flat_matrix() {
    init_tracing();

    let mut pipeline = TransformPipeline::new(ViewerConfig::default());
    let transform = *pipeline.reshape(Orientation::Portrait, 0.5622).unwrap();
    let bytes = transform_bytes(&transform);

    for i in 0..16 {
        let chunk: [u8; 4] = bytes[i * 4..i * 4 + 4].try_into().unwrap();
        assert_eq!(f32::from_le_bytes(chunk), transform[i]);
    }
}
