//! Headless viewer driver.
//!
//! Usage:
//!   cargo run -p quadview_viewer -- [--config viewer.json] [--frames 8]
//!
//! Stands in for the real display loop: walks the pipeline through a fixed
//! orientation sequence, re-uploading the combined transform to a no-op
//! backend whenever the orientation flips, and drawing the quad each frame.

use std::env;
use std::fs;

use anyhow::Context;
use quadview_core::config::ViewerConfig;
use quadview_core::math::Vec2;
use quadview_core::pipeline::{Orientation, TransformPipeline};
use quadview_core::quad::{QuadLayout, Rect};
use quadview_core::render::{transform_bytes, NullRenderer, RenderBackend};
use tracing::info;

struct Args {
    config: ViewerConfig,
    frames: u32,
}

fn parse_args() -> anyhow::Result<Args> {
    let mut config = ViewerConfig::default();
    let mut frames = 8u32;
    let args: Vec<String> = env::args().collect();
    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--config" if i + 1 < args.len() => {
                let text = fs::read_to_string(&args[i + 1])
                    .with_context(|| format!("reading config {}", args[i + 1]))?;
                config = ViewerConfig::from_json_str(&text).context("parsing config")?;
                i += 2;
            }
            "--frames" if i + 1 < args.len() => {
                frames = args[i + 1].parse().context("parsing --frames")?;
                i += 2;
            }
            _ => i += 1,
        }
    }
    Ok(Args { config, frames })
}

/// Portrait-first rotation schedule; one entry per simulated frame.
fn orientation_for_frame(frame: u32) -> Orientation {
    match (frame / 4) % 2 {
        0 => Orientation::Portrait,
        _ => Orientation::LandscapeLeft,
    }
}

fn view_bounds(orientation: Orientation) -> Rect {
    match orientation {
        Orientation::LandscapeLeft | Orientation::LandscapeRight => {
            Rect::new(0.0, 0.0, 1334.0, 750.0)
        }
        _ => Rect::new(0.0, 0.0, 750.0, 1334.0),
    }
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let args = parse_args()?;
    info!(frames = args.frames, "Starting viewer");

    let mut pipeline = TransformPipeline::new(args.config);
    let mut quad = QuadLayout::new(Vec2::new(512.0, 512.0));
    let mut renderer = NullRenderer;

    for frame in 0..args.frames {
        let orientation = orientation_for_frame(frame);
        let bounds = view_bounds(orientation);
        if quad.set_bounds(bounds) {
            info!(frame, scale = %quad.scale, "quad rescaled");
        }

        renderer.begin_frame();
        if let Some(transform) = pipeline.reshape(orientation, quad.aspect) {
            renderer.upload_transform(&transform_bytes(transform));
            info!(frame, orientation = ?orientation, "transform uploaded\n{transform}");
        }
        renderer.draw_quad(&quad);
        renderer.end_frame();
    }

    Ok(())
}
