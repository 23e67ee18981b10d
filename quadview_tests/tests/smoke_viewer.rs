use quadview_core::config::ViewerConfig;
use quadview_core::pipeline::{Orientation, TransformPipeline};

/// Smoke test: a config parsed from JSON drives the pipeline end to end.
#[test]
fn pipeline_runs_from_json_config() -> anyhow::Result<()> {
    let cfg = ViewerConfig::from_json_str(
        r#"{
            "portrait_angle_deg": 45.0,
            "near": 0.5,
            "translate": {"x": 0.0, "y": 0.0, "z": 4.0}
        }"#,
    )?;
    let mut pipeline = TransformPipeline::new(cfg);
    let transform = pipeline
        .reshape(Orientation::Portrait, 0.75)
        .copied()
        .ok_or_else(|| anyhow::anyhow!("first reshape must recompute"))?;
    assert!(transform.as_array().iter().all(|v| v.is_finite()));
    Ok(())
}
