//! Dashboard behavior through the public API.
//!
//! Run: cargo test --test dashboard_test

#![allow(clippy::unwrap_used)]

use trueno_dash::canvas::DrawCommand;
use trueno_dash::charts::LineLayout;
use trueno_dash::prelude::*;

fn recording_surfaces(config: &DashboardConfig) -> Surfaces<RecordingSurface> {
    let mut surfaces = Surfaces::new();
    for spec in config.surfaces.all() {
        surfaces.insert(spec.name.clone(), RecordingSurface::new(spec.width, spec.height));
    }
    surfaces
}

fn dashboard(seed: u64) -> Dashboard<Surfaces<RecordingSurface>> {
    let config = DashboardConfig::default();
    let surfaces = recording_surfaces(&config);
    Dashboard::new(&config, surfaces, SeededRandom::new(seed)).unwrap()
}

fn line_ys(surface: &RecordingSurface) -> Vec<f32> {
    surface
        .last_frame()
        .iter()
        .find_map(|cmd| match cmd {
            DrawCommand::StrokePath { path, .. } => Some(path.points().iter().map(|p| p.y).collect()),
            _ => None,
        })
        .unwrap()
}

// ============================================================================
// Ticking
// ============================================================================

#[test]
fn tick_drops_first_and_appends_one() {
    let mut dash = dashboard(1);
    for _ in 0..50 {
        let before = dash.performance().to_vec();
        dash.tick();
        let after = dash.performance().to_vec();

        assert_eq!(after.len(), before.len());
        assert_eq!(&after[..after.len() - 1], &before[1..]);
    }
    assert_eq!(dash.ticks(), 50);
}

#[test]
fn appended_samples_stay_in_wave_bounds() {
    let mut dash = dashboard(2);
    let (lo, hi) = DashboardConfig::default().data.performance.bounds();
    for _ in 0..100 {
        dash.tick();
        let last = dash.performance().last().unwrap();
        assert!(last >= lo && last <= hi, "{last} outside [{lo}, {hi}]");
    }
}

#[test]
fn tick_replaces_every_spark_sample() {
    let mut dash = dashboard(3);
    for _ in 0..10 {
        let before = dash.spark().to_vec();
        dash.tick();
        let replaced = before.iter().zip(dash.spark().iter()).filter(|(a, b)| a.to_bits() != b.to_bits()).count();
        assert_eq!(replaced, before.len());
    }
}

#[test]
fn recorded_line_chart_holds_one_frame() {
    let mut dash = dashboard(5);
    dash.render_all().unwrap();
    let frame_len = dash.surfaces().get("lineChart").unwrap().commands().len();

    for _ in 0..300 {
        dash.tick();
    }

    let line = dash.surfaces().get("lineChart").unwrap();
    assert_eq!(line.commands().len(), frame_len);
    assert_eq!(line.commands(), line.last_frame());
}

#[test]
fn line_redraw_matches_layout() {
    let mut dash = dashboard(4);
    dash.render_all().unwrap();
    dash.tick();

    let values = dash.performance().to_vec();
    let expected: Vec<f32> =
        LineLayout::compute(640.0, 260.0, 32.0, 6.0, &values).unwrap().points.iter().map(|p| p.y).collect();
    let drawn = line_ys(dash.surfaces().get("lineChart").unwrap());
    assert_eq!(drawn, expected);

    for y in drawn {
        assert!((32.0..=228.0).contains(&y));
    }
}

#[test]
fn bar_chart_drawn_once_with_labels() {
    let mut dash = dashboard(5);
    dash.render_all().unwrap();
    for _ in 0..3 {
        dash.tick();
    }

    let bar = dash.surfaces().get("barChart").unwrap();
    let clears = bar.commands().iter().filter(|c| matches!(c, DrawCommand::ClearRect(_))).count();
    assert_eq!(clears, 1);
    assert_eq!(bar.texts(), vec![
        "feat_a", "feat_b", "feat_c", "feat_d", "feat_e", "feat_f", "feat_g", "feat_h", "feat_i", "feat_j"
    ]);
}

// ============================================================================
// Missing surfaces
// ============================================================================

#[test]
fn missing_surfaces_are_skipped() {
    let config = DashboardConfig::default();
    let surfaces = Surfaces::new().with("barChart", RecordingSurface::new(640, 260));
    let mut dash = Dashboard::new(&config, surfaces, SeededRandom::new(6)).unwrap();

    dash.render_all().unwrap();
    let report = dash.tick();

    assert_eq!(report.line, Some(DrawOutcome::Skipped));
    assert_eq!(report.spark, Some(DrawOutcome::Skipped));
    assert!(!dash.surfaces().get("barChart").unwrap().commands().is_empty());
}

#[test]
fn renderer_example_series_orders_inversely() {
    let mut surfaces = Surfaces::new().with("lineChart", RecordingSurface::new(640, 260));
    let renderer = ChartRenderer::default();
    renderer.draw_line_chart(&mut surfaces, "lineChart", &[70.0, 75.0, 80.0, 75.0, 70.0], &[]).unwrap();

    let ys = line_ys(surfaces.get("lineChart").unwrap());
    assert!(ys[2] < ys[1] && ys[1] < ys[0]);
    assert!(ys[2] < ys[3] && ys[3] < ys[4]);
}

// ============================================================================
// Custom configuration
// ============================================================================

#[test]
fn custom_surface_names_and_sizes() {
    let yaml = r#"
seed: 9
surfaces:
  line: { name: perf, width: 300, height: 120 }
  spark: { name: tiny, width: 80, height: 20 }
data:
  line_samples: 8
  spark_samples: 16
"#;
    let config = DashboardConfig::parse(yaml).unwrap();
    let mut dash = Dashboard::from_config(&config, recording_surfaces(&config)).unwrap();
    dash.render_all().unwrap();
    let report = dash.tick();

    assert!(report.is_clean());
    assert_eq!(dash.performance().len(), 8);
    assert_eq!(dash.spark().len(), 16);
    assert_eq!(line_ys(dash.surfaces().get("perf").unwrap()).len(), 8);
    assert!(dash.surfaces().get("lineChart").is_none());
}
