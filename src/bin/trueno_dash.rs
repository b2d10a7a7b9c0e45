//! trueno-dash - run the live dashboard and export every chart.
//!
//! Usage: `trueno-dash [config.yaml|-] [out_dir] [ticks]`
//!
//! Draws the dashboard, ticks it exactly `ticks` times one refresh period
//! apart (default 3), then writes `<surface>.png` and `<surface>.svg` for each
//! surface into `out_dir` (default `dashboard-out`).

use std::path::PathBuf;

use log::info;
use trueno_dash::prelude::*;
use trueno_dash::refresh::run_ticks;

/// Page background behind the charts.
const BACKGROUND: Rgba = Rgba::rgb(11, 15, 26);

#[tokio::main]
async fn main() -> std::result::Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let mut args = std::env::args().skip(1);
    let config = match args.next() {
        Some(path) if path != "-" => DashboardConfig::load(path)?,
        _ => DashboardConfig::default(),
    };
    let out_dir = PathBuf::from(args.next().unwrap_or_else(|| "dashboard-out".to_string()));
    let ticks = args.next().map(|t| t.parse::<u64>()).transpose()?.unwrap_or(3);

    let mut surfaces = Surfaces::new();
    for spec in config.surfaces.all() {
        surfaces.insert(spec.name.clone(), RecordingSurface::new(spec.width, spec.height));
    }

    let mut dashboard = Dashboard::from_config(&config, surfaces)?;
    dashboard.render_all()?;

    if ticks > 0 {
        let period = config.refresh_interval();
        info!("running {ticks} ticks every {period:?}");
        run_ticks(&mut dashboard, period, ticks).await;
    }

    std::fs::create_dir_all(&out_dir)?;
    for (name, recording) in dashboard.surfaces().iter() {
        let (w, h) = (recording.width(), recording.height());

        let mut raster = RasterSurface::new(w, h, BACKGROUND)?;
        recording.replay(&mut raster);
        let png = out_dir.join(format!("{name}.png"));
        raster.write_png(&png)?;

        let mut svg = SvgSurface::new(w, h).background(Some(BACKGROUND));
        recording.replay(&mut svg);
        let svg_path = out_dir.join(format!("{name}.svg"));
        svg.write_to_file(&svg_path)?;

        info!("wrote {} and {}", png.display(), svg_path.display());
    }

    info!("{} ticks, output in {}", dashboard.ticks(), out_dir.display());
    Ok(())
}
