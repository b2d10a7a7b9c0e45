//! Live dashboard state.
//!
//! A [`Dashboard`] owns the series behind every chart together with the
//! surfaces they are drawn on. [`Dashboard::tick`] advances the simulated
//! feed by one step and redraws the charts that changed.

use std::collections::VecDeque;

use log::{debug, warn};

use crate::charts::{hero_points, ChartRenderer, DrawOutcome};
use crate::config::{DashboardConfig, SurfacesConfig};
use crate::error::Result;
use crate::geometry::Point;
use crate::random::{RandomSource, SeededRandom};
use crate::series::Series;
use crate::surface::SurfaceRegistry;
use crate::synth::{daily_timestamps, now_ms, Wave, DAY_MS};

/// Result of one [`Dashboard::tick`].
///
/// `None` means that chart failed to draw; the failure was logged.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TickReport {
    /// Ticks completed, including this one.
    pub tick: u64,
    /// Line chart redraw.
    pub line: Option<DrawOutcome>,
    /// Sparkline redraw.
    pub spark: Option<DrawOutcome>,
}

impl TickReport {
    /// True if no redraw failed.
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.line.is_some() && self.spark.is_some()
    }
}

/// Something a refresh loop can advance.
pub trait Tick {
    /// Advance one step.
    fn tick(&mut self) -> TickReport;
}

/// Series, surfaces and renderer of the live dashboard.
pub struct Dashboard<R, G = SeededRandom> {
    surfaces: R,
    renderer: ChartRenderer,
    names: SurfacesConfig,

    performance: Series,
    timestamps: VecDeque<i64>,
    importance: Vec<f32>,
    labels: Vec<String>,
    spark: Series,
    hero: Vec<Point>,

    performance_wave: Wave,
    spark_wave: Wave,
    /// Phase for the next appended line sample.
    next_phase: usize,
    rng: G,
    ticks: u64,
}

impl<R: SurfaceRegistry> Dashboard<R> {
    /// Build a dashboard seeded from `config.seed`, or from the operating
    /// system when unset.
    ///
    /// # Errors
    ///
    /// Returns an error if the configured style has a malformed color.
    pub fn from_config(config: &DashboardConfig, surfaces: R) -> Result<Self> {
        let rng = config.seed.map_or_else(SeededRandom::from_entropy, SeededRandom::new);
        Self::new(config, surfaces, rng)
    }
}

impl<R: SurfaceRegistry, G: RandomSource> Dashboard<R, G> {
    /// Generate the startup series. Nothing is drawn yet; call
    /// [`Dashboard::render_all`].
    ///
    /// # Errors
    ///
    /// Returns an error if the configured style has a malformed color.
    pub fn new(config: &DashboardConfig, mut surfaces: R, mut rng: G) -> Result<Self> {
        let renderer = ChartRenderer::new(config.style()?);
        let data = &config.data;

        let performance = data.performance.series(data.line_samples, &mut rng);
        let timestamps: VecDeque<i64> = daily_timestamps(data.line_samples, now_ms()).into();
        let spark = data.spark.series(data.spark_samples, &mut rng);

        let hero_spec = &config.surfaces.hero;
        let (w, h) = surfaces
            .surface_mut(&hero_spec.name)
            .map_or((hero_spec.width, hero_spec.height), |s| (s.width(), s.height()));
        let hero = hero_points(w as f32, h as f32, data.hero_points, &mut rng);

        debug!(
            "dashboard ready: {} line samples, {} bars, {} spark samples",
            performance.len(),
            data.importance.len(),
            spark.len()
        );

        Ok(Self {
            surfaces,
            renderer,
            names: config.surfaces.clone(),
            next_phase: performance.len(),
            performance,
            timestamps,
            importance: data.importance.clone(),
            labels: data.labels.clone(),
            spark,
            hero,
            performance_wave: data.performance,
            spark_wave: data.spark,
            rng,
            ticks: 0,
        })
    }

    /// Draw every chart once.
    ///
    /// # Errors
    ///
    /// Returns the first draw error.
    pub fn render_all(&mut self) -> Result<()> {
        self.draw_line()?;
        self.renderer.draw_bar_chart(&mut self.surfaces, &self.names.bar.name, &self.importance, &self.labels)?;
        self.draw_spark()?;
        self.renderer.draw_hero_spark(&mut self.surfaces, &self.names.hero.name, &self.hero)?;
        Ok(())
    }

    /// Roll the line series by one sample, regenerate the sparkline, and
    /// redraw both. Draw failures are logged and reported, never returned.
    pub fn tick(&mut self) -> TickReport {
        let value = self.performance_wave.sample(self.next_phase as f32, &mut self.rng);
        self.next_phase += 1;
        self.performance.roll(value);
        if let Some(&last) = self.timestamps.back() {
            self.timestamps.pop_front();
            self.timestamps.push_back(last + DAY_MS);
        }

        let wave = self.spark_wave;
        self.spark.regenerate(|i| wave.jittered(i, &mut self.rng));

        self.ticks += 1;
        let line = logged(self.ticks, "line chart", self.draw_line());
        let spark = logged(self.ticks, "sparkline", self.draw_spark());

        debug!("tick {} appended {value}", self.ticks);
        TickReport { tick: self.ticks, line, spark }
    }

    fn draw_line(&mut self) -> Result<DrawOutcome> {
        self.renderer.draw_line_chart(
            &mut self.surfaces,
            &self.names.line.name,
            self.performance.as_slice(),
            self.timestamps.make_contiguous(),
        )
    }

    fn draw_spark(&mut self) -> Result<DrawOutcome> {
        self.renderer.draw_sparkline(&mut self.surfaces, &self.names.spark.name, self.spark.as_slice())
    }

    /// Line series, oldest first.
    #[must_use]
    pub fn performance(&self) -> &Series {
        &self.performance
    }

    /// Timestamps parallel to the line series.
    #[must_use]
    pub fn timestamps(&self) -> &VecDeque<i64> {
        &self.timestamps
    }

    /// Bar values.
    #[must_use]
    pub fn importance(&self) -> &[f32] {
        &self.importance
    }

    /// Bar labels.
    #[must_use]
    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    /// Sparkline series.
    #[must_use]
    pub fn spark(&self) -> &Series {
        &self.spark
    }

    /// Hero sparkline points.
    #[must_use]
    pub fn hero(&self) -> &[Point] {
        &self.hero
    }

    /// Ticks completed.
    #[must_use]
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    /// The chart renderer.
    #[must_use]
    pub fn renderer(&self) -> &ChartRenderer {
        &self.renderer
    }

    /// Surface names and sizes.
    #[must_use]
    pub fn surface_names(&self) -> &SurfacesConfig {
        &self.names
    }

    /// The surface registry.
    #[must_use]
    pub fn surfaces(&self) -> &R {
        &self.surfaces
    }

    /// Mutable access to the surface registry.
    pub fn surfaces_mut(&mut self) -> &mut R {
        &mut self.surfaces
    }

    /// Give the surfaces back.
    #[must_use]
    pub fn into_surfaces(self) -> R {
        self.surfaces
    }
}

fn logged(tick: u64, chart: &str, result: Result<DrawOutcome>) -> Option<DrawOutcome> {
    match result {
        Ok(outcome) => Some(outcome),
        Err(e) => {
            warn!("tick {tick}: {chart} not drawn: {e}");
            None
        }
    }
}

impl<R: SurfaceRegistry, G: RandomSource> Tick for Dashboard<R, G> {
    fn tick(&mut self) -> TickReport {
        Dashboard::tick(self)
    }
}

impl<R, G> std::fmt::Debug for Dashboard<R, G> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Dashboard")
            .field("names", &self.names)
            .field("line_samples", &self.performance.len())
            .field("spark_samples", &self.spark.len())
            .field("ticks", &self.ticks)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::canvas::{DrawCommand, RecordingSurface};
    use crate::surface::Surfaces;

    fn recording() -> Surfaces<RecordingSurface> {
        let config = SurfacesConfig::default();
        config
            .all()
            .iter()
            .fold(Surfaces::new(), |s, spec| s.with(spec.name.clone(), RecordingSurface::new(spec.width, spec.height)))
    }

    fn dashboard() -> Dashboard<Surfaces<RecordingSurface>> {
        Dashboard::new(&DashboardConfig::default(), recording(), SeededRandom::new(11)).unwrap()
    }

    #[test]
    fn test_startup_data() {
        let dash = dashboard();
        assert_eq!(dash.performance().len(), 30);
        assert_eq!(dash.timestamps().len(), 30);
        assert_eq!(dash.spark().len(), 64);
        assert_eq!(dash.hero().len(), 36);
        assert_eq!(dash.importance(), &crate::synth::IMPORTANCE);
        assert_eq!(dash.labels()[3], "feat_d");
        assert_eq!(dash.ticks(), 0);
    }

    #[test]
    fn test_render_all_draws_every_surface() {
        let mut dash = dashboard();
        dash.render_all().unwrap();
        for (name, surface) in dash.surfaces().iter() {
            assert!(
                matches!(surface.commands().first(), Some(DrawCommand::ClearRect(_))),
                "{name} not drawn"
            );
        }
    }

    #[test]
    fn test_tick_rolls_line_series() {
        let mut dash = dashboard();
        let before = dash.performance().to_vec();
        let report = dash.tick();
        let after = dash.performance().to_vec();

        assert!(report.is_clean());
        assert_eq!(report.tick, 1);
        assert_eq!(after.len(), before.len());
        assert_eq!(&after[..29], &before[1..]);
    }

    #[test]
    fn test_tick_replaces_every_spark_sample() {
        let mut dash = dashboard();
        let before = dash.spark().to_vec();
        dash.tick();
        let after = dash.spark().to_vec();

        assert_eq!(after.len(), before.len());
        for (i, (a, b)) in before.iter().zip(&after).enumerate() {
            assert_ne!(a.to_bits(), b.to_bits(), "spark sample {i} unchanged");
        }
    }

    #[test]
    fn test_tick_redraws_line_and_spark_only() {
        let mut dash = dashboard();
        dash.render_all().unwrap();
        let bar_before = dash.surfaces().get("barChart").unwrap().commands().len();
        let line_before = dash.surfaces().get("lineChart").unwrap().commands().len();

        let line_frame = dash.surfaces().get("lineChart").unwrap().commands().to_vec();

        dash.tick();

        assert_eq!(dash.surfaces().get("barChart").unwrap().commands().len(), bar_before);
        let line = dash.surfaces().get("lineChart").unwrap().commands();
        assert_eq!(line.len(), line_before);
        assert_ne!(line, line_frame.as_slice());
    }

    #[test]
    fn test_recorded_frames_do_not_accumulate() {
        let mut dash = dashboard();
        dash.render_all().unwrap();
        let sizes = |dash: &Dashboard<Surfaces<RecordingSurface>>| {
            ["lineChart", "sparkChart"].map(|name| dash.surfaces().get(name).unwrap().commands().len())
        };
        let after_render = sizes(&dash);

        for _ in 0..200 {
            dash.tick();
            assert_eq!(sizes(&dash), after_render);
        }
    }

    #[test]
    fn test_tick_advances_timestamps() {
        let mut dash = dashboard();
        let first = dash.timestamps()[1];
        let last = *dash.timestamps().back().unwrap();
        dash.tick();
        assert_eq!(dash.timestamps().front(), Some(&first));
        assert_eq!(*dash.timestamps().back().unwrap(), last + DAY_MS);
        assert_eq!(dash.timestamps().len(), 30);
    }

    #[test]
    fn test_long_run_timestamps_stay_daily() {
        let mut dash = dashboard();
        for _ in 0..500 {
            dash.tick();
        }
        let stamps = dash.timestamps().iter().copied().collect::<Vec<_>>();
        assert_eq!(stamps.len(), 30);
        assert!(stamps.windows(2).all(|w| w[1] - w[0] == DAY_MS));
    }

    #[test]
    fn test_tick_without_surfaces_still_mutates() {
        let mut dash =
            Dashboard::new(&DashboardConfig::default(), Surfaces::<RecordingSurface>::new(), SeededRandom::new(3))
                .unwrap();
        let report = dash.tick();
        assert_eq!(report.line, Some(DrawOutcome::Skipped));
        assert_eq!(report.spark, Some(DrawOutcome::Skipped));
        assert_eq!(dash.ticks(), 1);
    }

    #[test]
    fn test_seeded_dashboards_agree() {
        let a = dashboard();
        let b = dashboard();
        assert_eq!(a.performance(), b.performance());
        assert_eq!(a.spark(), b.spark());
    }

    #[test]
    fn test_from_config_seed() {
        let config = DashboardConfig { seed: Some(5), ..DashboardConfig::default() };
        let a = Dashboard::from_config(&config, recording()).unwrap();
        let b = Dashboard::from_config(&config, recording()).unwrap();
        assert_eq!(a.performance(), b.performance());
    }
}
