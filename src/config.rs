//! Dashboard configuration.
//!
//! YAML via `serde_yaml_ng`. Every field has a default, so an empty document
//! (or no file at all) yields the stock dashboard.

use std::collections::HashSet;
use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::charts::{BarStyle, ChartStyle, HeroStyle, LineStyle, SparkStyle};
use crate::color::Rgba;
use crate::error::{Error, Result};
use crate::surface::{Stroke, TextStyle};
use crate::synth::{importance_labels, Wave, IMPORTANCE};

/// A named surface and its pixel size.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SurfaceSpec {
    /// Registry name.
    pub name: String,
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl SurfaceSpec {
    fn new(name: &str, width: u32, height: u32) -> Self {
        Self { name: name.to_string(), width, height }
    }
}

/// The four dashboard surfaces.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SurfacesConfig {
    /// Line chart surface.
    #[serde(default = "default_line_surface")]
    pub line: SurfaceSpec,
    /// Bar chart surface.
    #[serde(default = "default_bar_surface")]
    pub bar: SurfaceSpec,
    /// Sparkline surface.
    #[serde(default = "default_spark_surface")]
    pub spark: SurfaceSpec,
    /// Hero sparkline surface.
    #[serde(default = "default_hero_surface")]
    pub hero: SurfaceSpec,
}

fn default_line_surface() -> SurfaceSpec {
    SurfaceSpec::new("lineChart", 640, 260)
}
fn default_bar_surface() -> SurfaceSpec {
    SurfaceSpec::new("barChart", 640, 260)
}
fn default_spark_surface() -> SurfaceSpec {
    SurfaceSpec::new("sparkChart", 320, 64)
}
fn default_hero_surface() -> SurfaceSpec {
    SurfaceSpec::new("hero-spark", 560, 120)
}

impl Default for SurfacesConfig {
    fn default() -> Self {
        Self {
            line: default_line_surface(),
            bar: default_bar_surface(),
            spark: default_spark_surface(),
            hero: default_hero_surface(),
        }
    }
}

impl SurfacesConfig {
    /// All four specs: line, bar, spark, hero.
    #[must_use]
    pub fn all(&self) -> [&SurfaceSpec; 4] {
        [&self.line, &self.bar, &self.spark, &self.hero]
    }
}

/// Data generation settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DataConfig {
    /// Line series length.
    pub line_samples: usize,
    /// Sparkline series length.
    pub spark_samples: usize,
    /// Hero sparkline point count.
    pub hero_points: usize,
    /// Line series generator.
    pub performance: Wave,
    /// Sparkline generator.
    pub spark: Wave,
    /// Bar values.
    pub importance: Vec<f32>,
    /// Bar labels.
    pub labels: Vec<String>,
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            line_samples: 30,
            spark_samples: 64,
            hero_points: 36,
            performance: Wave::PERFORMANCE,
            spark: Wave::SPARK,
            importance: IMPORTANCE.to_vec(),
            labels: importance_labels(),
        }
    }
}

/// Chart styling with colors as hex strings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
#[allow(missing_docs)]
pub struct StyleConfig {
    pub line_padding: f32,
    pub domain_margin: f32,
    pub gradient_top: String,
    pub gradient_bottom: String,
    pub line_color: String,
    pub line_width: f32,
    pub marker_radius: f32,
    pub marker_color: String,
    pub label_color: String,
    pub font_size: f32,

    pub bar_padding: f32,
    pub bar_gap: f32,
    pub bar_headroom: f32,
    pub bar_fill: String,
    pub bar_outline: String,
    pub bar_outline_width: f32,
    pub bar_label_color: String,

    pub spark_padding: f32,
    pub spark_color: String,
    pub spark_width: f32,

    pub hero_color: String,
    pub hero_width: f32,
    pub glow_color: String,
    pub glow_width: f32,
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self {
            line_padding: 32.0,
            domain_margin: 6.0,
            gradient_top: "#9b5cff24".to_string(),
            gradient_bottom: "#06b6d405".to_string(),
            line_color: "#06f2f3".to_string(),
            line_width: 2.6,
            marker_radius: 3.0,
            marker_color: "#ffffff".to_string(),
            label_color: "#ffffff1f".to_string(),
            font_size: 11.0,

            bar_padding: 32.0,
            bar_gap: 12.0,
            bar_headroom: 6.0,
            bar_fill: "#9b5cff1f".to_string(),
            bar_outline: "#06f2f3".to_string(),
            bar_outline_width: 2.0,
            bar_label_color: "#dfe9ff".to_string(),

            spark_padding: 6.0,
            spark_color: "#ff66cc".to_string(),
            spark_width: 1.8,

            hero_color: "#06f2f3".to_string(),
            hero_width: 2.2,
            glow_color: "#ff66cc14".to_string(),
            glow_width: 6.0,
        }
    }
}

impl StyleConfig {
    /// Resolve colors into a [`ChartStyle`].
    ///
    /// # Errors
    ///
    /// [`Error::InvalidColor`] for a malformed hex string.
    pub fn resolve(&self) -> Result<ChartStyle> {
        let line = LineStyle {
            padding: self.line_padding,
            domain_margin: self.domain_margin,
            gradient_top: Rgba::from_hex(&self.gradient_top)?,
            gradient_bottom: Rgba::from_hex(&self.gradient_bottom)?,
            stroke: Stroke::new(Rgba::from_hex(&self.line_color)?, self.line_width),
            marker_radius: self.marker_radius,
            marker_color: Rgba::from_hex(&self.marker_color)?,
            label: TextStyle::new(Rgba::from_hex(&self.label_color)?, self.font_size),
            ..LineStyle::default()
        };
        let bar = BarStyle {
            padding: self.bar_padding,
            gap: self.bar_gap,
            headroom: self.bar_headroom,
            fill: Rgba::from_hex(&self.bar_fill)?,
            outline: Stroke::new(Rgba::from_hex(&self.bar_outline)?, self.bar_outline_width),
            label: TextStyle::new(Rgba::from_hex(&self.bar_label_color)?, self.font_size),
            ..BarStyle::default()
        };
        let spark = SparkStyle {
            padding: self.spark_padding,
            stroke: Stroke::new(Rgba::from_hex(&self.spark_color)?, self.spark_width),
        };
        let hero = HeroStyle {
            stroke: Stroke::new(Rgba::from_hex(&self.hero_color)?, self.hero_width),
            glow: Stroke::new(Rgba::from_hex(&self.glow_color)?, self.glow_width),
        };
        Ok(ChartStyle { line, bar, spark, hero })
    }
}

/// Top-level dashboard configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardConfig {
    /// Refresh interval in milliseconds.
    #[serde(default = "default_refresh_ms")]
    pub refresh_ms: u64,

    /// Random seed; `None` seeds from the operating system.
    #[serde(default)]
    pub seed: Option<u64>,

    /// Surface names and sizes.
    #[serde(default)]
    pub surfaces: SurfacesConfig,

    /// Data generation.
    #[serde(default)]
    pub data: DataConfig,

    /// Chart styling.
    #[serde(default)]
    pub style: StyleConfig,
}

fn default_refresh_ms() -> u64 {
    4200
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            refresh_ms: default_refresh_ms(),
            seed: None,
            surfaces: SurfacesConfig::default(),
            data: DataConfig::default(),
            style: StyleConfig::default(),
        }
    }
}

impl DashboardConfig {
    /// Loads and validates configuration from a YAML file.
    ///
    /// # Errors
    ///
    /// [`Error::ConfigNotFound`] if the file cannot be read, otherwise the
    /// errors of [`DashboardConfig::parse`].
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        let content = std::fs::read_to_string(path)
            .map_err(|_| Error::ConfigNotFound(path.display().to_string()))?;

        Self::parse(&content)
    }

    /// Parses and validates configuration from a YAML string.
    ///
    /// # Errors
    ///
    /// [`Error::ConfigParse`] with the offending line, or
    /// [`Error::ConfigInvalid`] from [`DashboardConfig::validate`].
    pub fn parse(yaml: &str) -> Result<Self> {
        let config: Self = serde_yaml_ng::from_str(yaml).map_err(|e| {
            let line = e.location().map_or(0, |l| l.line());
            Error::ConfigParse { line, message: e.to_string() }
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Loads configuration with fallback to defaults.
    #[must_use]
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        Self::load(path).unwrap_or_default()
    }

    /// Serialize back to YAML.
    ///
    /// # Errors
    ///
    /// [`Error::ConfigParse`] if serialization fails.
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml_ng::to_string(self).map_err(|e| Error::ConfigParse { line: 0, message: e.to_string() })
    }

    /// Returns the refresh interval as a Duration.
    #[must_use]
    pub fn refresh_interval(&self) -> Duration {
        Duration::from_millis(self.refresh_ms)
    }

    /// Resolved chart styling.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidColor`] for a malformed color.
    pub fn style(&self) -> Result<ChartStyle> {
        self.style.resolve()
    }

    /// Check values serde cannot.
    ///
    /// # Errors
    ///
    /// [`Error::ConfigInvalid`] naming the first bad key.
    pub fn validate(&self) -> Result<()> {
        if self.refresh_ms == 0 {
            return Err(invalid("refresh_ms", "must be greater than zero"));
        }
        if self.data.line_samples < 2 {
            return Err(invalid("data.line_samples", "need at least 2 samples"));
        }
        if self.data.spark_samples < 2 {
            return Err(invalid("data.spark_samples", "need at least 2 samples"));
        }
        if self.data.hero_points < 2 {
            return Err(invalid("data.hero_points", "need at least 2 points"));
        }

        let mut names = HashSet::new();
        for spec in self.surfaces.all() {
            if spec.name.is_empty() {
                return Err(invalid("surfaces", "surface name must not be empty"));
            }
            if spec.width == 0 || spec.height == 0 {
                return Err(invalid(&spec.name, "width and height must be non-zero"));
            }
            if !names.insert(spec.name.as_str()) {
                return Err(invalid(&spec.name, "surface name used twice"));
            }
        }

        self.style.resolve().map(|_| ())
    }
}

fn invalid(key: &str, message: &str) -> Error {
    Error::ConfigInvalid { key: key.to_string(), message: message.to_string() }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default() {
        let config = DashboardConfig::default();
        assert_eq!(config.refresh_ms, 4200);
        assert_eq!(config.surfaces.line.name, "lineChart");
        assert_eq!(config.surfaces.hero.name, "hero-spark");
        assert_eq!(config.data.line_samples, 30);
        assert_eq!(config.data.labels.len(), config.data.importance.len());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_default_style_matches_chart_defaults() {
        let style = DashboardConfig::default().style().unwrap();
        assert_eq!(style, ChartStyle::default());
    }

    #[test]
    fn test_config_parse_empty() {
        let config = DashboardConfig::parse("{}").unwrap();
        assert_eq!(config, DashboardConfig::default());
    }

    #[test]
    fn test_config_parse_partial() {
        let yaml = r##"
refresh_ms: 1000
seed: 7
surfaces:
  spark:
    name: spark
    width: 200
    height: 40
data:
  line_samples: 12
style:
  spark_color: "#00ff00"
"##;
        let config = DashboardConfig::parse(yaml).unwrap();
        assert_eq!(config.refresh_interval(), Duration::from_millis(1000));
        assert_eq!(config.seed, Some(7));
        assert_eq!(config.surfaces.spark.width, 200);
        assert_eq!(config.surfaces.line.name, "lineChart");
        assert_eq!(config.data.line_samples, 12);
        assert_eq!(config.data.spark_samples, 64);
        assert_eq!(config.style().unwrap().spark.stroke.color, Rgba::rgb(0, 255, 0));
    }

    #[test]
    fn test_config_roundtrip() {
        let config = DashboardConfig::default();
        let yaml = config.to_yaml().unwrap();
        assert_eq!(DashboardConfig::parse(&yaml).unwrap(), config);
    }

    #[test]
    fn test_config_parse_error_includes_line() {
        let yaml = "refresh_ms: 1000\ndata:\n  line_samples: lots\n";
        match DashboardConfig::parse(yaml) {
            Err(Error::ConfigParse { line, .. }) => assert_eq!(line, 3),
            other => panic!("expected ConfigParse, got {other:?}"),
        }
    }

    #[test]
    fn test_config_rejects_bad_values() {
        let err = DashboardConfig::parse("refresh_ms: 0").unwrap_err();
        assert!(matches!(err, Error::ConfigInvalid { ref key, .. } if key == "refresh_ms"));

        let err = DashboardConfig::parse("data:\n  spark_samples: 1\n").unwrap_err();
        assert!(matches!(err, Error::ConfigInvalid { .. }));

        let yaml = "surfaces:\n  bar:\n    name: lineChart\n    width: 10\n    height: 10\n";
        assert!(DashboardConfig::parse(yaml).is_err());
    }

    #[test]
    fn test_config_rejects_bad_color() {
        let err = DashboardConfig::parse("style:\n  bar_fill: purple\n").unwrap_err();
        assert!(matches!(err, Error::InvalidColor(_)));
    }

    #[test]
    fn test_config_load_and_fallback() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("dash.yaml");
        std::fs::write(&path, "refresh_ms: 500\n").unwrap();

        assert_eq!(DashboardConfig::load(&path).unwrap().refresh_ms, 500);
        assert!(matches!(
            DashboardConfig::load(dir.path().join("missing.yaml")),
            Err(Error::ConfigNotFound(_))
        ));
        assert_eq!(DashboardConfig::load_or_default(dir.path().join("missing.yaml")).refresh_ms, 4200);
    }
}
