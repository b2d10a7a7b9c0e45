//! Synthetic "live-looking" data.
//!
//! Samples follow `baseline + amplitude·sin(phase/period) + U·noise` with
//! `U` uniform in `[0, 1)`: a smooth wave with bounded jitter.

use std::time::{SystemTime, UNIX_EPOCH};

use serde::{Deserialize, Serialize};

use crate::random::RandomSource;
use crate::series::{round_half_up, Series};

/// Milliseconds in one day.
pub const DAY_MS: i64 = 24 * 3600 * 1000;

/// Sinusoid-plus-noise sample generator.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Wave {
    /// Center line.
    pub baseline: f32,
    /// Sine amplitude.
    pub amplitude: f32,
    /// Phase divisor; larger is smoother.
    pub period: f32,
    /// Upper bound of the additive uniform noise.
    pub noise: f32,
    /// Round each sample to an integer.
    #[serde(default)]
    pub round: bool,
}

impl Wave {
    /// Daily model-performance curve around 70.
    pub const PERFORMANCE: Self =
        Self { baseline: 70.0, amplitude: 10.0, period: 3.0, noise: 6.0, round: true };

    /// Faster, wider sparkline wave around 40.
    pub const SPARK: Self =
        Self { baseline: 40.0, amplitude: 18.0, period: 5.0, noise: 6.0, round: false };

    /// Sample at `phase`.
    pub fn sample(&self, phase: f32, rng: &mut impl RandomSource) -> f32 {
        let period = if self.period.abs() < f32::EPSILON { 1.0 } else { self.period };
        let offset = self.amplitude * (phase / period).sin() + rng.next_f32() * self.noise;
        if self.round {
            self.baseline + round_half_up(offset)
        } else {
            self.baseline + offset
        }
    }

    /// Sample at a phase jittered by up to one index step.
    pub fn jittered(&self, index: usize, rng: &mut impl RandomSource) -> f32 {
        let phase = index as f32 + rng.next_f32();
        self.sample(phase, rng)
    }

    /// A series of `len` samples at phases `0..len`.
    pub fn series(&self, len: usize, rng: &mut impl RandomSource) -> Series {
        Series::generate(len, |i| self.sample(i as f32, rng))
    }

    /// Bounds every sample falls in: `[lo, hi]`.
    #[must_use]
    pub fn bounds(&self) -> (f32, f32) {
        let amp = self.amplitude.abs();
        let noise = self.noise.max(0.0);
        // Rounding can push a sample by half a unit either way.
        let slack = if self.round { 0.5 } else { 0.0 };
        (self.baseline - amp - slack, self.baseline + amp + noise + slack)
    }
}

/// Feature-importance magnitudes shown by the bar chart.
pub const IMPORTANCE: [f32; 10] = [12.0, 8.0, 5.0, 20.0, 6.0, 4.0, 18.0, 9.0, 11.0, 7.0];

/// Labels parallel to [`IMPORTANCE`].
#[must_use]
pub fn importance_labels() -> Vec<String> {
    ('a'..='j').map(|c| format!("feat_{c}")).collect()
}

/// `count` timestamps one day apart, the last at `now_ms`.
#[must_use]
pub fn daily_timestamps(count: usize, now_ms: i64) -> Vec<i64> {
    (0..count).map(|i| now_ms - (count - 1 - i) as i64 * DAY_MS).collect()
}

/// Milliseconds since the Unix epoch; 0 if the clock is before it.
#[must_use]
pub fn now_ms() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| i64::try_from(d.as_millis()).unwrap_or(i64::MAX))
        .unwrap_or(0)
}
