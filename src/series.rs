//! Fixed-length sample series.
//!
//! A [`Series`] never changes length after construction: [`Series::roll`]
//! discards the oldest sample for every new one, and
//! [`Series::regenerate`] rewrites samples in place.
//!
//! # Example
//!
//! ```
//! use trueno_dash::series::Series;
//!
//! let mut series = Series::from_samples(vec![70.0, 75.0, 80.0]);
//! assert_eq!(series.roll(72.0), Some(70.0));
//! assert_eq!(series.as_slice(), &[75.0, 80.0, 72.0]);
//! ```

use std::collections::VecDeque;

use trueno::Vector;

/// An ordered, fixed-length sequence of samples.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Series {
    /// VecDeque for O(1) drop-oldest/append-newest.
    data: VecDeque<f32>,
}

impl Series {
    /// Create a series from existing samples.
    #[must_use]
    pub fn from_samples(samples: Vec<f32>) -> Self {
        Self { data: VecDeque::from(samples) }
    }

    /// Create a series of `len` samples produced by `sample(index)`.
    #[must_use]
    pub fn generate(len: usize, sample: impl FnMut(usize) -> f32) -> Self {
        Self { data: (0..len).map(sample).collect() }
    }

    /// Drop the oldest sample and append `value`, keeping the length.
    ///
    /// Returns the dropped sample. An empty series stays empty.
    pub fn roll(&mut self, value: f32) -> Option<f32> {
        let dropped = self.data.pop_front()?;
        self.data.push_back(value);
        Some(dropped)
    }

    /// Replace every sample with `sample(index)`.
    pub fn regenerate(&mut self, mut sample: impl FnMut(usize) -> f32) {
        for (i, slot) in self.data.iter_mut().enumerate() {
            *slot = sample(i);
        }
    }

    /// Number of samples.
    #[must_use]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// True if there are no samples.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Oldest sample.
    #[must_use]
    pub fn first(&self) -> Option<f32> {
        self.data.front().copied()
    }

    /// Newest sample.
    #[must_use]
    pub fn last(&self) -> Option<f32> {
        self.data.back().copied()
    }

    /// Samples from oldest to newest.
    pub fn iter(&self) -> impl Iterator<Item = f32> + '_ {
        self.data.iter().copied()
    }

    /// Samples as one slice; rearranges storage if it has wrapped.
    pub fn as_slice(&mut self) -> &[f32] {
        self.data.make_contiguous()
    }

    /// Copy the samples out.
    #[must_use]
    pub fn to_vec(&self) -> Vec<f32> {
        self.data.iter().copied().collect()
    }
}

/// Minimum and maximum of `values`, ignoring non-finite samples.
///
/// Returns `None` when there is no finite sample.
#[must_use]
pub fn extent(values: &[f32]) -> Option<(f32, f32)> {
    if values.is_empty() {
        return None;
    }

    if values.iter().all(|v| v.is_finite()) {
        let vector = Vector::from_vec(values.to_vec());
        let min = vector.min().unwrap_or(f32::NAN);
        let max = vector.max().unwrap_or(f32::NAN);
        if min.is_finite() && max.is_finite() {
            return Some((min, max));
        }
    }

    values
        .iter()
        .copied()
        .filter(|v| v.is_finite())
        .fold(None, |acc, v| match acc {
            None => Some((v, v)),
            Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
        })
}

/// Round to the nearest integer, ties toward positive infinity.
#[must_use]
pub fn round_half_up(value: f32) -> f32 {
    (value + 0.5).floor()
}


// ============================================================================
// Property-based tests with proptest
// ============================================================================
