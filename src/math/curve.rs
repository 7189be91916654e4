use std::str::FromStr;

use crate::errors::WispError;
use crate::math::curve_evaluator::CurveEvaluator;

/// Interpolation scheme applied between two keyframes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CurveType {
    /// Linear interpolation between the surrounding keys.
    Linear,
    /// Linear interpolation with smoothstep easing of the fraction.
    #[default]
    SmoothStep,
    /// Cardinal spline with a fixed scale of 0.5.
    CatmullRom,
    /// Cardinal spline scaled by the curve's `tension`.
    Cardinal,
}

impl FromStr for CurveType {
    type Err = WispError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "linear" => Ok(CurveType::Linear),
            "smoothstep" => Ok(CurveType::SmoothStep),
            "catmull" => Ok(CurveType::CatmullRom),
            "cardinal" => Ok(CurveType::Cardinal),
            other => Err(WispError::UnknownCurveType(other.to_string())),
        }
    }
}

/// A keyframe curve over `(time, value)` pairs.
///
/// Keys are kept sorted by time. Evaluation outside the key range clamps to
/// the end values; an empty curve evaluates to `0.0`.
#[derive(Debug, Clone)]
pub struct Curve {
    pub(crate) times: Vec<f32>,
    pub(crate) values: Vec<f32>,
    pub interpolation: CurveType,
    /// Tangent scale for [`CurveType::Cardinal`]. Ignored by the other types.
    pub tension: f32,
}

impl Curve {
    /// Creates an empty curve.
    #[must_use]
    pub fn new() -> Self {
        Self {
            times: Vec::new(),
            values: Vec::new(),
            interpolation: CurveType::default(),
            tension: 0.5,
        }
    }

    /// Creates a curve from a flat `[t0, v0, t1, v1, ...]` key slice.
    ///
    /// A trailing odd element is ignored.
    #[must_use]
    pub fn from_flat(data: &[f32]) -> Self {
        let mut curve = Self::new();
        for pair in data.chunks_exact(2) {
            curve.times.push(pair[0]);
            curve.values.push(pair[1]);
        }
        curve.sort();
        curve
    }

    /// Adds a key, keeping the keys sorted by time.
    pub fn add(&mut self, time: f32, value: f32) {
        let index = self.times.partition_point(|&t| t <= time);
        self.times.insert(index, time);
        self.values.insert(index, value);
    }

    /// Returns the `(time, value)` pair at `index`.
    #[must_use]
    pub fn get(&self, index: usize) -> (f32, f32) {
        (self.times[index], self.values[index])
    }

    /// The number of keys.
    #[must_use]
    pub fn len(&self) -> usize {
        self.times.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.times.is_empty()
    }

    /// Restores time ordering after direct key mutation.
    pub fn sort(&mut self) {
        let mut keys: Vec<(f32, f32)> = self
            .times
            .iter()
            .copied()
            .zip(self.values.iter().copied())
            .collect();
        keys.sort_by(|a, b| a.0.total_cmp(&b.0));

        self.times = keys.iter().map(|key| key.0).collect();
        self.values = keys.iter().map(|key| key.1).collect();
    }

    /// Samples the curve at `time`.
    #[must_use]
    pub fn value(&self, time: f32) -> f32 {
        CurveEvaluator::new(self).evaluate(time)
    }

    /// Samples the curve at `precision` evenly spaced points over `[0, 1]`.
    ///
    /// `precision` is clamped to a minimum of 2.
    #[must_use]
    pub fn quantize(&self, precision: usize) -> Vec<f32> {
        let precision = precision.max(2);
        let step = 1.0 / (precision - 1) as f32;

        let mut evaluator = CurveEvaluator::new(self);
        (0..precision)
            .map(|i| evaluator.evaluate(step * i as f32))
            .collect()
    }
}

impl Default for Curve {
    fn default() -> Self {
        Self::new()
    }
}
