use crate::math::curve::{Curve, CurveType};
use crate::math::curve_evaluator::CurveEvaluator;

/// An ordered collection of curves evaluated in unison.
///
/// Member curves share one interpolation type once [`set_type`] has been
/// called; until then adopted curves keep whatever type they were built with.
///
/// [`set_type`]: CurveSet::set_type
#[derive(Debug, Clone)]
pub struct CurveSet {
    curves: Vec<Curve>,
    kind: CurveType,
}

impl CurveSet {
    /// Creates a set of `count` empty curves.
    #[must_use]
    pub fn from_curve_count(count: usize) -> Self {
        Self {
            curves: (0..count).map(|_| Curve::new()).collect(),
            kind: CurveType::default(),
        }
    }

    /// Creates a set with one curve per flat `[t0, v0, t1, v1, ...]` slice.
    #[must_use]
    pub fn from_key_arrays(keys: &[&[f32]]) -> Self {
        Self {
            curves: keys.iter().map(|data| Curve::from_flat(data)).collect(),
            kind: CurveType::default(),
        }
    }

    /// Adopts existing curves without touching their interpolation types.
    #[must_use]
    pub fn from_curves(curves: Vec<Curve>) -> Self {
        Self {
            curves,
            kind: CurveType::default(),
        }
    }

    /// Returns the curve at `index`.
    #[must_use]
    pub fn get(&self, index: usize) -> &Curve {
        &self.curves[index]
    }

    /// Returns the curve at `index` for direct mutation.
    pub fn get_mut(&mut self, index: usize) -> &mut Curve {
        &mut self.curves[index]
    }

    /// The number of curves in the set.
    #[must_use]
    pub fn len(&self) -> usize {
        self.curves.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.curves.is_empty()
    }

    /// The interpolation type shared by the set.
    #[must_use]
    pub fn curve_type(&self) -> CurveType {
        self.kind
    }

    /// Sets the shared interpolation type, propagating it to every curve.
    pub fn set_type(&mut self, kind: CurveType) {
        self.kind = kind;
        for curve in &mut self.curves {
            curve.interpolation = kind;
        }
    }

    /// Evaluates every curve at `time` into a fresh buffer.
    #[must_use]
    pub fn value(&self, time: f32) -> Vec<f32> {
        self.curves.iter().map(|curve| curve.value(time)).collect()
    }

    /// Evaluates every curve at `time`, writing into `result`.
    ///
    /// `result` is resized to [`len`](CurveSet::len) and overwritten.
    pub fn value_into(&self, time: f32, result: &mut Vec<f32>) {
        result.clear();
        result.extend(self.curves.iter().map(|curve| curve.value(time)));
    }

    /// Samples every curve at `precision` evenly spaced points over `[0, 1]`.
    ///
    /// `precision` is clamped to a minimum of 2. The returned table is laid
    /// out sample-major, curve-minor: entry `[i * len() + c]` holds curve `c`
    /// sampled at `i / (precision - 1)`.
    #[must_use]
    pub fn quantize(&self, precision: usize) -> Vec<f32> {
        let precision = precision.max(2);
        let num_curves = self.curves.len();
        let step = 1.0 / (precision - 1) as f32;

        let mut values = vec![0.0_f32; precision * num_curves];
        for (c, curve) in self.curves.iter().enumerate() {
            let mut evaluator = CurveEvaluator::new(curve);
            for i in 0..precision {
                values[i * num_curves + c] = evaluator.evaluate(step * i as f32);
            }
        }

        values
    }

    /// As [`quantize`](CurveSet::quantize), then clamps every sample into
    /// `[min, max]` in place.
    #[must_use]
    pub fn quantize_clamped(&self, precision: usize, min: f32, max: f32) -> Vec<f32> {
        let mut result = self.quantize(precision);
        for value in &mut result {
            *value = value.clamp(min, max);
        }
        result
    }
}

impl Default for CurveSet {
    /// A set holding a single empty curve.
    fn default() -> Self {
        Self::from_curve_count(1)
    }
}
