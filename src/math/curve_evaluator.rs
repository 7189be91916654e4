use crate::math::curve::{Curve, CurveType};

// Window for the cursor's local scan before falling back to binary search.
const SCAN_WINDOW: usize = 3;

/// Stateful sampler over one [`Curve`].
///
/// Keeps a cursor at the segment of the most recent sample so that
/// monotonically advancing sample times resolve in O(1). Scrubbing or large
/// jumps fall back to a global binary search.
#[derive(Debug)]
pub struct CurveEvaluator<'a> {
    curve: &'a Curve,
    cursor: usize,
}

impl<'a> CurveEvaluator<'a> {
    #[must_use]
    pub fn new(curve: &'a Curve) -> Self {
        Self { curve, cursor: 0 }
    }

    /// Samples the curve at `time`.
    ///
    /// Times outside the key range clamp to the end values. An empty curve
    /// evaluates to `0.0`; a single key is constant.
    pub fn evaluate(&mut self, time: f32) -> f32 {
        let times = &self.curve.times;
        let len = times.len();

        if len == 0 {
            return 0.0;
        }
        if len == 1 {
            return self.curve.values[0];
        }

        if time <= times[0] {
            self.cursor = 0;
            return self.curve.values[0];
        }
        if time >= times[len - 1] {
            self.cursor = len - 2;
            return self.curve.values[len - 1];
        }

        let left = self.find_segment(time);
        self.cursor = left;
        self.interpolate(left, time)
    }

    /// Finds the left key index of the segment containing `time`.
    ///
    /// Precondition: `times[0] < time < times[len - 1]`.
    fn find_segment(&self, time: f32) -> usize {
        let times = &self.curve.times;
        let len = times.len();
        let start = self.cursor.min(len - 2);

        if time >= times[start] {
            // Forward playback: try a short scan from the cursor.
            let end = (start + SCAN_WINDOW).min(len - 1);
            for index in start..end {
                if time < times[index + 1] {
                    return index;
                }
            }
        } else {
            // Reverse playback: scan backward, adjacent segments first.
            let low = start.saturating_sub(SCAN_WINDOW);
            for index in (low..start).rev() {
                if time >= times[index] {
                    return index;
                }
            }
        }

        // Large jump: global binary search.
        let next = times.partition_point(|&t| t <= time);
        next.saturating_sub(1).min(len - 2)
    }

    fn interpolate(&self, left: usize, time: f32) -> f32 {
        let curve = self.curve;
        let t0 = curve.times[left];
        let t1 = curve.times[left + 1];
        let dt = t1 - t0;
        let t = if dt > 1e-6 { (time - t0) / dt } else { 0.0 };

        let v0 = curve.values[left];
        let v1 = curve.values[left + 1];

        match curve.interpolation {
            CurveType::Linear => v0 + (v1 - v0) * t,
            CurveType::SmoothStep => {
                let eased = t * t * (3.0 - 2.0 * t);
                v0 + (v1 - v0) * eased
            }
            CurveType::CatmullRom => self.hermite(left, t, 0.5),
            CurveType::Cardinal => self.hermite(left, t, curve.tension),
        }
    }

    /// Cardinal Hermite segment between keys `left` and `left + 1`.
    ///
    /// Missing neighbors past either end extrapolate the end segment
    /// linearly (mirrored endpoints).
    fn hermite(&self, left: usize, t: f32, scale: f32) -> f32 {
        let values = &self.curve.values;
        let len = values.len();

        let p1 = values[left];
        let p2 = values[left + 1];
        let p0 = if left > 0 {
            values[left - 1]
        } else {
            2.0 * p1 - p2
        };
        let p3 = if left + 2 < len {
            values[left + 2]
        } else {
            2.0 * p2 - p1
        };

        let t2 = t * t;
        let t3 = t2 * t;
        let h1 = 2.0 * t3 - 3.0 * t2 + 1.0;
        let h2 = -2.0 * t3 + 3.0 * t2;
        let h3 = t3 - 2.0 * t2 + t;
        let h4 = t3 - t2;

        let m1 = scale * (p2 - p0);
        let m2 = scale * (p3 - p1);

        h1 * p1 + h2 * p2 + h3 * m1 + h4 * m2
    }
}
