//! Projection of a point onto a cubic curve.
//!
//! A coarse lookup table picks the closest sample, then a shrinking local search refines it.
//! See <https://pomax.github.io/bezierinfo/#projections>.

use crate::nbezier::CubicCurve;
use crate::vector::Point;

/// Parameters of the closest point search
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Projector {
    /// Number of intervals in the initial lookup (`samples + 1` points are evaluated).
    /// Zero is treated as one.
    pub samples: usize,

    /// The local search stops once its half width is at most this.
    /// Values below `f64::EPSILON` are raised to it.
    pub tolerance: f64,
}

impl Default for Projector {
    fn default() -> Self {
        Projector {
            samples: 200,
            tolerance: 1e-5,
        }
    }
}

impl Projector {
    /// Parameter of the point on `curve` closest to `point`
    pub fn nearest(&self, curve: &CubicCurve, point: &Point) -> f64 {
        let distance = |t: f64| (curve.evaluate(t) - point).norm();
        let intervals = self.samples.max(1);
        let samples = intervals as f64;
        let tolerance = self.tolerance.max(f64::EPSILON);

        let mut t = 0.0;
        let mut min = f64::INFINITY;
        for i in 0..=intervals {
            let s = i as f64 / samples;
            let d = distance(s);
            if d < min {
                min = d;
                t = s;
            }
        }

        let mut width = 1.0 / samples;
        while width > tolerance {
            let below = (t - width).max(0.0);
            let above = (t + width).min(1.0);
            // Never walk past the ends
            let left = if t == 0.0 { min + 1.0 } else { distance(below) };
            let right = if t == 1.0 { min + 1.0 } else { distance(above) };

            if left < min || right < min {
                min = left.min(right);
                t = if left < right { below } else { above };
            } else {
                width /= 2.0;
            }
        }
        t
    }

    /// Vector from the closest point on `curve` to `point`
    pub fn project(&self, curve: &CubicCurve, point: &Point) -> Point {
        point - curve.evaluate(self.nearest(curve, point))
    }

    /// Distance from `point` to `curve`
    pub fn distance(&self, curve: &CubicCurve, point: &Point) -> f64 {
        self.project(curve, point).norm()
    }
}
