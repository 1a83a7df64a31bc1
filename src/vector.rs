//! Points and the few vector operations the fitter needs on top of [`nalgebra::Vector2`].
//!
//! Scaling a vector is nalgebra's `*` with a scalar.
//! Rotations are spelled out as [`VectorExt::rotate_and_scale`] (complex multiplication)
//! and [`VectorExt::rotate`] instead of overloading `*` between two vectors.

use nalgebra::Vector2;
use num::Complex;

/// A point (or vector) in the plane
pub type Point = Vector2<f64>;

/// Helper methods on 2D vectors
pub trait VectorExt {
    /// Angle of the vector against the positive x axis in `(-π, π]`
    fn direction(&self) -> f64;

    /// Point at `t` on the straight line from `self` to `other`
    fn slide(&self, other: &Self, t: f64) -> Self;

    /// Multiplies both vectors as complex numbers.
    ///
    /// The result is `self` rotated by `other`'s direction and scaled by `other`'s length.
    fn rotate_and_scale(&self, other: &Self) -> Self;

    /// Rotates counter clockwise by `theta` radians
    fn rotate(&self, theta: f64) -> Self;

    /// Cosine of the angle between `self` and `other`.
    ///
    /// Returns `None` if either vector has zero length.
    fn cosine(&self, other: &Self) -> Option<f64>;
}

impl VectorExt for Point {
    fn direction(&self) -> f64 {
        self.y.atan2(self.x)
    }

    fn slide(&self, other: &Self, t: f64) -> Self {
        self + (other - self) * t
    }

    fn rotate_and_scale(&self, other: &Self) -> Self {
        let product = Complex::new(self.x, self.y) * Complex::new(other.x, other.y);
        Point::new(product.re, product.im)
    }

    fn rotate(&self, theta: f64) -> Self {
        self.rotate_and_scale(&Point::new(theta.cos(), theta.sin()))
    }

    fn cosine(&self, other: &Self) -> Option<f64> {
        let lengths = self.norm() * other.norm();
        if lengths == 0.0 {
            None
        } else {
            Some(self.dot(other) / lengths)
        }
    }
}
