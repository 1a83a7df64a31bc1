//! Closed form cubics passing exactly through three or four points.

use nalgebra::{Matrix2, Matrix2x3};

use crate::chords::chord_parameters;
use crate::error::FitError;
use crate::nbezier::{BezierCurve, CubicCurve};
use crate::vector::Point;

/// Determinants below this are treated as zero by [`through_four_with`]
pub const SINGULAR_EPSILON: f64 = 1e-12;

/// Cubic through `a`, `b` and `c`, passing `b` at its chord length parameter.
///
/// The quadratic through the three points is found first and then raised to a cubic,
/// so the result has the shape of a parabola.
pub fn through_three(a: Point, b: Point, c: Point) -> Result<CubicCurve, FitError> {
    let t = chord_parameters(&[a, b, c])?[1];
    if t <= 0.0 {
        return Err(FitError::DegenerateInput {
            index: 1,
            reason: "middle point coincides with the start",
        });
    }
    if t >= 1.0 {
        return Err(FitError::DegenerateInput {
            index: 2,
            reason: "middle point coincides with the end",
        });
    }

    let s = 1.0 - t;
    let control = (b - a * (s * s) - c * (t * t)) / (2.0 * t * s);
    let quadratic = BezierCurve(Matrix2x3::from_columns(&[a, control, c]));
    Ok(quadratic.raise_degree())
}

/// Cubic through four points, passing the inner two at their chord length parameters.
pub fn through_four(points: [Point; 4]) -> Result<CubicCurve, FitError> {
    let parameters = chord_parameters(&points)?;
    through_four_with(points, parameters[1], parameters[2])
}

/// Cubic from `points[0]` to `points[3]` passing `points[1]` at `lambda` and `points[2]` at `mu`.
///
/// Solves the 2x2 linear system for the two handles.
pub fn through_four_with(
    points: [Point; 4],
    lambda: f64,
    mu: f64,
) -> Result<CubicCurve, FitError> {
    let [p0, p1, p2, p3] = points;
    let (l, m) = (1.0 - lambda, 1.0 - mu);

    let system = Matrix2::new(
        3.0 * l * l * lambda,
        3.0 * l * lambda * lambda,
        3.0 * m * m * mu,
        3.0 * m * mu * mu,
    );
    if system.determinant().abs() < SINGULAR_EPSILON {
        return Err(FitError::SingularFit { index: 0 });
    }
    let inverse = system
        .try_inverse()
        .ok_or(FitError::SingularFit { index: 0 })?;

    let x = p1 - p0 * (l * l * l) - p3 * (lambda * lambda * lambda);
    let y = p2 - p0 * (m * m * m) - p3 * (mu * mu * mu);
    let handles = inverse * Matrix2::from_rows(&[x.transpose(), y.transpose()]);

    Ok(CubicCurve::new(
        p0,
        handles.row(0).transpose(),
        handles.row(1).transpose(),
        p3,
    ))
}
