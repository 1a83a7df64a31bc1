//! Chord length parameterization of a polyline.

use crate::error::FitError;
use crate::vector::Point;

/// Assigns every point a parameter in `[0, 1]` proportional to the distance travelled
/// along the polyline up to it.
///
/// The first parameter is always `0.0` and the last one always exactly `1.0`.
/// Fails if the polyline has no length at all.
pub fn chord_parameters(points: &[Point]) -> Result<Vec<f64>, FitError> {
    let mut cumulative = Vec::with_capacity(points.len());
    let mut travelled = 0.0;
    cumulative.push(travelled);
    for pair in points.windows(2) {
        travelled += (pair[1] - pair[0]).norm();
        cumulative.push(travelled);
    }

    if travelled == 0.0 {
        return Err(FitError::DegenerateInput {
            index: 0,
            reason: "all points coincide",
        });
    }

    let mut parameters: Vec<f64> = cumulative.into_iter().map(|d| d / travelled).collect();
    if let Some(last) = parameters.last_mut() {
        *last = 1.0;
    }
    Ok(parameters)
}
