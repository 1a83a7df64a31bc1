//! Fitting a single cubic to five or more points.
//!
//! An initial guess averages exact four point fits over pairs of points mirrored around the
//! middle of the window. The handles are then repeatedly pushed towards the points the curve
//! misses, measured by projecting those points onto the curve.

use smallvec::SmallVec;

use crate::chords::chord_parameters;
use crate::config::FitConfig;
use crate::error::FitError;
use crate::interpolate::through_four_with;
use crate::nbezier::CubicCurve;
use crate::vector::Point;

/// Result of [`stress`]
#[derive(Clone, Debug, PartialEq)]
pub struct StressFit {
    /// The fitted curve
    pub curve: CubicCurve,

    /// Distance of every input point to `curve`, in input order
    pub errors: Vec<f64>,
}

impl StressFit {
    /// Largest distance of any input point to the curve
    pub fn max_error(&self) -> f64 {
        self.errors.iter().copied().fold(0.0, f64::max)
    }
}

/// Fits one cubic through the ends of `string` following its interior points as closely
/// as the refinement allows.
pub fn stress(string: &[Point], config: &FitConfig) -> Result<StressFit, FitError> {
    let n = string.len();
    if n < 5 {
        return Err(FitError::InsufficientPoints { needed: 5, got: n });
    }
    let last = n - 1;
    let middle = n / 2;
    let callipers = chord_parameters(string)?;

    let mut seeds: SmallVec<[(Point, Point); 8]> = SmallVec::with_capacity(middle - 1);
    for i in 1..middle {
        let (lambda, mu) = (callipers[i], callipers[last - i]);
        if lambda <= 0.0 {
            return Err(FitError::DegenerateInput {
                index: i,
                reason: "zero length chord to the start",
            });
        }
        if mu >= 1.0 || lambda >= mu {
            return Err(FitError::DegenerateInput {
                index: last - i,
                reason: "zero length chord",
            });
        }
        let seed = through_four_with(
            [string[0], string[i], string[last - i], string[last]],
            lambda,
            mu,
        )?;
        seeds.push((seed.first_handle(), seed.second_handle()));
    }

    let count = seeds.len() as f64;
    let (first, second) = seeds
        .iter()
        .fold((Point::zeros(), Point::zeros()), |(a, b), (c1, c2)| (a + c1, b + c2));
    let mut curve = CubicCurve::new(string[0], first / count, second / count, string[last]);

    let projector = &config.projector;
    for _ in 0..config.stress_passes {
        for j in (1..middle).rev() {
            let delta1 = projector.project(&curve, &string[j]);
            let delta2 = projector.project(&curve, &string[last - j]);
            curve.shift_handles(delta1 * config.stress_nudge, delta2 * config.stress_nudge);
        }
    }

    let errors = string
        .iter()
        .map(|point| projector.distance(&curve, point))
        .collect();
    Ok(StressFit { curve, errors })
}
