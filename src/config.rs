//! Tuning parameters of the fitter

use crate::project::Projector;

/// All fitting parameters in one struct.
///
/// The defaults are the values the algorithm is tuned for; changing them changes the output.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FitConfig {
    /// A window breaks at its penultimate point when the cosine of the angle there is at
    /// least this. `0.5` breaks at angles of 60 degrees or less.
    pub cusp_cosine: f64,

    /// A stress fitted window breaks when any point is further from the curve than the
    /// window's shortest chord divided by this.
    pub error_divisor: f64,

    /// Joints whose handles have a cosine of at most this are straightened.
    /// `-0.94` is roughly 160 degrees.
    pub smooth_cosine: f64,

    /// Number of refinement passes of the stress fitter
    pub stress_passes: usize,

    /// How far the stress fitter moves a handle, relative to the projection offset
    pub stress_nudge: f64,

    /// Closest point search used by the stress fitter
    pub projector: Projector,
}

impl Default for FitConfig {
    fn default() -> Self {
        FitConfig {
            cusp_cosine: 0.5,
            error_divisor: 3.0,
            smooth_cosine: -0.94,
            stress_passes: 5,
            stress_nudge: 2.5,
            projector: Projector::default(),
        }
    }
}
