//! Errors reported while fitting

use thiserror::Error;

use crate::curve_list::CurveList;

/// Errors that can occur while fitting curves to a single subpath.
///
/// Point indices count from the start of the subpath.
#[derive(Error, Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum FitError {
    /// Coincident points left a zero length vector where a direction or a chord length is needed
    #[error("degenerate input at point {index}: {reason}")]
    DegenerateInput {
        /// Point at which the problem was noticed
        index: usize,
        /// Short description of the degeneracy
        reason: &'static str,
    },

    /// The linear system of a four point fit has no unique solution
    #[error("singular four point fit at point {index}")]
    SingularFit {
        /// First point of the fitted window
        index: usize,
    },

    /// Too few points for the requested operation
    #[error("expected at least {needed} points, got {got}")]
    InsufficientPoints {
        /// Minimum number of points
        needed: usize,
        /// Number of points supplied
        got: usize,
    },

    /// The path data could not be parsed
    #[error("invalid path data: {0}")]
    PathData(String),
}

impl FitError {
    /// Shifts the point index by `by`, turning an index relative to a window into one
    /// relative to the window's sequence.
    pub(crate) fn offset(self, by: usize) -> Self {
        match self {
            FitError::DegenerateInput { index, reason } => FitError::DegenerateInput {
                index: index + by,
                reason,
            },
            FitError::SingularFit { index } => FitError::SingularFit { index: index + by },
            other => other,
        }
    }
}

/// A [`FitError`] raised while fitting one subpath of a compound path.
#[derive(Error, Debug, Clone)]
#[error("subpath {subpath}: {error}")]
pub struct PathFitError {
    /// Index of the failing subpath
    pub subpath: usize,

    /// What went wrong
    #[source]
    pub error: FitError,

    /// Segments emitted before the failure.
    ///
    /// Only meant for diagnostics, this is not a valid fit of the subpath.
    pub partial: Option<CurveList>,
}
