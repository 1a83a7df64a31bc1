#![warn(missing_docs)]
#![doc = include_str!("../README.md")]

pub mod chords;
pub mod config;
pub mod curve_list;
pub mod draw;
pub mod error;
pub mod interpolate;
pub mod nbezier;
pub mod path;
pub mod project;
pub mod segment;
pub mod smooth;
pub mod stress;
pub mod vector;

pub use crate::config::FitConfig;
pub use crate::curve_list::CurveList;
pub use crate::error::{FitError, PathFitError};
pub use crate::nbezier::{BezierCurve, CubicCurve};
pub use crate::path::PointSequence;
pub use crate::segment::{segment, Segmenter};
pub use crate::smooth::smooth_corners;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Fits a chain of cubics to `sequence` and straightens its nearly smooth joints
pub fn fit(sequence: &PointSequence, config: &FitConfig) -> Result<CurveList, FitError> {
    let mut curves = segment(sequence, config)?.curves;
    smooth_corners(&mut curves, config)?;
    Ok(curves)
}

/// Fits every subpath of a compound path, keeping their order.
///
/// The first failing subpath aborts the whole fit. With the `parallel` feature the
/// subpaths are fitted on the rayon thread pool.
pub fn fit_subpaths(
    subpaths: &[PointSequence],
    config: &FitConfig,
) -> Result<Vec<CurveList>, PathFitError> {
    #[cfg(feature = "parallel")]
    let subpaths = subpaths.par_iter();
    #[cfg(not(feature = "parallel"))]
    let subpaths = subpaths.iter();

    subpaths
        .enumerate()
        .map(|(index, sequence)| fit_subpath(index, sequence, config))
        .collect()
}

fn fit_subpath(
    index: usize,
    sequence: &PointSequence,
    config: &FitConfig,
) -> Result<CurveList, PathFitError> {
    let fail = |error, partial| PathFitError {
        subpath: index,
        error,
        partial,
    };

    let mut segmenter = Segmenter::new(sequence, config).map_err(|e| fail(e, None))?;
    let mut curves = match segmenter.run() {
        Ok(segmentation) => segmentation.curves,
        Err(e) => return Err(fail(e, segmenter.partial().cloned())),
    };
    smooth_corners(&mut curves, config).map_err(|e| fail(e, Some(curves.clone())))?;
    log::debug!(
        "subpath {} fitted with {} segments",
        index,
        curves.segment_count()
    );
    Ok(curves)
}
