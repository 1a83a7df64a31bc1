//! Straightening of joints whose handles are nearly opposed.

use log::debug;
use std::f64::consts::PI;

use crate::config::FitConfig;
use crate::curve_list::CurveList;
use crate::error::FitError;
use crate::vector::VectorExt;

/// Rotates the two handles at every nearly straight joint so they become exactly opposed.
///
/// Both handles turn by the same angle towards each other and keep their lengths.
/// The start anchor only counts as a joint on closed chains, where its incoming handle is the
/// last handle of the chain.
pub fn smooth_corners(curves: &mut CurveList, config: &FitConfig) -> Result<(), FitError> {
    let closed = curves.is_closed();
    let points = curves.points_mut();
    // The end anchor is never a joint
    let count = points.len() - 1;

    for joint in (0..count).step_by(3) {
        if joint == 0 && !closed {
            continue;
        }
        let incoming = if joint == 0 { count - 1 } else { joint - 1 };
        let outgoing = joint + 1;

        let anchor = points[joint];
        let v = points[incoming] - anchor;
        let w = points[outgoing] - anchor;
        let cosine = v.cosine(&w).ok_or(FitError::DegenerateInput {
            index: joint,
            reason: "handle on top of its anchor",
        })?;
        if cosine > config.smooth_cosine {
            continue;
        }

        let theta = (PI - cosine.clamp(-1.0, 1.0).acos()) / 2.0;
        let (a, b) = (v.direction(), w.direction());
        let sign = if (a > b) ^ ((a - b).abs() >= PI) {
            1.0
        } else {
            -1.0
        };
        debug!("straightening joint at {} by {:.4} rad", joint, theta);
        points[incoming] = anchor + v.rotate(sign * theta);
        points[outgoing] = anchor + w.rotate(-sign * theta);
    }
    Ok(())
}
