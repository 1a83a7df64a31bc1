//! Input of the fitter: the anchors of one subpath.

use kurbo::{BezPath, PathEl};

use crate::error::FitError;
use crate::vector::Point;

/// Ordered points of one subpath together with whether the subpath is closed.
///
/// Holds at least two points. A closed sequence always ends on its first point.
#[derive(Clone, Debug, PartialEq)]
pub struct PointSequence {
    points: Vec<Point>,
    closed: bool,
}

impl PointSequence {
    /// Wraps `points`, appending the first point to a closed sequence that doesn't return to it
    pub fn new(mut points: Vec<Point>, closed: bool) -> Result<Self, FitError> {
        if points.len() < 2 {
            return Err(FitError::InsufficientPoints {
                needed: 2,
                got: points.len(),
            });
        }
        if closed && points[0] != points[points.len() - 1] {
            points.push(points[0]);
        }
        Ok(PointSequence { points, closed })
    }

    /// The points in order
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Whether the subpath is closed
    pub fn is_closed(&self) -> bool {
        self.closed
    }

    /// Number of points
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Always false, a sequence holds at least two points
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

/// Splits svg path data into subpaths and collects the anchors of each.
///
/// Every move starts a new subpath and the end point of every drawing command becomes an
/// anchor; handles are dropped. A close command closes the current subpath.
/// A subpath with a single point is rejected as [`FitError::PathData`] naming its index.
pub fn subpaths_from_svg(d: &str) -> Result<Vec<PointSequence>, FitError> {
    let path = BezPath::from_svg(d).map_err(|e| FitError::PathData(e.to_string()))?;

    let mut subpaths = Vec::new();
    let mut current: Vec<Point> = Vec::new();
    let mut restart = None;
    for element in path.elements() {
        let end = match *element {
            PathEl::MoveTo(p) => {
                if !current.is_empty() {
                    subpaths.push(finish(std::mem::take(&mut current), false, subpaths.len())?);
                }
                restart = None;
                p
            }
            PathEl::LineTo(p) | PathEl::QuadTo(_, p) | PathEl::CurveTo(_, _, p) => {
                // Drawing right after a close continues from the closed subpath's start
                if let Some(start) = restart.take() {
                    current.push(start);
                }
                p
            }
            PathEl::ClosePath => {
                if !current.is_empty() {
                    restart = Some(current[0]);
                    subpaths.push(finish(std::mem::take(&mut current), true, subpaths.len())?);
                }
                continue;
            }
        };
        current.push(Point::new(end.x, end.y));
    }
    if !current.is_empty() {
        subpaths.push(finish(current, false, subpaths.len())?);
    }
    Ok(subpaths)
}

fn finish(points: Vec<Point>, closed: bool, index: usize) -> Result<PointSequence, FitError> {
    PointSequence::new(points, closed)
        .map_err(|e| FitError::PathData(format!("subpath {}: {}", index, e)))
}
