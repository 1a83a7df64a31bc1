//! The fitter's output: a chain of cubic segments sharing their anchors.

use crate::draw::svg::SVGAbsolutePath;
use crate::draw::DrawCurve;
use crate::nbezier::CubicCurve;
use crate::vector::Point;

/// Chain of cubic segments stored as `[p0, c1, c2, p1, c1, c2, p2, ...]`.
///
/// Every segment after the start anchor adds two handles and one anchor,
/// so the number of stored points is always `3 * segments + 1`.
#[derive(Clone, Debug, PartialEq)]
pub struct CurveList {
    points: Vec<Point>,
    closed: bool,
}

impl CurveList {
    /// Empty chain consisting only of its start anchor
    pub fn new(start: Point, closed: bool) -> Self {
        CurveList {
            points: vec![start],
            closed,
        }
    }

    /// Chain of a single segment
    pub fn from_segment(curve: &CubicCurve, closed: bool) -> Self {
        let mut list = CurveList::new(curve.start(), closed);
        list.push_segment(curve);
        list
    }

    /// Appends a segment.
    ///
    /// The segment is assumed to start at the current end anchor; its start is not stored again.
    pub fn push_segment(&mut self, curve: &CubicCurve) {
        self.points.push(curve.first_handle());
        self.points.push(curve.second_handle());
        self.points.push(curve.end());
    }

    /// Removes and returns the last segment, if there is one
    pub fn pop_segment(&mut self) -> Option<CubicCurve> {
        if self.points.len() < 4 {
            return None;
        }
        let end = self.points.pop()?;
        let second = self.points.pop()?;
        let first = self.points.pop()?;
        let start = *self.points.last()?;
        Some(CubicCurve::new(start, first, second, end))
    }

    /// Number of segments
    pub fn segment_count(&self) -> usize {
        (self.points.len() - 1) / 3
    }

    /// Iterates over the segments in order
    pub fn segments(&self) -> impl Iterator<Item = CubicCurve> + '_ {
        self.points
            .windows(4)
            .step_by(3)
            .map(|w| CubicCurve::new(w[0], w[1], w[2], w[3]))
    }

    /// Iterates over the anchors, i.e. every third point
    pub fn anchors(&self) -> impl Iterator<Item = &Point> + '_ {
        self.points.iter().step_by(3)
    }

    /// All stored points
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Mutable access to the stored points without changing their number
    pub(crate) fn points_mut(&mut self) -> &mut [Point] {
        &mut self.points
    }

    /// First anchor
    pub fn start(&self) -> Point {
        self.points[0]
    }

    /// Last anchor
    pub fn end(&self) -> Point {
        self.points[self.points.len() - 1]
    }

    /// Whether the chain describes a closed subpath
    pub fn is_closed(&self) -> bool {
        self.closed
    }

    /// SVG path data using absolute coordinates
    pub fn to_svg_path(&self) -> String {
        let mut d = String::new();
        SVGAbsolutePath::from(&mut d).add_curves(self);
        d
    }
}
