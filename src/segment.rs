//! Greedy segmentation of a point sequence into cubic curves.
//!
//! A window of points grows one point at a time, and after every step the whole window is
//! fitted with a single cubic. The window breaks when its second to last point is a sharp
//! corner, or when a stress fit misses one of its points by more than a third of the
//! window's shortest chord. An error break that is immediately followed by a corner (or by the
//! end of the sequence) is corrected once: the segment emitted by the error break is refitted
//! together with the points that came after it.

use log::{debug, trace};

use crate::config::FitConfig;
use crate::curve_list::CurveList;
use crate::error::FitError;
use crate::interpolate::{through_four, through_three};
use crate::nbezier::CubicCurve;
use crate::path::PointSequence;
use crate::stress::{stress, StressFit};
use crate::vector::{Point, VectorExt};

/// How a segment was obtained
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SegmentKind {
    /// Straight cubic between two points
    Straight,
    /// Raised quadratic through three points
    ThreePoint,
    /// Exact cubic through four points
    FourPoint,
    /// Stress fit of five or more points within the error bound
    Stress,
    /// Refit after an error break was followed by a corner or the end of the sequence.
    /// Not checked against the error bound.
    Backtracked,
}

/// Points a segment was fitted on
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SegmentOrigin {
    /// Index of the segment's first point
    pub first: usize,
    /// Index of the segment's last point
    pub last: usize,
    /// How the segment was fitted
    pub kind: SegmentKind,
}

/// Cubic fitted to a whole window
#[derive(Clone, Debug, PartialEq)]
pub enum WindowFit {
    /// Two points
    Straight(CubicCurve),
    /// Three points
    ThreePoint(CubicCurve),
    /// Four points
    FourPoint(CubicCurve),
    /// Five or more points
    Stress(StressFit),
}

impl WindowFit {
    /// The fitted curve
    pub fn curve(&self) -> &CubicCurve {
        match self {
            WindowFit::Straight(curve)
            | WindowFit::ThreePoint(curve)
            | WindowFit::FourPoint(curve) => curve,
            WindowFit::Stress(fit) => &fit.curve,
        }
    }

    /// How the curve was fitted
    pub fn kind(&self) -> SegmentKind {
        match self {
            WindowFit::Straight(_) => SegmentKind::Straight,
            WindowFit::ThreePoint(_) => SegmentKind::ThreePoint,
            WindowFit::FourPoint(_) => SegmentKind::FourPoint,
            WindowFit::Stress(_) => SegmentKind::Stress,
        }
    }
}

/// Fits a single cubic to `window`, choosing the method by the number of points.
///
/// Point indices in errors are relative to the window.
pub fn fit_window(window: &[Point], config: &FitConfig) -> Result<WindowFit, FitError> {
    match *window {
        [] | [_] => Err(FitError::InsufficientPoints {
            needed: 2,
            got: window.len(),
        }),
        [a, b] => Ok(WindowFit::Straight(CubicCurve::straight(a, b))),
        [a, b, c] => Ok(WindowFit::ThreePoint(through_three(a, b, c)?)),
        [a, b, c, d] => Ok(WindowFit::FourPoint(through_four([a, b, c, d])?)),
        _ => Ok(WindowFit::Stress(stress(window, config)?)),
    }
}

/// The curve currently being grown
#[derive(Clone, Debug, PartialEq)]
pub struct Growing {
    /// Fitted curve, starting at the window's trail
    pub curve: CubicCurve,
    /// How it was fitted
    pub kind: SegmentKind,
    /// Index of the last point it was fitted on
    pub last: usize,
}

impl Growing {
    fn straight(points: &[Point], first: usize) -> Self {
        Growing {
            curve: CubicCurve::straight(points[first], points[first + 1]),
            kind: SegmentKind::Straight,
            last: first + 1,
        }
    }
}

/// Everything the segmenter tracks between steps
#[derive(Clone, Debug, PartialEq)]
pub struct WindowState {
    /// First point of the window
    pub trail: usize,
    /// Last point of the window
    pub lead: usize,
    /// Trail of the previously emitted segment, the start of a backtracking refit
    pub prev_trail: usize,
    /// The last break was an error break and may still be corrected
    pub maybe_over: bool,
    /// Curve fitted to the window so far
    pub current: Growing,
}

/// What a single step did
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Step {
    /// The window grew and its new fit was accepted
    Grow,
    /// The window broke at a sharp corner.
    /// `backtracked` tells whether the previous segment was refitted instead of emitting one.
    BreakAngle {
        /// Whether the previous segment was corrected
        backtracked: bool,
    },
    /// The window's fit exceeded the error bound, the previous fit was emitted
    BreakError,
}

/// Raw output of the segmenter
#[derive(Clone, Debug, PartialEq)]
pub struct Segmentation {
    /// Emitted segments, before corner smoothing
    pub curves: CurveList,
    /// Where every segment came from, in the same order
    pub origins: Vec<SegmentOrigin>,
}

/// Stepwise greedy segmenter over one point sequence
pub struct Segmenter<'a> {
    points: &'a [Point],
    closed: bool,
    config: &'a FitConfig,
    state: WindowState,
    output: Option<CurveList>,
    origins: Vec<SegmentOrigin>,
}

impl<'a> Segmenter<'a> {
    /// Starts with a window over the first two points
    pub fn new(sequence: &'a PointSequence, config: &'a FitConfig) -> Result<Self, FitError> {
        let points = sequence.points();
        if points[0] == points[1] {
            return Err(FitError::DegenerateInput {
                index: 1,
                reason: "duplicate point",
            });
        }
        Ok(Segmenter {
            points,
            closed: sequence.is_closed(),
            config,
            state: WindowState {
                trail: 0,
                lead: 1,
                prev_trail: 0,
                maybe_over: false,
                current: Growing::straight(points, 0),
            },
            output: None,
            origins: Vec::new(),
        })
    }

    /// Current window state
    pub fn state(&self) -> &WindowState {
        &self.state
    }

    /// Segments emitted so far
    pub fn partial(&self) -> Option<&CurveList> {
        self.output.as_ref()
    }

    /// Whether the window has reached the last point
    pub fn is_done(&self) -> bool {
        self.state.lead + 1 >= self.points.len()
    }

    /// Extends the window by one point. Returns `None` once the last point is reached.
    pub fn step(&mut self) -> Result<Option<Step>, FitError> {
        if self.is_done() {
            return Ok(None);
        }
        self.state.lead += 1;

        let points = self.points;
        let lead = self.state.lead;
        let window = &points[self.state.trail..=lead];
        let n = window.len();

        let v = window[n - 3] - window[n - 2];
        let w = window[n - 1] - window[n - 2];
        let cosine = v.cosine(&w).ok_or(FitError::DegenerateInput {
            index: if w.norm() == 0.0 { lead } else { lead - 1 },
            reason: "duplicate point",
        })?;

        if cosine >= self.config.cusp_cosine {
            let backtracked = self.state.maybe_over;
            if backtracked {
                self.backtrack(lead - 1)?;
                self.state.maybe_over = false;
            } else {
                self.emit();
                self.state.prev_trail = self.state.trail;
            }
            debug!("corner at point {} (cosine {:.3})", lead - 1, cosine);
            self.restart();
            return Ok(Some(Step::BreakAngle { backtracked }));
        }

        let trail = self.state.trail;
        let fit = fit_window(window, self.config).map_err(|e| e.offset(trail))?;
        if let WindowFit::Stress(stressed) = &fit {
            let shortest = window
                .windows(2)
                .map(|pair| (pair[1] - pair[0]).norm())
                .fold(f64::INFINITY, f64::min);
            let bound = shortest / self.config.error_divisor;
            let error = stressed.max_error();
            if error > bound {
                debug!(
                    "error {:.4} over bound {:.4} on points {}..={}",
                    error, bound, trail, lead
                );
                self.state.maybe_over = true;
                self.emit();
                self.state.prev_trail = trail;
                self.restart();
                return Ok(Some(Step::BreakError));
            }
        }

        trace!("points {}..={} fitted as {:?}", trail, lead, fit.kind());
        self.state.current = Growing {
            curve: *fit.curve(),
            kind: fit.kind(),
            last: lead,
        };
        self.state.maybe_over = false;
        Ok(Some(Step::Grow))
    }

    /// Runs the remaining steps and emits the final segment
    pub fn run(&mut self) -> Result<Segmentation, FitError> {
        while self.step()?.is_some() {}

        if self.state.maybe_over {
            self.backtrack(self.state.lead)?;
            self.state.maybe_over = false;
        } else {
            self.emit();
        }

        let curves = match self.output.take() {
            Some(curves) => curves,
            None => CurveList::new(self.points[0], self.closed),
        };
        Ok(Segmentation {
            curves,
            origins: std::mem::take(&mut self.origins),
        })
    }

    /// Emits the growing curve
    fn emit(&mut self) {
        let current = &self.state.current;
        let closed = self.closed;
        self.output
            .get_or_insert_with(|| CurveList::new(current.curve.start(), closed))
            .push_segment(&current.curve);
        self.origins.push(SegmentOrigin {
            first: self.state.trail,
            last: current.last,
            kind: current.kind,
        });
    }

    /// Replaces the last emitted segment by a fit of all points from `prev_trail` to `last`
    fn backtrack(&mut self, last: usize) -> Result<(), FitError> {
        let first = self.state.prev_trail;
        let refit =
            fit_window(&self.points[first..=last], self.config).map_err(|e| e.offset(first))?;
        let curve = refit.curve();
        debug!("refitting points {}..={} after an error break", first, last);

        let closed = self.closed;
        let output = self
            .output
            .get_or_insert_with(|| CurveList::new(curve.start(), closed));
        output.pop_segment();
        output.push_segment(curve);

        self.origins.pop();
        self.origins.push(SegmentOrigin {
            first,
            last,
            kind: SegmentKind::Backtracked,
        });
        Ok(())
    }

    /// Restarts the window over the last two points
    fn restart(&mut self) {
        let trail = self.state.lead - 1;
        self.state.trail = trail;
        self.state.current = Growing::straight(self.points, trail);
    }
}

/// Segments `sequence` into cubics without smoothing the joints
pub fn segment(sequence: &PointSequence, config: &FitConfig) -> Result<Segmentation, FitError> {
    Segmenter::new(sequence, config)?.run()
}
