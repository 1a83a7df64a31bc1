//! Defines and implements the helper method [`DrawCurve::add_curves`] on various drawing contexts.
use crate::CurveList;

/// Draw fitted chains on different "drawing contexts" with ease.
pub trait DrawCurve {
    /// Add a chain of cubic segments to the drawing context.
    ///
    /// What this actually means depends on the context.
    /// But generally this just prepares the chain to be drawn instead of actually drawing it.
    fn add_curves(&mut self, curves: &CurveList);
}

pub mod svg;
