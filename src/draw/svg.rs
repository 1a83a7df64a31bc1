//! Draw a fitted chain in a svg

use crate::draw::DrawCurve;
use crate::vector::Point;
use crate::CurveList;
use std::fmt::Write;
use std::marker::PhantomData;

/// Helper trait implemented by [`Absolute`] and [`Relative`] to choose
/// how the coordinates are interpreted in the svg's path.
///
/// This effectively toggles between lower and upper case letters for the path commands.
pub trait CoordRepr {
    /// Character to use for the MoveTo command
    const M: &'static str;

    /// Character to use for the Cubic Bezier Curve command
    const C: &'static str;

    /// Character to use for the ClosePath command
    const Z: &'static str;

    /// Whether coordinates are written relative to the current point
    const RELATIVE: bool;
}

/// Interpret the svg path's coordinates as absolute.
pub struct Absolute;
impl CoordRepr for Absolute {
    const M: &'static str = "M";
    const C: &'static str = "C";
    const Z: &'static str = "Z";
    const RELATIVE: bool = false;
}

/// Interpret the svg path's coordinates as relative.
pub struct Relative;
impl CoordRepr for Relative {
    const M: &'static str = "m";
    const C: &'static str = "c";
    const Z: &'static str = "z";
    const RELATIVE: bool = true;
}

/// This type wraps a mutable String reference and implements [`DrawCurve`] on it.
/// The [`DrawCurve::add_curves`] writes the chain to the string
/// using the path commands used in a svg `<path>`'s d attribute.
/// Several chains are separated by a space.
///
/// ```
/// # use nalgebra::Vector2;
/// # use bezfit::{CubicCurve, CurveList};
/// use bezfit::draw::DrawCurve;
/// use bezfit::draw::svg::SVGAbsolutePath;
///
/// let curve = CubicCurve::new(
///     Vector2::new(0.0, 0.0),
///     Vector2::new(1.0, 0.0),
///     Vector2::new(2.0, 0.0),
///     Vector2::new(3.0, 0.0),
/// );
/// let mut d = String::new();
/// SVGAbsolutePath::from(&mut d).add_curves(&CurveList::from_segment(&curve, false));
/// assert_eq!(d, "M 0,0 C 1,0 2,0 3,0");
/// ```
pub struct SVGPath<'s, R: CoordRepr> {
    d: &'s mut String,
    current: Point,
    repr: PhantomData<R>,
}

/// Wrapper for writing a chain to a svg's path using absolute coordinates
pub type SVGAbsolutePath<'s> = SVGPath<'s, Absolute>;

/// Wrapper for writing a chain to a svg's path using relative coordinates
pub type SVGRelativePath<'s> = SVGPath<'s, Relative>;

impl<'s, R: CoordRepr> From<&'s mut String> for SVGPath<'s, R> {
    fn from(string: &'s mut String) -> Self {
        SVGPath {
            d: string,
            current: Point::zeros(),
            repr: PhantomData,
        }
    }
}

impl<'s, R: CoordRepr> SVGPath<'s, R> {
    fn coords(&self, point: &Point) -> Point {
        if R::RELATIVE {
            point - self.current
        } else {
            *point
        }
    }
}

impl<'s, R: CoordRepr> DrawCurve for SVGPath<'s, R> {
    fn add_curves(&mut self, curves: &CurveList) {
        if !self.d.is_empty() {
            self.d.push(' ');
        }

        let start = curves.start();
        let p = self.coords(&start);
        let _ = write!(self.d, "{} {},{}", R::M, p.x, p.y);
        self.current = start;

        for segment in curves.segments() {
            let c1 = self.coords(&segment.first_handle());
            let c2 = self.coords(&segment.second_handle());
            let end = self.coords(&segment.end());
            let _ = write!(
                self.d,
                " {} {},{} {},{} {},{}",
                R::C,
                c1.x,
                c1.y,
                c2.x,
                c2.y,
                end.x,
                end.y,
            );
            self.current = segment.end();
        }

        if curves.is_closed() {
            let _ = write!(self.d, " {}", R::Z);
            self.current = start;
        }
    }
}
