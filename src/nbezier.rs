//! A wrapper around [`nalgebra::Matrix`] interpreting it as a bezier curve.

use nalgebra::allocator::Allocator;
use nalgebra::dimension::{Const, Dim, DimAdd, DimSum, U1, U2, U4};
use nalgebra::{
    ArrayStorage, DefaultAllocator, Matrix, Matrix2x4, OMatrix, Owned, RealField, Storage,
};
use std::fmt;

use crate::vector::{Point, VectorExt};

/// Wrapper around [`nalgebra::Matrix`] interpreting it as a bezier curve.
///
/// The curve's control points are stored as the matrix' columns.
#[derive(Clone, Copy)]
pub struct BezierCurve<T, R, C, S>(pub Matrix<T, R, C, S>);

/// Wrapper around [`nalgebra::OMatrix`] interpreting it as a bezier curve.
pub type OBezierCurve<T, R, C> = BezierCurve<T, R, C, Owned<T, R, C>>;

/// Planar cubic curve: start anchor, two handles and end anchor.
pub type CubicCurve = BezierCurve<f64, U2, U4, ArrayStorage<f64, 2, 4>>;

impl<T: RealField, R: Dim, C: Dim, S: Storage<T, R, C>> BezierCurve<T, R, C, S> {
    /// Get the curves degree
    ///
    /// For example a cubic curve has degree 3 and 4 control points
    pub fn degree(&self) -> usize {
        self.0.ncols() - 1
    }
}

impl<T: RealField, R: Dim, C: Dim, S: Storage<T, R, C>> BezierCurve<T, R, C, S>
where
    C: DimAdd<U1>,
    DefaultAllocator: Allocator<T, C, R>,             // self^T
    DefaultAllocator: Allocator<T, DimSum<C, U1>, C>, // M
    DefaultAllocator: Allocator<T, DimSum<C, U1>, R>, // result^T
    DefaultAllocator: Allocator<T, R, DimSum<C, U1>>, // result
{
    /// Returns a new bezier curve of the same shape whose degree is one step higher
    pub fn raise_degree(&self) -> OBezierCurve<T, R, DimSum<C, U1>> {
        let (_, cols) = self.0.shape_generic();
        let matrix = elevation_matrix(cols);

        // Apply transformation
        let old = self.0.transpose();
        let new = matrix * &old;
        BezierCurve(new.transpose())
    }
}

/// Constructs the matrix to raise a curve's degree from `n` to `n+1`
fn elevation_matrix<T: RealField, N: Dim>(n: N) -> OMatrix<T, DimSum<N, U1>, N>
where
    N: DimAdd<U1>,
    DefaultAllocator: Allocator<T, DimSum<N, U1>, N>,
{
    let mut matrix = OMatrix::zeros_generic(n.add(Const::<1>), n);

    let n = n.value();
    let n_as_t = {
        let mut k = T::zero();
        for _ in 0..n {
            k = k + T::one();
        }
        k
    };

    matrix[(0, 0)] = T::one();
    matrix[(n, n - 1)] = T::one();

    let mut i_as_t = T::zero();
    for i in 1..n {
        i_as_t += T::one();
        matrix[(i, i - 1)] = i_as_t.clone() / n_as_t.clone();
        matrix[(i, i)] = T::one() - matrix[(i, i - 1)].clone();
    }
    matrix
}

impl<T: RealField, R: Dim, C: Dim, S: Storage<T, R, C>> PartialEq for BezierCurve<T, R, C, S> {
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}

impl<T: RealField, R: Dim, C: Dim, S: Storage<T, R, C> + fmt::Debug> fmt::Debug
    for BezierCurve<T, R, C, S>
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("BezierCurve").field(&self.0).finish()
    }
}

impl CubicCurve {
    /// Builds a cubic from its four control points
    pub fn new(start: Point, first_handle: Point, second_handle: Point, end: Point) -> Self {
        BezierCurve(Matrix2x4::from_columns(&[
            start,
            first_handle,
            second_handle,
            end,
        ]))
    }

    /// Straight cubic from `start` to `end` with its handles at a third and two thirds
    pub fn straight(start: Point, end: Point) -> Self {
        CubicCurve::new(
            start,
            start.slide(&end, 1.0 / 3.0),
            start.slide(&end, 2.0 / 3.0),
            end,
        )
    }

    /// Start anchor
    pub fn start(&self) -> Point {
        self.0.column(0).clone_owned()
    }

    /// Handle leaving the start anchor
    pub fn first_handle(&self) -> Point {
        self.0.column(1).clone_owned()
    }

    /// Handle entering the end anchor
    pub fn second_handle(&self) -> Point {
        self.0.column(2).clone_owned()
    }

    /// End anchor
    pub fn end(&self) -> Point {
        self.0.column(3).clone_owned()
    }

    /// Moves both handles by the given offsets, keeping the anchors in place
    pub fn shift_handles(&mut self, first: Point, second: Point) {
        let first = self.first_handle() + first;
        let second = self.second_handle() + second;
        self.0.set_column(1, &first);
        self.0.set_column(2, &second);
    }

    /// Get the point on the curve at position `t`.
    ///
    /// Evaluates the cubic bernstein basis directly.
    /// Values of `t` outside of `[0, 1]` extrapolate the curve.
    pub fn evaluate(&self, t: f64) -> Point {
        let s = 1.0 - t;
        self.start() * (s * s * s)
            + self.first_handle() * (3.0 * s * s * t)
            + self.second_handle() * (3.0 * s * t * t)
            + self.end() * (t * t * t)
    }
}
