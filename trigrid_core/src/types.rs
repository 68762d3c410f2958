//! Core value types for per-cube interpolation.
//!
//! Provides the scalar abstraction, the corner-indexing contract, and the
//! coefficient types shared by the forward and backward element kernels.

use core::fmt::Debug;

use num_traits::Float;

/// Number of corners on an interpolation cube.
///
/// A domain constant, not a tunable: every cell is an axis-aligned unit cube
/// with exactly 8 per-vertex feature vectors.
pub const CORNER_COUNT: usize = 8;

/// Scalar types the kernels are generic over.
///
/// Implemented for `f32` and `f64`. The width is fixed per call by the
/// generic instantiation; both widths run the identical formulas.
pub trait Scalar: Float + Copy + Send + Sync + Debug + 'static {}

impl<T> Scalar for T where T: Float + Copy + Send + Sync + Debug + 'static {}

/// The four bilinear face weights over the (v, w) plane.
///
/// `a`, `b`, `c` weight the (v, w) ∈ {(0,0), (0,1), (1,0)} corners of a face;
/// `d` is derived by complement so the quadruple always sums to one.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FaceWeights<T> {
    /// Weight of the (v=0, w=0) face corner: (1-v)(1-w).
    pub a: T,
    /// Weight of the (v=0, w=1) face corner: (1-v)w.
    pub b: T,
    /// Weight of the (v=1, w=0) face corner: v(1-w).
    pub c: T,
    /// Weight of the (v=1, w=1) face corner: 1 - a - b - c.
    pub d: T,
}

/// Per-cube interpolation coefficients: the normalized u axis position plus
/// the face-weight quadruple shared by both cube faces.
///
/// Derived independently by every unit of work from the cube's query point;
/// never cached across dispatches.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CellCoeffs<T> {
    /// Normalized position along the face-selecting axis, 0 at corners 0..3
    /// and 1 at corners 4..7.
    pub u: T,
    /// Bilinear weights over the (v, w) plane, common to both faces.
    pub face: FaceWeights<T>,
}

/// The (u, v, w) position bits of a corner index.
///
/// Corner indexing contract: bit 2 selects the u = 1 face, bit 1 the v = 1
/// side, bit 0 the w = 1 side. Corners 0..3 lie on the u = 0 face and carry
/// face weights a, b, c, d respectively; corners 4..7 mirror them on the
/// u = 1 face. Feature buffers must store their 8 corner vectors in this
/// order.
#[inline]
pub const fn corner_position(index: usize) -> (u8, u8, u8) {
    (
        ((index >> 2) & 1) as u8,
        ((index >> 1) & 1) as u8,
        (index & 1) as u8,
    )
}
