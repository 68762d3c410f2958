//! Per-element trilinear interpolation and its exact corner gradient.
//!
//! Provides the forward and backward element bodies for feature-grid
//! interpolation. Both are pure functions of one cube's query point and one
//! channel's corner values, so a dispatch layer can evaluate any (cube,
//! channel) pair independently and without synchronization.

use crate::types::{CellCoeffs, FaceWeights, Scalar, CORNER_COUNT};

/// Map one query-point axis from the [-1, 1] domain to [0, 1].
///
/// Values outside [-1, 1] map outside [0, 1] and extrapolate; they are
/// neither rejected nor clamped.
#[inline]
pub fn normalize_axis<T: Scalar>(x: T) -> T {
    let two = T::one() + T::one();
    (x + T::one()) / two
}

/// Compute the four bilinear face weights for a normalized (v, w) position.
///
/// `d` is derived by complement, not recomputed as v·w, so the quadruple
/// sums to one exactly.
#[inline]
pub fn face_weights<T: Scalar>(v: T, w: T) -> FaceWeights<T> {
    let a = (T::one() - v) * (T::one() - w);
    let b = (T::one() - v) * w;
    let c = v * (T::one() - w);
    let d = T::one() - a - b - c;
    FaceWeights { a, b, c, d }
}

/// Derive the full coefficient set for one cube from its raw query point.
///
/// Each unit of work calls this for itself; coefficients are never shared
/// or cached between the forward and backward dispatches.
#[inline]
pub fn cell_coeffs<T: Scalar>(px: T, py: T, pz: T) -> CellCoeffs<T> {
    let u = normalize_axis(px);
    let v = normalize_axis(py);
    let w = normalize_axis(pz);
    CellCoeffs {
        u,
        face: face_weights(v, w),
    }
}

/// The 8 effective corner weights of one cube, in corner-index order.
///
/// Corners 0..3 carry (1-u)·{a, b, c, d}, corners 4..7 carry u·{a, b, c, d}.
/// For any query point the weights sum to one; outside the nominal domain
/// individual weights go negative while the sum still holds.
#[inline]
pub fn corner_weights<T: Scalar>(coeffs: &CellCoeffs<T>) -> [T; CORNER_COUNT] {
    let u0 = T::one() - coeffs.u;
    let u1 = coeffs.u;
    let FaceWeights { a, b, c, d } = coeffs.face;
    [
        u0 * a,
        u0 * b,
        u0 * c,
        u0 * d,
        u1 * a,
        u1 * b,
        u1 * c,
        u1 * d,
    ]
}

/// Forward element body: interpolate one channel from its 8 corner values.
///
/// A linear blend along u of two bilinear blends over (v, w): corners 0..3
/// form the u = 0 face, corners 4..7 the u = 1 face.
#[inline]
pub fn interpolate_channel<T: Scalar>(coeffs: &CellCoeffs<T>, corners: [T; CORNER_COUNT]) -> T {
    let FaceWeights { a, b, c, d } = coeffs.face;
    let lo = a * corners[0] + b * corners[1] + c * corners[2] + d * corners[3];
    let hi = a * corners[4] + b * corners[5] + c * corners[6] + d * corners[7];
    (T::one() - coeffs.u) * lo + coeffs.u * hi
}

/// Backward element body: spread an upstream gradient onto the 8 corners.
///
/// The interpolant is linear in each corner value, so the gradient of the
/// output with respect to corner i is exactly that corner's weight; the
/// upstream gradient scales it. No corner value enters the computation.
#[inline]
pub fn spread_channel_gradient<T: Scalar>(
    coeffs: &CellCoeffs<T>,
    upstream: T,
) -> [T; CORNER_COUNT] {
    let weights = corner_weights(coeffs);
    weights.map(|weight| weight * upstream)
}
