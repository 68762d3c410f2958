//! # trigrid_core
//!
//! Pure per-element math for trilinear feature-grid interpolation.
//!
//! This crate provides the element kernels for the trigrid system: given the
//! 8 corner feature values of an axis-aligned unit cube and a query point in
//! normalized [-1, 1] coordinates, it interpolates one output value per
//! feature channel and spreads an upstream gradient back onto the corners.
//! There is no storage, no allocation, and no parallelism here — just the
//! arithmetic a dispatch layer evaluates once per (cube, channel) pair.
//!
//! ## Modules
//!
//! - [`types`]: the `Scalar` abstraction, coefficient types, and the
//!   corner-indexing contract
//! - [`interpolation`]: coefficient derivation plus the forward and backward
//!   element bodies
//!
//! ## Corner indexing
//!
//! Corners 0..3 lie on the u = 0 face with bilinear weights a, b, c, d over
//! the (v, w) plane; corners 4..7 repeat the same weights on the u = 1 face.
//! See [`types::corner_position`] for the exact bit layout. Feature storage
//! that feeds these kernels must follow this order.
//!
//! ## Usage
//!
//! ```
//! use trigrid_core::prelude::*;
//!
//! // One channel of one cube: zeros on the u = 0 face, ones on the u = 1 face.
//! let corners = [0.0f32, 0.0, 0.0, 0.0, 1.0, 1.0, 1.0, 1.0];
//! let coeffs = cell_coeffs(0.0, -1.0, -1.0);
//!
//! let value = interpolate_channel(&coeffs, corners);
//! assert!((value - 0.5).abs() < 1e-6);
//!
//! let grads = spread_channel_gradient(&coeffs, 2.0);
//! assert!((grads[0] - 1.0).abs() < 1e-6);
//! ```
//!
//! ## Out-of-range queries
//!
//! Points outside [-1, 1]^3 extrapolate: the weights leave [0, 1] but still
//! sum to one, and every formula stays total. Callers that need containment
//! must enforce it themselves.

#![cfg_attr(not(feature = "std"), no_std)]
#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod interpolation;
pub mod types;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::interpolation::{
        cell_coeffs, corner_weights, face_weights, interpolate_channel, normalize_axis,
        spread_channel_gradient,
    };
    pub use crate::types::{corner_position, CellCoeffs, FaceWeights, Scalar, CORNER_COUNT};
}

pub use interpolation::{
    cell_coeffs, corner_weights, face_weights, interpolate_channel, normalize_axis,
    spread_channel_gradient,
};
pub use types::{corner_position, CellCoeffs, FaceWeights, Scalar, CORNER_COUNT};
