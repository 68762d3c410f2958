//! # trigrid_rs
//!
//! Host runtime for trilinear feature-grid interpolation: dense buffers,
//! call validation, and tiled parallel dispatch of the forward and backward
//! kernels from `trigrid_core`.
//!
//! For each of N cubes, a call takes 8 corner feature vectors of dimension F
//! and one query point in [-1, 1]^3, and produces the interpolated feature
//! vector — or, given an upstream gradient of shape (N, F), the exact
//! per-corner gradients of shape (N, 8, F).
//!
//! ## Quick Start
//!
//! ```
//! use trigrid_rs::{backward, forward, Arena, ChannelField, CornerField, QueryPoints};
//!
//! // One cube, one channel: zeros on the u = 0 face, ones on the u = 1 face.
//! let features = CornerField::from_vec(
//!     vec![0.0f32, 0.0, 0.0, 0.0, 1.0, 1.0, 1.0, 1.0],
//!     1,
//!     1,
//!     Arena::HOST,
//! )?;
//! let points = QueryPoints::from_vec(vec![0.0, -1.0, -1.0], 1, Arena::HOST)?;
//!
//! let output = forward(&features, &points)?;
//! assert!((output.get(0, 0) - 0.5).abs() < 1e-6);
//!
//! let upstream = ChannelField::from_vec(vec![2.0], 1, 1, Arena::HOST)?;
//! let grads = backward(&upstream, &features, &points)?;
//! assert!((grads.get(0, 0, 0) - 1.0).abs() < 1e-6);
//! # Ok::<(), trigrid_rs::TrigridError>(())
//! ```
//!
//! ## Execution model
//!
//! The (N cubes × F channels) index space is covered by 16×16 tiles
//! (ceiling division in each dimension, bounds guard for partial edge
//! tiles). One unit of work per in-bounds (cube, channel) pair runs on the
//! rayon pool; each unit re-derives its cube's coefficient quadruple from
//! the raw query point, reads its own input elements, and writes its own
//! disjoint output slot(s). There are no locks and no shared mutable state:
//! safety comes from the index partition, and every output element is
//! written exactly once.
//!
//! Forward and backward are independent dispatches with no cached state
//! between them; a caller needing both issues two calls.
//!
//! ## Errors
//!
//! Shape, cube/channel-count, and arena mismatches are rejected before any
//! dispatch, and output allocation failure fails the whole call — a call
//! either returns a complete buffer or nothing. The per-element arithmetic
//! itself has no error path: query points outside [-1, 1]^3 extrapolate
//! rather than fail.

#![warn(missing_docs)]
#![warn(clippy::all)]

mod backward;
mod buffer;
mod error;
mod forward;
mod launch;

pub use backward::backward;
pub use buffer::{Arena, ChannelField, CornerField, QueryPoints};
pub use error::{Result, TrigridError};
pub use forward::forward;
pub use launch::{LaunchConfig, TILE_SIZE};
