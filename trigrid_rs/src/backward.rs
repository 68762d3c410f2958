//! Backward interpolation dispatch.
//!
//! Spreads an upstream (cube, channel) gradient back onto the 8 corners of
//! each cube. The launch walk and the coefficient derivation mirror the
//! forward dispatch but are deliberately not shared with it: each kernel is
//! a standalone dispatch that re-derives everything it needs, so the two
//! stay independently launchable with no state carried between calls.

use rayon::prelude::*;

use trigrid_core::interpolation::{cell_coeffs, spread_channel_gradient};
use trigrid_core::{Scalar, CORNER_COUNT};

use crate::buffer::{ChannelField, CornerField, QueryPoints};
use crate::error::{Result, TrigridError};
use crate::launch::{LaunchConfig, TILE_SIZE};

/// Propagate an upstream output gradient into per-corner feature gradients.
///
/// The interpolant is linear in every corner value, so each gradient element
/// is the corner's interpolation weight times the upstream gradient. The
/// corner values in `features` never enter that formula; the argument
/// participates in shape and arena validation so caller inconsistencies are
/// caught here exactly as a forward call would catch them.
///
/// One unit of work per (cube, channel) pair writes the 8 gradient slots of
/// its (cube, ·, channel) column; no two units overlap.
pub fn backward<T: Scalar>(
    upstream: &ChannelField<T>,
    features: &CornerField<T>,
    points: &QueryPoints<T>,
) -> Result<CornerField<T>> {
    if upstream.cubes() != features.cubes() {
        return Err(TrigridError::CubeCountMismatch {
            argument: "upstream",
            expected: features.cubes(),
            got: upstream.cubes(),
        });
    }
    if upstream.channels() != features.channels() {
        return Err(TrigridError::ChannelCountMismatch {
            argument: "upstream",
            expected: features.channels(),
            got: upstream.channels(),
        });
    }
    if points.cubes() != features.cubes() {
        return Err(TrigridError::CubeCountMismatch {
            argument: "points",
            expected: features.cubes(),
            got: points.cubes(),
        });
    }
    if upstream.arena() != features.arena() {
        return Err(TrigridError::ArenaMismatch {
            argument: "upstream",
            expected: features.arena(),
            got: upstream.arena(),
        });
    }
    if points.arena() != features.arena() {
        return Err(TrigridError::ArenaMismatch {
            argument: "points",
            expected: features.arena(),
            got: points.arena(),
        });
    }

    let cfg = LaunchConfig::new(features.cubes(), features.channels());
    let mut grads = CornerField::try_zeroed(cfg.cubes(), cfg.channels(), features.arena())?;
    if cfg.is_empty() {
        return Ok(grads);
    }

    log::debug!(
        "backward dispatch: {} cubes x {} channels, {} tiles",
        cfg.cubes(),
        cfg.channels(),
        cfg.tile_count()
    );

    let channels = cfg.channels();
    // Gradient elements per cube: 8 corners x channels.
    let cube_stride = CORNER_COUNT * channels;
    grads
        .as_mut_slice()
        .par_chunks_mut(TILE_SIZE * cube_stride)
        .enumerate()
        .for_each(|(tile_row, band)| {
            let base_cube = tile_row * TILE_SIZE;
            for tile_col in 0..cfg.channel_tiles() {
                for row in 0..TILE_SIZE {
                    let cube = base_cube + row;
                    for col in 0..TILE_SIZE {
                        let channel = tile_col * TILE_SIZE + col;
                        if !cfg.contains(cube, channel) {
                            continue;
                        }

                        let [px, py, pz] = points.point(cube);
                        let coeffs = cell_coeffs(px, py, pz);
                        let spread = spread_channel_gradient(&coeffs, upstream.get(cube, channel));

                        let base = row * cube_stride + channel;
                        for (corner, grad) in spread.iter().enumerate() {
                            band[base + corner * channels] = *grad;
                        }
                    }
                }
            }
        });

    Ok(grads)
}
