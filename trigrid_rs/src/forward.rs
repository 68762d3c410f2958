//! Forward interpolation dispatch.
//!
//! Evaluates one unit of work per (cube, channel) pair: each unit re-derives
//! its cube's coefficient quadruple from the raw query point, blends the 8
//! corner values of its channel, and writes exactly one output element.
//! Units share nothing and never synchronize.

use rayon::prelude::*;

use trigrid_core::interpolation::{cell_coeffs, interpolate_channel};
use trigrid_core::Scalar;

use crate::buffer::{ChannelField, CornerField, QueryPoints};
use crate::error::{Result, TrigridError};
use crate::launch::{LaunchConfig, TILE_SIZE};

/// Interpolate each cube's corner features at its query point.
///
/// Returns a freshly allocated (cubes, channels) output field on the same
/// arena as the inputs. Shape and arena consistency are checked before any
/// work is dispatched; the per-element arithmetic itself is total, and
/// points outside [-1, 1]^3 extrapolate.
pub fn forward<T: Scalar>(
    features: &CornerField<T>,
    points: &QueryPoints<T>,
) -> Result<ChannelField<T>> {
    if points.cubes() != features.cubes() {
        return Err(TrigridError::CubeCountMismatch {
            argument: "points",
            expected: features.cubes(),
            got: points.cubes(),
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
    let mut output = ChannelField::try_zeroed(cfg.cubes(), cfg.channels(), features.arena())?;
    if cfg.is_empty() {
        return Ok(output);
    }

    log::debug!(
        "forward dispatch: {} cubes x {} channels, {} tiles",
        cfg.cubes(),
        cfg.channels(),
        cfg.tile_count()
    );

    let channels = cfg.channels();
    output
        .as_mut_slice()
        .par_chunks_mut(TILE_SIZE * channels)
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
                        let corners = features.corner_column(cube, channel);
                        band[row * channels + channel] = interpolate_channel(&coeffs, corners);
                    }
                }
            }
        });

    Ok(output)
}
