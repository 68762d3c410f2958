//! Edge-of-domain behavior: partial tiles, batch independence, and
//! extrapolation outside the nominal query domain.

use trigrid_core::{cell_coeffs, interpolate_channel, CORNER_COUNT};
use trigrid_rs::{backward, forward, Arena, ChannelField, CornerField, QueryPoints, TILE_SIZE};

fn simple_rand(seed: u64, index: usize) -> f32 {
    let mut x = seed.wrapping_add(index as u64).wrapping_mul(6364136223846793005);
    x ^= x >> 33;
    x = x.wrapping_mul(0xff51afd7ed558ccd);
    x ^= x >> 33;
    (x % 100_000) as f32 / 100_000.0
}

fn make_batch(cubes: usize, channels: usize, seed: u64) -> (CornerField<f32>, QueryPoints<f32>) {
    let features: Vec<f32> = (0..cubes * CORNER_COUNT * channels)
        .map(|i| simple_rand(seed, i) * 4.0 - 2.0)
        .collect();
    let points: Vec<f32> = (0..cubes * 3)
        .map(|i| simple_rand(seed + 1, i) * 2.0 - 1.0)
        .collect();

    (
        CornerField::from_vec(features, cubes, channels, Arena::HOST).unwrap(),
        QueryPoints::from_vec(points, cubes, Arena::HOST).unwrap(),
    )
}

fn reference_element(
    features: &CornerField<f32>,
    points: &QueryPoints<f32>,
    cube: usize,
    channel: usize,
) -> f32 {
    let [px, py, pz] = points.point(cube);
    let coeffs = cell_coeffs(px, py, pz);
    let mut corners = [0.0f32; CORNER_COUNT];
    for (corner, value) in corners.iter_mut().enumerate() {
        *value = features.get(cube, corner, channel);
    }
    interpolate_channel(&coeffs, corners)
}

/// Sizes straddling the tile boundary: every element must be produced by
/// exactly one unit of work, including the partial edge tiles.
#[test]
fn partial_tiles_cover_every_element() {
    let sizes = [
        (1, 1),
        (TILE_SIZE, TILE_SIZE),
        (TILE_SIZE - 1, TILE_SIZE + 1),
        (TILE_SIZE + 1, 5),
        (2 * TILE_SIZE + 7, 3 * TILE_SIZE + 1),
    ];

    for (cubes, channels) in sizes {
        let (features, points) = make_batch(cubes, channels, cubes as u64);
        let output = forward(&features, &points).unwrap();

        assert_eq!(output.as_slice().len(), cubes * channels);
        for cube in 0..cubes {
            for channel in 0..channels {
                let expected = reference_element(&features, &points, cube, channel);
                assert_eq!(
                    output.get(cube, channel),
                    expected,
                    "size ({}, {}) element ({}, {})",
                    cubes,
                    channels,
                    cube,
                    channel
                );
            }
        }
    }
}

/// Backward covers partial tiles the same way: every gradient row written,
/// none doubled.
#[test]
fn partial_tiles_cover_every_gradient() {
    let cubes = TILE_SIZE + 3;
    let channels = TILE_SIZE + 2;
    let (features, points) = make_batch(cubes, channels, 5);
    let upstream = ChannelField::from_vec(
        vec![1.0f32; cubes * channels],
        cubes,
        channels,
        Arena::HOST,
    )
    .unwrap();

    let grads = backward(&upstream, &features, &points).unwrap();
    assert_eq!(grads.as_slice().len(), cubes * CORNER_COUNT * channels);

    // With unit upstream, each (cube, ·, channel) column holds the corner
    // weights and sums to one.
    for cube in 0..cubes {
        for channel in 0..channels {
            let total: f32 = (0..CORNER_COUNT)
                .map(|corner| grads.get(cube, corner, channel))
                .sum();
            assert!(
                (total - 1.0).abs() < 1e-5,
                "cube {} channel {}: column sums to {}",
                cube,
                channel,
                total
            );
        }
    }
}

/// Changing one cube's inputs must not disturb any other cube's output or
/// gradient.
#[test]
fn cubes_are_independent() {
    let cubes = 9;
    let channels = 4;
    let (features, points) = make_batch(cubes, channels, 21);
    let upstream = ChannelField::from_vec(
        (0..cubes * channels).map(|i| i as f32 * 0.1).collect(),
        cubes,
        channels,
        Arena::HOST,
    )
    .unwrap();

    let base_out = forward(&features, &points).unwrap();
    let base_grads = backward(&upstream, &features, &points).unwrap();

    // Perturb cube 3's features and point.
    let victim = 3;
    let mut feat_data = features.as_slice().to_vec();
    for channel in 0..channels {
        for corner in 0..CORNER_COUNT {
            feat_data[(victim * CORNER_COUNT + corner) * channels + channel] = 99.0;
        }
    }
    let mut point_data = points.as_slice().to_vec();
    point_data[victim * 3] = 0.77;

    let features2 = CornerField::from_vec(feat_data, cubes, channels, Arena::HOST).unwrap();
    let points2 = QueryPoints::from_vec(point_data, cubes, Arena::HOST).unwrap();

    let out2 = forward(&features2, &points2).unwrap();
    let grads2 = backward(&upstream, &features2, &points2).unwrap();

    for cube in (0..cubes).filter(|&c| c != victim) {
        for channel in 0..channels {
            assert_eq!(
                base_out.get(cube, channel),
                out2.get(cube, channel),
                "output leak into cube {}",
                cube
            );
            for corner in 0..CORNER_COUNT {
                assert_eq!(
                    base_grads.get(cube, corner, channel),
                    grads2.get(cube, corner, channel),
                    "gradient leak into cube {}",
                    cube
                );
            }
        }
    }

    // And the perturbed cube did change.
    assert_ne!(base_out.get(victim, 0), out2.get(victim, 0));
}

/// Query points outside [-1, 1]^3 extrapolate through the same formula: no
/// error, no clamping, and constants are still reproduced because the
/// weights keep summing to one.
#[test]
fn out_of_range_points_extrapolate() {
    let features = CornerField::from_vec(vec![2.5f32; CORNER_COUNT], 1, 1, Arena::HOST).unwrap();
    let far = QueryPoints::from_vec(vec![3.0, -4.0, 10.0], 1, Arena::HOST).unwrap();

    let output = forward(&features, &far).unwrap();
    assert!((output.get(0, 0) - 2.5).abs() < 1e-4);

    // A non-constant cube extrapolates linearly past the face: u = 1.5 on
    // the 0-to-1 face pair overshoots to 1.5.
    let ramp = CornerField::from_vec(
        vec![0.0f32, 0.0, 0.0, 0.0, 1.0, 1.0, 1.0, 1.0],
        1,
        1,
        Arena::HOST,
    )
    .unwrap();
    let beyond = QueryPoints::from_vec(vec![2.0, -1.0, -1.0], 1, Arena::HOST).unwrap();

    let output = forward(&ramp, &beyond).unwrap();
    assert!((output.get(0, 0) - 1.5).abs() < 1e-5);
}
