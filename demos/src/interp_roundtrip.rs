//! Forward + backward round trip over a synthetic feature grid.
//!
//! Builds a batch of cubes with random corner features, interpolates them at
//! random query points, then pushes a random upstream gradient back onto the
//! corners, reporting timings and a couple of sanity invariants.
//!
//! ```bash
//! cargo run --release --bin interp_roundtrip
//! cargo run --release --bin interp_roundtrip -- --large
//! ```

use std::env;

use instant::Instant;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use trigrid_core::CORNER_COUNT;
use trigrid_rs::{backward, forward, Arena, ChannelField, CornerField, QueryPoints};

struct DemoConfig {
    cubes: usize,
    channels: usize,
    iterations: usize,
}

impl DemoConfig {
    fn small() -> Self {
        Self {
            cubes: 10_000,
            channels: 16,
            iterations: 20,
        }
    }

    fn large() -> Self {
        Self {
            cubes: 200_000,
            channels: 32,
            iterations: 10,
        }
    }
}

fn main() {
    env_logger::init();

    let config = if env::args().any(|a| a == "--large") {
        DemoConfig::large()
    } else {
        DemoConfig::small()
    };

    println!(
        "trigrid round trip: {} cubes x {} channels, {} iterations",
        config.cubes, config.channels, config.iterations
    );

    let mut rng = StdRng::seed_from_u64(1234);
    let features: Vec<f32> = (0..config.cubes * CORNER_COUNT * config.channels)
        .map(|_| rng.gen_range(-1.0..1.0))
        .collect();
    let points: Vec<f32> = (0..config.cubes * 3)
        .map(|_| rng.gen_range(-1.0..1.0))
        .collect();
    let upstream: Vec<f32> = (0..config.cubes * config.channels)
        .map(|_| rng.gen_range(-1.0..1.0))
        .collect();

    let features =
        CornerField::from_vec(features, config.cubes, config.channels, Arena::HOST).unwrap();
    let points = QueryPoints::from_vec(points, config.cubes, Arena::HOST).unwrap();
    let upstream =
        ChannelField::from_vec(upstream, config.cubes, config.channels, Arena::HOST).unwrap();

    // Forward timing.
    let start = Instant::now();
    let mut output = forward(&features, &points).unwrap();
    for _ in 1..config.iterations {
        output = forward(&features, &points).unwrap();
    }
    let per_call = start.elapsed().as_secs_f64() / config.iterations as f64;
    println!(
        "forward:  {:.3} ms/call ({:.1} M elements/s)",
        per_call * 1e3,
        (config.cubes * config.channels) as f64 / per_call / 1e6
    );

    // Backward timing.
    let start = Instant::now();
    let mut grads = backward(&upstream, &features, &points).unwrap();
    for _ in 1..config.iterations {
        grads = backward(&upstream, &features, &points).unwrap();
    }
    let per_call = start.elapsed().as_secs_f64() / config.iterations as f64;
    println!(
        "backward: {:.3} ms/call ({:.1} M elements/s)",
        per_call * 1e3,
        (config.cubes * config.channels) as f64 / per_call / 1e6
    );

    // Sanity: interpolated values stay inside the corner hull for in-range
    // points, and each gradient column sums to its upstream value.
    let max_abs = output
        .as_slice()
        .iter()
        .fold(0.0f32, |m, v| m.max(v.abs()));
    println!("max |output| = {:.4} (corner features bounded by 1)", max_abs);

    let cube = 0;
    let channel = 0;
    let column_sum: f32 = (0..CORNER_COUNT)
        .map(|corner| grads.get(cube, corner, channel))
        .sum();
    println!(
        "gradient column (0, ·, 0) sums to {:.6}, upstream was {:.6}",
        column_sum,
        upstream.get(cube, channel)
    );
}
