//! Shared point-chain generators for unit tests.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Sample `n` points on a circle from angle `a0` to `a1` (radians),
/// endpoints included, in traversal order.
pub(crate) fn sample_arc(
    center: [f64; 2],
    radius: f64,
    a0: f64,
    a1: f64,
    n: usize,
) -> Vec<[f64; 2]> {
    (0..n)
        .map(|k| {
            let t = a0 + (a1 - a0) * k as f64 / (n - 1) as f64;
            [center[0] + radius * t.cos(), center[1] + radius * t.sin()]
        })
        .collect()
}

/// `n` evenly spaced points on a full circle, starting at angle 0.
pub(crate) fn sample_full_circle(center: [f64; 2], radius: f64, n: usize) -> Vec<[f64; 2]> {
    (0..n)
        .map(|k| {
            let t = std::f64::consts::TAU * k as f64 / n as f64;
            [center[0] + radius * t.cos(), center[1] + radius * t.sin()]
        })
        .collect()
}

/// Add uniform noise in `[-amplitude, amplitude]` to both coordinates.
pub(crate) fn jitter(points: &mut [[f64; 2]], amplitude: f64, seed: u64) {
    let mut rng = StdRng::seed_from_u64(seed);
    for p in points.iter_mut() {
        p[0] += rng.gen_range(-amplitude..amplitude);
        p[1] += rng.gen_range(-amplitude..amplitude);
    }
}
