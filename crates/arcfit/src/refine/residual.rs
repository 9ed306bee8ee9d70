//! Radial residuals of a point chain against a candidate center.

use nalgebra::Vector2;

/// Distances, mean radius and L1 error for one candidate center.
#[derive(Debug, Clone)]
pub(super) struct RadialState {
    pub center: Vector2<f64>,
    pub distances: Vec<f64>,
    pub radius: f64,
    pub error: f64,
}

impl RadialState {
    pub fn evaluate(points: &[[f64; 2]], center: Vector2<f64>) -> Self {
        let distances = radial_distances(points, center);
        let radius = distances.iter().sum::<f64>() / points.len() as f64;
        let error = l1_error(&distances, radius);
        Self {
            center,
            distances,
            radius,
            error,
        }
    }
}

/// Point indices split by their distance against a radius.
#[derive(Debug, Default, Clone, PartialEq)]
pub(super) struct Partition {
    pub inside: Vec<usize>,
    pub outside: Vec<usize>,
    pub on_circle: Vec<usize>,
}

impl Partition {
    /// Strict `<` / `>` / `==` split of `distances` against `radius`.
    pub fn split(distances: &[f64], radius: f64) -> Self {
        let mut out = Self::default();
        for (i, &d) in distances.iter().enumerate() {
            if d < radius {
                out.inside.push(i);
            } else if d > radius {
                out.outside.push(i);
            } else {
                out.on_circle.push(i);
            }
        }
        out
    }
}

pub(super) fn radial_distances(points: &[[f64; 2]], center: Vector2<f64>) -> Vec<f64> {
    points
        .iter()
        .map(|p| {
            let dx = p[0] - center.x;
            let dy = p[1] - center.y;
            (dx * dx + dy * dy).sqrt()
        })
        .collect()
}

pub(super) fn l1_error(distances: &[f64], radius: f64) -> f64 {
    distances.iter().map(|d| (d - radius).abs()).sum()
}

/// Sum of absolute radial deviations `Σ | |p − center| − |radius| |`.
///
/// Scores any circle against a point chain with the same metric the
/// refiner minimizes. The radius sign is ignored.
pub fn radial_l1_error(points: &[[f64; 2]], center: [f64; 2], radius: f64) -> f64 {
    l1_error(&radial_distances(points, Vector2::from(center)), radius.abs())
}
