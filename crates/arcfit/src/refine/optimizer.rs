//! Subgradient descent direction and adaptive step for the L1 radial error.

use nalgebra::Vector2;

use super::residual::{Partition, RadialState};

/// Blend weight selecting a subgradient of the non-smooth L1 objective.
///
/// `1` when the lower bound is already non-negative, `0` when the upper
/// bound is non-positive, `0.5` when zero lies between them.
pub(super) fn subgradient_weight(minus: f64, plus: f64) -> f64 {
    if minus >= 0.0 {
        1.0
    } else if plus <= 0.0 {
        0.0
    } else {
        0.5
    }
}

#[derive(Debug, Default, Clone, Copy)]
struct DirectionSums {
    inside: f64,
    outside: f64,
    on_circle: f64,
}

impl DirectionSums {
    fn collect(partition: &Partition, values: &[f64]) -> Self {
        let sum = |idx: &[usize]| idx.iter().map(|&i| values[i]).sum::<f64>();
        Self {
            inside: sum(&partition.inside),
            outside: sum(&partition.outside),
            on_circle: sum(&partition.on_circle),
        }
    }

    /// One component of the descent direction.
    fn descent(&self) -> f64 {
        let plus = self.inside - self.outside + self.on_circle.abs();
        let minus = self.inside - self.outside - self.on_circle.abs();
        let w = subgradient_weight(minus, plus);
        -(w * minus + (1.0 - w) * plus)
    }
}

/// Descent direction for the center at `state`.
///
/// Unit vectors from the center to every point are summed per partition.
/// A point sitting exactly on the center divides by zero and poisons the
/// direction with NaN.
pub(super) fn descent_direction(points: &[[f64; 2]], state: &RadialState) -> Vector2<f64> {
    let partition = Partition::split(&state.distances, state.radius);

    let (cosines, sines): (Vec<f64>, Vec<f64>) = points
        .iter()
        .zip(&state.distances)
        .map(|(p, &d)| ((p[0] - state.center.x) / d, (p[1] - state.center.y) / d))
        .unzip();

    let along_x = DirectionSums::collect(&partition, &cosines);
    let along_y = DirectionSums::collect(&partition, &sines);

    Vector2::new(along_x.descent(), along_y.descent())
}

/// Multiplicative step-size schedule.
#[derive(Debug, Clone, Copy)]
pub(super) struct StepControl {
    pub step: f64,
    grow: f64,
    shrink: f64,
}

impl StepControl {
    pub fn new(initial: f64, grow: f64, shrink: f64) -> Self {
        Self {
            step: initial,
            grow,
            shrink,
        }
    }

    /// Grow after an improving move, shrink otherwise.
    pub fn adapt(&mut self, improved: bool) {
        self.step *= if improved { self.grow } else { self.shrink };
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn weight_selection() {
        assert_eq!(subgradient_weight(0.0, 2.0), 1.0);
        assert_eq!(subgradient_weight(0.5, 2.0), 1.0);
        assert_eq!(subgradient_weight(-2.0, 0.0), 0.0);
        assert_eq!(subgradient_weight(-2.0, -1.0), 0.0);
        assert_eq!(subgradient_weight(-1.0, 1.0), 0.5);
    }

    #[test]
    fn on_circle_only_cancels() {
        // All points equidistant: every index is on the circle and the
        // subgradient interval straddles zero.
        let sums = DirectionSums {
            inside: 0.0,
            outside: 0.0,
            on_circle: 0.75,
        };
        assert_relative_eq!(sums.descent(), 0.0);
    }

    #[test]
    fn displaced_center_points_back() {
        let pts = [[10.0, 0.0], [0.0, 10.0], [-10.0, 0.0], [0.0, -10.0]];
        let state = RadialState::evaluate(&pts, Vector2::new(0.5, 0.0));
        let d = descent_direction(&pts, &state);
        assert!(d.x < 0.0, "expected pull toward -x, got {:?}", d);
        assert_relative_eq!(d.y, 0.0, epsilon = 1e-12);
    }

    #[test]
    fn point_on_center_gives_nan() {
        let pts = [[0.0, 0.0], [1.0, 0.0], [0.0, 1.0]];
        let state = RadialState::evaluate(&pts, Vector2::zeros());
        let d = descent_direction(&pts, &state);
        assert!(d.x.is_nan() || d.y.is_nan());
    }

    #[test]
    fn step_schedule() {
        let mut s = StepControl::new(0.001, 1.1, 0.9);
        s.adapt(true);
        assert_relative_eq!(s.step, 0.0011, epsilon = 1e-15);
        s.adapt(false);
        assert_relative_eq!(s.step, 0.00099, epsilon = 1e-15);
    }
}
