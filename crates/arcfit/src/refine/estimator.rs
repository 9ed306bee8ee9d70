use nalgebra::Vector2;

use crate::estimate::simple_center;
use crate::orientation::orientation;
use crate::types::{ArcFitError, Circle};

use super::config::RefineConfig;
use super::optimizer::{descent_direction, StepControl};
use super::residual::RadialState;
use super::result::RefineResult;

/// Fit a signed circle to an arc with the default refinement schedule.
///
/// Starts from [`simple_center`] and runs three subgradient steps on the
/// L1 radial error. Three-point input is accepted, but the closed-form
/// estimate already passes through all three samples, so
/// [`simple_center`] is the better call there.
pub fn circle_center(points: &[[f64; 2]]) -> Result<Circle, ArcFitError> {
    refine_circle(points, &RefineConfig::default()).map(|r| r.circle)
}

/// Refine the three-point estimate with an explicit configuration.
///
/// Every proposed center is accepted whether or not it lowers the error;
/// only the step size reacts. A sample point landing exactly on an
/// intermediate center yields a non-finite result, which is returned as is.
pub fn refine_circle(
    points: &[[f64; 2]],
    config: &RefineConfig,
) -> Result<RefineResult, ArcFitError> {
    config.validate()?;
    let initial = simple_center(points)?;

    let mut state = RadialState::evaluate(points, Vector2::from(initial.center));
    let initial_l1_error = state.error;
    let mut step = StepControl::new(config.initial_step, config.step_grow, config.step_shrink);

    for iter in 0..config.max_iters {
        let direction = descent_direction(points, &state);
        let proposal = RadialState::evaluate(points, state.center + direction * step.step);
        let improved = proposal.error < state.error;
        tracing::trace!(
            iter,
            step = step.step,
            error = proposal.error,
            improved,
            "refine step"
        );
        step.adapt(improved);
        state = proposal;
    }

    let center = [state.center.x, state.center.y];
    let sign = orientation(points, center)?;
    let circle = Circle {
        center,
        radius: if sign >= 0 { -state.radius } else { state.radius },
    };

    if !circle.is_finite() {
        tracing::warn!(
            "refined circle is not finite ({:?}); a sample likely coincided with the center",
            circle
        );
    } else {
        tracing::debug!(
            "refined circle: center=({:.6}, {:.6}) r={:.6} l1 {:.6} -> {:.6}",
            circle.center[0],
            circle.center[1],
            circle.radius,
            initial_l1_error,
            state.error
        );
    }

    Ok(RefineResult {
        circle,
        initial,
        l1_error: state.error,
        initial_l1_error,
        final_step: step.step,
    })
}
