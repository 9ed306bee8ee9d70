use serde::{Deserialize, Serialize};

use crate::types::ArcFitError;

/// Configuration for iterative center refinement.
///
/// The defaults are the fixed schedule [`circle_center`](super::circle_center)
/// runs with; changing any of them changes fitted results.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RefineConfig {
    /// Number of refinement steps. There is no convergence test; exactly
    /// this many steps are taken.
    pub max_iters: usize,
    /// Step size applied to the first descent direction.
    pub initial_step: f64,
    /// Step multiplier after a step that lowered the L1 error.
    pub step_grow: f64,
    /// Step multiplier after a step that did not lower the L1 error.
    pub step_shrink: f64,
}

impl Default for RefineConfig {
    fn default() -> Self {
        Self {
            max_iters: 3,
            initial_step: 0.001,
            step_grow: 1.1,
            step_shrink: 0.9,
        }
    }
}

impl RefineConfig {
    /// Check that every step parameter is finite and strictly positive.
    pub fn validate(&self) -> Result<(), ArcFitError> {
        let fields = [
            ("initial_step", self.initial_step),
            ("step_grow", self.step_grow),
            ("step_shrink", self.step_shrink),
        ];
        for (name, value) in fields {
            if !value.is_finite() || value <= 0.0 {
                return Err(ArcFitError::InvalidConfig {
                    reason: format!("{} must be finite and > 0, got {}", name, value),
                });
            }
        }
        Ok(())
    }
}
