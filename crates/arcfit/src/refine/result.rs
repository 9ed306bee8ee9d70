use serde::{Deserialize, Serialize};

use crate::types::Circle;

/// Result of iterative center refinement.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RefineResult {
    /// Refined circle; the radius is the mean point distance, signed.
    pub circle: Circle,
    /// Three-point circle the refinement started from.
    pub initial: Circle,
    /// L1 radial error at the refined center.
    pub l1_error: f64,
    /// L1 radial error at the starting center, against its mean distance.
    pub initial_l1_error: f64,
    /// Step size after the last adaptation.
    pub final_step: f64,
}
