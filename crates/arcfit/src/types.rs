//! Core circle type, error type and shared numeric constants.

use serde::{Deserialize, Serialize};

/// Minimum number of points any fit accepts.
pub const MIN_POINTS: usize = 3;

/// Denominator substituted when the two chord bisectors are parallel
/// (collinear or coincident input). Equals 2⁻⁴⁶.
pub const NUDGE: f64 = 1.0 / 70_368_744_177_664.0;

/// Alignment threshold used by the orientation test: 64 machine epsilons.
pub const ALIGNMENT_EPSILON: f64 = 64.0 * f64::EPSILON;

// ── Error type ─────────────────────────────────────────────────────────────

/// Errors that can occur during arc fitting.
#[derive(Debug, Clone, PartialEq)]
pub enum ArcFitError {
    /// Too few points for the requested operation.
    TooFewPoints {
        /// Required minimum number of points.
        needed: usize,
        /// Provided number of points.
        got: usize,
    },
    /// Refinement configuration cannot drive the optimizer.
    InvalidConfig {
        /// Which field is out of range and why.
        reason: String,
    },
}

impl std::fmt::Display for ArcFitError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::TooFewPoints { needed, got } => {
                write!(f, "too few points: need {}, got {}", needed, got)
            }
            Self::InvalidConfig { reason } => write!(f, "invalid refine config: {}", reason),
        }
    }
}

impl std::error::Error for ArcFitError {}

pub(crate) fn ensure_min_points(points: &[[f64; 2]]) -> Result<(), ArcFitError> {
    if points.len() < MIN_POINTS {
        return Err(ArcFitError::TooFewPoints {
            needed: MIN_POINTS,
            got: points.len(),
        });
    }
    Ok(())
}

// ── Circle ─────────────────────────────────────────────────────────────────

/// Circle with a signed radius.
///
/// The sign encodes which side of the chord from the first to the third
/// sample the fitted center lies on: a center on the positive side of that
/// chord (or on the chord itself) yields a negative radius. For an arc
/// traversed counter-clockwise this makes the radius negative, clockwise
/// positive, regardless of how far the arc wraps.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Circle {
    /// Center `[x, y]` in the caller's coordinate frame.
    pub center: [f64; 2],
    /// Signed radius; `radius.abs()` is the Euclidean radius.
    pub radius: f64,
}

impl Circle {
    /// Euclidean radius.
    pub fn magnitude(&self) -> f64 {
        self.radius.abs()
    }

    /// Signed curvature `1 / radius`.
    ///
    /// Collinear input produces a huge radius and therefore a curvature
    /// close to zero, which is the usual reading of a straight chain.
    pub fn curvature(&self) -> f64 {
        1.0 / self.radius
    }

    /// True when center and radius are all finite.
    pub fn is_finite(&self) -> bool {
        self.center[0].is_finite() && self.center[1].is_finite() && self.radius.is_finite()
    }
}
