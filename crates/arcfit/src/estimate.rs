//! Closed-form three-point circle estimate.
//!
//! Intersects the perpendicular bisectors of the chords `first → last` and
//! `last → middle`. This is an exact circle through three samples, not a
//! least-squares fit, and seeds the iterative refiner.

use nalgebra::Vector2;

use crate::orientation::orientation;
use crate::types::{ensure_min_points, ArcFitError, Circle, NUDGE};

/// Estimate the circle through the first, last and middle (`n / 2`) points.
///
/// Collinear or coincident samples make the bisectors parallel; the
/// determinant is then replaced with [`NUDGE`] so the result is huge but
/// finite instead of NaN.
pub fn simple_center(points: &[[f64; 2]]) -> Result<Circle, ArcFitError> {
    ensure_min_points(points)?;

    let p1 = Vector2::from(points[0]);
    let p2 = Vector2::from(points[points.len() - 1]);
    let p3 = Vector2::from(points[points.len() / 2]);

    // Bisector of p1-p2: midpoint `a`, direction `u` (chord rotated by 90°).
    let a = (p1 + p2) / 2.0;
    let u = Vector2::new(p1.y - p2.y, p2.x - p1.x);
    // Bisector of p2-p3.
    let b = (p2 + p3) / 2.0;
    let v = Vector2::new(p2.y - p3.y, p3.x - p2.x);

    let mut vu = v.perp(&u);
    if vu == 0.0 {
        tracing::debug!(
            "parallel chord bisectors (collinear or coincident points); substituting 2^-46"
        );
        vu = NUDGE;
    }
    let g = (a - b).perp(&u) / vu;
    let center = b + v * g;

    let magnitude = (p1 - center).norm();
    let center = [center.x, center.y];
    let sign = orientation(points, center)?;
    let radius = if sign >= 0 { -magnitude } else { magnitude };

    Ok(Circle { center, radius })
}
