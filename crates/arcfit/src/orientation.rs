//! Side-of-chord classification used to sign fitted radii.

use crate::types::{ensure_min_points, ArcFitError, ALIGNMENT_EPSILON};

/// Classify which side of the leading chord `points[0] → points[2]` the
/// point `c` lies on.
///
/// The chord spans the first three samples, so it stays on one side of the
/// center however far the arc wraps. Returns `+1` or `-1` for the two
/// half-planes (oriented by the chord direction) and `0` when `c` lies
/// exactly on the chord line.
pub fn orientation(points: &[[f64; 2]], c: [f64; 2]) -> Result<i8, ArcFitError> {
    ensure_min_points(points)?;
    Ok(side_of_chord(points[0], points[2], c))
}

/// Classify `c` against the directed line `a → b`.
///
/// Near-vertical and near-horizontal chords (within [`ALIGNMENT_EPSILON`])
/// compare a single coordinate; everything else evaluates the line equation
/// at `c.x`.
pub fn side_of_chord(a: [f64; 2], b: [f64; 2], c: [f64; 2]) -> i8 {
    let [ax, ay] = a;
    let [bx, by] = b;
    let [cx, cy] = c;

    if (ax - bx).abs() < ALIGNMENT_EPSILON {
        if cx < bx {
            return if by > ay { 1 } else { -1 };
        }
        if cx > bx {
            return if by > ay { -1 } else { 1 };
        }
        return 0;
    }

    if (ay - by).abs() < ALIGNMENT_EPSILON {
        if cy < by {
            return if bx > ax { -1 } else { 1 };
        }
        if cy > by {
            return if bx > ax { 1 } else { -1 };
        }
        return 0;
    }

    let slope = (by - ay) / (bx - ax);
    let y_intercept = ay - ax * slope;
    let c_solution = slope * cx + y_intercept;
    // A chord run that overflows to infinity still yields a zero slope here.
    if slope == 0.0 {
        return 0;
    }
    if cy > c_solution {
        return if bx > ax { 1 } else { -1 };
    }
    if cy < c_solution {
        return if bx > ax { -1 } else { 1 };
    }
    0
}
