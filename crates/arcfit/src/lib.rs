//! arcfit — signed-radius circle fitting for 2D point chains sampled along an arc.
//!
//! The fit runs in three stages:
//!
//! 1. **Estimate** – closed-form circle through the first, middle and last
//!    samples (perpendicular-bisector intersection).
//! 2. **Refine** – a fixed number of subgradient steps on the L1 radial
//!    error with an adaptive step size.
//! 3. **Orient** – the radius is signed by the side of the chord through the
//!    first and third samples the center falls on, so the sign tells which
//!    way the arc turns.
//!
//! # Public API
//! - [`simple_center`] for the three-point estimate alone
//! - [`circle_center`] for the default refined fit
//! - [`refine_circle`] with [`RefineConfig`] for a custom schedule and
//!   diagnostics in [`RefineResult`]
//!
//! Points are `[x, y]` pairs in any coordinate frame; results are returned in
//! the same frame. Degenerate geometry never fails: collinear input yields a
//! huge finite radius. Only fewer than three points is an error.

mod estimate;
mod orientation;
mod refine;
mod types;

#[cfg(test)]
pub(crate) mod test_utils;

pub use estimate::simple_center;
pub use orientation::{orientation, side_of_chord};
pub use refine::{circle_center, radial_l1_error, refine_circle, RefineConfig, RefineResult};
pub use types::{ArcFitError, Circle, ALIGNMENT_EPSILON, MIN_POINTS, NUDGE};
