//! Iterative center refinement on the L1 radial error.
//!
//! Starting from the three-point estimate, each step partitions the samples
//! into inside / outside / on-circle sets against the mean radius, sums the
//! unit directions from the center per set, and moves the center along a
//! subgradient of
//!
//!   E(c) = Σ | |pᵢ − c| − r̄(c) |
//!
//! with a step that grows ×1.1 after an improvement and shrinks ×0.9
//! otherwise. Moves are never rejected.

mod config;
mod estimator;
mod optimizer;
mod residual;
mod result;

pub use config::RefineConfig;
pub use estimator::{circle_center, refine_circle};
pub use residual::radial_l1_error;
pub use result::RefineResult;
