//! Reference propagation models for validating the N/U algebra
//!
//! Independent implementations of the baselines the validation pipeline
//! compares against:
//! - Gaussian root-sum-square and first-order product propagation
//! - Exact interval arithmetic with four-corner products
//! - Monte Carlo sampling with numerically stable descriptive statistics
//!
//! Nothing here feeds back into the core algebra; each model computes its
//! figure from the raw `(n, u)` components so the comparison stays honest.

pub mod gaussian;
pub mod interval;
pub mod sample;
pub mod stats;

pub use gaussian::*;
pub use interval::*;
pub use sample::*;
pub use stats::*;
