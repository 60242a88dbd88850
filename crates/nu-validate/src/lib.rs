//! N/U Algebra validation harness
//!
//! Batch generation of the numerical validation datasets:
//! - Addition sweep against Gaussian root-sum-square
//! - Product sweep against first-order Gaussian propagation
//! - Interval relation for non-negative nominals
//! - Chain stability under repeated multiplication
//! - Monte Carlo comparisons across four noise families
//! - Invariant grid for the Catch and Flip operators
//! - Associativity sweep for product nominals
//!
//! Everything is driven from a seeded RNG, so a given
//! [`ValidationConfig`] reproduces its datasets bit for bit.

pub mod config;
pub mod report;
pub mod sweeps;
pub mod table;

pub use config::*;
pub use report::*;
pub use sweeps::*;
pub use table::*;
