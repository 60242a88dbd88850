//! Error types for N/U aggregate combinators

use thiserror::Error;

/// Errors reported by the aggregate combinators.
///
/// The primitive operators are total and never fail; only the combinators
/// that divide by a weight total have error cases.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum NuError {
    #[error("empty sequence: at least one pair is required")]
    EmptySequence,

    #[error("weight count mismatch: {pairs} pairs, {weights} weights")]
    WeightCountMismatch { pairs: usize, weights: usize },

    #[error("total weight must be positive, got {0}")]
    NonPositiveWeight(f64),
}

/// Result type for N/U operations
pub type NuResult<T> = Result<T, NuError>;
