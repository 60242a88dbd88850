//! N/U Algebra Core - conservative uncertainty propagation
//!
//! This crate defines a deterministic algebra over pairs `(n, u)` of a
//! nominal value and a non-negative uncertainty bound:
//! - The [`Nu`] pair type and its construction rule
//! - Primitive operators (add, sub, mul, scalar, affine, negate)
//! - The Catch and Flip involutions and the structural invariant `|n| + u`
//! - Derived queries (bounds, interval, relative uncertainty, sign stability)
//! - Aggregate combinators (cumulative sum/product, weighted mean)
//!
//! Uncertainties always accumulate and never cancel: the propagated bound is
//! a worst-case figure, sitting at or above the Gaussian root-sum-square
//! estimate rather than below it. Every operation is a pure, total function
//! that consumes its operands by value and returns a new pair.

pub mod aggregate;
pub mod error;
pub mod ops;
pub mod pair;

pub use aggregate::*;
pub use error::*;
pub use pair::*;
