//! The propagation procedures, factored into:
//!
//! - [Clause propagation](crate::procedures::propagate): generalized unit propagation of a single clause.
//! - [Fixed-point scheduling](crate::procedures::solve): driving clause propagation to global quiescence.

pub mod propagate;
pub mod solve;
