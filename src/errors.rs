use std::{
    error::Error,
    fmt::{Debug, Display},
};
use thiserror::Error;

/// Trait for checking invariants in datastructures
pub trait InvariantCheck<E: Error> {
    fn is_correct(&self) -> Result<(), E>;
}

/// Broken internal invariants of a solver. These indicate a bug in the search, never bad input,
/// and the solvers turn them into panics.
#[derive(Debug, Error)]
pub enum InvariantViolation<N: Debug + Display> {
    #[error("best solution has cost {cost} which exceeds the bound {bound}")]
    CostExceedsBound { cost: N, bound: N },

    #[error("best solution decides {found} items, but the instance has {expected}")]
    LengthMismatch { expected: usize, found: usize },
}
