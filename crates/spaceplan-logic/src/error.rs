//! Errors raised while validating a program or resolving a policy key.

use thiserror::Error;

/// Space programming error.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SpaceError {
    /// Remote-work policy key is not one of the six known policies.
    #[error("unknown remote work policy `{0}`")]
    InvalidPolicyKey(String),

    /// Program has no departments to calculate.
    #[error("add at least one department before calculating")]
    EmptyProgram,

    /// A factor or area was supplied as a negative number.
    #[error("{field} must not be negative (got {value})")]
    NegativeCount { field: String, value: f64 },

    /// A factor or area is NaN or infinite.
    #[error("{field} must be a finite number")]
    NonFiniteValue { field: String },
}
