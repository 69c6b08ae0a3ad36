//! Error types shared by every algebraic structure in the crate.

use thiserror::Error;

/// Result alias used throughout the library.
pub type AlgebraResult<T> = Result<T, AlgebraError>;

/// Failures raised by ring and field operations.
///
/// Absent values (an element without a multiplicative inverse, the zero
/// polynomial's degree) are not errors: they are reported through `Option`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AlgebraError {
    /// A prime field was requested with an order of one or less.
    #[error("invalid construction: field order must be greater than 1, got {0}")]
    InvalidConstruction(u64),

    /// The divisor of a modulo or division has no norm (it is zero).
    #[error("division by zero")]
    DivisionByZero,

    /// A factor set or factor ring was requested over the zero element.
    #[error("factorization by zero")]
    FactorizationByZero,

    /// Polynomial division needs the inverse of the divisor's leading
    /// coefficient, but the coefficient structure has none.
    #[error("leading coefficient {0} has no multiplicative inverse")]
    NotInvertible(String),

    /// The factor ring would exceed the configured order limit.
    #[error("factor ring order {order} exceeds the limit of {limit}")]
    OrderLimitExceeded { order: usize, limit: usize },

    /// The order of the requested structure does not fit in a `usize`.
    #[error("structure order overflows the platform integer width")]
    OrderOverflow,

    /// A reduced residue could not be located among the enumerated elements.
    #[error("residue {0} is not among the enumerated elements")]
    ResidueNotFound(String),

    /// The tables do not contain an additive identity or an opposite.
    #[error("degenerate table: {0}")]
    DegenerateTable(&'static str),

    /// JSON encoding or decoding failed.
    #[error("serialization error: {0}")]
    Serialization(String),

    /// Reading a configuration file failed.
    #[error("io error: {0}")]
    Io(String),
}

impl From<serde_json::Error> for AlgebraError {
    fn from(err: serde_json::Error) -> Self {
        AlgebraError::Serialization(err.to_string())
    }
}

impl From<std::io::Error> for AlgebraError {
    fn from(err: std::io::Error) -> Self {
        AlgebraError::Io(err.to_string())
    }
}
