//! Error types for the vector math layer.

/// Failures surfaced by [`Vector2`](crate::types::Vector2) arithmetic.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum VectorError {
    #[error("division of a vector by a zero scalar")]
    DivisionByZero,
}
