//! Errors shared by every module of the crate.
//!
//! Business failures (a rejected deposit, a missing CSV field, a zero
//! divisor) and the I/O errors they can wrap live in one
//! enum so callers can match on what went wrong.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("amount must be positive")]
    AmountMustBePositive,
    #[error("insufficient funds")]
    InsufficientFunds,
    #[error("missing field `{0}`")]
    MissingField(&'static str),
    #[error("cannot compute")]
    CannotCompute,
    #[error("stride must be greater than zero")]
    InvalidStride,
    #[error("worker {0} panicked")]
    WorkerPanicked(String),
    #[error("invalid value {value:?} for {key}")]
    InvalidConfig { key: &'static str, value: String },
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
