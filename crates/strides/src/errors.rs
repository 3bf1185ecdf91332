use std::num::ParseIntError;

use thiserror::Error;

/// Failure to read a duration expression such as `1h30m0s`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DurationError {
    #[error("empty duration")]
    Empty,

    #[error("invalid duration {0:?}: expected a number")]
    MissingNumber(String),

    #[error("missing unit in duration {0:?}")]
    MissingUnit(String),

    #[error("unknown unit {unit:?} in duration {input:?}")]
    UnknownUnit { unit: String, input: String },

    #[error("duration {0:?} is out of range")]
    Overflow(String),
}

/// Errors raised while splitting a record into typed fields.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("malformed record: expected {expected} fields, got {actual}")]
    FieldCount { expected: usize, actual: usize },

    #[error("invalid step count: {0}")]
    Steps(#[from] ParseIntError),

    #[error("negative step count ({0})")]
    NegativeSteps(i64),

    #[error("invalid duration: {0}")]
    Duration(#[from] DurationError),
}

/// Inputs the formulas refuse to work with.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    #[error("invalid step count ({0})")]
    Steps(u64),

    #[error("invalid weight ({0:.2})")]
    Weight(f64),

    #[error("invalid height ({0:.2})")]
    Height(f64),

    #[error("invalid duration ({0})")]
    Duration(String),

    #[error("negative duration ({0})")]
    NegativeDuration(String),
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("unknown activity type ({0})")]
    UnknownActivity(String),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
