//! Engine errors

use thiserror::Error;

/// Errors raised by the arena engine
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ArenaError {
    #[error("Invalid value for {field}: {value}")]
    InvalidArgument { field: &'static str, value: i64 },
    #[error("Team '{0}' has no heroes")]
    EmptyRoster(String),
    #[error("Random source failure: {0}")]
    RandomSource(String),
}

pub type Result<T> = std::result::Result<T, ArenaError>;

/// Validate a non-negative construction value and narrow it to `u32`
pub(crate) fn non_negative(field: &'static str, value: i64) -> Result<u32> {
    u32::try_from(value).map_err(|_| ArenaError::InvalidArgument { field, value })
}

/// Validate a strictly positive construction value and narrow it to `u32`
pub(crate) fn positive(field: &'static str, value: i64) -> Result<u32> {
    match non_negative(field, value)? {
        0 => Err(ArenaError::InvalidArgument { field, value }),
        v => Ok(v),
    }
}
