//! Error types and result alias for the crate.
//!
//! This module defines [`enum@crate::error::Error`] and the crate-wide [Result] alias.
//! Every variant describes a construction-time failure: a stream is either built from
//! valid parameters or not built at all. Running out of points is never an error and is
//! signalled by the stream returning `None`.
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[non_exhaustive]
#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    #[error("hilbert distance {distance} exceeds curve length {max}")]
    DistanceOutOfRange { distance: u64, max: u64 },

    #[error("hilbert size {size} is too large to address")]
    SizeOverflow { size: u64 },

    #[error("{0}")]
    Other(String),
}

impl Error {
    pub(crate) fn invalid(message: impl Into<String>) -> Self {
        Error::InvalidParameter(message.into())
    }
}

impl From<String> for Error {
    fn from(value: String) -> Self {
        Error::Other(value)
    }
}

impl From<&str> for Error {
    fn from(value: &str) -> Self {
        Error::Other(value.to_owned())
    }
}
