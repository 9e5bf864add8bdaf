// nfctags/src/error.rs

use thiserror::Error;

/// Crate-wide error type.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("tag not present")]
    NotPresent,

    #[error("protocol error: {0}")]
    Protocol(String),

    #[error("authentication rejected")]
    Auth,

    #[error("operation timed out")]
    Timeout,

    #[error("emulation already active")]
    Busy,

    #[error("emulation not started")]
    NotStarted,

    #[error("invalid length: expected {expected}, got {actual}")]
    InvalidLength { expected: usize, actual: usize },

    #[error("index {index} out of range (max {max})")]
    IndexOutOfRange { index: usize, max: usize },

    #[error("persisted format error: {0}")]
    Format(String),
}

pub type Result<T> = std::result::Result<T, Error>;

/// Closed error taxonomy carried on the RPC wire.
///
/// Session operations report exactly one of these codes. Anything the crate
/// can produce outside the closed set degrades to `Timeout`; that conflates
/// "no response" with lifecycle misuse and is kept for wire compatibility.
/// Rust callers keep the precise [`Error`] variant.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    None = 0,
    NotPresent,
    Protocol,
    Auth,
    Timeout,
}

impl From<&Error> for ErrorCode {
    fn from(err: &Error) -> Self {
        match err {
            Error::NotPresent => ErrorCode::NotPresent,
            Error::Protocol(_) => ErrorCode::Protocol,
            Error::Auth => ErrorCode::Auth,
            Error::Timeout => ErrorCode::Timeout,
            _ => ErrorCode::Timeout,
        }
    }
}

impl ErrorCode {
    /// Project an operation result onto the wire taxonomy.
    pub fn capture<T>(result: &Result<T>) -> Self {
        match result {
            Ok(_) => ErrorCode::None,
            Err(err) => ErrorCode::from(err),
        }
    }
}
