//! Small helpers shared across the crate, mostly hex rendering/parsing for
//! the persisted text format and debug logging.

pub mod hex;

pub use hex::*;
