// nfctags/src/prelude.rs

pub use crate::device::{NameKind, TagData, TagDevice};
pub use crate::error::{Error, ErrorCode, Result};
pub use crate::format::{Container, TextContainer};
pub use crate::iso14443a::NfcaData;
pub use crate::iso15693::Iso15693Data;
pub use crate::slix::{SlixData, SlixType};
pub use crate::transport::{MockTransport, Transport};
pub use crate::ultralight::{
    EmulationSession, Features, TagType, UltralightData, UltralightListener, UltralightPoller,
};

// Re-export small utilities for convenience
pub use crate::utils::{bytes_to_hex, bytes_to_hex_spaced, parse_hex};
