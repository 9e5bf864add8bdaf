// nfctags/src/iso15693/mod.rs

//! Vicinity (ISO15693-3) base record.
//!
//! UIDs are a fixed 8 bytes, stored MSB first: byte 0 is always `0xE0`,
//! byte 1 carries the IC manufacturer code, the remainder identifies the chip.

use crate::format::Container;
use crate::{Error, Result};

/// ISO15693 UID length in bytes
pub const UID_SIZE: usize = 8;

const UID_KEY: &str = "UID";

/// Vicinity base record.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Iso15693Data {
    uid: [u8; UID_SIZE],
}

impl Iso15693Data {
    pub fn new() -> Self {
        Self::default()
    }

    /// Zero every field.
    pub fn reset(&mut self) {
        self.uid = [0; UID_SIZE];
    }

    pub fn uid(&self) -> &[u8; UID_SIZE] {
        &self.uid
    }

    /// Set the UID; the length must be exactly [`UID_SIZE`].
    pub fn set_uid(&mut self, uid: &[u8]) -> Result<()> {
        if uid.len() != UID_SIZE {
            return Err(Error::InvalidLength {
                expected: UID_SIZE,
                actual: uid.len(),
            });
        }
        self.uid.copy_from_slice(uid);
        Ok(())
    }

    /// IC manufacturer code (second UID byte).
    pub fn manufacturer_code(&self) -> u8 {
        self.uid[1]
    }

    /// Byte-exact structural comparison.
    pub fn is_equal(&self, other: &Self) -> bool {
        self == other
    }

    pub fn save(&self, ff: &mut dyn Container) -> Result<()> {
        ff.write_hex(UID_KEY, &self.uid)
    }

    pub fn load(&mut self, ff: &dyn Container, _format_version: u32) -> Result<()> {
        ff.read_hex(UID_KEY, &mut self.uid)
    }
}
