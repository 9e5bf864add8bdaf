// nfctags/src/iso14443a/mod.rs

//! Type-A anticollision base record (UID, ATQA, SAK).
//!
//! Family records own exactly one of these; it is saved/loaded first so the
//! family-specific section always layers strictly after it.

use crate::format::Container;
use crate::{Error, Result};

/// ATQA length in bytes
pub const ATQA_SIZE: usize = 2;

const UID_KEY: &str = "UID";
const ATQA_KEY: &str = "ATQA";
const SAK_KEY: &str = "SAK";

/// Valid Type-A UID widths (single/double/triple size cascade)
const UID_LENGTHS: [usize; 3] = [4, 7, 10];

/// Type-A base record.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NfcaData {
    uid: Vec<u8>,
    atqa: [u8; ATQA_SIZE],
    sak: u8,
}

impl NfcaData {
    pub fn new() -> Self {
        Self::default()
    }

    /// Zero every field.
    pub fn reset(&mut self) {
        self.uid.clear();
        self.atqa = [0; ATQA_SIZE];
        self.sak = 0;
    }

    pub fn uid(&self) -> &[u8] {
        &self.uid
    }

    /// Set the UID. The length must be one of the fixed Type-A cascade
    /// widths; anything else fails rather than truncating or padding.
    pub fn set_uid(&mut self, uid: &[u8]) -> Result<()> {
        if !UID_LENGTHS.contains(&uid.len()) {
            return Err(Error::InvalidLength {
                expected: 7,
                actual: uid.len(),
            });
        }
        self.uid = uid.to_vec();
        Ok(())
    }

    pub fn atqa(&self) -> [u8; ATQA_SIZE] {
        self.atqa
    }

    pub fn set_atqa(&mut self, atqa: [u8; ATQA_SIZE]) {
        self.atqa = atqa;
    }

    pub fn sak(&self) -> u8 {
        self.sak
    }

    pub fn set_sak(&mut self, sak: u8) {
        self.sak = sak;
    }

    /// Byte-exact structural comparison.
    pub fn is_equal(&self, other: &Self) -> bool {
        self == other
    }

    /// Persist UID/ATQA/SAK.
    pub fn save(&self, ff: &mut dyn Container) -> Result<()> {
        ff.write_hex(UID_KEY, &self.uid)?;
        ff.write_hex(ATQA_KEY, &self.atqa)?;
        ff.write_hex(SAK_KEY, &[self.sak])?;
        Ok(())
    }

    /// Restore UID/ATQA/SAK. Any malformed value fails the whole load.
    pub fn load(&mut self, ff: &dyn Container, _format_version: u32) -> Result<()> {
        let uid = ff.read_hex_any(UID_KEY)?;
        self.set_uid(&uid)?;
        ff.read_hex(ATQA_KEY, &mut self.atqa)?;
        let mut sak = [0u8; 1];
        ff.read_hex(SAK_KEY, &mut sak)?;
        self.sak = sak[0];
        Ok(())
    }
}
