// nfctags/src/slix/mod.rs

//! NXP SLIX (ISO15693 ICODE) family: data model, sub-type classification and
//! persistence codec.

use crate::device::NameKind;
use crate::iso15693::Iso15693Data;

pub mod codec;

/// Password length in bytes
pub const PASSWORD_SIZE: usize = 4;

/// Originality signature length in bytes
pub const SIGNATURE_SIZE: usize = 32;

/// NXP IC manufacturer code
pub const NXP_MANUFACTURER_CODE: u8 = 0x04;

// ICODE family indicator, UID byte 2
const ICODE_TYPE_SLIX_SLIX2: u8 = 0x01;
const ICODE_TYPE_SLIX_S: u8 = 0x02;
const ICODE_TYPE_SLIX_L: u8 = 0x03;

// SLIX vs SLIX2 discriminator, 2 bits of UID byte 3
const TYPE_INDICATOR_MASK: u8 = 0b0001_1000;
const TYPE_INDICATOR_SHIFT: u8 = 3;
const TYPE_INDICATOR_SLIX: u8 = 0x02;
const TYPE_INDICATOR_SLIX2: u8 = 0x01;

/// SLIX sub-types. "Not a SLIX" is expressed as `None` at the call sites.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SlixType {
    Slix,
    SlixS,
    SlixL,
    Slix2,
}

impl SlixType {
    /// Classify from the base record's UID.
    ///
    /// Short-circuits on a manufacturer-code mismatch before looking at any
    /// indicator bit.
    pub fn from_uid(manufacturer_code: u8, uid: &[u8; crate::iso15693::UID_SIZE]) -> Option<SlixType> {
        if manufacturer_code != NXP_MANUFACTURER_CODE {
            return None;
        }
        let icode_type = uid[2];
        let type_indicator = (uid[3] & TYPE_INDICATOR_MASK) >> TYPE_INDICATOR_SHIFT;
        match icode_type {
            ICODE_TYPE_SLIX_SLIX2 => match type_indicator {
                TYPE_INDICATOR_SLIX => Some(SlixType::Slix),
                TYPE_INDICATOR_SLIX2 => Some(SlixType::Slix2),
                _ => None,
            },
            ICODE_TYPE_SLIX_S => Some(SlixType::SlixS),
            ICODE_TYPE_SLIX_L => Some(SlixType::SlixL),
            _ => None,
        }
    }

    pub fn name(self, _kind: NameKind) -> &'static str {
        match self {
            SlixType::Slix => "SLIX",
            SlixType::SlixS => "SLIX-S",
            SlixType::SlixL => "SLIX-L",
            SlixType::Slix2 => "SLIX2",
        }
    }
}

/// The five optional SLIX passwords. An absent password means "any password
/// accepted", not a zero password.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SlixPasswords {
    pub read: Option<[u8; PASSWORD_SIZE]>,
    pub write: Option<[u8; PASSWORD_SIZE]>,
    pub privacy: Option<[u8; PASSWORD_SIZE]>,
    pub destroy: Option<[u8; PASSWORD_SIZE]>,
    pub eas: Option<[u8; PASSWORD_SIZE]>,
}

/// Protection pointer configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SlixProtection {
    pub pointer: u8,
    pub condition: u8,
}

/// Captured state of one SLIX tag. Every optional field tracks its own
/// presence; equality compares the base record plus each field structurally.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SlixData {
    pub iso15693: Iso15693Data,
    pub passwords: SlixPasswords,
    pub signature: Option<[u8; SIGNATURE_SIZE]>,
    pub privacy_mode: Option<bool>,
    pub protection: Option<SlixProtection>,
}

impl SlixData {
    pub fn new() -> Self {
        Self::default()
    }

    /// Clear every family field and delegate to the base record's reset.
    pub fn reset(&mut self) {
        self.iso15693.reset();
        self.passwords = SlixPasswords::default();
        self.signature = None;
        self.privacy_mode = None;
        self.protection = None;
    }

    /// Byte-exact structural comparison.
    pub fn is_equal(&self, other: &Self) -> bool {
        self == other
    }

    /// Classify the sub-type from the owned base record.
    pub fn slix_type(&self) -> Option<SlixType> {
        SlixType::from_uid(self.iso15693.manufacturer_code(), self.iso15693.uid())
    }
}
