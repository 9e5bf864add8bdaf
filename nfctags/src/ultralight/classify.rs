// nfctags/src/ultralight/classify.rs

//! Type classification and capability tables for the Ultralight family.
//!
//! Classification is a pure, total function of the GET_VERSION record:
//! unmapped byte combinations yield [`TagType::Unknown`], never an error.

use bitflags::bitflags;

use crate::device::NameKind;
use crate::iso14443a::NfcaData;
use crate::ultralight::VersionData;

/// NXP vendor id as reported in the version record.
pub const VENDOR_NXP: u8 = 0x04;

const PROD_TYPE_ULTRALIGHT: u8 = 0x03;
const PROD_TYPE_NTAG: u8 = 0x04;
const PROD_SUBTYPE_NTAG21X: u8 = 0x02;
const PROD_SUBTYPE_NTAG_I2C: u8 = 0x05;

bitflags! {
    /// Capability bit-set gating which session operations are valid for a
    /// given tag sub-type.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct Features: u32 {
        const READ_VERSION = 1 << 0;
        const READ_SIGNATURE = 1 << 1;
        const READ_COUNTER = 1 << 2;
        const CHECK_TEARING_FLAG = 1 << 3;
        const FAST_READ = 1 << 4;
        const INC_COUNTER = 1 << 5;
        const FAST_WRITE = 1 << 6;
        const COMPATIBLE_WRITE = 1 << 7;
        const AUTHENTICATION = 1 << 8;
        const VCSL = 1 << 9;
        const SECTOR_SELECT = 1 << 10;
        const SINGLE_COUNTER = 1 << 11;
        const ASCII_MIRROR = 1 << 12;
        const COUNTER_IN_MEMORY = 1 << 13;
    }
}

/// Closed enumeration of supported Type-2 sub-types.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TagType {
    #[default]
    Unknown,
    Ntag203,
    Ul11,
    Ul21,
    Ntag213,
    Ntag215,
    Ntag216,
    NtagI2c1k,
    NtagI2c2k,
    NtagI2cPlus1k,
    NtagI2cPlus2k,
}

impl TagType {
    /// Classify from a GET_VERSION record.
    ///
    /// NTAG203 never answers GET_VERSION, so this function alone cannot
    /// produce it; the poller's probe path is the only producer.
    pub fn from_version(version: &VersionData) -> TagType {
        if version.vendor_id != VENDOR_NXP {
            return TagType::Unknown;
        }
        match (
            version.prod_type,
            version.prod_subtype,
            version.prod_ver_major,
            version.storage_size,
        ) {
            (PROD_TYPE_ULTRALIGHT, _, _, 0x0B) => TagType::Ul11,
            (PROD_TYPE_ULTRALIGHT, _, _, 0x0E) => TagType::Ul21,
            (PROD_TYPE_NTAG, PROD_SUBTYPE_NTAG21X, _, 0x0F) => TagType::Ntag213,
            (PROD_TYPE_NTAG, PROD_SUBTYPE_NTAG21X, _, 0x11) => TagType::Ntag215,
            (PROD_TYPE_NTAG, PROD_SUBTYPE_NTAG21X, _, 0x13) => TagType::Ntag216,
            (PROD_TYPE_NTAG, PROD_SUBTYPE_NTAG_I2C, 0x01, 0x13) => TagType::NtagI2c1k,
            (PROD_TYPE_NTAG, PROD_SUBTYPE_NTAG_I2C, 0x01, 0x15) => TagType::NtagI2c2k,
            (PROD_TYPE_NTAG, PROD_SUBTYPE_NTAG_I2C, 0x02, 0x13) => TagType::NtagI2cPlus1k,
            (PROD_TYPE_NTAG, PROD_SUBTYPE_NTAG_I2C, 0x02, 0x15) => TagType::NtagI2cPlus2k,
            _ => TagType::Unknown,
        }
    }

    /// Fixed total page count per type. Unknown maps to the most
    /// conservative count.
    pub fn total_pages(self) -> u16 {
        match self {
            TagType::Unknown => 16,
            TagType::Ntag203 => 42,
            TagType::Ul11 => 20,
            TagType::Ul21 => 41,
            TagType::Ntag213 => 45,
            TagType::Ntag215 => 135,
            TagType::Ntag216 => 231,
            TagType::NtagI2c1k => 231,
            TagType::NtagI2c2k => 485,
            TagType::NtagI2cPlus1k => 236,
            TagType::NtagI2cPlus2k => 492,
        }
    }

    /// Fixed capability bit-set per type.
    pub fn features(self) -> Features {
        match self {
            TagType::Unknown => Features::empty(),
            TagType::Ntag203 => Features::COUNTER_IN_MEMORY,
            TagType::Ul11 | TagType::Ul21 => {
                Features::READ_VERSION
                    | Features::READ_SIGNATURE
                    | Features::READ_COUNTER
                    | Features::CHECK_TEARING_FLAG
                    | Features::FAST_READ
                    | Features::INC_COUNTER
                    | Features::FAST_WRITE
                    | Features::COMPATIBLE_WRITE
                    | Features::AUTHENTICATION
                    | Features::VCSL
            }
            TagType::Ntag213 | TagType::Ntag215 | TagType::Ntag216 => {
                Features::READ_VERSION
                    | Features::READ_SIGNATURE
                    | Features::READ_COUNTER
                    | Features::SINGLE_COUNTER
                    | Features::ASCII_MIRROR
                    | Features::FAST_READ
                    | Features::COMPATIBLE_WRITE
                    | Features::AUTHENTICATION
            }
            TagType::NtagI2c1k | TagType::NtagI2c2k => {
                Features::READ_VERSION
                    | Features::READ_SIGNATURE
                    | Features::FAST_READ
                    | Features::SECTOR_SELECT
            }
            TagType::NtagI2cPlus1k | TagType::NtagI2cPlus2k => {
                Features::READ_VERSION
                    | Features::READ_SIGNATURE
                    | Features::READ_COUNTER
                    | Features::SINGLE_COUNTER
                    | Features::FAST_READ
                    | Features::SECTOR_SELECT
                    | Features::AUTHENTICATION
            }
        }
    }

    /// Display name, short or full.
    pub fn name(self, kind: NameKind) -> &'static str {
        match (self, kind) {
            (TagType::Unknown, NameKind::Full) => "Mifare Ultralight",
            (TagType::Unknown, NameKind::Short) => "UL",
            (TagType::Ntag203, _) => "NTAG203",
            (TagType::Ul11, NameKind::Full) => "Mifare Ultralight 11",
            (TagType::Ul11, NameKind::Short) => "UL11",
            (TagType::Ul21, NameKind::Full) => "Mifare Ultralight 21",
            (TagType::Ul21, NameKind::Short) => "UL21",
            (TagType::Ntag213, _) => "NTAG213",
            (TagType::Ntag215, _) => "NTAG215",
            (TagType::Ntag216, _) => "NTAG216",
            (TagType::NtagI2c1k, _) => "NTAG I2C 1K",
            (TagType::NtagI2c2k, _) => "NTAG I2C 2K",
            (TagType::NtagI2cPlus1k, _) => "NTAG I2C Plus 1K",
            (TagType::NtagI2cPlus2k, _) => "NTAG I2C Plus 2K",
        }
    }
}

/// True when the anticollision data matches the Ultralight family
/// (ATQA 0x0044, SAK 0x00).
pub fn detect_protocol(nfca: &NfcaData) -> bool {
    nfca.atqa() == [0x44, 0x00] && nfca.sak() == 0x00
}
