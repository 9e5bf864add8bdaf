// nfctags/src/device/dispatch.rs

//! Family implementations of [`TagDevice`] and the enum-of-family resolved
//! at detection time.

use crate::device::traits::{NameKind, TagDevice};
use crate::format::Container;
use crate::iso14443a::NfcaData;
use crate::iso15693::Iso15693Data;
use crate::slix::SlixData;
use crate::ultralight::{self, UltralightData};
use crate::{slix, Result};

impl TagDevice for UltralightData {
    const PROTOCOL_NAME: &'static str = "Mifare Ultralight";

    type BaseData = NfcaData;

    fn reset(&mut self) {
        UltralightData::reset(self);
    }

    fn verify(format_version: u32) -> bool {
        ultralight::codec::verify(format_version)
    }

    fn load(&mut self, ff: &dyn Container, format_version: u32) -> Result<()> {
        ultralight::codec::load(self, ff, format_version)
    }

    fn save(&self, ff: &mut dyn Container) -> Result<()> {
        ultralight::codec::save(self, ff)
    }

    fn is_equal(&self, other: &Self) -> bool {
        self == other
    }

    fn name(&self, kind: NameKind) -> &'static str {
        self.tag_type.name(kind)
    }

    fn uid(&self) -> &[u8] {
        self.nfca.uid()
    }

    fn set_uid(&mut self, uid: &[u8]) -> Result<()> {
        self.nfca.set_uid(uid)
    }

    fn base_data(&self) -> &NfcaData {
        &self.nfca
    }
}

impl TagDevice for SlixData {
    const PROTOCOL_NAME: &'static str = "SLIX";

    type BaseData = Iso15693Data;

    fn reset(&mut self) {
        SlixData::reset(self);
    }

    fn verify(format_version: u32) -> bool {
        slix::codec::verify(format_version)
    }

    fn load(&mut self, ff: &dyn Container, format_version: u32) -> Result<()> {
        slix::codec::load(self, ff, format_version)
    }

    fn save(&self, ff: &mut dyn Container) -> Result<()> {
        slix::codec::save(self, ff)
    }

    fn is_equal(&self, other: &Self) -> bool {
        self == other
    }

    fn name(&self, kind: NameKind) -> &'static str {
        // Sub-type is derived from the UID; a record that classifies as
        // "not a SLIX" keeps the family name.
        match self.slix_type() {
            Some(slix_type) => slix_type.name(kind),
            None => Self::PROTOCOL_NAME,
        }
    }

    fn uid(&self) -> &[u8] {
        self.iso15693.uid()
    }

    fn set_uid(&mut self, uid: &[u8]) -> Result<()> {
        self.iso15693.set_uid(uid)
    }

    fn base_data(&self) -> &Iso15693Data {
        &self.iso15693
    }
}

/// Tagged variant over every supported family, resolved at detection time.
/// Dispatch is static; there is no function-pointer table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TagData {
    Ultralight(UltralightData),
    Slix(SlixData),
}

impl TagData {
    pub fn protocol_name(&self) -> &'static str {
        match self {
            TagData::Ultralight(_) => UltralightData::PROTOCOL_NAME,
            TagData::Slix(_) => SlixData::PROTOCOL_NAME,
        }
    }

    pub fn reset(&mut self) {
        match self {
            TagData::Ultralight(data) => TagDevice::reset(data),
            TagData::Slix(data) => TagDevice::reset(data),
        }
    }

    pub fn verify(&self, format_version: u32) -> bool {
        match self {
            TagData::Ultralight(_) => UltralightData::verify(format_version),
            TagData::Slix(_) => SlixData::verify(format_version),
        }
    }

    pub fn load(&mut self, ff: &dyn Container, format_version: u32) -> Result<()> {
        match self {
            TagData::Ultralight(data) => data.load(ff, format_version),
            TagData::Slix(data) => data.load(ff, format_version),
        }
    }

    pub fn save(&self, ff: &mut dyn Container) -> Result<()> {
        match self {
            TagData::Ultralight(data) => data.save(ff),
            TagData::Slix(data) => data.save(ff),
        }
    }

    /// Records of different families are never equal.
    pub fn is_equal(&self, other: &Self) -> bool {
        match (self, other) {
            (TagData::Ultralight(a), TagData::Ultralight(b)) => a.is_equal(b),
            (TagData::Slix(a), TagData::Slix(b)) => a.is_equal(b),
            _ => false,
        }
    }

    pub fn name(&self, kind: NameKind) -> &'static str {
        match self {
            TagData::Ultralight(data) => data.name(kind),
            TagData::Slix(data) => data.name(kind),
        }
    }

    pub fn uid(&self) -> &[u8] {
        match self {
            TagData::Ultralight(data) => data.uid(),
            TagData::Slix(data) => data.uid(),
        }
    }

    pub fn set_uid(&mut self, uid: &[u8]) -> Result<()> {
        match self {
            TagData::Ultralight(data) => data.set_uid(uid),
            TagData::Slix(data) => data.set_uid(uid),
        }
    }
}
