// nfctags/src/ultralight/mod.rs

//! MIFARE Ultralight / NTAG (NFC Type-2) family: data model, type
//! classification, persistence codec and poller/listener sessions.

use crate::constants::{
    COUNTER_NUM, COUNTER_SIZE, MAX_PAGE_NUM, PAGE_SIZE, SIGNATURE_SIZE, TEARING_FLAG_NUM,
    VERSION_SIZE,
};
use crate::iso14443a::NfcaData;

pub mod classify;
pub mod codec;
pub mod config;
pub mod emulation;
pub mod listener;
pub mod poller;

pub use classify::{Features, TagType, detect_protocol};
pub use config::{ConfigPages, MirrorConf};
pub use emulation::EmulationSession;
pub use listener::UltralightListener;
pub use poller::UltralightPoller;

/// One 4-byte tag page.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Page([u8; PAGE_SIZE]);

impl Page {
    pub fn from_bytes(bytes: [u8; PAGE_SIZE]) -> Self {
        Self(bytes)
    }

    pub fn as_bytes(&self) -> &[u8; PAGE_SIZE] {
        &self.0
    }
}

/// One-time-programmable GET_VERSION record.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VersionData {
    pub header: u8,
    pub vendor_id: u8,
    pub prod_type: u8,
    pub prod_subtype: u8,
    pub prod_ver_major: u8,
    pub prod_ver_minor: u8,
    pub storage_size: u8,
    pub protocol_type: u8,
}

impl VersionData {
    pub fn from_bytes(bytes: [u8; VERSION_SIZE]) -> Self {
        Self {
            header: bytes[0],
            vendor_id: bytes[1],
            prod_type: bytes[2],
            prod_subtype: bytes[3],
            prod_ver_major: bytes[4],
            prod_ver_minor: bytes[5],
            storage_size: bytes[6],
            protocol_type: bytes[7],
        }
    }

    pub fn as_bytes(&self) -> [u8; VERSION_SIZE] {
        [
            self.header,
            self.vendor_id,
            self.prod_type,
            self.prod_subtype,
            self.prod_ver_major,
            self.prod_ver_minor,
            self.storage_size,
            self.protocol_type,
        ]
    }
}

/// 32-byte elliptic-curve originality signature.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SignatureData([u8; SIGNATURE_SIZE]);

impl Default for SignatureData {
    fn default() -> Self {
        Self([0; SIGNATURE_SIZE])
    }
}

impl SignatureData {
    pub fn from_bytes(bytes: [u8; SIGNATURE_SIZE]) -> Self {
        Self(bytes)
    }

    pub fn as_bytes(&self) -> &[u8; SIGNATURE_SIZE] {
        &self.0
    }
}

/// 24-bit monotonic counter, little-endian on the wire.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Counter([u8; COUNTER_SIZE]);

impl Counter {
    pub fn from_bytes(bytes: [u8; COUNTER_SIZE]) -> Self {
        Self(bytes)
    }

    pub fn from_value(value: u32) -> Self {
        let le = value.to_le_bytes();
        Self([le[0], le[1], le[2]])
    }

    pub fn as_bytes(&self) -> &[u8; COUNTER_SIZE] {
        &self.0
    }

    pub fn value(&self) -> u32 {
        u32::from_le_bytes([self.0[0], self.0[1], self.0[2], 0])
    }
}

/// One-byte tearing-detection flag.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TearingFlag(u8);

impl TearingFlag {
    /// Value a factory-fresh tag reports when no write was ever torn.
    pub const INTACT: u8 = 0xBD;

    pub fn from_byte(byte: u8) -> Self {
        Self(byte)
    }

    pub fn as_byte(&self) -> u8 {
        self.0
    }
}

/// Captured memory image of one Type-2 tag.
///
/// `pages_total` is derived from the classified type, never from observed
/// data; `pages_read` counts pages actually captured and never exceeds it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UltralightData {
    pub nfca: NfcaData,
    pub tag_type: TagType,
    pub version: VersionData,
    pub signature: SignatureData,
    pub counters: [Counter; COUNTER_NUM],
    pub tearing_flags: [TearingFlag; TEARING_FLAG_NUM],
    pub pages: [Page; MAX_PAGE_NUM],
    pub pages_read: u16,
    pub pages_total: u16,
}

impl Default for UltralightData {
    fn default() -> Self {
        Self {
            nfca: NfcaData::default(),
            tag_type: TagType::Unknown,
            version: VersionData::default(),
            signature: SignatureData::default(),
            counters: [Counter::default(); COUNTER_NUM],
            tearing_flags: [TearingFlag::default(); TEARING_FLAG_NUM],
            pages: [Page::default(); MAX_PAGE_NUM],
            pages_read: 0,
            pages_total: TagType::Unknown.total_pages(),
        }
    }
}

impl UltralightData {
    pub fn new() -> Self {
        Self::default()
    }

    /// Zero every family field and delegate to the base record's reset.
    pub fn reset(&mut self) {
        self.nfca.reset();
        self.tag_type = TagType::Unknown;
        self.version = VersionData::default();
        self.signature = SignatureData::default();
        self.counters = [Counter::default(); COUNTER_NUM];
        self.tearing_flags = [TearingFlag::default(); TEARING_FLAG_NUM];
        self.pages = [Page::default(); MAX_PAGE_NUM];
        self.pages_read = 0;
        self.pages_total = TagType::Unknown.total_pages();
    }

    /// Reinitialize for a classified type, fixing `pages_total` from the
    /// type table.
    pub fn set_type(&mut self, tag_type: TagType) {
        self.tag_type = tag_type;
        self.pages_total = tag_type.total_pages();
        if self.pages_read > self.pages_total {
            self.pages_read = self.pages_total;
        }
    }

    pub fn page(&self, index: usize) -> Option<&Page> {
        if index < usize::from(self.pages_total) {
            self.pages.get(index)
        } else {
            None
        }
    }

    /// A tag is fully read iff every expected page was captured.
    pub fn is_all_data_read(&self) -> bool {
        self.pages_read == self.pages_total
    }

    /// Index of the first config page, for types that carry the config block
    /// in the last four pages of the memory map. Sector-addressed types keep
    /// their configuration elsewhere and report `None`.
    pub fn config_page_index(&self) -> Option<usize> {
        let features = self.tag_type.features();
        if features.contains(Features::AUTHENTICATION)
            && !features.contains(Features::SECTOR_SELECT)
            && self.pages_total >= 4
        {
            Some(usize::from(self.pages_total) - 4)
        } else {
            None
        }
    }

    /// Parse the config block out of the captured pages.
    pub fn config_pages(&self) -> Option<ConfigPages> {
        let start = self.config_page_index()?;
        let mut raw = [0u8; PAGE_SIZE * 4];
        for (i, chunk) in raw.chunks_exact_mut(PAGE_SIZE).enumerate() {
            chunk.copy_from_slice(self.pages[start + i].as_bytes());
        }
        Some(ConfigPages::from_bytes(raw))
    }

    /// Write a config block back into the captured pages.
    pub fn set_config_pages(&mut self, config: &ConfigPages) -> bool {
        let Some(start) = self.config_page_index() else {
            return false;
        };
        for (i, chunk) in config.as_bytes().chunks_exact(PAGE_SIZE).enumerate() {
            let mut page = [0u8; PAGE_SIZE];
            page.copy_from_slice(chunk);
            self.pages[start + i] = Page::from_bytes(page);
        }
        true
    }

    /// True when the NFC counter is enabled in the config block.
    pub fn is_counter_configured(&self) -> bool {
        self.config_pages()
            .map(|config| config.nfc_counter_enabled())
            .unwrap_or(false)
    }
}
