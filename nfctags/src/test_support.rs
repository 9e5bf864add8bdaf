//! Test support helpers intended for use by unit and integration tests.
//!
//! These helpers centralize mock-transport setup and sample tag images so
//! tests across the crate and the tests/ directory reuse the same data.
#![allow(dead_code)]

use crate::slix::{SlixData, SlixProtection};
use crate::transport::{MockTransport, Transport};
use crate::ultralight::{
    ConfigPages, Page, SignatureData, TagType, UltralightData, UltralightListener, VersionData,
};
use crate::{Error, Result};

/// Build a MockTransport pre-seeded with the given responses and return it
/// boxed as a Transport trait object.
#[doc(hidden)]
pub fn boxed_mock_with_responses(responses: Vec<Vec<u8>>) -> Box<dyn Transport> {
    let mut mock = MockTransport::new();
    for resp in responses {
        mock.push_response(resp);
    }
    Box::new(mock)
}

/// Transport backed by an in-process [`UltralightListener`]: every command
/// sent is answered by the emulated tag, so poller tests run end-to-end
/// without a radio.
pub struct EmulatedTag {
    listener: UltralightListener,
    pending: Option<Vec<u8>>,
}

impl EmulatedTag {
    pub fn new(data: UltralightData) -> Self {
        Self {
            listener: UltralightListener::new(data),
            pending: None,
        }
    }

    pub fn listener(&self) -> &UltralightListener {
        &self.listener
    }
}

impl Transport for EmulatedTag {
    fn send(&mut self, data: &[u8]) -> Result<()> {
        self.pending = self.listener.process_request(data);
        Ok(())
    }

    fn receive(&mut self, _timeout_ms: u64) -> Result<Vec<u8>> {
        // A silent tag is indistinguishable from an absent one.
        self.pending.take().ok_or(Error::Timeout)
    }

    fn reset(&mut self) -> Result<()> {
        self.pending = None;
        Ok(())
    }
}

/// Boxed [`EmulatedTag`] for handing straight to a poller.
#[doc(hidden)]
pub fn emulated_tag_transport(data: UltralightData) -> Box<dyn Transport> {
    Box::new(EmulatedTag::new(data))
}

/// NTAG213 version record bytes.
#[doc(hidden)]
pub fn ntag213_version() -> VersionData {
    VersionData::from_bytes([0x00, 0x04, 0x04, 0x02, 0x01, 0x00, 0x0F, 0x03])
}

/// Fully-populated NTAG213 image: sequential page contents, version,
/// signature and an unprotected config block.
#[doc(hidden)]
pub fn sample_ntag213() -> UltralightData {
    let mut data = UltralightData::new();
    data.nfca
        .set_uid(&[0x04, 0x85, 0x92, 0x3A, 0xA2, 0x61, 0x81])
        .unwrap();
    data.nfca.set_atqa([0x44, 0x00]);
    data.version = ntag213_version();
    data.set_type(TagType::Ntag213);
    data.signature = SignatureData::from_bytes([0x5A; 32]);
    for i in 0..usize::from(data.pages_total) {
        data.pages[i] = Page::from_bytes([i as u8, i as u8, 0, 0]);
    }
    data.set_config_pages(&ConfigPages::default());
    data.pages_read = data.pages_total;
    data
}

/// SLIX2 record with every optional field present.
#[doc(hidden)]
pub fn sample_slix2() -> SlixData {
    let mut data = SlixData::new();
    data.iso15693
        .set_uid(&[0xE0, 0x04, 0x01, 0x08, 0x12, 0x34, 0x56, 0x78])
        .unwrap();
    data.passwords.read = Some([0x11, 0x22, 0x33, 0x44]);
    data.passwords.write = Some([0x55, 0x66, 0x77, 0x88]);
    data.passwords.privacy = Some([0x99, 0xAA, 0xBB, 0xCC]);
    data.passwords.destroy = Some([0xDD, 0xEE, 0xFF, 0x00]);
    data.passwords.eas = Some([0x01, 0x02, 0x03, 0x04]);
    data.signature = Some([0xC3; 32]);
    data.privacy_mode = Some(false);
    data.protection = Some(SlixProtection {
        pointer: 0x0F,
        condition: 0x01,
    });
    data
}
