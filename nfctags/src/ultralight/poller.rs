// nfctags/src/ultralight/poller.rs

//! Poller session operations executed against a live Type-2 tag.
//!
//! Each operation is one synchronous request/response pair; there is no
//! long-lived session state machine. The error taxonomy surfaced to callers
//! is the closed set {NotPresent, Protocol, Auth, Timeout}; lifecycle misuse
//! carries its own variants and degrades to Timeout on the wire.

use log::{debug, trace};

use crate::constants::{
    ACK, AUTH_PACK_SIZE, AUTH_PASSWORD_SIZE, CMD_CHECK_TEARING, CMD_GET_VERSION, CMD_PWD_AUTH,
    CMD_READ_CNT, CMD_READ_PAGE, CMD_READ_SIG, CMD_WRITE_PAGE, COUNTER_NUM, COUNTER_SIZE,
    READ_RESPONSE_SIZE, SIGNATURE_SIZE, TEARING_FLAG_NUM, VERSION_SIZE,
};
use crate::transport::Transport;
use crate::ultralight::{
    Counter, Features, Page, SignatureData, TagType, TearingFlag, UltralightData, VersionData,
};
use crate::utils::bytes_to_hex;
use crate::{Error, Result};

/// Default per-exchange deadline.
pub const DEFAULT_TIMEOUT_MS: u64 = 100;

/// Last page index of an NTAG203, used to probe for it after GET_VERSION
/// goes unanswered.
const NTAG203_PROBE_PAGE: u8 = 41;

/// Active-side session driver for the Ultralight family.
pub struct UltralightPoller {
    transport: Box<dyn Transport>,
    tag_type: TagType,
    /// (auth0, read_protected) once known from the config block.
    protection: Option<(u8, bool)>,
    authenticated: bool,
    timeout_ms: u64,
}

impl UltralightPoller {
    /// Create a poller with no classified type yet. Page bounds are checked
    /// against the conservative Unknown page count until [`detect_type`]
    /// runs.
    ///
    /// [`detect_type`]: UltralightPoller::detect_type
    pub fn new(transport: Box<dyn Transport>) -> Self {
        Self::with_type(transport, TagType::Unknown)
    }

    /// Create a poller for an already-classified tag.
    pub fn with_type(transport: Box<dyn Transport>, tag_type: TagType) -> Self {
        Self {
            transport,
            tag_type,
            protection: None,
            authenticated: false,
            timeout_ms: DEFAULT_TIMEOUT_MS,
        }
    }

    pub fn tag_type(&self) -> TagType {
        self.tag_type
    }

    pub fn set_timeout(&mut self, timeout_ms: u64) {
        self.timeout_ms = timeout_ms;
    }

    /// Record the protection window (first protected page, whether reads are
    /// covered) so NAK responses on gated pages classify as Auth.
    pub fn set_protection(&mut self, auth0: u8, read_protected: bool) {
        self.protection = Some((auth0, read_protected));
    }

    fn exchange(&mut self, request: &[u8]) -> Result<Vec<u8>> {
        trace!("-> {}", bytes_to_hex(request));
        self.transport.send(request)?;
        let response = self.transport.receive(self.timeout_ms)?;
        trace!("<- {}", bytes_to_hex(&response));
        if response.is_empty() {
            return Err(Error::Timeout);
        }
        Ok(response)
    }

    fn classify_nack(&self, index: u16, write: bool) -> Error {
        if !self.authenticated {
            if let Some((auth0, read_protected)) = self.protection {
                if index >= u16::from(auth0) && (write || read_protected) {
                    return Error::Auth;
                }
            }
        }
        Error::Protocol("nack".into())
    }

    /// Read one 4-page block starting at `index`. The tag wraps around past
    /// its last page; the caller sees the raw 16 bytes.
    fn read_block(&mut self, index: u16) -> Result<Vec<u8>> {
        let response = self.exchange(&[CMD_READ_PAGE, index as u8])?;
        if response.len() == 1 {
            return Err(self.classify_nack(index, false));
        }
        if response.len() != READ_RESPONSE_SIZE {
            return Err(Error::Protocol(format!(
                "read returned {} bytes",
                response.len()
            )));
        }
        Ok(response)
    }

    fn check_page_bounds(&self, index: u16) -> Result<()> {
        let total = self.tag_type.total_pages();
        if index >= total {
            return Err(Error::NotPresent);
        }
        if index > u16::from(u8::MAX) {
            // Pages past 0xFF need SECTOR_SELECT, which single-op sessions
            // do not carry.
            return Err(Error::Protocol(format!(
                "page {} requires sector select",
                index
            )));
        }
        Ok(())
    }

    /// Read a single page.
    pub fn read_page(&mut self, index: u16) -> Result<Page> {
        self.check_page_bounds(index)?;
        let block = self.read_block(index)?;
        let mut page = [0u8; crate::constants::PAGE_SIZE];
        page.copy_from_slice(&block[..crate::constants::PAGE_SIZE]);
        Ok(Page::from_bytes(page))
    }

    /// Write a single page. A write either fully lands or reports an error.
    pub fn write_page(&mut self, index: u16, page: &Page) -> Result<()> {
        self.check_page_bounds(index)?;
        let mut request = Vec::with_capacity(2 + crate::constants::PAGE_SIZE);
        request.push(CMD_WRITE_PAGE);
        request.push(index as u8);
        request.extend_from_slice(page.as_bytes());

        let response = self.exchange(&request)?;
        match response.as_slice() {
            [ACK] => Ok(()),
            [_] => Err(self.classify_nack(index, true)),
            _ => Err(Error::Protocol(format!(
                "write returned {} bytes",
                response.len()
            ))),
        }
    }

    /// Read the GET_VERSION record. Callers must consult the capability
    /// bit-set first; types without the capability never answer.
    pub fn read_version(&mut self) -> Result<VersionData> {
        let response = self.exchange(&[CMD_GET_VERSION])?;
        if response.len() == 1 {
            return Err(Error::Protocol("nack".into()));
        }
        if response.len() != VERSION_SIZE {
            return Err(Error::Protocol(format!(
                "version record of {} bytes",
                response.len()
            )));
        }
        let mut bytes = [0u8; VERSION_SIZE];
        bytes.copy_from_slice(&response);
        Ok(VersionData::from_bytes(bytes))
    }

    /// Read the 32-byte originality signature.
    pub fn read_signature(&mut self) -> Result<SignatureData> {
        let response = self.exchange(&[CMD_READ_SIG, 0x00])?;
        if response.len() == 1 {
            return Err(Error::Protocol("nack".into()));
        }
        if response.len() != SIGNATURE_SIZE {
            return Err(Error::Protocol(format!(
                "signature of {} bytes",
                response.len()
            )));
        }
        let mut bytes = [0u8; SIGNATURE_SIZE];
        bytes.copy_from_slice(&response);
        Ok(SignatureData::from_bytes(bytes))
    }

    /// Read one monotonic counter.
    pub fn read_counter(&mut self, index: usize) -> Result<Counter> {
        if index >= COUNTER_NUM {
            return Err(Error::IndexOutOfRange {
                index,
                max: COUNTER_NUM - 1,
            });
        }
        let response = self.exchange(&[CMD_READ_CNT, index as u8])?;
        if response.len() == 1 {
            return Err(Error::Protocol("nack".into()));
        }
        if response.len() != COUNTER_SIZE {
            return Err(Error::Protocol(format!(
                "counter of {} bytes",
                response.len()
            )));
        }
        Ok(Counter::from_bytes([response[0], response[1], response[2]]))
    }

    /// Read one tearing-detection flag.
    pub fn read_tearing_flag(&mut self, index: usize) -> Result<TearingFlag> {
        if index >= TEARING_FLAG_NUM {
            return Err(Error::IndexOutOfRange {
                index,
                max: TEARING_FLAG_NUM - 1,
            });
        }
        let response = self.exchange(&[CMD_CHECK_TEARING, index as u8])?;
        if response.len() != 1 {
            return Err(Error::Protocol(format!(
                "tearing flag of {} bytes",
                response.len()
            )));
        }
        Ok(TearingFlag::from_byte(response[0]))
    }

    /// PWD_AUTH. On success returns the tag's PACK and unlocks gated pages
    /// for the rest of this poller's lifetime.
    pub fn authenticate(&mut self, password: &[u8; AUTH_PASSWORD_SIZE]) -> Result<[u8; AUTH_PACK_SIZE]> {
        let mut request = Vec::with_capacity(1 + AUTH_PASSWORD_SIZE);
        request.push(CMD_PWD_AUTH);
        request.extend_from_slice(password);

        let response = self.exchange(&request)?;
        match response.len() {
            AUTH_PACK_SIZE => {
                self.authenticated = true;
                Ok([response[0], response[1]])
            }
            1 => Err(Error::Auth),
            n => Err(Error::Protocol(format!("pack of {} bytes", n))),
        }
    }

    /// Classify the tag on the other side of the link. GET_VERSION first;
    /// when that goes unanswered, probe the last NTAG203 page.
    pub fn detect_type(&mut self) -> Result<TagType> {
        match self.read_version() {
            Ok(version) => {
                self.tag_type = TagType::from_version(&version);
                debug!("classified by version: {:?}", self.tag_type);
                Ok(self.tag_type)
            }
            Err(Error::Timeout) | Err(Error::Protocol(_)) => {
                self.transport.reset()?;
                match self.exchange(&[CMD_READ_PAGE, NTAG203_PROBE_PAGE]) {
                    Ok(response) if response.len() == READ_RESPONSE_SIZE => {
                        self.tag_type = TagType::Ntag203;
                        debug!("classified by probe: {:?}", self.tag_type);
                        Ok(self.tag_type)
                    }
                    Ok(_) => {
                        self.tag_type = TagType::Unknown;
                        Ok(self.tag_type)
                    }
                    Err(err) => Err(err),
                }
            }
            Err(err) => Err(err),
        }
    }

    /// Capture the whole tag: classify, then read every structure the
    /// capability bit-set allows. An authentication gate mid-dump leaves a
    /// partial image (`pages_read < pages_total`) rather than failing.
    ///
    /// The anticollision base record is owned by the lower layer; callers
    /// fill `nfca` from their activation context.
    pub fn read_all(&mut self) -> Result<UltralightData> {
        let mut data = UltralightData::new();
        data.set_type(self.detect_type()?);
        let features = data.tag_type.features();

        if features.contains(Features::READ_VERSION) {
            data.version = self.read_version()?;
        }
        if features.contains(Features::READ_SIGNATURE) {
            data.signature = self.read_signature()?;
        }
        if features.contains(Features::READ_COUNTER) {
            let indexes: &[usize] = if features.contains(Features::SINGLE_COUNTER) {
                &[2]
            } else {
                &[0, 1, 2]
            };
            for &i in indexes {
                match self.read_counter(i) {
                    Ok(counter) => data.counters[i] = counter,
                    Err(Error::Protocol(_)) => {}
                    Err(err) => return Err(err),
                }
            }
        }
        if features.contains(Features::CHECK_TEARING_FLAG) {
            for i in 0..TEARING_FLAG_NUM {
                match self.read_tearing_flag(i) {
                    Ok(flag) => data.tearing_flags[i] = flag,
                    Err(Error::Protocol(_)) => {}
                    Err(err) => return Err(err),
                }
            }
        }

        let total = data.pages_total.min(u16::from(u8::MAX) + 1);
        let mut index: u16 = 0;
        while index < total {
            match self.read_block(index) {
                Ok(block) => {
                    for (k, chunk) in block.chunks_exact(crate::constants::PAGE_SIZE).enumerate() {
                        let page_index = index + k as u16;
                        if page_index < total {
                            let mut page = [0u8; crate::constants::PAGE_SIZE];
                            page.copy_from_slice(chunk);
                            data.pages[usize::from(page_index)] = Page::from_bytes(page);
                            data.pages_read += 1;
                        }
                    }
                    index += 4;
                }
                Err(Error::Auth) | Err(Error::Protocol(_)) => {
                    debug!("page {} gated, capture stops at {} pages", index, data.pages_read);
                    break;
                }
                Err(err) => return Err(err),
            }
        }

        if let Some(config) = data.config_pages() {
            self.protection = Some((config.auth0(), config.read_protected()));
        }
        Ok(data)
    }
}
