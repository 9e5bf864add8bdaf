// nfctags/src/ultralight/listener.rs

//! Passive-side session driver: emulates a Type-2 tag and answers an
//! external reader's commands against an in-memory [`UltralightData`] image.

use log::trace;

use crate::constants::{
    ACK, AUTH_PASSWORD_SIZE, CMD_CHECK_TEARING, CMD_GET_VERSION, CMD_PWD_AUTH, CMD_READ_CNT,
    CMD_READ_PAGE, CMD_READ_SIG, CMD_WRITE_PAGE, COUNTER_NUM, NAK, PAGE_SIZE, TEARING_FLAG_NUM,
};
use crate::ultralight::{Features, Page, UltralightData};
use crate::utils::bytes_to_hex;

/// Tag-side responder. `None` from [`process_request`] means the emulated tag
/// stays silent (unsupported command or halted listener); the reader sees a
/// timeout, exactly like a real tag.
///
/// [`process_request`]: UltralightListener::process_request
pub struct UltralightListener {
    data: UltralightData,
    authenticated: bool,
    halted: bool,
}

impl UltralightListener {
    pub fn new(data: UltralightData) -> Self {
        Self {
            data,
            authenticated: false,
            halted: false,
        }
    }

    pub fn data(&self) -> &UltralightData {
        &self.data
    }

    /// Stop responding. Required before the handle is released; a halted
    /// listener never answers again.
    pub fn halt(&mut self) {
        self.halted = true;
    }

    pub fn is_halted(&self) -> bool {
        self.halted
    }

    /// Consume the listener and hand back the (possibly mutated) tag image.
    pub fn into_data(self) -> UltralightData {
        self.data
    }

    fn features(&self) -> Features {
        self.data.tag_type.features()
    }

    /// First page the reader may not touch without prior authentication,
    /// for reads (`write == false`) or writes.
    fn gate(&self, write: bool) -> Option<u16> {
        if self.authenticated {
            return None;
        }
        let config = self.data.config_pages()?;
        if write || config.read_protected() {
            Some(u16::from(config.auth0()))
        } else {
            None
        }
    }

    fn handle_read(&self, index: u8) -> Vec<u8> {
        let total = self.data.pages_total;
        let index = u16::from(index);
        if index >= total {
            return vec![NAK];
        }
        if self.gate(false).is_some_and(|auth0| index >= auth0) {
            return vec![NAK];
        }
        // READ returns four pages, wrapping past the end of memory.
        let mut out = Vec::with_capacity(PAGE_SIZE * 4);
        for k in 0..4u16 {
            let page = usize::from((index + k) % total);
            out.extend_from_slice(self.data.pages[page].as_bytes());
        }
        out
    }

    fn handle_write(&mut self, index: u8, payload: &[u8]) -> Vec<u8> {
        let index = u16::from(index);
        if index >= self.data.pages_total {
            return vec![NAK];
        }
        if self.gate(true).is_some_and(|auth0| index >= auth0) {
            return vec![NAK];
        }
        let mut page = [0u8; PAGE_SIZE];
        page.copy_from_slice(payload);
        self.data.pages[usize::from(index)] = Page::from_bytes(page);
        vec![ACK]
    }

    fn handle_auth(&mut self, password: &[u8]) -> Vec<u8> {
        let Some(config) = self.data.config_pages() else {
            return vec![NAK];
        };
        if password == config.password() {
            self.authenticated = true;
            config.pack().to_vec()
        } else {
            vec![NAK]
        }
    }

    /// Process one reader command. Returns the response payload, or `None`
    /// to stay silent.
    pub fn process_request(&mut self, request: &[u8]) -> Option<Vec<u8>> {
        if self.halted || request.is_empty() {
            return None;
        }
        trace!("listener <- {}", bytes_to_hex(request));

        let features = self.features();
        let response = match (request[0], request.len()) {
            (CMD_READ_PAGE, 2) => Some(self.handle_read(request[1])),
            (CMD_WRITE_PAGE, n) if n == 2 + PAGE_SIZE => {
                Some(self.handle_write(request[1], &request[2..]))
            }
            (CMD_GET_VERSION, 1) if features.contains(Features::READ_VERSION) => {
                Some(self.data.version.as_bytes().to_vec())
            }
            (CMD_READ_SIG, 2) if features.contains(Features::READ_SIGNATURE) => {
                Some(self.data.signature.as_bytes().to_vec())
            }
            (CMD_READ_CNT, 2) if features.contains(Features::READ_COUNTER) => {
                let index = usize::from(request[1]);
                let single = features.contains(Features::SINGLE_COUNTER);
                if index >= COUNTER_NUM || (single && index != 2) {
                    Some(vec![NAK])
                } else {
                    Some(self.data.counters[index].as_bytes().to_vec())
                }
            }
            (CMD_CHECK_TEARING, 2) if features.contains(Features::CHECK_TEARING_FLAG) => {
                let index = usize::from(request[1]);
                if index >= TEARING_FLAG_NUM {
                    Some(vec![NAK])
                } else {
                    Some(vec![self.data.tearing_flags[index].as_byte()])
                }
            }
            (CMD_PWD_AUTH, n)
                if n == 1 + AUTH_PASSWORD_SIZE
                    && features.contains(Features::AUTHENTICATION) =>
            {
                Some(self.handle_auth(&request[1..]))
            }
            _ => None,
        };

        if let Some(ref bytes) = response {
            trace!("listener -> {}", bytes_to_hex(bytes));
        }
        response
    }
}
