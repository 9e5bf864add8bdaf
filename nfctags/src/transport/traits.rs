// nfctags/src/transport/traits.rs

use crate::Result;

/// Transport trait abstracts the radio link away from session logic.
///
/// The implementation owns anticollision, frame timing and air-interface CRC;
/// the poller only sees command payloads and response payloads. A response
/// that does not arrive within the deadline surfaces as `Error::Timeout`.
pub trait Transport {
    /// Send a raw command payload to the tag.
    fn send(&mut self, data: &[u8]) -> Result<()>;

    /// Receive the tag's response with a timeout in milliseconds.
    fn receive(&mut self, timeout_ms: u64) -> Result<Vec<u8>>;

    /// Drop any in-flight exchange and return the link to idle.
    fn reset(&mut self) -> Result<()>;
}
