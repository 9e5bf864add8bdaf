// nfctags/src/format/traits.rs

use crate::Result;

/// Seam to the external key-value persisted format.
///
/// The surrounding tooling brings its own container implementation; the codecs
/// in this crate only rely on these primitives. Keys are matched byte-for-byte,
/// so the exact key strings are part of the on-disk contract.
pub trait Container {
    /// True if the key is present in the container.
    fn key_exists(&self, key: &str) -> bool;

    /// Read a fixed-length hex value into `out`. Fails if the key is missing,
    /// the value is malformed, or the length differs from `out.len()`.
    fn read_hex(&self, key: &str, out: &mut [u8]) -> Result<()>;

    /// Read a hex value of unknown length (UIDs come in several widths).
    fn read_hex_any(&self, key: &str) -> Result<Vec<u8>>;

    /// Read a boolean value.
    fn read_bool(&self, key: &str) -> Result<bool>;

    /// Read a decimal u32 value.
    fn read_u32(&self, key: &str) -> Result<u32>;

    /// Write a hex value.
    fn write_hex(&mut self, key: &str, data: &[u8]) -> Result<()>;

    /// Write a boolean value.
    fn write_bool(&mut self, key: &str, value: bool) -> Result<()>;

    /// Write a decimal u32 value.
    fn write_u32(&mut self, key: &str, value: u32) -> Result<()>;

    /// Write a free-form comment line. Comments are documentation only and
    /// are never parsed back.
    fn write_comment(&mut self, text: &str) -> Result<()>;
}
