// nfctags/src/device/traits.rs

use crate::format::Container;
use crate::Result;

/// Selector for [`TagDevice::name`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NameKind {
    Full,
    Short,
}

/// Uniform operation set every tag family implements.
///
/// This is the seam that lets upper layers stay protocol-agnostic.
/// Allocation, deep copy and release map onto `Default`, `Clone` and drop;
/// the family record exclusively owns its base record, so a clone is always
/// a deep copy.
pub trait TagDevice: Default + Clone {
    /// Protocol name used to tag the family section in persisted files.
    const PROTOCOL_NAME: &'static str;

    /// Base record type owned by this family.
    type BaseData;

    /// Zero all family fields and the owned base record.
    fn reset(&mut self);

    /// Legacy format check; families without backward compatibility always
    /// answer false.
    fn verify(format_version: u32) -> bool;

    /// Restore from a persisted container. On failure the record is
    /// partially populated and must be discarded by the caller.
    fn load(&mut self, ff: &dyn Container, format_version: u32) -> Result<()>;

    /// Persist into a container.
    fn save(&self, ff: &mut dyn Container) -> Result<()>;

    /// Byte-exact structural comparison.
    fn is_equal(&self, other: &Self) -> bool;

    /// Display name derived from classification.
    fn name(&self, kind: NameKind) -> &'static str;

    /// UID of the owned base record.
    fn uid(&self) -> &[u8];

    /// Replace the UID; fails on a length mismatch instead of truncating or
    /// padding.
    fn set_uid(&mut self, uid: &[u8]) -> Result<()>;

    /// Borrow the owned base record.
    fn base_data(&self) -> &Self::BaseData;
}
