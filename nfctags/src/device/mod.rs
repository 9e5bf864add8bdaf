// nfctags/src/device/mod.rs

pub mod dispatch;
pub mod traits;

pub use dispatch::TagData;
pub use traits::{NameKind, TagDevice};
