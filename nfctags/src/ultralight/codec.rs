// nfctags/src/ultralight/codec.rs

//! Persistence codec for [`UltralightData`].
//!
//! The base anticollision record is always saved/loaded first; the family
//! section layers strictly after it, tagged by a protocol-name comment that
//! is documentation only and never parsed back.

use log::debug;

use crate::constants::{COUNTER_NUM, MAX_PAGE_NUM, PAGE_SIZE, TEARING_FLAG_NUM, VERSION_SIZE};
use crate::format::Container;
use crate::ultralight::{Counter, Page, SignatureData, TagType, TearingFlag, UltralightData, VersionData};
use crate::{Error, Result};

const PROTOCOL_NAME: &str = "Mifare Ultralight";

const VERSION_KEY: &str = "Mifare version";
const SIGNATURE_KEY: &str = "Signature";
const PAGES_TOTAL_KEY: &str = "Pages total";
const PAGES_READ_KEY: &str = "Pages read";

fn counter_key(index: usize) -> String {
    format!("Counter {}", index)
}

fn tearing_key(index: usize) -> String {
    format!("Tearing {}", index)
}

fn page_key(index: usize) -> String {
    format!("Page {}", index)
}

/// Legacy format check. No backward compatibility, unified format only.
pub fn verify(_format_version: u32) -> bool {
    false
}

/// Persist a captured tag image.
pub fn save(data: &UltralightData, ff: &mut dyn Container) -> Result<()> {
    data.nfca.save(ff)?;

    ff.write_comment(&format!("{} specific data", PROTOCOL_NAME))?;

    ff.write_hex(VERSION_KEY, &data.version.as_bytes())?;
    ff.write_hex(SIGNATURE_KEY, data.signature.as_bytes())?;

    for (i, counter) in data.counters.iter().enumerate() {
        ff.write_u32(&counter_key(i), counter.value())?;
    }
    for (i, flag) in data.tearing_flags.iter().enumerate() {
        ff.write_hex(&tearing_key(i), &[flag.as_byte()])?;
    }

    ff.write_u32(PAGES_TOTAL_KEY, u32::from(data.pages_total))?;
    ff.write_u32(PAGES_READ_KEY, u32::from(data.pages_read))?;
    for i in 0..usize::from(data.pages_total) {
        ff.write_hex(&page_key(i), data.pages[i].as_bytes())?;
    }

    Ok(())
}

/// Restore a captured tag image. Any malformed value fails the whole load;
/// the caller must discard the partially-populated record on failure.
pub fn load(data: &mut UltralightData, ff: &dyn Container, format_version: u32) -> Result<()> {
    data.nfca.load(ff, format_version)?;

    let mut version = [0u8; VERSION_SIZE];
    ff.read_hex(VERSION_KEY, &mut version)?;
    data.version = VersionData::from_bytes(version);
    data.tag_type = TagType::from_version(&data.version);

    let mut signature = [0u8; crate::constants::SIGNATURE_SIZE];
    ff.read_hex(SIGNATURE_KEY, &mut signature)?;
    data.signature = SignatureData::from_bytes(signature);

    for i in 0..COUNTER_NUM {
        data.counters[i] = Counter::from_value(ff.read_u32(&counter_key(i))?);
    }
    for i in 0..TEARING_FLAG_NUM {
        let mut flag = [0u8; 1];
        ff.read_hex(&tearing_key(i), &mut flag)?;
        data.tearing_flags[i] = TearingFlag::from_byte(flag[0]);
    }

    let pages_total = ff.read_u32(PAGES_TOTAL_KEY)?;
    let pages_read = ff.read_u32(PAGES_READ_KEY)?;
    if pages_total as usize > MAX_PAGE_NUM {
        debug!("rejecting image with {} pages", pages_total);
        return Err(Error::Format(format!(
            "page count {} exceeds maximum {}",
            pages_total, MAX_PAGE_NUM
        )));
    }
    if pages_read > pages_total {
        return Err(Error::Format(format!(
            "pages read {} exceeds pages total {}",
            pages_read, pages_total
        )));
    }
    data.pages_total = pages_total as u16;
    data.pages_read = pages_read as u16;

    for i in 0..pages_total as usize {
        let mut page = [0u8; PAGE_SIZE];
        ff.read_hex(&page_key(i), &mut page)?;
        data.pages[i] = Page::from_bytes(page);
    }

    Ok(())
}
