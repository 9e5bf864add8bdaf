// nfctags/src/slix/codec.rs

//! Persistence codec for [`SlixData`].
//!
//! Every optional field round-trips independently: it is emitted only when
//! present, and presence on load is exactly "the key exists". Key strings are
//! part of the on-disk contract and must not change.

use log::debug;

use crate::format::Container;
use crate::slix::{PASSWORD_SIZE, SIGNATURE_SIZE, SlixData, SlixProtection};
use crate::Result;

const PROTOCOL_NAME: &str = "SLIX";

const PASSWORD_READ_KEY: &str = "Password Read";
const PASSWORD_WRITE_KEY: &str = "Password Write";
const PASSWORD_PRIVACY_KEY: &str = "Password Privacy";
const PASSWORD_DESTROY_KEY: &str = "Password Destroy";
const PASSWORD_EAS_KEY: &str = "Password EAS";
const SIGNATURE_KEY: &str = "Signature";
const PRIVACY_MODE_KEY: &str = "Privacy Mode";
const PROTECTION_POINTER_KEY: &str = "Protection Pointer";
const PROTECTION_CONDITION_KEY: &str = "Protection Condition";

/// Legacy format check. No backward compatibility, unified format only.
pub fn verify(_format_version: u32) -> bool {
    false
}

fn load_password(ff: &dyn Container, key: &str) -> Result<Option<[u8; PASSWORD_SIZE]>> {
    if !ff.key_exists(key) {
        return Ok(None);
    }
    let mut password = [0u8; PASSWORD_SIZE];
    ff.read_hex(key, &mut password)?;
    Ok(Some(password))
}

fn save_password(
    ff: &mut dyn Container,
    key: &str,
    password: &Option<[u8; PASSWORD_SIZE]>,
) -> Result<()> {
    if let Some(bytes) = password {
        ff.write_hex(key, bytes)?;
    }
    Ok(())
}

/// Restore a record. Any malformed present value fails the whole load; the
/// caller must discard the partially-populated record on failure.
pub fn load(data: &mut SlixData, ff: &dyn Container, format_version: u32) -> Result<()> {
    data.iso15693.load(ff, format_version)?;

    data.passwords.read = load_password(ff, PASSWORD_READ_KEY)?;
    data.passwords.write = load_password(ff, PASSWORD_WRITE_KEY)?;
    data.passwords.privacy = load_password(ff, PASSWORD_PRIVACY_KEY)?;
    data.passwords.destroy = load_password(ff, PASSWORD_DESTROY_KEY)?;
    data.passwords.eas = load_password(ff, PASSWORD_EAS_KEY)?;

    data.signature = if ff.key_exists(SIGNATURE_KEY) {
        let mut signature = [0u8; SIGNATURE_SIZE];
        ff.read_hex(SIGNATURE_KEY, &mut signature)?;
        Some(signature)
    } else {
        None
    };

    data.privacy_mode = if ff.key_exists(PRIVACY_MODE_KEY) {
        Some(ff.read_bool(PRIVACY_MODE_KEY)?)
    } else {
        None
    };

    // The pair is present only when both keys exist.
    data.protection =
        if ff.key_exists(PROTECTION_POINTER_KEY) && ff.key_exists(PROTECTION_CONDITION_KEY) {
            let mut pointer = [0u8; 1];
            ff.read_hex(PROTECTION_POINTER_KEY, &mut pointer)?;
            let mut condition = [0u8; 1];
            ff.read_hex(PROTECTION_CONDITION_KEY, &mut condition)?;
            Some(SlixProtection {
                pointer: pointer[0],
                condition: condition[0],
            })
        } else {
            None
        };

    debug!("loaded SLIX record, type {:?}", data.slix_type());
    Ok(())
}

/// Persist a record. Absent optional fields are omitted entirely.
pub fn save(data: &SlixData, ff: &mut dyn Container) -> Result<()> {
    data.iso15693.save(ff)?;

    ff.write_comment(&format!("{} specific data", PROTOCOL_NAME))?;
    ff.write_comment("Passwords are optional. If a password is omitted, any password is accepted")?;

    save_password(ff, PASSWORD_READ_KEY, &data.passwords.read)?;
    save_password(ff, PASSWORD_WRITE_KEY, &data.passwords.write)?;
    save_password(ff, PASSWORD_PRIVACY_KEY, &data.passwords.privacy)?;
    save_password(ff, PASSWORD_DESTROY_KEY, &data.passwords.destroy)?;
    save_password(ff, PASSWORD_EAS_KEY, &data.passwords.eas)?;

    if let Some(signature) = &data.signature {
        ff.write_comment(
            "This is the card's secp128r1 elliptic curve signature. It can not be calculated without knowing NXP's private key.",
        )?;
        ff.write_hex(SIGNATURE_KEY, signature)?;
    }

    if let Some(privacy_mode) = data.privacy_mode {
        ff.write_bool(PRIVACY_MODE_KEY, privacy_mode)?;
    }

    if let Some(protection) = &data.protection {
        ff.write_comment("Protection pointer configuration")?;
        ff.write_hex(PROTECTION_POINTER_KEY, &[protection.pointer])?;
        ff.write_hex(PROTECTION_CONDITION_KEY, &[protection.condition])?;
    }

    Ok(())
}
