// fixtures.rs — provides commonly used tag images and records
#![allow(dead_code)]

use nfctags::slix::SlixData;
use nfctags::test_support;
use nfctags::ultralight::{ConfigPages, TagType, UltralightData};

/// Fully-populated, unprotected NTAG213 image.
pub fn ntag213_image() -> UltralightData {
    test_support::sample_ntag213()
}

/// NTAG213 image whose pages past `auth0` are password-protected.
pub fn protected_ntag213_image(
    password: [u8; 4],
    pack: [u8; 2],
    auth0: u8,
    read_protected: bool,
) -> UltralightData {
    let mut data = test_support::sample_ntag213();
    let mut config = ConfigPages::default();
    config.set_password(password);
    config.set_pack(pack);
    config.set_auth0(auth0);
    config.set_read_protected(read_protected);
    data.set_config_pages(&config);
    data
}

/// NTAG203 image. The type answers no GET_VERSION; classification relies on
/// the poller's probe path.
pub fn ntag203_image() -> UltralightData {
    let mut data = UltralightData::new();
    data.set_type(TagType::Ntag203);
    data.pages_read = data.pages_total;
    data
}

/// SLIX2 record with every optional field present.
pub fn slix2_record() -> SlixData {
    test_support::sample_slix2()
}
