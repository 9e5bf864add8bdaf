#[path = "../common/mod.rs"]
mod common;

use nfctags::format::{Container, TextContainer};
use nfctags::slix::{self, SlixData};

#[test]
fn full_record_roundtrips_through_text_form() {
    let record = common::fixtures::slix2_record();

    let mut ff = TextContainer::new();
    slix::codec::save(&record, &mut ff).unwrap();

    // Through the rendered text, not just the in-memory container.
    let reparsed = TextContainer::parse(&ff.render()).unwrap();
    let mut restored = SlixData::new();
    slix::codec::load(&mut restored, &reparsed, 2).unwrap();

    assert!(record.is_equal(&restored));
}

#[test]
fn every_presence_combination_roundtrips() {
    for mask in 0u8..32 {
        let mut record = SlixData::new();
        record
            .iso15693
            .set_uid(&[0xE0, 0x04, 0x01, 0x10, 1, 2, 3, 4])
            .unwrap();
        record.passwords.read = (mask & 1 != 0).then_some([1, 1, 1, 1]);
        record.passwords.write = (mask & 2 != 0).then_some([2, 2, 2, 2]);
        record.passwords.privacy = (mask & 4 != 0).then_some([3, 3, 3, 3]);
        record.passwords.destroy = (mask & 8 != 0).then_some([4, 4, 4, 4]);
        record.passwords.eas = (mask & 16 != 0).then_some([5, 5, 5, 5]);

        let mut ff = TextContainer::new();
        slix::codec::save(&record, &mut ff).unwrap();
        let mut restored = SlixData::new();
        slix::codec::load(&mut restored, &ff, 2).unwrap();
        assert!(record.is_equal(&restored), "mask {:#07b}", mask);
    }
}

#[test]
fn record_without_passwords_loads_all_absent_and_saves_no_keys() {
    let mut record = SlixData::new();
    record
        .iso15693
        .set_uid(&[0xE0, 0x04, 0x03, 0x00, 9, 8, 7, 6])
        .unwrap();

    let mut ff = TextContainer::new();
    slix::codec::save(&record, &mut ff).unwrap();

    let mut restored = SlixData::new();
    slix::codec::load(&mut restored, &ff, 2).unwrap();

    assert_eq!(restored.passwords.read, None);
    assert_eq!(restored.passwords.write, None);
    assert_eq!(restored.passwords.privacy, None);
    assert_eq!(restored.passwords.destroy, None);
    assert_eq!(restored.passwords.eas, None);

    let mut out = TextContainer::new();
    slix::codec::save(&restored, &mut out).unwrap();
    for key in [
        "Password Read",
        "Password Write",
        "Password Privacy",
        "Password Destroy",
        "Password EAS",
    ] {
        assert!(!out.key_exists(key), "unexpected key {}", key);
    }
}

#[test]
fn on_disk_key_names_are_exact() {
    let record = common::fixtures::slix2_record();
    let mut ff = TextContainer::new();
    slix::codec::save(&record, &mut ff).unwrap();

    for key in [
        "Password Read",
        "Password Write",
        "Password Privacy",
        "Password Destroy",
        "Password EAS",
        "Signature",
        "Privacy Mode",
        "Protection Pointer",
        "Protection Condition",
    ] {
        assert!(ff.key_exists(key), "missing key {}", key);
    }
}

#[test]
fn legacy_format_versions_are_rejected() {
    for version in [0, 1, 2, 3, 100] {
        assert!(!slix::codec::verify(version));
    }
}

#[test]
fn failed_load_must_discard_record() {
    let record = common::fixtures::slix2_record();
    let mut ff = TextContainer::new();
    slix::codec::save(&record, &mut ff).unwrap();

    // Corrupt one present field; the load fails as a whole.
    let text = ff.render().replace("Privacy Mode: false", "Privacy Mode: maybe");
    let ff = TextContainer::parse(&text).unwrap();
    let mut restored = SlixData::new();
    assert!(slix::codec::load(&mut restored, &ff, 2).is_err());
}
