#[path = "../common/mod.rs"]
mod common;

use nfctags::device::{NameKind, TagData, TagDevice};
use nfctags::format::TextContainer;
use nfctags::slix::SlixData;
use nfctags::ultralight::UltralightData;
use nfctags::Error;

#[test]
fn protocol_names() {
    let ul = TagData::Ultralight(UltralightData::new());
    let slix = TagData::Slix(SlixData::new());
    assert_eq!(ul.protocol_name(), "Mifare Ultralight");
    assert_eq!(slix.protocol_name(), "SLIX");
}

#[test]
fn name_follows_runtime_classification() {
    let record = common::fixtures::slix2_record();
    let tag = TagData::Slix(record);
    assert_eq!(tag.name(NameKind::Full), "SLIX2");

    let image = common::fixtures::ntag213_image();
    let tag = TagData::Ultralight(image);
    assert_eq!(tag.name(NameKind::Full), "NTAG213");
    assert_eq!(tag.name(NameKind::Short), "NTAG213");
}

#[test]
fn uid_delegates_to_owned_base_record() {
    let record = common::fixtures::slix2_record();
    assert_eq!(record.uid(), record.base_data().uid());
    assert_eq!(hex::encode(record.uid()), "e004010812345678");

    let image = common::fixtures::ntag213_image();
    assert_eq!(image.uid(), image.base_data().uid());
}

#[test]
fn set_uid_validates_length_per_family() {
    let mut tag = TagData::Slix(SlixData::new());
    assert!(matches!(
        tag.set_uid(&[1, 2, 3, 4]),
        Err(Error::InvalidLength { expected: 8, .. })
    ));
    tag.set_uid(&[0xE0, 0x04, 0x01, 0x10, 1, 2, 3, 4]).unwrap();

    let mut tag = TagData::Ultralight(UltralightData::new());
    assert!(tag.set_uid(&[1, 2, 3, 4, 5]).is_err());
    tag.set_uid(&[1, 2, 3, 4, 5, 6, 7]).unwrap();
    assert_eq!(tag.uid(), &[1, 2, 3, 4, 5, 6, 7]);
}

#[test]
fn deep_copy_then_mutate_diverges() {
    let original = common::fixtures::slix2_record();
    let mut copy = original.clone();
    assert!(original.is_equal(&copy));

    copy.privacy_mode = Some(true);
    assert!(!original.is_equal(&copy));
}

#[test]
fn freshly_reset_records_are_equal() {
    let mut a = common::fixtures::ntag213_image();
    let mut b = common::fixtures::ntag213_image();
    TagDevice::reset(&mut a);
    TagDevice::reset(&mut b);
    assert!(a.is_equal(&b));
    assert!(a.is_equal(&a));
}

#[test]
fn save_load_through_the_uniform_interface() {
    let tag = TagData::Ultralight(common::fixtures::ntag213_image());
    let mut ff = TextContainer::new();
    tag.save(&mut ff).unwrap();

    let mut restored = TagData::Ultralight(UltralightData::new());
    restored.load(&ff, 2).unwrap();
    assert!(tag.is_equal(&restored));
}

#[test]
fn verify_rejects_every_legacy_version() {
    let ul = TagData::Ultralight(UltralightData::new());
    let slix = TagData::Slix(SlixData::new());
    for version in 0..5 {
        assert!(!ul.verify(version));
        assert!(!slix.verify(version));
    }
}
