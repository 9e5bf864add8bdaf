use nfctags::slix::{NXP_MANUFACTURER_CODE, SlixType};
use nfctags::ultralight::{Features, TagType, VersionData};

fn slix_uid(icode_type: u8, indicator_bits: u8) -> [u8; 8] {
    [
        0xE0,
        NXP_MANUFACTURER_CODE,
        icode_type,
        indicator_bits << 3,
        0x12,
        0x34,
        0x56,
        0x78,
    ]
}

#[test]
fn slix_manufacturer_mismatch_wins_over_indicator_bits() {
    for icode_type in [0x01, 0x02, 0x03] {
        for indicator in [0x01, 0x02] {
            let uid = slix_uid(icode_type, indicator);
            assert_eq!(SlixType::from_uid(0x05, &uid), None);
        }
    }
}

#[test]
fn slix_classification_vectors() {
    assert_eq!(
        SlixType::from_uid(NXP_MANUFACTURER_CODE, &slix_uid(0x01, 0x02)),
        Some(SlixType::Slix)
    );
    assert_eq!(
        SlixType::from_uid(NXP_MANUFACTURER_CODE, &slix_uid(0x01, 0x01)),
        Some(SlixType::Slix2)
    );
    assert_eq!(
        SlixType::from_uid(NXP_MANUFACTURER_CODE, &slix_uid(0x02, 0x00)),
        Some(SlixType::SlixS)
    );
    assert_eq!(
        SlixType::from_uid(NXP_MANUFACTURER_CODE, &slix_uid(0x03, 0x00)),
        Some(SlixType::SlixL)
    );
}

#[test]
fn total_pages_and_features_are_fixed_tables() {
    let all = [
        TagType::Unknown,
        TagType::Ntag203,
        TagType::Ul11,
        TagType::Ul21,
        TagType::Ntag213,
        TagType::Ntag215,
        TagType::Ntag216,
        TagType::NtagI2c1k,
        TagType::NtagI2c2k,
        TagType::NtagI2cPlus1k,
        TagType::NtagI2cPlus2k,
    ];
    for t in all {
        // Stable across calls
        assert_eq!(t.total_pages(), t.total_pages());
        assert_eq!(t.features(), t.features());
        assert!(t.total_pages() >= TagType::Unknown.total_pages());
    }
}

#[test]
fn capability_bits_match_wire_positions() {
    assert_eq!(Features::READ_VERSION.bits(), 1 << 0);
    assert_eq!(Features::AUTHENTICATION.bits(), 1 << 8);
    assert_eq!(Features::SECTOR_SELECT.bits(), 1 << 10);
    assert_eq!(Features::COUNTER_IN_MEMORY.bits(), 1 << 13);
}

#[test]
fn unmapped_versions_classify_as_unknown() {
    let zero = VersionData::default();
    assert_eq!(TagType::from_version(&zero), TagType::Unknown);

    let garbage = VersionData::from_bytes([0xFF; 8]);
    assert_eq!(TagType::from_version(&garbage), TagType::Unknown);
}
