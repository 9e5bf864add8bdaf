#[path = "../common/mod.rs"]
mod common;

use nfctags::test_support::emulated_tag_transport;
use nfctags::ultralight::{Page, TagType, UltralightPoller};
use nfctags::Error;

#[test]
fn detect_type_classifies_emulated_ntag213() {
    let mut poller = UltralightPoller::new(emulated_tag_transport(common::fixtures::ntag213_image()));
    assert_eq!(poller.detect_type().unwrap(), TagType::Ntag213);
}

#[test]
fn detect_type_probes_ntag203() {
    // NTAG203 never answers GET_VERSION; the probe read of its last page does.
    let mut poller = UltralightPoller::new(emulated_tag_transport(common::fixtures::ntag203_image()));
    assert_eq!(poller.detect_type().unwrap(), TagType::Ntag203);
}

#[test]
fn write_then_read_back_exact_bytes() {
    let mut poller = UltralightPoller::new(emulated_tag_transport(common::fixtures::ntag213_image()));
    poller.detect_type().unwrap();

    let page = Page::from_bytes([0xDE, 0xAD, 0xBE, 0xEF]);
    poller.write_page(5, &page).unwrap();
    assert_eq!(poller.read_page(5).unwrap(), page);
}

#[test]
fn read_page_past_total_is_not_present() {
    let mut poller = UltralightPoller::new(emulated_tag_transport(common::fixtures::ntag213_image()));
    poller.detect_type().unwrap();
    assert!(matches!(poller.read_page(45), Err(Error::NotPresent)));
}

#[test]
fn version_signature_counter_and_tearing_flags() {
    let image = common::fixtures::ntag213_image();
    let mut poller = UltralightPoller::new(emulated_tag_transport(image.clone()));
    poller.detect_type().unwrap();

    let version = poller.read_version().unwrap();
    assert_eq!(version, image.version);

    let signature = poller.read_signature().unwrap();
    assert_eq!(signature, image.signature);

    // NTAG213 exposes a single counter at index 2.
    let counter = poller.read_counter(2).unwrap();
    assert_eq!(counter, image.counters[2]);
    assert!(matches!(poller.read_counter(0), Err(Error::Protocol(_))));

    // No tearing flags on this type; the emulated tag stays silent.
    assert!(matches!(poller.read_tearing_flag(0), Err(Error::Timeout)));
}

#[test]
fn authentication_unlocks_gated_pages() {
    let image = common::fixtures::protected_ntag213_image([1, 2, 3, 4], [0xAA, 0x55], 0x10, true);
    let mut poller = UltralightPoller::new(emulated_tag_transport(image));
    poller.detect_type().unwrap();
    poller.set_protection(0x10, true);

    // Gated page before authentication: NAK classifies as Auth.
    assert!(matches!(poller.read_page(0x20), Err(Error::Auth)));

    let pack = poller.authenticate(&[1, 2, 3, 4]).unwrap();
    assert_eq!(pack, [0xAA, 0x55]);
    assert!(poller.read_page(0x20).is_ok());
}

#[test]
fn wrong_password_is_an_auth_error() {
    let image = common::fixtures::protected_ntag213_image([1, 2, 3, 4], [0xAA, 0x55], 0x10, true);
    let mut poller = UltralightPoller::new(emulated_tag_transport(image));
    poller.detect_type().unwrap();
    assert!(matches!(poller.authenticate(&[4, 3, 2, 1]), Err(Error::Auth)));
}

#[test]
fn read_all_captures_full_unprotected_image() {
    let image = common::fixtures::ntag213_image();
    let mut poller = UltralightPoller::new(emulated_tag_transport(image.clone()));

    let captured = poller.read_all().unwrap();
    assert_eq!(captured.tag_type, TagType::Ntag213);
    assert_eq!(captured.pages_total, image.pages_total);
    assert!(captured.is_all_data_read());
    assert_eq!(captured.pages, image.pages);
    assert_eq!(captured.version, image.version);
    assert_eq!(captured.signature, image.signature);
}

#[test]
fn read_all_stops_at_protection_gate() {
    let image = common::fixtures::protected_ntag213_image([1, 2, 3, 4], [0xAA, 0x55], 0x10, true);
    let mut poller = UltralightPoller::new(emulated_tag_transport(image));

    let captured = poller.read_all().unwrap();
    assert_eq!(captured.pages_read, 16);
    assert!(!captured.is_all_data_read());
}

#[test]
fn absent_tag_times_out() {
    // No listener behind the transport at all.
    let mut poller = UltralightPoller::new(Box::new(nfctags::transport::MockTransport::new()));
    assert!(matches!(poller.detect_type(), Err(Error::Timeout)));
}
