#[path = "../common/mod.rs"]
mod common;

use nfctags::ultralight::{EmulationSession, TagType, UltralightData};
use nfctags::{Error, ErrorCode};

#[test]
fn lifecycle_inactive_active_inactive() {
    let mut session = EmulationSession::new();
    assert!(!session.is_active());

    session.start(common::fixtures::ntag213_image()).unwrap();
    assert!(session.is_active());

    session.stop().unwrap();
    assert!(!session.is_active());
}

#[test]
fn second_start_is_busy_and_first_handle_survives() {
    let mut session = EmulationSession::new();
    session.start(common::fixtures::ntag213_image()).unwrap();

    let result = session.start(UltralightData::new());
    assert!(matches!(result, Err(Error::Busy)));
    assert!(session.is_active());

    // The running handle still emulates the first image.
    let stopped = session.stop().unwrap();
    assert_eq!(stopped.tag_type, TagType::Ntag213);
}

#[test]
fn stop_while_inactive_is_not_started() {
    let mut session = EmulationSession::new();
    assert!(matches!(session.stop(), Err(Error::NotStarted)));
}

#[test]
fn reader_mutations_survive_into_stopped_image() {
    let mut session = EmulationSession::new();
    session.start(common::fixtures::ntag213_image()).unwrap();

    let listener = session.listener_mut().unwrap();
    let resp = listener
        .process_request(&[0xA2, 7, 0x13, 0x37, 0x00, 0x42])
        .unwrap();
    assert_eq!(resp, vec![0x0A]);

    let image = session.stop().unwrap();
    assert_eq!(image.pages[7].as_bytes(), &[0x13, 0x37, 0x00, 0x42]);
}

#[test]
fn lifecycle_misuse_degrades_to_timeout_on_the_wire() {
    let mut session = EmulationSession::new();
    let result = session.stop();
    assert_eq!(ErrorCode::capture(&result), ErrorCode::Timeout);

    session.start(UltralightData::new()).unwrap();
    let result = session.start(UltralightData::new());
    assert_eq!(ErrorCode::capture(&result), ErrorCode::Timeout);
}

#[test]
fn restart_after_stop_is_clean() {
    let mut session = EmulationSession::new();
    session.start(common::fixtures::ntag213_image()).unwrap();
    session.stop().unwrap();
    session.start(UltralightData::new()).unwrap();
    let image = session.stop().unwrap();
    assert_eq!(image.tag_type, TagType::Unknown);
}
