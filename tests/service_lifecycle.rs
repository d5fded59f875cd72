//! Lifecycle tests for the diagnostic service: sink binding, directory
//! creation, open/close guards.

use std::fs;

use diag_service::{DiagnosticConfig, Service, ServiceError};

mod common;

fn file_config(path: &std::path::Path, level: &str) -> DiagnosticConfig {
    DiagnosticConfig {
        level: level.to_string(),
        file: path.to_str().unwrap().to_string(),
    }
}

#[test]
fn test_file_destination_creates_missing_directories() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("newdir/sub/out.log");

    let mut service = Service::new(file_config(&path, "DEBUG"));
    service.open().unwrap();

    service.storage_handler().error("write failed", &"short write");
    service.close().unwrap();

    let contents = fs::read_to_string(&path).unwrap();
    assert_eq!(contents.lines().count(), 1);
    assert!(contents.contains("service=storage"));
    assert!(contents.contains("write failed"));
}

#[test]
fn test_uncreatable_parent_fails_open_and_leaves_service_unopened() {
    let dir = tempfile::tempdir().unwrap();
    let blocker = dir.path().join("blocker");
    fs::write(&blocker, b"occupied").unwrap();

    let path = blocker.join("sub/out.log");
    let mut service = Service::new(file_config(&path, "DEBUG"));

    assert!(matches!(service.open(), Err(ServiceError::Sink(_))));

    // never opened, so the first close is a clean no-op
    service.close().unwrap();
}

#[test]
fn test_stdout_destination_close_is_noop_ok() {
    let (mut service, capture) = common::open_capture_service("INFO");

    service.httpd_handler().starting_service();
    service.close().unwrap();

    assert_eq!(capture.lines().len(), 1);
}

#[test]
fn test_writes_after_close_are_silently_dropped() {
    let (mut service, capture) = common::open_capture_service("DEBUG");

    let handler = service.replay_handler();
    handler.debug("before close", &[]);
    service.close().unwrap();
    handler.debug("after close", &[]);

    let lines = capture.lines();
    assert_eq!(lines.len(), 1);
    assert!(lines[0].contains("before close"));
}

#[test]
fn test_double_close_is_an_error() {
    let (mut service, _capture) = common::open_capture_service("DEBUG");

    service.close().unwrap();
    assert!(matches!(service.close(), Err(ServiceError::AlreadyClosed)));
}

#[test]
fn test_open_twice_is_guarded() {
    let (mut service, _capture) = common::open_capture_service("DEBUG");
    assert!(matches!(service.open(), Err(ServiceError::AlreadyOpen)));
}

#[test]
fn test_open_rejects_unknown_level_string() {
    let config = DiagnosticConfig {
        level: "VERBOSE".to_string(),
        file: "STDOUT".to_string(),
    };
    let mut service = Service::new(config);
    match service.open() {
        Err(ServiceError::InvalidLevel(level)) => assert_eq!(level, "VERBOSE"),
        other => panic!("expected invalid level error, got {other:?}"),
    }
}

#[test]
fn test_static_level_handler_rejects_bogus_level() {
    let (service, _capture) = common::open_capture_service("DEBUG");
    assert!(matches!(
        service.static_level_handler("bogus", "svc"),
        Err(ServiceError::InvalidLevel(_))
    ));
}

#[test]
fn test_file_sink_appends_across_service_instances() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("out.log");

    for msg in ["first run", "second run"] {
        let mut service = Service::new(file_config(&path, "INFO"));
        service.open().unwrap();
        service.cmd_handler().info(msg);
        service.close().unwrap();
    }

    let contents = fs::read_to_string(&path).unwrap();
    assert_eq!(contents.lines().count(), 2);
    assert!(contents.contains("first run"));
    assert!(contents.contains("second run"));
}
