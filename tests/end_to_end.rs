//! End-to-end behavior: gating, record shape, and context forking as a
//! subsystem would exercise them.

use diag_service::Field;

mod common;

#[test]
fn test_error_threshold_suppresses_debug_and_emits_error() {
    let (service, capture) = common::open_capture_service("ERROR");

    let replay = service.replay_handler();
    replay.debug("should not appear", &[]);

    let storage = service.storage_handler();
    storage.error("x", &"boom");

    let lines = capture.lines();
    assert_eq!(lines.len(), 1);

    let parts: Vec<&str> = lines[0].split('\t').collect();
    assert!(parts[0].parse::<u128>().unwrap() > 0);
    assert_eq!(parts[1], "error");
    assert_eq!(parts[2], "x");
    assert!(parts[3].contains("service=storage"));
    assert!(parts[3].contains("error=boom"));
}

#[test]
fn test_inline_context_attaches_to_one_record_only() {
    let (service, capture) = common::open_capture_service("ERROR");

    let handler = service.handler("svc");
    handler.error("x", &"err", &[Field::str("k", "v")]);
    handler.error("y", &"err", &[]);

    let lines = capture.lines();
    assert_eq!(lines.len(), 2);
    assert!(lines[0].contains("k=v"));
    assert!(!lines[1].contains("k=v"));
}

#[test]
fn test_with_context_forks_do_not_affect_parent_or_siblings() {
    let (service, capture) = common::open_capture_service("DEBUG");

    let base = service.handler("alert");
    let by_id = base.with_context(&[Field::str("handler_id", "h-1")]);
    let by_other = base.with_context(&[Field::str("handler_id", "h-2")]);

    base.info("base", &[]);
    by_id.info("child", &[]);
    by_other.info("child", &[]);

    let lines = capture.lines();
    assert_eq!(lines.len(), 3);
    assert!(!lines[0].contains("handler_id"));
    assert!(lines[1].contains("handler_id=h-1"));
    assert!(lines[2].contains("handler_id=h-2"));
}

#[test]
fn test_chained_forks_match_single_batched_fork() {
    let (service, capture) = common::open_capture_service("DEBUG");

    let base = service.handler("engine");
    let chained = base
        .with_context(&[Field::str("task", "t")])
        .with_context(&[Field::str("node", "n")]);
    let batched = base.with_context(&[Field::str("task", "t"), Field::str("node", "n")]);

    chained.info("m", &[]);
    batched.info("m", &[]);

    let lines = capture.lines();
    let tail = |line: &str| line.split_once('\t').map(|(_, rest)| rest.to_string());
    assert_eq!(tail(&lines[0]), tail(&lines[1]));
}

#[test]
fn test_duplicate_keys_coexist_in_order() {
    let (service, capture) = common::open_capture_service("DEBUG");

    let handler = service
        .handler("task")
        .with_context(&[Field::str("id", "parent")])
        .with_context(&[Field::str("id", "child")]);
    handler.debug("dup", &[Field::str("id", "call")]);

    let line = &capture.lines()[0];
    assert!(line.contains("id=parent id=child id=call"));
}

#[test]
fn test_typed_values_render_in_scalar_form() {
    let (service, capture) = common::open_capture_service("DEBUG");

    service.engine_handler().closing_edge(10, 7);
    service.httpd_handler().authentication_enabled(false);

    let out = capture.contents();
    assert!(out.contains("collected=10 emitted=7"));
    assert!(out.contains("enabled=false"));
}

#[test]
fn test_error_writer_emits_at_error_severity() {
    use std::io::Write;

    let (service, capture) = common::open_capture_service("INFO");

    let mut writer = service.httpd_handler().error_writer();
    writeln!(writer, "tls handshake failed").unwrap();

    let line = &capture.lines()[0];
    assert!(line.contains("\terror\ttls handshake failed"));
    assert!(line.contains("service=http"));
    assert!(line.contains("service=httpd_server_errors"));
}
