//! Unit tests for the domain error type

use idx_domain::Error;

#[test]
fn test_builder_failure_is_recoverable_kind() {
    let error = Error::builder("author_builder", "user meta unavailable");
    assert!(error.is_builder_failure());
    assert_eq!(
        error.to_string(),
        "Builder 'author_builder' failed: user meta unavailable"
    );
}

#[test]
fn test_other_kinds_are_not_builder_failures() {
    assert!(!Error::persist("disk full").is_builder_failure());
    assert!(!Error::lookup("no row").is_builder_failure());
    assert!(!Error::reflection("manager", "bad signature").is_builder_failure());
}

#[test]
fn test_persist_error_keeps_source() {
    let io = std::io::Error::other("write failed");
    let error = Error::persist_with_source("saving indexable", io);

    let source = std::error::Error::source(&error).expect("source should be kept");
    assert_eq!(source.to_string(), "write failed");
}

#[test]
fn test_json_error_conversion() {
    let parse: Result<serde_json::Value, _> = serde_json::from_str("{");
    let error: Error = parse.unwrap_err().into();
    assert!(matches!(error, Error::Json { .. }));
}
