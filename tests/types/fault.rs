use core::fmt;
use std::cell::Cell;
use std::collections::BTreeMap;

use fault_rail::types::{Fault, LabelError, Panic};
use fault_rail::Hook;

#[derive(Debug)]
struct InnerError;

impl fmt::Display for InnerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "socket closed")
    }
}

impl std::error::Error for InnerError {}

#[derive(Debug)]
struct OuterError {
    inner: InnerError,
}

impl fmt::Display for OuterError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "request failed")
    }
}

impl std::error::Error for OuterError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.inner)
    }
}

#[test]
fn new_stores_label_and_source_verbatim() {
    let fault = Fault::new("TIMEOUT", 30u64);
    assert_eq!(fault.label(), "TIMEOUT");
    assert_eq!(*fault.source(), 30);
    assert_eq!(fault.message(), "");
    assert!(fault.cause().is_none());
}

#[test]
fn labeled_synthesizes_a_source_carrying_the_label() {
    let fault = Fault::labeled("VALIDATION_ERROR");
    assert_eq!(fault.label(), "VALIDATION_ERROR");
    assert_eq!(fault.message(), "VALIDATION_ERROR");

    let source = fault
        .source()
        .downcast_ref::<LabelError>()
        .expect("synthesized source should be a LabelError");
    assert_eq!(source.label(), "VALIDATION_ERROR");
    assert_eq!(source.to_string(), "VALIDATION_ERROR");
}

#[test]
fn from_error_mirrors_message_cause_and_name() {
    let error = OuterError { inner: InnerError };
    let fault = Fault::from_error(error, "NET_ERROR");

    assert_eq!(fault.label(), "NET_ERROR");
    assert_eq!(fault.message(), "request failed");
    assert_eq!(fault.cause(), Some("socket closed"));
    assert!(fault.name().unwrap().ends_with("OuterError"));
}

#[test]
fn from_error_retains_the_original_error_as_source() {
    let fault = Fault::from_error(OuterError { inner: InnerError }, "NET_ERROR");
    let original = fault.into_source();
    assert!(original.downcast_ref::<OuterError>().is_some());
}

#[test]
fn from_panic_extracts_static_str_payloads() {
    let payload: Panic = Box::new("boom");
    let fault = Fault::from_panic(payload, "TASK_ERROR");
    assert_eq!(fault.message(), "boom");
    assert_eq!(*fault.source().downcast_ref::<&str>().unwrap(), "boom");
}

#[test]
fn from_panic_extracts_string_payloads() {
    let payload: Panic = Box::new(String::from("task 7 failed"));
    let fault = Fault::from_panic(payload, "TASK_ERROR");
    assert_eq!(fault.message(), "task 7 failed");
}

#[test]
fn from_panic_degrades_unknown_payloads_to_empty_message() {
    let payload: Panic = Box::new(1234u128);
    let fault = Fault::from_panic(payload, "TASK_ERROR");
    assert_eq!(fault.message(), "");
    // No data loss: the payload survives intact.
    assert_eq!(*fault.source().downcast_ref::<u128>().unwrap(), 1234);
}

#[test]
fn from_value_uses_json_text_as_message() {
    let fault = Fault::from_value(serde_json::json!({"message": "error"}), "API_ERROR");
    assert_eq!(fault.message(), r#"{"message":"error"}"#);
}

#[test]
fn from_value_contains_serialization_failure() {
    // Tuple map keys cannot be encoded as JSON object keys.
    let mut table = BTreeMap::new();
    table.insert((1, 2), "diagonal");
    let fault = Fault::from_value(table, "TABLE_ERROR");

    assert_eq!(fault.message(), "");
    let source = fault
        .source()
        .downcast_ref::<BTreeMap<(i32, i32), &str>>()
        .expect("value should survive serialization failure");
    assert_eq!(source.get(&(1, 2)), Some(&"diagonal"));
}

#[test]
fn tap_observes_without_altering_the_fault() {
    let seen = Cell::new(0);
    let fault = Fault::new("DENIED", "no credentials")
        .tap(&Hook(|fault: &Fault<&str>| {
            assert_eq!(fault.label(), "DENIED");
            seen.set(seen.get() + 1);
        }));

    assert_eq!(seen.get(), 1);
    assert_eq!(fault.label(), "DENIED");
    assert_eq!(*fault.source(), "no credentials");
}

#[test]
fn result_wraps_into_the_fault_arm() {
    let (fault, value) = Fault::new("DENIED", "no credentials").result::<u8>();
    assert_eq!(fault.unwrap().label(), "DENIED");
    assert!(value.is_none());
}

#[test]
fn map_source_keeps_label_and_diagnostics() {
    let fault = Fault::from_error(OuterError { inner: InnerError }, "NET_ERROR")
        .map_source(|_| 503u16);
    assert_eq!(fault.label(), "NET_ERROR");
    assert_eq!(fault.message(), "request failed");
    assert_eq!(*fault.source(), 503);
}

#[test]
fn display_includes_label_and_message() {
    let fault = Fault::labeled("NOT_FOUND");
    assert_eq!(fault.to_string(), "NOT_FOUND: NOT_FOUND");

    let bare = Fault::new("NOT_FOUND", ());
    assert_eq!(bare.to_string(), "NOT_FOUND");
}

#[test]
fn debug_shows_diagnostics_but_not_the_source() {
    let rendered = format!("{:?}", Fault::new("DENIED", "secret"));
    assert!(rendered.contains("DENIED"));
    assert!(!rendered.contains("secret"));
}

#[test]
fn serializes_diagnostic_fields() {
    let json = serde_json::to_string(&Fault::labeled("QUOTA")).unwrap();
    assert!(json.contains(r#""label":"QUOTA""#));
    assert!(json.contains(r#""message":"QUOTA""#));
    assert!(json.contains(r#""cause":null"#));
}
