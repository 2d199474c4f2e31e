// Common test utilities for rvoip-sip-headers
#![allow(dead_code)]

use std::fmt::Debug;

use rvoip_sip_headers::types::header::HeaderField;
use rvoip_sip_headers::Error;

/// Parses `raw`, panicking with the header name on failure.
pub fn parse<T: HeaderField>(raw: &str) -> T {
    T::from_value(raw).unwrap_or_else(|e| panic!("Failed to parse {} from '{}': {}", T::NAME, raw, e))
}

/// Parses `raw`, re-parses the emitted line and checks both copies agree.
/// `raw` must hold a value the header accepts.
pub fn assert_round_trip<T: HeaderField>(raw: &str) -> T {
    let first: T = parse(raw);
    assert!(first.is_valid(), "Expected {} to accept '{}', got {:?}", T::NAME, raw, first);
    let line = first.field_string();
    let second: T = parse(&line);
    assert_eq!(first, second, "round trip of '{}' through '{}' changed the value", raw, line);
    assert_eq!(second.field_string(), line, "second emission differs for '{}'", raw);
    first
}

/// Checks that parsing `raw` fails with a parse error naming the header.
pub fn assert_parse_fails<T: HeaderField>(raw: &str) -> Error {
    match T::from_value(raw) {
        Ok(field) => panic!("Expected {} to reject '{}', got {:?}", T::NAME, raw, field),
        Err(err) => {
            match &err {
                Error::Parse { header, .. } => assert_eq!(*header, T::NAME),
                other => panic!("Expected a parse error for '{}', got {:?}", raw, other),
            }
            err
        }
    }
}

/// Checks that `raw` does not match the header grammar and leaves the field empty.
pub fn assert_left_empty<T: HeaderField>(raw: &str) {
    let field: T = parse(raw);
    assert!(!field.is_valid(), "Expected {} to drop '{}', got {:?}", T::NAME, raw, field);
}
