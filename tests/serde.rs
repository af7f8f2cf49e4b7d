//! Serde round trips (only built with `--features serde`): a container
//! serializes as its loaded value and deserializes into a fresh container.
#![cfg(feature = "serde")]

use std::sync::Arc;
use std::time::Duration;

use quark::{AtomicArc, AtomicBool, AtomicDuration, AtomicF64, AtomicI64, AtomicString};

#[test]
fn numeric_containers_round_trip_as_plain_values() {
    let cell = AtomicI64::new(-42);
    let json = serde_json::to_string(&cell).unwrap();
    assert_eq!(json, "-42");

    let back: AtomicI64 = serde_json::from_str(&json).unwrap();
    assert_eq!(back.load(), -42);

    let float = AtomicF64::new(2.5);
    assert_eq!(serde_json::to_string(&float).unwrap(), "2.5");
}

#[test]
fn boolean_and_duration_round_trip() {
    let flag = AtomicBool::new(true);
    let back: AtomicBool = serde_json::from_str(&serde_json::to_string(&flag).unwrap()).unwrap();
    assert!(back.load());

    let duration = AtomicDuration::new(Duration::new(3, 500));
    let back: AtomicDuration =
        serde_json::from_str(&serde_json::to_string(&duration).unwrap()).unwrap();
    assert_eq!(back.load(), Duration::new(3, 500));
}

#[test]
fn string_serializes_as_its_text() {
    let s = AtomicString::new("hello");
    assert_eq!(serde_json::to_string(&s).unwrap(), "\"hello\"");

    let back: AtomicString = serde_json::from_str("\"world\"").unwrap();
    assert_eq!(back.load(), "world");
}

#[test]
fn arc_slot_serializes_as_optional_pointee() {
    let empty: AtomicArc<u32> = AtomicArc::empty();
    assert_eq!(serde_json::to_string(&empty).unwrap(), "null");

    let full = AtomicArc::new(Some(Arc::new(7_u32)));
    assert_eq!(serde_json::to_string(&full).unwrap(), "7");

    let back: AtomicArc<u32> = serde_json::from_str("7").unwrap();
    assert_eq!(back.load().as_deref(), Some(&7));
}
