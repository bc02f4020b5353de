//! Common test utilities for integration tests.
//!
//! This module provides helper constructors and fixtures for testing the
//! fieldpath library.

use fieldpath::{Path, Segment};

/// Creates a `Field` segment from a name.
#[allow(dead_code)]
pub fn field(name: &str) -> Segment {
    Segment::Field(name.to_string())
}

/// Creates an `Element` segment from an index.
#[allow(dead_code)]
pub fn element(index: usize) -> Segment {
    Segment::Element(index)
}

/// Creates a `Key` segment from a map key.
#[allow(dead_code)]
pub fn key(value: &str) -> Segment {
    Segment::Key(value.to_string())
}

/// A representative path exercising every segment kind:
/// `Publisher.Addresses[0].City`.
#[allow(dead_code)]
pub fn address_city_path() -> Path {
    Path::parse("Publisher.Addresses[0].City").expect("fixture path must parse")
}

/// A map-keyed lookup path: `Books['Gone With the Wind']`.
#[allow(dead_code)]
pub fn keyed_book_path() -> Path {
    Path::parse("Books['Gone With the Wind']").expect("fixture path must parse")
}
