//! Value paths: a dotted mini-language naming one value inside a resource.
//!
//! A path names a single scalar or composite value nested inside a tree of
//! fields, list elements, and map entries, at arbitrary depth. The notation
//! is JSONPath-like: field names separated by `.`, list positions as
//! `[index]`, and map entries as `['key']`.
//!
//! # Key Concepts
//!
//! ## Notation
//!
//! Given a resource with a `Publisher` struct field containing an
//! `Addresses` list, the city of the first address is:
//!
//! ```text
//! Publisher.Addresses[0].City
//! ```
//!
//! and a book held in a map keyed by title is:
//!
//! ```text
//! Books['Gone With the Wind']
//! ```
//!
//! Map key matching is exact and case-sensitive.
//!
//! ## Segments
//!
//! Parsing produces an ordered [`Segment`] sequence, root to leaf. The
//! example above yields `Field(Publisher)`, `Field(Addresses)`,
//! `Element(0)`, `Field(City)`. Paths can also be assembled directly with
//! [`Path::push_back`], without parsing.
//!
//! ## Prefix matching
//!
//! [`Path::has_prefix`] and [`Path::has_prefix_fold`] test whether a plain
//! dotted candidate names an ancestor of (or equals) the path's leading
//! field identifiers, case-sensitively or not.
//!
//! # Examples
//!
//! ```
//! use fieldpath::{Path, Segment};
//!
//! let path = Path::parse("Publisher.Addresses[0].City").unwrap();
//! assert_eq!(path.len(), 4);
//! assert_eq!(path.front(), Some(&Segment::Field("Publisher".to_string())));
//! assert!(path.has_prefix("Publisher.Addresses"));
//!
//! // Navigation is total: missing elements are None, never a fault.
//! assert_eq!(path.at(10), None);
//! ```

mod parser;
mod prefix;
pub mod segment;
mod types;

#[cfg(all(test, feature = "property-tests"))]
mod proptests;

// Re-export key types
pub use segment::Segment;
pub use types::Path;
