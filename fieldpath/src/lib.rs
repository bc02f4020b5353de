#![deny(missing_docs, unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

//! # fieldpath
//!
//! A library for parsing and manipulating dotted value paths.
//!
//! A value path is a JSONPath-like notation naming a single value nested
//! inside a resource's fields at arbitrary depth: field names separated by
//! `.`, list elements as `[index]`, map entries as `['key']`. The library
//! parses the notation into an ordered segment sequence and provides
//! navigation, mutation, copy, and prefix-comparison operations on it. It
//! never evaluates a path against concrete data; field lookup belongs to
//! the schema layer consuming the parsed segments.
//!
//! ## Core Types
//!
//! - [`Path`] and [`Segment`]: the parsed path value and its steps
//! - [`Error`] and [`Result`]: error handling types
//! - [`OutputFormat`] and [`OutputFormatter`]: segment-sequence rendering
//! - [`Logger`] and [`LogLevel`]: logging infrastructure
//!
//! ## Examples
//!
//! ```
//! use fieldpath::{Path, Segment};
//!
//! // Parse a subject string
//! let path = Path::parse("Publisher.Addresses[0].City").unwrap();
//! assert_eq!(path.len(), 4);
//! assert_eq!(path.at(2), Some(&Segment::Element(0)));
//!
//! // Or build a path incrementally
//! let mut built = Path::new();
//! built.push_back(Segment::Field("Books".to_string()));
//! built.push_back(Segment::Key("Gone With the Wind".to_string()));
//! assert_eq!(built.len(), 2);
//!
//! // Prefix matching against a dotted candidate
//! assert!(path.has_prefix("Publisher.Addresses"));
//! assert!(!path.has_prefix("publisher"));
//! assert!(path.has_prefix_fold("publisher"));
//! ```

pub mod error;
pub mod logging;
pub mod output;
pub mod path;

// Re-export key types at crate root for convenience
pub use error::{Error, Result};
pub use logging::{init_logger, LogLevel, Logger};
pub use output::{OutputFormat, OutputFormatter};
pub use path::{Path, Segment};
