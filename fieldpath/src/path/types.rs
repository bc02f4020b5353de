//! The owned path value and its navigation and mutation operations.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::path::parser;
use crate::path::segment::Segment;

/// An ordered sequence of segments identifying one nested value.
///
/// A `Path` is created either by parsing a dotted-notation subject string or
/// by incremental construction with [`push_back`](Path::push_back). Insertion
/// order is traversal order, root to leaf. An empty path is valid and
/// represents "no selection".
///
/// `Clone` produces a fully independent duplicate: the clone shares no
/// backing storage with the original, so mutating one never affects the
/// other.
///
/// # Examples
///
/// ```
/// use fieldpath::{Path, Segment};
///
/// let path = Path::parse("Publisher.Addresses[0].City").unwrap();
/// assert_eq!(path.len(), 4);
/// assert_eq!(path.at(2), Some(&Segment::Element(0)));
/// assert_eq!(path.to_dotted_string(), "Publisher.Addresses.City");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Path {
    segments: Vec<Segment>,
}

impl Path {
    /// Creates an empty path.
    ///
    /// # Examples
    ///
    /// ```
    /// use fieldpath::Path;
    ///
    /// let path = Path::new();
    /// assert!(path.is_empty());
    /// ```
    #[must_use]
    pub const fn new() -> Self {
        Self {
            segments: Vec::new(),
        }
    }

    /// Parses a dotted-notation subject string into a path.
    ///
    /// The notation names fields with identifiers separated by `.`, list
    /// elements with `[index]`, and map entries with `['key']`. The empty
    /// string parses to the empty path. Parsing is all-or-nothing: on
    /// failure no partial path is produced.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidPath`] for any grammar violation: a leading,
    /// trailing, or doubled `.`, an accessor with no preceding identifier,
    /// an unterminated accessor or quoted key, non-digit content in an
    /// element accessor, or nested brackets.
    ///
    /// # Examples
    ///
    /// ```
    /// use fieldpath::{Path, Segment};
    ///
    /// let path = Path::parse("Books['Gone With the Wind']").unwrap();
    /// assert_eq!(path.len(), 2);
    /// assert_eq!(path.back(), Some(&Segment::Key("Gone With the Wind".to_string())));
    ///
    /// assert!(Path::parse("A..B").is_err());
    /// ```
    pub fn parse(subject: &str) -> Result<Self> {
        Ok(Self {
            segments: parser::parse(subject)?,
        })
    }

    /// Creates a path from an existing segment sequence.
    #[must_use]
    pub fn from_segments(segments: Vec<Segment>) -> Self {
        Self { segments }
    }

    /// Renders the path's field identifiers joined by `.`.
    ///
    /// Element and Key segments are not reconstructed into bracket form;
    /// this rendering is lossy for paths containing accessors and is not an
    /// inverse of [`parse`](Path::parse). For bracket-free paths the round
    /// trip holds.
    ///
    /// # Examples
    ///
    /// ```
    /// use fieldpath::Path;
    ///
    /// let simple = Path::parse("Publisher.Name").unwrap();
    /// assert_eq!(simple.to_dotted_string(), "Publisher.Name");
    ///
    /// let indexed = Path::parse("Addresses[0].City").unwrap();
    /// assert_eq!(indexed.to_dotted_string(), "Addresses.City");
    /// ```
    #[must_use]
    pub fn to_dotted_string(&self) -> String {
        self.segments
            .iter()
            .filter_map(Segment::as_field)
            .collect::<Vec<_>>()
            .join(".")
    }

    /// Removes and returns the last segment.
    ///
    /// Returns `None` and leaves the path unchanged if it is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use fieldpath::{Path, Segment};
    ///
    /// let mut path = Path::parse("A.B").unwrap();
    /// assert_eq!(path.pop(), Some(Segment::Field("B".to_string())));
    /// assert_eq!(path.len(), 1);
    ///
    /// let mut empty = Path::new();
    /// assert_eq!(empty.pop(), None);
    /// ```
    pub fn pop(&mut self) -> Option<Segment> {
        self.segments.pop()
    }

    /// Removes and returns the first segment.
    ///
    /// Returns `None` and leaves the path unchanged if it is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use fieldpath::{Path, Segment};
    ///
    /// let mut path = Path::parse("A.B").unwrap();
    /// assert_eq!(path.pop_front(), Some(Segment::Field("A".to_string())));
    /// assert_eq!(path.len(), 1);
    /// ```
    pub fn pop_front(&mut self) -> Option<Segment> {
        if self.segments.is_empty() {
            None
        } else {
            Some(self.segments.remove(0))
        }
    }

    /// Returns the segment at the supplied index, or `None` if the index is
    /// out of range. Never panics.
    #[must_use]
    pub fn at(&self, index: usize) -> Option<&Segment> {
        self.segments.get(index)
    }

    /// Returns the first segment, or `None` if the path is empty.
    #[must_use]
    pub fn front(&self) -> Option<&Segment> {
        self.segments.first()
    }

    /// Returns the last segment, or `None` if the path is empty.
    #[must_use]
    pub fn back(&self) -> Option<&Segment> {
        self.segments.last()
    }

    /// Appends a segment to the end of the path.
    ///
    /// # Examples
    ///
    /// ```
    /// use fieldpath::{Path, Segment};
    ///
    /// let mut path = Path::new();
    /// path.push_back(Segment::Field("Books".to_string()));
    /// path.push_back(Segment::Key("title".to_string()));
    /// assert_eq!(path.len(), 2);
    /// ```
    pub fn push_back(&mut self, segment: Segment) {
        self.segments.push(segment);
    }

    /// Returns an independent copy of the segments `[0, index]` inclusive.
    ///
    /// Returns `None` if the path is empty or `index` is out of range. The
    /// copy owns its own storage; mutating it never affects this path.
    ///
    /// # Examples
    ///
    /// ```
    /// use fieldpath::Path;
    ///
    /// let path = Path::parse("X.Y").unwrap();
    /// assert_eq!(path.copy_at(0).unwrap().to_dotted_string(), "X");
    /// assert_eq!(path.copy_at(1).unwrap().to_dotted_string(), "X.Y");
    /// assert!(path.copy_at(2).is_none());
    /// ```
    #[must_use]
    pub fn copy_at(&self, index: usize) -> Option<Self> {
        if index >= self.segments.len() {
            return None;
        }
        Some(Self {
            segments: self.segments[..=index].to_vec(),
        })
    }

    /// Returns `true` if the path has no segments.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Returns the number of segments.
    #[must_use]
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// Returns an iterator over the segments, root to leaf.
    ///
    /// # Examples
    ///
    /// ```
    /// use fieldpath::Path;
    ///
    /// let path = Path::parse("A.B[0]").unwrap();
    /// let kinds: Vec<bool> = path.iter().map(|s| s.is_field()).collect();
    /// assert_eq!(kinds, vec![true, true, false]);
    /// ```
    pub fn iter(&self) -> std::slice::Iter<'_, Segment> {
        self.segments.iter()
    }
}

impl fmt::Display for Path {
    /// Formats the path as its dotted rendering; see
    /// [`to_dotted_string`](Path::to_dotted_string) for the accessor caveat.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_dotted_string())
    }
}

impl FromStr for Path {
    type Err = Error;

    fn from_str(subject: &str) -> Result<Self> {
        Self::parse(subject)
    }
}

impl From<Vec<Segment>> for Path {
    fn from(segments: Vec<Segment>) -> Self {
        Self::from_segments(segments)
    }
}

impl IntoIterator for Path {
    type Item = Segment;
    type IntoIter = std::vec::IntoIter<Segment>;

    fn into_iter(self) -> Self::IntoIter {
        self.segments.into_iter()
    }
}

impl<'a> IntoIterator for &'a Path {
    type Item = &'a Segment;
    type IntoIter = std::slice::Iter<'a, Segment>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn field(name: &str) -> Segment {
        Segment::Field(name.to_string())
    }

    #[test]
    fn test_new_path_is_empty() {
        let path = Path::new();
        assert!(path.is_empty());
        assert_eq!(path.len(), 0);
        assert_eq!(path.front(), None);
        assert_eq!(path.back(), None);
    }

    #[test]
    fn test_parse_empty_string_is_empty_path() {
        let path = Path::parse("").unwrap();
        assert!(path.is_empty());
        assert_eq!(path.len(), 0);
    }

    #[test]
    fn test_positional_access() {
        let path = Path::parse("Publisher.Addresses[0].City").unwrap();

        assert_eq!(path.at(0), Some(&field("Publisher")));
        assert_eq!(path.at(2), Some(&Segment::Element(0)));
        assert_eq!(path.at(4), None);
        assert_eq!(path.front(), Some(&field("Publisher")));
        assert_eq!(path.back(), Some(&field("City")));
    }

    #[test]
    fn test_pop_removes_last() {
        let mut path = Path::parse("A.B.C").unwrap();
        assert_eq!(path.pop(), Some(field("C")));
        assert_eq!(path.pop(), Some(field("B")));
        assert_eq!(path.len(), 1);
    }

    #[test]
    fn test_pop_front_removes_first() {
        let mut path = Path::parse("A.B.C").unwrap();
        assert_eq!(path.pop_front(), Some(field("A")));
        assert_eq!(path.front(), Some(&field("B")));
        assert_eq!(path.len(), 2);
    }

    #[test]
    fn test_pop_on_empty_path() {
        let mut path = Path::new();
        assert_eq!(path.pop(), None);
        assert_eq!(path.pop_front(), None);
        assert_eq!(path.len(), 0);
    }

    #[test]
    fn test_push_back() {
        let mut path = Path::new();
        path.push_back(field("Books"));
        path.push_back(Segment::Key("title".to_string()));
        path.push_back(Segment::Element(1));

        assert_eq!(path.len(), 3);
        assert_eq!(path.back(), Some(&Segment::Element(1)));
    }

    #[test]
    fn test_clone_is_independent() {
        let original = Path::parse("A.B").unwrap();
        let mut copy = original.clone();
        copy.push_back(field("C"));
        copy.pop_front();

        assert_eq!(original.len(), 2);
        assert_eq!(original.to_dotted_string(), "A.B");
        assert_eq!(copy.to_dotted_string(), "B.C");
    }

    #[test]
    fn test_copy_at_bounds() {
        let path = Path::parse("X.Y").unwrap();

        assert_eq!(path.copy_at(0).unwrap().len(), 1);
        assert_eq!(path.copy_at(1).unwrap().len(), 2);
        assert!(path.copy_at(2).is_none());
        assert!(Path::new().copy_at(0).is_none());
    }

    #[test]
    fn test_copy_at_is_independent() {
        let original = Path::parse("X.Y.Z").unwrap();
        let mut copy = original.copy_at(1).unwrap();
        copy.pop();
        copy.push_back(field("W"));

        assert_eq!(original.to_dotted_string(), "X.Y.Z");
        assert_eq!(copy.to_dotted_string(), "X.W");
    }

    #[test]
    fn test_dotted_string_round_trip_for_simple_paths() {
        for subject in ["LastName", "Publisher.Name", "A.B.C.D"] {
            let path = Path::parse(subject).unwrap();
            assert_eq!(path.to_dotted_string(), subject);
        }
    }

    #[test]
    fn test_dotted_string_drops_accessors() {
        let path = Path::parse("Publisher.Addresses[0].City").unwrap();
        assert_eq!(path.to_dotted_string(), "Publisher.Addresses.City");

        let path = Path::parse("Books['Gone With the Wind']").unwrap();
        assert_eq!(path.to_dotted_string(), "Books");
    }

    #[test]
    fn test_display_matches_dotted_string() {
        let path = Path::parse("Publisher.Addresses[0].City").unwrap();
        assert_eq!(format!("{path}"), path.to_dotted_string());
    }

    #[test]
    fn test_from_str() {
        let path: Path = "Publisher.Name".parse().unwrap();
        assert_eq!(path.len(), 2);

        let result: std::result::Result<Path, _> = ".A".parse();
        assert!(result.is_err());
    }

    #[test]
    fn test_iteration() {
        let path = Path::parse("A[0].B").unwrap();
        let collected: Vec<Segment> = path.iter().cloned().collect();
        assert_eq!(
            collected,
            vec![field("A"), Segment::Element(0), field("B")]
        );

        let consumed: Vec<Segment> = path.into_iter().collect();
        assert_eq!(consumed, collected);
    }

    #[test]
    fn test_serde_round_trip() {
        let path = Path::parse("Books['Gone With the Wind'][2]").unwrap();
        let json = serde_json::to_string(&path).unwrap();
        let restored: Path = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, path);
    }

    #[test]
    fn test_serde_shape_is_the_segment_sequence() {
        let path = Path::parse("A[0]").unwrap();
        let json = serde_json::to_string(&path).unwrap();
        assert_eq!(
            json,
            r#"[{"kind":"field","value":"A"},{"kind":"element","value":0}]"#
        );
    }
}
