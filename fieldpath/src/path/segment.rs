//! Segment types for value paths.
//!
//! A path is an ordered sequence of segments, each of which addresses one
//! step of a traversal: a named field, a position in an ordered collection,
//! or an entry in an associative collection.

use std::fmt;

use serde::{Deserialize, Serialize};

/// One step of a value path.
///
/// Segments are immutable once created; all mutation happens at the
/// [`Path`](crate::Path) level.
///
/// # Examples
///
/// ```
/// use fieldpath::Segment;
///
/// let field = Segment::Field("Publisher".to_string());
/// let element = Segment::Element(0);
/// let key = Segment::Key("Gone With the Wind".to_string());
///
/// assert_eq!(field.as_field(), Some("Publisher"));
/// assert_eq!(element.as_element(), Some(0));
/// assert_eq!(key.as_key(), Some("Gone With the Wind"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "lowercase")]
pub enum Segment {
    /// A struct-like member, addressed by field name.
    Field(String),

    /// An element of an ordered collection field, addressed by position.
    Element(usize),

    /// An entry of an associative field, addressed by exact, case-sensitive
    /// string key.
    Key(String),
}

impl Segment {
    /// Returns the field name when this segment addresses a field.
    ///
    /// # Examples
    ///
    /// ```
    /// use fieldpath::Segment;
    ///
    /// assert_eq!(Segment::Field("City".to_string()).as_field(), Some("City"));
    /// assert_eq!(Segment::Element(3).as_field(), None);
    /// ```
    #[must_use]
    pub fn as_field(&self) -> Option<&str> {
        match self {
            Self::Field(name) => Some(name),
            _ => None,
        }
    }

    /// Returns the element index when this segment addresses a list element.
    #[must_use]
    pub fn as_element(&self) -> Option<usize> {
        match self {
            Self::Element(index) => Some(*index),
            _ => None,
        }
    }

    /// Returns the map key when this segment addresses a map entry.
    #[must_use]
    pub fn as_key(&self) -> Option<&str> {
        match self {
            Self::Key(key) => Some(key),
            _ => None,
        }
    }

    /// Returns `true` if this segment addresses a field.
    ///
    /// # Examples
    ///
    /// ```
    /// use fieldpath::Segment;
    ///
    /// assert!(Segment::Field("Name".to_string()).is_field());
    /// assert!(!Segment::Key("Name".to_string()).is_field());
    /// ```
    #[must_use]
    pub fn is_field(&self) -> bool {
        matches!(self, Self::Field(_))
    }
}

impl From<usize> for Segment {
    fn from(index: usize) -> Self {
        Self::Element(index)
    }
}

impl From<String> for Segment {
    fn from(name: String) -> Self {
        Self::Field(name)
    }
}

impl From<&str> for Segment {
    fn from(name: &str) -> Self {
        Self::Field(name.to_string())
    }
}

impl fmt::Display for Segment {
    /// Renders the segment for diagnostics: field names bare, accessors in
    /// bracket form. This is not the path serialization (see
    /// [`Path::to_dotted_string`](crate::Path::to_dotted_string)).
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Field(name) => write!(f, "{name}"),
            Self::Element(index) => write!(f, "[{index}]"),
            Self::Key(key) => write!(f, "['{key}']"),
        }
    }
}
