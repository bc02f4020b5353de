//! Dotted-prefix matching.
//!
//! Prefix matching answers "is this dotted candidate an ancestor of (or
//! equal to) the front of this path?" without evaluating either against
//! data. The subject is always a plain dotted string of identifiers; it is
//! split on `.` and compared front-to-back against the path's segments
//! rendered as plain identifiers. Only `Field` segments render as
//! identifiers, so a compared position holding an `Element` or `Key`
//! segment never matches (bracketed subjects are out of contract).

use crate::path::segment::Segment;
use crate::path::types::Path;

impl Path {
    /// Returns `true` if the subject, split on `.`, matches this path's
    /// leading field identifiers. Comparison is case-sensitive.
    ///
    /// Returns `false` when the candidate list is longer than the path.
    ///
    /// # Examples
    ///
    /// ```
    /// use fieldpath::Path;
    ///
    /// let path = Path::parse("A.B").unwrap();
    ///
    /// assert!(path.has_prefix("A"));
    /// assert!(path.has_prefix("A.B"));
    /// assert!(!path.has_prefix("A.B.C"));
    /// assert!(!path.has_prefix("B"));
    /// assert!(!path.has_prefix("A.C"));
    /// assert!(!path.has_prefix("a"));
    /// ```
    #[must_use]
    pub fn has_prefix(&self, subject: &str) -> bool {
        self.matches_prefix(subject, |candidate, identifier| candidate == identifier)
    }

    /// Same as [`has_prefix`](Path::has_prefix) with ASCII
    /// case-insensitive comparison.
    ///
    /// # Examples
    ///
    /// ```
    /// use fieldpath::Path;
    ///
    /// let path = Path::parse("A.B").unwrap();
    ///
    /// assert!(path.has_prefix_fold("a"));
    /// assert!(path.has_prefix_fold("a.b"));
    /// assert!(!path.has_prefix_fold("a.b.c"));
    /// assert!(!path.has_prefix_fold("b"));
    /// ```
    #[must_use]
    pub fn has_prefix_fold(&self, subject: &str) -> bool {
        self.matches_prefix(subject, str::eq_ignore_ascii_case)
    }

    fn matches_prefix(&self, subject: &str, eq: impl Fn(&str, &str) -> bool) -> bool {
        let candidates: Vec<&str> = subject.split('.').collect();
        if candidates.len() > self.len() {
            return false;
        }
        candidates.iter().enumerate().all(|(position, candidate)| {
            self.at(position)
                .and_then(Segment::as_field)
                .map_or(false, |identifier| eq(candidate, identifier))
        })
    }
}
