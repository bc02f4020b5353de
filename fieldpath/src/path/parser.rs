//! Subject string parser for the dotted value-path notation.
//!
//! The parser is a single left-to-right scan with no backtracking. An
//! identifier buffer accumulates ordinary characters; `.` and `[` terminate
//! the buffer and emit segments. Parsing is all-or-nothing: either the whole
//! subject is consumed into a well-formed segment sequence or the scan fails
//! with [`Error::InvalidPath`] and no partial result.

use crate::error::{Error, Result};
use crate::path::segment::Segment;

/// Parses a subject string into a segment sequence.
pub(crate) fn parse(subject: &str) -> Result<Vec<Segment>> {
    // An empty subject is the empty path, not an error.
    if subject.is_empty() {
        return Ok(Vec::new());
    }
    if !subject.contains('[') {
        // No accessors: the subject is a plain dotted chain of field names.
        log::debug!("parsing {subject:?} on the bracket-free fast path");
        return parse_fields(subject);
    }
    Scanner::new(subject).run()
}

/// Splits a bracket-free subject on `.`, validating each identifier.
fn parse_fields(subject: &str) -> Result<Vec<Segment>> {
    let mut segments = Vec::new();
    let mut offset = 0;
    for part in subject.split('.') {
        if part.is_empty() {
            return Err(Error::InvalidPath {
                subject: subject.to_string(),
                position: offset,
                reason: "empty identifier".to_string(),
            });
        }
        segments.push(Segment::Field(part.to_string()));
        offset += part.len() + 1;
    }
    Ok(segments)
}

/// Cursor-based scanner for subjects containing bracket accessors.
struct Scanner<'a> {
    subject: &'a str,
    pos: usize,
    buf: String,
    segments: Vec<Segment>,
}

impl<'a> Scanner<'a> {
    fn new(subject: &'a str) -> Self {
        Self {
            subject,
            pos: 0,
            buf: String::new(),
            segments: Vec::new(),
        }
    }

    /// Returns the character at the cursor without advancing.
    fn peek(&self) -> Option<char> {
        self.subject[self.pos..].chars().next()
    }

    /// Returns the character at the cursor and advances past it.
    fn bump(&mut self) -> Option<char> {
        let ch = self.peek()?;
        self.pos += ch.len_utf8();
        Some(ch)
    }

    fn error(&self, reason: &str) -> Error {
        self.error_at(self.pos, reason)
    }

    fn error_at(&self, position: usize, reason: &str) -> Error {
        Error::InvalidPath {
            subject: self.subject.to_string(),
            position,
            reason: reason.to_string(),
        }
    }

    /// Emits a `Field` segment for the buffered identifier, if any.
    fn flush_field(&mut self) {
        if !self.buf.is_empty() {
            self.segments
                .push(Segment::Field(std::mem::take(&mut self.buf)));
        }
    }

    fn run(mut self) -> Result<Vec<Segment>> {
        // `after_accessor` allows `.` and `[` directly after a closing `]`
        // (chained accessors, or a dot continuing the path). `dot_pending`
        // rejects a subject that ends on an unconsumed separator.
        let mut after_accessor = false;
        let mut dot_pending = false;
        while let Some(ch) = self.peek() {
            match ch {
                '.' => {
                    if self.buf.is_empty() && !after_accessor {
                        return Err(self.error("expected an identifier before '.'"));
                    }
                    self.flush_field();
                    self.bump();
                    after_accessor = false;
                    dot_pending = true;
                }
                '[' => {
                    if self.buf.is_empty() && !after_accessor {
                        return Err(self.error("accessor has no preceding field"));
                    }
                    self.flush_field();
                    self.bump();
                    self.scan_accessor()?;
                    after_accessor = true;
                    dot_pending = false;
                }
                _ => {
                    self.buf.push(ch);
                    self.bump();
                    after_accessor = false;
                    dot_pending = false;
                }
            }
        }
        if dot_pending && self.buf.is_empty() {
            return Err(self.error("trailing '.'"));
        }
        self.flush_field();
        Ok(self.segments)
    }

    /// Scans one accessor body; the cursor sits just past the opening `[`.
    fn scan_accessor(&mut self) -> Result<()> {
        match self.peek() {
            Some(ch) if ch.is_ascii_digit() => self.scan_element(),
            Some('\'') => self.scan_key(),
            Some(_) => Err(self.error("expected a digit or quoted key after '['")),
            None => Err(self.error("unterminated accessor")),
        }
    }

    /// Scans a digit run terminated by `]` into an `Element` segment.
    fn scan_element(&mut self) -> Result<()> {
        let start = self.pos;
        let mut digits = String::new();
        loop {
            match self.peek() {
                Some(ch) if ch.is_ascii_digit() => {
                    digits.push(ch);
                    self.bump();
                }
                Some(']') => {
                    self.bump();
                    let index = digits
                        .parse::<usize>()
                        .map_err(|_| self.error_at(start, "element index out of range"))?;
                    self.segments.push(Segment::Element(index));
                    return Ok(());
                }
                Some(_) => {
                    return Err(self.error("expected a digit or ']' in element accessor"));
                }
                None => return Err(self.error("unterminated accessor")),
            }
        }
    }

    /// Scans a single-quoted key terminated by an unescaped `'` into a `Key`
    /// segment. A backslash escapes the character that follows it.
    fn scan_key(&mut self) -> Result<()> {
        self.bump(); // opening quote
        let mut key = String::new();
        loop {
            match self.bump() {
                Some('\'') => break,
                Some('\\') => match self.bump() {
                    Some(escaped) => key.push(escaped),
                    None => return Err(self.error("unterminated quoted key")),
                },
                Some(ch) => key.push(ch),
                None => return Err(self.error("unterminated quoted key")),
            }
        }
        match self.peek() {
            Some(']') => {
                self.bump();
                self.segments.push(Segment::Key(key));
                Ok(())
            }
            Some(_) => Err(self.error("expected ']' after quoted key")),
            None => Err(self.error("unterminated accessor")),
        }
    }
}
