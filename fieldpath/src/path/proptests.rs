//! Property-based tests for path parsing and manipulation.
//!
//! The scanner-level unit tests pin the grammar's edge cases; this module
//! checks the structural laws: round trips, copy independence, and the
//! pop/push inverses.

use proptest::prelude::*;

use super::segment::Segment;
use super::types::Path;

// Identifiers mirror the schema layer's camel-case field names.
fn identifier_strategy() -> impl Strategy<Value = String> {
    "[A-Za-z][A-Za-z0-9]{0,7}"
}

fn dotted_subject_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec(identifier_strategy(), 1..6).prop_map(|parts| parts.join("."))
}

// Map keys may hold any printable character; quoting is the renderer's job.
fn key_strategy() -> impl Strategy<Value = String> {
    "[ -~]{0,12}"
}

fn segment_strategy() -> impl Strategy<Value = Segment> {
    prop_oneof![
        identifier_strategy().prop_map(Segment::Field),
        (0usize..10_000).prop_map(Segment::Element),
        key_strategy().prop_map(Segment::Key),
    ]
}

// A parseable path starts with a field; the rest is unconstrained.
fn segments_strategy() -> impl Strategy<Value = Vec<Segment>> {
    (
        identifier_strategy(),
        prop::collection::vec(segment_strategy(), 0..6),
    )
        .prop_map(|(first, mut rest)| {
            let mut segments = vec![Segment::Field(first)];
            segments.append(&mut rest);
            segments
        })
}

/// Renders a segment sequence back into subject notation, escaping quoted
/// keys, so the scanner can be driven with arbitrary well-formed input.
fn render(segments: &[Segment]) -> String {
    let mut subject = String::new();
    for (position, segment) in segments.iter().enumerate() {
        match segment {
            Segment::Field(name) => {
                if position > 0 {
                    subject.push('.');
                }
                subject.push_str(name);
            }
            Segment::Element(index) => {
                subject.push('[');
                subject.push_str(&index.to_string());
                subject.push(']');
            }
            Segment::Key(key) => {
                subject.push_str("['");
                for ch in key.chars() {
                    if ch == '\'' || ch == '\\' {
                        subject.push('\\');
                    }
                    subject.push(ch);
                }
                subject.push_str("']");
            }
        }
    }
    subject
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 1000,
        .. ProptestConfig::default()
    })]

    // Bracket-free subjects survive the parse/render round trip unchanged
    #[test]
    fn dotted_subjects_round_trip(subject in dotted_subject_strategy()) {
        let path = Path::parse(&subject).unwrap();
        prop_assert_eq!(path.to_dotted_string(), subject);
    }

    // Any well-formed segment sequence survives render-then-parse
    #[test]
    fn rendered_segments_round_trip(segments in segments_strategy()) {
        let subject = render(&segments);
        let path = Path::parse(&subject).unwrap();
        let parsed: Vec<Segment> = path.into_iter().collect();
        prop_assert_eq!(parsed, segments);
    }

    // Cloning shares no storage: mutating the clone never touches the source
    #[test]
    fn clone_is_independent(segments in segments_strategy()) {
        let original = Path::from_segments(segments.clone());
        let mut copy = original.clone();
        copy.pop();
        copy.push_back(Segment::Field("Extra".to_string()));

        prop_assert_eq!(original, Path::from_segments(segments));
    }

    // copy_at yields index + 1 segments inside bounds, None outside, and the
    // copy is independently mutable
    #[test]
    fn copy_at_lengths_and_independence(segments in segments_strategy(), index in 0usize..8) {
        let original = Path::from_segments(segments.clone());
        match original.copy_at(index) {
            Some(mut copy) => {
                prop_assert!(index < original.len());
                prop_assert_eq!(copy.len(), index + 1);

                copy.pop();
                copy.push_back(Segment::Element(999_999));
                prop_assert_eq!(original.len(), segments.len());
            }
            None => prop_assert!(index >= original.len()),
        }
    }

    // pop undoes push_back
    #[test]
    fn pop_inverts_push_back(segments in segments_strategy(), extra in segment_strategy()) {
        let mut path = Path::from_segments(segments.clone());
        path.push_back(extra.clone());

        prop_assert_eq!(path.pop(), Some(extra));
        prop_assert_eq!(path, Path::from_segments(segments));
    }

    // Draining from the front preserves insertion order
    #[test]
    fn pop_front_drains_in_order(segments in segments_strategy()) {
        let mut path = Path::from_segments(segments.clone());
        let mut drained = Vec::new();
        while let Some(segment) = path.pop_front() {
            drained.push(segment);
        }

        prop_assert!(path.is_empty());
        prop_assert_eq!(drained, segments);
    }

    // A dotted path is always a prefix of itself, case-folded or not
    #[test]
    fn dotted_path_is_its_own_prefix(subject in dotted_subject_strategy()) {
        let path = Path::parse(&subject).unwrap();
        prop_assert!(path.has_prefix(&subject));
        prop_assert!(path.has_prefix_fold(&subject.to_ascii_uppercase()));
    }

    // Corrupting the separators always fails the parse
    #[test]
    fn corrupted_separators_are_rejected(subject in dotted_subject_strategy()) {
        prop_assert!(Path::parse(&format!(".{subject}")).is_err());
        prop_assert!(Path::parse(&format!("{subject}.")).is_err());
        prop_assert!(Path::parse(&format!("{subject}..X")).is_err());
    }
}
