//! Property-based tests for path construction.

use super::listing::compare_names;
use super::segment::sanitize;
use super::value::{AppendOutcome, PathValue};
use proptest::prelude::*;
use std::cmp::Ordering;
use std::collections::HashSet;
use std::ffi::OsStr;

fn segment_strategy() -> impl Strategy<Value = String> {
    "/[a-zA-Z0-9_.-]{0,12}(/[a-zA-Z0-9_.-]{1,8}){0,3}"
}

fn name_strategy() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9_.-]{1,12}"
}

fn line_strategy() -> impl Strategy<Value = Vec<u8>> {
    prop::collection::vec(any::<u8>(), 0..40)
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 2000,
        .. ProptestConfig::default()
    })]

    // Appending a present segment never changes the value
    #[test]
    fn append_existing_is_noop(segments in prop::collection::vec(segment_strategy(), 1..10), pick in any::<prop::sample::Index>()) {
        let mut value = PathValue::new();
        for segment in &segments {
            value.append(segment);
        }
        let before = value.clone();
        let existing = &segments[pick.index(segments.len())];

        prop_assert_eq!(value.append(existing), AppendOutcome::Duplicate);
        prop_assert_eq!(value, before);
    }

    // Colon-free segments come out in first-seen order, each exactly once
    #[test]
    fn value_matches_first_seen_order(segments in prop::collection::vec(segment_strategy(), 0..20)) {
        let mut value = PathValue::new();
        let mut seen = HashSet::new();
        let mut expected = Vec::new();
        for segment in &segments {
            value.append(segment);
            if seen.insert(segment.clone()) {
                expected.push(segment.clone());
            }
        }

        prop_assert_eq!(value.to_string(), expected.join(":"));
    }

    // Sanitized segments never contain a newline or an unescaped quote
    #[test]
    fn sanitized_segments_are_quotable(line in line_strategy()) {
        let segment = sanitize(&line);
        let bytes = segment.as_bytes();
        prop_assert!(!bytes.contains(&b'\n'));
        for (i, &b) in bytes.iter().enumerate() {
            if matches!(b, b'"' | b'\'' | b'$') {
                prop_assert!(i > 0 && bytes[i - 1] == b'\\');
            }
        }
    }

    // Name ordering is a total order consistent with equality
    #[test]
    fn compare_names_is_antisymmetric(a in name_strategy(), b in name_strategy()) {
        let ab = compare_names(OsStr::new(&a), OsStr::new(&b));
        let ba = compare_names(OsStr::new(&b), OsStr::new(&a));
        prop_assert_eq!(ab, ba.reverse());
        prop_assert_eq!(ab == Ordering::Equal, a == b);
    }

    // Ordering agrees with comparing lowercased names
    #[test]
    fn compare_names_ignores_case(a in name_strategy(), b in name_strategy()) {
        let folded = a.to_ascii_lowercase().cmp(&b.to_ascii_lowercase());
        if folded != Ordering::Equal {
            prop_assert_eq!(compare_names(OsStr::new(&a), OsStr::new(&b)), folded);
        }
    }
}
