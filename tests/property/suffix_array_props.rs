//! The suffix array is a sorted permutation of every suffix and finds every match.

use proptest::prelude::*;
use shakesearch::{suffix_array, MatchIndex};

fn naive_suffix_array(text: &[u8]) -> Vec<usize> {
    let mut sa: Vec<usize> = (0..text.len()).collect();
    sa.sort_by(|&a, &b| text[a..].cmp(&text[b..]));
    sa
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    #[test]
    fn matches_naive_sort(text in prop::collection::vec(any::<u8>(), 0..200)) {
        prop_assert_eq!(suffix_array(&text), naive_suffix_array(&text));
    }

    #[test]
    fn small_alphabet_matches_naive_sort(text in prop::collection::vec(0u8..3, 0..300)) {
        // Long runs of repeated symbols force the recursive naming step
        prop_assert_eq!(suffix_array(&text), naive_suffix_array(&text));
    }

    #[test]
    fn is_a_permutation(text in prop::collection::vec(any::<u8>(), 0..200)) {
        let mut sa = suffix_array(&text);
        sa.sort_unstable();
        prop_assert_eq!(sa, (0..text.len()).collect::<Vec<_>>());
    }

    #[test]
    fn lookup_finds_every_occurrence(
        text in prop::collection::vec(b'a'..b'e', 0..150),
        pattern in prop::collection::vec(b'a'..b'e', 1..4),
    ) {
        let index = MatchIndex::build(text.clone());
        let mut found = index.lookup(&pattern, None);
        found.sort_unstable();

        let expected: Vec<usize> = if pattern.len() > text.len() {
            Vec::new()
        } else {
            (0..=text.len() - pattern.len())
                .filter(|&i| text[i..].starts_with(&pattern))
                .collect()
        };
        prop_assert_eq!(index.count(&pattern), expected.len());
        prop_assert_eq!(found, expected);
    }

    #[test]
    fn limit_caps_results(
        text in prop::collection::vec(b'a'..b'c', 0..100),
        limit in 0usize..10,
    ) {
        let index = MatchIndex::build(text);
        let all = index.lookup(b"a", None);
        let capped = index.lookup(b"a", Some(limit));
        prop_assert_eq!(capped.len(), all.len().min(limit));
        prop_assert!(capped.iter().all(|o| all.contains(o)));
    }
}
