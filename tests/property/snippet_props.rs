//! Snippets stay inside the corpus, follow corpus order and respect neighbors.

use proptest::prelude::*;
use shakesearch::{Corpus, SearchConfig, Searcher};

use super::common::naive_occurrences;

fn corpus_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-dA-D ,.\n]{0,200}").unwrap()
}

fn query_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-dA-D]{1,3}").unwrap()
}

fn searcher(text: &str, radius: usize) -> Searcher {
    Searcher::with_config(
        Corpus::from_text(text),
        SearchConfig {
            context_radius: radius,
        },
    )
}

proptest! {
    #[test]
    fn one_snippet_per_occurrence(
        text in corpus_strategy(),
        query in query_strategy(),
        radius in 0usize..60,
    ) {
        let s = searcher(&text, radius);
        let expected = naive_occurrences(&text, &query);
        let snippets = s.search_snippets(&query);
        prop_assert_eq!(snippets.len(), expected.len());
        let offsets: Vec<usize> = snippets.iter().map(|sn| sn.offset).collect();
        prop_assert_eq!(offsets, expected);
    }

    #[test]
    fn snippet_text_is_the_corpus_slice(
        text in corpus_strategy(),
        query in query_strategy(),
        radius in 0usize..60,
    ) {
        let s = searcher(&text, radius);
        for snippet in s.search_snippets(&query) {
            prop_assert!(snippet.start <= snippet.end);
            prop_assert!(snippet.end <= text.len());
            prop_assert_eq!(&snippet.text, &text[snippet.start..snippet.end]);
        }
    }

    #[test]
    fn windows_never_exceed_the_radius(
        text in corpus_strategy(),
        query in query_strategy(),
        radius in 0usize..60,
    ) {
        let s = searcher(&text, radius);
        let offsets = s.occurrences(&query);
        // A trimmed end sits at a midpoint that includes the match itself
        let reach = radius.max(query.len());
        for (offset, window) in offsets.iter().zip(s.search_windows(&query)) {
            prop_assert!(window.start >= offset.saturating_sub(radius));
            prop_assert!(window.end <= offset + reach);
        }
    }

    #[test]
    fn trimmed_neighbors_do_not_overlap(
        text in corpus_strategy(),
        query in query_strategy(),
        radius in 0usize..60,
    ) {
        let s = searcher(&text, radius);
        let offsets = s.occurrences(&query);
        let windows = s.search_windows(&query);
        for i in 1..windows.len() {
            // A bound that reached its neighbor was moved to the shared midpoint
            if offsets[i] <= offsets[i - 1] + radius {
                prop_assert!(windows[i - 1].end <= windows[i].start);
            }
        }
    }

    #[test]
    fn query_case_is_irrelevant(text in corpus_strategy(), query in query_strategy()) {
        let s = searcher(&text, 20);
        prop_assert_eq!(s.search(&query.to_uppercase()), s.search(&query.to_lowercase()));
    }
}
