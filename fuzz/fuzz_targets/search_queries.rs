// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for search query handling.
//!
//! Arbitrary corpora and queries, including multibyte text and NUL bytes.
//! Every snippet must be a valid corpus slice around a real occurrence.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use shakesearch::{Corpus, SearchConfig, Searcher};

#[derive(Arbitrary, Debug)]
struct Input {
    corpus: String,
    query: String,
    radius: u8,
}

fuzz_target!(|input: Input| {
    // Cap sizes to keep each run fast
    if input.corpus.len() > 4096 || input.query.len() > 64 {
        return;
    }

    let searcher = Searcher::with_config(
        Corpus::from_text(input.corpus.clone()),
        SearchConfig {
            context_radius: input.radius as usize,
        },
    );

    let offsets = searcher.occurrences(&input.query);
    let snippets = searcher.search_snippets(&input.query);
    assert_eq!(offsets.len(), snippets.len(), "one snippet per occurrence");

    let folded = searcher.corpus().folded();
    let pattern = shakesearch::fold_case(&input.query);
    for (offset, snippet) in offsets.iter().zip(&snippets) {
        assert_eq!(*offset, snippet.offset);
        assert!(folded[*offset..].starts_with(pattern.as_bytes()));
        assert!(snippet.start <= snippet.end && snippet.end <= input.corpus.len());
        assert_eq!(snippet.text, &input.corpus[snippet.start..snippet.end]);
    }

    for pair in offsets.windows(2) {
        assert!(pair[0] < pair[1], "offsets ascend");
    }

    // The string form must agree with the detailed form
    assert_eq!(searcher.search(&input.query).len(), snippets.len());
});
