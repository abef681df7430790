// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Snippet query engine.
//!
//! A query is folded, looked up in the match index, and every occurrence is
//! turned into a window of original-case context. Windows of neighboring
//! occurrences are trimmed so they meet near the midpoint between matches
//! instead of repeating the same text.
//!
//! # Windowing
//!
//! ```text
//! corpus:  to be or not to be
//!          ^            ^
//!          0            13            (occurrences of "to", q_len = 2)
//!
//! default: [0 - 250, 0 + 250)  [13 - 250, 13 + 250)
//! trim:    hi = (13 + 0 + 2) / 2 = 7  lo = (0 + 13 + 2) / 2 = 7
//! clamp:   [0, 7)              [7, 18)
//! result:  "to be o"           "r not to be"
//! ```
//!
//! The midpoint rule reduces overlap between neighbors but does not rule it
//! out when spacing is irregular. Very dense occurrences can produce an
//! inverted window, which is emitted as an empty snippet.

use std::path::Path;

use crate::config::SearchConfig;
use crate::contracts::{check_occurrences_valid, check_offsets_ascending, check_windows_in_bounds};
use crate::corpus::Corpus;
use crate::error::LoadError;
use crate::index::MatchIndex;
use crate::types::{Snippet, Window};
use crate::utils::fold_case;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Corpus plus index, built once and shared read-only by every query.
///
/// `Searcher` is `Send + Sync`; wrap it in an `Arc` to share across threads.
#[derive(Debug, Clone)]
pub struct Searcher {
    corpus: Corpus,
    index: MatchIndex,
    config: SearchConfig,
}

impl Searcher {
    /// Load the corpus at `path` and build its index.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, LoadError> {
        Self::open_with_config(path, SearchConfig::default())
    }

    pub fn open_with_config(
        path: impl AsRef<Path>,
        config: SearchConfig,
    ) -> Result<Self, LoadError> {
        let corpus = Corpus::load(path)?;
        Ok(Self::with_config(corpus, config))
    }

    pub fn from_corpus(corpus: Corpus) -> Self {
        Self::with_config(corpus, SearchConfig::default())
    }

    pub fn with_config(corpus: Corpus, config: SearchConfig) -> Self {
        let started = std::time::Instant::now();
        let index = MatchIndex::build(corpus.folded().clone());
        tracing::info!(
            suffixes = index.len(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "built match index"
        );
        Self {
            corpus,
            index,
            config,
        }
    }

    pub fn corpus(&self) -> &Corpus {
        &self.corpus
    }

    pub fn index(&self) -> &MatchIndex {
        &self.index
    }

    pub fn config(&self) -> SearchConfig {
        self.config
    }

    /// All occurrences of `query`, case-insensitive, in ascending offset order.
    ///
    /// The empty query returns nothing.
    pub fn occurrences(&self, query: &str) -> Vec<usize> {
        if query.is_empty() {
            return Vec::new();
        }
        let pattern = fold_case(query);
        let mut offsets = self.index.lookup(pattern.as_bytes(), None);
        // Index order follows the suffix array; neighbors must be adjacent by offset
        offsets.sort_unstable();

        check_occurrences_valid(self.index.text(), pattern.as_bytes(), &offsets);
        check_offsets_ascending(&offsets);
        offsets
    }

    /// Context windows for every occurrence of `query`, before character alignment.
    pub fn search_windows(&self, query: &str) -> Vec<Window> {
        let offsets = self.occurrences(query);
        compute_windows(
            &offsets,
            query.len(),
            self.corpus.len(),
            self.config.context_radius,
        )
    }

    /// Snippet text for every occurrence of `query`, left to right.
    pub fn search(&self, query: &str) -> Vec<String> {
        let windows = self.search_windows(query);
        tracing::debug!(query, hits = windows.len(), "search");
        windows
            .into_iter()
            .map(|window| self.corpus.slice(window).to_string())
            .collect()
    }

    /// Like [`search`](Self::search), keeping match offsets and window bounds.
    pub fn search_snippets(&self, query: &str) -> Vec<Snippet> {
        let offsets = self.occurrences(query);
        let windows = compute_windows(
            &offsets,
            query.len(),
            self.corpus.len(),
            self.config.context_radius,
        );
        tracing::debug!(query, hits = windows.len(), "search");

        offsets
            .into_iter()
            .zip(windows)
            .map(|(offset, window)| {
                let (start, end) = self.corpus.char_aligned(window);
                Snippet {
                    offset,
                    start,
                    end,
                    text: self.corpus.text()[start..end].to_string(),
                }
            })
            .collect()
    }

    /// Answer several queries, in parallel when the `parallel` feature is on.
    pub fn search_many(&self, queries: &[String]) -> Vec<Vec<Snippet>> {
        #[cfg(feature = "parallel")]
        {
            queries.par_iter().map(|q| self.search_snippets(q)).collect()
        }
        #[cfg(not(feature = "parallel"))]
        {
            queries.iter().map(|q| self.search_snippets(q)).collect()
        }
    }
}

/// Compute one window per occurrence.
///
/// `offsets` must be sorted ascending. Each occurrence starts with
/// `[o - radius, o + radius)`; a bound that reaches a neighbor is moved to
/// `(neighbor + o + q_len) / 2`; the result is clamped to `[0, corpus_len]`.
/// Inverted windows collapse to empty ones.
pub fn compute_windows(
    offsets: &[usize],
    q_len: usize,
    corpus_len: usize,
    radius: usize,
) -> Vec<Window> {
    let mut windows = Vec::with_capacity(offsets.len());

    for (i, &offset) in offsets.iter().enumerate() {
        // Saturating at zero does not change the neighbor test: 0 <= prev always holds
        let mut lo = offset.saturating_sub(radius);
        let mut hi = offset.saturating_add(radius);

        if i > 0 {
            let prev = offsets[i - 1];
            if lo <= prev {
                lo = (prev + offset + q_len) / 2;
            }
        }
        if let Some(&next) = offsets.get(i + 1) {
            if hi >= next {
                hi = (next + offset + q_len) / 2;
            }
        }

        let lo = lo.min(corpus_len);
        let hi = hi.min(corpus_len);
        windows.push(Window::new(lo, hi));
    }

    check_windows_in_bounds(&windows, corpus_len);
    windows
}
