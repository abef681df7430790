// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Match index construction and lookup.
//!
//! The index is a plain suffix array over the folded corpus bytes. Every
//! suffix that starts with a pattern sits in one contiguous run of the array,
//! so a lookup is two binary searches plus a copy of the run.
//!
//! # INVARIANTS (DO NOT VIOLATE)
//!
//! 1. **SUFFIX_ARRAY_SORTED**: `text[sa[i]..] < text[sa[i + 1]..]` for every i
//! 2. **SUFFIX_ARRAY_COMPLETE**: every offset in `0..text.len()` appears exactly once
//! 3. **FROZEN**: neither the text nor the array changes after `build`
//!
//! # Complexity
//!
//! | Operation | Cost             |
//! |-----------|------------------|
//! | `build`   | O(n) via SA-IS   |
//! | `lookup`  | O(m log n + k)   |

use std::cmp::Ordering;
use std::sync::Arc;

use crate::contracts::check_suffix_array_sorted;
use crate::sais;

/// Immutable exact-substring index over a byte string.
#[derive(Debug, Clone)]
pub struct MatchIndex {
    text: Arc<[u8]>,
    suffix_array: Vec<usize>,
}

impl MatchIndex {
    /// Build an index over `text`. Construction cannot fail.
    pub fn build(text: impl Into<Arc<[u8]>>) -> Self {
        let text = text.into();
        let suffix_array = sais::suffix_array(&text);

        // INVARIANT: SUFFIX_ARRAY_SORTED (checked in debug builds only)
        check_suffix_array_sorted(&text, &suffix_array);

        Self { text, suffix_array }
    }

    /// Offsets where `pattern` occurs, in suffix array order (not sorted by offset).
    ///
    /// `limit` caps the number of offsets returned; `None` returns all of them.
    /// The empty pattern is a prefix of every suffix and therefore matches at
    /// every offset. Patterns longer than the text match nowhere.
    pub fn lookup(&self, pattern: &[u8], limit: Option<usize>) -> Vec<usize> {
        let (start, end) = self.match_range(pattern);
        let end = match limit {
            Some(limit) => end.min(start.saturating_add(limit)),
            None => end,
        };
        self.suffix_array[start..end].to_vec()
    }

    /// Number of occurrences of `pattern`, without materializing offsets.
    pub fn count(&self, pattern: &[u8]) -> usize {
        let (start, end) = self.match_range(pattern);
        end - start
    }

    /// Half-open range of suffix array slots whose suffix starts with `pattern`.
    fn match_range(&self, pattern: &[u8]) -> (usize, usize) {
        if pattern.len() > self.text.len() {
            return (0, 0);
        }

        // Binary search: first suffix whose prefix is >= pattern
        let start = self
            .suffix_array
            .partition_point(|&pos| self.compare_prefix(pos, pattern) == Ordering::Less);

        // Binary search: first suffix (from start) whose prefix is > pattern
        let end = start
            + self.suffix_array[start..]
                .partition_point(|&pos| self.compare_prefix(pos, pattern) != Ordering::Greater);

        (start, end)
    }

    /// Compare the first `pattern.len()` bytes of the suffix at `pos` with `pattern`.
    ///
    /// A suffix shorter than the pattern compares by its full length, which
    /// places it before the pattern when it is a proper prefix of it.
    #[inline]
    fn compare_prefix(&self, pos: usize, pattern: &[u8]) -> Ordering {
        let suffix = &self.text[pos..];
        let head = &suffix[..suffix.len().min(pattern.len())];
        head.cmp(pattern)
    }

    /// Number of indexed suffixes (equal to the text length).
    pub fn len(&self) -> usize {
        self.suffix_array.len()
    }

    pub fn is_empty(&self) -> bool {
        self.suffix_array.is_empty()
    }

    /// Read-only view of the suffix array.
    pub fn suffix_array(&self) -> &[usize] {
        &self.suffix_array
    }

    /// The indexed bytes.
    pub fn text(&self) -> &[u8] {
        &self.text
    }
}
