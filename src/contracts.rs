// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Runtime contracts for the index and the snippet windows.
//!
//! Debug-mode assertions that verify the invariants the rest of the crate
//! relies on. These contracts:
//!
//! 1. Are **zero-cost in release builds** (use `debug_assert!`)
//! 2. Provide **early failure detection** during development
//!
//! # INVARIANTS (DO NOT REMOVE THESE CHECKS)
//!
//! | Contract Function              | Property                                  |
//! |--------------------------------|-------------------------------------------|
//! | `check_suffix_array_sorted`    | adjacent suffixes strictly ascending      |
//! | `check_occurrences_valid`      | every offset really starts the pattern    |
//! | `check_offsets_ascending`      | occurrences unique and sorted             |
//! | `check_windows_in_bounds`      | `0 <= lo <= hi <= corpus_len`             |
//!
//! # Usage
//!
//! ```ignore
//! use shakesearch::contracts::*;
//!
//! // In debug builds, this panics if invariant is violated
//! check_windows_in_bounds(&windows, corpus.len());
//!
//! // In release builds, this is a no-op
//! ```

use crate::types::Window;

// ============================================================================
// SUFFIX ARRAY CONTRACTS
// ============================================================================

/// Check that a suffix array is strictly sorted.
///
/// # Panics (debug builds only)
/// Panics if any adjacent pair violates the ordering or any entry is out of bounds.
#[inline]
pub fn check_suffix_array_sorted(text: &[u8], suffix_array: &[usize]) {
    debug_assert_eq!(
        suffix_array.len(),
        text.len(),
        "Contract violation: suffix array has {} entries for {} bytes",
        suffix_array.len(),
        text.len()
    );

    // Full ordering check is O(n^2) worst case; only run it on small inputs
    if cfg!(debug_assertions) && text.len() <= 4096 {
        for i in 1..suffix_array.len() {
            let prev = suffix_array[i - 1];
            let curr = suffix_array[i];
            debug_assert!(
                prev < text.len() && curr < text.len(),
                "Contract violation: suffix_array[{}] out of bounds",
                i
            );
            debug_assert!(
                text[prev..] < text[curr..],
                "Contract violation: suffix array not sorted at {}",
                i
            );
        }
    }
}

// ============================================================================
// OCCURRENCE CONTRACTS
// ============================================================================

/// Check that every offset starts an exact copy of `pattern` in `text`.
///
/// # Panics (debug builds only)
#[inline]
pub fn check_occurrences_valid(text: &[u8], pattern: &[u8], offsets: &[usize]) {
    for &offset in offsets {
        debug_assert!(
            offset + pattern.len() <= text.len(),
            "Contract violation: occurrence {} + {} exceeds corpus length {}",
            offset,
            pattern.len(),
            text.len()
        );
        debug_assert!(
            text.get(offset..offset + pattern.len()) == Some(pattern),
            "Contract violation: occurrence {} does not match the pattern",
            offset
        );
    }
}

/// Check that offsets are strictly ascending (sorted and unique).
///
/// # Panics (debug builds only)
#[inline]
pub fn check_offsets_ascending(offsets: &[usize]) {
    for pair in offsets.windows(2) {
        debug_assert!(
            pair[0] < pair[1],
            "Contract violation: offsets not strictly ascending ({} then {})",
            pair[0],
            pair[1]
        );
    }
}

// ============================================================================
// WINDOW CONTRACTS
// ============================================================================

/// Check that every window lies inside `[0, corpus_len]` with `lo <= hi`.
///
/// # Panics (debug builds only)
#[inline]
pub fn check_windows_in_bounds(windows: &[Window], corpus_len: usize) {
    for (i, window) in windows.iter().enumerate() {
        debug_assert!(
            window.start <= window.end && window.end <= corpus_len,
            "Contract violation: window {} is [{}, {}) for corpus length {}",
            i,
            window.start,
            window.end,
            corpus_len
        );
    }
}
