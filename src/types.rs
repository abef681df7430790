// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Core value types shared by the engine, the CLI and the server.

use serde::{Deserialize, Serialize};

/// A half-open byte range `[start, end)` into the corpus.
///
/// Invariant: `start <= end`. Bounds against the corpus length are enforced
/// where windows are computed (see `contracts::check_windows_in_bounds`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Window {
    pub start: usize,
    pub end: usize,
}

impl Window {
    /// Build a window. An inverted range collapses to an empty window at `start`.
    pub fn new(start: usize, end: usize) -> Self {
        Self {
            start,
            end: end.max(start),
        }
    }

    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    pub fn contains(&self, offset: usize) -> bool {
        self.start <= offset && offset < self.end
    }
}

/// One search hit: where the match is and the context text around it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snippet {
    /// Byte offset of the match in the corpus.
    pub offset: usize,
    /// Start of the context window (inclusive).
    pub start: usize,
    /// End of the context window (exclusive).
    pub end: usize,
    /// Original-case corpus text for `[start, end)`.
    pub text: String,
}

impl Snippet {
    pub fn window(&self) -> Window {
        Window::new(self.start, self.end)
    }

    /// Byte range of the match relative to `text`, if the match lies inside the window.
    pub fn match_range(&self, query_len: usize) -> Option<(usize, usize)> {
        if self.offset < self.start || self.offset + query_len > self.end {
            return None;
        }
        let local = self.offset - self.start;
        Some((local, local + query_len))
    }
}
