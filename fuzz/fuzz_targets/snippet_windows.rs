// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for window arithmetic.
//!
//! Feeds arbitrary sorted offsets, query lengths, radii and corpus lengths
//! straight into `compute_windows`.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use shakesearch::compute_windows;

#[derive(Arbitrary, Debug)]
struct Input {
    gaps: Vec<u16>,
    q_len: u16,
    radius: u32,
    tail: u16,
}

fuzz_target!(|input: Input| {
    if input.gaps.len() > 512 {
        return;
    }

    let mut offsets = Vec::with_capacity(input.gaps.len());
    let mut position = 0usize;
    for (i, gap) in input.gaps.iter().enumerate() {
        // Distinct, ascending offsets
        position += if i == 0 { *gap as usize } else { *gap as usize + 1 };
        offsets.push(position);
    }
    let q_len = input.q_len as usize;
    let corpus_len = position + q_len + input.tail as usize;
    let radius = input.radius as usize;

    let windows = compute_windows(&offsets, q_len, corpus_len, radius);
    assert_eq!(windows.len(), offsets.len());

    for (i, window) in windows.iter().enumerate() {
        assert!(window.start <= window.end);
        assert!(window.end <= corpus_len);
        if i > 0 && offsets[i] <= offsets[i - 1] + radius {
            assert!(windows[i - 1].end <= window.start, "trimmed neighbors meet");
        }
    }
});
