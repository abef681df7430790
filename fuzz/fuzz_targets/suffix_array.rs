// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for suffix array construction.
//!
//! Compares SA-IS against a plain sort of all suffixes.

#![no_main]

use libfuzzer_sys::fuzz_target;
use shakesearch::suffix_array;

fuzz_target!(|text: &[u8]| {
    if text.len() > 2048 {
        return;
    }

    let sa = suffix_array(text);
    let mut expected: Vec<usize> = (0..text.len()).collect();
    expected.sort_by(|&a, &b| text[a..].cmp(&text[b..]));
    assert_eq!(sa, expected);
});
