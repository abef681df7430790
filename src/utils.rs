// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Utility functions for string processing.

/// Fold a string to lowercase without changing its byte layout.
///
/// Each character is replaced by its lowercase form only when that form is a
/// single character of the same UTF-8 width. Everything else is kept as-is:
/// - "HAMLET" → "hamlet"
/// - "Ophélie" → "ophélie" (É and é are both two bytes)
/// - "İstanbul" → "İstanbul" (İ lowercases to two characters, so it stays)
///
/// The output always has the same length and the same character boundaries as
/// the input, which lets an offset found in the folded text be used directly
/// against the original.
pub fn fold_case(value: &str) -> String {
    let mut folded = String::with_capacity(value.len());
    for c in value.chars() {
        folded.push(fold_char(c));
    }
    folded
}

#[inline]
fn fold_char(c: char) -> char {
    if c.is_ascii() {
        return c.to_ascii_lowercase();
    }
    let mut lower = c.to_lowercase();
    match (lower.next(), lower.next()) {
        (Some(l), None) if l.len_utf8() == c.len_utf8() => l,
        _ => c,
    }
}

/// Largest character boundary `<= index`, clamped to the text length.
pub fn floor_char_boundary(text: &str, index: usize) -> usize {
    if index >= text.len() {
        return text.len();
    }
    let mut i = index;
    while !text.is_char_boundary(i) {
        i -= 1;
    }
    i
}

/// Smallest character boundary `>= index`, clamped to the text length.
pub fn ceil_char_boundary(text: &str, index: usize) -> usize {
    if index >= text.len() {
        return text.len();
    }
    let mut i = index;
    while !text.is_char_boundary(i) {
        i += 1;
    }
    i
}
