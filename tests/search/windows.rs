//! Window arithmetic, tested directly against `compute_windows`.

use shakesearch::{compute_windows, Window};

fn bounds(windows: &[Window]) -> Vec<(usize, usize)> {
    windows.iter().map(|w| (w.start, w.end)).collect()
}

#[test]
fn lone_match_gets_full_radius() {
    let windows = compute_windows(&[500], 5, 2_000, 250);
    assert_eq!(bounds(&windows), vec![(250, 750)]);
}

#[test]
fn start_of_corpus_clamps_to_zero() {
    let windows = compute_windows(&[0], 3, 3, 250);
    assert_eq!(bounds(&windows), vec![(0, 3)]);
}

#[test]
fn end_of_corpus_clamps_to_length() {
    let windows = compute_windows(&[90], 3, 100, 20);
    assert_eq!(bounds(&windows), vec![(70, 100)]);
}

#[test]
fn close_neighbors_meet_at_the_midpoint() {
    let windows = compute_windows(&[5, 7], 2, 100, 10);
    assert_eq!(bounds(&windows), vec![(0, 7), (7, 17)]);
}

#[test]
fn chain_of_neighbors_tiles_the_range() {
    let windows = compute_windows(&[10, 30, 50], 2, 60, 20);
    assert_eq!(bounds(&windows), vec![(0, 21), (21, 41), (41, 60)]);
    for pair in windows.windows(2) {
        assert_eq!(pair[0].end, pair[1].start);
    }
}

#[test]
fn neighbors_out_of_reach_are_left_alone() {
    let windows = compute_windows(&[10, 30, 50], 2, 60, 15);
    assert_eq!(bounds(&windows), vec![(0, 25), (15, 45), (35, 60)]);
}

#[test]
fn long_query_with_overlapping_matches_collapses() {
    let windows = compute_windows(&[0, 1], 9, 10, 1);
    assert_eq!(bounds(&windows), vec![(0, 5), (5, 5)]);
    assert!(windows[1].is_empty());
}

#[test]
fn zero_radius_yields_empty_windows() {
    let windows = compute_windows(&[0, 1, 2], 1, 3, 0);
    assert!(windows.iter().all(Window::is_empty));
}

#[test]
fn no_offsets_no_windows() {
    assert!(compute_windows(&[], 4, 100, 250).is_empty());
}

#[test]
fn huge_radius_does_not_overflow() {
    let windows = compute_windows(&[3], 1, 10, usize::MAX);
    assert_eq!(bounds(&windows), vec![(0, 10)]);
}
