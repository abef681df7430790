//! Results depend only on the corpus, the query and the radius.

use std::sync::Arc;
use std::thread;

use super::common::{searcher, HAMLET};

#[test]
fn repeated_queries_are_identical() {
    let s = searcher(HAMLET);
    let first = s.search_snippets("the");
    for _ in 0..5 {
        assert_eq!(s.search_snippets("the"), first);
    }
}

#[test]
fn independent_builds_agree() {
    let a = searcher(HAMLET);
    let b = searcher(HAMLET);
    assert_eq!(a.index().suffix_array(), b.index().suffix_array());
    assert_eq!(a.search("to"), b.search("to"));
}

#[test]
fn results_are_in_corpus_order() {
    let s = searcher(HAMLET);
    let snippets = s.search_snippets("to");
    assert!(!snippets.is_empty());
    for pair in snippets.windows(2) {
        assert!(pair[0].offset < pair[1].offset);
        assert!(pair[0].start <= pair[1].start);
    }
}

#[test]
fn batch_matches_one_at_a_time() {
    let s = searcher(HAMLET);
    let queries: Vec<String> = ["hamlet", "well", "zzz", "", "TO"]
        .iter()
        .map(|q| q.to_string())
        .collect();
    let batch = s.search_many(&queries);
    assert_eq!(batch.len(), queries.len());
    for (query, result) in queries.iter().zip(&batch) {
        assert_eq!(result, &s.search_snippets(query));
    }
}

#[test]
fn concurrent_readers_see_the_same_results() {
    let s = Arc::new(searcher(HAMLET));
    let expected = s.search("sleep");

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let s = Arc::clone(&s);
            thread::spawn(move || s.search("sleep"))
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.join().unwrap(), expected);
    }
}
