// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Case-insensitive substring search with context snippets.
//!
//! The corpus is loaded once, folded to lowercase, and indexed with a suffix
//! array. Each query returns one snippet of original-case text per match,
//! with neighboring snippets trimmed so they do not repeat each other.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌──────────────┐     ┌──────────────┐
//! │  corpus.rs  │────▶│  index.rs    │────▶│  search.rs   │
//! │ (text +     │     │ (SA-IS suffix│     │ (occurrences,│
//! │  folded)    │     │  array)      │     │  windows)    │
//! └─────────────┘     └──────────────┘     └──────────────┘
//!        │                   │                    │
//!        ▼                   ▼                    ▼
//! ┌─────────────────────────────────────────────────────┐
//! │                   contracts.rs                       │
//! │  (debug-build checks: sorted suffixes, valid         │
//! │   occurrences, windows inside the corpus)            │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! The HTTP boundary lives in `server` (feature `server`).
//!
//! # Usage
//!
//! ```
//! use shakesearch::{Corpus, Searcher};
//!
//! let searcher = Searcher::from_corpus(Corpus::from_text("to be or not to be"));
//! assert_eq!(searcher.search("TO"), vec!["to be o", "r not to be"]);
//! assert!(searcher.search("xyz").is_empty());
//! ```

pub mod config;
pub mod contracts;
mod corpus;
mod error;
mod index;
mod sais;
mod search;
mod types;
mod utils;

#[cfg(feature = "server")]
pub mod server;

// Re-exports for public API
pub use config::SearchConfig;
pub use corpus::Corpus;
#[cfg(feature = "server")]
pub use error::ServerError;
pub use error::LoadError;
pub use index::MatchIndex;
pub use sais::suffix_array;
pub use search::{compute_windows, Searcher};
pub use types::{Snippet, Window};
pub use utils::fold_case;
